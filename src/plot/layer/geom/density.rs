//! Density geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::stat::DensityStatParameters;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct DensityAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
        weight: Num => "weight",
    }
}

capability! {
    pub struct DensityMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        size: String => "size",
        weight: String => "weight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Density geom - smoothed kernel density estimate
///
/// Fragment order: [`DensityAesthetics`], [`DensityStatParameters`],
/// [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomDensity {
    layer: LayerOptions,
    mapping: DensityMapping,
    aesthetics: DensityAesthetics,
    stat_parameters: DensityStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_density() -> GeomDensity {
    GeomDensity {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Density),
            Stat::density(),
            position_identity(),
        ),
        mapping: DensityMapping::default(),
        aesthetics: DensityAesthetics::default(),
        stat_parameters: DensityStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomDensity {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
        weight: Num,
    });
    forward!(stat_parameters {
        bw: Value,
        kernel: String,
        n: i64,
        trim: bool,
        adjust: Num,
        full_scan_max: i64,
        quantiles: Vec<f64>,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomDensity {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomDensity, DensityMapping);
