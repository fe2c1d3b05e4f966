//! Violin geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::stat::{YDensityStatAesthetics, YDensityStatParameters};
use crate::plot::layer::{position_dodge, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct ViolinAesthetics {
        x: Num => "x",
        y: Num => "y",
        violinwidth: Num => "violinwidth",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
        width: Num => "width",
    }
}

capability! {
    pub struct ViolinParameters {
        /// Draw lines at the computed quantiles
        quantile_lines: bool => "quantile_lines",
        /// `-1` draws the left half only, `1` the right half, `0` both
        show_half: Num => "show_half",
    }
}

capability! {
    pub struct ViolinMapping {
        x: String => "x",
        y: String => "y",
        violinwidth: String => "violinwidth",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        size: String => "size",
        width: String => "width",
        weight: String => "weight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Violin geom - mirrored density of y for each x
///
/// Densities come from the `ydensity` statistic; violins sharing an x are
/// dodged.
///
/// Fragment order: [`ViolinAesthetics`], [`ViolinParameters`],
/// [`YDensityStatAesthetics`], [`YDensityStatParameters`], [`ColorOption`],
/// [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomViolin {
    layer: LayerOptions,
    mapping: ViolinMapping,
    aesthetics: ViolinAesthetics,
    parameters: ViolinParameters,
    stat_aesthetics: YDensityStatAesthetics,
    stat_parameters: YDensityStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_violin() -> GeomViolin {
    GeomViolin {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Violin),
            Stat::ydensity(),
            position_dodge(None),
        ),
        mapping: ViolinMapping::default(),
        aesthetics: ViolinAesthetics::default(),
        parameters: ViolinParameters::default(),
        stat_aesthetics: YDensityStatAesthetics::default(),
        stat_parameters: YDensityStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomViolin {
    forward!(aesthetics {
        x: Num,
        y: Num,
        violinwidth: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
        width: Num,
    });
    forward!(parameters {
        quantile_lines: bool,
        show_half: Num,
    });
    forward!(stat_aesthetics { weight: Num });
    forward!(stat_parameters {
        scale: String,
        tails_cutoff: Num,
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

impl Capability for GeomViolin {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.parameters,
            &self.stat_aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomViolin, ViolinMapping);
