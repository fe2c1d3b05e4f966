//! Histogram geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::stat::BinStatParameters;
use crate::plot::layer::{position_stack, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct HistogramAesthetics {
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
    pub struct HistogramMapping {
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

/// Histogram geom - counts of a continuous variable in bins
///
/// Fragment order: [`HistogramAesthetics`], [`BinStatParameters`],
/// [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomHistogram {
    layer: LayerOptions,
    mapping: HistogramMapping,
    aesthetics: HistogramAesthetics,
    stat_parameters: BinStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_histogram() -> GeomHistogram {
    GeomHistogram {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Histogram),
            Stat::bin(),
            position_stack(None),
        ),
        mapping: HistogramMapping::default(),
        aesthetics: HistogramAesthetics::default(),
        stat_parameters: BinStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomHistogram {
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
        bins: i64,
        binwidth: Num,
        center: Num,
        boundary: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomHistogram {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomHistogram, HistogramMapping);
