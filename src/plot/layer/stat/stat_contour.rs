//! Contour statistic layer

use serde_json::Value;

use super::{ContourStatParameters, Stat};
use crate::capability::ColorOption;
use crate::plot::layer::geom::{ContourAesthetics, ContourMapping, Geom};
use crate::plot::layer::{position_identity, LayerOptions};
use crate::{compose, Capability, Num, Options};

/// Contour statistic layer, drawn as a contour geom by default
///
/// Fragment order: [`ContourAesthetics`],
/// [`ContourStatParameters`], [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatContour {
    layer: LayerOptions,
    mapping: ContourMapping,
    aesthetics: ContourAesthetics,
    stat_parameters: ContourStatParameters,
    color_option: ColorOption,
}

pub fn stat_contour() -> StatContour {
    StatContour {
        layer: LayerOptions::new(Geom::contour(), Stat::contour(), position_identity()),
        mapping: ContourMapping::default(),
        aesthetics: ContourAesthetics::default(),
        stat_parameters: ContourStatParameters::default(),
        color_option: ColorOption::default(),
    }
}

impl StatContour {
    forward!(aesthetics {
        x: Num,
        y: Num,
        z: Num,
        alpha: Num,
        color: Value,
        linetype: Value,
        size: Num,
    });
    forward!(stat_parameters { bins: i64, binwidth: Num });
    forward!(color_option { color_by: String });
}

impl Capability for StatContour {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.stat_parameters, &self.color_option])
    }
}

impl_layer!(StatContour, ContourMapping);
