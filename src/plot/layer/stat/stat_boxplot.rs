//! Boxplot statistic layer

use serde_json::Value;

use super::{BoxplotStatAesthetics, BoxplotStatParameters, Stat};
use crate::plot::layer::geom::{BoxplotAesthetics, BoxplotMapping, BoxplotParameters, Geom};
use crate::plot::layer::{position_dodge, LayerOptions};
use crate::{compose, Capability, Num, Options};

/// Boxplot statistic layer, drawn as a boxplot geom by default
///
/// Fragment order: [`BoxplotAesthetics`], [`BoxplotParameters`],
/// [`BoxplotStatAesthetics`], [`BoxplotStatParameters`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatBoxplot {
    layer: LayerOptions,
    mapping: BoxplotMapping,
    aesthetics: BoxplotAesthetics,
    parameters: BoxplotParameters,
    stat_aesthetics: BoxplotStatAesthetics,
    stat_parameters: BoxplotStatParameters,
}

pub fn stat_boxplot() -> StatBoxplot {
    StatBoxplot {
        layer: LayerOptions::new(Geom::boxplot(), Stat::boxplot(), position_dodge(None)),
        mapping: BoxplotMapping::default(),
        aesthetics: BoxplotAesthetics::default(),
        parameters: BoxplotParameters::default(),
        stat_aesthetics: BoxplotStatAesthetics::default(),
        stat_parameters: BoxplotStatParameters::default(),
    }
}

impl StatBoxplot {
    forward!(aesthetics {
        x: Num,
        y: Num,
        lower: Num,
        middle: Num,
        upper: Num,
        ymin: Num,
        ymax: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        size: Num,
        linetype: Value,
        shape: Value,
    });
    forward!(parameters {
        outlier_color: Value,
        outlier_fill: Value,
        outlier_shape: Value,
        outlier_size: Num,
        outlier_stroke: Num,
        fatten: Num,
        whisker_width: Num,
    });
    forward!(stat_aesthetics { width: Num, weight: Num });
    forward!(stat_parameters { var_width: bool, coef: Num });
}

impl Capability for StatBoxplot {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.parameters,
            &self.stat_aesthetics,
            &self.stat_parameters,
        ])
    }
}

impl_layer!(StatBoxplot, BoxplotMapping);
