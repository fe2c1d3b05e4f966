//! Smooth geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::stat::SmoothStatParameters;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    /// Fitted line and confidence band aesthetics, shared with `stat_smooth`
    pub struct SmoothAesthetics {
        x: Num => "x",
        y: Num => "y",
        ymin: Num => "ymin",
        ymax: Num => "ymax",
        size: Num => "size",
        linetype: Value => "linetype",
        color: Value => "color",
        fill: Value => "fill",
        alpha: Num => "alpha",
    }
}

capability! {
    pub struct SmoothMapping {
        x: String => "x",
        y: String => "y",
        ymin: String => "ymin",
        ymax: String => "ymax",
        size: String => "size",
        linetype: String => "linetype",
        color: String => "color",
        fill: String => "fill",
        alpha: String => "alpha",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Smooth geom - fitted conditional mean with a confidence band
///
/// Fragment order: [`SmoothAesthetics`], [`SmoothStatParameters`],
/// [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomSmooth {
    layer: LayerOptions,
    mapping: SmoothMapping,
    aesthetics: SmoothAesthetics,
    stat_parameters: SmoothStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_smooth() -> GeomSmooth {
    GeomSmooth {
        layer: LayerOptions::new(Geom::smooth(), Stat::smooth(), position_identity()),
        mapping: SmoothMapping::default(),
        aesthetics: SmoothAesthetics::default(),
        stat_parameters: SmoothStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomSmooth {
    forward!(aesthetics {
        x: Num,
        y: Num,
        ymin: Num,
        ymax: Num,
        size: Num,
        linetype: Value,
        color: Value,
        fill: Value,
        alpha: Num,
    });
    forward!(stat_parameters {
        method: String,
        n: i64,
        level: Num,
        se: bool,
        span: Num,
        deg: i64,
        seed: i64,
        max_n: i64,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomSmooth {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomSmooth, SmoothMapping);
