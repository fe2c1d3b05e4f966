//! Point-range geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct PointRangeAesthetics {
        x: Num => "x",
        y: Num => "y",
        ymin: Num => "ymin",
        ymax: Num => "ymax",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        shape: Value => "shape",
        size: Num => "size",
        stroke: Num => "stroke",
        linewidth: Num => "linewidth",
    }
}

capability! {
    pub struct PointRangeParameters {
        /// Multiplier applied to the point size
        fatten: Num => "fatten",
    }
}

capability! {
    pub struct PointRangeMapping {
        x: String => "x",
        y: String => "y",
        ymin: String => "ymin",
        ymax: String => "ymax",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        shape: String => "shape",
        size: String => "size",
        stroke: String => "stroke",
        linewidth: String => "linewidth",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Point-range geom - a vertical interval with a point at `y`
///
/// Fragment order: [`PointRangeAesthetics`],
/// [`PointRangeParameters`], [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomPointRange {
    layer: LayerOptions,
    mapping: PointRangeMapping,
    aesthetics: PointRangeAesthetics,
    parameters: PointRangeParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_pointrange() -> GeomPointRange {
    GeomPointRange {
        layer: LayerOptions::new(
            Geom::new(GeomKind::PointRange),
            Stat::identity(),
            position_identity(),
        ),
        mapping: PointRangeMapping::default(),
        aesthetics: PointRangeAesthetics::default(),
        parameters: PointRangeParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomPointRange {
    forward!(aesthetics {
        x: Num,
        y: Num,
        ymin: Num,
        ymax: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        shape: Value,
        size: Num,
        stroke: Num,
        linewidth: Num,
    });
    forward!(parameters { fatten: Num });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomPointRange {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomPointRange, PointRangeMapping);
