//! Point geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    /// Constant aesthetics of a point layer
    pub struct PointAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        shape: Value => "shape",
        size: Num => "size",
        stroke: Num => "stroke",
    }
}

capability! {
    pub struct PointParameters {
        /// Axis (`"x"`, `"y"`, `"min"`, `"max"`) that point size is relative to
        size_unit: String => "size_unit",
    }
}

capability! {
    /// Column mappings accepted by [`geom_point`]
    pub struct PointMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        shape: String => "shape",
        size: String => "size",
        stroke: String => "stroke",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Point geom - scatter plots and similar
///
/// Fragment order: [`PointAesthetics`], [`PointParameters`], [`ColorOption`],
/// [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomPoint {
    layer: LayerOptions,
    mapping: PointMapping,
    aesthetics: PointAesthetics,
    parameters: PointParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_point() -> GeomPoint {
    GeomPoint {
        layer: LayerOptions::new(Geom::point(), Stat::identity(), position_identity()),
        mapping: PointMapping::default(),
        aesthetics: PointAesthetics::default(),
        parameters: PointParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomPoint {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        shape: Value,
        size: Num,
        stroke: Num,
    });
    forward!(parameters { size_unit: String });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomPoint {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomPoint, PointMapping);
