//! Area geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_stack, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct AreaAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct AreaMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        size: String => "size",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Area geom - filled area charts
///
/// Fragment order: [`AreaAesthetics`], [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomArea {
    layer: LayerOptions,
    mapping: AreaMapping,
    aesthetics: AreaAesthetics,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_area() -> GeomArea {
    GeomArea {
        layer: LayerOptions::new(Geom::area(), Stat::identity(), position_stack(None)),
        mapping: AreaMapping::default(),
        aesthetics: AreaAesthetics::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomArea {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomArea {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option, &self.fill_option])
    }
}

impl_layer!(GeomArea, AreaMapping);
