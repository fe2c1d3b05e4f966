//! Line geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::ColorOption;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct LineAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct LineMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        linetype: String => "linetype",
        size: String => "size",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Line geom - connects observations in order of the x variable
///
/// Fragment order: [`LineAesthetics`], [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomLine {
    layer: LayerOptions,
    mapping: LineMapping,
    aesthetics: LineAesthetics,
    color_option: ColorOption,
}

pub fn geom_line() -> GeomLine {
    GeomLine {
        layer: LayerOptions::new(Geom::line(), Stat::identity(), position_identity()),
        mapping: LineMapping::default(),
        aesthetics: LineAesthetics::default(),
        color_option: ColorOption::default(),
    }
}

impl GeomLine {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
}

impl Capability for GeomLine {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option])
    }
}

impl_layer!(GeomLine, LineMapping);
