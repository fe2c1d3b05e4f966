//! Text geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::ColorOption;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct TextAesthetics {
        x: Num => "x",
        y: Num => "y",
        label: Value => "label",
        alpha: Num => "alpha",
        color: Value => "color",
        size: Num => "size",
        family: String => "family",
        fontface: String => "fontface",
        hjust: Value => "hjust",
        vjust: Value => "vjust",
        angle: Num => "angle",
        lineheight: Num => "lineheight",
    }
}

capability! {
    pub struct TextParameters {
        /// Format pattern applied to the label, e.g. `".2f"` or `"{d} items"`
        label_format: String => "label_format",
        /// Text shown for missing labels
        na_text: String => "na_text",
        /// Unit of `size`: `"x"` or `"y"` makes it relative to the axis
        size_unit: String => "size_unit",
        check_overlap: bool => "check_overlap",
    }
}

capability! {
    pub struct TextMapping {
        x: String => "x",
        y: String => "y",
        label: String => "label",
        alpha: String => "alpha",
        color: String => "color",
        size: String => "size",
        family: String => "family",
        fontface: String => "fontface",
        hjust: String => "hjust",
        vjust: String => "vjust",
        angle: String => "angle",
        lineheight: String => "lineheight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Text geom - labels drawn at x/y
///
/// Fragment order: [`TextAesthetics`], [`TextParameters`], [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomText {
    layer: LayerOptions,
    mapping: TextMapping,
    aesthetics: TextAesthetics,
    parameters: TextParameters,
    color_option: ColorOption,
}

pub fn geom_text() -> GeomText {
    GeomText {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Text),
            Stat::identity(),
            position_identity(),
        ),
        mapping: TextMapping::default(),
        aesthetics: TextAesthetics::default(),
        parameters: TextParameters::default(),
        color_option: ColorOption::default(),
    }
}

impl GeomText {
    forward!(aesthetics {
        x: Num,
        y: Num,
        label: Value,
        alpha: Num,
        color: Value,
        size: Num,
        family: String,
        fontface: String,
        hjust: Value,
        vjust: Value,
        angle: Num,
        lineheight: Num,
    });
    forward!(parameters {
        label_format: String,
        na_text: String,
        size_unit: String,
        check_overlap: bool,
    });
    forward!(color_option { color_by: String });
}

impl Capability for GeomText {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.parameters, &self.color_option])
    }
}

impl_layer!(GeomText, TextMapping);
