//! Error bar geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::ColorOption;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct ErrorBarAesthetics {
        x: Num => "x",
        ymin: Num => "ymin",
        ymax: Num => "ymax",
        width: Num => "width",
        alpha: Num => "alpha",
        color: Value => "color",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct ErrorBarMapping {
        x: String => "x",
        ymin: String => "ymin",
        ymax: String => "ymax",
        width: String => "width",
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

/// Error bar geom - vertical intervals with whiskers
///
/// Fragment order: [`ErrorBarAesthetics`], [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomErrorBar {
    layer: LayerOptions,
    mapping: ErrorBarMapping,
    aesthetics: ErrorBarAesthetics,
    color_option: ColorOption,
}

pub fn geom_errorbar() -> GeomErrorBar {
    GeomErrorBar {
        layer: LayerOptions::new(
            Geom::new(GeomKind::ErrorBar),
            Stat::identity(),
            position_identity(),
        ),
        mapping: ErrorBarMapping::default(),
        aesthetics: ErrorBarAesthetics::default(),
        color_option: ColorOption::default(),
    }
}

impl GeomErrorBar {
    forward!(aesthetics {
        x: Num,
        ymin: Num,
        ymax: Num,
        width: Num,
        alpha: Num,
        color: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
}

impl Capability for GeomErrorBar {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option])
    }
}

impl_layer!(GeomErrorBar, ErrorBarMapping);
