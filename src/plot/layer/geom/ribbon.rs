//! Ribbon geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct RibbonAesthetics {
        x: Num => "x",
        ymin: Num => "ymin",
        ymax: Num => "ymax",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct RibbonMapping {
        x: String => "x",
        ymin: String => "ymin",
        ymax: String => "ymax",
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

/// Ribbon geom - area between `ymin` and `ymax` at each x
///
/// Fragment order: [`RibbonAesthetics`], [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomRibbon {
    layer: LayerOptions,
    mapping: RibbonMapping,
    aesthetics: RibbonAesthetics,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_ribbon() -> GeomRibbon {
    GeomRibbon {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Ribbon),
            Stat::identity(),
            position_identity(),
        ),
        mapping: RibbonMapping::default(),
        aesthetics: RibbonAesthetics::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomRibbon {
    forward!(aesthetics {
        x: Num,
        ymin: Num,
        ymax: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomRibbon {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option, &self.fill_option])
    }
}

impl_layer!(GeomRibbon, RibbonMapping);
