//! Tile geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct TileAesthetics {
        x: Num => "x",
        y: Num => "y",
        width: Num => "width",
        height: Num => "height",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct TileMapping {
        x: String => "x",
        y: String => "y",
        width: String => "width",
        height: String => "height",
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

/// Tile geom - rectangles centred on x/y, e.g. heatmaps
///
/// Fragment order: [`TileAesthetics`], [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomTile {
    layer: LayerOptions,
    mapping: TileMapping,
    aesthetics: TileAesthetics,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_tile() -> GeomTile {
    GeomTile {
        layer: LayerOptions::new(Geom::tile(), Stat::identity(), position_identity()),
        mapping: TileMapping::default(),
        aesthetics: TileAesthetics::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomTile {
    forward!(aesthetics {
        x: Num,
        y: Num,
        width: Num,
        height: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomTile {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option, &self.fill_option])
    }
}

impl_layer!(GeomTile, TileMapping);
