//! Contour geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::ColorOption;
use crate::plot::layer::stat::ContourStatParameters;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    /// Contour line aesthetics, shared with `stat_contour`
    pub struct ContourAesthetics {
        x: Num => "x",
        y: Num => "y",
        z: Num => "z",
        alpha: Num => "alpha",
        color: Value => "color",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct ContourMapping {
        x: String => "x",
        y: String => "y",
        z: String => "z",
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

/// Contour geom - iso-lines of a 3d surface given as x, y, z
///
/// Fragment order: [`ContourAesthetics`], [`ContourStatParameters`],
/// [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomContour {
    layer: LayerOptions,
    mapping: ContourMapping,
    aesthetics: ContourAesthetics,
    stat_parameters: ContourStatParameters,
    color_option: ColorOption,
}

pub fn geom_contour() -> GeomContour {
    GeomContour {
        layer: LayerOptions::new(Geom::contour(), Stat::contour(), position_identity()),
        mapping: ContourMapping::default(),
        aesthetics: ContourAesthetics::default(),
        stat_parameters: ContourStatParameters::default(),
        color_option: ColorOption::default(),
    }
}

impl GeomContour {
    forward!(aesthetics {
        x: Num,
        y: Num,
        z: Num,
        alpha: Num,
        color: Value,
        linetype: Value,
        size: Num,
    });
    forward!(stat_parameters { bins: i64, binwidth: Num });
    forward!(color_option { color_by: String });
}

impl Capability for GeomContour {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.stat_parameters, &self.color_option])
    }
}

impl_layer!(GeomContour, ContourMapping);
