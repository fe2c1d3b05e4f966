//! Path geom implementation

use serde_json::Value;

use super::{Geom, GeomKind};
use crate::capability::ColorOption;
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct PathAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct PathParameters {
        /// Draw straight segments on map projections
        flat: bool => "flat",
        /// Draw great-circle segments on map projections
        geodesic: bool => "geodesic",
    }
}

capability! {
    pub struct PathMapping {
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

/// Path geom - connects observations in the order they appear in the data
///
/// Fragment order: [`PathAesthetics`], [`PathParameters`], [`ColorOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomPath {
    layer: LayerOptions,
    mapping: PathMapping,
    aesthetics: PathAesthetics,
    parameters: PathParameters,
    color_option: ColorOption,
}

pub fn geom_path() -> GeomPath {
    GeomPath {
        layer: LayerOptions::new(
            Geom::new(GeomKind::Path),
            Stat::identity(),
            position_identity(),
        ),
        mapping: PathMapping::default(),
        aesthetics: PathAesthetics::default(),
        parameters: PathParameters::default(),
        color_option: ColorOption::default(),
    }
}

impl GeomPath {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        linetype: Value,
        size: Num,
    });
    forward!(parameters { flat: bool, geodesic: bool });
    forward!(color_option { color_by: String });
}

impl Capability for GeomPath {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.parameters, &self.color_option])
    }
}

impl_layer!(GeomPath, PathMapping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::Layer;

    #[test]
    fn test_path_declared_order() {
        let sealed = geom_path()
            .color_by("paint_a")
            .geodesic(true)
            .alpha(0.5)
            .mapping(|m| m.x("lon").y("lat").paint_a("speed"))
            .seal();
        let keys: Vec<&str> = sealed.keys().collect();
        assert_eq!(keys, vec!["mapping", "alpha", "geodesic", "color_by"]);
    }
}
