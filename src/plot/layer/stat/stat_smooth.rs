//! Smooth statistic layer

use serde_json::Value;

use super::{SmoothStatParameters, Stat};
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::geom::{Geom, SmoothAesthetics, SmoothMapping};
use crate::plot::layer::{position_identity, LayerOptions};
use crate::{compose, Capability, Num, Options};

/// Smooth statistic layer, drawn as a smooth geom by default
///
/// Fragment order: [`SmoothAesthetics`], [`SmoothStatParameters`],
/// [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct StatSmooth {
    layer: LayerOptions,
    mapping: SmoothMapping,
    aesthetics: SmoothAesthetics,
    stat_parameters: SmoothStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn stat_smooth() -> StatSmooth {
    StatSmooth {
        layer: LayerOptions::new(Geom::smooth(), Stat::smooth(), position_identity()),
        mapping: SmoothMapping::default(),
        aesthetics: SmoothAesthetics::default(),
        stat_parameters: SmoothStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl StatSmooth {
    forward!(aesthetics {
        x: Num,
        y: Num,
        ymin: Num,
        ymax: Num,
        size: Num,
        linetype: Value,
        color: Value,
        fill: Value,
        alpha: Num,
    });
    forward!(stat_parameters {
        method: String,
        n: i64,
        level: Num,
        se: bool,
        span: Num,
        deg: i64,
        seed: i64,
        max_n: i64,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for StatSmooth {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(StatSmooth, SmoothMapping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::geom::geom_smooth;
    use crate::plot::layer::Layer;
    use serde_json::json;

    #[test]
    fn test_stat_smooth_matches_geom_smooth() {
        let from_stat = stat_smooth()
            .method("loess")
            .span(0.3)
            .mapping(|m| m.x("displ").y("hwy"))
            .to_spec();
        let from_geom = geom_smooth()
            .method("loess")
            .span(0.3)
            .mapping(|m| m.x("displ").y("hwy"))
            .to_spec();
        assert_eq!(from_stat, from_geom);
    }

    #[test]
    fn test_stat_smooth_with_point_geom() {
        let spec = stat_smooth().geom(Geom::point()).se(false).to_spec();
        assert_eq!(
            spec.into_value(),
            json!({
                "geom": "point",
                "stat": "smooth",
                "position": "identity",
                "mapping": {},
                "se": false
            })
        );
    }
}
