//! Boxplot geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::stat::{BoxplotStatAesthetics, BoxplotStatParameters};
use crate::plot::layer::{position_dodge, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    /// Box and whisker aesthetics, shared with `stat_boxplot`
    pub struct BoxplotAesthetics {
        x: Num => "x",
        y: Num => "y",
        lower: Num => "lower",
        middle: Num => "middle",
        upper: Num => "upper",
        ymin: Num => "ymin",
        ymax: Num => "ymax",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        size: Num => "size",
        linetype: Value => "linetype",
        shape: Value => "shape",
    }
}

capability! {
    /// Outlier styling and box proportions
    pub struct BoxplotParameters {
        outlier_color: Value => "outlier_color",
        outlier_fill: Value => "outlier_fill",
        outlier_shape: Value => "outlier_shape",
        outlier_size: Num => "outlier_size",
        outlier_stroke: Num => "outlier_stroke",
        /// Multiplier applied to the median line size
        fatten: Num => "fatten",
        whisker_width: Num => "whisker_width",
    }
}

capability! {
    pub struct BoxplotMapping {
        x: String => "x",
        y: String => "y",
        lower: String => "lower",
        middle: String => "middle",
        upper: String => "upper",
        ymin: String => "ymin",
        ymax: String => "ymax",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        size: String => "size",
        linetype: String => "linetype",
        shape: String => "shape",
        width: String => "width",
        weight: String => "weight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Boxplot geom - box and whisker plots
///
/// Fragment order: [`BoxplotAesthetics`], [`BoxplotParameters`],
/// [`BoxplotStatAesthetics`], [`BoxplotStatParameters`], [`ColorOption`],
/// [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomBoxplot {
    layer: LayerOptions,
    mapping: BoxplotMapping,
    aesthetics: BoxplotAesthetics,
    parameters: BoxplotParameters,
    stat_aesthetics: BoxplotStatAesthetics,
    stat_parameters: BoxplotStatParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_boxplot() -> GeomBoxplot {
    GeomBoxplot {
        layer: LayerOptions::new(Geom::boxplot(), Stat::boxplot(), position_dodge(None)),
        mapping: BoxplotMapping::default(),
        aesthetics: BoxplotAesthetics::default(),
        parameters: BoxplotParameters::default(),
        stat_aesthetics: BoxplotStatAesthetics::default(),
        stat_parameters: BoxplotStatParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomBoxplot {
    forward!(aesthetics {
        x: Num,
        y: Num,
        lower: Num,
        middle: Num,
        upper: Num,
        ymin: Num,
        ymax: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        size: Num,
        linetype: Value,
        shape: Value,
    });
    forward!(parameters {
        outlier_color: Value,
        outlier_fill: Value,
        outlier_shape: Value,
        outlier_size: Num,
        outlier_stroke: Num,
        fatten: Num,
        whisker_width: Num,
    });
    forward!(stat_aesthetics { width: Num, weight: Num });
    forward!(stat_parameters { var_width: bool, coef: Num });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomBoxplot {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.parameters,
            &self.stat_aesthetics,
            &self.stat_parameters,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomBoxplot, BoxplotMapping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::Layer;
    use serde_json::json;

    #[test]
    fn test_boxplot_spec() {
        let spec = geom_boxplot()
            .outlier_color("red")
            .outlier_shape(1)
            .coef(1.5)
            .var_width(false)
            .mapping(|m| m.x("class").y("hwy"))
            .to_spec();
        assert_eq!(spec.get("geom"), Some(&json!("boxplot")));
        assert_eq!(spec.get("stat"), Some(&json!("boxplot")));
        assert_eq!(spec.get("position"), Some(&json!("dodge")));
        assert_eq!(spec.get("outlier_color"), Some(&json!("red")));
        assert_eq!(spec.get("outlier_shape"), Some(&json!(1)));
        assert_eq!(spec.get("coef"), Some(&json!(1.5)));
        assert_eq!(spec.get("var_width"), Some(&json!(false)));
        assert!(!spec.contains_key("fatten"));
    }
}
