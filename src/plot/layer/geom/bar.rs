//! Bar geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_stack, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options};

capability! {
    pub struct BarAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
        width: Num => "width",
        weight: Num => "weight",
    }
}

capability! {
    /// Column mappings accepted by [`geom_bar`]
    pub struct BarMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        size: String => "size",
        width: String => "width",
        weight: String => "weight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Bar geom - bar charts
///
/// Counts cases at each x position by default (`stat: count`) and stacks
/// bars sharing an x position.
///
/// Fragment order: [`BarAesthetics`], [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomBar {
    layer: LayerOptions,
    mapping: BarMapping,
    aesthetics: BarAesthetics,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_bar() -> GeomBar {
    GeomBar {
        layer: LayerOptions::new(Geom::bar(), Stat::count(), position_stack(None)),
        mapping: BarMapping::default(),
        aesthetics: BarAesthetics::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomBar {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
        width: Num,
        weight: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });
}

impl Capability for GeomBar {
    fn fragment(&self) -> Options {
        compose(&[&self.aesthetics, &self.color_option, &self.fill_option])
    }
}

impl_layer!(GeomBar, BarMapping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::Layer;
    use serde_json::json;

    #[test]
    fn test_bar_seals_only_supplied_keys() {
        let bar = geom_bar()
            .color("dark_green")
            .alpha(0.3)
            .mapping(|m| m.x("type").fill("cond"));

        let sealed = bar.seal();
        let keys: Vec<&str> = sealed.keys().collect();
        // BarAesthetics declares alpha before color
        assert_eq!(keys, vec!["mapping", "alpha", "color"]);
        assert_eq!(
            sealed.into_value(),
            json!({
                "mapping": {"x": "type", "fill": "cond"},
                "color": "dark_green",
                "alpha": 0.3
            })
        );
    }

    #[test]
    fn test_bar_is_deterministic() {
        let build = || {
            geom_bar()
                .fill("steelblue")
                .width(0.5)
                .fill_by("paint_a")
                .mapping(|m| m.x("class"))
        };
        assert_eq!(build().seal().to_string(), build().seal().to_string());
        assert_eq!(build().to_spec().to_string(), build().to_spec().to_string());
    }

    #[test]
    fn test_bar_numbers_verbatim() {
        let sealed = geom_bar().size(3).width(0.5).alpha(f64::NAN).seal();
        assert_eq!(sealed.to_string(), r#"{"mapping":{},"size":3,"width":0.5}"#);
    }

    #[test]
    fn test_bar_defaults() {
        let spec = geom_bar().to_spec();
        assert_eq!(spec.get("stat"), Some(&json!("count")));
        assert_eq!(spec.get("position"), Some(&json!("stack")));
    }
}
