//! Scale options and the scale constructors

use serde_json::Value;

use crate::plot::main::{Plot, PlotFeature};
use crate::{Capability, Options};

capability! {
    /// Options shared by every scale
    pub struct ScaleOptions {
        /// Axis or legend title
        name: String => "name",
        breaks: Value => "breaks",
        labels: Value => "labels",
        limits: Value => "limits",
        /// `[multiplicative, additive]` padding around the data range
        expand: Value => "expand",
        na_value: Value => "na_value",
        /// `"identity"`, `"log10"`, `"log2"`, `"symlog"`, `"sqrt"` or `"reverse"`
        trans: String => "trans",
        /// `"none"`, `"legend"`, `"colorbar"` or a guide document
        guide: Value => "guide",
        format: String => "format",
        /// Axis placement: `"left"`, `"right"`, `"top"`, `"bottom"` or `"both"`
        position: String => "position",
    }
}

/// A scale for one aesthetic
///
/// Fragment order: `aesthetic`, [`ScaleOptions`], then the mapper settings
/// chosen by the constructor (`discrete`, `values`, `scale_mapper_kind`, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    aesthetic: String,
    options: ScaleOptions,
    mapper: Options,
}

impl Scale {
    pub fn new(aesthetic: impl Into<String>) -> Self {
        Self {
            aesthetic: aesthetic.into(),
            options: ScaleOptions::default(),
            mapper: Options::new(),
        }
    }

    pub fn aesthetic(&self) -> &str {
        &self.aesthetic
    }

    forward!(options {
        name: String,
        breaks: Value,
        labels: Value,
        limits: Value,
        expand: Value,
        na_value: Value,
        trans: String,
        guide: Value,
        format: String,
        position: String,
    });

    /// Set a mapper setting not covered by a dedicated method
    pub fn parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.mapper.insert(key, value);
        self
    }

    /// Output range of a size or alpha scale
    pub fn range(self, low: f64, high: f64) -> Self {
        self.parameter("range", vec![low, high])
    }

    /// `-1` reverses the palette order of a brewer scale
    pub fn direction(self, direction: i64) -> Self {
        self.parameter("direction", direction)
    }

    /// Brewer palette type: `"seq"`, `"div"` or `"qual"`
    pub fn brewer_type(self, kind: impl Into<String>) -> Self {
        self.parameter("type", kind.into())
    }

    /// Whether a shape scale uses solid shapes
    pub fn solid(self, solid: bool) -> Self {
        self.parameter("solid", solid)
    }
}

impl Capability for Scale {
    fn fragment(&self) -> Options {
        Options::new()
            .with("aesthetic", self.aesthetic.as_str())
            .merge(self.options.fragment())
            .merge(self.mapper.clone())
    }
}

impl PlotFeature for Scale {
    fn add_to(self, plot: &mut Plot) {
        plot.push_scale(self.fragment());
    }
}

fn discrete(aesthetic: &str) -> Scale {
    Scale::new(aesthetic).parameter("discrete", true)
}

fn log10(aesthetic: &str) -> Scale {
    Scale::new(aesthetic).trans("log10")
}

fn manual(aesthetic: &str, values: Value) -> Scale {
    Scale::new(aesthetic).parameter("values", values)
}

fn gradient(aesthetic: &str, low: Option<String>, high: Option<String>) -> Scale {
    let mut scale = Scale::new(aesthetic).parameter("scale_mapper_kind", "color_gradient");
    scale.mapper.insert_opt("low", low);
    scale.mapper.insert_opt("high", high);
    scale
}

fn brewer(aesthetic: &str, palette: Option<Value>) -> Scale {
    let mut scale = Scale::new(aesthetic).parameter("scale_mapper_kind", "color_brewer");
    scale.mapper.insert_opt("palette", palette);
    scale
}

pub fn scale_x_continuous() -> Scale {
    Scale::new("x")
}

pub fn scale_y_continuous() -> Scale {
    Scale::new("y")
}

pub fn scale_x_discrete() -> Scale {
    discrete("x")
}

pub fn scale_y_discrete() -> Scale {
    discrete("y")
}

pub fn scale_x_log10() -> Scale {
    log10("x")
}

pub fn scale_y_log10() -> Scale {
    log10("y")
}

/// Map discrete values to the given colors, in order or by name
pub fn scale_color_manual(values: impl Into<Value>) -> Scale {
    manual("color", values.into())
}

pub fn scale_fill_manual(values: impl Into<Value>) -> Scale {
    manual("fill", values.into())
}

/// Two-color gradient; either end may be left to the engine's default
pub fn scale_color_gradient<'a>(
    low: impl Into<Option<&'a str>>,
    high: impl Into<Option<&'a str>>,
) -> Scale {
    gradient(
        "color",
        low.into().map(str::to_string),
        high.into().map(str::to_string),
    )
}

pub fn scale_fill_gradient<'a>(
    low: impl Into<Option<&'a str>>,
    high: impl Into<Option<&'a str>>,
) -> Scale {
    gradient(
        "fill",
        low.into().map(str::to_string),
        high.into().map(str::to_string),
    )
}

/// ColorBrewer palette, given by name (`"Set1"`) or by index
pub fn scale_color_brewer(palette: impl Into<Option<Value>>) -> Scale {
    brewer("color", palette.into())
}

pub fn scale_fill_brewer(palette: impl Into<Option<Value>>) -> Scale {
    brewer("fill", palette.into())
}

pub fn scale_size() -> Scale {
    Scale::new("size")
}

pub fn scale_alpha() -> Scale {
    Scale::new("alpha")
}

pub fn scale_shape() -> Scale {
    Scale::new("shape")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_continuous_scale() {
        let scale = scale_x_continuous()
            .name("Engine displacement")
            .limits(vec![1.0, 7.0])
            .format(".1f");
        assert_eq!(
            scale.fragment().into_value(),
            json!({
                "aesthetic": "x",
                "name": "Engine displacement",
                "limits": [1.0, 7.0],
                "format": ".1f"
            })
        );
    }

    #[test]
    fn test_discrete_and_log10() {
        assert_eq!(
            scale_y_discrete().fragment().into_value(),
            json!({"aesthetic": "y", "discrete": true})
        );
        assert_eq!(
            scale_x_log10().fragment().into_value(),
            json!({"aesthetic": "x", "trans": "log10"})
        );
    }

    #[test]
    fn test_manual_values_and_options_precede_mapper() {
        let scale = scale_fill_manual(vec!["#e41a1c", "#377eb8"]).name("Condition");
        let fragment = scale.fragment();
        let keys: Vec<&str> = fragment.keys().collect();
        assert_eq!(keys, vec!["aesthetic", "name", "values"]);
        assert_eq!(fragment.get("values"), Some(&json!(["#e41a1c", "#377eb8"])));
    }

    #[test]
    fn test_gradient() {
        assert_eq!(
            scale_color_gradient("white", "darkblue").fragment().into_value(),
            json!({
                "aesthetic": "color",
                "scale_mapper_kind": "color_gradient",
                "low": "white",
                "high": "darkblue"
            })
        );
        let partial = scale_fill_gradient(None, "red").fragment();
        assert!(!partial.contains_key("low"));
    }

    #[test]
    fn test_brewer() {
        let scale = scale_fill_brewer(json!("Set1")).direction(-1);
        assert_eq!(
            scale.fragment().into_value(),
            json!({
                "aesthetic": "fill",
                "scale_mapper_kind": "color_brewer",
                "palette": "Set1",
                "direction": -1
            })
        );
        assert!(!scale_color_brewer(None).fragment().contains_key("palette"));
    }

    #[test]
    fn test_size_range_and_shape_solid() {
        assert_eq!(
            scale_size().range(1.0, 6.0).fragment().into_value(),
            json!({"aesthetic": "size", "range": [1.0, 6.0]})
        );
        assert_eq!(
            scale_shape().solid(false).fragment().into_value(),
            json!({"aesthetic": "shape", "solid": false})
        );
    }
}
