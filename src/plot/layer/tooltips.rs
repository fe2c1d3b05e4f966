//! Layer tooltip configuration

use serde_json::Value;

use crate::Options;

/// Tooltip content of a layer
///
/// `tooltips_none()` hides tooltips; `layer_tooltips()` starts a custom one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tooltips {
    hidden: bool,
    variables: Option<Vec<String>>,
    lines: Vec<String>,
    formats: Vec<(String, String)>,
    title: Option<String>,
    anchor: Option<String>,
    min_width: Option<f64>,
    disable_splitting: bool,
}

pub fn layer_tooltips() -> Tooltips {
    Tooltips::default()
}

pub fn tooltips_none() -> Tooltips {
    Tooltips {
        hidden: true,
        ..Default::default()
    }
}

impl Tooltips {
    /// Show one line per listed variable
    pub fn variables<I, S>(mut self, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variables = Some(variables.into_iter().map(Into::into).collect());
        self
    }

    /// Add a line template, e.g. `"price|$@price"`
    pub fn line(mut self, template: impl Into<String>) -> Self {
        self.lines.push(template.into());
        self
    }

    /// Format a field (`"@price"`, `"^y"`, `"x"`) with a format pattern
    pub fn format(mut self, field: impl Into<String>, format: impl Into<String>) -> Self {
        self.formats.push((field.into(), format.into()));
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Fixed tooltip position, e.g. `"top_right"`
    pub fn anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn min_width(mut self, width: f64) -> Self {
        self.min_width = Some(width);
        self
    }

    /// Keep side tooltips of range geometries in one box
    pub fn disable_splitting(mut self) -> Self {
        self.disable_splitting = true;
        self
    }

    pub fn to_value(&self) -> Value {
        if self.hidden {
            return Value::from("none");
        }

        let mut options = Options::new();
        options.insert_opt("variables", self.variables.clone());
        if !self.lines.is_empty() {
            options.insert("lines", self.lines.clone());
        }
        if !self.formats.is_empty() {
            let formats: Vec<Value> = self
                .formats
                .iter()
                .map(|(field, format)| {
                    Options::new()
                        .with("field", field.as_str())
                        .with("format", format.as_str())
                        .into_value()
                })
                .collect();
            options.insert("formats", formats);
        }
        options.insert_opt("title", self.title.clone());
        options.insert_opt("tooltip_anchor", self.anchor.clone());
        options.insert_opt("tooltip_min_width", self.min_width);
        if self.disable_splitting {
            options.insert("disable_splitting", true);
        }
        options.into_value()
    }
}
