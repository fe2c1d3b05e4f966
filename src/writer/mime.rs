//! Notebook MIME bundle writer
//!
//! A notebook front-end that knows the engine renders the
//! `application/plot+json` entry itself; anything else falls back to the
//! `text/html` fragment.

use serde_json::Value;

use super::{HtmlWriter, Writer};
use crate::config::FrontendConfig;
use crate::{Options, Result};

/// MIME type of the raw plot document in a display bundle
pub const PLOT_JSON_MIME: &str = "application/plot+json";

/// Tag identifying the payload for the front-end extension
pub const SPEC_OUTPUT_TYPE: &str = "lets_plot_spec";

/// Writes `{"text/html": ..., "application/plot+json": {...}}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeBundleWriter {
    html: HtmlWriter,
    apply_color_scheme: bool,
}

impl MimeBundleWriter {
    pub fn new(html: HtmlWriter, apply_color_scheme: bool) -> Self {
        Self {
            html: html.fragment(),
            apply_color_scheme,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(HtmlWriter::from_config(config), config.apply_color_scheme)
    }
}

impl Default for MimeBundleWriter {
    fn default() -> Self {
        Self::from_config(&FrontendConfig::default())
    }
}

impl Writer for MimeBundleWriter {
    type Output = Options;

    fn write(&self, spec: &Options) -> Result<Options> {
        let html = self.html.write(spec)?;
        let payload = Options::new()
            .with("output_type", SPEC_OUTPUT_TYPE)
            .with("output", spec.clone())
            .with("apply_color_scheme", self.apply_color_scheme);
        Ok(Options::new()
            .with("text/html", Value::String(html))
            .with(PLOT_JSON_MIME, payload))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::geom::geom_bar;
    use crate::plot::{lets_plot, Data};
    use serde_json::json;

    #[test]
    fn test_bundle_shape() {
        let spec = (lets_plot(Data::new()) + geom_bar()).to_spec();
        let bundle = MimeBundleWriter::default().write(&spec).unwrap();

        let keys: Vec<&str> = bundle.keys().collect();
        assert_eq!(keys, vec!["text/html", "application/plot+json"]);

        let payload = bundle.get(PLOT_JSON_MIME).unwrap();
        assert_eq!(payload["output_type"], json!("lets_plot_spec"));
        assert_eq!(payload["apply_color_scheme"], json!(true));
        assert_eq!(payload["output"], spec.clone().into_value());

        let html = bundle.get("text/html").and_then(|v| v.as_str()).unwrap();
        assert!(!html.contains("<html"));
    }

    #[test]
    fn test_color_scheme_from_config() {
        let config = FrontendConfig {
            apply_color_scheme: false,
            ..Default::default()
        };
        let spec = (lets_plot(Data::new()) + geom_bar()).to_spec();
        let bundle = MimeBundleWriter::from_config(&config).write(&spec).unwrap();
        assert_eq!(
            bundle.get(PLOT_JSON_MIME).unwrap()["apply_color_scheme"],
            json!(false)
        );
    }
}
