//! HTML writer
//!
//! Produces either a standalone page or an embeddable fragment. Both load
//! the engine script and build the plot from the raw document into a `div`
//! with a unique id.

use uuid::Uuid;

use super::Writer;
use crate::config::FrontendConfig;
use crate::{Options, PlotError, Result};

/// Writes a plot document as HTML
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlWriter {
    script_url: String,
    standalone: bool,
}

impl HtmlWriter {
    pub fn new(script_url: impl Into<String>) -> Self {
        Self {
            script_url: script_url.into(),
            standalone: true,
        }
    }

    pub fn from_config(config: &FrontendConfig) -> Self {
        Self::new(config.script_url())
    }

    /// Emit only the plot container and scripts, without `<html>`
    pub fn fragment(mut self) -> Self {
        self.standalone = false;
        self
    }

    pub fn script_url(&self) -> &str {
        &self.script_url
    }

    fn render_body(&self, spec_json: &str, div_id: &str) -> String {
        format!(
            r#"<script type="text/javascript" data-lets-plot-script="library" src="{url}"></script>
<div id="{id}"></div>
<script type="text/javascript" data-lets-plot-script="plot">
    (function() {{
        var plotSpec = {spec};
        var plotContainer = document.getElementById("{id}");
        LetsPlot.buildPlotFromRawSpecs(plotSpec, -1, -1, plotContainer);
    }})();
</script>"#,
            url = self.script_url,
            id = div_id,
            spec = spec_json,
        )
    }
}

impl Default for HtmlWriter {
    fn default() -> Self {
        Self::from_config(&FrontendConfig::default())
    }
}

/// `</script>` inside a string literal would end the script element early
fn escape_for_script(json: &str) -> String {
    json.replace("</", "<\\/")
}

impl Writer for HtmlWriter {
    type Output = String;

    fn write(&self, spec: &Options) -> Result<String> {
        self.validate(spec)?;
        let json = serde_json::to_string(spec)
            .map_err(|e| PlotError::WriterError(format!("Failed to serialize plot JSON: {}", e)))?;
        let div_id = format!("lp-{}", Uuid::new_v4().simple());
        let body = self.render_body(&escape_for_script(&json), &div_id);

        if !self.standalone {
            return Ok(body);
        }
        Ok(format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
</head>
<body>
{}
</body>
</html>
"#,
            body
        ))
    }
}
