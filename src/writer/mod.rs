//! Output writers for plot documents
//!
//! A writer turns a finished plot document into a concrete output format.
//!
//! # Example
//!
//! ```rust,ignore
//! use ggspec::writer::{HtmlWriter, Writer};
//!
//! let writer = HtmlWriter::default();
//! let html = writer.write(&plot.to_spec())?;
//! ```

mod html;
mod json;
mod mime;

pub use html::HtmlWriter;
pub use json::JsonWriter;
pub use mime::{MimeBundleWriter, PLOT_JSON_MIME, SPEC_OUTPUT_TYPE};

use crate::{Options, PlotError, Result};

/// Trait for plot document writers
pub trait Writer {
    /// The output type produced by this writer
    type Output;

    /// Serialize a plot document
    fn write(&self, spec: &Options) -> Result<Self::Output>;

    /// Check that the document is a plot the engine can take
    ///
    /// The default implementation requires `kind: "plot"` and a `layers`
    /// array.
    fn validate(&self, spec: &Options) -> Result<()> {
        match spec.get("kind").and_then(|kind| kind.as_str()) {
            Some("plot") => {}
            Some(other) => {
                return Err(PlotError::ValidationError(format!(
                    "Unsupported document kind '{}', expected 'plot'",
                    other
                )))
            }
            None => {
                return Err(PlotError::ValidationError(
                    "Document has no 'kind'".to_string(),
                ))
            }
        }
        if !spec.get("layers").map_or(false, |layers| layers.is_array()) {
            return Err(PlotError::ValidationError(
                "Plot document has no 'layers' array".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_rejects_other_documents() {
        let writer = JsonWriter::default();
        let not_a_plot = Options::new().with("kind", "subplots").with("layers", json!([]));
        assert!(matches!(
            writer.validate(&not_a_plot),
            Err(PlotError::ValidationError(_))
        ));

        let no_layers = Options::new().with("kind", "plot");
        assert!(writer.validate(&no_layers).is_err());

        let plot = Options::new().with("kind", "plot").with("layers", json!([]));
        assert!(writer.validate(&plot).is_ok());
    }
}
