//! JSON writer

use super::Writer;
use crate::{Options, PlotError, Result};

/// Serializes the plot document as JSON text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonWriter {
    pretty: bool,
}

impl JsonWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize any document without checking that it is a plot
    pub fn serialize(&self, document: &Options) -> Result<String> {
        let text = if self.pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };
        text.map_err(|e| PlotError::WriterError(format!("Failed to serialize JSON: {}", e)))
    }
}

impl Default for JsonWriter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Writer for JsonWriter {
    type Output = String;

    fn write(&self, spec: &Options) -> Result<String> {
        self.validate(spec)?;
        self.serialize(spec)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::geom::geom_point;
    use crate::plot::{lets_plot, Data};
    use serde_json::Value;

    #[test]
    fn test_compact_output_keeps_key_order() {
        let spec = (lets_plot(Data::new()) + geom_point().size(2.0)).to_spec();
        let text = JsonWriter::new(false).write(&spec).unwrap();
        assert!(text.starts_with(r#"{"kind":"plot","data":{},"mapping":{},"layers":"#));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn test_pretty_output_parses_back() {
        let spec = (lets_plot(Data::new().column("x", [1, 2])) + geom_point()).to_spec();
        let text = JsonWriter::default().write(&spec).unwrap();
        assert!(text.contains('\n'));
        let parsed: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, spec.into_value());
    }
}
