//! Built-in display sinks

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use super::DisplaySink;
use crate::writer::{HtmlWriter, JsonWriter, Writer};
use crate::{Options, PlotError, Result};

/// Prints the JSON document to stdout
#[derive(Debug, Clone, Default)]
pub struct StdoutSink {
    writer: JsonWriter,
}

impl StdoutSink {
    pub fn new(writer: JsonWriter) -> Self {
        Self { writer }
    }
}

impl DisplaySink for StdoutSink {
    fn display(&self, document: &Options) -> Result<()> {
        let text = self.writer.write(document)?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", text)
            .map_err(|e| PlotError::DisplayError(format!("Failed to write to stdout: {}", e)))
    }

    fn name(&self) -> &'static str {
        "stdout"
    }
}

#[derive(Debug, Clone)]
enum FileFormat {
    Json(JsonWriter),
    Html(HtmlWriter),
}

/// Writes each document to a file, replacing earlier content
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
    format: FileFormat,
}

impl FileSink {
    pub fn json(path: impl AsRef<Path>, writer: JsonWriter) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: FileFormat::Json(writer),
        }
    }

    pub fn html(path: impl AsRef<Path>, writer: HtmlWriter) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            format: FileFormat::Html(writer),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySink for FileSink {
    fn display(&self, document: &Options) -> Result<()> {
        let content = match &self.format {
            FileFormat::Json(writer) => writer.write(document)?,
            FileFormat::Html(writer) => writer.write(document)?,
        };
        std::fs::write(&self.path, content).map_err(|e| {
            PlotError::DisplayError(format!(
                "Failed to write plot to '{}': {}",
                self.path.display(),
                e
            ))
        })?;
        tracing::info!(path = %self.path.display(), "wrote plot");
        Ok(())
    }

    fn name(&self) -> &'static str {
        match self.format {
            FileFormat::Json(_) => "json",
            FileFormat::Html(_) => "html",
        }
    }
}

/// Collects documents in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    documents: Mutex<Vec<Options>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents displayed so far, oldest first
    pub fn documents(&self) -> Vec<Options> {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DisplaySink for MemorySink {
    fn display(&self, document: &Options) -> Result<()> {
        self.documents
            .lock()
            .map_err(|_| PlotError::DisplayError("Memory sink lock poisoned".to_string()))?
            .push(document.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::geom::geom_line;
    use crate::plot::{lets_plot, Data};
    use serde_json::Value;

    fn spec() -> Options {
        (lets_plot(Data::new().column("t", [1, 2, 3])) + geom_line()).to_spec()
    }

    #[test]
    fn test_json_file_sink() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        let sink = FileSink::json(&path, JsonWriter::new(false));
        sink.display(&spec()).unwrap();

        let written: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, spec().into_value());
        assert_eq!(sink.name(), "json");
    }

    #[test]
    fn test_html_file_sink_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.html");
        let sink = FileSink::html(&path, HtmlWriter::default());
        sink.display(&spec()).unwrap();
        sink.display(&spec()).unwrap();

        let html = std::fs::read_to_string(&path).unwrap();
        assert_eq!(html.matches("<!DOCTYPE html>").count(), 1);
    }

    #[test]
    fn test_file_sink_error_is_display_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("plot.json");
        let err = FileSink::json(&path, JsonWriter::default())
            .display(&spec())
            .unwrap_err();
        assert!(matches!(err, PlotError::DisplayError(_)));
        assert!(err.to_string().contains("plot.json"));
    }

    #[test]
    fn test_sink_propagates_writer_errors() {
        let err = StdoutSink::default().display(&Options::new()).unwrap_err();
        assert!(matches!(err, PlotError::ValidationError(_)));
    }
}
