//! Display bridge
//!
//! A finished plot document is handed to a [`DisplaySink`]. Callers pass a
//! [`RenderContext`] explicitly, or use the process-wide default context,
//! which is installed once or resolved lazily from [`FrontendConfig`].

mod sinks;

pub use sinks::{FileSink, MemorySink, StdoutSink};

use std::sync::{Arc, OnceLock};

use crate::config::{FrontendConfig, SinkKind};
use crate::writer::{HtmlWriter, JsonWriter};
use crate::{Options, PlotError, Result};

/// Destination of finished plot documents
pub trait DisplaySink: Send + Sync {
    fn display(&self, document: &Options) -> Result<()>;

    /// Short name used in logs
    fn name(&self) -> &'static str;
}

/// The sink plots are displayed through
#[derive(Clone)]
pub struct RenderContext {
    sink: Arc<dyn DisplaySink>,
}

impl RenderContext {
    pub fn new(sink: Arc<dyn DisplaySink>) -> Self {
        Self { sink }
    }

    /// Build the sink selected by the configuration
    pub fn from_config(config: &FrontendConfig) -> Result<Self> {
        let json = JsonWriter::new(config.pretty);
        let sink: Arc<dyn DisplaySink> = match config.sink {
            SinkKind::Stdout => Arc::new(StdoutSink::new(json)),
            SinkKind::Json => Arc::new(FileSink::json(config.require_output()?, json)),
            SinkKind::Html => Arc::new(FileSink::html(
                config.require_output()?,
                HtmlWriter::from_config(config),
            )),
        };
        Ok(Self::new(sink))
    }

    pub fn display(&self, document: &Options) -> Result<()> {
        tracing::debug!(sink = self.sink.name(), keys = document.len(), "displaying plot");
        self.sink.display(document)
    }

    pub fn sink_name(&self) -> &'static str {
        self.sink.name()
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("sink", &self.sink.name())
            .finish()
    }
}

static DEFAULT_CONTEXT: OnceLock<RenderContext> = OnceLock::new();

/// Install the process-wide default context
///
/// The default can be set once; later attempts are rejected and leave the
/// installed context in place.
pub fn install(context: RenderContext) -> Result<()> {
    DEFAULT_CONTEXT.set(context).map_err(|rejected| {
        tracing::warn!(
            rejected = rejected.sink_name(),
            "default render context is already set"
        );
        PlotError::DisplayError("Default render context is already set".to_string())
    })
}

/// The process-wide default context
///
/// Resolved on first use from `GGSPEC_*` environment variables unless one
/// was installed before.
pub fn current() -> Result<&'static RenderContext> {
    if let Some(context) = DEFAULT_CONTEXT.get() {
        return Ok(context);
    }
    let context = RenderContext::from_config(&FrontendConfig::from_env()?)?;
    tracing::debug!(sink = context.sink_name(), "resolved default render context");
    Ok(DEFAULT_CONTEXT.get_or_init(|| context))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_context_forwards_to_sink() {
        let sink = Arc::new(MemorySink::new());
        let context = RenderContext::new(sink.clone());
        let document = Options::new().with("kind", "plot").with("layers", json!([]));
        context.display(&document).unwrap();
        context.display(&document).unwrap();
        assert_eq!(sink.documents(), vec![document.clone(), document]);
        assert_eq!(context.sink_name(), "memory");
    }

    #[test]
    fn test_from_config_requires_output_for_files() {
        let config = FrontendConfig {
            sink: SinkKind::Html,
            output: None,
            ..Default::default()
        };
        let err = RenderContext::from_config(&config).unwrap_err();
        assert!(matches!(err, PlotError::ConfigError(_)));

        let stdout = RenderContext::from_config(&FrontendConfig::default()).unwrap();
        assert_eq!(stdout.sink_name(), "stdout");
    }

    #[test]
    fn test_default_context_set_once() {
        let first = Arc::new(MemorySink::new());
        // Another test may have resolved the default already
        let installed = install(RenderContext::new(first.clone())).is_ok();

        let second = install(RenderContext::new(Arc::new(MemorySink::new())));
        assert!(matches!(second, Err(PlotError::DisplayError(_))));

        let context = current().unwrap();
        if installed {
            context.display(&Options::new()).unwrap();
            assert_eq!(first.documents().len(), 1);
        }
    }
}
