//! Front-end configuration
//!
//! Settings shared by writers and display sinks: which engine build the
//! generated HTML loads, where file exports go and which sink the default
//! render context resolves to.
//!
//! Values come from [`FrontendConfig::default`], a JSON file, or `GGSPEC_*`
//! environment variables (applied on top of whichever base is used).

use const_format::concatcp;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{PlotError, Result};

/// Lets-Plot JS release loaded by generated HTML
pub const DEFAULT_ENGINE_VERSION: &str = "4.5.1";

/// CDN location of the engine script; `{version}` is substituted
pub const DEFAULT_CDN_TEMPLATE: &str = concatcp!(
    "https://cdn.jsdelivr.net/gh/JetBrains/lets-plot@v",
    "{version}",
    "/js-package/distr/lets-plot.min.js"
);

const ENV_SINK: &str = "GGSPEC_SINK";
const ENV_OUTPUT: &str = "GGSPEC_OUTPUT";
const ENV_ENGINE_VERSION: &str = "GGSPEC_ENGINE_VERSION";
const ENV_PRETTY: &str = "GGSPEC_PRETTY";

/// Display sink selected for the default render context
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    /// Print the JSON document to stdout
    Stdout,
    /// Write the JSON document to `output`
    Json,
    /// Write a standalone HTML page to `output`
    Html,
}

impl std::str::FromStr for SinkKind {
    type Err = PlotError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdout" => Ok(SinkKind::Stdout),
            "json" => Ok(SinkKind::Json),
            "html" => Ok(SinkKind::Html),
            other => Err(PlotError::ConfigError(format!(
                "Unknown sink '{}', expected one of: stdout, json, html",
                other
            ))),
        }
    }
}

impl std::fmt::Display for SinkKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SinkKind::Stdout => "stdout",
            SinkKind::Json => "json",
            SinkKind::Html => "html",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Engine release referenced by generated HTML
    pub engine_version: String,
    /// Script URL template, `{version}` is replaced by `engine_version`
    pub cdn_template: String,
    /// Sink used by the default render context
    pub sink: SinkKind,
    /// Output file for the `json` and `html` sinks
    pub output: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Let the notebook front-end apply its color scheme to plots
    pub apply_color_scheme: bool,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            engine_version: DEFAULT_ENGINE_VERSION.to_string(),
            cdn_template: DEFAULT_CDN_TEMPLATE.to_string(),
            sink: SinkKind::Stdout,
            output: None,
            pretty: true,
            apply_color_scheme: true,
        }
    }
}

impl FrontendConfig {
    /// Load a configuration from a JSON file; missing fields take defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|e| {
            PlotError::ConfigError(format!(
                "Failed to parse config '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Defaults overridden by `GGSPEC_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a variable lookup (`std::env::var` in practice).
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(sink) = lookup(ENV_SINK) {
            self.sink = sink.parse()?;
        }
        if let Some(output) = lookup(ENV_OUTPUT) {
            self.output = Some(PathBuf::from(output));
        }
        if let Some(version) = lookup(ENV_ENGINE_VERSION) {
            self.engine_version = version;
        }
        if let Some(pretty) = lookup(ENV_PRETTY) {
            self.pretty = match pretty.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(PlotError::ConfigError(format!(
                        "{} must be a boolean, got '{}'",
                        ENV_PRETTY, other
                    )))
                }
            };
        }
        Ok(self)
    }

    /// Resolved engine script URL
    pub fn script_url(&self) -> String {
        self.cdn_template.replace("{version}", &self.engine_version)
    }

    /// Output path required by file sinks
    pub fn require_output(&self) -> Result<&Path> {
        self.output.as_deref().ok_or_else(|| {
            PlotError::ConfigError(format!(
                "Sink '{}' needs an output path (set {} or `output`)",
                self.sink, ENV_OUTPUT
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_script_url() {
        let config = FrontendConfig::default();
        assert_eq!(
            config.script_url(),
            "https://cdn.jsdelivr.net/gh/JetBrains/lets-plot@v4.5.1/js-package/distr/lets-plot.min.js"
        );
        assert_eq!(config.sink, SinkKind::Stdout);
    }

    #[test]
    fn test_env_overrides() {
        let config = FrontendConfig::default()
            .with_env_overrides(lookup(&[
                ("GGSPEC_SINK", "html"),
                ("GGSPEC_OUTPUT", "/tmp/plot.html"),
                ("GGSPEC_ENGINE_VERSION", "4.0.0"),
                ("GGSPEC_PRETTY", "no"),
            ]))
            .unwrap();
        assert_eq!(config.sink, SinkKind::Html);
        assert_eq!(config.output, Some(PathBuf::from("/tmp/plot.html")));
        assert!(config.script_url().contains("@v4.0.0/"));
        assert!(!config.pretty);
    }

    #[test]
    fn test_env_rejects_unknown_sink() {
        let result = FrontendConfig::default().with_env_overrides(lookup(&[("GGSPEC_SINK", "window")]));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("window"));
    }

    #[test]
    fn test_env_rejects_bad_boolean() {
        let result = FrontendConfig::default().with_env_overrides(lookup(&[("GGSPEC_PRETTY", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"sink": "json", "output": "plot.json"}}"#).unwrap();

        let config = FrontendConfig::from_file(file.path()).unwrap();
        assert_eq!(config.sink, SinkKind::Json);
        assert_eq!(config.output, Some(PathBuf::from("plot.json")));
        assert_eq!(config.engine_version, DEFAULT_ENGINE_VERSION);
        assert!(config.pretty);
    }

    #[test]
    fn test_require_output() {
        let config = FrontendConfig {
            sink: SinkKind::Html,
            ..Default::default()
        };
        assert!(config.require_output().is_err());
    }
}
