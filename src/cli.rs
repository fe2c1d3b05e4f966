/*!
ggspec Command Line Interface

Renders saved plot documents to JSON or HTML and builds a demo plot.
*/

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ggspec::prelude::*;
use ggspec::{FrontendConfig, VERSION};

#[derive(Parser)]
#[command(name = "ggspec")]
#[command(about = "Typed grammar-of-graphics plot specifications for Lets-Plot")]
#[command(version = VERSION)]
pub struct Cli {
    /// JSON configuration file (GGSPEC_* variables override it)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a plot document stored as JSON
    Render {
        /// Path to the plot document
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Html)]
        format: OutputFormat,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Build the bar/line/point demo plot
    Demo {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,

        /// Output file path (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plot document as JSON
    Json,
    /// Standalone HTML page
    Html,
    /// Notebook MIME bundle as JSON
    Mime,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<FrontendConfig> {
    let base = match path {
        Some(path) => FrontendConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FrontendConfig::default(),
    };
    Ok(base.with_env_overrides(|key| std::env::var(key).ok())?)
}

fn read_document(file: &Path) -> anyhow::Result<Options> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", file.display()))?;
    match Options::from_value(value) {
        Some(document) => Ok(document),
        None => bail!("{} does not contain a JSON object", file.display()),
    }
}

fn demo_plot() -> Plot {
    let data = Data::new()
        .column("type", ["X", "X", "Y", "Y", "X", "X", "Y", "X"])
        .column("cond", ["A", "B", "A", "A", "A", "A", "A", "B"])
        .column("value", [1.0, 2.5, 1.5, 3.0, 2.0, 2.2, 2.8, 1.1]);

    lets_plot(data)
        + geom_bar()
            .color("dark_green")
            .alpha(0.3)
            .mapping(|m| m.x("type").fill("cond"))
        + geom_line().mapping(|m| m.x("type").y("value").group("cond"))
        + geom_point()
            .size(3.0)
            .mapping(|m| m.x("type").y("value").color("cond"))
        + ggtitle("ggspec demo", None)
        + ggsize(700, 350)
}

fn render(document: &Options, format: OutputFormat, config: &FrontendConfig) -> anyhow::Result<String> {
    let text = match format {
        OutputFormat::Json => JsonWriter::new(config.pretty).write(document)?,
        OutputFormat::Html => HtmlWriter::from_config(config).write(document)?,
        OutputFormat::Mime => {
            let bundle = MimeBundleWriter::from_config(config).write(document)?;
            JsonWriter::new(config.pretty).serialize(&bundle)?
        }
    };
    Ok(text)
}

fn emit(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", text),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ggspec=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Render {
            file,
            format,
            output,
        } => {
            let document = read_document(&file)?;
            let text = render(&document, format, &config)?;
            emit(&text, output.as_deref())?;
        }
        Commands::Demo { format, output } => {
            let document = demo_plot().to_spec();
            let text = render(&document, format, &config)?;
            emit(&text, output.as_deref())?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_layers_in_order() {
        let plot = demo_plot();
        let geoms: Vec<&str> = plot
            .layers()
            .iter()
            .filter_map(|layer| layer.get("geom").and_then(|g| g.as_str()))
            .collect();
        assert_eq!(geoms, vec!["bar", "line", "point"]);
    }

    #[test]
    fn test_render_document_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        let spec = demo_plot().to_spec();
        std::fs::write(&path, spec.to_string()).unwrap();

        let document = read_document(&path).unwrap();
        assert_eq!(document, spec);

        let html = render(&document, OutputFormat::Html, &FrontendConfig::default()).unwrap();
        assert!(html.contains("ggspec demo"));
    }

    #[test]
    fn test_render_mime_bundle() {
        let spec = demo_plot().to_spec();
        let text = render(&spec, OutputFormat::Mime, &FrontendConfig::default()).unwrap();
        let bundle: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            bundle["application/plot+json"]["output_type"],
            serde_json::json!("lets_plot_spec")
        );
    }

    #[test]
    fn test_read_document_rejects_arrays() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plot.json");
        std::fs::write(&path, "[1, 2]").unwrap();
        assert!(read_document(&path).is_err());
    }

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::parse_from(["ggspec", "render", "plot.json", "--format", "json"]);
        match cli.command {
            Commands::Render { file, format, output } => {
                assert_eq!(file, PathBuf::from("plot.json"));
                assert_eq!(format, OutputFormat::Json);
                assert!(output.is_none());
            }
            Commands::Demo { .. } => panic!("expected render"),
        }
    }
}
