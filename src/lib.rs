/*!
# ggspec - typed grammar-of-graphics plot specifications

ggspec builds declarative plot specifications from typed Rust builders and
hands the resulting document to the Lets-Plot rendering engine, either as a
standalone HTML page, a JSON export or a notebook MIME bundle.

## Example

```rust,ignore
use ggspec::prelude::*;

let data = Data::new()
    .column("type", ["X", "X", "Y", "Y", "X", "X", "Y", "X"])
    .column("cond", ["A", "B", "A", "A", "A", "A", "A", "B"]);

let plot = lets_plot(data)
    + geom_bar()
        .color("dark_green")
        .alpha(0.3)
        .mapping(|m| m.x("type").fill("cond"))
    + ggsize(700, 350);

let html = HtmlWriter::default().write(&plot.to_spec())?;
```

## Architecture

- [`options`] - the ordered configuration document every builder produces
- [`capability`] - capability fragments and their ordered composition
- [`plot`] - layers, scales, coordinates, facets, themes and plot assembly
- [`writer`] - serialization of finished documents (JSON, HTML, MIME bundle)
- [`display`] - display sinks and the render context that selects one
- [`config`] - front-end configuration shared by writers and sinks
*/

#[macro_use]
pub mod capability;

pub mod config;
pub mod display;
pub mod options;
pub mod plot;
pub mod writer;

pub use capability::{compose, Capability, Num};
pub use config::{FrontendConfig, SinkKind};
pub use display::{DisplaySink, RenderContext};
pub use options::Options;
pub use plot::{lets_plot, Data, Plot};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Convenience re-exports for building plots
pub mod prelude {
    pub use crate::capability::{compose, Capability, Num};
    pub use crate::display::{DisplaySink, RenderContext};
    pub use crate::options::Options;
    pub use crate::plot::coord::*;
    pub use crate::plot::facet::*;
    pub use crate::plot::layer::geom::*;
    pub use crate::plot::layer::stat::*;
    pub use crate::plot::layer::*;
    pub use crate::plot::scale::*;
    pub use crate::plot::theme::*;
    pub use crate::plot::*;
    pub use crate::writer::{HtmlWriter, JsonWriter, MimeBundleWriter, Writer};
}

/// Main error type for ggspec operations
#[derive(Debug, thiserror::Error)]
pub enum PlotError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Writer error: {0}")]
    WriterError(String),

    #[error("Display error: {0}")]
    DisplayError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PlotError>;
