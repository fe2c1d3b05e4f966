//! Geometry layer builders
//!
//! Each `geom_*` function returns a builder with the geometry's default
//! statistic and position. Builders are configured with chainable setters
//! and added to a plot with `+`.

mod types;

pub use types::{Geom, GeomKind};

mod area;
mod bar;
mod boxplot;
mod contour;
mod density;
mod errorbar;
mod histogram;
mod line;
mod path;
mod point;
mod pointrange;
mod polygon;
mod ribbon;
mod smooth;
mod text;
mod tile;
mod violin;

pub use area::*;
pub use bar::*;
pub use boxplot::*;
pub use contour::*;
pub use density::*;
pub use errorbar::*;
pub use histogram::*;
pub use line::*;
pub use path::*;
pub use point::*;
pub use pointrange::*;
pub use polygon::*;
pub use ribbon::*;
pub use smooth::*;
pub use text::*;
pub use tile::*;
pub use violin::*;
