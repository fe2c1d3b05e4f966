//! Statistics and statistic layer builders
//!
//! A statistic layer is the counterpart of a geom builder that starts from
//! the statistic: `stat_smooth()` draws with the `smooth` geometry by
//! default, but the geometry can be replaced with [`Layer::geom`](super::Layer::geom).

mod types;

pub use types::{Stat, StatKind};

mod parameters;
mod stat_boxplot;
mod stat_contour;
mod stat_smooth;

pub use parameters::*;
pub use stat_boxplot::*;
pub use stat_contour::*;
pub use stat_smooth::*;
