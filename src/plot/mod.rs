//! Plot specification types
//!
//! This module contains every builder that contributes to a plot document
//! and the [`Plot`] that assembles them.
//!
//! # Architecture
//!
//! - `main` - the [`Plot`] struct, `+` assembly, labels and size
//! - `data` - column data attached to a plot or a layer
//! - `layer` - layer options plus the geom and stat builders
//! - `scale` - scale builders, one per aesthetic
//! - `coord` - coordinate systems
//! - `facet` - small multiples
//! - `theme` - named themes, flavors and theme elements

pub mod coord;
pub mod data;
pub mod facet;
pub mod layer;
pub mod main;
pub mod scale;
pub mod theme;

pub use coord::*;
pub use data::*;
pub use facet::*;
pub use layer::*;
pub use main::*;
pub use scale::*;
pub use theme::*;
