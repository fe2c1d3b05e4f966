//! Faceting for small multiples
//!
//! A plot has at most one facet specification; adding a second one replaces
//! the first.

mod types;

pub use types::{facet_grid, facet_wrap, Facet, FacetGrid, FacetScales, FacetWrap};
