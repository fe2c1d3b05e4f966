//! Coordinate systems
//!
//! A plot has at most one coordinate system; adding a second one replaces
//! the first.

mod types;

pub use types::{coord_cartesian, coord_fixed, coord_flip, coord_map, coord_polar, Coord, CoordKind};
