//! Scale builders
//!
//! A scale controls how one aesthetic maps data values to visual values.
//! Each scale is written as `{aesthetic, ...}`; the plot keeps scales in the
//! order they were added, and the engine lets a later scale for the same
//! aesthetic override an earlier one.

mod types;

pub use types::*;
