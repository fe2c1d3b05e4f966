//! Facet types
//!
//! `facet_wrap` lays panels out in a wrapped ribbon, one per combination of
//! the facet variables; `facet_grid` arranges them in a grid with one
//! variable along columns (`x`) and another along rows (`y`).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plot::main::{Plot, PlotFeature};
use crate::Options;

/// Scale sharing options for facets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacetScales {
    Fixed,
    Free,
    FreeX,
    FreeY,
}

impl FacetScales {
    pub fn name(&self) -> &'static str {
        match self {
            FacetScales::Fixed => "fixed",
            FacetScales::Free => "free",
            FacetScales::FreeX => "free_x",
            FacetScales::FreeY => "free_y",
        }
    }
}

/// Faceting specification
#[derive(Debug, Clone, PartialEq)]
pub enum Facet {
    Wrap(FacetWrap),
    Grid(FacetGrid),
}

impl Facet {
    /// Get all variables used for faceting
    ///
    /// For wrap facets, returns the facet variables in order. For grid
    /// facets, returns the column variable followed by the row variable.
    pub fn get_variables(&self) -> Vec<String> {
        match self {
            Facet::Wrap(wrap) => wrap.facets.clone(),
            Facet::Grid(grid) => grid.x.iter().chain(grid.y.iter()).cloned().collect(),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Facet::Wrap(wrap) => wrap.to_value(),
            Facet::Grid(grid) => grid.to_value(),
        }
    }
}

/// Wrapped ribbon of panels
#[derive(Debug, Clone, PartialEq)]
pub struct FacetWrap {
    facets: Vec<String>,
    ncol: Option<u32>,
    nrow: Option<u32>,
    scales: Option<FacetScales>,
    order: Option<Value>,
    format: Option<Value>,
    dir: Option<String>,
}

pub fn facet_wrap<I, S>(facets: I) -> FacetWrap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FacetWrap {
        facets: facets.into_iter().map(Into::into).collect(),
        ncol: None,
        nrow: None,
        scales: None,
        order: None,
        format: None,
        dir: None,
    }
}

impl FacetWrap {
    pub fn ncol(mut self, ncol: u32) -> Self {
        self.ncol = Some(ncol);
        self
    }

    pub fn nrow(mut self, nrow: u32) -> Self {
        self.nrow = Some(nrow);
        self
    }

    pub fn scales(mut self, scales: FacetScales) -> Self {
        self.scales = Some(scales);
        self
    }

    /// Sort direction of facet values: `1` ascending, `-1` descending.
    /// One value for all variables or a list with one value per variable.
    pub fn order(mut self, order: impl Into<Value>) -> Self {
        self.order = Some(order.into());
        self
    }

    /// Format pattern of facet labels, one for all or one per variable
    pub fn format(mut self, format: impl Into<Value>) -> Self {
        self.format = Some(format.into());
        self
    }

    /// `"h"` fills panels by row, `"v"` by column
    pub fn dir(mut self, dir: impl Into<String>) -> Self {
        self.dir = Some(dir.into());
        self
    }

    fn to_value(&self) -> Value {
        let facets = match self.facets.as_slice() {
            [single] => Value::from(single.as_str()),
            many => Value::from(many.to_vec()),
        };
        let mut options = Options::new().with("name", "wrap").with("facets", facets);
        options.insert_opt("ncol", self.ncol);
        options.insert_opt("nrow", self.nrow);
        options.insert_opt("order", self.order.clone());
        options.insert_opt("format", self.format.clone());
        options.insert_opt("dir", self.dir.clone());
        options.insert_opt("scales", self.scales.map(|s| s.name()));
        options.into_value()
    }
}

/// Grid of panels
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacetGrid {
    x: Option<String>,
    y: Option<String>,
    scales: Option<FacetScales>,
    x_order: Option<i64>,
    y_order: Option<i64>,
    x_format: Option<String>,
    y_format: Option<String>,
}

/// `x` splits the plot into columns, `y` into rows; either may be omitted.
pub fn facet_grid<'a>(x: impl Into<Option<&'a str>>, y: impl Into<Option<&'a str>>) -> FacetGrid {
    FacetGrid {
        x: x.into().map(str::to_string),
        y: y.into().map(str::to_string),
        ..Default::default()
    }
}

impl FacetGrid {
    pub fn scales(mut self, scales: FacetScales) -> Self {
        self.scales = Some(scales);
        self
    }

    pub fn x_order(mut self, order: i64) -> Self {
        self.x_order = Some(order);
        self
    }

    pub fn y_order(mut self, order: i64) -> Self {
        self.y_order = Some(order);
        self
    }

    pub fn x_format(mut self, format: impl Into<String>) -> Self {
        self.x_format = Some(format.into());
        self
    }

    pub fn y_format(mut self, format: impl Into<String>) -> Self {
        self.y_format = Some(format.into());
        self
    }

    fn to_value(&self) -> Value {
        let mut options = Options::new().with("name", "grid");
        options.insert_opt("x", self.x.clone());
        options.insert_opt("y", self.y.clone());
        options.insert_opt("x_order", self.x_order);
        options.insert_opt("y_order", self.y_order);
        options.insert_opt("x_format", self.x_format.clone());
        options.insert_opt("y_format", self.y_format.clone());
        options.insert_opt("scales", self.scales.map(|s| s.name()));
        options.into_value()
    }
}

impl From<FacetWrap> for Facet {
    fn from(wrap: FacetWrap) -> Self {
        Facet::Wrap(wrap)
    }
}

impl From<FacetGrid> for Facet {
    fn from(grid: FacetGrid) -> Self {
        Facet::Grid(grid)
    }
}

impl PlotFeature for FacetWrap {
    fn add_to(self, plot: &mut Plot) {
        plot.set_facet(self.into());
    }
}

impl PlotFeature for FacetGrid {
    fn add_to(self, plot: &mut Plot) {
        plot.set_facet(self.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wrap_single_variable() {
        let facet = Facet::from(facet_wrap(["class"]).ncol(3));
        assert_eq!(
            facet.to_value(),
            json!({"name": "wrap", "facets": "class", "ncol": 3})
        );
    }

    #[test]
    fn test_wrap_multiple_variables() {
        let facet = Facet::from(
            facet_wrap(["drv", "year"])
                .order(json!([1, -1]))
                .scales(FacetScales::FreeY),
        );
        assert_eq!(
            facet.to_value(),
            json!({
                "name": "wrap",
                "facets": ["drv", "year"],
                "order": [1, -1],
                "scales": "free_y"
            })
        );
        assert_eq!(facet.get_variables(), vec!["drv", "year"]);
    }

    #[test]
    fn test_grid() {
        let facet = Facet::from(facet_grid("cyl", None).x_order(-1).x_format("{d} cyl"));
        assert_eq!(
            facet.to_value(),
            json!({"name": "grid", "x": "cyl", "x_order": -1, "x_format": "{d} cyl"})
        );
        assert_eq!(facet.get_variables(), vec!["cyl"]);
    }

    #[test]
    fn test_grid_variables_columns_then_rows() {
        let facet = Facet::from(facet_grid("drv", "year"));
        assert_eq!(facet.get_variables(), vec!["drv", "year"]);
    }
}
