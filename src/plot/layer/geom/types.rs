//! Core types for geometry options
//!
//! These types are shared by every geom builder and by the statistic layers
//! that draw with a configurable geometry.

use serde::{Deserialize, Serialize};

use crate::{Capability, Options};

/// Enum of all geometry kinds understood by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeomKind {
    Point,
    Line,
    Path,
    Bar,
    Histogram,
    Area,
    Ribbon,
    Density,
    Polygon,
    Violin,
    Boxplot,
    PointRange,
    ErrorBar,
    Smooth,
    Text,
    Tile,
    Contour,
}

impl GeomKind {
    /// Option name used in the plot document
    pub fn name(&self) -> &'static str {
        match self {
            GeomKind::Point => "point",
            GeomKind::Line => "line",
            GeomKind::Path => "path",
            GeomKind::Bar => "bar",
            GeomKind::Histogram => "histogram",
            GeomKind::Area => "area",
            GeomKind::Ribbon => "ribbon",
            GeomKind::Density => "density",
            GeomKind::Polygon => "polygon",
            GeomKind::Violin => "violin",
            GeomKind::Boxplot => "boxplot",
            GeomKind::PointRange => "pointrange",
            GeomKind::ErrorBar => "errorbar",
            GeomKind::Smooth => "smooth",
            GeomKind::Text => "text",
            GeomKind::Tile => "tile",
            GeomKind::Contour => "contour",
        }
    }
}

impl std::fmt::Display for GeomKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Geometry of a layer plus geometry-level parameters
///
/// Parameters are merged into the layer document next to the `geom` key.
#[derive(Debug, Clone, PartialEq)]
pub struct Geom {
    pub kind: GeomKind,
    pub parameters: Options,
}

impl Geom {
    pub fn new(kind: GeomKind) -> Self {
        Self {
            kind,
            parameters: Options::new(),
        }
    }

    /// Attach geometry parameters (e.g. a point geometry's `size`)
    pub fn with_parameters(mut self, parameters: impl Capability) -> Self {
        self.parameters.extend(parameters.fragment());
        self
    }

    pub fn point() -> Self {
        Self::new(GeomKind::Point)
    }

    pub fn line() -> Self {
        Self::new(GeomKind::Line)
    }

    pub fn bar() -> Self {
        Self::new(GeomKind::Bar)
    }

    pub fn area() -> Self {
        Self::new(GeomKind::Area)
    }

    pub fn polygon() -> Self {
        Self::new(GeomKind::Polygon)
    }

    pub fn boxplot() -> Self {
        Self::new(GeomKind::Boxplot)
    }

    pub fn smooth() -> Self {
        Self::new(GeomKind::Smooth)
    }

    pub fn contour() -> Self {
        Self::new(GeomKind::Contour)
    }

    pub fn tile() -> Self {
        Self::new(GeomKind::Tile)
    }
}
