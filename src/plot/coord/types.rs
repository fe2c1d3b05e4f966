//! Coordinate system kinds and the coordinate builder

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::plot::main::{Plot, PlotFeature};
use crate::{Options, PlotError, Result};

/// Coordinate system kinds understood by the rendering engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordKind {
    Cartesian,
    Fixed,
    Flip,
    Polar,
    Map,
}

impl CoordKind {
    pub fn name(&self) -> &'static str {
        match self {
            CoordKind::Cartesian => "cartesian",
            CoordKind::Fixed => "fixed",
            CoordKind::Flip => "flip",
            CoordKind::Polar => "polar",
            CoordKind::Map => "map",
        }
    }

    /// Properties this coordinate system accepts
    pub fn allowed_properties(&self) -> &'static [&'static str] {
        match self {
            CoordKind::Cartesian | CoordKind::Flip => &["xlim", "ylim"],
            CoordKind::Fixed => &["ratio", "xlim", "ylim"],
            CoordKind::Polar => &["xlim", "ylim", "theta", "start", "direction", "transform_bkgr"],
            CoordKind::Map => &["xlim", "ylim", "projection"],
        }
    }
}

impl std::fmt::Display for CoordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coordinate system of a plot: `{name, xlim?, ylim?, ...}`
#[derive(Debug, Clone, PartialEq)]
pub struct Coord {
    pub kind: CoordKind,
    pub properties: Options,
}

impl Coord {
    pub fn new(kind: CoordKind) -> Self {
        Self {
            kind,
            properties: Options::new(),
        }
    }

    /// Set a property by name, rejecting ones the coordinate system does not
    /// accept.
    pub fn property(mut self, key: &str, value: impl Into<Value>) -> Result<Self> {
        if !self.kind.allowed_properties().contains(&key) {
            return Err(PlotError::ValidationError(format!(
                "Property '{}' is not valid for coord_{}; allowed: {}",
                key,
                self.kind,
                self.kind.allowed_properties().join(", ")
            )));
        }
        self.properties.insert(key, value);
        Ok(self)
    }

    /// Visible x range; `None` on either side leaves that end open
    pub fn xlim(mut self, low: impl Into<Option<f64>>, high: impl Into<Option<f64>>) -> Self {
        self.properties.insert("xlim", limits(low.into(), high.into()));
        self
    }

    pub fn ylim(mut self, low: impl Into<Option<f64>>, high: impl Into<Option<f64>>) -> Self {
        self.properties.insert("ylim", limits(low.into(), high.into()));
        self
    }

    pub fn to_value(&self) -> Value {
        Options::new()
            .with("name", self.kind.name())
            .merge(self.properties.clone())
            .into_value()
    }
}

fn limits(low: Option<f64>, high: Option<f64>) -> Value {
    Value::Array(vec![
        low.map(Value::from).unwrap_or(Value::Null),
        high.map(Value::from).unwrap_or(Value::Null),
    ])
}

impl PlotFeature for Coord {
    fn add_to(self, plot: &mut Plot) {
        plot.set_coord(self);
    }
}

pub fn coord_cartesian() -> Coord {
    Coord::new(CoordKind::Cartesian)
}

/// Cartesian coordinates with a fixed y/x aspect ratio
pub fn coord_fixed(ratio: impl Into<Option<f64>>) -> Coord {
    let mut coord = Coord::new(CoordKind::Fixed);
    coord.properties.insert_opt("ratio", ratio.into());
    coord
}

pub fn coord_flip() -> Coord {
    Coord::new(CoordKind::Flip)
}

/// Polar coordinates
///
/// `theta` is the variable mapped to the angle (`"x"` or `"y"`), `start` the
/// offset of the starting point in radians, `direction` `1` for clockwise
/// and `-1` for anticlockwise.
pub fn coord_polar<'a>(
    theta: impl Into<Option<&'a str>>,
    start: impl Into<Option<f64>>,
    direction: impl Into<Option<i64>>,
) -> Coord {
    let mut coord = Coord::new(CoordKind::Polar);
    coord.properties.insert_opt("theta", theta.into());
    coord.properties.insert_opt("start", start.into());
    coord.properties.insert_opt("direction", direction.into());
    coord
}

/// Map coordinates using the Mercator projection
pub fn coord_map() -> Coord {
    Coord::new(CoordKind::Map)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cartesian_limits() {
        let coord = coord_cartesian().xlim(0.0, 10.0).ylim(None, 5.0);
        assert_eq!(
            coord.to_value(),
            json!({"name": "cartesian", "xlim": [0.0, 10.0], "ylim": [null, 5.0]})
        );
    }

    #[test]
    fn test_fixed_ratio() {
        assert_eq!(
            coord_fixed(2.0).to_value(),
            json!({"name": "fixed", "ratio": 2.0})
        );
        assert_eq!(coord_fixed(None).to_value(), json!({"name": "fixed"}));
    }

    #[test]
    fn test_polar_omits_unset() {
        assert_eq!(
            coord_polar("y", None, -1).to_value(),
            json!({"name": "polar", "theta": "y", "direction": -1})
        );
    }

    #[test]
    fn test_property_validation() {
        let coord = coord_fixed(None).property("ratio", 0.5).unwrap();
        assert_eq!(coord.properties.get("ratio"), Some(&json!(0.5)));

        let err = coord_cartesian().property("theta", "x").unwrap_err();
        assert!(err.to_string().contains("theta"));
        assert!(err.to_string().contains("not valid"));
    }
}
