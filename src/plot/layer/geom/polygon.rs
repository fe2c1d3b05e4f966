//! Polygon geom implementation

use serde_json::Value;

use super::Geom;
use crate::capability::{ColorOption, FillOption};
use crate::plot::layer::{position_identity, LayerOptions, Stat};
use crate::{compose, Capability, Num, Options, PlotError, Result};

capability! {
    pub struct PolygonAesthetics {
        x: Num => "x",
        y: Num => "y",
        alpha: Num => "alpha",
        color: Value => "color",
        fill: Value => "fill",
        linetype: Value => "linetype",
        size: Num => "size",
    }
}

capability! {
    pub struct PolygonMapping {
        x: String => "x",
        y: String => "y",
        alpha: String => "alpha",
        color: String => "color",
        fill: String => "fill",
        linetype: String => "linetype",
        size: String => "size",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Geometries drawn from a spatial dataset rather than from x/y columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpatialParameters {
    /// Spatial data (GeoJSON or a GeoDataFrame-like document)
    pub map: Option<Value>,
    /// Pairs of (data column, map column) used to join data and map
    pub map_join: Option<(Vec<String>, Vec<String>)>,
    /// Coordinate reference system of the map, e.g. `"provided"`
    pub use_crs: Option<String>,
}

impl SpatialParameters {
    /// Build the join key pair.
    ///
    /// Both sides must name the same, non-zero number of columns; anything
    /// else cannot be represented as a pairwise join.
    pub fn join<I, J, S, T>(data_columns: I, map_columns: J) -> Result<(Vec<String>, Vec<String>)>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        let data: Vec<String> = data_columns.into_iter().map(Into::into).collect();
        let map: Vec<String> = map_columns.into_iter().map(Into::into).collect();
        if data.is_empty() || map.is_empty() {
            return Err(PlotError::ValidationError(
                "map_join requires at least one column on each side".to_string(),
            ));
        }
        if data.len() != map.len() {
            return Err(PlotError::ValidationError(format!(
                "map_join column counts differ: {} data column(s) {:?} vs {} map column(s) {:?}",
                data.len(),
                data,
                map.len(),
                map
            )));
        }
        Ok((data, map))
    }
}

impl Capability for SpatialParameters {
    fn fragment(&self) -> Options {
        Options::of([
            ("map", self.map.clone()),
            (
                "map_join",
                self.map_join
                    .clone()
                    .map(|(data, map)| Value::from(vec![Value::from(data), Value::from(map)])),
            ),
            ("use_crs", self.use_crs.clone().map(Value::from)),
        ])
    }
}

/// Polygon geom - filled shapes, from x/y columns or from a spatial map
///
/// Fragment order: [`PolygonAesthetics`], [`SpatialParameters`],
/// [`ColorOption`], [`FillOption`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeomPolygon {
    layer: LayerOptions,
    mapping: PolygonMapping,
    aesthetics: PolygonAesthetics,
    spatial: SpatialParameters,
    color_option: ColorOption,
    fill_option: FillOption,
}

pub fn geom_polygon() -> GeomPolygon {
    GeomPolygon {
        layer: LayerOptions::new(Geom::polygon(), Stat::identity(), position_identity()),
        mapping: PolygonMapping::default(),
        aesthetics: PolygonAesthetics::default(),
        spatial: SpatialParameters::default(),
        color_option: ColorOption::default(),
        fill_option: FillOption::default(),
    }
}

impl GeomPolygon {
    forward!(aesthetics {
        x: Num,
        y: Num,
        alpha: Num,
        color: Value,
        fill: Value,
        linetype: Value,
        size: Num,
    });
    forward!(color_option { color_by: String });
    forward!(fill_option { fill_by: String });

    pub fn map(mut self, map: impl Into<Value>) -> Self {
        self.spatial.map = Some(map.into());
        self
    }

    /// Join data to map rows; fails when the column lists differ in length.
    pub fn map_join<I, J, S, T>(mut self, data_columns: I, map_columns: J) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        self.spatial.map_join = Some(SpatialParameters::join(data_columns, map_columns)?);
        Ok(self)
    }

    pub fn use_crs(mut self, crs: impl Into<String>) -> Self {
        self.spatial.use_crs = Some(crs.into());
        self
    }
}

impl Capability for GeomPolygon {
    fn fragment(&self) -> Options {
        compose(&[
            &self.aesthetics,
            &self.spatial,
            &self.color_option,
            &self.fill_option,
        ])
    }
}

impl_layer!(GeomPolygon, PolygonMapping);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::Layer;
    use serde_json::json;

    #[test]
    fn test_map_join_pairs_columns() {
        let polygon = geom_polygon()
            .map_join(["state", "county"], ["name", "county_name"])
            .unwrap()
            .use_crs("provided");
        let sealed = polygon.seal();
        assert_eq!(
            sealed.get("map_join"),
            Some(&json!([["state", "county"], ["name", "county_name"]]))
        );
        assert_eq!(sealed.get("use_crs"), Some(&json!("provided")));
    }

    #[test]
    fn test_map_join_rejects_arity_mismatch() {
        let result = geom_polygon().map_join(["state", "county"], ["name"]);
        let err = result.unwrap_err();
        assert!(matches!(err, PlotError::ValidationError(_)));
        assert!(err.to_string().contains("column counts differ"));
    }

    #[test]
    fn test_map_join_rejects_empty_side() {
        let empty: [&str; 0] = [];
        assert!(geom_polygon().map_join(empty, ["name"]).is_err());
    }

    #[test]
    fn test_polygon_declared_order() {
        let polygon = geom_polygon()
            .fill("khaki")
            .map(json!({"type": "FeatureCollection", "features": []}))
            .fill_by("color");
        let sealed = polygon.seal();
        let keys: Vec<&str> = sealed.keys().collect();
        assert_eq!(keys, vec!["mapping", "fill", "map", "fill_by"]);
    }
}
