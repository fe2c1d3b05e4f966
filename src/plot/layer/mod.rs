//! Layers: one geometry drawn with one statistic, position, sampling and
//! tooltip configuration.
//!
//! Every geom and stat builder implements [`Layer`]. A layer document is
//! assembled in two steps:
//!
//! 1. [`LayerOptions::header`] - `geom`, `stat`, `data`, `position`,
//!    `show_legend` (only when `false`), `inherit_aes`, `manual_key`,
//!    `sampling`, `tooltips`, `orientation`, then geometry and statistic
//!    parameters.
//! 2. [`Layer::seal`] - `mapping` followed by the builder's capability
//!    fragments in their declared order.
//!
//! Sealed keys are merged last and win over header keys.

use serde_json::Value;

use crate::{Capability, Options};

use super::Data;

pub use geom::{Geom, GeomKind};
pub use position::*;
pub use sampling::*;
pub use stat::{Stat, StatKind};
pub use tooltips::*;

/// Implement [`Layer`] and `PlotFeature` for a builder with `layer` and
/// `mapping` fields.
macro_rules! impl_layer {
    ($builder:ty, $mapping:ty) => {
        impl $crate::plot::layer::Layer for $builder {
            type Mapping = $mapping;

            fn layer_options(&self) -> &$crate::plot::layer::LayerOptions {
                &self.layer
            }

            fn layer_options_mut(&mut self) -> &mut $crate::plot::layer::LayerOptions {
                &mut self.layer
            }

            fn mapping_ref(&self) -> &$mapping {
                &self.mapping
            }

            fn mapping_mut(&mut self) -> &mut $mapping {
                &mut self.mapping
            }
        }

        impl $crate::plot::PlotFeature for $builder {
            fn add_to(self, plot: &mut $crate::plot::Plot) {
                plot.push_layer($crate::plot::layer::Layer::to_spec(&self));
            }
        }
    };
}

pub mod geom;
pub mod position;
pub mod sampling;
pub mod stat;
pub mod tooltips;

/// Settings shared by every layer, independent of its geometry
#[derive(Debug, Clone, PartialEq)]
pub struct LayerOptions {
    pub geom: Geom,
    pub stat: Stat,
    pub position: Position,
    pub data: Option<Data>,
    pub show_legend: bool,
    pub inherit_aes: Option<bool>,
    pub manual_key: Option<Value>,
    pub sampling: Option<Sampling>,
    pub tooltips: Option<Tooltips>,
    pub orientation: Option<String>,
}

impl LayerOptions {
    pub fn new(geom: Geom, stat: Stat, position: Position) -> Self {
        Self {
            geom,
            stat,
            position,
            data: None,
            show_legend: true,
            inherit_aes: None,
            manual_key: None,
            sampling: None,
            tooltips: None,
            orientation: None,
        }
    }

    /// Layer-level part of the layer document
    pub fn header(&self) -> Options {
        let mut header = Options::new()
            .with("geom", self.geom.kind.name())
            .with("stat", self.stat.kind.name());
        header.insert_opt("data", self.data.clone().map(Data::into_value));
        header.insert("position", self.position.to_value());
        if !self.show_legend {
            header.insert("show_legend", false);
        }
        header.insert_opt("inherit_aes", self.inherit_aes);
        header.insert_opt("manual_key", self.manual_key.clone());
        header.insert_opt("sampling", self.sampling.as_ref().map(Sampling::to_value));
        header.insert_opt("tooltips", self.tooltips.as_ref().map(Tooltips::to_value));
        header.insert_opt("orientation", self.orientation.clone());
        header
            .merge(self.geom.parameters.clone())
            .merge(self.stat.parameters.clone())
    }
}

/// A plot layer builder.
///
/// Builders implement [`Capability`] by composing their capability delegates;
/// this trait adds the shared layer settings and the column mapping.
pub trait Layer: Capability + Sized {
    /// Column mapping accepted by this layer
    type Mapping: Capability + Default;

    fn layer_options(&self) -> &LayerOptions;
    fn layer_options_mut(&mut self) -> &mut LayerOptions;
    fn mapping_ref(&self) -> &Self::Mapping;
    fn mapping_mut(&mut self) -> &mut Self::Mapping;

    /// Map data columns to aesthetics: `.mapping(|m| m.x("type").fill("cond"))`
    fn mapping(mut self, f: impl FnOnce(Self::Mapping) -> Self::Mapping) -> Self {
        let current = std::mem::take(self.mapping_mut());
        *self.mapping_mut() = f(current);
        self
    }

    /// Layer-specific data, replacing the plot data for this layer
    fn data(mut self, data: Data) -> Self {
        self.layer_options_mut().data = Some(data);
        self
    }

    fn geom(mut self, geom: Geom) -> Self {
        self.layer_options_mut().geom = geom;
        self
    }

    fn stat(mut self, stat: Stat) -> Self {
        self.layer_options_mut().stat = stat;
        self
    }

    fn position(mut self, position: Position) -> Self {
        self.layer_options_mut().position = position;
        self
    }

    fn show_legend(mut self, show: bool) -> Self {
        self.layer_options_mut().show_legend = show;
        self
    }

    /// Whether the plot-level mapping is combined with this layer's mapping
    fn inherit_aes(mut self, inherit: bool) -> Self {
        self.layer_options_mut().inherit_aes = Some(inherit);
        self
    }

    /// Legend entry for a layer without mapped aesthetics
    fn manual_key(mut self, key: impl Into<Value>) -> Self {
        self.layer_options_mut().manual_key = Some(key.into());
        self
    }

    fn sampling(mut self, sampling: Sampling) -> Self {
        self.layer_options_mut().sampling = Some(sampling);
        self
    }

    fn tooltips(mut self, tooltips: Tooltips) -> Self {
        self.layer_options_mut().tooltips = Some(tooltips);
        self
    }

    /// `"x"` or `"y"`: the axis the geometry is oriented along
    fn orientation(mut self, orientation: impl Into<String>) -> Self {
        self.layer_options_mut().orientation = Some(orientation.into());
        self
    }

    /// Mapping plus capability fragments. Pure and deterministic.
    fn seal(&self) -> Options {
        let sealed = Options::new()
            .with("mapping", self.mapping_ref().fragment())
            .merge(self.fragment());
        tracing::trace!(geom = %self.layer_options().geom.kind, keys = sealed.len(), "sealed layer");
        sealed
    }

    /// Full layer document: header followed by the sealed fragment
    fn to_spec(&self) -> Options {
        self.layer_options().header().merge(self.seal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::layer::geom::geom_bar;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_header_defaults() {
        let options = LayerOptions::new(Geom::bar(), Stat::count(), position_stack(None));
        assert_eq!(
            options.header().into_value(),
            json!({"geom": "bar", "stat": "count", "position": "stack"})
        );
    }

    #[test]
    fn test_header_full() {
        let mut options = LayerOptions::new(
            Geom::point(),
            Stat::identity(),
            position_jitter(0.1, 0.1, None),
        );
        options.data = Some(Data::new().column("x", [1, 2]));
        options.show_legend = false;
        options.inherit_aes = Some(false);
        options.sampling = Some(sampling_none());
        options.tooltips = Some(tooltips_none());
        options.orientation = Some("y".to_string());

        let header = options.header();
        let keys: Vec<&str> = header.keys().collect();
        assert_eq!(
            keys,
            vec![
                "geom",
                "stat",
                "data",
                "position",
                "show_legend",
                "inherit_aes",
                "sampling",
                "tooltips",
                "orientation"
            ]
        );
        assert_eq!(header.get("show_legend"), Some(&json!(false)));
        assert_eq!(header.get("data"), Some(&json!({"x": [1, 2]})));
    }

    #[test]
    fn test_stat_parameters_in_header() {
        let options = LayerOptions::new(
            Geom::bar(),
            Stat::bin().with_parameters(Options::new().with("bins", 10)),
            position_stack(None),
        );
        assert_eq!(options.header().get("bins"), Some(&json!(10)));
    }

    #[test]
    fn test_sealed_keys_win_over_header() {
        let layer = geom_bar()
            .stat(Stat::count().with_parameters(Options::new().with("alpha", 0.1)))
            .alpha(0.9);
        assert_eq!(layer.to_spec().get("alpha"), Some(&json!(0.9)));
    }

    proptest! {
        #[test]
        fn prop_seal_emits_exactly_supplied_keys(
            alpha in proptest::option::of(0.0f64..1.0),
            width in proptest::option::of(0.0f64..2.0),
            color in proptest::option::of("[a-z]{0,6}"),
        ) {
            let mut bar = geom_bar();
            if let Some(alpha) = alpha {
                bar = bar.alpha(alpha);
            }
            if let Some(width) = width {
                bar = bar.width(width);
            }
            if let Some(color) = color.clone() {
                bar = bar.color(color);
            }
            let sealed = bar.seal();
            prop_assert_eq!(sealed.contains_key("alpha"), alpha.is_some());
            prop_assert_eq!(sealed.contains_key("width"), width.is_some());
            prop_assert_eq!(sealed.contains_key("color"), color.is_some());
            prop_assert!(sealed.iter().all(|(_, value)| !value.is_null()));
            prop_assert_eq!(sealed.to_string(), bar.seal().to_string());
        }
    }

    #[test]
    fn test_mapping_closure_replaces_mapping() {
        let layer = geom_bar()
            .mapping(|m| m.x("type"))
            .mapping(|m| m.fill("cond"));
        assert_eq!(
            layer.seal().get("mapping"),
            Some(&json!({"x": "type", "fill": "cond"}))
        );
    }
}
