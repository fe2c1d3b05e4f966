//! The plot and its assembly
//!
//! A plot is created with [`lets_plot`] and extended with `+`. Anything that
//! implements [`PlotFeature`] can be added: layers, scales, a coordinate
//! system, a facet, themes, labels and the plot size. Layers are sealed at
//! the moment they are added, so later changes to a builder clone never
//! reach the plot.

use serde_json::Value;
use std::ops::Add;

use super::coord::Coord;
use super::data::Data;
use super::facet::Facet;
use super::theme::Theme;
use crate::display::{self, RenderContext};
use crate::{Capability, Options, Result};

capability! {
    /// Plot-level mapping, inherited by every layer with `inherit_aes` unset
    pub struct PlotMapping {
        x: String => "x",
        y: String => "y",
        color: String => "color",
        fill: String => "fill",
        alpha: String => "alpha",
        size: String => "size",
        shape: String => "shape",
        linetype: String => "linetype",
        label: String => "label",
        weight: String => "weight",
        group: String => "group",
        paint_a: String => "paint_a",
        paint_b: String => "paint_b",
        paint_c: String => "paint_c",
    }
}

/// Something that can be added to a [`Plot`] with `+`
pub trait PlotFeature {
    fn add_to(self, plot: &mut Plot);
}

/// Plot under construction
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plot {
    data: Data,
    mapping: PlotMapping,
    data_meta: Option<Value>,
    ggtitle: Option<Options>,
    caption: Option<Options>,
    ggsize: Option<Options>,
    coord: Option<Coord>,
    facet: Option<Facet>,
    theme: Option<Theme>,
    layers: Vec<Options>,
    scales: Vec<Options>,
}

/// Start a plot with the given data
pub fn lets_plot(data: Data) -> Plot {
    Plot {
        data,
        ..Default::default()
    }
}

impl Plot {
    /// Plot without data; layers bring their own
    pub fn new() -> Self {
        Self::default()
    }

    /// Plot-level mapping: `.mapping(|m| m.x("cty").y("hwy"))`
    pub fn mapping(mut self, f: impl FnOnce(PlotMapping) -> PlotMapping) -> Self {
        self.mapping = f(std::mem::take(&mut self.mapping));
        self
    }

    /// Column metadata for the engine, e.g. `{"series_annotations": [...]}`
    pub fn data_meta(mut self, meta: impl Into<Value>) -> Self {
        self.data_meta = Some(meta.into());
        self
    }

    /// Append a layer document; layers are drawn in insertion order
    pub fn push_layer(&mut self, layer: Options) {
        self.layers.push(layer);
    }

    pub fn push_scale(&mut self, scale: Options) {
        self.scales.push(scale);
    }

    pub fn set_coord(&mut self, coord: Coord) {
        self.coord = Some(coord);
    }

    pub fn set_facet(&mut self, facet: Facet) {
        self.facet = Some(facet);
    }

    /// Merge a theme onto the current one; the new theme wins per key
    pub fn merge_theme(&mut self, theme: Theme) {
        self.theme = Some(match self.theme.take() {
            Some(current) => current + theme,
            None => theme,
        });
    }

    pub fn layers(&self) -> &[Options] {
        &self.layers
    }

    pub fn scales(&self) -> &[Options] {
        &self.scales
    }

    /// Assemble the plot document
    pub fn to_spec(&self) -> Options {
        let mut spec = Options::new()
            .with("kind", "plot")
            .with("data", self.data.clone().into_value())
            .with("mapping", self.mapping.fragment());
        spec.insert_opt("data_meta", self.data_meta.clone());
        spec.insert_opt("ggtitle", self.ggtitle.clone());
        spec.insert_opt("caption", self.caption.clone());
        spec.insert_opt("ggsize", self.ggsize.clone());
        spec.insert_opt("coord", self.coord.as_ref().map(Coord::to_value));
        spec.insert_opt("facet", self.facet.as_ref().map(Facet::to_value));
        spec.insert_opt("theme", self.theme.as_ref().map(Theme::fragment));
        spec.insert("layers", self.layers.clone());
        spec.insert("scales", self.scales.clone());
        tracing::debug!(
            layers = self.layers.len(),
            scales = self.scales.len(),
            "assembled plot document"
        );
        spec
    }

    /// Display the plot through an explicit render context
    pub fn show(&self, context: &RenderContext) -> Result<()> {
        context.display(&self.to_spec())
    }

    /// Display the plot through the process-wide default context
    pub fn show_default(&self) -> Result<()> {
        display::current()?.display(&self.to_spec())
    }
}

impl<F: PlotFeature> Add<F> for Plot {
    type Output = Plot;

    fn add(mut self, feature: F) -> Plot {
        feature.add_to(&mut self);
        self
    }
}

/// Title, subtitle, caption and axis or legend titles
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Labels {
    title: Option<String>,
    subtitle: Option<String>,
    caption: Option<String>,
    aesthetics: Vec<(String, String)>,
}

/// Plot title with an optional subtitle
pub fn ggtitle<'a>(title: impl Into<String>, subtitle: impl Into<Option<&'a str>>) -> Labels {
    Labels {
        title: Some(title.into()),
        subtitle: subtitle.into().map(str::to_string),
        ..Default::default()
    }
}

pub fn labs() -> Labels {
    Labels::default()
}

pub fn xlab(label: impl Into<String>) -> Labels {
    labs().x(label)
}

pub fn ylab(label: impl Into<String>) -> Labels {
    labs().y(label)
}

impl Labels {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Title of the axis or legend of any aesthetic
    pub fn label(mut self, aesthetic: impl Into<String>, label: impl Into<String>) -> Self {
        self.aesthetics.push((aesthetic.into(), label.into()));
        self
    }

    pub fn x(self, label: impl Into<String>) -> Self {
        self.label("x", label)
    }

    pub fn y(self, label: impl Into<String>) -> Self {
        self.label("y", label)
    }

    pub fn color(self, label: impl Into<String>) -> Self {
        self.label("color", label)
    }

    pub fn fill(self, label: impl Into<String>) -> Self {
        self.label("fill", label)
    }
}

impl PlotFeature for Labels {
    fn add_to(self, plot: &mut Plot) {
        if let Some(title) = self.title {
            let mut ggtitle = Options::new().with("text", title);
            ggtitle.insert_opt("subtitle", self.subtitle);
            plot.ggtitle = Some(ggtitle);
        } else if let Some(subtitle) = self.subtitle {
            // A subtitle alone keeps an existing title
            let mut ggtitle = plot.ggtitle.take().unwrap_or_default();
            ggtitle.insert("subtitle", subtitle);
            plot.ggtitle = Some(ggtitle);
        }
        if let Some(caption) = self.caption {
            plot.caption = Some(Options::new().with("text", caption));
        }
        // Axis and legend titles travel as name-only scales
        for (aesthetic, label) in self.aesthetics {
            plot.push_scale(
                Options::new()
                    .with("aesthetic", aesthetic)
                    .with("name", label),
            );
        }
    }
}

/// Plot size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GgSize {
    pub width: u32,
    pub height: u32,
}

pub fn ggsize(width: u32, height: u32) -> GgSize {
    GgSize { width, height }
}

impl PlotFeature for GgSize {
    fn add_to(self, plot: &mut Plot) {
        plot.ggsize = Some(
            Options::new()
                .with("width", self.width)
                .with("height", self.height),
        );
    }
}

impl<F: PlotFeature> PlotFeature for Option<F> {
    fn add_to(self, plot: &mut Plot) {
        if let Some(feature) = self {
            feature.add_to(plot);
        }
    }
}

impl<F: PlotFeature> PlotFeature for Vec<F> {
    fn add_to(self, plot: &mut Plot) {
        for feature in self {
            feature.add_to(plot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::MemorySink;
    use crate::plot::coord::{coord_cartesian, coord_flip};
    use crate::plot::facet::facet_wrap;
    use crate::plot::layer::geom::{geom_bar, geom_line, geom_point};
    use crate::plot::layer::Layer;
    use crate::plot::scale::scale_fill_manual;
    use crate::plot::theme::{theme, theme_minimal};
    use serde_json::json;
    use std::sync::Arc;

    fn type_cond_data() -> Data {
        Data::new()
            .column("type", ["X", "X", "Y", "Y", "X", "X", "Y", "X"])
            .column("cond", ["A", "B", "A", "A", "A", "A", "A", "B"])
    }

    #[test]
    fn test_layers_keep_insertion_order() {
        let plot = lets_plot(Data::new()) + geom_bar() + geom_line() + geom_point();
        let geoms: Vec<&Value> = plot
            .layers()
            .iter()
            .filter_map(|layer| layer.get("geom"))
            .collect();
        assert_eq!(geoms, vec!["bar", "line", "point"]);
    }

    #[test]
    fn test_bar_plot_document() {
        let plot = lets_plot(type_cond_data())
            + geom_bar()
                .color("dark_green")
                .alpha(0.3)
                .mapping(|m| m.x("type").fill("cond"))
            + ggsize(700, 350);
        let spec = plot.to_spec();

        let keys: Vec<&str> = spec.keys().collect();
        assert_eq!(
            keys,
            vec!["kind", "data", "mapping", "ggsize", "layers", "scales"]
        );
        assert_eq!(
            spec.into_value(),
            json!({
                "kind": "plot",
                "data": {
                    "type": ["X", "X", "Y", "Y", "X", "X", "Y", "X"],
                    "cond": ["A", "B", "A", "A", "A", "A", "A", "B"]
                },
                "mapping": {},
                "ggsize": {"width": 700, "height": 350},
                "layers": [{
                    "geom": "bar",
                    "stat": "count",
                    "position": "stack",
                    "mapping": {"x": "type", "fill": "cond"},
                    "color": "dark_green",
                    "alpha": 0.3
                }],
                "scales": []
            })
        );
    }

    #[test]
    fn test_layer_sealed_when_added() {
        let bar = geom_bar().alpha(0.3);
        let plot = lets_plot(Data::new()) + bar.clone();
        let _changed = bar.alpha(0.9);
        assert_eq!(plot.layers()[0].get("alpha"), Some(&json!(0.3)));
    }

    #[test]
    fn test_second_coord_and_facet_replace_first() {
        let plot = Plot::new()
            + coord_flip()
            + coord_cartesian().xlim(0.0, 1.0)
            + facet_wrap(["a"])
            + facet_wrap(["b"]);
        let spec = plot.to_spec();
        assert_eq!(
            spec.get("coord"),
            Some(&json!({"name": "cartesian", "xlim": [0.0, 1.0]}))
        );
        assert_eq!(spec.get("facet"), Some(&json!({"name": "wrap", "facets": "b"})));
    }

    #[test]
    fn test_themes_merge() {
        let plot = Plot::new()
            + theme_minimal().legend_position("top")
            + theme().legend_position("bottom");
        assert_eq!(
            plot.to_spec().get("theme"),
            Some(&json!({"name": "minimal", "legend_position": "bottom"}))
        );
    }

    #[test]
    fn test_labels() {
        let plot = Plot::new()
            + ggtitle("Fuel economy", "by class")
            + labs().caption("Source: EPA").x("Displacement")
            + ylab("Highway MPG");
        let spec = plot.to_spec();
        assert_eq!(
            spec.get("ggtitle"),
            Some(&json!({"text": "Fuel economy", "subtitle": "by class"}))
        );
        assert_eq!(spec.get("caption"), Some(&json!({"text": "Source: EPA"})));
        assert_eq!(
            spec.get("scales"),
            Some(&json!([
                {"aesthetic": "x", "name": "Displacement"},
                {"aesthetic": "y", "name": "Highway MPG"}
            ]))
        );
    }

    #[test]
    fn test_scales_keep_insertion_order() {
        let plot = Plot::new() + scale_fill_manual(vec!["red", "blue"]) + xlab("Type");
        let aesthetics: Vec<&Value> = plot
            .scales()
            .iter()
            .filter_map(|scale| scale.get("aesthetic"))
            .collect();
        assert_eq!(aesthetics, vec!["fill", "x"]);
    }

    #[test]
    fn test_plot_mapping_and_optional_features() {
        let plot = lets_plot(Data::new()).mapping(|m| m.x("cty").y("hwy"))
            + None::<GgSize>
            + vec![geom_point(), geom_point().size(3.0)];
        let spec = plot.to_spec();
        assert_eq!(spec.get("mapping"), Some(&json!({"x": "cty", "y": "hwy"})));
        assert!(!spec.contains_key("ggsize"));
        assert_eq!(plot.layers().len(), 2);
    }

    #[test]
    fn test_to_spec_is_deterministic() {
        let plot = lets_plot(type_cond_data())
            + geom_bar().mapping(|m| m.x("type"))
            + theme_minimal();
        assert_eq!(plot.to_spec(), plot.to_spec());
        assert_eq!(plot.to_spec().to_string(), plot.to_spec().to_string());
    }

    #[test]
    fn test_show_through_context() {
        let sink = Arc::new(MemorySink::new());
        let context = RenderContext::new(sink.clone());
        let plot = lets_plot(Data::new()) + geom_point();
        plot.show(&context).unwrap();

        let documents = sink.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0], plot.to_spec());
    }

    #[test]
    fn test_layer_to_spec_matches_plot_layer() {
        let layer = geom_point().color("red");
        let plot = Plot::new() + layer.clone();
        assert_eq!(plot.layers()[0], layer.to_spec());
    }
}
