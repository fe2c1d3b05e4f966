//! Themes
//!
//! A theme is either a named base theme (`theme_minimal()`), a flavor that
//! recolors the current theme (`flavor_darcula()`), or a set of element
//! overrides built with [`theme()`]. Themes combine with `+`; on a shared key
//! the right-hand side wins. Adding a theme to a plot merges it onto the
//! plot's current theme the same way.

use serde_json::Value;
use std::ops::Add;

use crate::plot::main::{Plot, PlotFeature};
use crate::{Capability, Options};

capability! {
    /// `element_text()`: styling of a text element
    pub struct ElementText {
        color: Value => "color",
        family: String => "family",
        /// `"plain"`, `"italic"`, `"bold"` or `"bold_italic"`
        face: String => "face",
        size: f64 => "size",
        angle: f64 => "angle",
        hjust: f64 => "hjust",
        vjust: f64 => "vjust",
        margin: Value => "margin",
    }
}

capability! {
    pub struct ElementLine {
        color: Value => "color",
        size: f64 => "size",
        linetype: Value => "linetype",
    }
}

capability! {
    pub struct ElementRect {
        fill: Value => "fill",
        color: Value => "color",
        size: f64 => "size",
        linetype: Value => "linetype",
    }
}

/// Element that draws nothing
pub fn element_blank() -> Value {
    Options::new().with("blank", true).into_value()
}

pub fn element_text() -> ElementText {
    ElementText::default()
}

pub fn element_line() -> ElementLine {
    ElementLine::default()
}

pub fn element_rect() -> ElementRect {
    ElementRect::default()
}

impl From<ElementText> for Value {
    fn from(element: ElementText) -> Self {
        element.fragment().into_value()
    }
}

impl From<ElementLine> for Value {
    fn from(element: ElementLine) -> Self {
        element.fragment().into_value()
    }
}

impl From<ElementRect> for Value {
    fn from(element: ElementRect) -> Self {
        element.fragment().into_value()
    }
}

capability! {
    /// Theme element overrides
    pub struct ThemeElements {
        line: Value => "line",
        rect: Value => "rect",
        text: Value => "text",
        title: Value => "title",
        axis: Value => "axis",
        axis_ontop: bool => "axis_ontop",
        axis_title: Value => "axis_title",
        axis_title_x: Value => "axis_title_x",
        axis_title_y: Value => "axis_title_y",
        axis_text: Value => "axis_text",
        axis_text_x: Value => "axis_text_x",
        axis_text_y: Value => "axis_text_y",
        axis_ticks: Value => "axis_ticks",
        axis_line: Value => "axis_line",
        /// `"left"`, `"right"`, `"bottom"`, `"top"`, `"none"` or `[x, y]`
        legend_position: Value => "legend_position",
        legend_justification: Value => "legend_justification",
        legend_direction: String => "legend_direction",
        legend_title: Value => "legend_title",
        legend_text: Value => "legend_text",
        legend_background: Value => "legend_background",
        panel_background: Value => "panel_background",
        panel_border: Value => "panel_border",
        panel_grid: Value => "panel_grid",
        panel_grid_major: Value => "panel_grid_major",
        panel_grid_minor: Value => "panel_grid_minor",
        plot_background: Value => "plot_background",
        plot_title: Value => "plot_title",
        plot_subtitle: Value => "plot_subtitle",
        plot_caption: Value => "plot_caption",
        strip_background: Value => "strip_background",
        strip_text: Value => "strip_text",
        exponent_format: String => "exponent_format",
    }
}

/// Plot theme
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    base: Options,
    elements: ThemeElements,
}

impl Theme {
    fn from_options(base: Options) -> Self {
        Self {
            base,
            elements: ThemeElements::default(),
        }
    }

    forward!(elements {
        line: Value,
        rect: Value,
        text: Value,
        title: Value,
        axis: Value,
        axis_ontop: bool,
        axis_title: Value,
        axis_title_x: Value,
        axis_title_y: Value,
        axis_text: Value,
        axis_text_x: Value,
        axis_text_y: Value,
        axis_ticks: Value,
        axis_line: Value,
        legend_position: Value,
        legend_justification: Value,
        legend_direction: String,
        legend_title: Value,
        legend_text: Value,
        legend_background: Value,
        panel_background: Value,
        panel_border: Value,
        panel_grid: Value,
        panel_grid_major: Value,
        panel_grid_minor: Value,
        plot_background: Value,
        plot_title: Value,
        plot_subtitle: Value,
        plot_caption: Value,
        strip_background: Value,
        strip_text: Value,
        exponent_format: String,
    });
}

impl Capability for Theme {
    fn fragment(&self) -> Options {
        self.base.clone().merge(self.elements.fragment())
    }
}

impl Add for Theme {
    type Output = Theme;

    fn add(self, rhs: Theme) -> Theme {
        Theme::from_options(self.fragment().merge(rhs.fragment()))
    }
}

impl PlotFeature for Theme {
    fn add_to(self, plot: &mut Plot) {
        plot.merge_theme(self);
    }
}

/// Empty theme to customise with element setters
pub fn theme() -> Theme {
    Theme::default()
}

fn named(name: &str) -> Theme {
    Theme::from_options(Options::new().with("name", name))
}

fn flavor(name: &str) -> Theme {
    Theme::from_options(Options::new().with("flavor", name))
}

pub fn theme_grey() -> Theme {
    named("grey")
}

pub fn theme_light() -> Theme {
    named("light")
}

pub fn theme_classic() -> Theme {
    named("classic")
}

pub fn theme_minimal() -> Theme {
    named("minimal")
}

pub fn theme_minimal2() -> Theme {
    named("minimal2")
}

pub fn theme_bw() -> Theme {
    named("bw")
}

pub fn theme_void() -> Theme {
    named("void")
}

/// Theme with nothing but the data drawn
pub fn theme_none() -> Theme {
    named("none")
}

pub fn flavor_darcula() -> Theme {
    flavor("darcula")
}

pub fn flavor_solarized_light() -> Theme {
    flavor("solarized_light")
}

pub fn flavor_solarized_dark() -> Theme {
    flavor("solarized_dark")
}

pub fn flavor_high_contrast_light() -> Theme {
    flavor("high_contrast_light")
}

pub fn flavor_high_contrast_dark() -> Theme {
    flavor("high_contrast_dark")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_named_theme() {
        assert_eq!(
            theme_minimal2().fragment().into_value(),
            json!({"name": "minimal2"})
        );
    }

    #[test]
    fn test_elements() {
        let theme = theme()
            .legend_position("bottom")
            .axis_title(element_blank())
            .plot_title(element_text().size(18.0).face("bold"))
            .panel_grid_major(element_line().color("#dddddd"));
        assert_eq!(
            theme.fragment().into_value(),
            json!({
                "axis_title": {"blank": true},
                "legend_position": "bottom",
                "panel_grid_major": {"color": "#dddddd"},
                "plot_title": {"face": "bold", "size": 18.0}
            })
        );
    }

    #[test]
    fn test_right_hand_theme_wins() {
        let combined = theme_minimal().legend_position("top")
            + flavor_darcula()
            + theme().legend_position("none");
        assert_eq!(
            combined.fragment().into_value(),
            json!({"name": "minimal", "legend_position": "none", "flavor": "darcula"})
        );
    }

    #[test]
    fn test_setter_after_combination_wins() {
        let combined = (theme().legend_position("top") + theme_bw()).legend_position("left");
        assert_eq!(
            combined.fragment().get("legend_position"),
            Some(&json!("left"))
        );
    }

    #[test]
    fn test_element_rect_value() {
        let value: Value = element_rect().fill("white").size(0.0).into();
        assert_eq!(value, json!({"fill": "white", "size": 0.0}));
    }
}
