// File: crates/strata-core/src/style.rs
// Summary: Style configuration and the three-tier fallback (explicit → defaults → constant).

use crate::color::Color;
use crate::surface::Surface;
use crate::text::TextStyle;
use crate::types::{
    DEFAULT_AXIS_COLOR, DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH,
};

/// Partially specified drawing style. `None` fields fall back during resolution.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    pub show: bool,
    pub stroke_color: Option<Color>,
    pub stroke_width: Option<f64>,
    pub font: Option<String>,
    pub font_size: Option<f64>,
    pub font_color: Option<Color>,
}

impl Style {
    /// An otherwise empty style with `show` set.
    pub fn shown() -> Self {
        Self { show: true, ..Self::default() }
    }

    pub fn with_stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = Some(color);
        self
    }

    pub fn with_stroke_width(mut self, width: f64) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Fill every unset field from `defaults`. `show` is never inherited.
    pub fn with_defaults_from(&self, defaults: &Style) -> Style {
        Style {
            show: self.show,
            stroke_color: self.stroke_color.or(defaults.stroke_color),
            stroke_width: self.stroke_width.or(defaults.stroke_width),
            font: self.font.clone().or_else(|| defaults.font.clone()),
            font_size: self.font_size.or(defaults.font_size),
            font_color: self.font_color.or(defaults.font_color),
        }
    }

    /// Resolve against `defaults`, then against the crate constants.
    ///
    /// Every measuring and drawing pass goes through this one function so the
    /// layout computed in a measure pass matches what is later drawn.
    pub fn resolve(&self, defaults: &Style) -> ResolvedStyle {
        let merged = self.with_defaults_from(defaults);
        ResolvedStyle {
            show: merged.show,
            stroke_color: merged.stroke_color.unwrap_or(DEFAULT_STROKE_COLOR),
            stroke_width: merged.stroke_width.unwrap_or(DEFAULT_STROKE_WIDTH),
            font: merged.font.unwrap_or_else(|| DEFAULT_FONT.to_string()),
            font_size: merged.font_size.unwrap_or(DEFAULT_FONT_SIZE),
            font_color: merged.font_color.unwrap_or(DEFAULT_AXIS_COLOR),
        }
    }
}

/// A style with every attribute decided.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedStyle {
    pub show: bool,
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub font: String,
    pub font_size: f64,
    pub font_color: Color,
}

impl ResolvedStyle {
    pub fn text_style(&self) -> TextStyle {
        TextStyle::new(self.font.clone(), self.font_size)
    }

    /// Re-assert stroke attributes on the surface.
    pub fn apply_stroke(&self, surface: &mut dyn Surface) {
        surface.set_stroke_color(self.stroke_color);
        surface.set_stroke_width(self.stroke_width);
    }

    /// Re-assert font attributes on the surface.
    pub fn apply_text(&self, surface: &mut dyn Surface) {
        surface.set_font(&self.font);
        surface.set_font_size(self.font_size);
        surface.set_font_color(self.font_color);
    }

    /// Re-assert every attribute the surface tracks.
    pub fn apply(&self, surface: &mut dyn Surface) {
        self.apply_stroke(surface);
        self.apply_text(surface);
    }
}
