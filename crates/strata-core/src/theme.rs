// File: crates/strata-core/src/theme.rs
// Summary: Light/Dark theme presets; a theme is the defaults tier of style resolution.

use crate::color::Color;
use crate::style::Style;
use crate::types::{DEFAULT_FONT, DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    pub zero_line: Color,
    pub line_stroke: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_argb(255, 18, 18, 20),
            grid: Color::from_argb(255, 40, 40, 45),
            axis_line: Color::from_argb(255, 180, 180, 190),
            axis_label: Color::from_argb(255, 235, 235, 245),
            zero_line: Color::from_argb(255, 255, 230, 70),
            line_stroke: Color::from_argb(255, 64, 160, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_argb(255, 250, 250, 252),
            grid: Color::from_argb(255, 230, 230, 235),
            axis_line: Color::from_argb(255, 60, 60, 70),
            axis_label: Color::from_argb(255, 20, 20, 30),
            zero_line: Color::from_argb(255, 30, 120, 240),
            line_stroke: Color::from_argb(255, 32, 120, 200),
        }
    }

    pub fn solarized_dark() -> Self {
        // Base colors from Solarized dark palette
        Self {
            name: "solarized-dark",
            background: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            axis_line: Color::from_argb(255, 0x93, 0xa1, 0xa1),  // base1
            axis_label: Color::from_argb(255, 0xee, 0xe8, 0xd5), // base2
            zero_line: Color::from_argb(255, 0xb5, 0x89, 0x00),  // yellow
            line_stroke: Color::from_argb(255, 0x26, 0x8b, 0xd2), // blue
        }
    }

    pub fn solarized_light() -> Self {
        Self {
            name: "solarized-light",
            background: Color::from_argb(255, 0xfd, 0xf6, 0xe3), // base3
            grid: Color::from_argb(255, 0xee, 0xe8, 0xd5),       // base2
            axis_line: Color::from_argb(255, 0x65, 0x7b, 0x83),  // base00
            axis_label: Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            zero_line: Color::from_argb(255, 0xcb, 0x4b, 0x16),  // orange
            line_stroke: Color::from_argb(255, 0x26, 0x8b, 0xd2),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: Color::from_argb(255, 0x00, 0x00, 0x00),
            grid: Color::from_argb(255, 0x22, 0x22, 0x22),
            axis_line: Color::from_argb(255, 0xff, 0xff, 0xff),
            axis_label: Color::from_argb(255, 0xff, 0xff, 0xff),
            zero_line: Color::from_argb(255, 0xff, 0xff, 0x00),
            line_stroke: Color::from_argb(255, 0x00, 0xff, 0xff),
        }
    }

    /// Defaults for axis lines, tick marks and labels.
    pub fn axis_defaults(&self) -> Style {
        Style {
            show: true,
            stroke_color: Some(self.axis_line),
            stroke_width: Some(DEFAULT_STROKE_WIDTH),
            font: Some(DEFAULT_FONT.to_string()),
            font_size: Some(DEFAULT_FONT_SIZE),
            font_color: Some(self.axis_label),
        }
    }

    /// Defaults for major grid lines; minor lines get a faded copy.
    pub fn grid_defaults(&self, minor: bool) -> Style {
        let color = if minor { self.grid.with_alpha(100) } else { self.grid };
        Style { show: true, stroke_color: Some(color), stroke_width: Some(1.0), ..Style::default() }
    }

    pub fn zero_line_style(&self) -> Style {
        Style { show: true, stroke_color: Some(self.zero_line), stroke_width: Some(1.5), ..Style::default() }
    }

    /// Defaults for series strokes.
    pub fn series_defaults(&self) -> Style {
        Style { show: true, stroke_color: Some(self.line_stroke), stroke_width: Some(2.0), ..Style::default() }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![
        Theme::dark(),
        Theme::light(),
        Theme::solarized_dark(),
        Theme::solarized_light(),
        Theme::high_contrast_dark(),
    ]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
