// File: crates/strata-core/src/grid.rs
// Summary: Grid lines derived from ticks and rendered across the canvas.

use crate::geometry::PixelBox;
use crate::range::Range;
use crate::style::Style;
use crate::surface::Surface;
use crate::tick::Tick;

/// A reference line at `value`. Horizontal lines belong to vertical axes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GridLine {
    pub value: f64,
    pub is_minor: bool,
    pub is_vertical: bool,
    pub style: Style,
}

impl GridLine {
    pub fn major(value: f64) -> Self {
        Self { value, ..Self::default() }
    }

    pub fn minor(value: f64) -> Self {
        Self { value, is_minor: true, ..Self::default() }
    }

    pub fn vertical(mut self) -> Self {
        self.is_vertical = true;
        self
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Draw across `canvas` at the mapped position of `value`, resolving this
    /// line's style against `defaults`.
    pub fn render(&self, surface: &mut dyn Surface, canvas: PixelBox, range: &Range, defaults: &Style) {
        self.style.resolve(defaults).apply_stroke(surface);
        if self.is_vertical {
            let x = canvas.left + range.translate(self.value);
            surface.move_to(x, canvas.bottom);
            surface.line_to(x, canvas.top);
        } else {
            let y = canvas.bottom - range.translate(self.value);
            surface.move_to(canvas.left, y);
            surface.line_to(canvas.right, y);
        }
        surface.stroke();
    }
}

/// One major grid line per tick.
pub fn generate_grid_lines(ticks: &[Tick], is_vertical: bool) -> Vec<GridLine> {
    ticks
        .iter()
        .map(|t| GridLine { value: t.value, is_minor: false, is_vertical, style: Style::default() })
        .collect()
}
