// File: crates/strata-core/src/xaxis.rs
// Summary: Horizontal axis along the canvas bottom; label width drives tick density.

use tracing::debug;

use crate::geometry::PixelBox;
use crate::grid::{generate_grid_lines, GridLine};
use crate::range::Range;
use crate::style::{ResolvedStyle, Style};
use crate::surface::Surface;
use crate::text::TextMeasurer;
use crate::tick::{generate_ticks, sorted_ticks, Tick};
use crate::types::{
    DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING, DEFAULT_VERTICAL_TICK_HEIGHT, DEFAULT_X_AXIS_MARGIN,
};

#[derive(Clone, Debug, Default)]
pub struct XAxis {
    pub name: String,
    pub style: Style,
    pub value_formatter: Option<fn(f64) -> String>,
    pub range: Option<Range>,
    pub ticks: Option<Vec<Tick>>,
    pub grid_lines: Option<Vec<GridLine>>,
    pub grid_major_style: Style,
    pub grid_minor_style: Style,
}

struct PlacedLabel {
    label: String,
    x: i32,
    left: i32,
    width: i32,
    baseline: i32,
}

impl XAxis {
    pub fn new() -> Self {
        Self { style: Style::shown(), ..Self::default() }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    pub fn get_ticks<M, F>(&self, measurer: &M, range: &Range, defaults: &Style, formatter: &F) -> Vec<Tick>
    where
        M: TextMeasurer + ?Sized,
        F: Fn(f64) -> String + ?Sized,
    {
        if let Some(ticks) = &self.ticks {
            return ticks.clone();
        }
        let count = self.tick_count(measurer, range, defaults, formatter);
        generate_ticks(range, count, formatter)
    }

    /// `ceil(domain / (label width + spacing))`, at least 1.
    pub fn tick_count<M, F>(&self, measurer: &M, range: &Range, defaults: &Style, formatter: &F) -> usize
    where
        M: TextMeasurer + ?Sized,
        F: Fn(f64) -> String + ?Sized,
    {
        let style = self.style.resolve(defaults);
        let label = formatter(range.min);
        let tb = measurer.measure_text(&label, &style.text_style());
        let per_tick = f64::from((tb.width() + DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING).max(1));
        let count = (f64::from(range.domain.max(0)) / per_tick).ceil().max(1.0) as usize;
        debug!(axis = %self.name, count, label_width = tb.width(), "x axis tick count");
        count
    }

    pub fn get_grid_lines(&self, ticks: &[Tick]) -> Vec<GridLine> {
        match &self.grid_lines {
            Some(lines) => lines.clone(),
            None => generate_grid_lines(ticks, true),
        }
    }

    fn layout<M>(&self, measurer: &M, canvas: PixelBox, range: &Range, style: &ResolvedStyle, ticks: &[Tick]) -> Vec<PlacedLabel>
    where
        M: TextMeasurer + ?Sized,
    {
        let text_style = style.text_style();
        sorted_ticks(ticks)
            .into_iter()
            .map(|t| {
                let x = canvas.left + range.translate(t.value);
                let tb = measurer.measure_text(&t.label, &text_style);
                PlacedLabel {
                    label: t.label,
                    x,
                    left: x - tb.width() / 2,
                    width: tb.width(),
                    baseline: canvas.bottom + DEFAULT_X_AXIS_MARGIN + tb.height(),
                }
            })
            .collect()
    }

    /// Union of the label boxes below the canvas, starting at the axis line.
    pub fn measure<M>(&self, measurer: &M, canvas: PixelBox, range: &Range, defaults: &Style, ticks: &[Tick]) -> PixelBox
    where
        M: TextMeasurer + ?Sized,
    {
        let style = self.style.resolve(defaults);
        self.layout(measurer, canvas, range, &style, ticks)
            .iter()
            .map(|l| PixelBox::from_ltrb(l.left, canvas.bottom, l.left + l.width, l.baseline))
            .reduce(|acc, b| acc.union(&b))
            .unwrap_or(PixelBox::point(canvas.left, canvas.bottom))
    }

    pub fn render(&self, surface: &mut dyn Surface, canvas: PixelBox, range: &Range, defaults: &Style, ticks: &[Tick]) {
        let style = self.style.resolve(defaults);
        let labels = self.layout(&*surface, canvas, range, &style, ticks);
        style.apply(surface);

        surface.move_to(canvas.left, canvas.bottom);
        surface.line_to(canvas.right, canvas.bottom);
        surface.stroke();

        for label in &labels {
            surface.move_to(label.x, canvas.bottom);
            surface.line_to(label.x, canvas.bottom + DEFAULT_VERTICAL_TICK_HEIGHT);
            surface.stroke();
            if !label.label.is_empty() {
                surface.draw_text(&label.label, label.left, label.baseline);
            }
        }

        if self.grid_major_style.show || self.grid_minor_style.show {
            for gl in self.get_grid_lines(ticks) {
                let kind = if gl.is_minor { &self.grid_minor_style } else { &self.grid_major_style };
                if kind.show {
                    gl.render(surface, canvas, range, &kind.with_defaults_from(defaults));
                }
            }
        }
    }
}
