// File: crates/strata-core/src/axis.rs
// Summary: Vertical value axis: tick density from measured labels, bounding-box layout, rendering.

use tracing::{debug, trace};

use crate::geometry::PixelBox;
use crate::grid::{generate_grid_lines, GridLine};
use crate::range::Range;
use crate::style::{ResolvedStyle, Style};
use crate::surface::Surface;
use crate::text::TextMeasurer;
use crate::tick::{generate_ticks, sorted_ticks, Tick};
use crate::types::{
    AxisSide, DEFAULT_HORIZONTAL_TICK_WIDTH, DEFAULT_MINIMUM_TICK_VERTICAL_SPACING,
    DEFAULT_Y_AXIS_MARGIN,
};

/// A vertical rule for a value range. A chart carries a primary (right) and a
/// secondary (left) one.
#[derive(Clone, Debug, Default)]
pub struct YAxis {
    pub name: String,
    pub style: Style,
    /// Highlighted line at value 0, drawn when `zero.style.show` is set.
    pub zero: GridLine,
    pub side: AxisSide,
    pub value_formatter: Option<fn(f64) -> String>,
    /// Overrides the data-derived value interval; the domain is still set by layout.
    pub range: Option<Range>,
    /// Explicit ticks. When present, generation is skipped entirely.
    pub ticks: Option<Vec<Tick>>,
    /// Explicit grid lines. When absent, one major line per tick.
    pub grid_lines: Option<Vec<GridLine>>,
    pub grid_major_style: Style,
    pub grid_minor_style: Style,
}

struct PlacedLabel {
    label: String,
    /// Pixel y of the tick.
    y: i32,
    left: i32,
    width: i32,
    height: i32,
}

struct AxisLayout {
    line_x: i32,
    labels: Vec<PlacedLabel>,
}

impl YAxis {
    pub fn new(side: AxisSide) -> Self {
        Self { side, style: Style::shown(), ..Self::default() }
    }

    pub fn primary() -> Self { Self::new(AxisSide::Primary) }

    pub fn secondary() -> Self { Self::new(AxisSide::Secondary) }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ticks(mut self, ticks: Vec<Tick>) -> Self {
        self.ticks = Some(ticks);
        self
    }

    /// Configured ticks if present, otherwise ticks generated from the
    /// available vertical space.
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

    /// `ceil(domain / (label height + spacing))`, at least 1. The label for
    /// `range.min` stands in for every label.
    pub fn tick_count<M, F>(&self, measurer: &M, range: &Range, defaults: &Style, formatter: &F) -> usize
    where
        M: TextMeasurer + ?Sized,
        F: Fn(f64) -> String + ?Sized,
    {
        let style = self.style.resolve(defaults);
        let label = formatter(range.min);
        let tb = measurer.measure_text(&label, &style.text_style());
        let per_tick = f64::from((tb.height() + DEFAULT_MINIMUM_TICK_VERTICAL_SPACING).max(1));
        let count = (f64::from(range.domain.max(0)) / per_tick).ceil().max(1.0) as usize;
        debug!(axis = %self.name, count, label_height = tb.height(), "y axis tick count");
        count
    }

    pub fn get_grid_lines(&self, ticks: &[Tick]) -> Vec<GridLine> {
        match &self.grid_lines {
            Some(lines) => lines.clone(),
            None => generate_grid_lines(ticks, false),
        }
    }

    /// The side-appropriate x of the axis line and of the label anchor.
    fn anchors(&self, canvas: PixelBox) -> (i32, i32) {
        match self.side {
            AxisSide::Primary => (canvas.right, canvas.right + DEFAULT_Y_AXIS_MARGIN),
            AxisSide::Secondary => (canvas.left, canvas.left - DEFAULT_Y_AXIS_MARGIN),
        }
    }

    fn layout<M>(&self, measurer: &M, canvas: PixelBox, range: &Range, style: &ResolvedStyle, ticks: &[Tick]) -> AxisLayout
    where
        M: TextMeasurer + ?Sized,
    {
        let (line_x, text_x) = self.anchors(canvas);
        let text_style = style.text_style();
        let labels = sorted_ticks(ticks)
            .into_iter()
            .map(|t| {
                let y = canvas.bottom - range.translate(t.value);
                let tb = measurer.measure_text(&t.label, &text_style);
                trace!(label = %t.label, y, width = tb.width(), height = tb.height(), "measured y label");
                let left = match self.side {
                    AxisSide::Primary => text_x,
                    AxisSide::Secondary => text_x - tb.width(),
                };
                PlacedLabel { label: t.label, y, left, width: tb.width(), height: tb.height() }
            })
            .collect();
        AxisLayout { line_x, labels }
    }

    /// Bounding box of every label plus the axis line x. No ticks gives a
    /// zero-sized box at the bottom of the line.
    pub fn measure<M>(&self, measurer: &M, canvas: PixelBox, range: &Range, defaults: &Style, ticks: &[Tick]) -> PixelBox
    where
        M: TextMeasurer + ?Sized,
    {
        let style = self.style.resolve(defaults);
        let layout = self.layout(measurer, canvas, range, &style, ticks);
        let labels = layout.labels.iter().map(|l| {
            let half = l.height / 2;
            PixelBox::from_ltrb(l.left, l.y - half, l.left + l.width, l.y + half)
        });
        match labels.reduce(|acc, b| acc.union(&b)) {
            Some(mut bounds) => {
                bounds.left = bounds.left.min(layout.line_x);
                bounds.right = bounds.right.max(layout.line_x);
                bounds
            }
            None => PixelBox::point(layout.line_x, canvas.bottom),
        }
    }

    /// Draw the axis line, tick marks, labels, then the optional zero line and grid.
    pub fn render(&self, surface: &mut dyn Surface, canvas: PixelBox, range: &Range, defaults: &Style, ticks: &[Tick]) {
        let style = self.style.resolve(defaults);
        let layout = self.layout(&*surface, canvas, range, &style, ticks);
        style.apply(surface);

        let line_x = layout.line_x;
        surface.move_to(line_x, canvas.bottom);
        surface.line_to(line_x, canvas.top);
        surface.stroke();

        let tick_end = match self.side {
            AxisSide::Primary => line_x + DEFAULT_HORIZONTAL_TICK_WIDTH,
            AxisSide::Secondary => line_x - DEFAULT_HORIZONTAL_TICK_WIDTH,
        };
        for label in &layout.labels {
            if !label.label.is_empty() {
                surface.draw_text(&label.label, label.left, label.y + label.height / 2);
            }
            surface.move_to(line_x, label.y);
            surface.line_to(tick_end, label.y);
            surface.stroke();
        }

        if self.zero.style.show {
            self.zero.render(surface, canvas, range, defaults);
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
