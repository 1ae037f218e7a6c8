// File: crates/strata-core/src/chart.rs
// Summary: Thin chart driver: ranges from series data, measure-and-shrink axis layout, then drawing.

use tracing::{debug, warn};

use crate::axis::YAxis;
use crate::format::float_value_formatter;
use crate::geometry::PixelBox;
use crate::range::Range;
use crate::series::{Series, StackedSeries, TimeSeries};
use crate::style::Style;
use crate::surface::Surface;
use crate::text::TextMeasurer;
use crate::theme::Theme;
use crate::tick::Tick;
use crate::types::{AxisSide, Insets, HEIGHT, WIDTH};
use crate::xaxis::XAxis;

/// Upper bound on shrink-and-remeasure rounds in [`Chart::layout`].
pub const MAX_LAYOUT_PASSES: usize = 4;

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
        }
    }
}

impl RenderOptions {
    /// The full image as a box.
    pub fn bounds(&self) -> PixelBox {
        PixelBox::from_ltwh(0, 0, self.width, self.height)
    }

    /// The plot area inside the insets.
    pub fn canvas_box(&self) -> PixelBox {
        PixelBox::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.right as i32,
            self.height - self.insets.bottom as i32,
        )
    }
}

/// Value ranges for one canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartRanges {
    pub x: Range,
    pub y: Range,
    pub y_secondary: Range,
}

/// Result of the measure pass: the final canvas and the ticks laid out on it.
#[derive(Clone, Debug)]
pub struct ChartLayout {
    pub canvas: PixelBox,
    pub ranges: ChartRanges,
    pub x_ticks: Vec<Tick>,
    pub y_ticks: Vec<Tick>,
    pub y_secondary_ticks: Vec<Tick>,
}

pub struct Chart<S = TimeSeries> {
    pub x_axis: XAxis,
    pub y_axis: YAxis,
    pub y_axis_secondary: YAxis,
    pub series: Vec<StackedSeries<S>>,
}

impl<S: Series> Default for Chart<S> {
    fn default() -> Self { Self::new() }
}

impl<S: Series> Chart<S> {
    pub fn new() -> Self {
        Self {
            x_axis: XAxis::new(),
            y_axis: YAxis::primary(),
            y_axis_secondary: YAxis { side: AxisSide::Secondary, ..YAxis::default() },
            series: Vec::new(),
        }
    }

    pub fn add_series(&mut self, series: StackedSeries<S>) {
        self.series.push(series);
    }

    fn y_axis_for(&self, side: AxisSide) -> &YAxis {
        match side {
            AxisSide::Primary => &self.y_axis,
            AxisSide::Secondary => &self.y_axis_secondary,
        }
    }

    /// Axis formatter, else the first series' default, else two decimals.
    fn x_formatter(&self) -> fn(f64) -> String {
        self.x_axis
            .value_formatter
            .or_else(|| self.series.first().map(|s| s.base.value_formatters().0))
            .unwrap_or(float_value_formatter)
    }

    fn y_formatter(&self, side: AxisSide) -> fn(f64) -> String {
        self.y_axis_for(side)
            .value_formatter
            .or_else(|| {
                self.series
                    .iter()
                    .find(|s| s.y_axis() == side)
                    .map(|s| s.base.value_formatters().1)
            })
            .unwrap_or(float_value_formatter)
    }

    /// X extent of every series; y extent of every drawn (stacked) value per side.
    pub fn ranges(&self, canvas: PixelBox) -> ChartRanges {
        let x = match self.x_axis.range {
            Some(r) => r.with_domain(canvas.width()),
            None => Range::from_values(self.series.iter().flat_map(|s| s.x_values()), canvas.width()),
        };
        let y_for = |side: AxisSide| match self.y_axis_for(side).range {
            Some(r) => r.with_domain(canvas.height()),
            None => Range::from_values(
                self.series
                    .iter()
                    .filter(|s| s.y_axis() == side)
                    .flat_map(|s| s.rendered_y_values()),
                canvas.height(),
            ),
        };
        ChartRanges { x, y: y_for(AxisSide::Primary), y_secondary: y_for(AxisSide::Secondary) }
    }

    fn ticks_for<M>(&self, measurer: &M, ranges: &ChartRanges, theme: &Theme) -> (Vec<Tick>, Vec<Tick>, Vec<Tick>)
    where
        M: TextMeasurer + ?Sized,
    {
        let defaults = theme.axis_defaults();
        let x = self.x_axis.get_ticks(measurer, &ranges.x, &defaults, &self.x_formatter());
        let y = self.y_axis.get_ticks(measurer, &ranges.y, &defaults, &self.y_formatter(AxisSide::Primary));
        let y2 = self.y_axis_secondary.get_ticks(
            measurer,
            &ranges.y_secondary,
            &defaults,
            &self.y_formatter(AxisSide::Secondary),
        );
        (x, y, y2)
    }

    /// Ranges and ticks for `canvas`, plus the union of the canvas and every
    /// shown axis box.
    fn measure_pass<M>(&self, measurer: &M, canvas: PixelBox, theme: &Theme) -> (ChartLayout, PixelBox)
    where
        M: TextMeasurer + ?Sized,
    {
        let defaults = theme.axis_defaults();
        let ranges = self.ranges(canvas);
        let (x_ticks, y_ticks, y2_ticks) = self.ticks_for(measurer, &ranges, theme);

        let mut outer = canvas;
        if self.x_axis.style.show {
            outer = outer.union(&self.x_axis.measure(measurer, canvas, &ranges.x, &defaults, &x_ticks));
        }
        if self.y_axis.style.show {
            outer = outer.union(&self.y_axis.measure(measurer, canvas, &ranges.y, &defaults, &y_ticks));
        }
        if self.y_axis_secondary.style.show {
            outer = outer.union(&self.y_axis_secondary.measure(
                measurer,
                canvas,
                &ranges.y_secondary,
                &defaults,
                &y2_ticks,
            ));
        }
        let layout = ChartLayout { canvas, ranges, x_ticks, y_ticks, y_secondary_ticks: y2_ticks };
        (layout, outer)
    }

    /// Lay the axes out on the inset canvas and shrink the canvas until every
    /// shown axis fits inside the image. Ticks are
    /// regenerated and re-measured after each shrink, since new domains can
    /// produce wider labels. Gives up after [`MAX_LAYOUT_PASSES`].
    pub fn layout<M>(&self, measurer: &M, opts: &RenderOptions) -> ChartLayout
    where
        M: TextMeasurer + ?Sized,
    {
        let bounds = opts.bounds();
        let (mut layout, mut outer) = self.measure_pass(measurer, opts.canvas_box(), &opts.theme);
        for pass in 1..=MAX_LAYOUT_PASSES {
            let adjusted = constrain(layout.canvas, outer, bounds);
            debug!(pass, canvas = ?layout.canvas, ?adjusted, "chart canvas");
            if adjusted == layout.canvas {
                return layout;
            }
            if pass == MAX_LAYOUT_PASSES {
                warn!(canvas = ?layout.canvas, ?outer, "axes still overflow the image after the last layout pass");
                break;
            }
            (layout, outer) = self.measure_pass(measurer, adjusted, &opts.theme);
        }
        layout
    }

    /// Lay out, then draw shown axes (with grid and zero lines) and every series.
    pub fn render(&self, surface: &mut dyn Surface, opts: &RenderOptions) -> ChartLayout {
        let layout = self.layout(&*surface, opts);
        let theme = &opts.theme;
        let axis_defaults = theme.axis_defaults();
        let canvas = layout.canvas;

        if self.x_axis.style.show {
            themed_x(&self.x_axis, theme).render(surface, canvas, &layout.ranges.x, &axis_defaults, &layout.x_ticks);
        }
        if self.y_axis.style.show {
            themed_y(&self.y_axis, theme).render(surface, canvas, &layout.ranges.y, &axis_defaults, &layout.y_ticks);
        }
        if self.y_axis_secondary.style.show {
            themed_y(&self.y_axis_secondary, theme).render(
                surface,
                canvas,
                &layout.ranges.y_secondary,
                &axis_defaults,
                &layout.y_secondary_ticks,
            );
        }

        let series_defaults = theme.series_defaults();
        for s in &self.series {
            let y_range = match s.y_axis() {
                AxisSide::Primary => &layout.ranges.y,
                AxisSide::Secondary => &layout.ranges.y_secondary,
            };
            s.render(surface, canvas, &layout.ranges.x, y_range, &series_defaults);
        }
        layout
    }
}

/// Shrink `canvas` by however far `outer` pokes out of `bounds` on each side.
fn constrain(canvas: PixelBox, outer: PixelBox, bounds: PixelBox) -> PixelBox {
    PixelBox::from_ltrb(
        canvas.left + (bounds.left - outer.left).max(0),
        canvas.top + (bounds.top - outer.top).max(0),
        canvas.right - (outer.right - bounds.right).max(0),
        canvas.bottom - (outer.bottom - bounds.bottom).max(0),
    )
}

fn themed_grid(major: &Style, minor: &Style, theme: &Theme) -> (Style, Style) {
    (major.with_defaults_from(&theme.grid_defaults(false)), minor.with_defaults_from(&theme.grid_defaults(true)))
}

fn themed_y(axis: &YAxis, theme: &Theme) -> YAxis {
    let mut axis = axis.clone();
    (axis.grid_major_style, axis.grid_minor_style) = themed_grid(&axis.grid_major_style, &axis.grid_minor_style, theme);
    axis.zero.style = axis.zero.style.with_defaults_from(&theme.zero_line_style());
    axis
}

fn themed_x(axis: &XAxis, theme: &Theme) -> XAxis {
    let mut axis = axis.clone();
    (axis.grid_major_style, axis.grid_minor_style) = themed_grid(&axis.grid_major_style, &axis.grid_minor_style, theme);
    axis
}
