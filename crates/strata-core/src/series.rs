// File: crates/strata-core/src/series.rs
// Summary: Value providers (continuous and time series) and flat layer stacking.
// Notes:
// - A stack is a base series plus an ordered list of layers of the same type;
//   layers never contain further layers.
// - Per-layer render offsets come from a single prefix-sum pass over the layers.

use chrono::{DateTime, Utc};
use tracing::warn;

use crate::error::{SeriesError, SeriesResult};
use crate::format::{float_value_formatter, time_to_f64, time_value_formatter};
use crate::geometry::PixelBox;
use crate::range::Range;
use crate::style::{ResolvedStyle, Style};
use crate::surface::Surface;
use crate::types::AxisSide;

/// Supplies `(x, y)` pairs by index.
pub trait ValueProvider {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool { self.len() == 0 }
    /// Panics if `index >= len()`.
    fn value(&self, index: usize) -> (f64, f64);
}

/// A named, styled provider that a chart can draw.
pub trait Series: ValueProvider {
    fn name(&self) -> &str;
    fn style(&self) -> &Style;
    fn y_axis(&self) -> AxisSide { AxisSide::Primary }
    /// Default `(x, y)` formatters for axes showing this series.
    fn value_formatters(&self) -> (fn(f64) -> String, fn(f64) -> String) {
        (float_value_formatter, float_value_formatter)
    }
}

/// XY data with plain numeric x values.
#[derive(Clone, Debug, Default)]
pub struct ContinuousSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: AxisSide,
    x_values: Vec<f64>,
    y_values: Vec<f64>,
}

impl ContinuousSeries {
    pub fn try_new(name: impl Into<String>, x_values: Vec<f64>, y_values: Vec<f64>) -> SeriesResult<Self> {
        let name = name.into();
        if x_values.len() != y_values.len() {
            return Err(SeriesError::LengthMismatch { name, x_len: x_values.len(), y_len: y_values.len() });
        }
        Ok(Self { name, style: Style::default(), y_axis: AxisSide::Primary, x_values, y_values })
    }

    pub fn from_points(name: impl Into<String>, points: &[(f64, f64)]) -> Self {
        let (x_values, y_values): (Vec<f64>, Vec<f64>) = points.iter().copied().unzip();
        Self { name: name.into(), x_values, y_values, ..Self::default() }
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_y_axis(mut self, side: AxisSide) -> Self {
        self.y_axis = side;
        self
    }

    pub fn x_values(&self) -> &[f64] { &self.x_values }
    pub fn y_values(&self) -> &[f64] { &self.y_values }
}

impl ValueProvider for ContinuousSeries {
    fn len(&self) -> usize { self.x_values.len() }
    fn value(&self, index: usize) -> (f64, f64) { (self.x_values[index], self.y_values[index]) }
}

impl Series for ContinuousSeries {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }
    fn y_axis(&self) -> AxisSide { self.y_axis }
}

/// XY data keyed by UTC timestamps; x maps to Unix nanoseconds.
#[derive(Clone, Debug, Default)]
pub struct TimeSeries {
    pub name: String,
    pub style: Style,
    pub y_axis: AxisSide,
    x_values: Vec<DateTime<Utc>>,
    y_values: Vec<f64>,
}

impl TimeSeries {
    pub fn try_new(name: impl Into<String>, x_values: Vec<DateTime<Utc>>, y_values: Vec<f64>) -> SeriesResult<Self> {
        let name = name.into();
        if x_values.len() != y_values.len() {
            return Err(SeriesError::LengthMismatch { name, x_len: x_values.len(), y_len: y_values.len() });
        }
        Ok(Self { name, style: Style::default(), y_axis: AxisSide::Primary, x_values, y_values })
    }

    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn with_y_axis(mut self, side: AxisSide) -> Self {
        self.y_axis = side;
        self
    }

    pub fn x_values(&self) -> &[DateTime<Utc>] { &self.x_values }
    pub fn y_values(&self) -> &[f64] { &self.y_values }
}

impl ValueProvider for TimeSeries {
    fn len(&self) -> usize { self.x_values.len() }
    fn value(&self, index: usize) -> (f64, f64) {
        (time_to_f64(&self.x_values[index]), self.y_values[index])
    }
}

impl Series for TimeSeries {
    fn name(&self) -> &str { &self.name }
    fn style(&self) -> &Style { &self.style }
    fn y_axis(&self) -> AxisSide { self.y_axis }
    fn value_formatters(&self) -> (fn(f64) -> String, fn(f64) -> String) {
        (time_value_formatter, float_value_formatter)
    }
}

/// A base series plus layers drawn cumulatively on top of it.
///
/// Layer 0 is the base; layer `k` is `stack[k - 1]`. All layers are expected
/// to share the base's index domain (see [`StackedSeries::validate`]).
#[derive(Clone, Debug, Default)]
pub struct StackedSeries<S> {
    pub base: S,
    pub stack: Vec<S>,
}

impl<S: Series> StackedSeries<S> {
    pub fn new(base: S) -> Self {
        Self { base, stack: Vec::new() }
    }

    pub fn with_layer(mut self, layer: S) -> Self {
        self.stack.push(layer);
        self
    }

    pub fn push_layer(&mut self, layer: S) {
        self.stack.push(layer);
    }

    /// Base first, then the stack in declared order.
    pub fn layers(&self) -> impl Iterator<Item = &S> + '_ {
        std::iter::once(&self.base).chain(self.stack.iter())
    }

    pub fn layer_count(&self) -> usize { 1 + self.stack.len() }

    pub fn name(&self) -> &str { self.base.name() }

    pub fn y_axis(&self) -> AxisSide { self.base.y_axis() }

    /// Every layer must have the base's length.
    pub fn validate(&self) -> SeriesResult<()> {
        let expected = self.base.len();
        for (i, layer) in self.stack.iter().enumerate() {
            if layer.len() != expected {
                return Err(SeriesError::StackLengthMismatch { layer: i + 1, len: layer.len(), expected });
            }
        }
        Ok(())
    }

    /// The base's x with the sum of the base and every layer's y at `index`.
    pub fn total_value(&self, index: usize) -> (f64, f64) {
        let (x, y) = self.base.value(index);
        let rest: f64 = self.stack.iter().map(|s| layer_y(s, index)).sum();
        (x, y + rest)
    }

    /// Sum of the y values of every layer strictly below `layer` at `index`.
    /// The base (layer 0) has offset 0.
    pub fn layer_offset(&self, layer: usize, index: usize) -> f64 {
        self.layers().take(layer).map(|s| layer_y(s, index)).sum()
    }

    /// `offsets[k][i]` is [`layer_offset`](Self::layer_offset)`(k, i)` for
    /// every layer, computed in one running-sum pass over the base's indices.
    pub fn cumulative_offsets(&self) -> Vec<Vec<f64>> {
        let n = self.base.len();
        let mut running = vec![0.0; n];
        let mut out = Vec::with_capacity(self.layer_count());
        for layer in self.layers() {
            out.push(running.clone());
            for (i, acc) in running.iter_mut().enumerate() {
                *acc += layer_y(layer, i);
            }
        }
        out
    }

    /// Every drawn y (own value plus offset) across all layers, for ranging.
    pub fn rendered_y_values(&self) -> Vec<f64> {
        let offsets = self.cumulative_offsets();
        self.layers()
            .zip(offsets.iter())
            .flat_map(|(layer, off)| {
                (0..layer.len().min(off.len())).map(move |i| layer.value(i).1 + off[i])
            })
            .collect()
    }

    /// The base's x values.
    pub fn x_values(&self) -> Vec<f64> {
        (0..self.base.len()).map(|i| self.base.value(i).0).collect()
    }

    /// Draw the base, then each layer lifted by the layers below it.
    pub fn render(&self, surface: &mut dyn Surface, canvas: PixelBox, x_range: &Range, y_range: &Range, defaults: &Style) {
        if let Err(err) = self.validate() {
            warn!(series = %self.name(), %err, "stack layers disagree in length; missing values count as 0");
        }
        let offsets = self.cumulative_offsets();
        for (layer, off) in self.layers().zip(offsets.iter()) {
            let style = layer.style().resolve(defaults);
            draw_line_series(surface, canvas, x_range, y_range, &style, layer, off);
        }
    }
}

fn layer_y<S: ValueProvider>(layer: &S, index: usize) -> f64 {
    if index < layer.len() { layer.value(index).1 } else { 0.0 }
}

/// Stroke a polyline through `provider`'s points, each y lifted by `offsets[i]`
/// (missing offsets count as 0).
pub fn draw_line_series<P: ValueProvider + ?Sized>(
    surface: &mut dyn Surface,
    canvas: PixelBox,
    x_range: &Range,
    y_range: &Range,
    style: &ResolvedStyle,
    provider: &P,
    offsets: &[f64],
) {
    if provider.is_empty() {
        return;
    }
    style.apply_stroke(surface);
    for i in 0..provider.len() {
        let (x, y) = provider.value(i);
        let y = y + offsets.get(i).copied().unwrap_or(0.0);
        let px = canvas.left + x_range.translate(x);
        let py = canvas.bottom - y_range.translate(y);
        if i == 0 {
            surface.move_to(px, py);
        } else {
            surface.line_to(px, py);
        }
    }
    surface.stroke();
}
