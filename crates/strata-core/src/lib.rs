// File: crates/strata-core/src/lib.rs
// Summary: Core library entry point; tick generation, axis layout and series stacking over an abstract surface.

pub mod axis;
pub mod chart;
pub mod color;
pub mod error;
pub mod format;
pub mod geometry;
pub mod grid;
pub mod range;
pub mod series;
pub mod style;
pub mod surface;
pub mod text;
pub mod theme;
pub mod tick;
pub mod types;
pub mod xaxis;

pub use axis::YAxis;
pub use chart::{Chart, ChartLayout, ChartRanges, RenderOptions};
pub use color::Color;
pub use error::{SeriesError, SeriesResult};
pub use format::ValueFormatter;
pub use geometry::PixelBox;
pub use grid::GridLine;
pub use range::Range;
pub use series::{ContinuousSeries, Series, StackedSeries, TimeSeries, ValueProvider};
pub use style::{ResolvedStyle, Style};
pub use surface::{replay, CommandRecorder, DrawCommand, Surface};
pub use text::{CachedTextMeasurer, HeuristicTextMeasurer, TextMeasurer, TextStyle};
pub use theme::Theme;
pub use tick::{generate_ticks, generate_ticks_with_step, sort_ticks, Tick};
pub use types::{AxisSide, Insets};
pub use xaxis::XAxis;
