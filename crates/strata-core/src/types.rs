// File: crates/strata-core/src/types.rs
// Summary: Shared types and constants (sizes, colors, paddings, layout defaults).

use crate::color::Color;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Hard upper bound on generated ticks; guards degenerate steps.
pub const TICK_COUNT_SANITY_CHECK: usize = 1 << 10;

pub const DEFAULT_FONT: &str = "sans-serif";
pub const DEFAULT_FONT_SIZE: f64 = 10.0;
pub const DEFAULT_STROKE_WIDTH: f64 = 1.0;
pub const DEFAULT_AXIS_COLOR: Color = Color::from_argb(255, 51, 51, 51);
pub const DEFAULT_STROKE_COLOR: Color = Color::from_argb(255, 0, 116, 217);

/// Gap between a vertical axis line and its labels.
pub const DEFAULT_Y_AXIS_MARGIN: i32 = 10;
/// Gap between the horizontal axis line and its labels.
pub const DEFAULT_X_AXIS_MARGIN: i32 = 10;
/// Length of the tick mark drawn outward from a vertical axis.
pub const DEFAULT_HORIZONTAL_TICK_WIDTH: i32 = 5;
/// Length of the tick mark drawn downward from the horizontal axis.
pub const DEFAULT_VERTICAL_TICK_HEIGHT: i32 = 5;
pub const DEFAULT_MINIMUM_TICK_VERTICAL_SPACING: i32 = 20;
pub const DEFAULT_MINIMUM_TICK_HORIZONTAL_SPACING: i32 = 20;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 24, 24, 56)
    }
}

/// Which vertical axis a series or axis belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisSide {
    /// Drawn along the canvas right edge, labels extending rightward.
    #[default]
    Primary,
    /// Drawn along the canvas left edge, labels right-aligned against the line.
    Secondary,
}
