// File: crates/strata-core/src/surface.rs
// Summary: Drawing surface capability, immutable draw commands, and a recording surface.

use std::cell::Cell;

use crate::color::Color;
use crate::geometry::PixelBox;
use crate::text::{HeuristicTextMeasurer, TextMeasurer, TextStyle};

/// The sole output boundary of the core.
///
/// A surface tracks a "current" stroke color, stroke width, font, font size
/// and font color; path and text calls use whatever was last set. Callers
/// re-assert every attribute they rely on before drawing. Text measurement
/// comes from the [`TextMeasurer`] supertrait and takes the font explicitly.
///
/// Coordinates are integer pixels with a top-left origin. One render pass
/// at a time per surface.
pub trait Surface: TextMeasurer {
    fn move_to(&mut self, x: i32, y: i32);
    fn line_to(&mut self, x: i32, y: i32);
    /// Stroke the path built since the last stroke, then clear it.
    fn stroke(&mut self);
    /// Draw `text` with its left edge at `x` and baseline at `y`.
    fn draw_text(&mut self, text: &str, x: i32, y: i32);
    fn set_font(&mut self, font: &str);
    fn set_font_size(&mut self, size: f64);
    fn set_font_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_stroke_width(&mut self, width: f64);
}

/// One surface call captured as a value.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    MoveTo { x: i32, y: i32 },
    LineTo { x: i32, y: i32 },
    Stroke,
    Text { text: String, x: i32, y: i32 },
    SetFont(String),
    SetFontSize(f64),
    SetFontColor(Color),
    SetStrokeColor(Color),
    SetStrokeWidth(f64),
}

impl DrawCommand {
    pub fn apply(&self, surface: &mut dyn Surface) {
        match self {
            Self::MoveTo { x, y } => surface.move_to(*x, *y),
            Self::LineTo { x, y } => surface.line_to(*x, *y),
            Self::Stroke => surface.stroke(),
            Self::Text { text, x, y } => surface.draw_text(text, *x, *y),
            Self::SetFont(font) => surface.set_font(font),
            Self::SetFontSize(size) => surface.set_font_size(*size),
            Self::SetFontColor(color) => surface.set_font_color(*color),
            Self::SetStrokeColor(color) => surface.set_stroke_color(*color),
            Self::SetStrokeWidth(width) => surface.set_stroke_width(*width),
        }
    }
}

/// Apply recorded commands, in order, to a real surface.
pub fn replay(commands: &[DrawCommand], surface: &mut dyn Surface) {
    for cmd in commands {
        cmd.apply(surface);
    }
}

/// A surface that records every call instead of drawing.
///
/// Measurement is delegated to `M`; the number of measurements is counted so
/// callers can check whether a layout pass consulted text metrics at all.
pub struct CommandRecorder<M = HeuristicTextMeasurer> {
    measurer: M,
    commands: Vec<DrawCommand>,
    measure_calls: Cell<usize>,
}

impl CommandRecorder<HeuristicTextMeasurer> {
    pub fn new() -> Self {
        Self::with_measurer(HeuristicTextMeasurer)
    }
}

impl Default for CommandRecorder<HeuristicTextMeasurer> {
    fn default() -> Self { Self::new() }
}

impl<M: TextMeasurer> CommandRecorder<M> {
    pub fn with_measurer(measurer: M) -> Self {
        Self { measurer, commands: Vec::new(), measure_calls: Cell::new(0) }
    }

    pub fn commands(&self) -> &[DrawCommand] { &self.commands }

    pub fn into_commands(self) -> Vec<DrawCommand> { self.commands }

    pub fn measure_calls(&self) -> usize { self.measure_calls.get() }

    pub fn clear(&mut self) {
        self.commands.clear();
        self.measure_calls.set(0);
    }

    /// Every `draw_text` call as `(text, x, y)`.
    pub fn texts(&self) -> Vec<(&str, i32, i32)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, x, y } => Some((text.as_str(), *x, *y)),
                _ => None,
            })
            .collect()
    }

    /// Line segments that were actually stroked, in draw order.
    pub fn stroked_segments(&self) -> Vec<((i32, i32), (i32, i32))> {
        let mut out = Vec::new();
        let mut pending = Vec::new();
        let mut pen: Option<(i32, i32)> = None;
        for cmd in &self.commands {
            match *cmd {
                DrawCommand::MoveTo { x, y } => pen = Some((x, y)),
                DrawCommand::LineTo { x, y } => {
                    if let Some(from) = pen {
                        pending.push((from, (x, y)));
                    }
                    pen = Some((x, y));
                }
                DrawCommand::Stroke => {
                    out.append(&mut pending);
                    pen = None;
                }
                _ => {}
            }
        }
        out
    }
}

impl<M: TextMeasurer> TextMeasurer for CommandRecorder<M> {
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox {
        self.measure_calls.set(self.measure_calls.get() + 1);
        self.measurer.measure_text(text, style)
    }
}

impl<M: TextMeasurer> Surface for CommandRecorder<M> {
    fn move_to(&mut self, x: i32, y: i32) { self.commands.push(DrawCommand::MoveTo { x, y }); }
    fn line_to(&mut self, x: i32, y: i32) { self.commands.push(DrawCommand::LineTo { x, y }); }
    fn stroke(&mut self) { self.commands.push(DrawCommand::Stroke); }
    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        self.commands.push(DrawCommand::Text { text: text.to_string(), x, y });
    }
    fn set_font(&mut self, font: &str) { self.commands.push(DrawCommand::SetFont(font.to_string())); }
    fn set_font_size(&mut self, size: f64) { self.commands.push(DrawCommand::SetFontSize(size)); }
    fn set_font_color(&mut self, color: Color) { self.commands.push(DrawCommand::SetFontColor(color)); }
    fn set_stroke_color(&mut self, color: Color) { self.commands.push(DrawCommand::SetStrokeColor(color)); }
    fn set_stroke_width(&mut self, width: f64) { self.commands.push(DrawCommand::SetStrokeWidth(width)); }
}
