// File: crates/strata-skia/src/lib.rs
// Summary: Skia CPU raster surface implementing the strata drawing surface, plus headless PNG output.

pub mod error;
pub mod text;

use std::path::Path;

use anyhow::{Context, Result};
use skia_safe as skia;
use strata_core::{Chart, ChartLayout, Color, PixelBox, RenderOptions, Series, Surface, TextMeasurer, TextStyle};
use tracing::{debug, info};

pub use error::SkiaError;
pub use text::TextShaper;

fn to_skia(c: Color) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

/// A raster canvas that tracks the surface's current stroke and font state.
///
/// Paths accumulate from `move_to`/`line_to` and are drawn on `stroke` with
/// whatever stroke color and width are current at that moment.
pub struct SkiaSurface {
    surface: skia::Surface,
    shaper: TextShaper,
    path: skia::Path,
    stroke_color: Color,
    stroke_width: f64,
    font: TextStyle,
    font_color: Color,
}

impl SkiaSurface {
    /// Create a `width` x `height` surface cleared to `background`.
    pub fn new(width: i32, height: i32, background: Color) -> Result<Self, SkiaError> {
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(SkiaError::SurfaceCreation { width, height })?;
        surface.canvas().clear(to_skia(background));
        debug!(width, height, "raster surface created");
        Ok(Self {
            surface,
            shaper: TextShaper::new(),
            path: skia::Path::new(),
            stroke_color: Color::BLACK,
            stroke_width: 1.0,
            font: TextStyle::new(strata_core::types::DEFAULT_FONT, strata_core::types::DEFAULT_FONT_SIZE),
            font_color: Color::BLACK,
        })
    }

    pub fn width(&self) -> i32 { self.surface.width() }
    pub fn height(&self) -> i32 { self.surface.height() }

    fn stroke_paint(&self) -> skia::Paint {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(self.stroke_width as f32);
        paint.set_color(to_skia(self.stroke_color));
        paint
    }

    /// Snapshot the surface and encode it as PNG bytes.
    pub fn encode_png(&mut self) -> Result<Vec<u8>, SkiaError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SkiaError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode and write to `path`, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<(), SkiaError> {
        let bytes = self.encode_png()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

impl TextMeasurer for SkiaSurface {
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox {
        self.shaper.measure_text(text, style)
    }
}

impl Surface for SkiaSurface {
    fn move_to(&mut self, x: i32, y: i32) {
        self.path.move_to((x as f32, y as f32));
    }

    fn line_to(&mut self, x: i32, y: i32) {
        self.path.line_to((x as f32, y as f32));
    }

    fn stroke(&mut self) {
        if !self.path.is_empty() {
            let paint = self.stroke_paint();
            self.surface.canvas().draw_path(&self.path, &paint);
        }
        self.path = skia::Path::new();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) {
        let color = to_skia(self.font_color);
        let canvas = self.surface.canvas();
        self.shaper.draw(canvas, text, x, y, &self.font, color);
    }

    fn set_font(&mut self, font: &str) {
        self.font.font = font.to_string();
    }

    fn set_font_size(&mut self, size: f64) {
        self.font.size = size;
    }

    fn set_font_color(&mut self, color: Color) {
        self.font_color = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_stroke_width(&mut self, width: f64) {
        self.stroke_width = width;
    }
}

/// Render `chart` on a fresh surface sized and themed by `opts`.
pub fn render_chart<S: Series>(chart: &Chart<S>, opts: &RenderOptions) -> Result<(SkiaSurface, ChartLayout)> {
    let mut surface = SkiaSurface::new(opts.width, opts.height, opts.theme.background)
        .context("create chart surface")?;
    let layout = chart.render(&mut surface, opts);
    debug!(canvas = ?layout.canvas, series = chart.series.len(), "chart rendered");
    Ok((surface, layout))
}

/// Render `chart` and return the PNG bytes.
pub fn render_chart_png_bytes<S: Series>(chart: &Chart<S>, opts: &RenderOptions) -> Result<Vec<u8>> {
    let (mut surface, _) = render_chart(chart, opts)?;
    surface.encode_png().context("encode chart PNG")
}

/// Render `chart` to a PNG file at `path`.
pub fn render_chart_png<S: Series>(chart: &Chart<S>, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<ChartLayout> {
    let path = path.as_ref();
    let (mut surface, layout) = render_chart(chart, opts)?;
    surface
        .save_png(path)
        .with_context(|| format!("write chart PNG to {}", path.display()))?;
    info!(path = %path.display(), width = opts.width, height = opts.height, "chart written");
    Ok(layout)
}
