// File: crates/strata-skia/src/text.rs
// Summary: Text shaping, measurement and drawing using Skia textlayout with sensible fallbacks.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle as ParagraphTextStyle};
use strata_core::{PixelBox, TextMeasurer, TextStyle};

const SANS_FALLBACKS: &[&str] = &["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"];
const MONO_FALLBACKS: &[&str] = &["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"];

/// Shapes single-line labels. Measurement depends only on the text and the
/// requested font, never on what was drawn before.
pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    /// The requested family first, then platform fallbacks of the same kind.
    fn families(font: &str) -> Vec<&str> {
        let fallbacks = if font.eq_ignore_ascii_case("monospace") { MONO_FALLBACKS } else { SANS_FALLBACKS };
        std::iter::once(font).chain(fallbacks.iter().copied().filter(|f| *f != font)).collect()
    }

    fn make_style(style: &TextStyle, color: skia::Color) -> ParagraphTextStyle {
        let mut ts = ParagraphTextStyle::new();
        ts.set_font_size((style.size as f32).max(1.0));
        ts.set_color(color);
        let families = Self::families(&style.font);
        ts.set_font_families(families.as_slice());
        ts
    }

    pub fn layout(&self, text: &str, style: &TextStyle, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(style, color));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw with the left edge at `x` and the alphabetic baseline at `y`.
    pub fn draw(&self, canvas: &skia::Canvas, text: &str, x: i32, y: i32, style: &TextStyle, color: skia::Color) {
        let p = self.layout(text, style, color);
        // Paragraphs paint from their top-left corner.
        p.paint(canvas, (x as f32, y as f32 - p.alphabetic_baseline()));
    }
}

impl TextMeasurer for TextShaper {
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox {
        let p = self.layout(text, style, skia::Color::TRANSPARENT);
        PixelBox::from_ltwh(0, 0, p.longest_line().ceil() as i32, p.height().ceil() as i32)
    }
}
