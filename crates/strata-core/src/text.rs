// File: crates/strata-core/src/text.rs
// Summary: Pure text measurement: explicit font in, pixel box out.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::geometry::PixelBox;

/// Font inputs that affect measured size.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font: String,
    pub size: f64,
}

impl TextStyle {
    pub fn new(font: impl Into<String>, size: f64) -> Self {
        Self { font: font.into(), size }
    }
}

/// Measures a single line of text.
///
/// Implementations must not depend on any "current font" state: the result is
/// a function of `text` and `style` alone, so a measure pass can run before any
/// drawing and results can be memoized.
pub trait TextMeasurer {
    /// Returns a box anchored at the origin whose width/height are the text extent.
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox;
}

/// Width ~0.6em per glyph, height 1em. Deterministic; used for tests and
/// headless layout.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox {
        let width = (0.6 * style.size * text.chars().count() as f64).ceil() as i32;
        let height = style.size.ceil() as i32;
        PixelBox::from_ltwh(0, 0, width, height)
    }
}

type MeasureKey = (String, String, u64);

/// Memoizes another measurer by `(text, font, size)`.
pub struct CachedTextMeasurer<M> {
    inner: M,
    cache: RefCell<HashMap<MeasureKey, PixelBox>>,
}

impl<M: TextMeasurer> CachedTextMeasurer<M> {
    pub fn new(inner: M) -> Self {
        Self { inner, cache: RefCell::new(HashMap::new()) }
    }

    /// Number of distinct measurements held.
    pub fn len(&self) -> usize { self.cache.borrow().len() }

    pub fn is_empty(&self) -> bool { self.cache.borrow().is_empty() }

    pub fn inner(&self) -> &M { &self.inner }
}

impl<M: TextMeasurer> TextMeasurer for CachedTextMeasurer<M> {
    fn measure_text(&self, text: &str, style: &TextStyle) -> PixelBox {
        let key = (text.to_string(), style.font.clone(), style.size.to_bits());
        if let Some(hit) = self.cache.borrow().get(&key) {
            return *hit;
        }
        let measured = self.inner.measure_text(text, style);
        self.cache.borrow_mut().insert(key, measured);
        measured
    }
}
