// File: crates/strata-core/src/color.rs
// Summary: Backend-neutral RGBA color.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_argb(255, 0, 0, 0);
    pub const WHITE: Self = Self::from_argb(255, 255, 255, 255);

    /// Same argument order as Skia's `Color::from_argb`.
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}
