// File: crates/strata-core/src/range.rs
// Summary: Continuous value interval mapped linearly onto a pixel span.

/// `[min, max]` mapped onto `[0, domain]` pixels.
///
/// Contract (caller's responsibility, not validated): `min <= max`, `domain >= 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
    pub domain: i32,
}

impl Range {
    pub const fn new(min: f64, max: f64, domain: i32) -> Self {
        Self { min, max, domain }
    }

    /// Extent of `values` mapped onto `domain`. Falls back to `[0, 1]` when
    /// there are no finite values.
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I, domain: i32) -> Self {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for v in values.into_iter().filter(|v| v.is_finite()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min > max {
            return Self::new(0.0, 1.0, domain);
        }
        Self::new(min, max, domain)
    }

    pub const fn with_domain(self, domain: i32) -> Self {
        Self { domain, ..self }
    }

    #[inline]
    pub fn delta(&self) -> f64 { self.max - self.min }

    /// True when the interval has no usable extent.
    #[inline]
    pub fn is_zero(&self) -> bool {
        let d = self.delta();
        d == 0.0 || !d.is_finite()
    }

    /// Pixel offset of `value` from the start of the domain. Degenerate
    /// ranges map everything to 0.
    #[inline]
    pub fn translate(&self, value: f64) -> i32 {
        if self.is_zero() {
            return 0;
        }
        ((value - self.min) / self.delta() * f64::from(self.domain)).floor() as i32
    }
}

impl Default for Range {
    fn default() -> Self { Self::new(0.0, 1.0, 0) }
}
