// File: crates/strata-core/src/format.rs
// Summary: Value formatters and time <-> f64 conversion for time-series x values.

use chrono::{DateTime, Utc};

/// Converts a numeric value to display text. Any `Fn(f64) -> String` works.
pub type ValueFormatter = dyn Fn(f64) -> String;

/// Two decimal places.
pub fn float_value_formatter(v: f64) -> String {
    format!("{v:.2}")
}

/// Rounded to the nearest integer.
pub fn int_value_formatter(v: f64) -> String {
    format!("{:.0}", v.round())
}

/// `v` as Unix nanoseconds, rendered `YYYY-MM-DD`.
pub fn time_value_formatter(v: f64) -> String {
    f64_to_time(v).format("%Y-%m-%d").to_string()
}

/// `v` as Unix nanoseconds, rendered `YYYY-MM-DD HH:MM`.
pub fn time_hour_value_formatter(v: f64) -> String {
    f64_to_time(v).format("%Y-%m-%d %H:%M").to_string()
}

/// Unix nanoseconds as `f64`. Precision drops below ~1µs for current dates.
pub fn time_to_f64(t: &DateTime<Utc>) -> f64 {
    t.timestamp() as f64 * 1e9 + f64::from(t.timestamp_subsec_nanos())
}

/// Inverse of [`time_to_f64`]; saturates outside the `i64` nanosecond range.
pub fn f64_to_time(v: f64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_nanos(v as i64)
}
