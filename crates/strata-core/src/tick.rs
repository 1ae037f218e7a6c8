// File: crates/strata-core/src/tick.rs
// Summary: Tick values and the stepped tick generator with zero-crossing marker and sanity cap.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use tracing::{debug, warn};

use crate::range::Range;
use crate::types::TICK_COUNT_SANITY_CHECK;

/// A labeled reference point along an axis. An empty label marks a
/// deliberately unlabeled tick (the synthetic zero-crossing marker).
#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

impl Tick {
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self { value, label: label.into() }
    }

    pub fn unlabeled(value: f64) -> Self {
        Self { value, label: String::new() }
    }

    pub fn is_labeled(&self) -> bool { !self.label.is_empty() }
}

/// Stable ascending sort by value; ties keep their original order.
pub fn sort_ticks(ticks: &mut [Tick]) {
    ticks.sort_by(|a, b| a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal));
}

/// Sorted copy of `ticks`.
pub fn sorted_ticks(ticks: &[Tick]) -> Vec<Tick> {
    let mut out = ticks.to_vec();
    sort_ticks(&mut out);
    out
}

struct TickSink {
    ticks: Vec<Tick>,
    zero_emitted: bool,
}

impl TickSink {
    fn new() -> Self {
        Self { ticks: Vec::new(), zero_emitted: false }
    }

    fn is_full(&self) -> bool {
        self.ticks.len() > TICK_COUNT_SANITY_CHECK
    }

    fn last(&self) -> Option<&Tick> { self.ticks.last() }

    fn check_cap(&self) -> ControlFlow<()> {
        if self.is_full() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    }

    /// Emit the zero marker if `next` is the first value at or above zero
    /// after a negative one.
    fn mark_crossing(&mut self, next: f64) -> ControlFlow<()> {
        let crossed = self.last().is_some_and(|prev| prev.value < 0.0) && next >= 0.0;
        if !crossed || self.zero_emitted {
            return ControlFlow::Continue(());
        }
        self.zero_emitted = true;
        self.ticks.push(Tick::unlabeled(0.0));
        self.check_cap()
    }

    /// Push `value`, preceded by the zero marker on the first negative →
    /// non-negative transition. Breaks once the sanity cap is exceeded.
    fn push(&mut self, value: f64, label: String) -> ControlFlow<()> {
        if self.mark_crossing(value).is_break() {
            return ControlFlow::Break(());
        }
        self.ticks.push(Tick::new(value, label));
        self.check_cap()
    }
}

fn warn_truncated(range: &Range, step: f64) {
    warn!(
        step,
        min = range.min,
        max = range.max,
        cap = TICK_COUNT_SANITY_CHECK,
        "tick generation truncated at sanity cap"
    );
}

/// Walk `range` from `min` in increments of `step`, labeling each value with
/// `formatter`.
///
/// - Cursor `i` is `min + step * i`.
/// - A synthetic `{0.0, ""}` tick precedes the first value at or above zero
///   that follows a negative one. A stepped tick landing exactly on zero is
///   kept as well, so both appear.
/// - If the last cursor falls short of `max` and `formatter(max)` differs from
///   the last label, `max` is appended. When it is skipped as a duplicate, a
///   range that crosses zero still gets its marker.
/// - A zero-extent range yields a single tick.
/// - Output is truncated once it exceeds [`TICK_COUNT_SANITY_CHECK`]; this is
///   what stops `step <= 0`.
pub fn generate_ticks_with_step<F>(range: &Range, step: f64, formatter: &F) -> Vec<Tick>
where
    F: Fn(f64) -> String + ?Sized,
{
    if range.is_zero() {
        return vec![Tick::new(range.min, formatter(range.min))];
    }

    let mut sink = TickSink::new();
    let mut index: u64 = 0;
    loop {
        let cursor = range.min + step * index as f64;
        if !(cursor <= range.max) {
            break;
        }
        if sink.push(cursor, formatter(cursor)).is_break() {
            warn_truncated(range, step);
            return sink.ticks;
        }
        index += 1;
    }

    if let Some(last) = sink.last() {
        if last.value < range.max {
            let label = formatter(range.max);
            let duplicate = label == last.label;
            // A deduped max still closes a zero crossing.
            let flow = if duplicate { sink.mark_crossing(range.max) } else { sink.push(range.max, label) };
            if flow.is_break() {
                warn_truncated(range, step);
                return sink.ticks;
            }
        }
    }

    debug!(count = sink.ticks.len(), step, "generated ticks");
    sink.ticks
}

/// Split `range` into `tick_count` steps (at least one) and generate ticks.
pub fn generate_ticks<F>(range: &Range, tick_count: usize, formatter: &F) -> Vec<Tick>
where
    F: Fn(f64) -> String + ?Sized,
{
    let step = range.delta() / tick_count.max(1) as f64;
    generate_ticks_with_step(range, step, formatter)
}
