// File: crates/strata-core/tests/ticks.rs
// Purpose: Stepped tick generation: boundaries, zero-crossing marker, label dedup, sanity cap, sorting.

use strata_core::format::{float_value_formatter, time_value_formatter};
use strata_core::tick::{generate_ticks, generate_ticks_with_step, sort_ticks, sorted_ticks};
use strata_core::types::TICK_COUNT_SANITY_CHECK;
use strata_core::{Range, Tick};

fn identity(v: f64) -> String {
    format!("{v}")
}

fn values(ticks: &[Tick]) -> Vec<f64> {
    ticks.iter().map(|t| t.value).collect()
}

fn zero_markers(ticks: &[Tick]) -> usize {
    ticks.iter().filter(|t| t.value == 0.0 && t.label.is_empty()).count()
}

#[test]
fn positive_range_lands_on_both_ends() {
    let ticks = generate_ticks_with_step(&Range::new(0.0, 100.0, 400), 25.0, &identity);
    assert_eq!(values(&ticks), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(zero_markers(&ticks), 0, "starting at zero is not a crossing");
    assert!(ticks.iter().all(|t| t.is_labeled()));
}

#[test]
fn stepped_zero_keeps_both_marker_and_label() {
    let ticks = generate_ticks_with_step(&Range::new(-10.0, 10.0, 400), 5.0, &identity);
    let got: Vec<(f64, &str)> = ticks.iter().map(|t| (t.value, t.label.as_str())).collect();
    assert_eq!(
        got,
        vec![(-10.0, "-10"), (-5.0, "-5"), (0.0, ""), (0.0, "0"), (5.0, "5"), (10.0, "10")],
    );
}

#[test]
fn zero_marker_appears_once_when_no_step_hits_zero() {
    let ticks = generate_ticks_with_step(&Range::new(-10.0, 10.0, 400), 3.0, &identity);
    assert_eq!(zero_markers(&ticks), 1);
    let zero_at = ticks.iter().position(|t| t.label.is_empty()).expect("marker present");
    assert_eq!(ticks[zero_at - 1].value, -1.0, "marker follows the last negative cursor");
    assert_eq!(ticks[zero_at + 1].value, 2.0, "marker precedes the first non-negative cursor");
    assert_eq!(ticks.last().map(|t| t.value), Some(10.0));
}

#[test]
fn zero_marker_added_before_closing_max() {
    // Cursors -9, -3; 3 overshoots, so only the closing max crosses zero.
    let ticks = generate_ticks_with_step(&Range::new(-9.0, 1.0, 100), 6.0, &identity);
    let got: Vec<(f64, &str)> = ticks.iter().map(|t| (t.value, t.label.as_str())).collect();
    assert_eq!(got, vec![(-9.0, "-9"), (-3.0, "-3"), (0.0, ""), (1.0, "1")]);
}

#[test]
fn zero_marker_kept_when_closing_max_is_deduped() {
    // Every value in the range formats to the same date, so max is dropped as
    // a duplicate; the range still crosses zero.
    let ticks = generate_ticks_with_step(&Range::new(-0.4, 0.4, 100), 1.0, &time_value_formatter);
    let got: Vec<(f64, &str)> = ticks.iter().map(|t| (t.value, t.label.as_str())).collect();
    assert_eq!(got, vec![(-0.4, "1970-01-01"), (0.0, "")]);
    assert_eq!(zero_markers(&ticks), 1);
}

#[test]
fn deduped_max_without_crossing_adds_nothing() {
    let ticks = generate_ticks_with_step(&Range::new(0.1, 0.4, 100), 1.0, &time_value_formatter);
    assert_eq!(ticks, vec![Tick::new(0.1, "1970-01-01")]);
}

#[test]
fn spanning_ranges_always_carry_one_zero_marker() {
    for &(min, max, step) in &[(-10.0, 10.0, 5.0), (-7.5, 3.0, 2.0), (-1.0, 100.0, 9.0), (-50.0, 0.5, 7.0)] {
        let ticks = generate_ticks_with_step(&Range::new(min, max, 300), step, &float_value_formatter);
        assert_eq!(zero_markers(&ticks), 1, "range [{min}, {max}] step {step}");
    }
}

#[test]
fn closing_tick_is_max_when_label_differs() {
    let ticks = generate_ticks_with_step(&Range::new(0.0, 1.0, 100), 0.3, &float_value_formatter);
    let last = ticks.last().expect("non-empty");
    assert_eq!(last.value, 1.0);
    assert_eq!(last.label, "1.00");
    assert_eq!(ticks.len(), 5);
}

#[test]
fn closing_tick_skipped_when_label_matches() {
    // 1.0 and 1.004 both format as "1.00".
    let ticks = generate_ticks_with_step(&Range::new(0.0, 1.004, 100), 0.5, &float_value_formatter);
    assert_eq!(values(&ticks), vec![0.0, 0.5, 1.0]);
    assert_eq!(ticks.last().map(|t| t.label.as_str()), Some("1.00"));
}

#[test]
fn degenerate_range_yields_single_tick() {
    let ticks = generate_ticks_with_step(&Range::new(3.0, 3.0, 100), 0.0, &identity);
    assert_eq!(ticks, vec![Tick::new(3.0, "3")]);
}

#[test]
fn zero_step_truncates_at_sanity_cap() {
    let ticks = generate_ticks_with_step(&Range::new(0.0, 10.0, 100), 0.0, &identity);
    assert_eq!(ticks.len(), TICK_COUNT_SANITY_CHECK + 1);
}

#[test]
fn negative_step_truncates_at_sanity_cap() {
    let ticks = generate_ticks_with_step(&Range::new(-10.0, 10.0, 100), -1.0, &identity);
    assert_eq!(ticks.len(), TICK_COUNT_SANITY_CHECK + 1);
    assert_eq!(zero_markers(&ticks), 0);
}

#[test]
fn tiny_step_never_exceeds_cap_plus_one() {
    let ticks = generate_ticks_with_step(&Range::new(-1.0e6, 1.0e6, 100), 1.0e-3, &identity);
    assert!(ticks.len() <= TICK_COUNT_SANITY_CHECK + 1);
}

#[test]
fn tick_count_splits_delta() {
    let ticks = generate_ticks(&Range::new(0.0, 100.0, 400), 4, &identity);
    assert_eq!(values(&ticks), vec![0.0, 25.0, 50.0, 75.0, 100.0]);

    // Zero count is clamped to one step.
    let ticks = generate_ticks(&Range::new(0.0, 100.0, 400), 0, &identity);
    assert_eq!(values(&ticks), vec![0.0, 100.0]);
}

#[test]
fn formatter_may_be_a_trait_object() {
    let f: &strata_core::ValueFormatter = &|v| format!("{v:.1}");
    let ticks = generate_ticks_with_step(&Range::new(0.0, 1.0, 100), 0.5, f);
    assert_eq!(ticks.iter().map(|t| t.label.as_str()).collect::<Vec<_>>(), vec!["0.0", "0.5", "1.0"]);
}

#[test]
fn sort_is_ascending_and_stable() {
    let mut ticks = vec![
        Tick::new(5.0, "five"),
        Tick::unlabeled(0.0),
        Tick::new(-1.0, "minus one"),
        Tick::new(0.0, "zero"),
    ];
    sort_ticks(&mut ticks);
    let labels: Vec<&str> = ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["minus one", "", "zero", "five"]);
    assert!(ticks.windows(2).all(|w| w[0].value <= w[1].value));
}

#[test]
fn sorted_copy_leaves_input_untouched() {
    let input = vec![Tick::new(2.0, "b"), Tick::new(1.0, "a")];
    let sorted = sorted_ticks(&input);
    assert_eq!(input[0].label, "b");
    assert_eq!(sorted[0].label, "a");
}
