// File: crates/strata-core/tests/axis.rs
// Purpose: Y axis tick density, explicit-tick precedence, bounding box layout, and draw output.
// Layout numbers use the heuristic measurer at the default 10px font: 6px per glyph, 10px tall.

use std::cell::Cell;

use strata_core::surface::DrawCommand;
use strata_core::{
    AxisSide, CommandRecorder, GridLine, PixelBox, Range, Style, Tick, YAxis,
};

const CANVAS: PixelBox = PixelBox::from_ltrb(50, 20, 450, 320);

fn identity(v: f64) -> String {
    format!("{v}")
}

fn three_ticks() -> Vec<Tick> {
    vec![Tick::new(0.0, "0"), Tick::new(50.0, "50"), Tick::new(100.0, "100")]
}

#[test]
fn explicit_ticks_skip_generation() {
    let axis = YAxis::primary().with_ticks(vec![Tick::new(1.0, "one"), Tick::new(2.0, "two")]);
    let rec = CommandRecorder::new();
    let calls = Cell::new(0usize);
    let counting = |v: f64| {
        calls.set(calls.get() + 1);
        identity(v)
    };

    let ticks = axis.get_ticks(&rec, &Range::new(0.0, 100.0, 300), &Style::default(), &counting);

    assert_eq!(ticks, vec![Tick::new(1.0, "one"), Tick::new(2.0, "two")]);
    assert_eq!(calls.get(), 0, "formatter must not run for explicit ticks");
    assert_eq!(rec.measure_calls(), 0, "no label measurement for explicit ticks");
}

#[test]
fn generated_ticks_follow_label_height() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let range = Range::new(0.0, 100.0, 300);

    // ceil(300 / (10 + 20)) = 10 steps of 10.
    assert_eq!(axis.tick_count(&rec, &range, &Style::default(), &identity), 10);
    let ticks = axis.get_ticks(&rec, &range, &Style::default(), &identity);
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks.first().map(|t| t.value), Some(0.0));
    assert_eq!(ticks.last().map(|t| t.value), Some(100.0));
    assert!(rec.commands().is_empty(), "measuring draws nothing");
}

#[test]
fn larger_font_means_fewer_ticks() {
    let axis = YAxis { style: Style::shown().with_font_size(40.0), ..YAxis::primary() };
    let rec = CommandRecorder::new();
    // ceil(300 / (40 + 20)) = 5
    assert_eq!(axis.tick_count(&rec, &Range::new(0.0, 100.0, 300), &Style::default(), &identity), 5);
}

#[test]
fn default_font_size_comes_from_defaults_tier() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let defaults = Style::default().with_font_size(70.0);
    // ceil(300 / (70 + 20)) = 4
    assert_eq!(axis.tick_count(&rec, &Range::new(0.0, 100.0, 300), &defaults, &identity), 4);
}

#[test]
fn zero_domain_still_produces_ticks() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let ticks = axis.get_ticks(&rec, &Range::new(0.0, 100.0, 0), &Style::default(), &identity);
    assert_eq!(ticks, vec![Tick::new(0.0, "0"), Tick::new(100.0, "100")]);
}

#[test]
fn primary_box_extends_right_of_canvas() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let range = Range::new(0.0, 100.0, 300);
    let bounds = axis.measure(&rec, CANVAS, &range, &Style::default(), &three_ticks());
    // Labels start at 450 + 10; widest is "100" (18px). Ticks sit at y 320, 170, 20.
    assert_eq!(bounds, PixelBox::from_ltrb(450, 15, 478, 325));
}

#[test]
fn secondary_box_extends_left_and_includes_line() {
    let axis = YAxis::secondary();
    let rec = CommandRecorder::new();
    let range = Range::new(0.0, 100.0, 300);
    let bounds = axis.measure(&rec, CANVAS, &range, &Style::default(), &three_ticks());
    // Right-aligned at 50 - 10 = 40; "100" starts at 22.
    assert_eq!(bounds, PixelBox::from_ltrb(22, 15, 50, 325));
}

#[test]
fn measure_ignores_input_order() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let range = Range::new(0.0, 100.0, 300);
    let mut shuffled = three_ticks();
    shuffled.reverse();
    let a = axis.measure(&rec, CANVAS, &range, &Style::default(), &three_ticks());
    let b = axis.measure(&rec, CANVAS, &range, &Style::default(), &shuffled);
    assert_eq!(a, b);
}

#[test]
fn measure_without_ticks_is_zero_sized() {
    let axis = YAxis::primary();
    let rec = CommandRecorder::new();
    let bounds = axis.measure(&rec, CANVAS, &Range::new(0.0, 1.0, 300), &Style::default(), &[]);
    assert!(bounds.is_zero());
    assert_eq!(bounds, PixelBox::point(450, 320));
}

#[test]
fn render_reasserts_style_before_drawing() {
    let axis = YAxis::primary();
    let mut rec = CommandRecorder::new();
    axis.render(&mut rec, CANVAS, &Range::new(0.0, 100.0, 300), &Style::default(), &three_ticks());
    let head = &rec.commands()[..5];
    assert!(matches!(head[0], DrawCommand::SetStrokeColor(_)));
    assert!(matches!(head[1], DrawCommand::SetStrokeWidth(_)));
    assert!(matches!(head[2], DrawCommand::SetFont(_)));
    assert!(matches!(head[3], DrawCommand::SetFontSize(_)));
    assert!(matches!(head[4], DrawCommand::SetFontColor(_)));
}

#[test]
fn render_draws_line_ticks_and_centered_labels() {
    let axis = YAxis::primary();
    let mut rec = CommandRecorder::new();
    let mut ticks = three_ticks();
    ticks.reverse();
    axis.render(&mut rec, CANVAS, &Range::new(0.0, 100.0, 300), &Style::default(), &ticks);

    let segments = rec.stroked_segments();
    assert_eq!(segments[0], ((450, 320), (450, 20)), "axis line spans the canvas");
    assert_eq!(
        &segments[1..],
        &[((450, 320), (455, 320)), ((450, 170), (455, 170)), ((450, 20), (455, 20))],
        "tick marks in ascending value order",
    );
    assert_eq!(rec.texts(), vec![("0", 460, 325), ("50", 460, 175), ("100", 460, 25)]);
}

#[test]
fn secondary_labels_right_align_where_measure_says() {
    let axis = YAxis::secondary();
    let mut rec = CommandRecorder::new();
    let range = Range::new(0.0, 100.0, 300);
    let bounds = axis.measure(&rec, CANVAS, &range, &Style::default(), &three_ticks());
    axis.render(&mut rec, CANVAS, &range, &Style::default(), &three_ticks());

    let texts = rec.texts();
    assert_eq!(texts, vec![("0", 34, 325), ("50", 28, 175), ("100", 22, 25)]);
    let leftmost = texts.iter().map(|t| t.1).min().expect("labels drawn");
    assert_eq!(leftmost, bounds.left);
    assert!(rec.stroked_segments().contains(&((50, 170), (45, 170))), "ticks point outward");
}

#[test]
fn unlabeled_tick_gets_a_mark_but_no_text() {
    let axis = YAxis::primary();
    let mut rec = CommandRecorder::new();
    let ticks = vec![Tick::new(-50.0, "-50"), Tick::unlabeled(0.0), Tick::new(50.0, "50")];
    axis.render(&mut rec, CANVAS, &Range::new(-50.0, 50.0, 300), &Style::default(), &ticks);
    assert_eq!(rec.texts().len(), 2);
    assert!(rec.stroked_segments().contains(&((450, 170), (455, 170))));
}

#[test]
fn default_grid_lines_are_major_per_tick() {
    let axis = YAxis::primary();
    let lines = axis.get_grid_lines(&three_ticks());
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|l| !l.is_minor && !l.is_vertical));
    assert_eq!(lines.iter().map(|l| l.value).collect::<Vec<_>>(), vec![0.0, 50.0, 100.0]);
}

#[test]
fn grid_lines_filtered_by_visibility() {
    let axis = YAxis {
        grid_lines: Some(vec![GridLine::major(25.0), GridLine::minor(75.0)]),
        grid_major_style: Style::shown(),
        grid_minor_style: Style::default(),
        ..YAxis::primary()
    };
    let mut rec = CommandRecorder::new();
    axis.render(&mut rec, CANVAS, &Range::new(0.0, 100.0, 300), &Style::default(), &three_ticks());
    let segments = rec.stroked_segments();
    assert!(segments.contains(&((50, 245), (450, 245))), "major line drawn across canvas");
    assert!(!segments.contains(&((50, 95), (450, 95))), "minor line hidden");
}

#[test]
fn no_grid_when_both_styles_hidden() {
    let axis = YAxis::primary();
    let mut rec = CommandRecorder::new();
    axis.render(&mut rec, CANVAS, &Range::new(0.0, 100.0, 300), &Style::default(), &three_ticks());
    // Axis line plus one mark per tick.
    assert_eq!(rec.stroked_segments().len(), 4);
}

#[test]
fn zero_line_drawn_when_configured() {
    let axis = YAxis {
        zero: GridLine::major(0.0).with_style(Style::shown().with_stroke_width(2.0)),
        ..YAxis::primary()
    };
    let mut rec = CommandRecorder::new();
    axis.render(&mut rec, CANVAS, &Range::new(-50.0, 50.0, 300), &Style::default(), &[]);
    assert!(rec.stroked_segments().contains(&((50, 170), (450, 170))));
    assert!(rec.commands().contains(&DrawCommand::SetStrokeWidth(2.0)));
}

#[test]
fn side_defaults_to_primary() {
    assert_eq!(YAxis::default().side, AxisSide::Primary);
}

#[test]
fn named_axis_keeps_side_and_visibility() {
    let axis = YAxis::secondary().with_name("volume");
    assert_eq!(axis.name, "volume");
    assert_eq!(axis.side, AxisSide::Secondary);
    assert!(axis.style.show);
}
