// File: crates/strata-demo/src/main.rs
// Summary: Demo loads a date + values CSV (or synthesizes one) and renders the columns as a stacked time series PNG.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use std::path::{Path, PathBuf};
use strata_core::format::time_value_formatter;
use strata_core::{theme, Chart, GridLine, RenderOptions, StackedSeries, Style, TimeSeries};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

struct Args {
    input: Option<String>,
    theme: String,
    out: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = Args { input: None, theme: "dark".to_string(), out: None };
    let mut it = std::env::args().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--theme" => args.theme = it.next().context("--theme needs a name")?,
            "--out" => args.out = Some(PathBuf::from(it.next().context("--out needs a path")?)),
            _ => args.input = Some(a),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let columns = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), used_alt, "using input file");
            load_columns_csv(&path).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input given; using synthetic data");
            synthetic_columns(90)
        }
    };

    let mut layers = columns.into_iter();
    let base = layers.next().context("no value columns loaded; check headers/delimiter")?;
    info!(rows = base.len(), layers = layers.len() + 1, "loaded series");

    let mut stacked = StackedSeries::new(base);
    for layer in layers {
        stacked.push_layer(layer);
    }
    if let Err(err) = stacked.validate() {
        warn!(%err, "layers will be stacked with missing values as 0");
    }

    let opts = RenderOptions { theme: theme::find(&args.theme), ..RenderOptions::default() };
    let mut chart: Chart<TimeSeries> = Chart::new();
    chart.x_axis.value_formatter = Some(time_value_formatter);
    chart.y_axis.grid_major_style = Style::shown();
    chart.y_axis.zero = GridLine::major(0.0).with_style(Style::shown());
    chart.add_series(stacked);

    let out = args
        .out
        .unwrap_or_else(|| out_name_with(args.input.as_deref().map(Path::new), opts.theme.name));
    let layout = strata_skia::render_chart_png(&chart, &opts, &out)?;
    info!(
        path = %out.display(),
        x_ticks = layout.x_ticks.len(),
        y_ticks = layout.y_ticks.len(),
        "wrote chart"
    );
    Ok(())
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

/// Produce output file name like target/out/stacked_<stem>_<theme>.png
fn out_name_with(input: Option<&Path>, suffix: &str) -> PathBuf {
    let stem = input
        .and_then(|p| p.file_stem())
        .and_then(|s| s.to_str())
        .unwrap_or("synthetic");
    PathBuf::from("target/out").join(format!("stacked_{stem}_{suffix}.png"))
}

/// Load a CSV whose first date-like column is x and every other numeric
/// column is one stack layer, in column order.
fn load_columns_csv(path: &Path) -> Result<Vec<TimeSeries>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.trim().to_string()).collect::<Vec<_>>();
    info!(?headers, "csv headers");

    let i_time = headers
        .iter()
        .position(|h| matches!(h.to_lowercase().as_str(), "time" | "timestamp" | "date" | "datetime"))
        .unwrap_or(0);
    let value_cols: Vec<usize> = (0..headers.len()).filter(|&i| i != i_time).collect();

    let mut xs: Vec<DateTime<Utc>> = Vec::new();
    let mut ys: Vec<Vec<f64>> = vec![Vec::new(); value_cols.len()];
    let mut skipped = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let Some(t) = rec.get(i_time).and_then(parse_time) else {
            skipped += 1;
            continue;
        };
        xs.push(t);
        for (col, &ix) in ys.iter_mut().zip(&value_cols) {
            col.push(rec.get(ix).and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0));
        }
    }
    if skipped > 0 {
        warn!(skipped, "rows without a parseable time were skipped");
    }

    value_cols
        .iter()
        .zip(ys)
        .map(|(&ix, y)| {
            TimeSeries::try_new(headers[ix].clone(), xs.clone(), y).map_err(anyhow::Error::from)
        })
        .collect()
}

/// RFC 3339, `YYYY-MM-DD`, or epoch seconds / milliseconds.
fn parse_time(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(Utc.from_utc_datetime(&d.and_hms_opt(0, 0, 0)?));
    }
    let n = s.parse::<i64>().ok()?;
    if n > 10_i64.pow(12) {
        // epoch ms
        return DateTime::<Utc>::from_timestamp_millis(n);
    }
    DateTime::<Utc>::from_timestamp(n, 0)
}

/// Three daily layers: a seasonal base and two smaller bands above it.
fn synthetic_columns(days: i64) -> Vec<TimeSeries> {
    let t0 = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).single().unwrap_or_default();
    let xs: Vec<DateTime<Utc>> = (0..days).map(|d| t0 + Duration::days(d)).collect();
    let shapes: [(&str, fn(f64) -> f64); 3] = [
        ("base", |d| 20.0 + (d / 9.0).sin() * 8.0),
        ("mid", |d| 6.0 + (d / 5.0).cos() * 2.0),
        ("top", |d| 3.0 + d * 0.05),
    ];
    shapes
        .iter()
        .filter_map(|(name, f)| {
            let ys = (0..days).map(|d| f(d as f64)).collect();
            TimeSeries::try_new(*name, xs.clone(), ys).ok()
        })
        .collect()
}
