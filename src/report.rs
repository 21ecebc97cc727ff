//! Console report rendering
//!
//! Renders engine output as plain-text blocks for terminal display:
//! - the optimal-configuration summary table
//! - a per-size speedup comparison with ASCII bars
//! - a per-thread-count scaling view across matrix sizes
//!
//! Groups whose speedup is undefined (no single-thread baseline) are printed
//! as `n/a` and called out in a footer note — a degraded result must never
//! read like a measured one.

use std::fmt::Write as FmtWrite;

use crate::error::{AnalizarError, Result};
use crate::observation::{AnnotatedObservation, OptimalConfiguration};
use crate::projection::{methods, slice_by_size, slice_by_threads, sorted_optimal};

const TABLE_WIDTH: usize = 80;
const BAR_WIDTH: usize = 30;

/// Render the optimal-configuration summary table.
///
/// Rows are ordered by size ascending, then minimum time ascending. Degraded
/// groups show `n/a` in the speedup column and trigger a footer note.
#[must_use]
pub fn render_optimal_table(configs: &[OptimalConfiguration]) -> String {
    let sorted = sorted_optimal(configs.to_vec());
    let mut out = String::new();

    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(out, "{:^TABLE_WIDTH$}", "OPTIMAL THREAD CONFIGURATIONS");
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));
    let _ = writeln!(
        out,
        "{:<10} | {:<15} | {:<12} | {:<12} | {:<12}",
        "Size", "Method", "Opt Threads", "Min Time (s)", "Max Speedup"
    );
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for config in &sorted {
        // Width padding needs a concrete string; Speedup's Display does not
        // implement fill/alignment itself.
        let speedup = config.max_speedup.to_string();
        let _ = writeln!(
            out,
            "{:<10} | {:<15} | {:<12} | {:<12.6} | {:<12}",
            config.size, config.method, config.optimal_threads, config.min_time_seconds, speedup
        );
    }
    let _ = writeln!(out, "{}", "=".repeat(TABLE_WIDTH));

    if sorted.iter().any(|c| !c.max_speedup.is_measured()) {
        let _ = writeln!(
            out,
            "note: groups marked n/a have no single-thread baseline run"
        );
    }
    out
}

/// Render the speedup-vs-threads comparison for one matrix size.
///
/// One block per method, one bar per thread count; bars are scaled to the
/// largest measured speedup in the slice. Methods without a baseline render
/// `n/a` instead of a bar.
///
/// # Errors
///
/// Returns [`AnalizarError::EmptyInput`] when no rows match `size`.
pub fn render_speedup_chart(annotated: &[AnnotatedObservation], size: usize) -> Result<String> {
    let slice = slice_by_size(annotated, size);
    if slice.is_empty() {
        return Err(AnalizarError::EmptyInput {
            operation: format!("speedup chart for size {size}"),
        });
    }

    let max_speedup = slice
        .iter()
        .filter_map(|r| r.speedup.value())
        .fold(1.0_f64, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "Speedup vs Threads ({size}x{size})");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for method in methods(&slice) {
        let _ = writeln!(out, "{method}");
        let mut rows: Vec<&AnnotatedObservation> =
            slice.iter().filter(|r| r.method == method).collect();
        rows.sort_by_key(|r| r.threads);

        for row in rows {
            let (bar, label) = match row.speedup.value() {
                Some(speedup) => (
                    render_bar(speedup, max_speedup, BAR_WIDTH),
                    row.speedup.to_string(),
                ),
                None => (" ".repeat(BAR_WIDTH), "n/a".to_string()),
            };
            let _ = writeln!(out, "  {:>4} threads  {bar}  {label:>8}", row.threads);
        }
    }
    Ok(out)
}

/// Render execution time across matrix sizes for one thread count.
///
/// Bars are scaled to the slowest run in the slice; longer bar = more time.
///
/// # Errors
///
/// Returns [`AnalizarError::EmptyInput`] when no rows match `threads`.
pub fn render_scaling_chart(annotated: &[AnnotatedObservation], threads: usize) -> Result<String> {
    let slice = slice_by_threads(annotated, threads);
    if slice.is_empty() {
        return Err(AnalizarError::EmptyInput {
            operation: format!("scaling chart for {threads} threads"),
        });
    }

    let max_time = slice
        .iter()
        .map(|r| r.time_seconds)
        .fold(f64::MIN, f64::max);

    let mut out = String::new();
    let _ = writeln!(out, "Execution Time vs Matrix Size (Threads = {threads})");
    let _ = writeln!(out, "{}", "-".repeat(TABLE_WIDTH));

    for method in methods(&slice) {
        let _ = writeln!(out, "{method}");
        let mut rows: Vec<&AnnotatedObservation> =
            slice.iter().filter(|r| r.method == method).collect();
        rows.sort_by_key(|r| r.size);

        for row in rows {
            let _ = writeln!(
                out,
                "  {:>6}x{:<6}  {}  {:.6}s",
                row.size,
                row.size,
                render_bar(row.time_seconds, max_time, BAR_WIDTH),
                row.time_seconds
            );
        }
    }
    Ok(out)
}

/// One-line summary for quick comparison: group count and the single fastest
/// configuration overall.
#[must_use]
pub fn render_compact(configs: &[OptimalConfiguration]) -> String {
    let fastest = configs.iter().min_by(|a, b| {
        a.min_time_seconds
            .partial_cmp(&b.min_time_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    match fastest {
        Some(best) => format!(
            "{} groups | fastest: {}x{} {} @ {} threads ({:.6}s, {})",
            configs.len(),
            best.size,
            best.size,
            best.method,
            best.optimal_threads,
            best.min_time_seconds,
            best.max_speedup
        ),
        None => "0 groups".to_string(),
    }
}

/// Render an ASCII bar scaled to `max`
fn render_bar(value: f64, max: f64, width: usize) -> String {
    let ratio = if max > 0.0 { value / max } else { 0.0 };
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width - filled;

    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
