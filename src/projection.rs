//! Report projections over engine output
//!
//! Pure filters and sorts that shape [`crate::metrics`] output for the
//! rendering layer: the sorted summary table, per-size and per-thread-count
//! slices for comparison charts, and the axis helpers the chart loops iterate
//! over. No new facts are computed here.

use std::cmp::Ordering;

use crate::error::{AnalizarError, Result};
use crate::observation::{BenchRow, OptimalConfiguration};

/// Order optimal configurations for the summary table:
/// size ascending, then minimum time ascending.
///
/// Returns a permutation of the input; no rows are dropped or duplicated.
#[must_use]
pub fn sorted_optimal(mut configs: Vec<OptimalConfiguration>) -> Vec<OptimalConfiguration> {
    configs.sort_by(|a, b| {
        a.size.cmp(&b.size).then_with(|| {
            a.min_time_seconds
                .partial_cmp(&b.min_time_seconds)
                .unwrap_or(Ordering::Equal)
        })
    });
    configs
}

/// Rows whose matrix size equals `size`, for single-size comparison charts
#[must_use]
pub fn slice_by_size<R: BenchRow + Clone>(rows: &[R], size: usize) -> Vec<R> {
    rows.iter().filter(|r| r.size() == size).cloned().collect()
}

/// Rows whose thread count equals `threads`, for cross-size scaling charts
#[must_use]
pub fn slice_by_threads<R: BenchRow + Clone>(rows: &[R], threads: usize) -> Vec<R> {
    rows.iter()
        .filter(|r| r.threads() == threads)
        .cloned()
        .collect()
}

/// The largest matrix size present, used as the default headline slice.
///
/// # Errors
///
/// Returns [`AnalizarError::EmptyInput`] when there are no rows to choose
/// from.
pub fn largest_size<R: BenchRow>(rows: &[R]) -> Result<usize> {
    rows.iter()
        .map(BenchRow::size)
        .max()
        .ok_or_else(|| AnalizarError::EmptyInput {
            operation: "largest_size".to_string(),
        })
}

/// Distinct matrix sizes, ascending
#[must_use]
pub fn sizes<R: BenchRow>(rows: &[R]) -> Vec<usize> {
    let mut values: Vec<usize> = rows.iter().map(BenchRow::size).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Distinct thread counts, ascending
#[must_use]
pub fn thread_counts<R: BenchRow>(rows: &[R]) -> Vec<usize> {
    let mut values: Vec<usize> = rows.iter().map(BenchRow::threads).collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Distinct method names, in first-appearance order
#[must_use]
pub fn methods<R: BenchRow>(rows: &[R]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for row in rows {
        if !seen.iter().any(|m| m == row.method()) {
            seen.push(row.method().to_string());
        }
    }
    seen
}
