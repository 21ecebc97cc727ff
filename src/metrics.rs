//! Derived-metrics engine for benchmark tables
//!
//! Transforms raw `(size, method, threads, time)` observations into:
//! - per-row speedup against the group's single-thread baseline
//!   ([`annotate`])
//! - per-group optimal (minimum-time) configurations
//!   ([`optimal_configurations`])
//!
//! Both passes are pure, single-threaded, and O(n) with a `HashMap` group
//! index. A group is the set of rows sharing the same `(size, method)` key.
//!
//! A group without a `threads == 1` row cannot be normalized; its rows get
//! [`Speedup::Undefined`] and every other group is still processed. Invalid
//! measurements (non-positive or non-finite times) are rejected outright.

use std::collections::HashMap;

use crate::error::{AnalizarError, Result};
use crate::observation::{AnnotatedObservation, Observation, OptimalConfiguration, Speedup};

/// Compute per-row speedup against each group's single-thread baseline.
///
/// Output preserves input order and cardinality: one annotated row per input
/// row. The baseline of a `(size, method)` group is the `time_seconds` of its
/// first `threads == 1` row; the baseline row itself annotates to a speedup
/// of exactly 1.0. Groups without a baseline degrade to
/// [`Speedup::Undefined`] rather than failing the whole computation.
///
/// Empty input yields empty output.
///
/// # Errors
///
/// Returns [`AnalizarError::InvalidMeasurement`] if any row has a
/// non-positive or non-finite time, or a zero size or thread count.
pub fn annotate(observations: &[Observation]) -> Result<Vec<AnnotatedObservation>> {
    for obs in observations {
        validate(obs)?;
    }

    // First threads==1 row per group wins, consistent with the min-time
    // tie-break below.
    let mut baselines: HashMap<(usize, &str), f64> = HashMap::new();
    for obs in observations {
        if obs.threads == 1 {
            baselines
                .entry((obs.size, obs.method.as_str()))
                .or_insert(obs.time_seconds);
        }
    }

    Ok(observations
        .iter()
        .map(|obs| {
            let speedup = match baselines.get(&(obs.size, obs.method.as_str())) {
                Some(baseline) => Speedup::Measured(baseline / obs.time_seconds),
                None => Speedup::Undefined,
            };
            AnnotatedObservation {
                size: obs.size,
                method: obs.method.clone(),
                threads: obs.threads,
                time_seconds: obs.time_seconds,
                speedup,
            }
        })
        .collect())
}

/// Select the minimum-time configuration of every `(size, method)` group.
///
/// On exactly-equal minimum times the first row in group input order wins
/// (strict `<` comparison while scanning). Output order follows the first
/// appearance of each group in the input; callers sort for presentation
/// (see [`crate::projection::sorted_optimal`]).
///
/// Pure function; empty input yields empty output.
#[must_use]
pub fn optimal_configurations(annotated: &[AnnotatedObservation]) -> Vec<OptimalConfiguration> {
    let mut order: Vec<(usize, &str)> = Vec::new();
    let mut best: HashMap<(usize, &str), &AnnotatedObservation> = HashMap::new();

    for obs in annotated {
        let key = (obs.size, obs.method.as_str());
        // Strict < keeps the first row on exact ties.
        let improves = match best.get(&key) {
            Some(current) => obs.time_seconds < current.time_seconds,
            None => {
                order.push(key);
                true
            }
        };
        if improves {
            best.insert(key, obs);
        }
    }

    order
        .into_iter()
        .map(|key| {
            let obs = best[&key];
            OptimalConfiguration {
                size: obs.size,
                method: obs.method.clone(),
                optimal_threads: obs.threads,
                min_time_seconds: obs.time_seconds,
                max_speedup: obs.speedup,
            }
        })
        .collect()
}

/// Reject rows whose fields cannot yield a meaningful ratio
fn validate(obs: &Observation) -> Result<()> {
    let reason = if !obs.time_seconds.is_finite() {
        Some(format!("time {} is not a finite value", obs.time_seconds))
    } else if obs.time_seconds <= 0.0 {
        Some(format!("time {} is not a positive value", obs.time_seconds))
    } else if obs.size == 0 {
        Some("matrix size must be positive".to_string())
    } else if obs.threads == 0 {
        Some("thread count must be positive".to_string())
    } else {
        None
    };

    match reason {
        Some(reason) => Err(AnalizarError::InvalidMeasurement {
            size: obs.size,
            method: obs.method.clone(),
            threads: obs.threads,
            reason,
        }),
        None => Ok(()),
    }
}
