//! Benchmark observation data model
//!
//! Core types for the analysis pipeline:
//! - [`Observation`]: one measured benchmark run (size, method, threads, time)
//! - [`Speedup`]: normalized speedup against the single-thread baseline,
//!   with an explicit sentinel for groups that lack a baseline
//! - [`AnnotatedObservation`]: an observation plus its computed speedup
//! - [`OptimalConfiguration`]: per-group minimum-time configuration
//!
//! All types are plain immutable data; derivations never mutate their inputs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One measured benchmark run.
///
/// Produced by an external measurement program and loaded from a tabular
/// source. Rows are grouped by `(size, method)` for all derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Matrix dimension N (for an N×N multiplication)
    pub size: usize,
    /// Algorithmic/parallelization variant under test
    pub method: String,
    /// Degree of parallelism for this run (1 = sequential baseline)
    pub threads: usize,
    /// Wall-clock elapsed time in seconds (lower is better)
    pub time_seconds: f64,
}

impl Observation {
    /// Create a new observation
    #[must_use]
    pub fn new(size: usize, method: impl Into<String>, threads: usize, time_seconds: f64) -> Self {
        Self {
            size,
            method: method.into(),
            threads,
            time_seconds,
        }
    }
}

/// Speedup of an observation relative to its group's single-thread baseline.
///
/// `Measured(x)` is the true ratio `baseline_time / time_seconds`. `Undefined`
/// marks a group that has no `threads == 1` row: the value is deliberately
/// not a number so it can never be mistaken for a real measurement.
///
/// Serializes untagged: a measured ratio becomes a JSON number, an undefined
/// speedup becomes JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Speedup {
    /// Ratio of the group's baseline time to this observation's time
    Measured(f64),
    /// The group has no single-thread baseline; no ratio exists
    Undefined,
}

impl Speedup {
    /// Whether this is a real measured ratio
    #[must_use]
    pub fn is_measured(&self) -> bool {
        matches!(self, Self::Measured(_))
    }

    /// The measured ratio, if one exists
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Measured(v) => Some(*v),
            Self::Undefined => None,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Measured(v) => write!(f, "{v:.2}x"),
            Self::Undefined => write!(f, "n/a"),
        }
    }
}

/// An observation annotated with its computed speedup.
///
/// Produced by [`crate::metrics::annotate`]; one entry per input observation,
/// in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedObservation {
    /// Matrix dimension N
    pub size: usize,
    /// Variant under test
    pub method: String,
    /// Degree of parallelism
    pub threads: usize,
    /// Wall-clock elapsed time in seconds
    pub time_seconds: f64,
    /// Speedup against the group's single-thread baseline
    pub speedup: Speedup,
}

impl AnnotatedObservation {
    /// Project back to the raw observation fields
    #[must_use]
    pub fn to_observation(&self) -> Observation {
        Observation {
            size: self.size,
            method: self.method.clone(),
            threads: self.threads,
            time_seconds: self.time_seconds,
        }
    }
}

/// The minimum-time configuration for one `(size, method)` group.
///
/// Produced by [`crate::metrics::optimal_configurations`]. On exactly-equal
/// minimum times the first row in group input order wins; this is a
/// documented arbitrary tie-break, not a performance judgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimalConfiguration {
    /// Matrix dimension N (group key)
    pub size: usize,
    /// Variant under test (group key)
    pub method: String,
    /// Thread count of the minimum-time observation
    pub optimal_threads: usize,
    /// Elapsed time of the minimum-time observation
    pub min_time_seconds: f64,
    /// Speedup of the minimum-time observation
    pub max_speedup: Speedup,
}

/// Common accessors shared by raw and annotated benchmark rows.
///
/// Lets the projection helpers ([`crate::projection`]) slice and enumerate
/// either table shape without duplication.
pub trait BenchRow {
    /// Matrix dimension N
    fn size(&self) -> usize;
    /// Degree of parallelism
    fn threads(&self) -> usize;
    /// Variant under test
    fn method(&self) -> &str;
    /// Wall-clock elapsed time in seconds
    fn time_seconds(&self) -> f64;
}

impl BenchRow for Observation {
    fn size(&self) -> usize {
        self.size
    }
    fn threads(&self) -> usize {
        self.threads
    }
    fn method(&self) -> &str {
        &self.method
    }
    fn time_seconds(&self) -> f64 {
        self.time_seconds
    }
}

impl BenchRow for AnnotatedObservation {
    fn size(&self) -> usize {
        self.size
    }
    fn threads(&self) -> usize {
        self.threads
    }
    fn method(&self) -> &str {
        &self.method
    }
    fn time_seconds(&self) -> f64 {
        self.time_seconds
    }
}
