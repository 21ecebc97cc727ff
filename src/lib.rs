//! # Analizar
//!
//! Post-processing and reporting for matrix-multiplication benchmark results.
//!
//! Analizar (Spanish: "to analyze") ingests tabular timing data produced by
//! an external measurement program — one row per `(size, method, threads,
//! time)` observation — and derives the metrics a performance report needs:
//! per-row speedup against the single-thread baseline of each `(size,
//! method)` group, and the optimal (minimum-time) thread configuration per
//! group.
//!
//! ## Features
//!
//! - **Pure derivation engine**: `annotate` and `optimal_configurations` are
//!   side-effect-free, single-pass, linear-time transforms
//! - **Explicit degraded results**: a group without a `threads == 1`
//!   baseline yields `Speedup::Undefined`, never a fake number
//! - **Configurable schemas**: an injectable column mapping instead of
//!   hardcoded column names
//! - **Reporting**: sorted summary tables, ASCII comparison charts, CSV/JSON
//!   export for downstream chart generators
//!
//! ## Example
//!
//! ```rust
//! use analizar::{annotate, optimal_configurations, Observation, Speedup};
//!
//! let observations = vec![
//!     Observation::new(100, "naive", 1, 2.0),
//!     Observation::new(100, "naive", 2, 1.0),
//!     Observation::new(100, "naive", 4, 0.6),
//! ];
//!
//! let annotated = annotate(&observations).unwrap();
//! assert_eq!(annotated[1].speedup, Speedup::Measured(2.0));
//!
//! let optimal = optimal_configurations(&annotated);
//! assert_eq!(optimal[0].optimal_threads, 4);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! raw table --> loader --> annotate --> optimal_configurations
//!                             |                  |
//!                             v                  v
//!                        projection slices   sorted summary
//!                             |                  |
//!                             v                  v
//!                        charts/export       report table
//! ```
//!
//! I/O lives at the edges (loader, export, report, cli); the engine in
//! between only maps input collections to output collections.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_precision_loss)] // usize -> f64 for bar scaling is safe
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)] // Errors sections provided where non-obvious

/// CLI command implementations (extracted for testability)
pub mod cli;
pub mod error;
pub mod export;
pub mod loader;
pub mod metrics;
pub mod observation;
pub mod projection;
pub mod report;
pub mod schema;

pub use error::{AnalizarError, Result};
pub use metrics::{annotate, optimal_configurations};
pub use observation::{
    AnnotatedObservation, BenchRow, Observation, OptimalConfiguration, Speedup,
};
pub use projection::{
    largest_size, methods, sizes, slice_by_size, slice_by_threads, sorted_optimal, thread_counts,
};
pub use schema::ColumnMapping;
