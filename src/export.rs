//! Table writers for engine output
//!
//! Emits the two tables external collaborators consume:
//! - the annotated observation table (input columns plus a speedup column),
//!   for per-size/per-thread chart generators
//! - the optimal-configuration table, for tabular summary reports
//!
//! CSV column names for the annotated table follow the source's
//! [`ColumnMapping`], so a downstream tool configured for the same schema can
//! read the output it gets back. Undefined speedups are written as an empty
//! CSV field and a JSON `null`, never as a number.

use std::io::Write;
use std::path::Path;

use serde_json::json;

use crate::error::{AnalizarError, Result};
use crate::observation::{AnnotatedObservation, OptimalConfiguration, Speedup};
use crate::schema::ColumnMapping;

/// Fixed header of the optimal-configuration table
const OPTIMAL_HEADER: [&str; 5] = ["Size", "Method", "Opt_Threads", "Min_Time_Sec", "Max_Speedup"];

/// Envelope version stamped into JSON outputs
const JSON_VERSION: &str = "1.0";

/// Write the annotated table as CSV: the four mapped input columns plus a
/// `Speedup` column.
///
/// # Errors
///
/// Returns [`AnalizarError::Io`] if the underlying writer fails.
pub fn write_annotated_csv<W: Write>(
    writer: W,
    annotated: &[AnnotatedObservation],
    mapping: &ColumnMapping,
) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let [size_col, method_col, threads_col, time_col] = mapping.columns();
    csv_writer
        .write_record([size_col, method_col, threads_col, time_col, "Speedup"])
        .map_err(csv_io_error)?;

    for row in annotated {
        csv_writer
            .write_record([
                row.size.to_string(),
                row.method.clone(),
                row.threads.to_string(),
                format_time(row.time_seconds),
                speedup_field(row.speedup),
            ])
            .map_err(csv_io_error)?;
    }
    csv_writer.flush().map_err(|e| AnalizarError::Io {
        message: format!("failed to flush CSV output: {e}"),
    })
}

/// Write the optimal-configuration table as CSV with the fixed
/// `Size,Method,Opt_Threads,Min_Time_Sec,Max_Speedup` header.
///
/// # Errors
///
/// Returns [`AnalizarError::Io`] if the underlying writer fails.
pub fn write_optimal_csv<W: Write>(writer: W, configs: &[OptimalConfiguration]) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(OPTIMAL_HEADER).map_err(csv_io_error)?;
    for config in configs {
        csv_writer
            .write_record([
                config.size.to_string(),
                config.method.clone(),
                config.optimal_threads.to_string(),
                format_time(config.min_time_seconds),
                speedup_field(config.max_speedup),
            ])
            .map_err(csv_io_error)?;
    }
    csv_writer.flush().map_err(|e| AnalizarError::Io {
        message: format!("failed to flush CSV output: {e}"),
    })
}

/// Write the annotated table to a file path
///
/// # Errors
///
/// Returns [`AnalizarError::Io`] on file-system failures.
pub fn export_annotated_csv(
    path: impl AsRef<Path>,
    annotated: &[AnnotatedObservation],
    mapping: &ColumnMapping,
) -> Result<()> {
    let file = std::fs::File::create(path.as_ref()).map_err(|e| AnalizarError::Io {
        message: format!("failed to create {}: {e}", path.as_ref().display()),
    })?;
    write_annotated_csv(file, annotated, mapping)
}

/// Write the optimal-configuration table to a file path
///
/// # Errors
///
/// Returns [`AnalizarError::Io`] on file-system failures.
pub fn export_optimal_csv(
    path: impl AsRef<Path>,
    configs: &[OptimalConfiguration],
) -> Result<()> {
    let file = std::fs::File::create(path.as_ref()).map_err(|e| AnalizarError::Io {
        message: format!("failed to create {}: {e}", path.as_ref().display()),
    })?;
    write_optimal_csv(file, configs)
}

/// JSON envelope for the annotated table
#[must_use]
pub fn annotated_json(annotated: &[AnnotatedObservation]) -> serde_json::Value {
    json!({
        "version": JSON_VERSION,
        "observations": annotated,
    })
}

/// JSON envelope for the optimal-configuration table
#[must_use]
pub fn optimal_json(configs: &[OptimalConfiguration]) -> serde_json::Value {
    json!({
        "version": JSON_VERSION,
        "optimal_configurations": configs,
    })
}

fn speedup_field(speedup: Speedup) -> String {
    match speedup {
        Speedup::Measured(v) => format!("{v}"),
        Speedup::Undefined => String::new(),
    }
}

/// Times round-trip through Display/FromStr without precision loss at the
/// magnitudes benchmarks produce, so plain formatting is enough.
fn format_time(seconds: f64) -> String {
    format!("{seconds}")
}

fn csv_io_error(err: csv::Error) -> AnalizarError {
    AnalizarError::Io {
        message: format!("failed to write CSV record: {err}"),
    }
}
