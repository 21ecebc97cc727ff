//! CSV ingestion for benchmark tables
//!
//! Reads the external measurement program's output through a configured
//! [`ColumnMapping`]. The loader is strict: a missing file, a missing
//! configured column, or an unparseable cell is an error — rows are never
//! silently skipped, because a dropped row would quietly change every
//! derived metric downstream.

use std::io::Read;
use std::path::Path;

use crate::error::{AnalizarError, Result};
use crate::observation::Observation;
use crate::schema::ColumnMapping;

/// Resolved positions of the four mapped columns within a header row
struct ColumnIndex {
    size: usize,
    method: usize,
    threads: usize,
    time: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord, mapping: &ColumnMapping) -> Result<Self> {
        let find = |name: &str| -> Result<usize> {
            headers.iter().position(|h| h == name).ok_or_else(|| {
                AnalizarError::SchemaMismatch {
                    missing: name.to_string(),
                    available: headers.iter().map(str::to_string).collect(),
                }
            })
        };
        Ok(Self {
            size: find(&mapping.size_col)?,
            method: find(&mapping.method_col)?,
            threads: find(&mapping.threads_col)?,
            time: find(&mapping.time_col)?,
        })
    }
}

/// Load observations from a CSV file on disk.
///
/// # Errors
///
/// - [`AnalizarError::SourceNotFound`] if `path` does not exist
/// - [`AnalizarError::InvalidMapping`] if the mapping has colliding names
/// - [`AnalizarError::SchemaMismatch`] if a configured column is absent
/// - [`AnalizarError::ParseError`] for unparseable cells
pub fn load_csv(path: impl AsRef<Path>, mapping: &ColumnMapping) -> Result<Vec<Observation>> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(AnalizarError::SourceNotFound {
            path: path.display().to_string(),
        });
    }
    let file = std::fs::File::open(path).map_err(|e| AnalizarError::Io {
        message: format!("failed to open {}: {e}", path.display()),
    })?;
    read_observations(file, mapping)
}

/// Read observations from any CSV source.
///
/// The first record is the header; extra columns beyond the four mapped ones
/// are ignored, which lets an annotated table (with its appended speedup
/// column) be re-read as raw observations.
///
/// # Errors
///
/// Same as [`load_csv`], minus `SourceNotFound`.
pub fn read_observations<R: Read>(reader: R, mapping: &ColumnMapping) -> Result<Vec<Observation>> {
    mapping.validate()?;

    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| AnalizarError::Io {
            message: format!("failed to read CSV header: {e}"),
        })?
        .clone();
    let index = ColumnIndex::resolve(&headers, mapping)?;

    let mut observations = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| AnalizarError::Io {
            message: format!("failed to read CSV record: {e}"),
        })?;
        let line = record.position().map_or(0, csv::Position::line);

        observations.push(Observation {
            size: parse_cell(&record, index.size, &mapping.size_col, line)?,
            method: cell(&record, index.method, &mapping.method_col, line)?.to_string(),
            threads: parse_cell(&record, index.threads, &mapping.threads_col, line)?,
            time_seconds: parse_cell(&record, index.time, &mapping.time_col, line)?,
        });
    }
    Ok(observations)
}

/// Fetch a cell by resolved index, erroring on short records
fn cell<'r>(
    record: &'r csv::StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<&'r str> {
    record.get(idx).ok_or_else(|| AnalizarError::ParseError {
        line,
        column: column.to_string(),
        reason: "row has fewer columns than the header".to_string(),
    })
}

fn parse_cell<T: std::str::FromStr>(
    record: &csv::StringRecord,
    idx: usize,
    column: &str,
    line: u64,
) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    let raw = cell(record, idx, column, line)?;
    raw.parse().map_err(|e: T::Err| AnalizarError::ParseError {
        line,
        column: column.to_string(),
        reason: format!("cannot parse '{raw}': {e}"),
    })
}
