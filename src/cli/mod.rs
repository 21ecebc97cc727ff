//! CLI command implementations
//!
//! Business logic for the `analizar` commands, extracted from main.rs for
//! testability. Each handler loads a benchmark table through the configured
//! column mapping, runs the metrics engine, and prints or writes the result.

use clap::{Parser, Subcommand};

use crate::error::{AnalizarError, Result};
use crate::export;
use crate::loader::load_csv;
use crate::metrics::{annotate, optimal_configurations};
use crate::projection::{largest_size, sorted_optimal};
use crate::report;
use crate::schema::ColumnMapping;

/// Analizar - benchmark analysis and reporting
///
/// Derives speedup and optimal thread configurations from matrix
/// multiplication benchmark tables and renders comparative reports.
#[derive(Parser)]
#[command(name = "analizar")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Schema selection shared by all table-reading commands
#[derive(Debug, clap::Args)]
pub struct SchemaArgs {
    /// Column-name preset: capitalized (Size/Method/Threads/Time_Sec)
    /// or lowercase (N/method/threads/time)
    #[arg(long, conflicts_with = "mapping")]
    pub schema: Option<String>,

    /// Path to a JSON file with a custom column mapping
    /// ({"size_col": ..., "method_col": ..., "threads_col": ..., "time_col": ...})
    #[arg(long)]
    pub mapping: Option<String>,
}

/// CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Full analysis: optimal-configuration table plus comparison charts
    ///
    /// Examples:
    ///   analizar report results.csv
    ///   analizar report results.csv --schema lowercase --size 1024
    ///   analizar report results.csv --output annotated.csv --json report.json
    Report {
        /// Benchmark results table (CSV)
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema selection
        #[command(flatten)]
        schema: SchemaArgs,

        /// Matrix size for the speedup chart (default: largest present)
        #[arg(long)]
        size: Option<usize>,

        /// Also render the cross-size scaling chart for this thread count
        #[arg(long)]
        threads: Option<usize>,

        /// Write the annotated table (input columns + Speedup) to this CSV
        #[arg(short, long)]
        output: Option<String>,

        /// Write the full analysis (annotated + optimal) to this JSON file
        #[arg(long)]
        json: Option<String>,
    },
    /// Annotate a table with per-row speedup and write it back out
    ///
    /// Examples:
    ///   analizar annotate results.csv --output annotated.csv
    Annotate {
        /// Benchmark results table (CSV)
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema selection
        #[command(flatten)]
        schema: SchemaArgs,

        /// Destination for the annotated CSV
        #[arg(short, long)]
        output: String,
    },
    /// Print the optimal thread configuration per (size, method) group
    ///
    /// Examples:
    ///   analizar optimal results.csv
    ///   analizar optimal results.csv --format json
    Optimal {
        /// Benchmark results table (CSV)
        #[arg(value_name = "FILE")]
        file: String,

        /// Schema selection
        #[command(flatten)]
        schema: SchemaArgs,

        /// Output format: table, json, csv
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Write the sorted optimal table to this CSV file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Show version info
    Info,
}

/// Main CLI entrypoint - dispatches commands to handlers
pub fn entrypoint(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Report {
            file,
            schema,
            size,
            threads,
            output,
            json,
        } => handle_report(&file, &schema, size, threads, output.as_deref(), json.as_deref()),
        Commands::Annotate {
            file,
            schema,
            output,
        } => handle_annotate(&file, &schema, &output),
        Commands::Optimal {
            file,
            schema,
            format,
            output,
        } => handle_optimal(&file, &schema, &format, output.as_deref()),
        Commands::Info => {
            print_info();
            Ok(())
        }
    }
}

/// Resolve the column mapping from CLI arguments.
///
/// Priority: explicit JSON mapping file, then named preset, then the default
/// capitalized scheme.
pub fn resolve_mapping(args: &SchemaArgs) -> Result<ColumnMapping> {
    if let Some(path) = &args.mapping {
        let text = std::fs::read_to_string(path).map_err(|e| AnalizarError::Io {
            message: format!("failed to read mapping file {path}: {e}"),
        })?;
        let mapping: ColumnMapping =
            serde_json::from_str(&text).map_err(|e| AnalizarError::InvalidMapping {
                reason: format!("malformed mapping file {path}: {e}"),
            })?;
        mapping.validate()?;
        return Ok(mapping);
    }
    match &args.schema {
        Some(name) => ColumnMapping::preset(name),
        None => Ok(ColumnMapping::default()),
    }
}

/// Full analysis report handler
fn handle_report(
    file: &str,
    schema: &SchemaArgs,
    size: Option<usize>,
    threads: Option<usize>,
    output: Option<&str>,
    json: Option<&str>,
) -> Result<()> {
    let mapping = resolve_mapping(schema)?;
    let observations = load_csv(file, &mapping)?;
    let annotated = annotate(&observations)?;
    let optimal = optimal_configurations(&annotated);

    println!("{}", report::render_optimal_table(&optimal));

    let chart_size = match size {
        Some(s) => s,
        None => largest_size(&annotated)?,
    };
    println!("{}", report::render_speedup_chart(&annotated, chart_size)?);

    if let Some(t) = threads {
        println!("{}", report::render_scaling_chart(&annotated, t)?);
    }

    println!("{}", report::render_compact(&optimal));

    if let Some(path) = output {
        export::export_annotated_csv(path, &annotated, &mapping)?;
        println!();
        println!("Annotated table written to: {path}");
    }

    if let Some(path) = json {
        let envelope = serde_json::json!({
            "version": "1.0",
            "source": file,
            "observations": annotated,
            "optimal_configurations": sorted_optimal(optimal),
        });
        write_json(path, &envelope)?;
        println!("Analysis JSON written to: {path}");
    }

    Ok(())
}

/// Annotate-and-export handler
fn handle_annotate(file: &str, schema: &SchemaArgs, output: &str) -> Result<()> {
    let mapping = resolve_mapping(schema)?;
    let observations = load_csv(file, &mapping)?;
    let annotated = annotate(&observations)?;

    export::export_annotated_csv(output, &annotated, &mapping)?;
    println!("Annotated {} observations: {output}", annotated.len());
    Ok(())
}

/// Optimal-table handler
fn handle_optimal(
    file: &str,
    schema: &SchemaArgs,
    format: &str,
    output: Option<&str>,
) -> Result<()> {
    let mapping = resolve_mapping(schema)?;
    let observations = load_csv(file, &mapping)?;
    let annotated = annotate(&observations)?;
    let optimal = sorted_optimal(optimal_configurations(&annotated));

    match format {
        "table" => println!("{}", report::render_optimal_table(&optimal)),
        "json" => {
            let value = export::optimal_json(&optimal);
            let text = serde_json::to_string_pretty(&value).map_err(|e| AnalizarError::Io {
                message: format!("failed to serialize JSON: {e}"),
            })?;
            println!("{text}");
        }
        "csv" => {
            export::write_optimal_csv(std::io::stdout().lock(), &optimal)?;
        }
        other => {
            return Err(AnalizarError::InvalidMapping {
                reason: format!("unknown output format '{other}', expected table, json, or csv"),
            })
        }
    }

    if let Some(path) = output {
        export::export_optimal_csv(path, &optimal)?;
        println!("Optimal table written to: {path}");
    }
    Ok(())
}

/// Print version/build info
pub fn print_info() {
    println!("analizar {}", env!("CARGO_PKG_VERSION"));
    println!("Benchmark analysis and reporting for matrix multiplication");
    println!();
    println!("Commands:");
    println!("  report    - Full analysis with charts");
    println!("  annotate  - Add speedup column to a results table");
    println!("  optimal   - Optimal thread configuration per group");
}

fn write_json(path: &str, value: &serde_json::Value) -> Result<()> {
    let text = serde_json::to_string_pretty(value).map_err(|e| AnalizarError::Io {
        message: format!("failed to serialize JSON: {e}"),
    })?;
    std::fs::write(path, text).map_err(|e| AnalizarError::Io {
        message: format!("failed to write {path}: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema_args(schema: Option<&str>, mapping: Option<&str>) -> SchemaArgs {
        SchemaArgs {
            schema: schema.map(str::to_string),
            mapping: mapping.map(str::to_string),
        }
    }

    #[test]
    fn test_resolve_mapping_default() {
        let mapping = resolve_mapping(&schema_args(None, None)).expect("default");
        assert_eq!(mapping, ColumnMapping::capitalized());
    }

    #[test]
    fn test_resolve_mapping_preset() {
        let mapping = resolve_mapping(&schema_args(Some("lowercase"), None)).expect("preset");
        assert_eq!(mapping, ColumnMapping::lowercase());
    }

    #[test]
    fn test_resolve_mapping_unknown_preset() {
        let err = resolve_mapping(&schema_args(Some("bogus"), None)).unwrap_err();
        assert!(matches!(err, AnalizarError::InvalidMapping { .. }));
    }

    #[test]
    fn test_resolve_mapping_missing_file() {
        let err = resolve_mapping(&schema_args(None, Some("/nonexistent/mapping.json")))
            .unwrap_err();
        assert!(matches!(err, AnalizarError::Io { .. }));
    }

    #[test]
    fn test_cli_parses_report_command() {
        let cli = Cli::try_parse_from([
            "analizar",
            "report",
            "results.csv",
            "--schema",
            "lowercase",
            "--size",
            "512",
        ])
        .expect("valid args");
        match cli.command {
            Commands::Report {
                file, schema, size, ..
            } => {
                assert_eq!(file, "results.csv");
                assert_eq!(schema.schema.as_deref(), Some("lowercase"));
                assert_eq!(size, Some(512));
            }
            _ => panic!("expected report command"),
        }
    }

    #[test]
    fn test_cli_rejects_schema_and_mapping_together() {
        let result = Cli::try_parse_from([
            "analizar",
            "optimal",
            "results.csv",
            "--schema",
            "lowercase",
            "--mapping",
            "map.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_optimal_default_format() {
        let cli = Cli::try_parse_from(["analizar", "optimal", "results.csv"]).expect("valid args");
        match cli.command {
            Commands::Optimal { format, .. } => assert_eq!(format, "table"),
            _ => panic!("expected optimal command"),
        }
    }
}
