//! CLI argument parsing for Presencia

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Which report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportKind {
    /// List users present in the attendance data
    Users,
    /// Mean presence time per weekday for one user
    Mean,
    /// Total presence time per weekday for one user
    Total,
    /// Mean arrival and departure time per weekday for one user
    StartEnd,
}

/// Output format for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "presencia")]
#[command(version)]
#[command(about = "Attendance presence analyzer with weekday statistics", long_about = None)]
pub struct Cli {
    /// Report to produce
    #[arg(value_enum)]
    pub report: ReportKind,

    /// User id the report is about (required for per-user reports)
    #[arg(value_name = "USER_ID")]
    pub user_id: Option<u32>,

    /// Path to the comma-delimited presence log
    #[arg(
        long = "data-csv",
        value_name = "PATH",
        default_value = "runtime/data/sample_data.csv"
    )]
    pub data_csv: PathBuf,

    /// Path to the roster XML source
    #[arg(
        long = "data-xml",
        value_name = "PATH",
        default_value = "runtime/data/users.xml"
    )]
    pub data_xml: PathBuf,

    /// Seconds the parsed presence data stays cached between reads
    #[arg(long = "cache-ttl", value_name = "SECS", default_value = "600")]
    pub cache_ttl: u64,

    /// Output format (text, json, or csv)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Enable debug diagnostics on stderr
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,
}
