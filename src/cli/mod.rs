//! Command-line interface for odgi-report.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **report**: Parse odgi stats reports and write the report contributions to a directory
//! - **show**: Parse odgi stats reports and print the summary table and metrics
//! - **group-id**: Print the group identifier derived from file names
//!
//! ## Usage
//!
//! ```text
//! # Write report files for all *.stats files below results/
//! odgi-report report results/ -o odgi_report
//!
//! # Use a different search pattern
//! odgi-report report results/ --pattern '*.og.stats.tsv'
//!
//! # JSON output for scripting
//! odgi-report show results/ --format json
//!
//! # Check how file names will be grouped
//! odgi-report group-id chr8.fa.seqwish.og.stats chr8.fa.consensus@10.og.stats
//! ```

use clap::{Parser, Subcommand};

pub mod group_id;
pub mod report;
pub mod show;

#[derive(Parser)]
#[command(name = "odgi-report")]
#[command(version)]
#[command(about = "Summarize odgi stats reports into tables and metric charts")]
#[command(
    long_about = "odgi-report parses the reports written by `odgi stats` for the graphs of a pangenome pipeline.\n\nReports are grouped by pipeline stage, derived from their file names:\n- seqwish (file name contains 'seqwish.og')\n- smooth (file name contains 'smooth')\n- consensus@N (a '.'-separated part of the file name contains 'consensus@')"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse reports and write report files to an output directory
    Report(report::ReportArgs),

    /// Parse reports and print the summary table and metrics
    Show(show::ShowArgs),

    /// Print the group identifier for file names
    GroupId(group_id::GroupIdArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
