use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::cli::OutputFormat;
use crate::host::{FilesystemDiscovery, MemoryHost, TracingErrorReporter};
use crate::report::general_stats::GeneralStatsTable;
use crate::report::metrics::LinePlot;
use crate::report::{ReportError, ReportParser, DEFAULT_SEARCH_PATTERN};

#[derive(Args)]
pub struct ShowArgs {
    /// Report files or directories to search
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// File name pattern for reports found in directories
    #[arg(long, default_value = DEFAULT_SEARCH_PATTERN)]
    pub pattern: String,
}

/// Execute show subcommand
///
/// # Errors
///
/// Returns an error if discovery fails, any report is malformed, or output
/// cannot be serialized.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let discovery = FilesystemDiscovery::new(args.inputs.clone());
    let mut parser = ReportParser::new(discovery, MemoryHost::new(), TracingErrorReporter)
        .with_search_pattern(args.pattern.clone());

    match parser.run() {
        Ok(()) => {}
        Err(ReportError::NoReports(pattern)) => {
            warn!(pattern = %pattern, "No odgi stats reports found");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    let report_count = parser.store().len();
    let host = parser.into_host();
    let (Some(table), Some(section)) = (host.general_stats.first(), host.sections.first()) else {
        anyhow::bail!("No report output was produced");
    };

    match format {
        OutputFormat::Text => print_text(report_count, table, &section.plot),
        OutputFormat::Json => print_json(table, &section.plot)?,
        OutputFormat::Tsv => print_tsv(table, &section.plot),
    }

    Ok(())
}

fn print_text(report_count: usize, table: &GeneralStatsTable, plot: &LinePlot) {
    println!("Odgi stats: {report_count} reports");
    println!();

    let width = sample_width(table);
    print!("{:<width$}", "Sample");
    for header in &table.headers {
        print!("  {:>12}", header.title);
    }
    println!();
    for (sample, stats) in table.rows.iter() {
        print!("{sample:<width$}");
        for header in &table.headers {
            print!("  {:>12}", stats.value(header.column));
        }
        println!();
    }

    println!();
    println!("{}", plot.config.title);
    for series in &plot.data {
        println!("  {}", series.name());
        for (sample, value) in series.values.iter() {
            println!("    {sample:<width$}  {value}");
        }
    }
}

fn print_json(table: &GeneralStatsTable, plot: &LinePlot) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "general_stats": table,
        "metrics": plot,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(table: &GeneralStatsTable, plot: &LinePlot) {
    let mut header = vec!["sample".to_string()];
    header.extend(table.headers.iter().map(|h| h.key.clone()));
    header.extend(plot.data.iter().map(|s| s.name().to_string()));
    println!("{}", header.join("\t"));

    for (sample, stats) in table.rows.iter() {
        let mut row = vec![sample.to_string()];
        row.extend(table.headers.iter().map(|h| stats.value(h.column).to_string()));
        row.extend(plot.data.iter().map(|s| {
            s.values
                .get(sample)
                .map_or_else(String::new, ToString::to_string)
        }));
        println!("{}", row.join("\t"));
    }
}

fn sample_width(table: &GeneralStatsTable) -> usize {
    table
        .rows
        .keys()
        .map(String::len)
        .chain(std::iter::once("Sample".len()))
        .max()
        .unwrap_or(0)
}
