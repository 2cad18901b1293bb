use std::path::PathBuf;

use clap::Args;
use tracing::warn;

use crate::host::{FilesystemDiscovery, OutputDirHost, TracingErrorReporter};
use crate::report::{ReportError, ReportParser, DEFAULT_SEARCH_PATTERN};

#[derive(Args)]
pub struct ReportArgs {
    /// Report files or directories to search
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = "odgi_report")]
    pub outdir: PathBuf,

    /// File name pattern for reports found in directories
    #[arg(long, default_value = DEFAULT_SEARCH_PATTERN)]
    pub pattern: String,
}

/// Execute report subcommand
///
/// # Errors
///
/// Returns an error if the output directory cannot be created, discovery
/// fails, or any report is malformed.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ReportArgs, verbose: bool) -> anyhow::Result<()> {
    let host = OutputDirHost::new(&args.outdir)?;
    let discovery = FilesystemDiscovery::new(args.inputs.clone());

    let mut parser = ReportParser::new(discovery, host, TracingErrorReporter)
        .with_search_pattern(args.pattern.clone());

    match parser.run() {
        Ok(()) => {}
        Err(ReportError::NoReports(pattern)) => {
            warn!(pattern = %pattern, "No odgi stats reports found, nothing to report");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    }

    parser.host().finish()?;

    if verbose {
        eprintln!(
            "Wrote {} reports to {}",
            parser.store().len(),
            parser.host().dir().display()
        );
    }

    Ok(())
}
