use clap::Args;

use crate::cli::OutputFormat;
use crate::core::GroupIdentifier;
use crate::host::{ErrorReporter, TracingErrorReporter};

#[derive(Args)]
pub struct GroupIdArgs {
    /// Report file names
    #[arg(required = true, num_args = 1..)]
    pub filenames: Vec<String>,
}

/// Execute group-id subcommand.
///
/// Exits the process with status 1 if any name matches no known naming
/// convention; nothing is printed in that case.
///
/// # Errors
///
/// Returns an error if JSON output cannot be serialized.
pub fn run(args: &GroupIdArgs, format: OutputFormat) -> anyhow::Result<()> {
    let reporter = TracingErrorReporter;

    let ids: Vec<(&str, GroupIdentifier)> = args
        .filenames
        .iter()
        .map(|name| match GroupIdentifier::from_filename(name) {
            Ok(id) => (name.as_str(), id),
            Err(e) => {
                reporter.log_error(&e.to_string());
                reporter.exit_process(1)
            }
        })
        .collect();

    match format {
        OutputFormat::Text => {
            for (name, id) in &ids {
                println!("{name}: {id}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = ids
                .iter()
                .map(|(name, id)| serde_json::json!({ "filename": name, "group_id": id }))
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("filename\tgroup_id");
            for (name, id) in &ids {
                println!("{name}\t{id}");
            }
        }
    }

    Ok(())
}
