//! Collaborators of the report parser.
//!
//! The parser does not find files, render output, or terminate the process
//! itself. Instead it is handed implementations of these traits:
//!
//! - [`ReportDiscovery`]: supplies raw report text
//! - [`ReportHost`]: receives data sources, data files, the general stats table
//!   and report sections
//! - [`ErrorReporter`]: logs fatal configuration errors and ends the process
//!
//! ## Implementations
//!
//! | Trait             | Type                     | Use                        |
//! |-------------------|--------------------------|----------------------------|
//! | `ReportDiscovery` | [`FilesystemDiscovery`]  | Files and directory walks  |
//! | `ReportHost`      | [`OutputDirHost`]        | JSON/TSV output directory  |
//! | `ReportHost`      | [`MemoryHost`]           | In-memory (CLI `show`, tests) |
//! | `ErrorReporter`   | [`TracingErrorReporter`] | `tracing::error!` + exit   |

pub mod discovery;
pub mod memory;
pub mod output_dir;
pub mod reporter;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::report::general_stats::GeneralStatsTable;
use crate::report::Section;

pub use discovery::FilesystemDiscovery;
pub use memory::MemoryHost;
pub use output_dir::OutputDirHost;
pub use reporter::TracingErrorReporter;

/// One discovered report file with its full text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Base file name, used as the report key
    pub filename: String,
    /// Where the file was found
    pub path: PathBuf,
    pub text: String,
}

impl RawRecord {
    #[must_use]
    pub fn new(
        filename: impl Into<String>,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Identity of the tool whose reports are being added
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub name: &'static str,
    pub anchor: &'static str,
    pub href: &'static str,
    pub info: &'static str,
}

#[derive(Error, Debug)]
pub enum DiscoveryError {
    #[error("Input not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid search pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Supplies report files
pub trait ReportDiscovery {
    /// Find all reports matching a file name pattern
    ///
    /// # Errors
    ///
    /// Returns `DiscoveryError` if an input is missing, unreadable, or the
    /// pattern is invalid.
    fn find_reports(&self, pattern: &str) -> Result<Vec<RawRecord>, DiscoveryError>;
}

/// Receives everything a module contributes to the final report
pub trait ReportHost {
    /// Record provenance for one parsed file
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the host cannot record the source.
    fn register_data_source(
        &mut self,
        module: &ModuleInfo,
        record: &RawRecord,
    ) -> Result<(), HostError>;

    /// Persist aggregated parsed data under the given name
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the data cannot be written.
    fn write_data_file(&mut self, data: &serde_json::Value, name: &str) -> Result<(), HostError>;

    /// Add columns to the general statistics table
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the table cannot be written.
    fn add_general_stats(&mut self, table: &GeneralStatsTable) -> Result<(), HostError>;

    /// Add a report section with its plot
    ///
    /// # Errors
    ///
    /// Returns `HostError` if the section cannot be written.
    fn add_section(&mut self, module: &ModuleInfo, section: &Section) -> Result<(), HostError>;
}

/// Reports fatal configuration errors
pub trait ErrorReporter {
    fn log_error(&self, message: &str);

    /// Terminate the run with the given status
    fn exit_process(&self, code: i32) -> !;
}
