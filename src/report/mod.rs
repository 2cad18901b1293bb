//! Turning odgi stats reports into report contributions.
//!
//! [`ReportParser`] drives one run: it asks its [`ReportDiscovery`] for
//! reports, parses every one into the [`ReportStore`], and hands the host a
//! data file, the general statistics table and the odgi metrics section.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odgi_report::host::{FilesystemDiscovery, MemoryHost, TracingErrorReporter};
//! use odgi_report::report::ReportParser;
//! use std::path::PathBuf;
//!
//! let discovery = FilesystemDiscovery::new(vec![PathBuf::from("results/")]);
//! let mut parser = ReportParser::new(discovery, MemoryHost::new(), TracingErrorReporter);
//! parser.run().unwrap();
//!
//! let host = parser.into_host();
//! println!("{} sections", host.sections.len());
//! ```

pub mod general_stats;
pub mod metrics;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::{NamingConventionError, ReportStore};
use crate::host::{
    DiscoveryError, ErrorReporter, HostError, ModuleInfo, RawRecord, ReportDiscovery, ReportHost,
};
use crate::parsing::odgi_stats::{parse_stats_text, FormatError};
use crate::report::metrics::LinePlot;

/// Module identity shown alongside the contributions
pub const ODGI_MODULE: ModuleInfo = ModuleInfo {
    name: "Odgi",
    anchor: "odgi",
    href: "https://github.com/vgteam/odgi",
    info: "is an optimized dynamic graph/genome implementation.",
};

/// File name pattern used to find reports in directories
pub const DEFAULT_SEARCH_PATTERN: &str = "*.stats";

/// Name of the data file holding all parsed reports
pub const DATA_FILE_NAME: &str = "multiqc_odgi_stats";

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("No odgi stats reports found (pattern '{0}')")]
    NoReports(String),

    #[error("Failed to find reports: {0}")]
    Discovery(#[from] DiscoveryError),

    #[error("Malformed odgi stats report '{filename}': {source}")]
    Format {
        filename: String,
        #[source]
        source: FormatError,
    },

    #[error("Failed to write report output: {0}")]
    Host(#[from] HostError),

    #[error("Failed to serialize report data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A titled report section with a plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub name: String,
    pub anchor: String,
    pub description: String,
    pub helptext: String,
    pub plot: LinePlot,
}

/// The odgi metrics section wrapping the metrics chart
#[must_use]
pub fn metrics_section(plot: LinePlot) -> Section {
    Section {
        name: "Odgi metrics".to_string(),
        anchor: "odgi-stats".to_string(),
        description: "The odgi metrics section".to_string(),
        helptext: "odgi metrics generated by the odgi stats module.".to_string(),
        plot,
    }
}

/// Parses odgi stats reports and contributes them to a report host
pub struct ReportParser<D, H, R> {
    discovery: D,
    host: H,
    reporter: R,
    search_pattern: String,
    store: ReportStore,
}

impl<D, H, R> ReportParser<D, H, R>
where
    D: ReportDiscovery,
    H: ReportHost,
    R: ErrorReporter,
{
    pub fn new(discovery: D, host: H, reporter: R) -> Self {
        Self {
            discovery,
            host,
            reporter,
            search_pattern: DEFAULT_SEARCH_PATTERN.to_string(),
            store: ReportStore::new(),
        }
    }

    #[must_use]
    pub fn with_search_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.search_pattern = pattern.into();
        self
    }

    /// Find, parse and contribute all reports.
    ///
    /// A file name outside the known naming conventions is reported through
    /// the [`ErrorReporter`] and ends the process.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::NoReports` if discovery finds nothing,
    /// `ReportError::Format` for the first malformed report, or a discovery,
    /// host or serialization error. No output is contributed for a run that
    /// fails while parsing.
    pub fn run(&mut self) -> Result<(), ReportError> {
        let records = self.parse_reports()?;
        info!("Found {} reports", self.store.len());

        // Nothing reaches the host until every identifier has been derived
        let table = self.or_exit(general_stats::general_stats_table(&self.store));
        let plot = self.or_exit(metrics::metrics_plot(&self.store));
        let data = serde_json::to_value(&self.store)?;

        for record in &records {
            self.host.register_data_source(&ODGI_MODULE, record)?;
        }
        self.host.write_data_file(&data, DATA_FILE_NAME)?;
        self.host.add_general_stats(&table)?;
        self.host.add_section(&ODGI_MODULE, &metrics_section(plot))?;
        Ok(())
    }

    /// Parsed reports keyed by file name
    pub fn store(&self) -> &ReportStore {
        &self.store
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn parse_reports(&mut self) -> Result<Vec<RawRecord>, ReportError> {
        let records = self.discovery.find_reports(&self.search_pattern)?;
        if records.is_empty() {
            return Err(ReportError::NoReports(self.search_pattern.clone()));
        }

        let mut store = ReportStore::new();
        for record in &records {
            let report = parse_stats_text(&record.text).map_err(|source| ReportError::Format {
                filename: record.filename.clone(),
                source,
            })?;
            debug!(file = %record.filename, "Parsed odgi stats report");
            store.insert(record.filename.clone(), report);
        }

        self.store = store;
        Ok(records)
    }

    /// Unknown naming conventions are a usage error: log and exit
    fn or_exit<T>(&self, result: Result<T, NamingConventionError>) -> T {
        match result {
            Ok(value) => value,
            Err(e) => {
                self.reporter.log_error(&e.to_string());
                self.reporter.exit_process(1)
            }
        }
    }
}
