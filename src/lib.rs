//! # odgi-report
//!
//! A library for turning `odgi stats` reports into report contributions: a
//! general statistics table and a line chart of graph metrics.
//!
//! Pangenome graph pipelines run `odgi stats` on the graph after each stage
//! (seqwish induction, smoothxg smoothing, consensus construction). Each run
//! writes a small fixed-layout text report. `odgi-report` parses those reports,
//! groups them by pipeline stage, and hands the results to a report host.
//!
//! ## Features
//!
//! - **Fixed-layout parsing**: Reads general stats, mean link length, and path
//!   node distances from their known line positions
//! - **Stage grouping**: Derives `seqwish`, `smooth` or `consensus@N` keys from file names
//! - **Summary table**: Length, nodes, edges and paths per stage
//! - **Metrics chart**: Four series in node and nucleotide space
//! - **Pluggable hosts**: Discovery and output are traits; filesystem, output
//!   directory, and in-memory implementations are included
//!
//! ## Example
//!
//! ```rust
//! use odgi_report::parsing::odgi_stats::parse_stats_text;
//! use odgi_report::GroupIdentifier;
//!
//! let text = "length\tnodes\tedges\tpaths\n8778\t168\t243\t35\n#\n-\n\
//!             all_paths\t9.75053\t497.321\t942\n#\n-\n\
//!             all_paths\t20.0686\t19.5609\t977\t51365\t90\t0\n";
//! let report = parse_stats_text(text).unwrap();
//! assert_eq!(report.general_stats.nodes, 168.0);
//!
//! let id = GroupIdentifier::from_filename("graph.seqwish.og.stats").unwrap();
//! assert_eq!(id.as_str(), "seqwish");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Report data types, the report store, and group identifiers
//! - [`parsing`]: Parser for the odgi stats text format
//! - [`report`]: Run orchestration, summary table and metrics chart shaping
//! - [`host`]: Discovery, output and error reporting collaborators
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod host;
pub mod parsing;
pub mod report;

// Re-export commonly used types for convenience
pub use crate::core::{FileReport, GroupIdentifier, ReportStore};
pub use report::{ReportError, ReportParser};
