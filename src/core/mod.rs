//! Core data types for odgi stats reports.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`GeneralStats`], [`LinkStats`], [`DistanceStats`]: the three sections of one report
//! - [`FileReport`]: everything extracted from a single report file
//! - [`ReportStore`]: all parsed reports keyed by file name, in discovery order
//! - [`GroupIdentifier`]: the short display key derived from a file name
//!
//! ## Group Identifiers
//!
//! Report files come from three pipeline stages, told apart by their names:
//!
//! | Stage     | File name contains | Identifier      |
//! |-----------|--------------------|-----------------|
//! | seqwish   | `seqwish.og`       | `seqwish`       |
//! | smoothxg  | `smooth`           | `smooth`        |
//! | consensus | `consensus@N`      | `consensus@N`   |

pub mod identifier;
pub mod stats;
pub mod store;

pub use identifier::{GroupIdentifier, NamingConventionError};
pub use stats::{DistanceStats, FileReport, GeneralStats, GeneralStatsColumn, LinkStats};
pub use store::ReportStore;
