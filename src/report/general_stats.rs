//! General statistics table contribution.
//!
//! One row per report, keyed by its [`GroupIdentifier`], with the four
//! graph-level counts as columns.

use indexmap::IndexMap;
use serde::Serialize;

use crate::core::{
    GeneralStats, GeneralStatsColumn, GroupIdentifier, NamingConventionError, ReportStore,
};

/// Display metadata for one table column
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnHeader {
    #[serde(skip)]
    pub column: GeneralStatsColumn,
    pub key: String,
    pub title: String,
    pub description: String,
    /// Color scale name
    pub scale: String,
}

impl From<GeneralStatsColumn> for ColumnHeader {
    fn from(column: GeneralStatsColumn) -> Self {
        Self {
            column,
            key: column.key().to_string(),
            title: column.key().to_string(),
            description: column.description().to_string(),
            scale: column.scale().to_string(),
        }
    }
}

/// Rows and column headers handed to the host
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneralStatsTable {
    pub headers: Vec<ColumnHeader>,
    pub rows: IndexMap<String, GeneralStats>,
}

/// Column headers in display order
#[must_use]
pub fn general_stats_headers() -> Vec<ColumnHeader> {
    GeneralStatsColumn::ALL
        .iter()
        .copied()
        .map(ColumnHeader::from)
        .collect()
}

/// One row per report keyed by group identifier.
///
/// Reports sharing an identifier collapse into one row holding the values of
/// the last one in store order.
///
/// # Errors
///
/// Returns `NamingConventionError` for the first file name that matches no
/// known naming convention.
pub fn general_stats_rows(
    store: &ReportStore,
) -> Result<IndexMap<String, GeneralStats>, NamingConventionError> {
    let mut rows = IndexMap::new();
    for (filename, report) in store.iter() {
        let id = GroupIdentifier::from_filename(filename)?;
        rows.insert(id.into(), report.general_stats);
    }
    Ok(rows)
}

/// Build the full table contribution
///
/// # Errors
///
/// Returns `NamingConventionError` if a file name matches no known convention.
pub fn general_stats_table(
    store: &ReportStore,
) -> Result<GeneralStatsTable, NamingConventionError> {
    Ok(GeneralStatsTable {
        headers: general_stats_headers(),
        rows: general_stats_rows(store)?,
    })
}
