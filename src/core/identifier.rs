use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Marker for graphs built by seqwish
const SEQWISH_MARKER: &str = "seqwish.og";

/// Marker for graphs smoothed by smoothxg
const SMOOTH_MARKER: &str = "smooth";

/// Marker for per-sample consensus graphs (e.g. `consensus@10__y_0_1000000`)
const CONSENSUS_MARKER: &str = "consensus@";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown file name: File name must either contain seqwish, smooth or consensus@! (got '{filename}')")]
pub struct NamingConventionError {
    pub filename: String,
}

/// Short, stable display key for a report, derived from its file name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct GroupIdentifier(String);

impl GroupIdentifier {
    /// Derive the identifier from a report file name.
    ///
    /// # Examples
    ///
    /// ```
    /// use odgi_report::core::GroupIdentifier;
    ///
    /// let id = GroupIdentifier::from_filename("x.consensus@1.tsv").unwrap();
    /// assert_eq!(id.as_str(), "consensus@1");
    /// assert!(GroupIdentifier::from_filename("random_name.tsv").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `NamingConventionError` if the name contains neither `seqwish.og`,
    /// `smooth`, nor a `.`-separated segment with `consensus@`.
    pub fn from_filename(filename: &str) -> Result<Self, NamingConventionError> {
        if filename.contains(SEQWISH_MARKER) {
            return Ok(Self("seqwish".to_string()));
        }
        if filename.contains(SMOOTH_MARKER) {
            return Ok(Self("smooth".to_string()));
        }

        filename
            .split('.')
            .find(|segment| segment.contains(CONSENSUS_MARKER))
            .map(|segment| Self(segment.to_string()))
            .ok_or_else(|| NamingConventionError {
                filename: filename.to_string(),
            })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<GroupIdentifier> for String {
    fn from(id: GroupIdentifier) -> Self {
        id.0
    }
}
