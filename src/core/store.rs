use indexmap::IndexMap;
use serde::Serialize;

use crate::core::stats::FileReport;

/// All parsed reports of one run, keyed by file name in discovery order
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ReportStore {
    reports: IndexMap<String, FileReport>,
}

impl ReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a report; a repeated file name replaces the earlier report in place
    pub fn insert(&mut self, filename: impl Into<String>, report: FileReport) {
        self.reports.insert(filename.into(), report);
    }

    #[must_use]
    pub fn get(&self, filename: &str) -> Option<&FileReport> {
        self.reports.get(filename)
    }

    pub fn filenames(&self) -> impl Iterator<Item = &str> {
        self.reports.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FileReport)> {
        self.reports.iter().map(|(name, report)| (name.as_str(), report))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::tests::report_with;

    #[test]
    fn test_repeated_filename_keeps_position_and_last_report() {
        let mut store = ReportStore::new();
        store.insert("a.seqwish.og.stats", report_with(1.0, 0.0, 0.0));
        store.insert("b.smooth.og.stats", report_with(2.0, 0.0, 0.0));
        store.insert("a.seqwish.og.stats", report_with(3.0, 0.0, 0.0));

        assert_eq!(store.len(), 2);
        assert_eq!(
            store.filenames().collect::<Vec<_>>(),
            vec!["a.seqwish.og.stats", "b.smooth.og.stats"]
        );
        let report = store.get("a.seqwish.og.stats").unwrap();
        assert!((report.general_stats.length - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serializes_in_discovery_order() {
        let mut store = ReportStore::new();
        store.insert("z.smooth.og.stats", report_with(1.0, 0.0, 0.0));
        store.insert("a.seqwish.og.stats", report_with(2.0, 0.0, 0.0));

        let json = serde_json::to_string(&store).unwrap();
        assert!(json.find("z.smooth").unwrap() < json.find("a.seqwish").unwrap());
    }
}
