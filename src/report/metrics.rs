//! Odgi metrics line chart.
//!
//! Four series, each keyed by [`GroupIdentifier`]:
//!
//! | Series                     | Source                                             |
//! |----------------------------|----------------------------------------------------|
//! | `in_node_space_mean`       | mean links length, node space                      |
//! | `in_nucleotide_space_mean` | mean links length, nucleotide space                |
//! | `in_node_space_sum`        | sum of path node distances, node space             |
//! | `in_nucleotide_space_sum`  | sum of path node distances, nucleotide space       |
//!
//! Reports are visited in [`chart_order`], which sets the default category
//! order of the rendered chart.

use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::core::{FileReport, GroupIdentifier, NamingConventionError, ReportStore};

pub const PLOT_ID: &str = "odgi_metrics_plot";
pub const PLOT_TITLE: &str = "Odgi: Odgi metrics";

/// A metric plotted as one chart series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    InNodeSpaceMean,
    InNucleotideSpaceMean,
    InNodeSpaceSum,
    InNucleotideSpaceSum,
}

impl Metric {
    pub const ALL: [Self; 4] = [
        Self::InNodeSpaceMean,
        Self::InNucleotideSpaceMean,
        Self::InNodeSpaceSum,
        Self::InNucleotideSpaceSum,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::InNodeSpaceMean => "in_node_space_mean",
            Self::InNucleotideSpaceMean => "in_nucleotide_space_mean",
            Self::InNodeSpaceSum => "in_node_space_sum",
            Self::InNucleotideSpaceSum => "in_nucleotide_space_sum",
        }
    }

    #[must_use]
    pub fn value(self, report: &FileReport) -> f64 {
        match self {
            Self::InNodeSpaceMean => report.mean_links_length.in_node_space,
            Self::InNucleotideSpaceMean => report.mean_links_length.in_nucleotide_space,
            Self::InNodeSpaceSum => report.sum_of_path_nodes_distances.in_node_space,
            Self::InNucleotideSpaceSum => report.sum_of_path_nodes_distances.in_nucleotide_space,
        }
    }
}

/// One chart series: group identifier -> value
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    pub metric: Metric,
    pub values: IndexMap<String, f64>,
}

impl NamedSeries {
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.metric.name()
    }
}

/// Line chart options understood by the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinePlotConfig {
    pub id: String,
    pub title: String,
    /// Treat x values as categories
    pub categories: bool,
    pub y_decimals: bool,
    /// Offer a linear/log10 toggle
    pub logswitch: bool,
}

impl Default for LinePlotConfig {
    fn default() -> Self {
        Self {
            id: PLOT_ID.to_string(),
            title: PLOT_TITLE.to_string(),
            categories: true,
            y_decimals: false,
            logswitch: true,
        }
    }
}

/// Line chart with its series
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinePlot {
    pub config: LinePlotConfig,
    #[serde(serialize_with = "serialize_series")]
    pub data: Vec<NamedSeries>,
}

impl LinePlot {
    #[must_use]
    pub fn series(&self, metric: Metric) -> Option<&IndexMap<String, f64>> {
        self.data
            .iter()
            .find(|s| s.metric == metric)
            .map(|s| &s.values)
    }
}

#[allow(clippy::ptr_arg)] // Signature required by serialize_with
fn serialize_series<S: Serializer>(
    series: &Vec<NamedSeries>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(series.len()))?;
    for s in series {
        map.serialize_entry(s.name(), &s.values)?;
    }
    map.end()
}

/// Order in which reports are charted.
///
/// Names are sorted, then the two largest are moved to the front (keeping
/// their relative order) and the rest follow in sorted order.
///
/// ```
/// use odgi_report::report::metrics::chart_order;
///
/// let order = chart_order(["a.seqwish.og", "b.smooth", "c.consensus@1"]);
/// assert_eq!(order, vec!["b.smooth", "c.consensus@1", "a.seqwish.og"]);
/// ```
#[must_use]
pub fn chart_order<'a>(filenames: impl IntoIterator<Item = &'a str>) -> Vec<&'a str> {
    in_chart_order(filenames.into_iter().collect(), |&name| name)
}

fn in_chart_order<T>(mut items: Vec<T>, name: impl Fn(&T) -> &str) -> Vec<T> {
    items.sort_by(|a, b| name(a).cmp(name(b)));

    let mut ordered = items.split_off(items.len().saturating_sub(2));
    ordered.append(&mut items);
    ordered
}

/// Build the four metric series from all reports.
///
/// Reports sharing an identifier collapse into one point holding the values
/// of the last one in chart order.
///
/// # Errors
///
/// Returns `NamingConventionError` for the first file name that matches no
/// known naming convention.
pub fn metric_series(store: &ReportStore) -> Result<Vec<NamedSeries>, NamingConventionError> {
    let mut series: Vec<NamedSeries> = Metric::ALL
        .iter()
        .map(|&metric| NamedSeries {
            metric,
            values: IndexMap::new(),
        })
        .collect();

    let reports: Vec<(&str, &FileReport)> = store.iter().collect();
    for (filename, report) in in_chart_order(reports, |&(name, _)| name) {
        let id = GroupIdentifier::from_filename(filename)?;
        for s in &mut series {
            s.values.insert(id.to_string(), s.metric.value(report));
        }
    }

    Ok(series)
}

/// Build the metrics line chart
///
/// # Errors
///
/// Returns `NamingConventionError` if a file name matches no known convention.
pub fn metrics_plot(store: &ReportStore) -> Result<LinePlot, NamingConventionError> {
    Ok(LinePlot {
        config: LinePlotConfig::default(),
        data: metric_series(store)?,
    })
}
