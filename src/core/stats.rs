use serde::{Deserialize, Serialize};

/// Graph-level counts from the first section of an odgi stats report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeneralStats {
    /// Total sequence length of the graph
    pub length: f64,
    pub nodes: f64,
    pub edges: f64,
    pub paths: f64,
}

impl GeneralStats {
    /// Value of one summary-table column
    #[must_use]
    pub fn value(&self, column: GeneralStatsColumn) -> f64 {
        match column {
            GeneralStatsColumn::Length => self.length,
            GeneralStatsColumn::Nodes => self.nodes,
            GeneralStatsColumn::Edges => self.edges,
            GeneralStatsColumn::Paths => self.paths,
        }
    }
}

/// Columns contributed to the general statistics table, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeneralStatsColumn {
    Length,
    Nodes,
    Edges,
    Paths,
}

impl GeneralStatsColumn {
    pub const ALL: [Self; 4] = [Self::Length, Self::Nodes, Self::Edges, Self::Paths];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Length => "Length",
            Self::Nodes => "Nodes",
            Self::Edges => "Edges",
            Self::Paths => "Paths",
        }
    }

    #[must_use]
    pub fn description(self) -> &'static str {
        match self {
            Self::Length => "Graph length",
            Self::Nodes => "Number of nodes in the graph",
            Self::Edges => "Number of edges in the graph",
            Self::Paths => "Number of paths through the graph",
        }
    }

    /// Color scale name understood by the table renderer
    #[must_use]
    pub fn scale(self) -> &'static str {
        match self {
            Self::Length => "BuPu",
            Self::Nodes => "OrRd",
            Self::Edges => "PuBu",
            Self::Paths => "Greens",
        }
    }
}

/// Mean link length, from the `#mean_links_length` section.
///
/// Only the two charted values are numeric; other columns are kept as written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkStats {
    /// Path label; odgi reports a single `all_paths` aggregate row
    pub path: String,
    pub in_node_space: f64,
    pub in_nucleotide_space: f64,
    pub num_links_considered: String,
}

/// Sum of path node distances, from the `#sum_of_path_node_distances` section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceStats {
    pub path: String,
    pub in_node_space: f64,
    pub in_nucleotide_space: f64,
    pub nodes: String,
    pub nucleotides: String,
    pub num_penalties: String,
    pub num_penalties_different_orientation: String,
}

/// Everything extracted from one odgi stats report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileReport {
    pub general_stats: GeneralStats,
    pub mean_links_length: LinkStats,
    pub sum_of_path_nodes_distances: DistanceStats,
}
