//! Parsers for odgi stats report files.
//!
//! `odgi stats` writes a small fixed-layout report:
//!
//! ```text
//! length	nodes	edges	paths
//! 8778	168	243	35
//! #mean_links_length
//! path	in_node_space	in_nucleotide_space	num_links_considered
//! all_paths	9.75053	497.321	942
//! #sum_of_path_node_distances
//! path	in_node_space	in_nucleotide_space	nodes	nucleotides	num_penalties	num_penalties_different_orientation
//! all_paths	20.0686	19.5609	977	51365	90	0
//! ```
//!
//! Data rows are read at fixed line positions; header and marker lines are
//! not inspected. Any deviation from this layout is a hard error.
//!
//! ## Example
//!
//! ```rust,no_run
//! use odgi_report::parsing::odgi_stats::{parse_stats_text, read_stats_file};
//! use std::path::Path;
//!
//! // Read a report (plain or gzipped), then parse it
//! let text = read_stats_file(Path::new("graph.seqwish.og.stats.gz")).unwrap();
//! let report = parse_stats_text(&text).unwrap();
//! ```

pub mod odgi_stats;
