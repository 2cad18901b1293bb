use std::io::Read;
use std::path::Path;

use flate2::read::MultiGzDecoder;
use thiserror::Error;

use crate::core::stats::{DistanceStats, FileReport, GeneralStats, LinkStats};

/// 0-based line holding the general stats row
const GENERAL_STATS_LINE: usize = 1;

/// 0-based line holding the mean links length row
const MEAN_LINKS_LENGTH_LINE: usize = 4;

/// 0-based line holding the sum of path node distances row
const PATH_DISTANCES_LINE: usize = 7;

/// Minimum number of lines a report must have
pub const REQUIRED_LINES: usize = PATH_DISTANCES_LINE + 1;

#[derive(Error, Debug)]
pub enum FormatError {
    #[error("Report has {found} lines, expected at least {required}")]
    TooFewLines { found: usize, required: usize },

    #[error("Line {line} ({section}) has {found} fields, expected {expected}")]
    FieldCount {
        line: usize,
        section: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Invalid number on line {line} ({section}), column {column}: '{value}'")]
    InvalidNumber {
        line: usize,
        section: &'static str,
        column: usize,
        value: String,
    },
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Read a report file into memory, decompressing gzip input
///
/// # Errors
///
/// Returns an IO error if the file cannot be read or decompressed.
pub fn read_stats_file(path: &Path) -> std::io::Result<String> {
    let file = std::fs::File::open(path)?;
    let mut text = String::new();
    if is_gzipped(path) {
        MultiGzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut text)?;
    }
    Ok(text)
}

/// Parse the text of an odgi stats report
///
/// # Errors
///
/// Returns `FormatError::TooFewLines` if the text is shorter than the fixed
/// layout, `FormatError::FieldCount` if a data row has the wrong number of
/// tab-separated fields, or `FormatError::InvalidNumber` if a general stat
/// or a charted link/distance value does not parse. The remaining columns
/// are kept as text.
pub fn parse_stats_text(text: &str) -> Result<FileReport, FormatError> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() < REQUIRED_LINES {
        return Err(FormatError::TooFewLines {
            found: lines.len(),
            required: REQUIRED_LINES,
        });
    }

    let general = Row::split(&lines, GENERAL_STATS_LINE, "general stats", 4)?;
    let links = Row::split(&lines, MEAN_LINKS_LENGTH_LINE, "mean links length", 4)?;
    let distances = Row::split(&lines, PATH_DISTANCES_LINE, "sum of path node distances", 7)?;

    Ok(FileReport {
        general_stats: GeneralStats {
            length: general.number(0)?,
            nodes: general.number(1)?,
            edges: general.number(2)?,
            paths: general.number(3)?,
        },
        mean_links_length: LinkStats {
            path: links.label(0),
            in_node_space: links.number(1)?,
            in_nucleotide_space: links.number(2)?,
            num_links_considered: links.label(3),
        },
        sum_of_path_nodes_distances: DistanceStats {
            path: distances.label(0),
            in_node_space: distances.number(1)?,
            in_nucleotide_space: distances.number(2)?,
            nodes: distances.label(3),
            nucleotides: distances.label(4),
            num_penalties: distances.label(5),
            num_penalties_different_orientation: distances.label(6),
        },
    })
}

/// One tab-separated data row at a fixed position
struct Row<'a> {
    /// 0-based line index
    index: usize,
    section: &'static str,
    fields: Vec<&'a str>,
}

impl<'a> Row<'a> {
    fn split(
        lines: &[&'a str],
        index: usize,
        section: &'static str,
        expected: usize,
    ) -> Result<Self, FormatError> {
        let fields: Vec<&str> = lines[index].split('\t').collect();
        if fields.len() != expected {
            // Line numbers in errors are 1-based for user friendliness
            return Err(FormatError::FieldCount {
                line: index + 1,
                section,
                expected,
                found: fields.len(),
            });
        }
        Ok(Self {
            index,
            section,
            fields,
        })
    }

    fn label(&self, column: usize) -> String {
        self.fields[column].trim().to_string()
    }

    fn number(&self, column: usize) -> Result<f64, FormatError> {
        let raw = self.fields[column].trim();
        raw.parse().map_err(|_| FormatError::InvalidNumber {
            line: self.index + 1,
            section: self.section,
            column: column + 1,
            value: raw.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = "length\tnodes\tedges\tpaths
8778\t168\t243\t35
#mean_links_length
path\tin_node_space\tin_nucleotide_space\tnum_links_considered
all_paths\t9.75053\t497.321\t942
#sum_of_path_node_distances
path\tin_node_space\tin_nucleotide_space\tnodes\tnucleotides\tnum_penalties\tnum_penalties_different_orientation
all_paths\t20.0686\t19.5609\t977\t51365\t90\t0
";

    #[test]
    fn test_parse_stats_text() {
        let report = parse_stats_text(REPORT).unwrap();

        assert_eq!(
            report.general_stats,
            GeneralStats {
                length: 8778.0,
                nodes: 168.0,
                edges: 243.0,
                paths: 35.0,
            }
        );

        let links = &report.mean_links_length;
        assert_eq!(links.path, "all_paths");
        assert!((links.in_node_space - 9.75053).abs() < f64::EPSILON);
        assert!((links.in_nucleotide_space - 497.321).abs() < f64::EPSILON);
        assert_eq!(links.num_links_considered, "942");

        let distances = &report.sum_of_path_nodes_distances;
        assert_eq!(distances.path, "all_paths");
        assert!((distances.in_node_space - 20.0686).abs() < f64::EPSILON);
        assert!((distances.in_nucleotide_space - 19.5609).abs() < f64::EPSILON);
        assert_eq!(distances.nodes, "977");
        assert_eq!(distances.nucleotides, "51365");
        assert_eq!(distances.num_penalties, "90");
        assert_eq!(distances.num_penalties_different_orientation, "0");
    }

    #[test]
    fn test_parse_crlf_and_padded_fields() {
        let text = REPORT
            .replace("20.0686\t", "20.0686 \t")
            .replace('\n', "\r\n");
        let report = parse_stats_text(&text).unwrap();
        assert!((report.sum_of_path_nodes_distances.in_node_space - 20.0686).abs() < f64::EPSILON);
        assert!((report.general_stats.paths - 35.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_header_lines_are_not_validated() {
        let text = REPORT.replace("#mean_links_length", "anything at all");
        assert!(parse_stats_text(&text).is_ok());
    }

    #[test]
    fn test_too_few_lines() {
        let text: String = REPORT.lines().take(7).collect::<Vec<_>>().join("\n");
        match parse_stats_text(&text) {
            Err(FormatError::TooFewLines { found, required }) => {
                assert_eq!(found, 7);
                assert_eq!(required, 8);
            }
            other => panic!("Expected TooFewLines, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(
            parse_stats_text(""),
            Err(FormatError::TooFewLines { found: 0, .. })
        ));
    }

    #[test]
    fn test_wrong_field_count() {
        let text = REPORT.replace("8778\t168\t243\t35", "8778\t168\t243");
        match parse_stats_text(&text) {
            Err(FormatError::FieldCount {
                line,
                expected,
                found,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(expected, 4);
                assert_eq!(found, 3);
            }
            other => panic!("Expected FieldCount, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_general_stat() {
        let text = REPORT.replace("8778\t168", "8778\tmany");
        match parse_stats_text(&text) {
            Err(FormatError::InvalidNumber {
                line,
                column,
                value,
                ..
            }) => {
                assert_eq!(line, 2);
                assert_eq!(column, 2);
                assert_eq!(value, "many");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_non_numeric_charted_distance() {
        let text = REPORT.replace("\t19.5609\t", "\tn/a\t");
        match parse_stats_text(&text) {
            Err(FormatError::InvalidNumber {
                line, column, value, ..
            }) => {
                assert_eq!(line, 8);
                assert_eq!(column, 3);
                assert_eq!(value, "n/a");
            }
            other => panic!("Expected InvalidNumber, got {other:?}"),
        }
    }

    #[test]
    fn test_uncharted_columns_are_kept_as_text() {
        let text = REPORT
            .replace("497.321\t942", "497.321\tNA")
            .replace("51365\t90\t0", "51365\t-\t0");
        let report = parse_stats_text(&text).unwrap();

        assert_eq!(report.mean_links_length.num_links_considered, "NA");
        assert_eq!(report.sum_of_path_nodes_distances.num_penalties, "-");
        assert!((report.mean_links_length.in_nucleotide_space - 497.321).abs() < f64::EPSILON);
        assert!((report.sum_of_path_nodes_distances.in_node_space - 20.0686).abs() < f64::EPSILON);
    }

    #[test]
    fn test_read_gzipped_file() {
        use flate2::write::GzEncoder;
        use flate2::Compression;
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("g.smooth.og.stats.gz");
        let file = std::fs::File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(REPORT.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let report = parse_stats_text(&read_stats_file(&path).unwrap()).unwrap();
        assert!((report.general_stats.nodes - 168.0).abs() < f64::EPSILON);
    }
}
