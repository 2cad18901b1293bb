use std::path::{Path, PathBuf};

use globset::{Glob, GlobMatcher};
use tracing::debug;

use crate::host::{DiscoveryError, RawRecord, ReportDiscovery};
use crate::parsing::odgi_stats::read_stats_file;

/// Finds reports among files and directories on disk.
///
/// Files given directly are always taken. Directories are walked recursively,
/// in sorted order, and only files whose name matches the search pattern are
/// kept. A trailing `.gz` is ignored when matching, and such files are
/// decompressed on read.
#[derive(Debug, Clone)]
pub struct FilesystemDiscovery {
    inputs: Vec<PathBuf>,
}

impl FilesystemDiscovery {
    #[must_use]
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self { inputs }
    }

    fn collect_paths(
        &self,
        matcher: &GlobMatcher,
        found: &mut Vec<PathBuf>,
    ) -> Result<(), DiscoveryError> {
        for input in &self.inputs {
            if input.is_dir() {
                walk_dir(input, matcher, found)?;
            } else if input.is_file() {
                found.push(input.clone());
            } else {
                return Err(DiscoveryError::NotFound(input.clone()));
            }
        }
        Ok(())
    }
}

impl ReportDiscovery for FilesystemDiscovery {
    fn find_reports(&self, pattern: &str) -> Result<Vec<RawRecord>, DiscoveryError> {
        let matcher = Glob::new(pattern)
            .map_err(|source| DiscoveryError::Pattern {
                pattern: pattern.to_string(),
                source,
            })?
            .compile_matcher();

        let mut paths = Vec::new();
        self.collect_paths(&matcher, &mut paths)?;

        paths
            .into_iter()
            .map(|path| {
                let text = read_stats_file(&path).map_err(|source| DiscoveryError::Read {
                    path: path.clone(),
                    source,
                })?;
                debug!(path = %path.display(), "Found report");
                Ok(RawRecord::new(file_name(&path), path, text))
            })
            .collect()
    }
}

fn walk_dir(
    dir: &Path,
    matcher: &GlobMatcher,
    found: &mut Vec<PathBuf>,
) -> Result<(), DiscoveryError> {
    let read_err = |source| DiscoveryError::Read {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(read_err)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()
        .map_err(read_err)?;
    entries.sort();

    for path in entries {
        if path.is_dir() {
            walk_dir(&path, matcher, found)?;
        } else if matches_pattern(&path, matcher) {
            found.push(path);
        }
    }
    Ok(())
}

fn matches_pattern(path: &Path, matcher: &GlobMatcher) -> bool {
    let name = file_name(path);
    let name = name
        .strip_suffix(".gz")
        .or_else(|| name.strip_suffix(".bgz"))
        .unwrap_or(name.as_str());
    matcher.is_match(name)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().to_string())
}
