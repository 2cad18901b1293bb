use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::host::{HostError, ModuleInfo, RawRecord, ReportHost};
use crate::report::general_stats::GeneralStatsTable;
use crate::report::Section;

/// File the general statistics table is written to
pub const GENERAL_STATS_FILE: &str = "multiqc_general_stats.txt";

/// File the data source listing is written to
pub const SOURCES_FILE: &str = "multiqc_sources.txt";

/// Writes report contributions as JSON and TSV files in one directory.
///
/// Call [`OutputDirHost::finish`] after the run to write the data source listing.
#[derive(Debug)]
pub struct OutputDirHost {
    dir: PathBuf,
    /// (module, source name, path) in registration order
    sources: Vec<(String, String, String)>,
}

impl OutputDirHost {
    /// Create the host, creating the output directory if needed
    ///
    /// # Errors
    ///
    /// Returns `HostError::Io` if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, HostError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            sources: Vec::new(),
        })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the data source listing
    ///
    /// # Errors
    ///
    /// Returns `HostError::Io` if the file cannot be written.
    pub fn finish(&self) -> Result<(), HostError> {
        let mut out = String::from("Module\tSection\tSample Name\tSource\n");
        for (module, name, path) in &self.sources {
            let _ = writeln!(out, "{module}\tall_sections\t{name}\t{path}");
        }
        self.write(SOURCES_FILE, &out)
    }

    fn write(&self, name: &str, contents: &str) -> Result<(), HostError> {
        let path = self.dir.join(name);
        std::fs::write(&path, contents)?;
        debug!(path = %path.display(), "Wrote output file");
        Ok(())
    }
}

impl ReportHost for OutputDirHost {
    fn register_data_source(
        &mut self,
        module: &ModuleInfo,
        record: &RawRecord,
    ) -> Result<(), HostError> {
        self.sources.push((
            module.name.to_string(),
            record.filename.clone(),
            record.path.display().to_string(),
        ));
        Ok(())
    }

    fn write_data_file(&mut self, data: &serde_json::Value, name: &str) -> Result<(), HostError> {
        let json = serde_json::to_string_pretty(data)?;
        self.write(&format!("{name}.json"), &json)
    }

    fn add_general_stats(&mut self, table: &GeneralStatsTable) -> Result<(), HostError> {
        let mut out = String::from("Sample");
        for header in &table.headers {
            out.push('\t');
            out.push_str(&header.title);
        }
        out.push('\n');

        for (sample, stats) in table.rows.iter() {
            out.push_str(sample);
            for header in &table.headers {
                let _ = write!(out, "\t{}", stats.value(header.column));
            }
            out.push('\n');
        }
        self.write(GENERAL_STATS_FILE, &out)
    }

    fn add_section(&mut self, module: &ModuleInfo, section: &Section) -> Result<(), HostError> {
        let output = serde_json::json!({
            "module": module,
            "generated_at": chrono::Utc::now().to_rfc3339(),
            "section": section,
        });
        let name = format!("{}.json", section.anchor);
        self.write(&name, &serde_json::to_string_pretty(&output)?)?;
        info!(section = %section.name, file = %name, "Added report section");
        Ok(())
    }
}
