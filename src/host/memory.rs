use crate::host::{HostError, ModuleInfo, RawRecord, ReportHost};
use crate::report::general_stats::GeneralStatsTable;
use crate::report::Section;

/// A provenance entry recorded by [`MemoryHost`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSource {
    pub module: String,
    pub filename: String,
    pub path: String,
}

/// Keeps every contribution in memory
#[derive(Debug, Default)]
pub struct MemoryHost {
    pub sources: Vec<DataSource>,
    pub data_files: Vec<(String, serde_json::Value)>,
    pub general_stats: Vec<GeneralStatsTable>,
    pub sections: Vec<Section>,
}

impl MemoryHost {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a data file by name
    #[must_use]
    pub fn data_file(&self, name: &str) -> Option<&serde_json::Value> {
        self.data_files
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, data)| data)
    }
}

impl ReportHost for MemoryHost {
    fn register_data_source(
        &mut self,
        module: &ModuleInfo,
        record: &RawRecord,
    ) -> Result<(), HostError> {
        self.sources.push(DataSource {
            module: module.name.to_string(),
            filename: record.filename.clone(),
            path: record.path.display().to_string(),
        });
        Ok(())
    }

    fn write_data_file(&mut self, data: &serde_json::Value, name: &str) -> Result<(), HostError> {
        self.data_files.push((name.to_string(), data.clone()));
        Ok(())
    }

    fn add_general_stats(&mut self, table: &GeneralStatsTable) -> Result<(), HostError> {
        self.general_stats.push(table.clone());
        Ok(())
    }

    fn add_section(&mut self, _module: &ModuleInfo, section: &Section) -> Result<(), HostError> {
        self.sections.push(section.clone());
        Ok(())
    }
}
