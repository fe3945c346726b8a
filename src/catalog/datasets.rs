use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use crate::errors::Result;
use crate::prediction::AgeGroup;

/// Label column excluded from the symptom list
const LABEL_COLUMN: &str = "diagnosis";

/// Training CSVs; only their header rows are read
#[derive(Debug, Clone)]
pub struct SymptomDatasets {
    dir: PathBuf,
}

impl SymptomDatasets {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, group: AgeGroup) -> PathBuf {
        self.dir.join(group.dataset_file())
    }

    /// Header symptoms for a group, or `None` when its CSV is absent
    pub fn symptoms_for(&self, group: AgeGroup) -> Result<Option<Vec<String>>> {
        let path = self.path_for(group);
        if !path.exists() {
            return Ok(None);
        }
        read_symptom_header(&path).map(Some)
    }
}

fn read_symptom_header(path: &Path) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let symptoms = reader
        .headers()?
        .iter()
        .filter(|col| !col.eq_ignore_ascii_case(LABEL_COLUMN))
        .map(str::to_string)
        .collect();
    Ok(symptoms)
}
