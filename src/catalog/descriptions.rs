use std::collections::HashMap;
use std::path::Path;

use crate::errors::{Result, SymptomaticError};

pub const NO_DESCRIPTION: &str = "No description found.";

/// Disease name → human-readable description
#[derive(Debug, Clone, Default)]
pub struct DiseaseDescriptions {
    entries: HashMap<String, String>,
}

impl DiseaseDescriptions {
    pub fn from_json(content: &str) -> Result<Self> {
        let entries = serde_json::from_str(content).map_err(|e| {
            SymptomaticError::serialization(format!("Invalid disease descriptions: {}", e))
        })?;
        Ok(Self { entries })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SymptomaticError::file_operation(format!(
                "Failed to read disease descriptions {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn describe(&self, disease: &str) -> &str {
        self.entries
            .get(disease)
            .map(String::as_str)
            .unwrap_or(NO_DESCRIPTION)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
