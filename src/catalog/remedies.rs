use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Result, SymptomaticError};
use crate::prediction::{AgeGroup, Severity};

/// Remedies and advice for one (age group, disease, severity) cell
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemedyEntry {
    #[serde(default)]
    pub remedies: Vec<String>,
    #[serde(default)]
    pub suggestion: String,
}

/// `{ "<AgeGroup>": { "<Disease>": { "<severity>": RemedyEntry } } }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemedyBook {
    groups: HashMap<String, HashMap<String, HashMap<String, RemedyEntry>>>,
}

impl RemedyBook {
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| SymptomaticError::serialization(format!("Invalid remedies table: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SymptomaticError::file_operation(format!(
                "Failed to read remedies table {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    /// Missing levels yield an empty entry
    pub fn lookup(&self, group: AgeGroup, disease: &str, severity: Severity) -> RemedyEntry {
        self.groups
            .get(group.as_ref())
            .and_then(|diseases| diseases.get(disease))
            .and_then(|tiers| tiers.get(severity.as_ref()))
            .cloned()
            .unwrap_or_default()
    }

    pub fn disease_count(&self) -> usize {
        self.groups.values().map(|d| d.len()).sum()
    }
}
