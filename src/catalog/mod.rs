//! Static lookup tables served alongside predictions
//!
//! Remedies and descriptions are loaded once at startup. Recovery estimates
//! are re-read on every request so the file can be edited in place.

pub mod datasets;
pub mod descriptions;
pub mod remedies;

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::DataConfig;
use crate::errors::{Result, SymptomaticError};

pub use datasets::SymptomDatasets;
pub use descriptions::{DiseaseDescriptions, NO_DESCRIPTION};
pub use remedies::{RemedyBook, RemedyEntry};

#[derive(Debug, Clone)]
pub struct Catalog {
    pub remedies: RemedyBook,
    pub descriptions: DiseaseDescriptions,
    pub datasets: SymptomDatasets,
    recovery_file: PathBuf,
}

impl Catalog {
    pub fn new(
        remedies: RemedyBook,
        descriptions: DiseaseDescriptions,
        datasets: SymptomDatasets,
        recovery_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            remedies,
            descriptions,
            datasets,
            recovery_file: recovery_file.into(),
        }
    }

    /// Load tables from the configured paths
    ///
    /// A missing table file leaves that table empty; a malformed one is an error.
    pub fn load(config: &DataConfig) -> Result<Self> {
        let remedies = if config.remedies_file.exists() {
            RemedyBook::load(&config.remedies_file)?
        } else {
            warn!(
                "Remedies table not found at {}, remedies will be empty",
                config.remedies_file.display()
            );
            RemedyBook::default()
        };

        let descriptions = if config.descriptions_file.exists() {
            DiseaseDescriptions::load(&config.descriptions_file)?
        } else {
            warn!(
                "Disease descriptions not found at {}, using the default text",
                config.descriptions_file.display()
            );
            DiseaseDescriptions::default()
        };

        info!(
            "Catalog loaded: {} remedy entries, {} descriptions",
            remedies.disease_count(),
            descriptions.len()
        );

        Ok(Self::new(
            remedies,
            descriptions,
            SymptomDatasets::new(&config.datasets_dir),
            &config.recovery_file,
        ))
    }

    pub fn recovery_file(&self) -> &Path {
        &self.recovery_file
    }

    /// Recovery estimates, read fresh from disk
    pub async fn recovery_estimates(&self) -> Result<serde_json::Value> {
        let content = tokio::fs::read_to_string(&self.recovery_file)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::NotFound => SymptomaticError::not_found(format!(
                    "Recovery estimates not found: {}",
                    self.recovery_file.display()
                )),
                _ => SymptomaticError::file_operation(format!(
                    "Failed to read recovery estimates {}: {}",
                    self.recovery_file.display(),
                    e
                )),
            })?;
        serde_json::from_str(&content).map_err(|e| {
            SymptomaticError::file_operation(format!(
                "Invalid recovery estimates {}: {}",
                self.recovery_file.display(),
                e
            ))
        })
    }
}
