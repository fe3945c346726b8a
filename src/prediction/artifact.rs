//! Classifier artifacts for one age group
//!
//! Three JSON files live in the models directory per group:
//! - `<group>_model.json`: the random forest
//! - `<group>_model_encoder.json`: `{ "classes": [...] }`, index → disease
//! - `symptom_order_<group>.json`: training column order

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::age_group::AgeGroup;
use super::forest::RandomForest;
use super::ranking::{RankedClass, rank};
use super::vectorize::vectorize_symptoms;
use crate::errors::{Result, SymptomaticError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelEncoder {
    pub classes: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ModelArtifacts {
    pub group: AgeGroup,
    pub forest: RandomForest,
    pub encoder: LabelEncoder,
    pub symptom_order: Vec<String>,
}

/// Paths of the three artifact files for a group
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub model: PathBuf,
    pub encoder: PathBuf,
    pub symptom_order: PathBuf,
}

impl ArtifactPaths {
    pub fn new(models_dir: &Path, group: AgeGroup) -> Self {
        let stem = group.file_stem();
        Self {
            model: models_dir.join(format!("{}_model.json", stem)),
            encoder: models_dir.join(format!("{}_model_encoder.json", stem)),
            symptom_order: models_dir.join(format!("symptom_order_{}.json", stem)),
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        SymptomaticError::model_load(format!("Failed to read {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&content).map_err(|e| {
        SymptomaticError::model_load(format!("Failed to parse {}: {}", path.display(), e))
    })
}

impl ModelArtifacts {
    /// Load and cross-check model, encoder and symptom order
    pub fn load(models_dir: &Path, group: AgeGroup) -> Result<Self> {
        let paths = ArtifactPaths::new(models_dir, group);

        if !paths.model.exists() {
            return Err(SymptomaticError::model_load(format!(
                "Model not found: {}",
                paths.model.display()
            )));
        }
        if !paths.encoder.exists() {
            return Err(SymptomaticError::model_load(format!(
                "Encoder not found: {}",
                paths.encoder.display()
            )));
        }
        if !paths.symptom_order.exists() {
            return Err(SymptomaticError::model_load(format!(
                "Symptom order file not found: {}",
                paths.symptom_order.display()
            )));
        }

        let forest: RandomForest = read_json(&paths.model)?;
        let encoder: LabelEncoder = read_json(&paths.encoder)?;
        let symptom_order: Vec<String> = read_json(&paths.symptom_order)?;

        let artifacts = Self {
            group,
            forest,
            encoder,
            symptom_order,
        };
        artifacts
            .validate()
            .map_err(|e| SymptomaticError::model_load(format!("{}: {}", paths.model.display(), e)))?;

        debug!(
            "Loaded {} model: {} trees, {} symptoms, {} diseases",
            group,
            artifacts.forest.trees.len(),
            artifacts.symptom_order.len(),
            artifacts.encoder.classes.len()
        );
        Ok(artifacts)
    }

    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.forest.n_features != self.symptom_order.len() {
            return Err(format!(
                "model expects {} features but symptom order lists {}",
                self.forest.n_features,
                self.symptom_order.len()
            ));
        }
        if self.forest.n_classes != self.encoder.classes.len() {
            return Err(format!(
                "model has {} classes but encoder lists {}",
                self.forest.n_classes,
                self.encoder.classes.len()
            ));
        }
        self.forest.validate()
    }

    /// Vectorize, score and rank the submitted symptoms
    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S], top_k: usize) -> Result<Vec<RankedClass>> {
        let x = vectorize_symptoms(symptoms, &self.symptom_order);
        debug!(
            "Scoring {} submitted symptoms against {} model ({} matched)",
            symptoms.len(),
            self.group,
            x.iter().filter(|v| **v > 0.0).count()
        );

        let probs = self.forest.predict_proba(&x)?;
        Ok(rank(&probs, &self.encoder.classes, top_k))
    }
}
