//! Prediction service
//!
//! Runs the symptom → diagnosis pipeline for one request and decorates each
//! ranked disease with its description, severity tier, remedies and advice.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::PredictionConfig;
use crate::errors::{Result, SymptomaticError};
use crate::prediction::{
    AgeGroup, ModelArtifacts, ModelRegistry, RankedClass, Severity, SeverityThresholds,
};
use crate::storage::{PredictionLogEntry, SharedPredictionLog};

pub const MISSING_INPUT_MESSAGE: &str = "Age and symptoms are required.";

// ============ Request/Response DTOs ============

/// Body of `POST /predict`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictRequest {
    /// Years; fractional values are accepted
    #[serde(default)]
    pub age: Option<f64>,
    #[serde(default)]
    pub symptoms: Vec<String>,
    /// Logged with the top prediction when present
    #[serde(default)]
    pub patient_name: Option<String>,
}

/// One ranked diagnosis with its metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub disease: String,
    /// Percent, 0..=100
    pub probability: f64,
    pub description: String,
    pub severity: Severity,
    pub age_group: AgeGroup,
    pub remedies: Vec<String>,
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub top_prediction: Option<Prediction>,
    pub other_predictions: Vec<Prediction>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SymptomList {
    pub symptoms: Vec<String>,
}

// ============ Service ============

pub struct PredictionService {
    registry: ModelRegistry,
    catalog: Catalog,
    thresholds: SeverityThresholds,
    top_k: usize,
    log: Option<SharedPredictionLog>,
}

impl PredictionService {
    pub fn new(
        registry: ModelRegistry,
        catalog: Catalog,
        config: &PredictionConfig,
        log: Option<SharedPredictionLog>,
    ) -> Self {
        Self {
            registry,
            catalog,
            thresholds: SeverityThresholds::from_config(config),
            top_k: config.top_k.max(1),
            log,
        }
    }

    pub fn registry(&self) -> &ModelRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn prediction_log(&self) -> Option<&SharedPredictionLog> {
        self.log.as_ref()
    }

    async fn artifacts_for(&self, group: AgeGroup) -> Result<Arc<ModelArtifacts>> {
        if self.registry.is_loaded(group) {
            return self.registry.get(group);
        }
        // 首次加载涉及文件读取，放到阻塞线程池
        let registry = self.registry.clone();
        tokio::task::spawn_blocking(move || registry.get(group))
            .await
            .map_err(|e| SymptomaticError::model_load(format!("Model loader task failed: {}", e)))?
    }

    fn decorate(&self, group: AgeGroup, ranked: RankedClass) -> Prediction {
        let severity = self.thresholds.classify(ranked.probability);
        let remedy = self.catalog.remedies.lookup(group, &ranked.label, severity);
        Prediction {
            description: self.catalog.descriptions.describe(&ranked.label).to_string(),
            disease: ranked.label,
            probability: ranked.probability,
            severity,
            age_group: group,
            remedies: remedy.remedies,
            suggestion: remedy.suggestion,
        }
    }

    /// Rank diagnoses for an age and symptom set
    pub async fn predict(&self, request: PredictRequest) -> Result<PredictionReport> {
        let age = match request.age {
            Some(age) if !request.symptoms.is_empty() => age,
            _ => return Err(SymptomaticError::validation(MISSING_INPUT_MESSAGE)),
        };
        if !age.is_finite() || age < 0.0 {
            return Err(SymptomaticError::validation(format!(
                "Age must not be negative, got {}",
                age
            )));
        }

        let group = AgeGroup::from_years(age);
        let artifacts = self.artifacts_for(group).await?;
        let ranked = artifacts.predict(&request.symptoms, self.top_k)?;

        let mut predictions = ranked.into_iter().map(|r| self.decorate(group, r));
        let top_prediction = predictions.next();
        let other_predictions: Vec<Prediction> = predictions.collect();

        if let Some(top) = &top_prediction {
            debug!(
                "{} prediction: {} ({:.1}%, {})",
                group, top.disease, top.probability, top.severity
            );
            // The log column is an integer age
            let logged_age = age.floor() as i32;
            self.record(request.patient_name.as_deref(), logged_age, top).await;
        }

        Ok(PredictionReport {
            top_prediction,
            other_predictions,
        })
    }

    /// Log the top prediction; failures never fail the request
    async fn record(&self, patient_name: Option<&str>, age: i32, top: &Prediction) {
        let Some(log) = &self.log else {
            return;
        };
        let Some(name) = patient_name.map(str::trim).filter(|n| !n.is_empty()) else {
            return;
        };

        let entry = PredictionLogEntry {
            patient_name: name.to_string(),
            age,
            disease: top.disease.clone(),
            severity: top.severity,
            predicted_at: Utc::now(),
        };
        match log.log_prediction(entry).await {
            Ok(()) => info!("Prediction logged for patient '{}'", name),
            Err(e) => warn!("Failed to log prediction for '{}': {}", name, e),
        }
    }

    /// Selectable symptoms for an age
    ///
    /// Reads the group's dataset header; without a dataset, falls back to the
    /// model's symptom order, and to an empty list if that is unavailable too.
    pub async fn symptoms_for_age(&self, age: i32) -> Result<SymptomList> {
        let group = AgeGroup::from_age(age);

        let datasets = self.catalog.datasets.clone();
        let header = tokio::task::spawn_blocking(move || datasets.symptoms_for(group))
            .await
            .map_err(|e| {
                SymptomaticError::file_operation(format!("Dataset reader task failed: {}", e))
            })??;
        if let Some(symptoms) = header {
            return Ok(SymptomList { symptoms });
        }

        match self.artifacts_for(group).await {
            Ok(artifacts) => Ok(SymptomList {
                symptoms: artifacts.symptom_order.clone(),
            }),
            Err(e) => {
                debug!("No symptom source for {}: {}", group, e);
                Ok(SymptomList {
                    symptoms: Vec::new(),
                })
            }
        }
    }

    pub async fn recovery_estimates(&self) -> Result<serde_json::Value> {
        self.catalog.recovery_estimates().await
    }
}
