//! Shared fixtures: a temp data directory with one small forest per group
//!
//! Adult and Elder share a single tree over `[fever, cough, headache]`:
//! - fever                → Flu 90%, Cold 10%
//! - headache, no fever   → Migraine 80%, Cold 20%
//! - neither              → Flu 50%, Cold 50% (tie, Cold ranks first)
//!
//! Child has no model and no dataset.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;
use tempfile::TempDir;

use symptomatic::config::StaticConfig;
use symptomatic::errors::{Result, SymptomaticError};
use symptomatic::runtime::lifetime::startup::build_prediction_service;
use symptomatic::services::PredictionService;
use symptomatic::storage::{PredictionLog, PredictionLogEntry, SharedPredictionLog};

pub struct Fixture {
    pub dir: TempDir,
    pub config: StaticConfig,
}

impl Fixture {
    pub fn service(&self, log: Option<SharedPredictionLog>) -> PredictionService {
        build_prediction_service(&self.config, log).expect("Failed to build prediction service")
    }
}

fn write(path: &Path, value: serde_json::Value) {
    std::fs::write(path, value.to_string()).expect("Failed to write fixture");
}

fn write_model(models_dir: &Path, stem: &str) {
    write(
        &models_dir.join(format!("{}_model.json", stem)),
        json!({
            "n_features": 3,
            "n_classes": 3,
            "trees": [{
                "children_left": [1, 2, -1, -1, -1],
                "children_right": [4, 3, -1, -1, -1],
                "feature": [0, 2, -2, -2, -2],
                "threshold": [0.5, 0.5, -2.0, -2.0, -2.0],
                "value": [[10.0, 3.0, 4.0], [1.0, 2.0, 4.0], [1.0, 1.0, 0.0], [0.0, 1.0, 4.0], [9.0, 1.0, 0.0]]
            }]
        }),
    );
    write(
        &models_dir.join(format!("{}_model_encoder.json", stem)),
        json!({ "classes": ["Flu", "Cold", "Migraine"] }),
    );
    write(
        &models_dir.join(format!("symptom_order_{}.json", stem)),
        json!(["fever", "cough", "headache"]),
    );
}

pub fn fixture() -> Fixture {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let root = dir.path();

    let models_dir = root.join("models");
    let datasets_dir = root.join("data");
    let app_dir = root.join("app");
    for d in [&models_dir, &datasets_dir, &app_dir] {
        std::fs::create_dir_all(d).expect("Failed to create fixture dir");
    }

    write_model(&models_dir, "adult");
    write_model(&models_dir, "elder");

    std::fs::write(
        datasets_dir.join("Adult Dataset.csv"),
        "fever,cough,headache,diagnosis\n1,0,0,Flu\n0,0,1,Migraine\n",
    )
    .expect("Failed to write dataset");

    write(
        &app_dir.join("remedies and suggestions.json"),
        json!({
            "Adult": {
                "Flu": {
                    "severe": { "remedies": ["Rest", "Fluids"], "suggestion": "See a doctor if fever persists." },
                    "moderate": { "remedies": ["Rest"], "suggestion": "Monitor your temperature." }
                }
            }
        }),
    );
    write(
        &app_dir.join("disease_descriptions.json"),
        json!({ "Flu": "A contagious respiratory illness caused by influenza viruses." }),
    );
    write(
        &app_dir.join("recovery dates.json"),
        json!({ "Flu": "7-10 days", "Migraine": "4-72 hours" }),
    );

    let mut config = StaticConfig::default();
    config.database.database_url = String::new();
    config.data.models_dir = models_dir;
    config.data.datasets_dir = datasets_dir;
    config.data.remedies_file = app_dir.join("remedies and suggestions.json");
    config.data.descriptions_file = app_dir.join("disease_descriptions.json");
    config.data.recovery_file = app_dir.join("recovery dates.json");
    config.prediction.preload_models = false;

    Fixture { dir, config }
}

/// In-memory prediction log
#[derive(Default)]
pub struct MemoryLog {
    pub entries: Mutex<Vec<PredictionLogEntry>>,
    pub fail: bool,
}

impl MemoryLog {
    pub fn failing() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn entries(&self) -> Vec<PredictionLogEntry> {
        self.entries.lock().unwrap().clone()
    }
}

#[async_trait]
impl PredictionLog for MemoryLog {
    async fn log_prediction(&self, entry: PredictionLogEntry) -> Result<()> {
        if self.fail {
            return Err(SymptomaticError::database_connection("database is down"));
        }
        self.entries.lock().unwrap().push(entry);
        Ok(())
    }

    async fn logged_count(&self) -> Result<u64> {
        if self.fail {
            return Err(SymptomaticError::database_connection("database is down"));
        }
        Ok(self.entries.lock().unwrap().len() as u64)
    }

    fn backend_name(&self) -> String {
        "memory".to_string()
    }
}
