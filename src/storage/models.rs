use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::prediction::Severity;

/// A top prediction to be written to the `details` table
#[derive(Debug, Clone)]
pub struct PredictionLogEntry {
    pub patient_name: String,
    pub age: i32,
    pub disease: String,
    pub severity: Severity,
    pub predicted_at: DateTime<Utc>,
}

/// A stored `details` row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: i32,
    pub patient_name: String,
    pub age: i32,
    pub disease_predicted: String,
    pub severity: String,
    pub predicted_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageInfo {
    pub storage_type: String,
}
