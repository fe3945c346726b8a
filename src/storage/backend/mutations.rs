//! Write operations for SeaOrmStorage

use sea_orm::{ActiveModelTrait, ActiveValue::Set};
use tracing::debug;

use super::{SeaOrmStorage, retry};
use crate::errors::{Result, SymptomaticError};
use crate::storage::models::PredictionLogEntry;

use migration::entities::prediction_detail;

impl SeaOrmStorage {
    /// Insert one `details` row, returning its id
    pub async fn insert_prediction(&self, entry: &PredictionLogEntry) -> Result<i32> {
        let db = &self.db;

        let model = retry::with_retry(
            &format!("insert_prediction({})", entry.patient_name),
            self.retry_config,
            || async {
                prediction_detail::ActiveModel {
                    patient_name: Set(entry.patient_name.clone()),
                    age: Set(entry.age),
                    disease_predicted: Set(entry.disease.clone()),
                    severity: Set(entry.severity.capitalized().to_string()),
                    predicted_at: Set(entry.predicted_at),
                    ..Default::default()
                }
                .insert(db)
                .await
            },
        )
        .await
        .map_err(|e| {
            SymptomaticError::database_operation(format!("Failed to log prediction: {}", e))
        })?;

        debug!(
            "Logged prediction #{} for {}: {} ({})",
            model.id, model.patient_name, model.disease_predicted, model.severity
        );
        Ok(model.id)
    }
}
