//! Read operations for SeaOrmStorage

use sea_orm::{EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};

use super::{SeaOrmStorage, retry};
use crate::errors::{Result, SymptomaticError};
use crate::storage::models::PredictionRecord;

use migration::entities::prediction_detail;

impl From<prediction_detail::Model> for PredictionRecord {
    fn from(model: prediction_detail::Model) -> Self {
        Self {
            id: model.id,
            patient_name: model.patient_name,
            age: model.age,
            disease_predicted: model.disease_predicted,
            severity: model.severity,
            predicted_at: model.predicted_at,
        }
    }
}

impl SeaOrmStorage {
    pub async fn count(&self) -> Result<u64> {
        let db = &self.db;
        retry::with_retry("count", self.retry_config, || async {
            prediction_detail::Entity::find().count(db).await
        })
        .await
        .map_err(|e| SymptomaticError::database_operation(format!("Failed to count predictions: {}", e)))
    }

    /// Most recent predictions first
    pub async fn recent(&self, limit: u64) -> Result<Vec<PredictionRecord>> {
        let db = &self.db;
        let models = retry::with_retry("recent", self.retry_config, || async {
            prediction_detail::Entity::find()
                .order_by_desc(prediction_detail::Column::PredictedAt)
                .order_by_desc(prediction_detail::Column::Id)
                .limit(limit)
                .all(db)
                .await
        })
        .await
        .map_err(|e| {
            SymptomaticError::database_operation(format!("Failed to load predictions: {}", e))
        })?;

        Ok(models.into_iter().map(PredictionRecord::from).collect())
    }
}
