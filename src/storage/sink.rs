use std::sync::Arc;

use super::models::PredictionLogEntry;
use super::SeaOrmStorage;
use crate::errors::Result;

/// Destination for top-prediction log rows
#[async_trait::async_trait]
pub trait PredictionLog: Send + Sync {
    async fn log_prediction(&self, entry: PredictionLogEntry) -> Result<()>;

    /// Total rows logged so far
    async fn logged_count(&self) -> Result<u64>;

    fn backend_name(&self) -> String;
}

#[async_trait::async_trait]
impl PredictionLog for SeaOrmStorage {
    async fn log_prediction(&self, entry: PredictionLogEntry) -> Result<()> {
        self.insert_prediction(&entry).await.map(|_| ())
    }

    async fn logged_count(&self) -> Result<u64> {
        self.count().await
    }

    fn backend_name(&self) -> String {
        self.info().storage_type
    }
}

pub type SharedPredictionLog = Arc<dyn PredictionLog>;
