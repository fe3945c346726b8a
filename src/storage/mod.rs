use std::sync::Arc;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;
pub mod sink;

pub use backend::SeaOrmStorage;
pub use models::{PredictionLogEntry, PredictionRecord, StorageInfo};
pub use sink::{PredictionLog, SharedPredictionLog};

pub struct StorageFactory;

impl StorageFactory {
    /// Build the prediction log store; an empty `database_url` disables logging
    pub async fn create(config: &DatabaseConfig) -> Result<Option<Arc<SeaOrmStorage>>> {
        let database_url = config.database_url.trim();
        if database_url.is_empty() {
            return Ok(None);
        }

        let backend_type = backend::infer_backend_from_url(database_url)?;
        let storage = SeaOrmStorage::new(database_url, &backend_type, config).await?;
        Ok(Some(Arc::new(storage)))
    }
}
