use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::StaticConfig;
use crate::prediction::{ModelRegistry, SeverityThresholds};
use crate::services::PredictionService;
use crate::storage::{SeaOrmStorage, SharedPredictionLog, StorageFactory};

pub struct StartupContext {
    pub service: Arc<PredictionService>,
    pub storage: Option<Arc<SeaOrmStorage>>,
}

/// 构建预测服务：模型缓存 + 查询表，可选地挂上预测日志
pub fn build_prediction_service(
    config: &StaticConfig,
    log: Option<SharedPredictionLog>,
) -> Result<PredictionService> {
    SeverityThresholds::from_config(&config.prediction)
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid [prediction] severity thresholds")?;

    let registry = ModelRegistry::new(&config.data.models_dir, config.prediction.model_cache_ttl);
    let catalog = Catalog::load(&config.data).context("Failed to load lookup tables")?;
    Ok(PredictionService::new(
        registry,
        catalog,
        &config.prediction,
        log,
    ))
}

/// 准备服务器启动的上下文
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    match &storage {
        Some(storage) => info!("Using storage backend: {}", storage.info().storage_type),
        None => warn!("database_url is empty, predictions will not be logged"),
    }

    let log = storage
        .clone()
        .map(|s| s as SharedPredictionLog);
    let service = build_prediction_service(config, log)?;

    if config.prediction.preload_models {
        let registry = service.registry().clone();
        let loaded = tokio::task::spawn_blocking(move || registry.preload())
            .await
            .context("Model preload task failed")?;
        info!("Preloaded {} model(s) from {}", loaded, config.data.models_dir.display());
    } else {
        debug!("Model preload disabled, models load on first request");
    }

    debug!("Pre-startup processing completed in {:?}", start_time.elapsed());

    Ok(StartupContext {
        service: Arc::new(service),
        storage,
    })
}
