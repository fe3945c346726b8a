//! Per-age-group model cache

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;
use strum::IntoEnumIterator;
use tracing::{info, warn};

use super::age_group::AgeGroup;
use super::artifact::ModelArtifacts;
use crate::errors::Result;

/// Loads classifier artifacts on first use and keeps them in memory
#[derive(Clone)]
pub struct ModelRegistry {
    models_dir: PathBuf,
    cache: Cache<AgeGroup, Arc<ModelArtifacts>>,
}

impl ModelRegistry {
    /// `ttl_secs == 0` keeps models until the process exits
    pub fn new(models_dir: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let mut builder = Cache::builder().max_capacity(AgeGroup::iter().count() as u64);
        if ttl_secs > 0 {
            builder = builder.time_to_live(Duration::from_secs(ttl_secs));
        }
        Self {
            models_dir: models_dir.into(),
            cache: builder.build(),
        }
    }

    pub fn models_dir(&self) -> &Path {
        &self.models_dir
    }

    pub fn get(&self, group: AgeGroup) -> Result<Arc<ModelArtifacts>> {
        self.cache
            .try_get_with(group, || {
                ModelArtifacts::load(&self.models_dir, group).map(Arc::new)
            })
            .map_err(|e| (*e).clone())
    }

    pub fn is_loaded(&self, group: AgeGroup) -> bool {
        self.cache.contains_key(&group)
    }

    /// Warm all groups; failures are logged and retried on first request
    pub fn preload(&self) -> usize {
        let mut loaded = 0;
        for group in AgeGroup::iter() {
            match self.get(group) {
                Ok(artifacts) => {
                    loaded += 1;
                    info!(
                        "{} model ready ({} diseases, {} symptoms)",
                        group,
                        artifacts.encoder.classes.len(),
                        artifacts.symptom_order.len()
                    );
                }
                Err(e) => warn!("{} model unavailable: {}", group, e),
            }
        }
        loaded
    }

    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}
