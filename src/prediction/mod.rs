//! Symptom → diagnosis scoring pipeline
//!
//! - `age_group`: Child / Adult / Elder selection
//! - `vectorize`: binary symptom vector in training order
//! - `forest`: random forest `predict_proba`
//! - `ranking`: top-k by probability
//! - `severity`: probability → mild / moderate / severe
//! - `artifact` / `registry`: per-group model files and their cache

pub mod age_group;
pub mod artifact;
pub mod forest;
pub mod ranking;
pub mod registry;
pub mod severity;
pub mod vectorize;

pub use age_group::AgeGroup;
pub use artifact::{ArtifactPaths, LabelEncoder, ModelArtifacts};
pub use forest::{DecisionTree, RandomForest};
pub use ranking::{RankedClass, rank};
pub use registry::ModelRegistry;
pub use severity::{Severity, SeverityThresholds};
pub use vectorize::vectorize_symptoms;
