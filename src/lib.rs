//! Symptomatic - symptom-based disease prediction service
//!
//! Maps a patient's age and reported symptoms to a ranked list of likely
//! diseases using per-age-group random forest classifiers, and decorates
//! each diagnosis with a description, severity tier, remedies and advice.
//!
//! # Architecture
//! - `prediction`: age groups, symptom vectors, forest scoring, ranking
//! - `catalog`: remedies, descriptions, datasets and recovery estimates
//! - `services`: the prediction pipeline shared by HTTP and CLI
//! - `storage`: prediction log (`details` table) via SeaORM
//! - `api`: HTTP handlers and middleware
//! - `config`: static TOML/env configuration
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging setup

pub mod api;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod prediction;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
