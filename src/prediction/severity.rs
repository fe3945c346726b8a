use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumIter};

use crate::config::PredictionConfig;

/// Severity tier derived from a predicted probability (percent)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Mild,
    Moderate,
    Severe,
}

/// Probability cut-offs, in percent
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityThresholds {
    pub severe: f64,
    pub moderate: f64,
}

impl Default for SeverityThresholds {
    fn default() -> Self {
        Self {
            severe: 70.0,
            moderate: 40.0,
        }
    }
}

impl SeverityThresholds {
    pub fn from_config(config: &PredictionConfig) -> Self {
        Self {
            severe: config.severe_threshold,
            moderate: config.moderate_threshold,
        }
    }

    /// Both cut-offs must lie in `0..=100` with `moderate <= severe`,
    /// otherwise a tier can never be reached
    pub fn validate(&self) -> Result<(), String> {
        for (name, value) in [("severe", self.severe), ("moderate", self.moderate)] {
            if !(0.0..=100.0).contains(&value) {
                return Err(format!(
                    "{}_threshold must be between 0 and 100, got {}",
                    name, value
                ));
            }
        }
        if self.moderate > self.severe {
            return Err(format!(
                "moderate_threshold ({}) must not exceed severe_threshold ({})",
                self.moderate, self.severe
            ));
        }
        Ok(())
    }

    pub fn classify(&self, probability: f64) -> Severity {
        if probability >= self.severe {
            Severity::Severe
        } else if probability >= self.moderate {
            Severity::Moderate
        } else {
            Severity::Mild
        }
    }
}

impl Severity {
    /// Classify with the default 70 / 40 thresholds
    pub fn from_probability(probability: f64) -> Self {
        SeverityThresholds::default().classify(probability)
    }

    /// "Mild" / "Moderate" / "Severe", the form stored in the prediction log
    pub fn capitalized(&self) -> &'static str {
        match self {
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_ref())
    }
}
