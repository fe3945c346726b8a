//! CLI mode
//!
//! Offline commands that reuse the prediction pipeline without the HTTP server
//! or the prediction log.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{Commands, ConfigCommands};
use crate::config::StaticConfig;
use crate::runtime::lifetime::startup::build_prediction_service;
use crate::services::{PredictRequest, Prediction};

/// Run one CLI command; `Serve` is handled by the caller
pub async fn run_cli(command: Commands, config: &StaticConfig) -> Result<()> {
    match command {
        Commands::Serve => Ok(()),
        Commands::Predict {
            age,
            symptoms,
            json,
        } => predict(config, age, symptoms, json).await,
        Commands::Symptoms { age } => list_symptoms(config, age).await,
        Commands::Config {
            action: ConfigCommands::Generate { output_path, force },
        } => config_generate(output_path, force),
    }
}

fn print_prediction(prediction: &Prediction, rank: usize) {
    println!(
        "  {} {} {} [{}]",
        format!("#{}", rank).bold(),
        prediction.disease.cyan(),
        format!("{:.1}%", prediction.probability).green(),
        prediction.severity.capitalized().yellow()
    );
    println!("     {}", prediction.description.dimmed());
    if !prediction.remedies.is_empty() {
        println!("     {} {}", "Remedies:".blue(), prediction.remedies.join(", "));
    }
    if !prediction.suggestion.is_empty() {
        println!("     {} {}", "Suggestion:".blue(), prediction.suggestion);
    }
}

async fn predict(config: &StaticConfig, age: f64, symptoms: Vec<String>, json: bool) -> Result<()> {
    let service = build_prediction_service(config, None)?;
    let report = service
        .predict(PredictRequest {
            age: Some(age),
            symptoms,
            patient_name: None,
        })
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    let Some(top) = &report.top_prediction else {
        println!("{}", "No prediction available.".yellow());
        return Ok(());
    };

    println!("{} ({})", "Top prediction".green().bold(), top.age_group);
    print_prediction(top, 1);
    if !report.other_predictions.is_empty() {
        println!("{}", "Other predictions".green().bold());
        for (i, prediction) in report.other_predictions.iter().enumerate() {
            print_prediction(prediction, i + 2);
        }
    }
    Ok(())
}

async fn list_symptoms(config: &StaticConfig, age: i32) -> Result<()> {
    let service = build_prediction_service(config, None)?;
    let list = service.symptoms_for_age(age).await?;

    if list.symptoms.is_empty() {
        println!("{}", "No symptoms available for this age.".yellow());
        return Ok(());
    }
    for symptom in &list.symptoms {
        println!("  {}", symptom);
    }
    println!("{} {}", "Total:".dimmed(), list.symptoms.len());
    Ok(())
}

/// Generate example configuration file
fn config_generate(output_path: Option<String>, force: bool) -> Result<()> {
    let path = output_path.unwrap_or_else(|| "config.example.toml".to_string());

    // 非 --force 模式下交互确认
    if !force && Path::new(&path).exists() {
        print!(
            "{} {} {}",
            "File already exists:".yellow(),
            path.blue(),
            "Overwrite? [y/N] ".yellow()
        );
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().lock().read_line(&mut input)?;
        if !input.trim().eq_ignore_ascii_case("y") {
            println!("{}", "Aborted.".red());
            return Ok(());
        }
    }

    StaticConfig::default()
        .save_to_file(&path)
        .map_err(|e| anyhow::anyhow!("{}", e))
        .with_context(|| format!("Unable to write configuration file {}", path))?;

    println!(
        "  {} {}",
        "Configuration file generated successfully".green(),
        path.blue()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_generate_writes_parseable_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        config_generate(Some(path.to_string_lossy().into_owned()), true).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: StaticConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed.prediction.top_k, 5);
    }
}
