//! Command-line interface definitions using clap

use clap::{Parser, Subcommand};

/// Symptomatic - symptom-based disease prediction service
#[derive(Parser, Debug)]
#[command(name = "symptomatic")]
#[command(version)]
#[command(about = "Symptom-based disease prediction service", long_about = None)]
pub struct Cli {
    /// Path to the TOML configuration file (default: config.toml)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Rank diagnoses for an age and symptom set without starting the server
    ///
    /// Usage: predict --age 34 --symptom fever --symptom cough
    Predict {
        /// Years, fractional values allowed
        #[arg(long, allow_negative_numbers = true)]
        age: f64,

        /// Symptom name, repeatable
        #[arg(long = "symptom", short = 's', required = true)]
        symptoms: Vec<String>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the selectable symptoms for an age
    Symptoms {
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        age: i32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Force overwrite without confirmation
        #[arg(long)]
        force: bool,
    },
}
