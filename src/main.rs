use clap::Parser;
use colored::Colorize;

use symptomatic::cli::{Cli, Commands};
use symptomatic::config::{get_config, init_config_from};
use symptomatic::runtime::modes::{run_cli, run_server};
use symptomatic::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_config_from(cli.config.as_deref());
    let config = get_config();

    match cli.command {
        None | Some(Commands::Serve) => {
            // 日志 guard 必须在整个进程生命周期内保留
            let _log_guard = init_logging(&config.logging);
            run_server(&config).await
        }
        Some(command) => {
            if let Err(e) = run_cli(command, &config).await {
                eprintln!("{} {:#}", "Error:".red().bold(), e);
                std::process::exit(1);
            }
            Ok(())
        }
    }
}
