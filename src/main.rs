// src/main.rs
use clap::Parser;
use league_table::cli::{Args, is_config_command};
use league_table::commands;
use league_table::config::Config;
use league_table::error::AppError;
use league_table::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Handle version flag first
    if args.version {
        commands::handle_version_command();
        return Ok(());
    }

    if args.list_config {
        return commands::handle_list_config_command().await;
    }

    if is_config_command(&args) {
        return commands::handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    // The guard must be kept alive for the duration of the program
    let (log_file_path, _guard) = setup_logging(&args, &config).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    commands::handle_tally_command(&args, &config).await
}
