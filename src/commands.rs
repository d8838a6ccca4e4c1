use crate::cli::Args;
use crate::config::Config;
use crate::constants::INPUT_PROMPT;
use crate::error::AppError;
use crate::league::{LineOutcome, ScoringRules, Standings, Tally, format_line_error, standings_report};
use crate::{NAME, VERSION};
use std::io::{IsTerminal, Write, stderr, stdin, stdout};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tracing::info;

/// Handles the --version command.
pub fn handle_version_command() {
    println!("{NAME} {VERSION}");
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-log-file, --clear-log-file).
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    update_config_file(&config_path, args).await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Applies the config update arguments to the file at `config_path`.
///
/// Starts from the saved file (not environment overrides) so that overrides
/// are never persisted. A file that fails to parse is left untouched.
pub async fn update_config_file(config_path: &str, args: &Args) -> Result<Config, AppError> {
    let mut config = Config::load_saved_or_default(config_path).await?;

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save_to_path(config_path).await?;

    Ok(config)
}

/// Reads match lines until the sentinel or end of stream and tallies them.
///
/// Each rejected line is reported to `diagnostics` as soon as it is seen.
/// Only a failure of the stream itself is returned as an error.
pub async fn read_and_tally<R, W>(
    reader: R,
    rules: ScoringRules,
    diagnostics: &mut W,
) -> Result<Tally, AppError>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut tally = Tally::new(rules);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        match tally.feed(&line) {
            LineOutcome::Finished => break,
            LineOutcome::Recorded => {}
            LineOutcome::Rejected(rejected) => {
                writeln!(
                    diagnostics,
                    "{}",
                    format_line_error(rejected.line_number, &rejected.error)
                )?;
            }
        }
    }

    info!(
        lines = tally.lines_seen(),
        rejected = tally.rejected().len(),
        teams = tally.standings().len(),
        "Finished reading match results"
    );
    Ok(tally)
}

/// Handles the default command: read results, print the ranked table.
pub async fn handle_tally_command(args: &Args, config: &Config) -> Result<(), AppError> {
    let mut diagnostics = stderr();

    let tally = match args.input_path() {
        Some(path) => {
            info!("Reading match results from {}", path.display());
            let file = tokio::fs::File::open(path).await?;
            read_and_tally(BufReader::new(file), config.scoring, &mut diagnostics).await?
        }
        None => {
            if !args.quiet && stdin().is_terminal() {
                eprintln!("{INPUT_PROMPT}");
            }
            let input = BufReader::new(tokio::io::stdin());
            read_and_tally(input, config.scoring, &mut diagnostics).await?
        }
    };

    write_table(&tally.finish())
}

fn write_table(standings: &Standings) -> Result<(), AppError> {
    let table = standings_report(standings);
    let mut out = stdout().lock();
    out.write_all(table.as_bytes())?;
    if !table.is_empty() && out.is_terminal() {
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
