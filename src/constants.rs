//! Application-wide constants and configuration values
//!
//! This module centralizes the fixed values of the league rules and the
//! names used for configuration and log files.

/// Input line that ends a run (an empty line does too)
pub const END_SENTINEL: &str = "end";

/// Directory name used under the platform config directory
pub const APP_DIR_NAME: &str = "league_table";

/// File name of the TOML config file
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default log file name inside the log directory
pub const LOG_FILE_NAME: &str = "league_table.log";

/// Default tracing directive for this crate
pub const DEFAULT_LOG_DIRECTIVE: &str = "league_table=info";

/// League points awarded per match result
pub mod scoring {
    /// Points for a win
    pub const WIN_POINTS: u32 = 3;

    /// Points for each team in a tie
    pub const TIE_POINTS: u32 = 1;

    /// Points for a loss
    pub const LOSS_POINTS: u32 = 0;
}

/// Environment variable names that override config file values
pub mod env_vars {
    /// Override the log file path
    pub const LOG_FILE: &str = "LEAGUE_TABLE_LOG_FILE";

    /// Override points for a win
    pub const WIN_POINTS: &str = "LEAGUE_TABLE_WIN_POINTS";

    /// Override points for a tie
    pub const TIE_POINTS: &str = "LEAGUE_TABLE_TIE_POINTS";

    /// Override points for a loss
    pub const LOSS_POINTS: &str = "LEAGUE_TABLE_LOSS_POINTS";
}

/// Interactive prompt shown when reading results from a terminal
pub const INPUT_PROMPT: &str = "Please start entering match results in the following format 'teamname1 teamscore1, teamname2 teamscore2', you can end the process by entering 'end' or just pressing enter with no text";
