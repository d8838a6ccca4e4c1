//! League standings from free-text match results.
//!
//! This library parses lines such as `"Lions 3, Snakes 3"`, accumulates
//! league points (3 for a win, 1 for a tie, 0 for a loss by default), and
//! renders the ranked table.
//!
//! # Examples
//!
//! ```rust
//! use league_table::league::{ScoringRules, standings_report, tally_lines};
//!
//! let lines = [
//!     "Lions 3, Snakes 3",
//!     "Tarantulas 1, FC Awesome 0",
//!     "Lions 1, FC Awesome 1",
//!     "Tarantulas 3, Snakes 1",
//!     "Lions 4, Grouches 0",
//! ];
//! let tally = tally_lines(lines, ScoringRules::default());
//!
//! assert_eq!(
//!     standings_report(tally.standings()),
//!     "1. Tarantulas, 6 pts\n2. Lions, 5 pts\n3. FC Awesome, 1 pt\n3. Snakes, 1 pt\n5. Grouches, 0 pts"
//! );
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod league;
pub mod logging;

// Re-export commonly used types for convenience
pub use config::Config;
pub use error::{AppError, LineError};
pub use league::{
    Outcome, RankedEntry, ScoringRules, Standings, Tally, TeamScore, parse_match_line,
    rank_standings, render_table,
};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
