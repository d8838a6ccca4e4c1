//! League standings from free-text match results.
//!
//! Data flows line by line: [`parse_match_line`] splits a line into two
//! [`TeamScore`]s, [`decide`] picks the [`Outcome`], [`Standings::record`]
//! applies it, and once input ends [`rank_standings`] and [`render_table`]
//! produce the final text. [`Tally`] threads the standings through a run.

pub mod arbiter;
pub mod ranking;
pub mod render;
pub mod standings;
pub mod tally;
pub mod tokenizer;

pub use arbiter::{Outcome, TIE_LABEL, decide};
pub use ranking::{RankedEntry, rank_standings};
pub use render::{format_entry, format_line_error, point_unit, render_table};
pub use standings::{ScoringRules, Standings};
pub use tally::{LineOutcome, RejectedLine, Tally, is_sentinel, tally_lines};
pub use tokenizer::{TeamScore, parse_match_line};

/// Ranks and renders a finished table in one step.
pub fn standings_report(standings: &Standings) -> String {
    render_table(&rank_standings(standings))
}
