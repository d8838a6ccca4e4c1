//! The line-by-line loop that turns match results into standings.

use super::arbiter::decide;
use super::standings::{ScoringRules, Standings};
use super::tokenizer::parse_match_line;
use crate::constants::END_SENTINEL;
use crate::error::LineError;
use tracing::{debug, warn};

/// A line that could not be parsed and was left out of the standings.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedLine {
    /// 1-based, counting every line fed before the sentinel.
    pub line_number: usize,
    pub line: String,
    pub error: LineError,
}

/// What happened to a line passed to [`Tally::feed`].
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    Recorded,
    Rejected(RejectedLine),
    /// The sentinel was seen; no further lines are processed.
    Finished,
}

/// Returns true for the line that ends input: an empty line or exactly `end`.
pub fn is_sentinel(line: &str) -> bool {
    line.is_empty() || line == END_SENTINEL
}

/// Accumulator for one run over a sequence of match lines.
#[derive(Debug, Default)]
pub struct Tally {
    standings: Standings,
    rejected: Vec<RejectedLine>,
    lines_seen: usize,
    finished: bool,
}

impl Tally {
    pub fn new(rules: ScoringRules) -> Self {
        Tally {
            standings: Standings::with_rules(rules),
            ..Default::default()
        }
    }

    /// Processes one input line.
    ///
    /// A rejected line leaves the standings untouched, including for the
    /// team whose half did parse.
    pub fn feed(&mut self, line: &str) -> LineOutcome {
        if self.finished || is_sentinel(line) {
            self.finished = true;
            return LineOutcome::Finished;
        }

        self.lines_seen += 1;
        let line_number = self.lines_seen;

        match parse_match_line(line) {
            Ok((home, away)) => {
                let outcome = decide(&home, &away);
                debug!(
                    line_number,
                    home = %home.name,
                    home_score = home.score,
                    away = %away.name,
                    away_score = away.score,
                    outcome = %outcome,
                    "Recorded match"
                );
                self.standings.record(&home.name, &away.name, outcome);
                LineOutcome::Recorded
            }
            Err(error) => {
                warn!(line_number, kind = error.kind(), "Rejected line: {error}");
                let rejected = RejectedLine {
                    line_number,
                    line: line.to_string(),
                    error,
                };
                self.rejected.push(rejected.clone());
                LineOutcome::Rejected(rejected)
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Number of non-sentinel lines processed so far.
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    pub fn rejected(&self) -> &[RejectedLine] {
        &self.rejected
    }

    pub fn standings(&self) -> &Standings {
        &self.standings
    }

    /// Ends the run and hands over the table.
    pub fn finish(self) -> Standings {
        self.standings
    }
}

/// Runs a whole in-memory sequence of lines, stopping at the sentinel.
pub fn tally_lines<I, S>(lines: I, rules: ScoringRules) -> Tally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = Tally::new(rules);
    for line in lines {
        if tally.feed(line.as_ref()) == LineOutcome::Finished {
            break;
        }
    }
    tally
}
