use super::tokenizer::TeamScore;
use std::fmt;

/// Label used for drawn matches.
pub const TIE_LABEL: &str = "tie";

/// Result of a single match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome<'a> {
    Winner { winner: &'a str, loser: &'a str },
    Tie,
}

impl Outcome<'_> {
    /// The winning team's name, or `"tie"`.
    pub fn label(&self) -> &str {
        match self {
            Outcome::Winner { winner, .. } => winner,
            Outcome::Tie => TIE_LABEL,
        }
    }
}

impl fmt::Display for Outcome<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Decides a match from the two teams' scores. Equal scores are a tie.
pub fn decide<'a>(home: &'a TeamScore, away: &'a TeamScore) -> Outcome<'a> {
    use std::cmp::Ordering;

    match home.score.cmp(&away.score) {
        Ordering::Equal => Outcome::Tie,
        Ordering::Greater => Outcome::Winner {
            winner: &home.name,
            loser: &away.name,
        },
        Ordering::Less => Outcome::Winner {
            winner: &away.name,
            loser: &home.name,
        },
    }
}
