//! Splitting a raw match line into two `(team, score)` records.
//!
//! A line looks like `"<team1> <score1>, <team2> <score2>"`. Team names may
//! carry digits and commas of their own, so the separator is recognised by
//! its full shape: whitespace, digits, a comma and whitespace again. Inside
//! each half the score is the last whitespace-prefixed run of digits.

use crate::error::LineError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

/// Score followed by the comma that separates the two halves of a line.
static SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t][0-9]+,[ \t]").expect("separator pattern is valid"));

/// A whitespace-prefixed run of digits inside one half.
static SCORE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t][0-9]+").expect("score pattern is valid"));

/// One team's name and score as read from a single match line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamScore {
    pub name: String,
    pub score: u32,
}

impl TeamScore {
    pub fn new(name: impl Into<String>, score: u32) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

impl FromStr for TeamScore {
    type Err = LineError;

    /// Parses one half such as `"1970 Coca Cola 9"`.
    ///
    /// Only the last score-shaped run counts, so the half above yields the
    /// name `"1970 Coca Cola"` and score `9`.
    fn from_str(half: &str) -> Result<Self, Self::Err> {
        let last = SCORE
            .find_iter(half)
            .last()
            .ok_or_else(|| LineError::score_not_found(half))?;

        let digits = last.as_str().trim();
        let score = digits
            .parse::<u32>()
            .map_err(|source| LineError::ScoreNotNumeric {
                digits: digits.to_string(),
                source,
            })?;

        Ok(TeamScore::new(&half[..last.start()], score))
    }
}

/// Parses a full match line into the two teams' scores, in line order.
///
/// # Errors
/// * `LineError::NoSeparatorFound` - no `" <digits>, "` separator in the line
/// * `LineError::AmbiguousSeparator` - more than one separator candidate
/// * `LineError::ScoreNotFound` - a half has no trailing score
/// * `LineError::ScoreNotNumeric` - a score does not fit in a `u32`
///
/// # Examples
/// ```
/// use league_table::league::parse_match_line;
///
/// let (home, away) = parse_match_line("Tarantulas 1, FC Awesome 0").unwrap();
/// assert_eq!(home.name, "Tarantulas");
/// assert_eq!(away.score, 0);
/// ```
pub fn parse_match_line(line: &str) -> Result<(TeamScore, TeamScore), LineError> {
    let separators: Vec<_> = SEPARATOR.find_iter(line).collect();

    let separator = match separators.as_slice() {
        [] => return Err(LineError::NoSeparatorFound),
        [only] => only,
        many => {
            return Err(LineError::AmbiguousSeparator {
                fragments: many.len() + 1,
            });
        }
    };

    // The first half keeps its score but loses the separating comma.
    let first = line[..separator.end()].trim();
    let first = first.strip_suffix(',').unwrap_or(first);
    let second = line[separator.end()..].trim();

    let home = first.parse::<TeamScore>()?;
    let away = second.parse::<TeamScore>()?;
    Ok((home, away))
}
