//! Accumulated league points per team.

use super::arbiter::Outcome;
use crate::constants::scoring;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::collections::hash_map::Iter;

/// Points awarded per match result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringRules {
    #[serde(default = "default_win")]
    pub win: u32,
    #[serde(default = "default_tie")]
    pub tie: u32,
    #[serde(default = "default_loss")]
    pub loss: u32,
}

fn default_win() -> u32 {
    scoring::WIN_POINTS
}

fn default_tie() -> u32 {
    scoring::TIE_POINTS
}

fn default_loss() -> u32 {
    scoring::LOSS_POINTS
}

impl Default for ScoringRules {
    fn default() -> Self {
        ScoringRules {
            win: default_win(),
            tie: default_tie(),
            loss: default_loss(),
        }
    }
}

/// League table: team name to accumulated points.
///
/// Entries are only ever added and points only ever grow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Standings {
    points: HashMap<String, u32>,
    rules: ScoringRules,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rules(rules: ScoringRules) -> Self {
        Standings {
            points: HashMap::new(),
            rules,
        }
    }

    pub fn rules(&self) -> ScoringRules {
        self.rules
    }

    /// Records one match between `home` and `away`.
    ///
    /// Both teams get an entry (starting at 0) whatever the outcome, then
    /// the points for the result are added.
    pub fn record(&mut self, home: &str, away: &str, outcome: Outcome<'_>) {
        self.points.entry(home.to_string()).or_insert(0);
        self.points.entry(away.to_string()).or_insert(0);

        match outcome {
            Outcome::Tie => {
                self.add(home, self.rules.tie);
                self.add(away, self.rules.tie);
            }
            Outcome::Winner { winner, loser } => {
                self.add(winner, self.rules.win);
                self.add(loser, self.rules.loss);
            }
        }
    }

    fn add(&mut self, team: &str, points: u32) {
        if let Some(total) = self.points.get_mut(team) {
            *total = total.saturating_add(points);
        }
    }

    pub fn points(&self, team: &str) -> Option<u32> {
        self.points.get(team).copied()
    }

    pub fn contains(&self, team: &str) -> bool {
        self.points.contains_key(team)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates entries in no particular order; see `rank_standings` for a sorted view.
    pub fn iter(&self) -> Iter<'_, String, u32> {
        self.points.iter()
    }

    /// Table contents as a plain map, mostly useful for comparisons.
    pub fn to_map(&self) -> HashMap<String, u32> {
        self.points.clone()
    }
}

impl<'a> IntoIterator for &'a Standings {
    type Item = (&'a String, &'a u32);
    type IntoIter = Iter<'a, String, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<(String, u32)> for Standings {
    fn from_iter<T: IntoIterator<Item = (String, u32)>>(iter: T) -> Self {
        Standings {
            points: iter.into_iter().collect(),
            rules: ScoringRules::default(),
        }
    }
}
