use super::standings::Standings;

/// A team's place in the final table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedEntry {
    pub name: String,
    pub points: u32,
    pub rank: usize,
}

impl RankedEntry {
    pub fn new(name: impl Into<String>, points: u32, rank: usize) -> Self {
        Self {
            name: name.into(),
            points,
            rank,
        }
    }
}

/// Orders the table by points (highest first), then by name, and assigns ranks.
///
/// Teams on equal points share a rank; the next distinct points value
/// resumes at its 1-based position, so points `[3, 1, 1, 0]` rank as
/// `[1, 2, 2, 4]`.
pub fn rank_standings(standings: &Standings) -> Vec<RankedEntry> {
    let mut sorted: Vec<(&str, u32)> = standings
        .iter()
        .map(|(name, points)| (name.as_str(), *points))
        .collect();

    sorted.sort_by(|(a_name, a_points), (b_name, b_points)| {
        b_points.cmp(a_points).then_with(|| a_name.cmp(b_name))
    });

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(sorted.len());
    for (position, (name, points)) in sorted.into_iter().enumerate() {
        let rank = match ranked.last() {
            Some(previous) if previous.points == points => previous.rank,
            _ => position + 1,
        };
        ranked.push(RankedEntry::new(name, points, rank));
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standings(entries: &[(&str, u32)]) -> Standings {
        entries
            .iter()
            .map(|(name, points)| (name.to_string(), *points))
            .collect()
    }

    fn summary(ranked: &[RankedEntry]) -> Vec<(&str, u32, usize)> {
        ranked
            .iter()
            .map(|entry| (entry.name.as_str(), entry.points, entry.rank))
            .collect()
    }

    #[test]
    fn test_order_and_shared_ranks() {
        let ranked = rank_standings(&standings(&[("Ben", 1), ("Anton", 1), ("Span", 3)]));
        assert_eq!(
            summary(&ranked),
            vec![("Span", 3, 1), ("Anton", 1, 2), ("Ben", 1, 2)]
        );
    }

    #[test]
    fn test_all_equal_points_sorted_by_name() {
        let ranked = rank_standings(&standings(&[("Ben", 3), ("Anton", 3), ("Span", 3)]));
        assert_eq!(
            summary(&ranked),
            vec![("Anton", 3, 1), ("Ben", 3, 1), ("Span", 3, 1)]
        );
    }

    #[test]
    fn test_distinct_points() {
        let ranked = rank_standings(&standings(&[("Ben", 1), ("Anton", 2), ("Span", 3)]));
        assert_eq!(
            summary(&ranked),
            vec![("Span", 3, 1), ("Anton", 2, 2), ("Ben", 1, 3)]
        );
    }

    #[test]
    fn test_rank_resumes_at_position_after_tie() {
        let ranked = rank_standings(&standings(&[
            ("Tarantulas", 6),
            ("Lions", 5),
            ("FC Awesome", 1),
            ("Snakes", 1),
            ("Grouches", 0),
        ]));
        let ranks: Vec<usize> = ranked.iter().map(|entry| entry.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 3, 5]);
    }

    #[test]
    fn test_ranking_is_deterministic() {
        let table = standings(&[("b", 2), ("a", 2), ("c", 1), ("d", 2), ("e", 0)]);
        let first = rank_standings(&table);
        for _ in 0..10 {
            assert_eq!(rank_standings(&table), first);
        }
    }

    #[test]
    fn test_zero_points_team_still_ranked() {
        let ranked = rank_standings(&standings(&[("Grouches", 0)]));
        assert_eq!(summary(&ranked), vec![("Grouches", 0, 1)]);
    }

    #[test]
    fn test_empty_table() {
        assert!(rank_standings(&Standings::new()).is_empty());
    }
}
