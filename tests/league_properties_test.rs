//! Properties that must hold across many inputs, not just single examples.

use league_table::league::{
    Outcome, ScoringRules, Standings, TeamScore, decide, parse_match_line, rank_standings,
    render_table, tally_lines,
};

#[test]
fn test_arbiter_picks_higher_score() {
    for s1 in 0..8u32 {
        for s2 in 0..8u32 {
            let home = TeamScore::new("Home", s1);
            let away = TeamScore::new("Away", s2);
            let expected = match s1.cmp(&s2) {
                std::cmp::Ordering::Equal => "tie",
                std::cmp::Ordering::Greater => "Home",
                std::cmp::Ordering::Less => "Away",
            };
            assert_eq!(decide(&home, &away).label(), expected, "{s1} vs {s2}");
        }
    }
}

#[test]
fn test_aggregator_point_deltas() {
    let mut standings = Standings::new();
    standings.record("A", "B", Outcome::Tie);
    assert_eq!((standings.points("A"), standings.points("B")), (Some(1), Some(1)));

    standings.record(
        "C",
        "D",
        Outcome::Winner {
            winner: "D",
            loser: "C",
        },
    );
    assert_eq!((standings.points("C"), standings.points("D")), (Some(0), Some(3)));

    standings.record(
        "A",
        "C",
        Outcome::Winner {
            winner: "A",
            loser: "C",
        },
    );
    assert_eq!(standings.points("A"), Some(4));
    assert_eq!(standings.points("C"), Some(0));
    assert_eq!(standings.len(), 4);
}

#[test]
fn test_equal_points_share_rank_and_unequal_follow_order() {
    let lines: Vec<String> = (0..6)
        .map(|i| format!("Team {} {}, Team {} {}", (b'A' + i) as char, i % 3, (b'F' - i) as char, 1))
        .collect();
    let tally = tally_lines(&lines, ScoringRules::default());
    let ranked = rank_standings(tally.standings());

    for pair in ranked.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.points >= b.points);
        if a.points == b.points {
            assert_eq!(a.rank, b.rank);
            assert!(a.name < b.name);
        } else {
            assert!(a.rank < b.rank);
        }
    }
    assert_eq!(ranked[0].rank, 1);
}

#[test]
fn test_rendered_example_table() {
    let ranked = rank_standings(
        &[("Span", 3u32), ("Anton", 1), ("Ben", 1)]
            .into_iter()
            .map(|(n, p)| (n.to_string(), p))
            .collect::<Standings>(),
    );
    assert_eq!(
        render_table(&ranked),
        "1. Span, 3 pts\n2. Anton, 1 pt\n2. Ben, 1 pt"
    );
}

#[test]
fn test_unparseable_line_leaves_table_unchanged() {
    let before = tally_lines(["Lions 3, Snakes 1"], ScoringRules::default());
    let after = tally_lines(
        ["Lions 3, Snakes 1", "OnlyOneTeamNoScore", "Grouches 3, Pepsi"],
        ScoringRules::default(),
    );
    assert_eq!(before.standings().to_map(), after.standings().to_map());
    assert!(!after.standings().contains("Grouches"));
    assert_eq!(after.rejected().len(), 2);
}

#[test]
fn test_embedded_number_names() {
    let (home, away) = parse_match_line("1970 Coca Cola 9, Pepsi 0").unwrap();
    assert_eq!(home, TeamScore::new("1970 Coca Cola", 9));
    assert_eq!(away, TeamScore::new("Pepsi", 0));
}
