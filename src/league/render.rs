//! Text output for the final table and for rejected lines.

use super::ranking::RankedEntry;
use crate::error::LineError;

/// Point unit for a given total: `pt` for exactly one, otherwise `pts`.
pub fn point_unit(points: u32) -> &'static str {
    if points == 1 { "pt" } else { "pts" }
}

/// Formats one table row, e.g. `"2. Anton, 1 pt"`.
pub fn format_entry(entry: &RankedEntry) -> String {
    format!(
        "{}. {}, {} {}",
        entry.rank,
        entry.name,
        entry.points,
        point_unit(entry.points)
    )
}

/// Renders the ranked table, one row per line, without a trailing newline.
///
/// # Examples
/// ```
/// use league_table::league::{RankedEntry, render_table};
///
/// let table = render_table(&[
///     RankedEntry::new("Span", 3, 1),
///     RankedEntry::new("Anton", 1, 2),
/// ]);
/// assert_eq!(table, "1. Span, 3 pts\n2. Anton, 1 pt");
/// ```
pub fn render_table(entries: &[RankedEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Diagnostic text for a rejected line: the cause, then which line was skipped.
pub fn format_line_error(line_number: usize, error: &LineError) -> String {
    format!(
        "Error: {error}\nLine {line_number} has an error and was not added to the tally, please ensure your format for every line is team1 score, team2 score"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_tables() {
        let cases = [
            (
                vec![
                    RankedEntry::new("Span", 3, 1),
                    RankedEntry::new("Anton", 1, 2),
                    RankedEntry::new("Ben", 1, 2),
                ],
                "1. Span, 3 pts\n2. Anton, 1 pt\n2. Ben, 1 pt",
            ),
            (
                vec![
                    RankedEntry::new("Anton", 3, 1),
                    RankedEntry::new("Ben", 3, 1),
                    RankedEntry::new("Span", 3, 1),
                ],
                "1. Anton, 3 pts\n1. Ben, 3 pts\n1. Span, 3 pts",
            ),
            (
                vec![
                    RankedEntry::new("Span", 3, 1),
                    RankedEntry::new("Anton", 2, 2),
                    RankedEntry::new("Ben", 1, 3),
                ],
                "1. Span, 3 pts\n2. Anton, 2 pts\n3. Ben, 1 pt",
            ),
        ];

        for (i, (entries, expected)) in cases.iter().enumerate() {
            assert_eq!(render_table(entries), *expected, "case {}", i + 1);
        }
    }

    #[test]
    fn test_zero_points_is_plural() {
        assert_eq!(
            format_entry(&RankedEntry::new("Grouches", 0, 5)),
            "5. Grouches, 0 pts"
        );
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        assert_eq!(render_table(&[]), "");
    }

    #[test]
    fn test_no_trailing_newline() {
        let table = render_table(&[RankedEntry::new("Lions", 1, 1)]);
        assert_eq!(table, "1. Lions, 1 pt");
        assert!(!table.ends_with('\n'));
    }

    #[test]
    fn test_format_line_error() {
        assert_eq!(
            format_line_error(3, &LineError::NoSeparatorFound),
            "Error: invalid line, teams have to be separated by a comma , for example team1 3, team2 4\n\
             Line 3 has an error and was not added to the tally, please ensure your format for every line is team1 score, team2 score"
        );
    }
}
