//! Property tests for team export

use proptest::prelude::*;
use teamgen_core::export::{ExportFormat, TeamsExport, render};
use teamgen_core::models::{Category, Player, TeamAssignment};

fn teams_strategy() -> impl Strategy<Value = TeamAssignment> {
    (
        prop::collection::vec("[A-Za-z&<> ]{1,12}", 0..8),
        prop::collection::vec("[A-Za-z&<> ]{1,12}", 0..8),
    )
        .prop_filter_map("names must not be blank", |(a, b)| {
            let build = |names: Vec<String>| -> Option<Vec<Player>> {
                names
                    .into_iter()
                    .enumerate()
                    .map(|(i, n)| Player::new(n, Category::ALL[i % 3]).ok())
                    .collect()
            };
            Some(TeamAssignment::new(build(a)?, build(b)?))
        })
}

proptest! {
    /// Property: the JSON export decodes back to the same teams
    #[test]
    fn json_export_restores_teams(teams in teams_strategy()) {
        let json = render(&teams, ExportFormat::Json).unwrap();
        let parsed = TeamsExport::from_json(&json).unwrap();
        prop_assert_eq!(parsed.into_assignment(), teams);
    }

    /// Property: the SVG card never contains raw markup from names
    #[test]
    fn svg_escapes_every_name(teams in teams_strategy()) {
        let svg = render(&teams, ExportFormat::Svg).unwrap();
        for player in teams.team_a.iter().chain(&teams.team_b) {
            if player.name.contains('<') {
                prop_assert!(!svg.contains(&player.name));
            }
        }
        prop_assert_eq!(svg.matches("<svg").count(), 1);
    }

    /// Property: the text listing has one line per player
    #[test]
    fn text_lists_each_player(teams in teams_strategy()) {
        let text = render(&teams, ExportFormat::Text).unwrap();
        let lines = text
            .lines()
            .filter(|l| l.starts_with("  ") && !l.contains("(no players)"))
            .count();
        prop_assert_eq!(lines, teams.total_len());
    }
}
