//! Plain text and Markdown renderers

use std::fmt::Write as _;

use crate::models::{TeamAssignment, TeamSide};

pub(super) fn render_text(assignment: &TeamAssignment) -> String {
    let mut out = String::new();
    for (index, side) in TeamSide::BOTH.into_iter().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let players = assignment.team(side);
        let _ = writeln!(out, "{} ({})", side.title(), players.len());
        let _ = writeln!(out, "{}", "-".repeat(side.title().len()));
        if players.is_empty() {
            out.push_str("  (no players)\n");
        }
        for player in players {
            let _ = writeln!(out, "  {}", player.display_label());
        }
    }
    out
}

pub(super) fn render_markdown(assignment: &TeamAssignment) -> String {
    let mut out = String::from("# Teams\n");
    for side in TeamSide::BOTH {
        let players = assignment.team(side);
        let _ = write!(out, "\n## {} ({})\n\n", side.title(), players.len());
        if players.is_empty() {
            out.push_str("_No players_\n");
        }
        for player in players {
            let captain = if player.is_captain { " **(C)**" } else { "" };
            let _ = writeln!(
                out,
                "- {} {}{} _{}_",
                player.category.icon(),
                escape_markdown(&player.name),
                captain,
                player.category.label()
            );
        }
    }
    out
}

fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '*' | '_' | '`' | '[' | ']' | '#') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
