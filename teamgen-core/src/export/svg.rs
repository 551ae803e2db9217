//! SVG team card
//!
//! Two columns, one per team, with a header row and one line per player.
//! Captains get a crown after their name.

use std::fmt::Write as _;

use quick_xml::escape::escape;

use crate::models::{Player, TeamAssignment, TeamSide};

const WIDTH: u32 = 640;
const COLUMN_WIDTH: u32 = WIDTH / 2;
const TITLE_HEIGHT: u32 = 64;
const HEADER_HEIGHT: u32 = 48;
const ROW_HEIGHT: u32 = 32;
const PADDING: u32 = 24;

const BACKGROUND: &str = "#0f172a";
const TEAM_A_COLOR: &str = "#2563eb";
const TEAM_B_COLOR: &str = "#dc2626";
const TEXT_COLOR: &str = "#f8fafc";

pub(super) fn render_svg(assignment: &TeamAssignment) -> String {
    let rows = assignment
        .team_a
        .len()
        .max(assignment.team_b.len())
        .max(1);
    let rows = u32::try_from(rows).unwrap_or(u32::MAX / ROW_HEIGHT);
    let height = TITLE_HEIGHT + HEADER_HEIGHT + rows * ROW_HEIGHT + PADDING;

    let mut out = String::new();
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{WIDTH}" height="{height}" viewBox="0 0 {WIDTH} {height}" font-family="sans-serif">"#
    );
    let _ = writeln!(
        out,
        r#"  <rect width="{WIDTH}" height="{height}" rx="16" fill="{BACKGROUND}"/>"#
    );
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="42" fill="{TEXT_COLOR}" font-size="28" font-weight="bold" text-anchor="middle">Teams</text>"#,
        WIDTH / 2
    );

    for side in TeamSide::BOTH {
        render_column(&mut out, side, assignment.team(side));
    }

    out.push_str("</svg>\n");
    out
}

fn render_column(out: &mut String, side: TeamSide, players: &[Player]) {
    let (x, color) = match side {
        TeamSide::A => (0, TEAM_A_COLOR),
        TeamSide::B => (COLUMN_WIDTH, TEAM_B_COLOR),
    };
    let _ = writeln!(
        out,
        r#"  <rect x="{}" y="{TITLE_HEIGHT}" width="{}" height="{}" rx="8" fill="{color}"/>"#,
        x + PADDING / 2,
        COLUMN_WIDTH - PADDING,
        HEADER_HEIGHT - 8
    );
    let _ = writeln!(
        out,
        r#"  <text x="{}" y="{}" fill="{TEXT_COLOR}" font-size="20" font-weight="bold" text-anchor="middle">{} ({})</text>"#,
        x + COLUMN_WIDTH / 2,
        TITLE_HEIGHT + 27,
        side.title(),
        players.len()
    );

    let mut y = TITLE_HEIGHT + HEADER_HEIGHT + ROW_HEIGHT - 8;
    for player in players {
        let weight = if player.is_captain { "bold" } else { "normal" };
        let _ = writeln!(
            out,
            r#"  <text x="{}" y="{y}" fill="{TEXT_COLOR}" font-size="16" font-weight="{weight}">{}</text>"#,
            x + PADDING,
            escape(player.display_label().as_str())
        );
        y += ROW_HEIGHT;
    }
}
