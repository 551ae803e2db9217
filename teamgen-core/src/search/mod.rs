//! Player search
//!
//! Filtering is a plain case-insensitive substring match on names:
//! - Empty or whitespace query → every player, in stored order
//! - Plain text → players whose name contains the text

use crate::models::{Category, Player};

/// Players whose name contains `query`, ignoring case.
///
/// Order follows `players`.
#[must_use]
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return players.iter().collect();
    }
    players
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .collect()
}

/// Same as [`filter_players`], restricted to one category
#[must_use]
pub fn filter_by_category<'a>(
    players: &'a [Player],
    query: &str,
    category: Category,
) -> Vec<&'a Player> {
    filter_players(players, query)
        .into_iter()
        .filter(|p| p.category == category)
        .collect()
}
