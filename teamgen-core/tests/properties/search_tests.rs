//! Property tests for player search

use proptest::prelude::*;
use teamgen_core::models::{Category, Player};
use teamgen_core::search::filter_players;

fn players_strategy() -> impl Strategy<Value = Vec<Player>> {
    prop::collection::vec("[A-Za-z]{1,10}", 0..20).prop_map(|names| {
        names
            .into_iter()
            .map(|n| Player::new(n, Category::Batsman).unwrap())
            .collect()
    })
}

proptest! {
    /// Property: results are a subsequence of the input and all match
    #[test]
    fn results_match_query(players in players_strategy(), query in "[A-Za-z]{0,3}") {
        let found = filter_players(&players, &query);
        let needle = query.to_lowercase();
        prop_assert!(found.iter().all(|p| p.name.to_lowercase().contains(&needle)));

        let expected = players
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .count();
        prop_assert_eq!(found.len(), expected);
    }

    /// Property: case of the query does not matter
    #[test]
    fn query_case_is_ignored(players in players_strategy(), query in "[a-z]{1,3}") {
        let lower = filter_players(&players, &query);
        let upper = filter_players(&players, &query.to_uppercase());
        prop_assert_eq!(lower, upper);
    }
}
