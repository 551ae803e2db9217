//! Property tests for the team balancer

use std::collections::HashSet;

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use teamgen_core::balance::{MIN_PLAYERS, balance_with_rng};
use teamgen_core::error::BalanceError;
use teamgen_core::models::{CaptainPair, Category, Player, PlayerId, Roster, TeamSide};

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Batsman),
        Just(Category::Bowler),
        Just(Category::AllRounder),
    ]
}

/// Rosters with unique names, `min..max` players
fn roster_strategy(min: usize, max: usize) -> impl Strategy<Value = Roster> {
    prop::collection::vec(category_strategy(), min..max).prop_map(|categories| {
        Roster::from_players(
            categories
                .into_iter()
                .enumerate()
                .map(|(i, category)| Player::new(format!("Player {i}"), category).unwrap()),
        )
        .unwrap()
    })
}

/// A roster plus two distinct captain indices
fn roster_with_captains() -> impl Strategy<Value = (Roster, usize, usize)> {
    roster_strategy(MIN_PLAYERS, 30).prop_flat_map(|roster| {
        let len = roster.len();
        (Just(roster), 0..len, 0..len)
            .prop_filter("captains must differ", |(_, a, b)| a != b)
    })
}

fn roster_ids(roster: &Roster) -> HashSet<PlayerId> {
    roster.iter().map(|p| p.id).collect()
}

fn count(players: &[Player], category: Category) -> usize {
    players.iter().filter(|p| p.category == category).count()
}

proptest! {
    /// Property: without captains, sizes differ by at most one and the teams
    /// partition the roster
    #[test]
    fn teams_are_balanced_partitions(roster in roster_strategy(MIN_PLAYERS, 40), seed in any::<u64>()) {
        let teams = balance_with_rng(&roster, None, &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert!(teams.size_difference() <= 1);
        prop_assert_eq!(teams.total_len(), roster.len());

        let a: HashSet<_> = teams.team_a.iter().map(|p| p.id).collect();
        let b: HashSet<_> = teams.team_b.iter().map(|p| p.id).collect();
        prop_assert!(a.is_disjoint(&b));
        let union: HashSet<_> = a.union(&b).copied().collect();
        prop_assert_eq!(union, roster_ids(&roster));
    }

    /// Property: captains always end up on different teams, first on A
    #[test]
    fn captains_are_split((roster, first, second) in roster_with_captains(), seed in any::<u64>()) {
        let first_id = roster.players()[first].id;
        let second_id = roster.players()[second].id;
        let pair = CaptainPair::new(first_id, second_id).unwrap();

        let teams = balance_with_rng(&roster, Some(&pair), &mut StdRng::seed_from_u64(seed)).unwrap();

        prop_assert_eq!(teams.side_of(first_id), Some(TeamSide::A));
        prop_assert_eq!(teams.side_of(second_id), Some(TeamSide::B));
        prop_assert_eq!(teams.team_a[0].id, first_id);
        prop_assert_eq!(teams.team_b[0].id, second_id);
        prop_assert!(teams.size_difference() <= 1);
        prop_assert_eq!(teams.total_len(), roster.len());
    }

    /// Property: the same seed always produces the same teams
    #[test]
    fn seeded_division_is_deterministic(roster in roster_strategy(MIN_PLAYERS, 30), seed in any::<u64>()) {
        let first = balance_with_rng(&roster, None, &mut StdRng::seed_from_u64(seed)).unwrap();
        let second = balance_with_rng(&roster, None, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Property: without captains, each category is split as evenly as
    /// possible between the teams
    #[test]
    fn categories_are_spread(roster in roster_strategy(MIN_PLAYERS, 40), seed in any::<u64>()) {
        let teams = balance_with_rng(&roster, None, &mut StdRng::seed_from_u64(seed)).unwrap();
        // Earlier groups are split within one; later groups absorb the
        // running imbalance, so allow two
        for category in Category::ALL {
            let a = count(&teams.team_a, category);
            let b = count(&teams.team_b, category);
            prop_assert!(a.abs_diff(b) <= 2, "{category}: {a} vs {b}");
        }
    }

    /// Property: rosters below the minimum are rejected
    #[test]
    fn small_rosters_are_rejected(roster in roster_strategy(0, MIN_PLAYERS), seed in any::<u64>()) {
        let result = balance_with_rng(&roster, None, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(result, Err(BalanceError::InsufficientPlayers { count: roster.len() }));
    }

    /// Property: a captain outside the roster is rejected
    #[test]
    fn foreign_captain_is_rejected(roster in roster_strategy(MIN_PLAYERS, 20), seed in any::<u64>()) {
        let pair = CaptainPair::new(roster.players()[0].id, PlayerId::new()).unwrap();
        let result = balance_with_rng(&roster, Some(&pair), &mut StdRng::seed_from_u64(seed));
        prop_assert!(matches!(result, Err(BalanceError::InvalidCaptainSelection(_))));
    }
}
