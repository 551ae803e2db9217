//! Property tests for roster invariants

use std::collections::HashSet;

use proptest::prelude::*;
use teamgen_core::error::RosterError;
use teamgen_core::models::{Category, Player, Roster};

fn name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z ]{0,15}"
}

fn category_strategy() -> impl Strategy<Value = Category> {
    prop::sample::select(Category::ALL.to_vec())
}

proptest! {
    /// Property: adding arbitrary players never leaves two with the same name
    #[test]
    fn names_stay_unique(entries in prop::collection::vec((name_strategy(), category_strategy()), 0..30)) {
        let mut roster = Roster::new();
        for (name, category) in entries {
            let player = Player::new(&name, category).unwrap();
            let expected_name = player.name.clone();
            let had_name = roster.iter().any(|p| p.name == expected_name);
            match roster.add(player) {
                Ok(added) => prop_assert!(!had_name && added.name == expected_name),
                Err(RosterError::DuplicateName(dup)) => prop_assert!(had_name && dup == expected_name),
                Err(other) => return Err(TestCaseError::fail(format!("unexpected error: {other}"))),
            }
        }
        let names: HashSet<_> = roster.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(names.len(), roster.len());
    }

    /// Property: player names are stored trimmed and blank names are rejected
    #[test]
    fn names_are_trimmed(name in name_strategy(), pad in " {0,3}") {
        let player = Player::new(format!("{pad}{name}{pad}"), Category::Batsman).unwrap();
        prop_assert_eq!(player.name, name.trim());
        prop_assert_eq!(Player::new(&pad, Category::Bowler), Err(RosterError::EmptyName));
    }

    /// Property: every player can be found by its exact name and by its id
    #[test]
    fn find_by_name_and_id(categories in prop::collection::vec(category_strategy(), 1..15)) {
        let roster = Roster::from_players(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| Player::new(format!("Player {i:02}"), *c).unwrap()),
        )
        .unwrap();
        for player in roster.iter() {
            prop_assert_eq!(roster.find(&player.name).unwrap().id, player.id);
            prop_assert_eq!(roster.find(&player.id.to_string()).unwrap().id, player.id);
            prop_assert_eq!(roster.find(&player.name.to_uppercase()).unwrap().id, player.id);
        }
    }

    /// Property: a roster survives a JSON round trip through its stored form
    #[test]
    fn stored_form_round_trips(categories in prop::collection::vec(category_strategy(), 0..10)) {
        let roster = Roster::from_players(
            categories
                .iter()
                .enumerate()
                .map(|(i, c)| Player::new(format!("P{i}"), *c).unwrap()),
        )
        .unwrap();
        let json = serde_json::to_string(&roster).unwrap();
        let parsed: Roster = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, roster);
    }
}

#[test]
fn stored_duplicates_are_rejected() {
    let player = Player::new("Gill", Category::Batsman).unwrap();
    let json = serde_json::to_string(&vec![player.clone(), player]).unwrap();
    assert!(serde_json::from_str::<Roster>(&json).is_err());
}
