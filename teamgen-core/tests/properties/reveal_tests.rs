//! Property tests for the reveal sequencer

use std::time::Duration;

use proptest::prelude::*;
use teamgen_core::models::{Category, Player, TeamAssignment, TeamSide};
use teamgen_core::reveal::{RevealSequencer, RevealState, RevealTiming, RevealUpdate};

const TICK_MS: u64 = 300;
const SETTLE_MS: u64 = 500;

fn timing() -> RevealTiming {
    RevealTiming::from_millis(TICK_MS, SETTLE_MS)
}

fn team(prefix: &str, len: usize) -> Vec<Player> {
    (0..len)
        .map(|i| Player::new(format!("{prefix}{i}"), Category::ALL[i % 3]).unwrap())
        .collect()
}

fn teams_strategy() -> impl Strategy<Value = TeamAssignment> {
    (0usize..12, 0usize..12).prop_map(|(a, b)| TeamAssignment::new(team("A", a), team("B", b)))
}

fn concat(revealed: &[Player], pending: &[Player]) -> Vec<Player> {
    revealed.iter().chain(pending).cloned().collect()
}

proptest! {
    /// Property: one progress step per player of the longer team, then a
    /// single completion carrying the final teams
    #[test]
    fn reveal_runs_to_single_completion(teams in teams_strategy()) {
        let mut sequencer = RevealSequencer::virtual_clock(timing());
        sequencer.start(&teams).unwrap();
        let updates = sequencer.run_to_completion();

        let steps = teams.team_a.len().max(teams.team_b.len());
        prop_assert_eq!(updates.len(), steps + 1);

        for (tick, update) in updates[..steps].iter().enumerate() {
            let RevealUpdate::Progress(snapshot) = update else {
                return Err(TestCaseError::fail("expected progress before completion"));
            };
            for side in TeamSide::BOTH {
                let full = teams.team(side);
                prop_assert_eq!(snapshot.revealed(side).len(), (tick + 1).min(full.len()));
                prop_assert_eq!(concat(snapshot.revealed(side), snapshot.pending(side)), full.to_vec());
            }
        }

        prop_assert_eq!(updates.last(), Some(&RevealUpdate::Complete(teams.clone())));
        prop_assert_eq!(sequencer.state(), RevealState::Complete);
        prop_assert!(sequencer.run_to_completion().is_empty());
    }

    /// Property: completion arrives exactly at the last tick plus the settle
    /// delay
    #[test]
    fn completion_waits_for_settle(teams in teams_strategy()) {
        let mut sequencer = RevealSequencer::virtual_clock(timing());
        sequencer.start(&teams).unwrap();

        let steps = u64::try_from(teams.team_a.len().max(teams.team_b.len())).unwrap();
        let done_at = steps * TICK_MS + SETTLE_MS;

        let early = sequencer.advance(Duration::from_millis(done_at - 1));
        prop_assert!(early.iter().all(|u| matches!(u, RevealUpdate::Progress(_))));
        prop_assert_eq!(sequencer.state(), RevealState::Running);

        let last = sequencer.advance(Duration::from_millis(1));
        prop_assert_eq!(last.len(), 1);
        prop_assert!(matches!(last[0], RevealUpdate::Complete(_)));
    }

    /// Property: cancelling mid-reveal stops every further update
    #[test]
    fn cancel_silences_reveal(teams in teams_strategy(), ticks in 0u64..12) {
        let mut sequencer = RevealSequencer::virtual_clock(timing());
        sequencer.start(&teams).unwrap();
        sequencer.advance(Duration::from_millis(ticks * TICK_MS));
        let was_running = sequencer.state() == RevealState::Running;

        sequencer.cancel();
        prop_assert_eq!(sequencer.state(), RevealState::Idle);
        prop_assert!(sequencer.snapshot().is_drained());
        if was_running {
            prop_assert!(sequencer.run_to_completion().is_empty());
        }
    }

    /// Property: a cancelled sequencer can reveal new teams from scratch
    #[test]
    fn restart_after_cancel(first in teams_strategy(), second in teams_strategy(), ticks in 0u64..5) {
        let mut sequencer = RevealSequencer::virtual_clock(timing());
        sequencer.start(&first).unwrap();
        sequencer.advance(Duration::from_millis(ticks * TICK_MS));
        sequencer.cancel();

        sequencer.start(&second).unwrap();
        let updates = sequencer.run_to_completion();
        let completions: Vec<_> = updates
            .iter()
            .filter(|u| matches!(u, RevealUpdate::Complete(_)))
            .collect();
        let expected = RevealUpdate::Complete(second.clone());
        prop_assert_eq!(completions, vec![&expected]);
    }
}
