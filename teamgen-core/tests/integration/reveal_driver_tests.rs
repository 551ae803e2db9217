//! Async reveal driver on tokio timers

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use teamgen_core::balance::balance_with_rng;
use teamgen_core::models::{Category, Player, Roster, TeamAssignment, TeamSide};
use teamgen_core::reveal::{
    RevealObserver, RevealOutcome, RevealSnapshot, RevealTiming, run_reveal,
};

#[derive(Default)]
struct Recorder {
    progress: Vec<(usize, usize)>,
    completed: Option<TeamAssignment>,
    elapsed_at_complete: Option<Duration>,
    started: Option<tokio::time::Instant>,
}

impl RevealObserver for Recorder {
    fn on_progress(&mut self, snapshot: &RevealSnapshot) {
        self.progress.push((
            snapshot.revealed(TeamSide::A).len(),
            snapshot.revealed(TeamSide::B).len(),
        ));
    }

    fn on_complete(&mut self, teams: &TeamAssignment) {
        assert!(self.completed.is_none(), "completion signaled twice");
        self.completed = Some(teams.clone());
        self.elapsed_at_complete = self.started.map(|s| s.elapsed());
    }
}

fn roster(len: usize) -> Roster {
    Roster::from_players(
        (0..len).map(|i| Player::new(format!("P{i}"), Category::ALL[i % 3]).unwrap()),
    )
    .unwrap()
}

#[tokio::test(start_paused = true)]
async fn balanced_teams_are_revealed_on_schedule() {
    let teams = balance_with_rng(&roster(7), None, &mut StdRng::seed_from_u64(5)).unwrap();
    let mut recorder = Recorder {
        started: Some(tokio::time::Instant::now()),
        ..Recorder::default()
    };

    let outcome = run_reveal(
        &teams,
        RevealTiming::from_millis(300, 500),
        &mut recorder,
        std::future::pending(),
    )
    .await;

    assert_eq!(outcome, RevealOutcome::Completed);
    // Three batsmen, two bowlers, two all-rounders: B ends up with four
    assert_eq!(recorder.progress, vec![(1, 1), (2, 2), (3, 3), (3, 4)]);
    assert_eq!(recorder.completed, Some(teams));

    let elapsed = recorder.elapsed_at_complete.unwrap();
    let expected = Duration::from_millis(4 * 300 + 500);
    assert!(elapsed >= expected, "completed early: {elapsed:?}");
    assert!(elapsed < expected + Duration::from_millis(20), "completed late: {elapsed:?}");
}

#[tokio::test(start_paused = true)]
async fn cancel_before_first_tick_reveals_nothing() {
    let teams = balance_with_rng(&roster(4), None, &mut StdRng::seed_from_u64(1)).unwrap();
    let mut recorder = Recorder::default();

    let outcome = run_reveal(
        &teams,
        RevealTiming::default(),
        &mut recorder,
        tokio::time::sleep(Duration::from_millis(100)),
    )
    .await;

    assert_eq!(outcome, RevealOutcome::Cancelled);
    assert!(recorder.progress.is_empty());
    assert!(recorder.completed.is_none());
}

#[tokio::test(start_paused = true)]
async fn dyn_observer_is_supported() {
    let teams = TeamAssignment::new(Vec::new(), Vec::new());
    let mut recorder = Recorder::default();
    let observer: &mut dyn RevealObserver = &mut recorder;

    let outcome = run_reveal(&teams, RevealTiming::instant(), observer, std::future::pending()).await;

    assert_eq!(outcome, RevealOutcome::Completed);
    assert!(recorder.progress.is_empty());
    assert_eq!(recorder.completed, Some(teams));
}
