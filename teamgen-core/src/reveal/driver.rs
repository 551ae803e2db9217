//! Async reveal driver on tokio timers

use std::future::Future;

use tracing::Instrument;

use crate::models::TeamAssignment;

use super::scheduler::TokioScheduler;
use super::sequencer::{RevealSequencer, RevealSnapshot, RevealTiming, RevealUpdate};

/// Receives reveal progress and completion
pub trait RevealObserver {
    /// Called after every reveal step
    fn on_progress(&mut self, snapshot: &RevealSnapshot);

    /// Called exactly once when every player is revealed and the settle
    /// delay has elapsed
    fn on_complete(&mut self, teams: &TeamAssignment);
}

/// How a driven reveal ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Every player was revealed and completion was signaled
    Completed,
    /// The cancellation future resolved first
    Cancelled,
}

/// Reveals `teams` on real timers, reporting to `observer`.
///
/// The reveal is cancelled as soon as `cancel` resolves; after that the
/// observer receives nothing further.
pub async fn run_reveal<O, C>(
    teams: &TeamAssignment,
    timing: RevealTiming,
    observer: &mut O,
    cancel: C,
) -> RevealOutcome
where
    O: RevealObserver + ?Sized,
    C: Future<Output = ()>,
{
    let span = crate::trace_operation!(
        crate::tracing::span_names::REVEAL_RUN,
        team_a = teams.team_a.len(),
        team_b = teams.team_b.len()
    );
    drive(teams, timing, observer, cancel).instrument(span).await
}

async fn drive<O, C>(
    teams: &TeamAssignment,
    timing: RevealTiming,
    observer: &mut O,
    cancel: C,
) -> RevealOutcome
where
    O: RevealObserver + ?Sized,
    C: Future<Output = ()>,
{
    let (scheduler, mut events) = TokioScheduler::new();
    let mut sequencer = RevealSequencer::new(scheduler, timing);

    if let Err(e) = sequencer.start(teams) {
        // A fresh sequencer is always idle
        tracing::error!(%e, "Failed to start reveal");
        return RevealOutcome::Cancelled;
    }

    tokio::pin!(cancel);

    loop {
        tokio::select! {
            biased;
            () = &mut cancel => {
                sequencer.cancel();
                tracing::info!("Reveal cancelled by caller");
                return RevealOutcome::Cancelled;
            }
            event = events.recv() => {
                let Some(event) = event else {
                    return RevealOutcome::Cancelled;
                };
                match sequencer.fire(event) {
                    Some(RevealUpdate::Progress(snapshot)) => observer.on_progress(&snapshot),
                    Some(RevealUpdate::Complete(final_teams)) => {
                        observer.on_complete(&final_teams);
                        return RevealOutcome::Completed;
                    }
                    None => {}
                }
            }
        }
    }
}
