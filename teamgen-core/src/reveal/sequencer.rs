//! Staggered reveal state machine

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RevealError;
use crate::models::{Player, TeamAssignment, TeamSide};

use super::scheduler::{Scheduler, TimerEvent, TimerKind, VirtualScheduler};

/// Default delay between two reveal steps in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 300;

/// Default delay between the last reveal and completion in milliseconds
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 500;

/// Reveal cadence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Delay between reveal steps
    pub tick_interval: Duration,
    /// Delay after the last step before completion is signaled
    pub settle_delay: Duration,
}

impl Default for RevealTiming {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl RevealTiming {
    /// Creates a timing from millisecond values
    #[must_use]
    pub const fn from_millis(tick_interval_ms: u64, settle_delay_ms: u64) -> Self {
        Self {
            tick_interval: Duration::from_millis(tick_interval_ms),
            settle_delay: Duration::from_millis(settle_delay_ms),
        }
    }

    /// Timing that reveals everything without waiting
    #[must_use]
    pub const fn instant() -> Self {
        Self::from_millis(0, 0)
    }
}

/// Lifecycle state of a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevealState {
    /// Nothing in progress
    #[default]
    Idle,
    /// Players are being revealed
    Running,
    /// Every player is revealed and completion has been signaled
    Complete,
}

/// Revealed and pending players of both teams at one instant.
///
/// For each team `revealed ++ pending` equals the final roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevealSnapshot {
    /// Players of team A shown so far
    pub revealed_a: Vec<Player>,
    /// Players of team B shown so far
    pub revealed_b: Vec<Player>,
    /// Players of team A still hidden
    pub pending_a: Vec<Player>,
    /// Players of team B still hidden
    pub pending_b: Vec<Player>,
}

impl RevealSnapshot {
    /// Revealed players of one side
    #[must_use]
    pub fn revealed(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::A => &self.revealed_a,
            TeamSide::B => &self.revealed_b,
        }
    }

    /// Pending players of one side
    #[must_use]
    pub fn pending(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::A => &self.pending_a,
            TeamSide::B => &self.pending_b,
        }
    }

    /// `(revealed, total)` for one side
    #[must_use]
    pub fn progress(&self, side: TeamSide) -> (usize, usize) {
        let revealed = self.revealed(side).len();
        (revealed, revealed + self.pending(side).len())
    }

    /// Returns true once both pending lists are empty
    #[must_use]
    pub fn is_drained(&self) -> bool {
        self.pending_a.is_empty() && self.pending_b.is_empty()
    }
}

/// Output of a fired timer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealUpdate {
    /// One reveal step happened
    Progress(RevealSnapshot),
    /// The reveal finished; carries the final teams
    Complete(TeamAssignment),
}

#[derive(Debug, Default)]
struct TeamReveal {
    revealed: Vec<Player>,
    pending: VecDeque<Player>,
}

impl TeamReveal {
    fn new(team: &[Player]) -> Self {
        Self {
            revealed: Vec::with_capacity(team.len()),
            pending: team.iter().cloned().collect(),
        }
    }

    fn step(&mut self) {
        if let Some(next) = self.pending.pop_front() {
            self.revealed.push(next);
        }
    }
}

/// Reveals two teams one player per team per tick.
///
/// ```text
/// Idle --start--> Running --last tick + settle--> Complete
///   ^                |                               |
///   +-----cancel-----+-------------cancel------------+
/// ```
#[derive(Debug)]
pub struct RevealSequencer<S: Scheduler> {
    scheduler: S,
    timing: RevealTiming,
    state: RevealState,
    generation: u64,
    team_a: TeamReveal,
    team_b: TeamReveal,
    settle_armed: bool,
}

impl<S: Scheduler> RevealSequencer<S> {
    /// Creates an idle sequencer
    #[must_use]
    pub fn new(scheduler: S, timing: RevealTiming) -> Self {
        Self {
            scheduler,
            timing,
            state: RevealState::Idle,
            generation: 0,
            team_a: TeamReveal::default(),
            team_b: TeamReveal::default(),
            settle_armed: false,
        }
    }

    /// Starts revealing the given teams.
    ///
    /// # Errors
    ///
    /// Returns [`RevealError::AlreadyRunning`] while a reveal is in progress
    /// and [`RevealError::NotReset`] after completion until [`cancel`] is
    /// called. State is unchanged on error.
    ///
    /// [`cancel`]: Self::cancel
    pub fn start(&mut self, teams: &TeamAssignment) -> Result<(), RevealError> {
        match self.state {
            RevealState::Running => return Err(RevealError::AlreadyRunning),
            RevealState::Complete => return Err(RevealError::NotReset),
            RevealState::Idle => {}
        }

        self.generation += 1;
        self.team_a = TeamReveal::new(&teams.team_a);
        self.team_b = TeamReveal::new(&teams.team_b);
        self.settle_armed = false;
        self.state = RevealState::Running;

        tracing::debug!(
            generation = self.generation,
            team_a = teams.team_a.len(),
            team_b = teams.team_b.len(),
            "Reveal started"
        );

        if self.is_drained() {
            self.arm(TimerKind::Settle);
        } else {
            self.arm(TimerKind::Tick);
        }
        Ok(())
    }

    /// Stops the reveal and discards all state.
    ///
    /// Every armed timer is cancelled and no completion is signaled. A no-op
    /// when idle.
    pub fn cancel(&mut self) {
        if self.state == RevealState::Idle {
            return;
        }
        self.scheduler.cancel_all();
        // Bump so that any event already in flight is recognized as stale
        self.generation += 1;
        self.team_a = TeamReveal::default();
        self.team_b = TeamReveal::default();
        self.settle_armed = false;
        self.state = RevealState::Idle;
        tracing::debug!("Reveal cancelled");
    }

    /// Handles a fired timer.
    ///
    /// Returns `None` for stale events from a cancelled or finished run.
    pub fn fire(&mut self, event: TimerEvent) -> Option<RevealUpdate> {
        if event.generation != self.generation || self.state != RevealState::Running {
            tracing::trace!(generation = event.generation, "Ignoring stale timer");
            return None;
        }

        match event.kind {
            TimerKind::Tick => {
                self.team_a.step();
                self.team_b.step();
                if self.is_drained() {
                    self.arm(TimerKind::Settle);
                } else {
                    self.arm(TimerKind::Tick);
                }
                Some(RevealUpdate::Progress(self.snapshot()))
            }
            TimerKind::Settle => {
                self.state = RevealState::Complete;
                tracing::debug!(generation = self.generation, "Reveal complete");
                Some(RevealUpdate::Complete(TeamAssignment::new(
                    self.team_a.revealed.clone(),
                    self.team_b.revealed.clone(),
                )))
            }
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub const fn state(&self) -> RevealState {
        self.state
    }

    /// Current revealed and pending players
    #[must_use]
    pub fn snapshot(&self) -> RevealSnapshot {
        RevealSnapshot {
            revealed_a: self.team_a.revealed.clone(),
            revealed_b: self.team_b.revealed.clone(),
            pending_a: self.team_a.pending.iter().cloned().collect(),
            pending_b: self.team_b.pending.iter().cloned().collect(),
        }
    }

    /// Reveal cadence
    #[must_use]
    pub const fn timing(&self) -> RevealTiming {
        self.timing
    }

    /// Scheduler owned by this sequencer
    #[must_use]
    pub const fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn is_drained(&self) -> bool {
        self.team_a.pending.is_empty() && self.team_b.pending.is_empty()
    }

    fn arm(&mut self, kind: TimerKind) {
        let delay = match kind {
            TimerKind::Tick => self.timing.tick_interval,
            TimerKind::Settle => {
                if self.settle_armed {
                    return;
                }
                self.settle_armed = true;
                self.timing.settle_delay
            }
        };
        self.scheduler.schedule(
            delay,
            TimerEvent {
                generation: self.generation,
                kind,
            },
        );
    }
}

impl RevealSequencer<VirtualScheduler> {
    /// Sequencer on a synthetic clock
    #[must_use]
    pub fn virtual_clock(timing: RevealTiming) -> Self {
        Self::new(VirtualScheduler::new(), timing)
    }

    /// Advances the synthetic clock, firing every timer that falls due.
    ///
    /// Timers armed by fired timers are honored within the same call if they
    /// fall inside the window.
    pub fn advance(&mut self, by: Duration) -> Vec<RevealUpdate> {
        let until = self.scheduler.now() + by;
        let mut updates = Vec::new();
        while let Some(event) = self.scheduler.pop_due(until) {
            if let Some(update) = self.fire(event) {
                updates.push(update);
            }
        }
        self.scheduler.set_now(until);
        updates
    }

    /// Runs the reveal to completion and returns every update in order
    pub fn run_to_completion(&mut self) -> Vec<RevealUpdate> {
        let mut updates = Vec::new();
        while let Some(deadline) = self.scheduler.next_deadline() {
            let by = deadline.saturating_sub(self.scheduler.now());
            updates.extend(self.advance(by));
        }
        updates
    }
}
