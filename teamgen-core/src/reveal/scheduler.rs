//! Timer schedulers for the reveal sequencer
//!
//! The sequencer never sleeps on its own. It asks a [`Scheduler`] to arm
//! one-shot timers and is handed the resulting [`TimerEvent`]s back through
//! [`RevealSequencer::fire`](super::RevealSequencer::fire). Tests drive it
//! with [`VirtualScheduler`]; the CLI uses [`TokioScheduler`].

use std::collections::BTreeMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// What a timer means to the sequencer when it fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// Reveal the next player of each team
    Tick,
    /// Final settle delay elapsed; the sequence completes
    Settle,
}

/// A fired timer.
///
/// `generation` identifies the `start` call that armed it so events from a
/// cancelled run can be told apart from live ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerEvent {
    /// Run that armed the timer
    pub generation: u64,
    /// Meaning of the timer
    pub kind: TimerKind,
}

/// Arms and cancels one-shot timers on behalf of the sequencer
pub trait Scheduler {
    /// Arms a timer that delivers `event` after `delay`
    fn schedule(&mut self, delay: Duration, event: TimerEvent);

    /// Cancels every armed timer; none of them may be delivered afterwards
    fn cancel_all(&mut self);
}

/// Scheduler driven by a synthetic clock.
///
/// Nothing happens until the owner pops due events, which makes reveal
/// timing fully deterministic in tests.
#[derive(Debug, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_seq: u64,
    queue: BTreeMap<(Duration, u64), TimerEvent>,
}

impl VirtualScheduler {
    /// Creates a scheduler at time zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current synthetic time
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.now
    }

    /// Number of armed timers
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Deadline of the earliest armed timer
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue.keys().next().map(|(at, _)| *at)
    }

    /// Pops the earliest timer due at or before `until`, moving the clock to
    /// its deadline
    pub fn pop_due(&mut self, until: Duration) -> Option<TimerEvent> {
        let (&(at, seq), _) = self.queue.iter().next()?;
        if at > until {
            return None;
        }
        self.now = self.now.max(at);
        self.queue.remove(&(at, seq))
    }

    /// Moves the clock forward without firing anything
    pub fn set_now(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.insert((self.now + delay, seq), event);
    }

    fn cancel_all(&mut self) {
        self.queue.clear();
    }
}

/// Scheduler backed by tokio timers.
///
/// Each armed timer is a task that sleeps and then sends its event on an
/// unbounded channel. Must be used from within a tokio runtime.
#[derive(Debug)]
pub struct TokioScheduler {
    tx: mpsc::UnboundedSender<TimerEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl TokioScheduler {
    /// Creates a scheduler and the receiver its events arrive on
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<TimerEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                tx,
                tasks: Vec::new(),
            },
            rx,
        )
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        self.tasks.retain(|task| !task.is_finished());
        let tx = self.tx.clone();
        self.tasks.push(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the run was torn down
            let _ = tx.send(event);
        }));
    }

    fn cancel_all(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
