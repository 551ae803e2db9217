//! Staggered reveal of divided teams
//!
//! After the balancer has produced the final teams, the reveal shows them
//! one player per team at a fixed cadence, then waits a short settle delay
//! before signaling completion exactly once.

mod driver;
pub mod scheduler;
mod sequencer;

pub use driver::{RevealObserver, RevealOutcome, run_reveal};
pub use scheduler::{Scheduler, TimerEvent, TimerKind, TokioScheduler, VirtualScheduler};
pub use sequencer::{
    DEFAULT_SETTLE_DELAY_MS, DEFAULT_TICK_INTERVAL_MS, RevealSequencer, RevealSnapshot,
    RevealState, RevealTiming, RevealUpdate,
};
