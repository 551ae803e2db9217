//! `teamgen` Core Library
//!
//! This crate provides the core functionality for `teamgen`, a cricket team
//! generator: a roster of categorized players is divided into two balanced
//! teams, optionally anchored by two captains, and the result is revealed one
//! player at a time.
//!
//! # Crate Structure
//!
//! - [`models`] - Players, rosters, captain pairs and team assignments
//! - [`balance`] - Category-aware team division
//! - [`reveal`] - Staggered reveal state machine, schedulers and async driver
//! - [`store`] - Key-value persistence, session and per-user player library
//! - [`search`] - Player name filtering
//! - [`export`] - Text, Markdown, JSON and SVG renderers
//! - [`config`] - Application settings and configuration directory
//! - [`tracing`] - Structured logging setup and span names

#![warn(missing_docs)]

pub mod balance;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod reveal;
pub mod search;
pub mod store;
pub mod tracing;

pub use balance::{MIN_PLAYERS, balance, balance_with_rng};
pub use config::{AppSettings, ConfigManager};
pub use error::{
    BalanceError, BalanceResult, ConfigError, ConfigResult, ExportError, RevealError, RosterError,
    RosterResult, StoreError, StoreResult, TeamGenError,
};
pub use export::{ExportFormat, TeamsExport, export_to_file, render};
pub use models::{CaptainPair, Category, Player, PlayerId, Roster, TeamAssignment, TeamSide};
pub use reveal::{
    RevealObserver, RevealOutcome, RevealSequencer, RevealSnapshot, RevealState, RevealTiming,
    RevealUpdate, run_reveal,
};
pub use search::filter_players;
pub use store::{FileStore, KeyValueStore, MemoryStore, PlayerLibrary, Session, WorkingRoster};
