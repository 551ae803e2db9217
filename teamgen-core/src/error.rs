//! Error types for `teamgen`
//!
//! Each subsystem has its own error enum; [`TeamGenError`] aggregates them
//! for callers that want a single error type.

use thiserror::Error;

use crate::models::PlayerId;

/// Errors raised while building or editing a roster
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Player name is empty after trimming
    #[error("player name cannot be empty")]
    EmptyName,

    /// Category string is not one of batsman, bowler, all-rounder
    #[error("unknown category: {0} (expected batsman, bowler or all-rounder)")]
    UnknownCategory(String),

    /// Another player in the roster already has this name
    #[error("a player named '{0}' is already in the roster")]
    DuplicateName(String),

    /// Another player in the roster already has this id
    #[error("a player with id {0} is already in the roster")]
    DuplicateId(PlayerId),

    /// No player matched the lookup
    #[error("player not found: {0}")]
    PlayerNotFound(String),

    /// More than one player matched a prefix lookup
    #[error("ambiguous player '{query}', matches: {}", matches.join(", "))]
    AmbiguousPlayer {
        /// The lookup string
        query: String,
        /// Names of every matching player
        matches: Vec<String>,
    },
}

/// Errors raised by the team balancer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BalanceError {
    /// Fewer than two players to divide
    #[error("at least 2 players are needed to divide teams (have {count})")]
    InsufficientPlayers {
        /// Number of players in the roster
        count: usize,
    },

    /// Captain selection is not exactly two distinct roster members
    #[error("invalid captain selection: {0}")]
    InvalidCaptainSelection(String),
}

/// Errors raised by the reveal sequencer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RevealError {
    /// `start` was called while a reveal is in progress
    #[error("a reveal is already running")]
    AlreadyRunning,

    /// `start` was called on a completed sequence that was not reset
    #[error("the previous reveal has completed; cancel it before starting again")]
    NotReset,
}

/// Errors raised by key-value stores and the data kept in them
#[derive(Debug, Error)]
pub enum StoreError {
    /// Failed to read or write the backing file
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode a value
    #[error("failed to serialize value: {0}")]
    Serialization(String),

    /// A stored value could not be decoded
    #[error("stored value for '{key}' is corrupt: {reason}")]
    Corrupt {
        /// Store key holding the bad value
        key: String,
        /// Decoder message
        reason: String,
    },

    /// Login attempted with an empty display name
    #[error("username cannot be empty")]
    EmptyUsername,

    /// Operation needs a logged-in user
    #[error("not logged in")]
    NotLoggedIn,
}

/// Errors raised while loading or saving configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read or write a configuration file
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse `config.toml`
    #[error("failed to parse config: {0}")]
    Parse(String),

    /// Failed to serialize settings
    #[error("failed to serialize config: {0}")]
    Serialize(String),

    /// The platform has no configuration directory
    #[error("could not determine a configuration directory")]
    NoConfigDir,
}

/// Errors raised while exporting teams
#[derive(Debug, Error)]
pub enum ExportError {
    /// Failed to write the output file
    #[error("export I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to encode the assignment
    #[error("failed to serialize teams: {0}")]
    Serialization(String),
}

/// Top-level error type for `teamgen`
#[derive(Debug, Error)]
pub enum TeamGenError {
    /// Roster error
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// Balancer error
    #[error(transparent)]
    Balance(#[from] BalanceError),

    /// Sequencer error
    #[error(transparent)]
    Reveal(#[from] RevealError),

    /// Storage error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Export error
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Result alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;
/// Result alias for balancer operations
pub type BalanceResult<T> = Result<T, BalanceError>;
/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
/// Result alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
