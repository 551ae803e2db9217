//! CLI error types and exit codes.

use teamgen_core::error::{
    BalanceError, ConfigError, ExportError, RevealError, RosterError, StoreError, TeamGenError,
};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, storage, export or I/O
    pub const GENERAL_ERROR: i32 = 1;
    /// Validation error - bad player data, captain selection, too few
    /// players, or a command that needs a login
    pub const VALIDATION_ERROR: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Store(String),

    /// Invalid player, roster or division input
    #[error("{0}")]
    Validation(String),

    /// Command needs a logged-in user
    #[error("Not logged in. Run `teamgen login <name>` first")]
    NotLoggedIn,

    /// Export error
    #[error("Export error: {0}")]
    Export(String),

    /// Reveal error
    #[error("Reveal error: {0}")]
    Reveal(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<RosterError> for CliError {
    fn from(err: RosterError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<BalanceError> for CliError {
    fn from(err: BalanceError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<RevealError> for CliError {
    fn from(err: RevealError) -> Self {
        Self::Reveal(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotLoggedIn => Self::NotLoggedIn,
            StoreError::EmptyUsername => Self::Validation(err.to_string()),
            StoreError::Io(_)
            | StoreError::Serialization(_)
            | StoreError::Corrupt { .. } => Self::Store(err.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ExportError> for CliError {
    fn from(err: ExportError) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<TeamGenError> for CliError {
    fn from(err: TeamGenError) -> Self {
        match err {
            TeamGenError::Roster(e) => e.into(),
            TeamGenError::Balance(e) => e.into(),
            TeamGenError::Reveal(e) => e.into(),
            TeamGenError::Store(e) => e.into(),
            TeamGenError::Config(e) => e.into(),
            TeamGenError::Export(e) => e.into(),
        }
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    ///
    /// Exit codes:
    /// - 0: Success (not an error)
    /// - 1: General error (configuration, storage, export, reveal, IO)
    /// - 2: Validation error (player data, captains, roster size, login)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) | Self::NotLoggedIn => exit_codes::VALIDATION_ERROR,
            Self::Config(_) | Self::Store(_) | Self::Export(_) | Self::Reveal(_) | Self::Io(_) => {
                exit_codes::GENERAL_ERROR
            }
        }
    }
}
