//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use teamgen_core::export::ExportFormat;
use teamgen_core::models::Category;

use crate::util::{parse_category, parse_export_format};

/// `teamgen` command-line interface for dividing players into two teams
#[derive(Parser)]
#[command(name = "teamgen")]
#[command(author, version, about = "Cricket team generator")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(long, global = true, env = "TEAMGEN_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Log in with a display name
    #[command(about = "Log in with a display name (clears the working roster)")]
    Login {
        /// Display name; selects which saved players are used
        name: String,
    },

    /// Log out
    #[command(about = "Log out (clears the working roster)")]
    Logout,

    /// Show the logged-in user
    #[command(about = "Show the current display name")]
    Whoami,

    /// Add a new player to the roster
    #[command(about = "Add a new player to the working roster")]
    Add {
        /// Player name
        name: String,

        /// Skill category (batsman, bowler, all-rounder)
        #[arg(short, long, default_value = "batsman", value_parser = parse_category)]
        category: Category,

        /// Also save the player to your library (requires login)
        #[arg(short, long)]
        save: bool,
    },

    /// Add a saved player to the roster
    #[command(about = "Add a player from your saved library to the roster")]
    Pick {
        /// Saved player name or UUID
        name: String,
    },

    /// Remove a player from the roster
    #[command(about = "Remove a player from the working roster")]
    Remove {
        /// Player name or UUID
        player: String,
    },

    /// Edit a player
    #[command(about = "Rename or recategorize a player in the roster and library")]
    Edit {
        /// Player name or UUID
        player: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New category (batsman, bowler, all-rounder)
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,
    },

    /// Delete a player everywhere
    #[command(about = "Delete a player from the roster and your saved library")]
    Delete {
        /// Player name or UUID
        player: String,
    },

    /// Remove every player from the roster
    #[command(about = "Clear the working roster")]
    Clear,

    /// List the roster
    #[command(about = "List players in the working roster")]
    List {
        /// Output format for the player list
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Search saved players
    #[command(about = "Search your saved players by name")]
    Search {
        /// Case-insensitive name fragment; lists everything when omitted
        query: Option<String>,

        /// Only show players of this category
        #[arg(short, long, value_parser = parse_category)]
        category: Option<Category>,

        /// Output format for the results
        #[arg(short, long, default_value = "table", value_enum)]
        format: OutputFormat,
    },

    /// Divide the roster into two teams
    #[command(about = "Divide the roster into two balanced teams")]
    Divide {
        /// Captain name or UUID; give exactly two, or none
        #[arg(long = "captain", value_name = "PLAYER")]
        captains: Vec<String>,

        /// Seed for a reproducible division
        #[arg(long)]
        seed: Option<u64>,

        /// Show the teams at once instead of revealing them one by one
        #[arg(long)]
        no_animate: bool,

        /// Write the teams to this file or directory
        #[arg(short, long, value_name = "PATH")]
        export: Option<PathBuf>,

        /// Export format (text, markdown, json, svg); guessed from the file
        /// extension when omitted
        #[arg(long, value_parser = parse_export_format)]
        export_format: Option<ExportFormat>,
    },

    /// Manage configuration
    #[command(subcommand, about = "Show or create the configuration file")]
    Config(ConfigCommands),

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Print the configuration directory and effective settings
    Show,

    /// Write a default `config.toml`
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

/// Output format for player lists
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Aligned columns
    #[default]
    Table,
    /// JSON array of players
    Json,
    /// Comma-separated values
    Csv,
}
