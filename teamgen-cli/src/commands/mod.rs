//! Command handler modules for the CLI.

mod add;
mod completions;
mod config;
mod delete;
mod divide;
mod edit;
mod list;
mod pick;
mod remove;
mod search;
mod session;

use std::path::Path;

use crate::cli::{Commands, ConfigCommands};
use crate::error::CliError;

/// Dispatch a CLI command to the appropriate handler.
pub fn dispatch(config_path: Option<&Path>, quiet: bool, command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Login { name } => session::cmd_login(config_path, quiet, &name),
        Commands::Logout => session::cmd_logout(config_path, quiet),
        Commands::Whoami => session::cmd_whoami(config_path),
        Commands::Add {
            name,
            category,
            save,
        } => add::cmd_add(config_path, quiet, &name, category, save),
        Commands::Pick { name } => pick::cmd_pick(config_path, quiet, &name),
        Commands::Remove { player } => remove::cmd_remove(config_path, quiet, &player),
        Commands::Edit {
            player,
            name,
            category,
        } => edit::cmd_edit(config_path, quiet, &player, name.as_deref(), category),
        Commands::Delete { player } => delete::cmd_delete(config_path, quiet, &player),
        Commands::Clear => remove::cmd_clear(config_path, quiet),
        Commands::List { format } => list::cmd_list(config_path, format),
        Commands::Search {
            query,
            category,
            format,
        } => search::cmd_search(config_path, query.as_deref(), category, format),
        Commands::Divide {
            captains,
            seed,
            no_animate,
            export,
            export_format,
        } => divide::cmd_divide(
            config_path,
            divide::DivideParams {
                captains: &captains,
                seed,
                animate: !no_animate && !quiet,
                quiet,
                export: export.as_deref(),
                export_format,
            },
        ),
        Commands::Config(ConfigCommands::Show) => config::cmd_config_show(config_path),
        Commands::Config(ConfigCommands::Init { force }) => {
            config::cmd_config_init(config_path, quiet, force)
        }
        Commands::Completions { shell } => completions::cmd_completions(shell),
    }
}
