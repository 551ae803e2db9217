//! Divide roster command.

use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use teamgen_core::balance::{balance, balance_with_rng};
use teamgen_core::export::{ExportFormat, export_to_file, render};
use teamgen_core::models::{CaptainPair, PlayerId, Roster, TeamAssignment, TeamSide};
use teamgen_core::reveal::{RevealObserver, RevealOutcome, RevealSnapshot, run_reveal};

use crate::error::CliError;
use crate::util::{create_config_manager, load_roster, save_roster, status};

const CELEBRATION: &str = "🎉 🏏 Teams are ready! 🏏 🎉";

/// Parameters for the `divide` command
pub struct DivideParams<'a> {
    pub captains: &'a [String],
    pub seed: Option<u64>,
    pub animate: bool,
    pub quiet: bool,
    pub export: Option<&'a Path>,
    pub export_format: Option<ExportFormat>,
}

/// Divide command handler
pub fn cmd_divide(config_path: Option<&Path>, params: DivideParams<'_>) -> Result<(), CliError> {
    let config_manager = create_config_manager(config_path)?;
    let settings = config_manager.load_settings()?;
    let mut store = config_manager.open_store()?;
    let mut roster = load_roster(&mut store)?;

    let captains = resolve_captains(&roster, params.captains)?;
    match &captains {
        Some(pair) => roster.mark_captains(pair),
        None => roster.clear_captains(),
    }

    let teams = match params.seed {
        Some(seed) => {
            balance_with_rng(&roster, captains.as_ref(), &mut StdRng::seed_from_u64(seed))?
        }
        None => balance(&roster, captains.as_ref())?,
    };
    save_roster(&mut store, &roster)?;

    if params.animate && settings.reveal.animate {
        let runtime = tokio::runtime::Runtime::new()?;
        let mut reveal = TerminalReveal::default();
        println!("Revealing teams... (Ctrl-C to stop)");
        let outcome = runtime.block_on(run_reveal(
            &teams,
            settings.reveal.timing(),
            &mut reveal,
            interrupted(),
        ));
        if outcome == RevealOutcome::Cancelled {
            eprintln!("Reveal cancelled");
            return Ok(());
        }
        println!();
    }

    println!("{}", render(&teams, ExportFormat::Text)?.trim_end());
    if !params.quiet {
        println!();
        println!("{CELEBRATION}");
    }

    if let Some(path) = params.export {
        let format = match params.export_format {
            Some(format) => format,
            None => match ExportFormat::from_path(path) {
                Some(format) => format,
                None => settings.export.format()?,
            },
        };
        let target = if path.is_dir() {
            path.join(format.default_file_name())
        } else {
            path.to_path_buf()
        };
        export_to_file(&teams, format, &target)?;
        status(
            params.quiet,
            format_args!("Exported teams to {} ({format})", target.display()),
        );
    }

    Ok(())
}

/// Resolves `--captain` arguments; none means no captains
fn resolve_captains(roster: &Roster, names: &[String]) -> Result<Option<CaptainPair>, CliError> {
    if names.is_empty() {
        return Ok(None);
    }
    let ids = names
        .iter()
        .map(|name| roster.find(name).map(|p| p.id))
        .collect::<Result<Vec<PlayerId>, _>>()?;
    let pair = CaptainPair::from_ids(&ids)?;
    pair.validate(roster)?;
    Ok(Some(pair))
}

/// Resolves on Ctrl-C; never resolves if the handler cannot be installed
async fn interrupted() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(%e, "Ctrl-C handler unavailable");
        std::future::pending::<()>().await;
    }
}

/// Prints each newly revealed player
#[derive(Debug, Default)]
struct TerminalReveal {
    shown_a: usize,
    shown_b: usize,
}

impl TerminalReveal {
    fn new_lines(&mut self, snapshot: &RevealSnapshot) -> Vec<String> {
        let mut lines = Vec::new();
        for side in TeamSide::BOTH {
            let shown = match side {
                TeamSide::A => &mut self.shown_a,
                TeamSide::B => &mut self.shown_b,
            };
            let revealed = snapshot.revealed(side);
            let (_, total) = snapshot.progress(side);
            for (index, player) in revealed.iter().enumerate().skip(*shown) {
                lines.push(format!(
                    "  {} [{}/{total}] {}",
                    side.title(),
                    index + 1,
                    player.display_label()
                ));
            }
            *shown = revealed.len();
        }
        lines
    }
}

impl RevealObserver for TerminalReveal {
    fn on_progress(&mut self, snapshot: &RevealSnapshot) {
        for line in self.new_lines(snapshot) {
            println!("{line}");
        }
    }

    fn on_complete(&mut self, teams: &TeamAssignment) {
        tracing::debug!(players = teams.total_len(), "Reveal finished");
    }
}
