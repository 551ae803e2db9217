//! Core data models: players, rosters and team assignments

mod player;
mod roster;
mod team;

pub use player::{Category, Player, PlayerId};
pub use roster::Roster;
pub use team::{CaptainPair, TeamAssignment, TeamSide};
