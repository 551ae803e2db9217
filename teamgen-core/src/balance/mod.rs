//! Team balancer
//!
//! Splits a roster into two teams that differ in size by at most one and
//! spread each category across both sides. Captains, when given, are seeded
//! onto opposite teams before anyone else is placed.
//!
//! The procedure is:
//!
//! 1. Seed team A with the first captain and team B with the second.
//! 2. Shuffle every other player uniformly.
//! 3. Group the shuffled players by category (batsmen, bowlers, all-rounders)
//!    keeping the shuffled order inside each group.
//! 4. Walk each group in turn and give the next player to the smaller team.
//!    On a tie, even positions within the group go to A and odd ones to B.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{BalanceError, BalanceResult};
use crate::models::{CaptainPair, Category, Player, Roster, TeamAssignment};

/// Minimum number of players needed to form two teams
pub const MIN_PLAYERS: usize = 2;

/// Divides a roster into two balanced teams using the thread RNG.
///
/// # Errors
///
/// See [`balance_with_rng`].
pub fn balance(roster: &Roster, captains: Option<&CaptainPair>) -> BalanceResult<TeamAssignment> {
    balance_with_rng(roster, captains, &mut rand::thread_rng())
}

/// Divides a roster into two balanced teams with a caller-supplied RNG.
///
/// The same roster, captains and RNG state always produce the same
/// assignment.
///
/// # Errors
///
/// Returns [`BalanceError::InsufficientPlayers`] if the roster has fewer than
/// two players and [`BalanceError::InvalidCaptainSelection`] if a captain is
/// not in the roster. The roster is never modified.
pub fn balance_with_rng<R>(
    roster: &Roster,
    captains: Option<&CaptainPair>,
    rng: &mut R,
) -> BalanceResult<TeamAssignment>
where
    R: Rng + ?Sized,
{
    let _span = crate::trace_operation!(
        crate::tracing::span_names::BALANCE_EXECUTE,
        player_count = roster.len(),
        captains = captains.is_some()
    )
    .entered();

    if roster.len() < MIN_PLAYERS {
        return Err(BalanceError::InsufficientPlayers {
            count: roster.len(),
        });
    }

    let mut team_a = Vec::with_capacity(roster.len() / 2 + 1);
    let mut team_b = Vec::with_capacity(roster.len() / 2 + 1);

    if let Some(pair) = captains {
        pair.validate(roster)?;
        // validate() guarantees both lookups succeed
        if let (Some(first), Some(second)) = (roster.get(pair.first()), roster.get(pair.second()))
        {
            team_a.push(first.clone());
            team_b.push(second.clone());
        }
    }

    let mut pool: Vec<&Player> = roster
        .iter()
        .filter(|p| captains.is_none_or(|pair| !pair.contains(p.id)))
        .collect();
    pool.shuffle(rng);

    for category in Category::ALL {
        let group = pool.iter().filter(|p| p.category == category);
        for (index, player) in group.enumerate() {
            if pick_team_a(team_a.len(), team_b.len(), index) {
                team_a.push((*player).clone());
            } else {
                team_b.push((*player).clone());
            }
        }
    }

    tracing::debug!(
        team_a = team_a.len(),
        team_b = team_b.len(),
        "Teams balanced"
    );

    Ok(TeamAssignment::new(team_a, team_b))
}

/// Shortest team first; alternate by position within the group on a tie
const fn pick_team_a(len_a: usize, len_b: usize, index_in_group: usize) -> bool {
    len_a < len_b || (len_a == len_b && index_in_group % 2 == 0)
}
