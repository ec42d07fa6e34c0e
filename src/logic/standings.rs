//! Standings: rank players by record.

use crate::models::{Player, Standing};

/// Rank players by wins (descending), then opponent wins (descending).
///
/// The sort is stable, so players still tied keep their input (registration) order.
pub fn compute_standings(players: &[Player]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players.iter().map(Standing::from_player).collect();
    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then_with(|| b.opponent_wins.cmp(&a.opponent_wins))
    });
    standings
}
