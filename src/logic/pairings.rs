//! Swiss pairing: bye selection, adjacent pairing, single-swap rematch avoidance.

use crate::models::{Pairing, Standing};
use crate::repository::{Repository, RepositoryError};

/// Pair the next round from ranked `standings`.
///
/// 1. Odd field: one player sits out with a bye (see [`select_bye`]); that pairing comes first.
/// 2. Remaining players are paired two at a time in rank order.
/// 3. If a pair has met before and a player is ranked just below them, the second player
///    trades places with that next player. Only one swap is tried; a rematch further down
///    is accepted as-is.
pub fn compute_pairings<R>(standings: &[Standing], repo: &R) -> Result<Vec<Pairing>, RepositoryError>
where
    R: Repository + ?Sized,
{
    let mut remaining: Vec<&Standing> = standings.iter().collect();
    let mut pairings = Vec::with_capacity(remaining.len() / 2 + 1);

    if remaining.len() % 2 == 1 {
        let idx = select_bye(&remaining, repo)?;
        let bye = remaining.remove(idx);
        pairings.push(Pairing::bye(bye));
    }

    let mut i = 0;
    while i + 1 < remaining.len() {
        let (a, b) = (remaining[i].id, remaining[i + 1].id);
        let rematch = !repo.find_matches_between(a, b)?.is_empty();
        if rematch && i + 2 < remaining.len() {
            log::debug!("Players {} and {} already met; swapping in {}", a, b, remaining[i + 2].id);
            remaining.swap(i + 1, i + 2);
        }
        pairings.push(Pairing::new(remaining[i], remaining[i + 1]));
        i += 2;
    }

    log::info!(
        "Computed {} pairing(s) for {} player(s)",
        pairings.len(),
        standings.len()
    );
    Ok(pairings)
}

/// Index in `ranked` of the player who gets the bye.
///
/// The store picks the player with the fewest wins among those who have played the most
/// matches and never had a bye. If there is no such player, or they are not in `ranked`,
/// the lowest-ranked player gets it. `ranked` must not be empty.
fn select_bye<R>(ranked: &[&Standing], repo: &R) -> Result<usize, RepositoryError>
where
    R: Repository + ?Sized,
{
    let last = ranked.len() - 1;
    let candidate = repo.player_with_max_matches_least_wins(true)?;
    let idx = match candidate {
        Some(p) => match ranked.iter().position(|s| s.id == p.id) {
            Some(idx) => idx,
            None => {
                log::warn!("Bye candidate {} is not in the standings; using lowest-ranked player", p.id);
                last
            }
        },
        None => {
            log::warn!("No caught-up player without a prior bye; using lowest-ranked player");
            last
        }
    };
    log::debug!("Bye goes to player {}", ranked[idx].id);
    Ok(idx)
}
