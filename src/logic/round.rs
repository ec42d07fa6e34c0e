//! Round entry points: read the store, rank, pair.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::{Pairing, Standing};
use crate::repository::{Repository, RepositoryError};

/// Current standings of every registered player.
pub fn player_standings<R>(repo: &R) -> Result<Vec<Standing>, RepositoryError>
where
    R: Repository + ?Sized,
{
    Ok(compute_standings(&repo.list_players()?))
}

/// Pairings for the next round, computed from the store's current players and history.
pub fn swiss_pairings<R>(repo: &R) -> Result<Vec<Pairing>, RepositoryError>
where
    R: Repository + ?Sized,
{
    let standings = player_standings(repo)?;
    compute_pairings(&standings, repo)
}
