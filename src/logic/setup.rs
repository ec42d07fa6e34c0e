//! Setup: bulk player registration from a CSV roster.

use crate::models::PlayerId;
use crate::repository::{MemoryRepository, RepositoryError};
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct RosterRow {
    name: String,
}

/// Register every player in a CSV roster with a `name` column. Blank names are skipped.
///
/// All rows are parsed before anything is registered, so a malformed file registers nobody.
pub fn import_roster<R: Read>(reader: R, repo: &mut MemoryRepository) -> Result<Vec<PlayerId>, RepositoryError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let headers = rdr.headers()?;
    if !headers.iter().any(|h| h == "name") {
        return Err(RepositoryError::Import("missing `name` column".to_string()));
    }
    let names = rdr
        .deserialize::<RosterRow>()
        .map(|row| row.map(|r| r.name))
        .collect::<Result<Vec<_>, _>>()?;

    let mut ids = Vec::with_capacity(names.len());
    for name in names.iter().filter(|n| !n.trim().is_empty()) {
        ids.push(repo.register_player(name)?);
    }
    log::info!("Imported {} player(s) from roster", ids.len());
    Ok(ids)
}
