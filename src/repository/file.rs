//! Tournament snapshot kept as a JSON file.
//!
//! Each operation opens the file, works on a [`MemoryRepository`] loaded from it, and
//! closes it again. Mutations go through [`FileStore::session`], which only writes the
//! snapshot back when the closure succeeds.

use crate::logic::{compute_pairings, compute_standings};
use crate::models::{MatchRecord, Pairing, Player, PlayerId, Standing};
use crate::repository::{MemoryRepository, Repository, RepositoryError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

/// On-disk form of a tournament.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    pub updated_at: DateTime<Utc>,
    pub repository: MemoryRepository,
}

/// JSON-file backed store.
#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the current snapshot. A missing file is an empty tournament.
    pub fn load(&self) -> Result<Snapshot, RepositoryError> {
        if !self.path.exists() {
            return Ok(Snapshot {
                updated_at: Utc::now(),
                repository: MemoryRepository::new(),
            });
        }
        let file = fs::File::open(&self.path)?;
        let snapshot = serde_json::from_reader(BufReader::new(file))?;
        Ok(snapshot)
    }

    /// Run `f` against the stored tournament and commit its changes if it returns `Ok`.
    ///
    /// On `Err` nothing is written and the file keeps its previous contents.
    pub fn session<T, F>(&self, f: F) -> Result<T, RepositoryError>
    where
        F: FnOnce(&mut MemoryRepository) -> Result<T, RepositoryError>,
    {
        let mut snapshot = self.load()?;
        let out = f(&mut snapshot.repository)?;
        snapshot.updated_at = Utc::now();
        self.commit(&snapshot)?;
        Ok(out)
    }

    /// Write to a sibling temp file, then rename over the snapshot.
    fn commit(&self, snapshot: &Snapshot) -> Result<(), RepositoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let tmp = self.path.with_extension("json.tmp");
        {
            let file = fs::File::create(&tmp)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, snapshot)?;
            writer.flush()?;
        }
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        log::debug!("Committed tournament snapshot to {:?}", self.path);
        Ok(())
    }

    pub fn register_player(&self, name: &str) -> Result<PlayerId, RepositoryError> {
        self.session(|repo| repo.register_player(name))
    }

    pub fn report_match(&self, winner: PlayerId, loser: Option<PlayerId>) -> Result<(), RepositoryError> {
        self.session(|repo| repo.report_match(winner, loser))
    }

    pub fn delete_matches(&self) -> Result<(), RepositoryError> {
        self.session(|repo| {
            repo.delete_matches();
            Ok(())
        })
    }

    pub fn delete_players(&self) -> Result<(), RepositoryError> {
        self.session(|repo| {
            repo.delete_players();
            Ok(())
        })
    }

    pub fn count_players(&self) -> Result<usize, RepositoryError> {
        Ok(self.load()?.repository.count_players())
    }

    /// Standings from a single read of the snapshot.
    pub fn standings(&self) -> Result<Vec<Standing>, RepositoryError> {
        Ok(compute_standings(self.load()?.repository.players()))
    }

    /// Next round's pairings, computed from a single read of the snapshot.
    ///
    /// Prefer this over `swiss_pairings(&store)`, which re-reads the file for every query.
    pub fn pairings(&self) -> Result<Vec<Pairing>, RepositoryError> {
        let repo = self.load()?.repository;
        compute_pairings(&compute_standings(repo.players()), &repo)
    }
}

impl Repository for FileStore {
    fn list_players(&self) -> Result<Vec<Player>, RepositoryError> {
        self.load()?.repository.list_players()
    }

    fn find_matches_between(&self, a: PlayerId, b: PlayerId) -> Result<Vec<MatchRecord>, RepositoryError> {
        self.load()?.repository.find_matches_between(a, b)
    }

    fn player_with_max_matches_least_wins(
        &self,
        excluding_prior_bye_recipients: bool,
    ) -> Result<Option<Player>, RepositoryError> {
        self.load()?
            .repository
            .player_with_max_matches_least_wins(excluding_prior_bye_recipients)
    }
}
