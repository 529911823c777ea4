//! JSON-file ad store.
//!
//! The persistent collaborator that owns the ad list across process
//! restarts: create, read, update, and delete by id, backed by a single
//! pretty-printed JSON file. The scheduling engine never touches this
//! module; it consumes whatever snapshot the caller loads.
//!
//! Every operation reads the file, applies the change, and writes it
//! back. The store holds no in-memory state, so two handles on the same
//! path always observe each other's writes.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, info};
use thiserror::Error;

use crate::models::AdRecord;

/// Errors from store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("no ad with id {0}")]
    NotFound(u64),
}

/// Store result.
pub type StoreResult<T> = Result<T, StoreError>;

/// A file-backed ad list with id-keyed CRUD.
#[derive(Debug, Clone)]
pub struct AdStore {
    path: PathBuf,
}

impl AdStore {
    /// Opens a store at the given path. The file is created lazily on
    /// the first write; a missing file reads as an empty list.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the full ad list. A missing file is an empty list, not an error.
    pub fn load(&self) -> StoreResult<Vec<AdRecord>> {
        match File::open(&self.path) {
            Ok(file) => {
                let ads: Vec<AdRecord> = serde_json::from_reader(file)?;
                debug!("loaded {} ads from {}", ads.len(), self.path.display());
                Ok(ads)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Replaces the stored list wholesale.
    pub fn save(&self, ads: &[AdRecord]) -> StoreResult<()> {
        let file = File::create(&self.path)?;
        serde_json::to_writer_pretty(file, ads)?;
        debug!("saved {} ads to {}", ads.len(), self.path.display());
        Ok(())
    }

    /// Adds an ad, assigning it the next free id (max existing + 1).
    /// Returns the record with its assigned id.
    pub fn add(&self, mut ad: AdRecord) -> StoreResult<AdRecord> {
        let mut ads = self.load()?;
        ad.id = ads.iter().map(|a| a.id).max().map_or(1, |max| max + 1);
        info!("adding ad '{}' with id {}", ad.name, ad.id);
        ads.push(ad.clone());
        self.save(&ads)?;
        Ok(ad)
    }

    /// Fetches one ad by id.
    pub fn get(&self, id: u64) -> StoreResult<Option<AdRecord>> {
        Ok(self.load()?.into_iter().find(|a| a.id == id))
    }

    /// Replaces the ad with `ad.id`. Fails with [`StoreError::NotFound`]
    /// if no stored ad has that id.
    pub fn update(&self, ad: AdRecord) -> StoreResult<()> {
        let mut ads = self.load()?;
        let slot = ads
            .iter_mut()
            .find(|a| a.id == ad.id)
            .ok_or(StoreError::NotFound(ad.id))?;
        info!("updating ad {}", ad.id);
        *slot = ad;
        self.save(&ads)
    }

    /// Deletes the ad with the given id. Fails with
    /// [`StoreError::NotFound`] if no stored ad has that id.
    pub fn delete(&self, id: u64) -> StoreResult<()> {
        let mut ads = self.load()?;
        let before = ads.len();
        ads.retain(|a| a.id != id);
        if ads.len() == before {
            return Err(StoreError::NotFound(id));
        }
        info!("deleted ad {}", id);
        self.save(&ads)
    }

    /// Removes every stored ad.
    pub fn clear(&self) -> StoreResult<()> {
        info!("clearing ad store at {}", self.path.display());
        self.save(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn make_ad(name: &str) -> AdRecord {
        AdRecord::new(0, name)
            .with_category("General")
            .with_duration(2)
            .with_profit(100.0)
            .with_deadline(1)
    }

    fn temp_store(dir: &tempfile::TempDir) -> AdStore {
        AdStore::open(dir.path().join("ads.json"))
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let first = store.add(make_ad("A")).unwrap();
        let second = store.add(make_ad("B")).unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let ads = store.load().unwrap();
        assert_eq!(ads.len(), 2);
        assert_eq!(ads[0].name, "A");
    }

    #[test]
    fn test_round_trip_preserves_fields() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let saved = store
            .add(
                AdRecord::new(0, "Mars Vacation")
                    .with_category("Travel")
                    .with_duration(2)
                    .with_profit(700.5)
                    .with_deadline(3),
            )
            .unwrap();
        let loaded = store.get(saved.id).unwrap().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_update() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let mut ad = store.add(make_ad("A")).unwrap();
        ad.profit = 999.0;
        store.update(ad.clone()).unwrap();
        assert_eq!(store.get(ad.id).unwrap().unwrap().profit, 999.0);
    }

    #[test]
    fn test_update_missing_id_fails() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let mut ad = make_ad("A");
        ad.id = 42;
        assert!(matches!(store.update(ad), Err(StoreError::NotFound(42))));
    }

    #[test]
    fn test_delete() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let ad = store.add(make_ad("A")).unwrap();
        store.delete(ad.id).unwrap();
        assert!(store.get(ad.id).unwrap().is_none());
        assert!(matches!(
            store.delete(ad.id),
            Err(StoreError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_does_not_reuse_lower_ids() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        let a = store.add(make_ad("A")).unwrap();
        let b = store.add(make_ad("B")).unwrap();
        store.delete(a.id).unwrap();
        let c = store.add(make_ad("C")).unwrap();
        assert_eq!(c.id, b.id + 1);
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let store = temp_store(&dir);

        store.add(make_ad("A")).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_empty());
    }
}
