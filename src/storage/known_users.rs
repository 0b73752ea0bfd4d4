use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::{fs, io};

use async_trait::async_trait;

use super::KnownUsersStore;

/// A set of user IDs persisted as a JSON array of integers.
///
/// The file is read once at construction and rewritten after every new ID.
/// A missing or unreadable file degrades to an empty set; a failed save is
/// logged and the in-memory set keeps the new ID.
pub struct JsonKnownUsersStore {
    path: PathBuf,
    known: Mutex<HashSet<u64>>,
}

impl JsonKnownUsersStore {
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let known = Self::read_ids(&path);
        log::info!(
            "Loaded {} known user(s) from {}",
            known.len(),
            path.display()
        );

        Self {
            path,
            known: Mutex::new(known),
        }
    }

    fn read_ids(path: &Path) -> HashSet<u64> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::info!(
                    "Known users file {} not found, starting with an empty set",
                    path.display()
                );
                return HashSet::new();
            }
            Err(err) => {
                log::warn!(
                    "Failed to read known users file {}: {err}, starting with an empty set",
                    path.display()
                );
                return HashSet::new();
            }
        };

        match serde_json::from_slice::<Vec<u64>>(&bytes) {
            Ok(ids) => ids.into_iter().collect(),
            Err(err) => {
                log::warn!(
                    "Known users file {} is not a JSON array of IDs: {err}, starting with an empty set",
                    path.display()
                );
                HashSet::new()
            }
        }
    }

    /// Writes the set while the caller still holds the lock, so saves from
    /// concurrent handlers cannot interleave.
    fn save(&self, known: &HashSet<u64>) {
        let mut ids: Vec<u64> = known.iter().copied().collect();
        ids.sort_unstable();

        let json = match serde_json::to_vec(&ids) {
            Ok(json) => json,
            Err(err) => {
                log::warn!("Failed to serialize known users: {err}");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, json) {
            log::warn!(
                "Failed to save known users to {}: {err}",
                self.path.display()
            );
        }
    }

    fn lock(&self) -> MutexGuard<'_, HashSet<u64>> {
        self.known.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KnownUsersStore for JsonKnownUsersStore {
    async fn mark_seen(&self, user_id: u64) -> bool {
        let mut known = self.lock();
        let first_time = known.insert(user_id);
        if first_time {
            self.save(&known);
        }

        first_time
    }

    async fn is_known(&self, user_id: u64) -> bool {
        self.lock().contains(&user_id)
    }
}
