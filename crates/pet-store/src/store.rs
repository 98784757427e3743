//! Load and save functions over the two snapshot documents.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use pet_behavior::{NeedsState, Personality};
use pet_core::{PetRng, Timestamp};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::{NeedsRecord, PersonalityRecord, StoreError, StoreResult};

pub const PERSONALITY_FILE: &str = "cat_personality.json";
pub const NEEDS_FILE: &str = "cat_state.json";

/// Handle on the data directory.  Holds no open files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateStore {
    dir: PathBuf,
}

impl StateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[inline]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn personality_path(&self) -> PathBuf {
        self.dir.join(PERSONALITY_FILE)
    }

    pub fn needs_path(&self) -> PathBuf {
        self.dir.join(NEEDS_FILE)
    }

    // ── Personality ───────────────────────────────────────────────────────

    /// Read and validate the stored personality.
    pub fn try_load_personality(&self) -> StoreResult<Personality> {
        let path = self.personality_path();
        let record: PersonalityRecord = read_json(&path)?;
        record
            .into_personality()
            .map_err(|source| StoreError::InvalidValue { path, source })
    }

    /// Load the stored personality, or roll a new one and write it back.
    ///
    /// Never fails: storage problems are logged and a fresh personality is
    /// returned.
    pub fn load_or_create_personality(&self, rng: &mut PetRng) -> Personality {
        match self.try_load_personality() {
            Ok(p) => {
                tracing::info!(path = %self.personality_path().display(), "personality loaded");
                p
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::info!("no stored personality, rolling a new one");
                } else {
                    tracing::warn!(error = %e, "stored personality discarded, rolling a new one");
                }
                let p = Personality::random(rng);
                if let Err(e) = self.save_personality(&p) {
                    tracing::warn!(error = %e, "could not save new personality");
                }
                p
            }
        }
    }

    pub fn save_personality(&self, personality: &Personality) -> StoreResult<()> {
        write_json(&self.personality_path(), &PersonalityRecord::from(personality))
    }

    // ── Needs ─────────────────────────────────────────────────────────────

    /// Read and validate stored needs.  The current behavior is taken to
    /// start at `now`; the movement target starts empty.
    pub fn try_load_needs(&self, now: Timestamp) -> StoreResult<NeedsState> {
        let path = self.needs_path();
        let record: NeedsRecord = read_json(&path)?;
        record
            .into_needs(now)
            .map_err(|source| StoreError::InvalidValue { path, source })
    }

    /// Load stored needs, or fall back to [`NeedsState::fresh`].
    pub fn load_needs_or_default(&self, now: Timestamp) -> NeedsState {
        match self.try_load_needs(now) {
            Ok(n) => {
                tracing::info!(
                    energy = n.energy,
                    hunger = n.hunger,
                    happiness = n.happiness,
                    "needs restored"
                );
                n
            }
            Err(e) => {
                if e.is_not_found() {
                    tracing::info!("no stored needs, starting fresh");
                } else {
                    tracing::warn!(error = %e, "stored needs discarded, starting fresh");
                }
                NeedsState::fresh(now)
            }
        }
    }

    pub fn save_needs(&self, needs: &NeedsState) -> StoreResult<()> {
        self.save_needs_record(&NeedsRecord::from(needs))
    }

    pub fn save_needs_record(&self, record: &NeedsRecord) -> StoreResult<()> {
        write_json(&self.needs_path(), record)
    }
}

// ── JSON helpers ──────────────────────────────────────────────────────────────

fn read_json<T: DeserializeOwned>(path: &Path) -> StoreResult<T> {
    let bytes = fs::read(path).map_err(|source| StoreError::Unavailable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| StoreError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize `value` next to `path` and rename it into place.
fn write_json<T: Serialize>(path: &Path, value: &T) -> StoreResult<()> {
    let bytes = serde_json::to_vec(value).map_err(StoreError::Encode)?;
    let write_err = |source: std::io::Error| StoreError::Write { path: path.to_path_buf(), source };

    let dir = match path.parent() {
        Some(d) if !d.as_os_str().is_empty() => d,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(&bytes).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;
    Ok(())
}
