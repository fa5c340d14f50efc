//! Per-arena settings documents with parent-template inheritance.
//!
//! Each enabled arena has its own YAML file under the arena directory. Keys
//! the arena file does not set fall back to the shared parent template, with
//! nested mappings merged recursively. The merged result is what gets
//! validated and written back, so every arena file on disk is complete and
//! self-describing after a load pass.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};

use crate::error::{Error, Result};
use crate::store::{self, SettingsFile};

const MIN_PLAYERS: &str = "min-players";
const MAX_PLAYERS: &str = "max-players";

/// Settings for a single arena after parent inheritance is applied.
#[derive(Debug, Clone)]
pub struct ArenaConfig {
    name: String,
    path: PathBuf,
    min_players: u32,
    max_players: u32,
    document: Mapping,
}

impl ArenaConfig {
    /// The arena's name, as listed in the main settings document.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The arena's settings file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Minimum player count for a game to start.
    #[must_use]
    pub fn min_players(&self) -> u32 {
        self.min_players
    }

    /// Maximum player count before the queue is full.
    #[must_use]
    pub fn max_players(&self) -> u32 {
        self.max_players
    }

    /// The full merged document, for consumers reading arena-specific keys
    /// beyond the validated player counts.
    #[must_use]
    pub fn document(&self) -> &Mapping {
        &self.document
    }

    /// Writes the merged document back to the arena's file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Save`] if the file cannot be written.
    pub fn save(&self, header: &str) -> Result<()> {
        store::write_document(&self.path, header, &self.document)
    }
}

/// Loads arena documents against a shared parent template.
#[derive(Debug)]
pub struct ArenaLoader<'a> {
    parent: &'a Mapping,
}

impl<'a> ArenaLoader<'a> {
    /// Creates a loader inheriting unset keys from `parent`.
    #[must_use]
    pub fn new(parent: &'a Mapping) -> Self {
        Self { parent }
    }

    /// Loads and validates one arena's settings file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] or [`Error::Io`] if the file cannot be
    /// read, and [`Error::Arena`] if the merged document is missing a
    /// required value or the player counts are inconsistent.
    pub fn load(&self, path: impl Into<PathBuf>, name: &str) -> Result<ArenaConfig> {
        let path = path.into();
        let file = SettingsFile::load(&path)?;
        let document = merge_mappings(self.parent, file.document());

        let min_players = read_count(&document, name, MIN_PLAYERS)?;
        let max_players = read_count(&document, name, MAX_PLAYERS)?;
        if min_players == 0 {
            return Err(Error::Arena {
                arena: name.to_owned(),
                key: MIN_PLAYERS.to_owned(),
                message: "must be at least 1".to_owned(),
            });
        }
        if min_players > max_players {
            return Err(Error::Arena {
                arena: name.to_owned(),
                key: MAX_PLAYERS.to_owned(),
                message: format!("must be at least min-players ({min_players}), got {max_players}"),
            });
        }

        Ok(ArenaConfig {
            name: name.to_owned(),
            path,
            min_players,
            max_players,
            document,
        })
    }
}

fn read_count(document: &Mapping, arena: &str, key: &str) -> Result<u32> {
    let stored = document.get(key).and_then(Value::as_u64).ok_or_else(|| {
        Error::Arena {
            arena: arena.to_owned(),
            key: key.to_owned(),
            message: "missing or not a positive integer".to_owned(),
        }
    })?;
    u32::try_from(stored).map_err(|_| Error::Arena {
        arena: arena.to_owned(),
        key: key.to_owned(),
        message: format!("{stored} is out of range"),
    })
}

/// Recursively merges `child` over `parent`. Scalar and sequence values from
/// the child replace the parent's; nested mappings merge key by key.
fn merge_mappings(parent: &Mapping, child: &Mapping) -> Mapping {
    let mut merged = parent.clone();
    for (key, child_value) in child {
        match (merged.get_mut(key), child_value) {
            (Some(Value::Mapping(parent_section)), Value::Mapping(child_section)) => {
                let merged_section = merge_mappings(parent_section, child_section);
                *parent_section = merged_section;
            }
            _ => {
                merged.insert(key.clone(), child_value.clone());
            }
        }
    }
    merged
}
