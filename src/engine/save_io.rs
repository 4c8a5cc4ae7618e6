use std::fs;
use std::path::PathBuf;

use anyhow::Context;

use crate::model::save::{SaveRecord, SAVE_VERSION};

/// The one named storage slot holding a resumable run. Absence of the
/// file is a normal, detectable state, not an error.
pub struct SaveSlot {
    path: PathBuf,
}

impl SaveSlot {
    pub fn at_default_location() -> Self {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("well-of-power");
        path.push("save.json");
        Self { path }
    }

    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Overwrites the slot. Idempotent.
    pub fn save(&self, record: &SaveRecord) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }

    /// Fails closed: anything missing, unreadable, unparsable,
    /// version-mismatched or inconsistent is reported as no save at all.
    pub fn load(&self) -> Option<SaveRecord> {
        let json = fs::read_to_string(&self.path).ok()?;
        let record: SaveRecord = match serde_json::from_str(&json) {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("discarding unreadable save at {}: {err}", self.path.display());
                return None;
            }
        };
        if record.version != SAVE_VERSION {
            tracing::warn!("discarding save with unsupported version {}", record.version);
            return None;
        }
        if !record.is_consistent() {
            tracing::warn!("discarding save with a mismatched answer tally");
            return None;
        }
        Some(record)
    }

    pub fn clear(&self) -> anyhow::Result<()> {
        if self.exists() {
            fs::remove_file(&self.path)
                .with_context(|| format!("failed to remove {}", self.path.display()))?;
        }
        Ok(())
    }
}
