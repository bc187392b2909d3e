use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use crate::app::domain::mode::PreferenceStore;
use crate::app::infrastructure::error::Result;

/// On-disk shape of the preference file: a single JSON object mapping
/// preference keys to their stored text values.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
struct PreferenceFile(BTreeMap<String, String>);

/// File-backed key-value store for user preferences.
///
/// The whole file is read once at startup and rewritten on every change.
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: PreferenceFile,
}

impl FilePreferenceStore {
    /// Load preferences from disk, or start empty if there are none yet.
    pub fn load() -> Self {
        Self::load_from(Self::prefs_path())
    }

    /// Load from an explicit path. An unreadable or unparsable file degrades
    /// to an empty store; every key then reads as absent.
    pub fn load_from(path: PathBuf) -> Self {
        let prefs = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(prefs) => prefs,
                Err(e) => {
                    eprintln!("Failed to parse preferences: {}. Starting empty.", e);
                    PreferenceFile::default()
                }
            },
            Err(_) => PreferenceFile::default(),
        };

        Self { path, prefs }
    }

    /// Get preference file path (cross-platform)
    pub fn prefs_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("duskswitch");
        path.push("preferences.json");
        path
    }

    fn persist(&self) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(&self.prefs)?;
        fs::write(&self.path, json)?;

        Ok(())
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.prefs.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.prefs.0.insert(key.to_string(), value.to_string());

        // A failed write loses durability, not the current session's state.
        if let Err(e) = self.persist() {
            eprintln!("Failed to write preferences: {}", e);
        }
    }
}
