use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{GameStore, StoreError, UpgradePolicy, DATABASE_NAME};

/// Where the store lives and how it treats old schemas.
///
/// Loaded from a JSON file, e.g.
///
/// ```json
/// { "data_dir": "/var/lib/gosgf", "upgrade_policy": "migrate" }
/// ```
///
/// Missing keys fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub data_dir: PathBuf,
    pub upgrade_policy: UpgradePolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            upgrade_policy: UpgradePolicy::default(),
        }
    }
}

impl StoreConfig {
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        let reader = BufReader::new(File::open(path)?);
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join(DATABASE_NAME)
    }

    pub fn open_store(&self) -> Result<GameStore, StoreError> {
        GameStore::open(self.database_path(), self.upgrade_policy)
    }
}
