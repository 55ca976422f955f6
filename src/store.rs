// Copyright (c) 2025 FinApp Developers.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::models::{Features, User};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("dev.finapp", "FinApp", "finapp"));

/// Key holding the current session user plus all of their record lists.
pub const USER_KEY: &str = "finapp_user";
/// Key holding the array of registered users (credentials included).
pub const USERS_KEY: &str = "finapp_users";
/// Key holding the feature-toggle booleans.
pub const FEATURES_KEY: &str = "finapp_features";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored value under '{key}' is not valid JSON")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Key-value store of JSON blobs, one file per key. No transactions, no
/// indexing; every write replaces the whole blob (last writer wins).
pub struct Store {
    dir: PathBuf,
}

pub fn data_dir() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    Ok(proj.data_dir().to_path_buf())
}

impl Store {
    pub fn open_or_init() -> Result<Store> {
        Store::open_at(data_dir()?)
    }

    pub fn open_at(dir: impl AsRef<Path>) -> Result<Store> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create data dir {}", dir.display()))?;
        Ok(Store { dir })
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Read a blob. Missing keys read as `None`. A blob that no longer parses
    /// is an error in debug builds and reads as `None` (with a warning) in
    /// release builds, so a corrupted store degrades instead of crashing.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.key_path(key);
        let raw = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(e).with_context(|| format!("Read blob at {}", path.display()));
            }
        };
        match serde_json::from_str(&raw) {
            Ok(v) => Ok(Some(v)),
            Err(source) => {
                if cfg!(debug_assertions) {
                    Err(StoreError::Corrupt {
                        key: key.to_string(),
                        source,
                    }
                    .into())
                } else {
                    eprintln!("warning: discarding corrupt blob '{}': {}", key, source);
                    Ok(None)
                }
            }
        }
    }

    pub fn put<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.key_path(key);
        let raw = serde_json::to_string_pretty(value)?;
        fs::write(&path, raw).with_context(|| format!("Write blob at {}", path.display()))?;
        Ok(())
    }

    pub fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_path(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).with_context(|| format!("Remove blob at {}", path.display())),
        }
    }

    // Typed accessors: all persistence of the three well-known keys is routed
    // through here so no caller writes a partial shape under them.

    pub fn current_user(&self) -> Result<Option<User>> {
        self.get(USER_KEY)
    }

    pub fn save_current_user(&self, user: &User) -> Result<()> {
        self.put(USER_KEY, user)
    }

    pub fn clear_current_user(&self) -> Result<()> {
        self.remove(USER_KEY)
    }

    pub fn registered_users(&self) -> Result<Vec<User>> {
        Ok(self.get(USERS_KEY)?.unwrap_or_default())
    }

    pub fn save_registered_users(&self, users: &[User]) -> Result<()> {
        self.put(USERS_KEY, &users)
    }

    pub fn features(&self) -> Result<Features> {
        Ok(self.get(FEATURES_KEY)?.unwrap_or_default())
    }

    pub fn save_features(&self, features: &Features) -> Result<()> {
        self.put(FEATURES_KEY, features)
    }
}
