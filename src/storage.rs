// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Persistence gateway: JSON collections over a synchronous key-value store.
//!
//! Two interchangeable backends exist: [`FileStore`] (one JSON text file per
//! key) and [`crate::db::SqliteStore`] (a `kv` table in the host database).
//! The backend is picked once by [`StorageBackend::detect`].

use crate::config::{BackendKind, Config};
use crate::db::{self, SqliteStore};
use crate::models::{Budget, Transaction};
use log::{debug, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const TRANSACTIONS_KEY: &str = "yy_transactions";
pub const BUDGETS_KEY: &str = "yy_budgets";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("could not serialize collection '{key}': {source}")]
    Serialize {
        key: String,
        source: serde_json::Error,
    },
    #[error("invalid storage key '{0}'")]
    InvalidKey(String),
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Human-readable location, for `init` and logs.
    fn describe(&self) -> String;
}

pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(FileStore { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let ok = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !ok {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(s) => Ok(Some(s)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::write(path, value)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("file:{}", self.dir.display())
    }
}

pub struct StorageBackend;

impl StorageBackend {
    /// Choose the backend kind. An explicit setting wins; otherwise the host
    /// database is used only when it already exists.
    pub fn detect(config: &Config) -> BackendKind {
        if let Some(kind) = config.backend {
            return kind;
        }
        if db::db_path(&config.data_dir).is_file() {
            BackendKind::Sqlite
        } else {
            BackendKind::File
        }
    }

    pub fn open(config: &Config) -> Result<Box<dyn KeyValueStore>, StorageError> {
        let kind = Self::detect(config);
        Self::open_kind(kind, &config.data_dir)
    }

    pub fn open_kind(
        kind: BackendKind,
        data_dir: &Path,
    ) -> Result<Box<dyn KeyValueStore>, StorageError> {
        let store: Box<dyn KeyValueStore> = match kind {
            BackendKind::File => Box::new(FileStore::new(data_dir)?),
            BackendKind::Sqlite => {
                fs::create_dir_all(data_dir)?;
                Box::new(SqliteStore::open(&db::db_path(data_dir))?)
            }
        };
        debug!("storage backend: {}", store.describe());
        Ok(store)
    }
}

pub struct Gateway {
    store: Box<dyn KeyValueStore>,
}

impl Gateway {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Gateway { store }
    }

    pub fn describe(&self) -> String {
        self.store.describe()
    }

    /// Read and parse a collection. Absent, unreadable or unparseable values
    /// yield `default`.
    pub fn read_collection<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.store.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(e) => {
                warn!("could not read '{}': {}", key, e);
                return default;
            }
        };
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(Some(v)) => v,
            Ok(None) => default,
            Err(e) => {
                warn!("ignoring unparseable collection '{}': {}", key, e);
                default
            }
        }
    }

    pub fn write_collection<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
    ) -> Result<(), StorageError> {
        let text = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.store.set(key, &text).inspect_err(|e| {
            warn!("write of '{}' failed: {}", key, e);
        })
    }

    pub fn load_transactions(&self) -> Vec<Transaction> {
        self.read_collection(TRANSACTIONS_KEY, Vec::new())
    }

    pub fn save_transactions(&self, txns: &[Transaction]) -> Result<(), StorageError> {
        self.write_collection(TRANSACTIONS_KEY, txns)
    }

    pub fn load_budgets(&self) -> Vec<Budget> {
        self.read_collection(BUDGETS_KEY, Budget::default_set())
    }

    pub fn save_budgets(&self, budgets: &[Budget]) -> Result<(), StorageError> {
        self.write_collection(BUDGETS_KEY, budgets)
    }
}
