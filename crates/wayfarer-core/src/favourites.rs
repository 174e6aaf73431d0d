// crates/wayfarer-core/src/favourites.rs
use crate::error::Result;
use crate::text::equals_folded;
use crate::traits::{FavouritesStore, NameMatch};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

pub const FAVOURITES_KEY: &str = "favourites";

/// In-process store. Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, Value>,
}

impl FavouritesStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}

/// A JSON object on disk, one entry per key.
///
/// A missing file reads as an empty store; `set` rewrites the whole file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Map<String, Value>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl FavouritesStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        // An unreadable file is replaced rather than blocking every write.
        let mut all = self.read_all().unwrap_or_default();
        all.insert(key.to_string(), value);
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_vec_pretty(&Value::Object(all))?)?;
        Ok(())
    }
}

/// Favourite country names on top of a [`FavouritesStore`].
///
/// Names match accent- and case-insensitively, so favouriting "Curacao"
/// and later checking "Curaçao" agree.
#[derive(Debug)]
pub struct Favourites<S> {
    store: S,
    names: Vec<String>,
}

impl<S: FavouritesStore> Favourites<S> {
    /// Read the stored list. Unreadable or malformed data counts as empty.
    pub fn open(store: S) -> Self {
        let names = match store.get(FAVOURITES_KEY) {
            Ok(Some(value)) => serde_json::from_value::<Vec<String>>(value).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring malformed favourites");
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!(error = %e, "could not read favourites");
                Vec::new()
            }
        };
        Self { store, names }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| equals_folded(n, name))
    }

    pub fn contains_record(&self, record: &impl NameMatch) -> bool {
        self.names.iter().any(|n| record.is_named(n))
    }

    /// Returns `false` if `name` was already a favourite.
    pub fn add(&mut self, name: &str) -> Result<bool> {
        let name = name.trim();
        if name.is_empty() || self.contains(name) {
            return Ok(false);
        }
        self.names.push(name.to_string());
        self.persist()?;
        Ok(true)
    }

    /// Returns `false` if `name` was not a favourite.
    pub fn remove(&mut self, name: &str) -> Result<bool> {
        let before = self.names.len();
        self.names.retain(|n| !equals_folded(n, name));
        if self.names.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Flip membership; returns whether `name` is a favourite afterwards.
    pub fn toggle(&mut self, name: &str) -> Result<bool> {
        if self.contains(name) {
            self.remove(name)?;
            Ok(false)
        } else {
            self.add(name)
        }
    }

    fn persist(&mut self) -> Result<()> {
        let value = Value::from(self.names.clone());
        self.store.set(FAVOURITES_KEY, value)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
