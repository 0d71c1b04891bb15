// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use serde_json::Value;

use crate::{Error, KeyValueStore};

/// Key of the favorites entry in the local key-value store.
pub const FAVORITES_KEY: &str = "fosdem-favorites";

/// Suggested file name for exported favorites.
pub const EXPORT_FILE_NAME: &str = "fosdem-favorites.json";

/// A set of event identifiers, kept in insertion order.
///
/// Identifiers are not checked against the catalog, so the set may hold ids of events
/// that no longer exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
    index: HashSet<String>,
}

impl FavoriteSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains(id)
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// Adds `id` if absent, removes it otherwise. Returns whether it is now a member.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.index.remove(id) {
            self.ids.retain(|a| a != id);
            false
        } else {
            self.index.insert(id.to_owned());
            self.ids.push(id.to_owned());
            true
        }
    }

    fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.ids)
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            let id = id.into();
            if set.index.insert(id.clone()) {
                set.ids.push(id);
            }
        }
        set
    }
}

/// Favorites parsed from an imported file, waiting to replace the current set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesImport {
    incoming: FavoriteSet,
}

impl FavoritesImport {
    /// Parses the content of a favorites file, which must be a JSON array of strings.
    pub fn parse(bytes: &[u8]) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_slice(bytes).map_err(|e| Error::ImportFormat(e.to_string()))?;

        let Value::Array(items) = value else {
            return Err(Error::ImportFormat("expected an array of event ids".into()));
        };

        let mut ids = Vec::with_capacity(items.len());
        for (index, item) in items.into_iter().enumerate() {
            match item {
                Value::String(id) => ids.push(id),
                _ => return Err(Error::ImportType { index }),
            }
        }

        Ok(Self {
            incoming: ids.into_iter().collect(),
        })
    }

    /// The favorites that the import would install.
    pub fn incoming(&self) -> &FavoriteSet {
        &self.incoming
    }
}

/// Result of an import attempt that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// The favorites were replaced by the given number of imported ids.
    Replaced(usize),

    /// The user declined to overwrite the current favorites.
    Declined,
}

/// Owns the favorite set and keeps it in sync with the key-value store.
///
/// Every mutation is persisted before the mutating call returns.
#[derive(Debug)]
pub struct Favorites<S: KeyValueStore> {
    store: S,
    set: FavoriteSet,
}

impl<S: KeyValueStore> Favorites<S> {
    /// Loads the favorites from the store.
    ///
    /// A missing entry yields an empty set. A corrupted entry is removed from the store and
    /// an empty set is returned.
    pub async fn load(store: S) -> Result<Self, Error> {
        let set = match store.get(FAVORITES_KEY).await? {
            None => FavoriteSet::new(),
            Some(raw) => match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(ids) => ids.into_iter().collect(),
                Err(e) => {
                    tracing::warn!(err = %e, "discarding corrupted favorites entry");
                    if let Err(e) = store.remove(FAVORITES_KEY).await {
                        tracing::error!(err = %e, "failed to remove corrupted favorites entry");
                    }
                    FavoriteSet::new()
                }
            },
        };

        tracing::debug!(count = set.len(), "loaded favorites");
        Ok(Self { store, set })
    }

    /// The current favorites.
    pub fn set(&self) -> &FavoriteSet {
        &self.set
    }

    /// Whether `id` is a favorite.
    pub fn is_favorite(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    /// Flips the favorite state of `id` and persists the whole set.
    /// Returns whether `id` is now a favorite. On error the set is left unchanged.
    pub async fn toggle(&mut self, id: &str) -> Result<bool, Error> {
        let now_favorite = self.set.toggle(id);
        tracing::debug!(id, now_favorite, "toggled favorite");
        if let Err(e) = self.persist().await {
            self.set.toggle(id);
            return Err(e);
        }
        Ok(now_favorite)
    }

    /// Serializes the favorites as a pretty-printed JSON array in insertion order.
    pub fn export(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec_pretty(&self.set.ids).map_err(|e| Error::Io(e.into()))
    }

    /// Whether installing `import` overwrites existing favorites and needs confirmation.
    pub fn needs_confirmation(&self) -> bool {
        !self.set.is_empty()
    }

    /// Replaces the whole favorite set with the imported one and persists it.
    /// On error the previous set is kept.
    pub async fn replace(&mut self, import: FavoritesImport) -> Result<usize, Error> {
        let previous = std::mem::replace(&mut self.set, import.incoming);
        if let Err(e) = self.persist().await {
            self.set = previous;
            return Err(e);
        }
        tracing::info!(count = self.set.len(), "replaced favorites");
        Ok(self.set.len())
    }

    /// Imports a favorites file, replacing the current set.
    ///
    /// When the current set is not empty, `confirm` is asked with the current and incoming
    /// counts; declining leaves everything untouched.
    pub async fn import<F>(&mut self, bytes: &[u8], confirm: F) -> Result<ImportOutcome, Error>
    where
        F: FnOnce(usize, usize) -> bool,
    {
        let import = FavoritesImport::parse(bytes)?;
        if self.needs_confirmation() && !confirm(self.set.len(), import.incoming.len()) {
            tracing::debug!("user declined to overwrite favorites");
            return Ok(ImportOutcome::Declined);
        }

        self.replace(import).await.map(ImportOutcome::Replaced)
    }

    async fn persist(&self) -> Result<(), Error> {
        let value = self.set.to_json().map_err(|e| Error::Io(e.into()))?;
        if let Err(e) = self.store.set(FAVORITES_KEY, &value).await {
            tracing::error!(err = %e, "failed to persist favorites");
            return Err(e);
        }
        Ok(())
    }
}
