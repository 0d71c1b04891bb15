// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use crate::Error;

/// A local persistent key-value store holding string values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Reads the value stored under `key`.
    async fn get(&self, key: &str) -> Result<Option<String>, Error>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), Error>;

    /// Removes the value stored under `key`, if any.
    async fn remove(&self, key: &str) -> Result<(), Error>;
}

/// A volatile key-value store kept in memory.
///
/// Clones share the same entries. Every write is recorded so callers can inspect what was
/// persisted and in which order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<MemoryInner>>,
}

#[derive(Debug, Default)]
struct MemoryInner {
    entries: HashMap<String, String>,
    writes: Vec<(String, Option<String>)>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding a single entry, without recording it as a write.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .lock()
            .entries
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// The current value under `key`.
    pub fn peek(&self, key: &str) -> Option<String> {
        self.lock().entries.get(key).cloned()
    }

    /// All writes so far, oldest first. Removals are recorded as `None`.
    pub fn writes(&self) -> Vec<(String, Option<String>)> {
        self.lock().writes.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, Error> {
        Ok(self.peek(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        let mut inner = self.lock();
        inner.entries.insert(key.to_owned(), value.to_owned());
        inner.writes.push((key.to_owned(), Some(value.to_owned())));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), Error> {
        let mut inner = self.lock();
        inner.entries.remove(key);
        inner.writes.push((key.to_owned(), None));
        Ok(())
    }
}
