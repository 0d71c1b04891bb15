// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::{BTreeSet, HashMap};
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use tokio::fs;

use crate::{Error, Event};

/// The immutable collection of conference events.
#[derive(Debug, Default)]
pub struct Catalog {
    events: Vec<Event>,
    scraped_at: Option<String>,
    index: HashMap<String, usize>,
    tracks: OnceLock<Vec<String>>,
}

/// Wrapped layout of the catalog document.
#[derive(Deserialize)]
struct WrappedCatalog {
    #[serde(default)]
    events: Option<Vec<Event>>,

    #[serde(default, rename = "scrapedAt")]
    scraped_at: Option<String>,
}

impl Catalog {
    /// Creates a catalog from already parsed events.
    pub fn new(events: Vec<Event>, scraped_at: Option<String>) -> Self {
        let mut index = HashMap::with_capacity(events.len());
        for (i, event) in events.iter().enumerate() {
            // keep the first occurrence if the fetcher emitted duplicates
            index.entry(event.id.clone()).or_insert(i);
        }

        Self {
            events,
            scraped_at: scraped_at.filter(|s| !s.is_empty()),
            index,
            tracks: OnceLock::new(),
        }
    }

    /// Parses a catalog document, either a bare array of events or an object with `events`
    /// and an optional `scrapedAt` timestamp.
    pub fn load(raw: &str) -> Result<Self, Error> {
        let data_format = |e: serde_json::Error| Error::DataFormat(e.to_string());
        let catalog = if raw.trim_start().starts_with('{') {
            let wrapped: WrappedCatalog = serde_json::from_str(raw).map_err(data_format)?;
            Self::new(wrapped.events.unwrap_or_default(), wrapped.scraped_at)
        } else {
            // legacy layout: a bare array of events
            let events: Vec<Event> = serde_json::from_str(raw).map_err(data_format)?;
            Self::new(events, None)
        };

        tracing::debug!(events = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Reads and parses the catalog document at the given path.
    #[tracing::instrument]
    pub async fn load_file(path: &Path) -> Result<Self, Error> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::DataFormat(format!(
                    "Events data not found at {}",
                    path.display()
                )));
            }
            Err(e) => return Err(e.into()),
        };
        Self::load(&content)
    }

    /// All events in catalog order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Finds an event by its identifier.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.index.get(id).map(|&i| &self.events[i])
    }

    /// Whether the catalog knows an event with the given identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// When the catalog was scraped, as provided by the fetcher.
    pub fn scraped_at(&self) -> Option<&str> {
        self.scraped_at.as_deref()
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether the catalog has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Distinct track names, sorted ascending. Computed on first use.
    pub fn distinct_tracks(&self) -> &[String] {
        self.tracks.get_or_init(|| {
            self.events
                .iter()
                .filter_map(|e| e.track.as_deref())
                .collect::<BTreeSet<_>>()
                .into_iter()
                .map(ToOwned::to_owned)
                .collect()
        })
    }
}
