// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of the FOSDEM schedule browser: catalog loading, persisted favorites and the
//! search, filter and sort engine.

mod catalog;
mod config;
mod details;
mod error;
mod event;
mod favorites;
mod fosdem;
mod localdb;
mod provenance;
mod query;
mod store;

pub use crate::catalog::Catalog;
pub use crate::config::{APP_NAME, Config};
pub use crate::details::{DetailLine, Details};
pub use crate::error::{Error, Result};
pub use crate::event::{Day, DayId, Event, Room, Speaker};
pub use crate::favorites::{
    EXPORT_FILE_NAME, FAVORITES_KEY, FavoriteSet, Favorites, FavoritesImport, ImportOutcome,
};
pub use crate::fosdem::Fosdem;
pub use crate::localdb::LocalDb;
pub use crate::provenance::format_scraped_at;
pub use crate::query::{Criteria, LinearScan, QueryEngine, SortKey};
pub use crate::store::{KeyValueStore, MemoryStore};
