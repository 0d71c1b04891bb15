// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;
use std::sync::Arc;

use tokio::fs;

use crate::{
    Catalog, Config, Criteria, Error, Event, FavoriteSet, Favorites, FavoritesImport,
    ImportOutcome, LinearScan, LocalDb, QueryEngine,
};

/// Schedule browser core: the catalog, the persisted favorites and the query engine.
#[derive(Debug)]
pub struct Fosdem {
    config: Config,
    db: LocalDb,
    catalog: Arc<Catalog>,
    favorites: Favorites<LocalDb>,
    engine: LinearScan,
}

impl Fosdem {
    /// Creates a new instance with the given configuration.
    ///
    /// Favorites are loaded right away. The catalog starts empty until [`Self::load_catalog`].
    pub async fn new(mut config: Config) -> Result<Self, Error> {
        config.normalize()?;
        prepare(&config).await?;

        let db = LocalDb::open(config.db_path().as_deref()).await?;
        let favorites = Favorites::load(db.clone()).await?;
        Ok(Self {
            config,
            db,
            catalog: Arc::new(Catalog::default()),
            favorites,
            engine: LinearScan,
        })
    }

    /// The configuration in use, after normalization.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reads the catalog document configured in `catalog_path`.
    pub async fn load_catalog(&mut self) -> Result<Arc<Catalog>, Error> {
        let catalog = Arc::new(Catalog::load_file(&self.config.catalog_path).await?);
        self.catalog = catalog.clone();
        Ok(catalog)
    }

    /// The loaded catalog, empty before [`Self::load_catalog`].
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// The current favorites.
    pub fn favorites(&self) -> &FavoriteSet {
        self.favorites.set()
    }

    /// Criteria the browser starts with.
    pub fn default_criteria(&self) -> Criteria {
        Criteria::sorted_by(self.config.default_sort)
    }

    /// The visible, ordered events for `criteria`.
    pub fn query(&self, criteria: &Criteria) -> Vec<&Event> {
        self.engine
            .compute(&self.catalog, self.favorites.set(), criteria)
    }

    /// Flips the favorite state of `id`. Returns whether it is now a favorite.
    pub async fn toggle_favorite(&mut self, id: &str) -> Result<bool, Error> {
        if !self.catalog.is_empty() && !self.catalog.contains(id) {
            tracing::warn!(id, "toggling favorite of an event missing from the catalog");
        }
        self.favorites.toggle(id).await
    }

    /// Favorites serialized as a JSON array.
    pub fn export_favorites(&self) -> Result<Vec<u8>, Error> {
        self.favorites.export()
    }

    /// Default path for favorites export and import.
    pub fn export_path(&self) -> PathBuf {
        self.config.export_path()
    }

    /// Whether importing would overwrite existing favorites.
    pub fn needs_confirmation(&self) -> bool {
        self.favorites.needs_confirmation()
    }

    /// Replaces the favorites with an already parsed import.
    pub async fn replace_favorites(&mut self, import: FavoritesImport) -> Result<usize, Error> {
        self.favorites.replace(import).await
    }

    /// Parses `bytes` and replaces the favorites, asking `confirm` before overwriting.
    pub async fn import_favorites<F>(
        &mut self,
        bytes: &[u8],
        confirm: F,
    ) -> Result<ImportOutcome, Error>
    where
        F: FnOnce(usize, usize) -> bool,
    {
        self.favorites.import(bytes, confirm).await
    }

    /// Close the database connection.
    pub async fn close(self) -> Result<(), Error> {
        self.db.close().await
    }
}

async fn prepare(config: &Config) -> Result<(), Error> {
    match &config.state_dir {
        Some(state_dir) => {
            tracing::info!(path = %state_dir.display(), "ensuring state directory exists");
            fs::create_dir_all(state_dir).await?;
        }
        None => tracing::warn!("no state directory, favorites will not be persisted"),
    }
    Ok(())
}
