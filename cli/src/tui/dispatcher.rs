// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, rc::Rc, sync::Arc};

use fosdem_core::{Catalog, FavoriteSet, FavoritesImport};

type Callback = Rc<RefCell<dyn FnMut(&Action)>>;

pub struct Dispatcher {
    subscribers: Vec<Callback>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }

    pub fn register(&mut self, callback: Callback) {
        self.subscribers.push(callback);
    }

    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatching action");
        for sub in &self.subscribers {
            (sub.borrow_mut())(&action);
        }
    }
}

#[derive(Debug, Clone)]
pub enum Action {
    CatalogLoaded(Arc<Catalog>),
    CatalogFailed(String),

    EnterSearch,
    LeaveSearch { clear: bool },
    UpdateSearch(String),
    ToggleFavoritesOnly,
    CycleSort,
    CycleDay,
    CycleTrack,

    MoveSelection(isize),
    SelectFirst,
    SelectLast,

    RequestToggleFavorite,
    FavoritesChanged(FavoriteSet),
    RequestExport,
    RequestImport,
    AskReplaceFavorites(FavoritesImport),
    ConfirmReplace(bool),

    ShowMessage(String),
    DismissMessage,
}
