// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::VecDeque;
use std::{cell::RefCell, rc::Rc, sync::Arc};

use fosdem_core::{
    Catalog, Criteria, DayId, Event, FavoriteSet, FavoritesImport, LinearScan, QueryEngine,
};

use crate::tui::dispatcher::{Action, Dispatcher};

/// What keys currently edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    List,
    Search,
}

/// A blocking dialog on top of the browser.
#[derive(Debug, Clone)]
pub enum Modal {
    ConfirmReplace {
        current: usize,
        incoming: usize,
        import: FavoritesImport,
    },
    Message(String),
}

/// Side effects the app loop performs against the core, outside of the store.
#[derive(Debug, Clone)]
pub enum Effect {
    ToggleFavorite(String),
    Export,
    Import,
    ReplaceFavorites(FavoritesImport),
}

/// State of the interactive browser.
#[derive(Debug)]
pub struct BrowserStore {
    pub catalog: Arc<Catalog>,
    pub favorites: FavoriteSet,
    pub criteria: Criteria,

    /// Ids of the visible events, in display order.
    pub visible: Vec<String>,
    pub selected: usize,

    pub mode: Mode,
    pub loading: bool,
    pub error: Option<String>,
    pub modal: Option<Modal>,

    effects: VecDeque<Effect>,
    days: Vec<DayId>,
    engine: LinearScan,
}

impl BrowserStore {
    pub fn new(criteria: Criteria, favorites: FavoriteSet) -> Self {
        Self {
            catalog: Arc::new(Catalog::default()),
            favorites,
            criteria,
            visible: Vec::new(),
            selected: 0,
            mode: Mode::List,
            loading: true,
            error: None,
            modal: None,
            effects: VecDeque::new(),
            days: Vec::new(),
            engine: LinearScan,
        }
    }

    /// The focused event, if any.
    pub fn selected_event(&self) -> Option<&Event> {
        self.visible
            .get(self.selected)
            .and_then(|id| self.catalog.get(id))
    }

    /// Visible events in display order.
    pub fn visible_events(&self) -> impl Iterator<Item = &Event> {
        self.visible.iter().filter_map(|id| self.catalog.get(id))
    }

    /// Takes the next pending effect.
    pub fn pop_effect(&mut self) -> Option<Effect> {
        self.effects.pop_front()
    }

    pub fn register_to(that: Rc<RefCell<Self>>, dispatcher: &mut Dispatcher) {
        let callback = Rc::new(RefCell::new(move |action: &Action| {
            that.borrow_mut().reduce(action);
        }));
        dispatcher.register(callback);
    }

    fn reduce(&mut self, action: &Action) {
        match action {
            Action::CatalogLoaded(catalog) => {
                self.catalog = catalog.clone();
                self.days = distinct_days(catalog);
                self.loading = false;
                self.error = None;
                self.recompute();
            }
            Action::CatalogFailed(e) => {
                self.loading = false;
                self.error = Some(e.clone());
                self.recompute();
            }

            Action::EnterSearch => self.mode = Mode::Search,
            Action::LeaveSearch { clear } => {
                self.mode = Mode::List;
                if *clear && !self.criteria.search.is_empty() {
                    self.criteria.search.clear();
                    self.recompute();
                }
            }
            Action::UpdateSearch(v) => {
                self.criteria.search = v.clone();
                self.recompute();
            }
            Action::ToggleFavoritesOnly => {
                self.criteria.favorites_only = !self.criteria.favorites_only;
                self.recompute();
            }
            Action::CycleSort => {
                self.criteria.sort_by = self.criteria.sort_by.next();
                self.recompute();
            }
            Action::CycleDay => {
                self.criteria.day = cycle(&self.days, self.criteria.day.as_ref());
                self.recompute();
            }
            Action::CycleTrack => {
                let tracks = self.catalog.distinct_tracks();
                self.criteria.track = cycle(tracks, self.criteria.track.as_ref());
                self.recompute();
            }

            Action::MoveSelection(offset) => {
                let last = self.visible.len().saturating_sub(1);
                self.selected = self.selected.saturating_add_signed(*offset).min(last);
            }
            Action::SelectFirst => self.selected = 0,
            Action::SelectLast => self.selected = self.visible.len().saturating_sub(1),

            Action::RequestToggleFavorite => {
                if let Some(id) = self.visible.get(self.selected) {
                    self.effects.push_back(Effect::ToggleFavorite(id.clone()));
                }
            }
            Action::FavoritesChanged(favorites) => {
                self.favorites = favorites.clone();
                self.recompute();
            }
            Action::RequestExport => self.effects.push_back(Effect::Export),
            Action::RequestImport => self.effects.push_back(Effect::Import),
            Action::AskReplaceFavorites(import) => {
                self.modal = Some(Modal::ConfirmReplace {
                    current: self.favorites.len(),
                    incoming: import.incoming().len(),
                    import: import.clone(),
                });
            }
            Action::ConfirmReplace(accepted) => {
                if let Some(Modal::ConfirmReplace { import, .. }) = self.modal.take()
                    && *accepted
                {
                    self.effects.push_back(Effect::ReplaceFavorites(import));
                }
            }

            Action::ShowMessage(msg) => self.modal = Some(Modal::Message(msg.clone())),
            Action::DismissMessage => self.modal = None,
        }
    }

    /// Recomputes the visible events, keeping the focused event when it is still visible.
    fn recompute(&mut self) {
        let focused = self.visible.get(self.selected).cloned();

        self.visible = self
            .engine
            .compute(&self.catalog, &self.favorites, &self.criteria)
            .into_iter()
            .map(|e| e.id.clone())
            .collect();

        self.selected = focused
            .and_then(|id| self.visible.iter().position(|a| *a == id))
            .unwrap_or(self.selected)
            .min(self.visible.len().saturating_sub(1));
    }
}

/// Day ids present in the catalog, Saturday first.
fn distinct_days(catalog: &Catalog) -> Vec<DayId> {
    let mut days: Vec<DayId> = Vec::new();
    for day in catalog.events().iter().filter_map(|e| e.day.as_ref()) {
        if !days.contains(&day.id) {
            days.push(day.id.clone());
        }
    }
    days.sort_by(|a, b| {
        a.rank()
            .cmp(&b.rank())
            .then_with(|| a.as_ref().cmp(b.as_ref()))
    });
    days
}

/// `None` → first → ... → last → `None`.
fn cycle<T: Clone + PartialEq>(values: &[T], current: Option<&T>) -> Option<T> {
    match current.and_then(|c| values.iter().position(|v| v == c)) {
        None if current.is_none() => values.first().cloned(),
        None => None,
        Some(i) => values.get(i + 1).cloned(),
    }
}
