// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{cell::RefCell, error::Error, rc::Rc, time::Duration};

use fosdem_core::{FavoritesImport, Fosdem};
use ratatui::crossterm::event::{self, Event, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tokio::fs;

use crate::tui::browser_store::{BrowserStore, Effect};
use crate::tui::browser_view::Browser;
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::tui::idle::IdleScheduler;

/// Longest time the catalog load waits for the input queue to drain.
const MAX_IDLE_WAIT: Duration = Duration::from_secs(1);

/// Runs the interactive browser until the user quits.
pub async fn browse(fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
    let store = BrowserStore::new(fosdem.default_criteria(), fosdem.favorites().clone());
    let store = Rc::new(RefCell::new(store));

    let mut terminal = ratatui::init();
    let result = {
        let mut dispatcher = Dispatcher::new();
        BrowserStore::register_to(store.clone(), &mut dispatcher);
        run(fosdem, &store, &mut dispatcher, &mut terminal).await
    }; // release dispatcher here to avoid borrow conflicts
    ratatui::restore();
    result
}

async fn run(
    fosdem: &mut Fosdem,
    store: &RefCell<BrowserStore>,
    dispatcher: &mut Dispatcher,
    terminal: &mut DefaultTerminal,
) -> Result<(), Box<dyn Error>> {
    let mut view = Browser::new();
    let mut pending_load = Some(IdleScheduler::new(MAX_IDLE_WAIT));

    loop {
        terminal.draw(|frame| draw(&view, store, frame))?;

        if let Some(scheduler) = pending_load {
            let input_pending = event::poll(Duration::ZERO)?;
            if scheduler.ready(input_pending) {
                pending_load = None;
                load_catalog(fosdem, dispatcher).await;
                continue;
            }
        }

        let area = terminal.get_frame().area();
        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && view.on_key(dispatcher, store, area, key) == Some(Message::Exit)
        {
            return Ok(());
        }

        apply_effects(fosdem, store, dispatcher).await;
    }
}

fn draw(view: &Browser, store: &RefCell<BrowserStore>, frame: &mut Frame) {
    let area = frame.area();
    view.render(store, area, frame.buffer_mut());

    if let Some(position) = view.get_cursor_position(store, area) {
        frame.set_cursor_position(position);
    }
}

async fn load_catalog(fosdem: &mut Fosdem, dispatcher: &mut Dispatcher) {
    match fosdem.load_catalog().await {
        Ok(catalog) => dispatcher.dispatch(Action::CatalogLoaded(catalog)),
        Err(e) => {
            tracing::warn!(err = %e, "failed to load catalog");
            dispatcher.dispatch(Action::CatalogFailed(e.to_string()));
        }
    }
}

/// Performs the effects queued by the last key against the core.
async fn apply_effects(
    fosdem: &mut Fosdem,
    store: &RefCell<BrowserStore>,
    dispatcher: &mut Dispatcher,
) {
    loop {
        let effect = store.borrow_mut().pop_effect();
        let Some(effect) = effect else {
            break;
        };

        tracing::debug!(?effect, "applying effect");
        match apply(fosdem, effect).await {
            Ok(actions) => actions.into_iter().for_each(|a| dispatcher.dispatch(a)),
            Err(e) => {
                tracing::warn!(err = %e, "effect failed");
                dispatcher.dispatch(Action::ShowMessage(e.to_string()));
            }
        }
    }
}

async fn apply(fosdem: &mut Fosdem, effect: Effect) -> Result<Vec<Action>, Box<dyn Error>> {
    match effect {
        Effect::ToggleFavorite(id) => {
            fosdem.toggle_favorite(&id).await?;
            Ok(vec![Action::FavoritesChanged(fosdem.favorites().clone())])
        }
        Effect::Export => {
            let path = fosdem.export_path();
            let bytes = fosdem.export_favorites()?;
            fs::write(&path, bytes)
                .await
                .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

            let msg = format!(
                "Exported {} favorites to {}",
                fosdem.favorites().len(),
                path.display()
            );
            Ok(vec![Action::ShowMessage(msg)])
        }
        Effect::Import => {
            let path = fosdem.export_path();
            let bytes = fs::read(&path)
                .await
                .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
            let import = FavoritesImport::parse(&bytes)?;

            match fosdem.needs_confirmation() {
                true => Ok(vec![Action::AskReplaceFavorites(import)]),
                false => replace(fosdem, import).await,
            }
        }
        Effect::ReplaceFavorites(import) => replace(fosdem, import).await,
    }
}

async fn replace(
    fosdem: &mut Fosdem,
    import: FavoritesImport,
) -> Result<Vec<Action>, Box<dyn Error>> {
    let count = fosdem.replace_favorites(import).await?;
    Ok(vec![
        Action::FavoritesChanged(fosdem.favorites().clone()),
        Action::ShowMessage(format!("Imported {count} favorites")),
    ])
}
