// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use fosdem_core::{Details, Event};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Flex;
use ratatui::prelude::*;
use ratatui::symbols::border;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

use crate::cmd_event::provenance;
use crate::event_formatter::{FAVORITE_MARK, NOT_FAVORITE_MARK};
use crate::tui::browser_store::{BrowserStore, Modal, Mode};
use crate::tui::component::{Component, Message};
use crate::tui::dispatcher::{Action, Dispatcher};
use crate::util::{pop_grapheme, sanitize, sanitize_multiline, truncate_to_width, when_label};

const TITLE: &str = " FOSDEM ";
const SEARCH_LABEL: &str = "Search: ";
const HEADER_ROWS: u16 = 3;

/// The event browser: search, controls, event list and detail panel.
#[derive(Debug, Default)]
pub struct Browser;

impl Browser {
    pub fn new() -> Self {
        Self
    }

    fn block(&self) -> Block<'static> {
        Block::bordered().border_set(border::ROUNDED)
    }

    fn render_header(&self, store: &BrowserStore, area: Rect, buf: &mut Buffer) {
        let [search, controls, status] = Layout::vertical([Constraint::Length(1); 3]).areas(area);

        let label = match store.mode {
            Mode::Search => SEARCH_LABEL.yellow().bold(),
            Mode::List => SEARCH_LABEL.bold(),
        };
        Line::from(vec![label, sanitize(&store.criteria.search).into_owned().into()])
            .render(search, buf);

        let criteria = &store.criteria;
        let day = criteria.day.as_ref().map_or("all".to_owned(), |d| d.to_string());
        let track = criteria
            .track
            .as_deref()
            .map_or("all".to_owned(), |t| sanitize(t).into_owned());
        let favorites_only = if criteria.favorites_only { "on" } else { "off" };
        Line::from(vec![
            "Sort: ".bold(),
            criteria.sort_by.to_string().into(),
            "  Day: ".bold(),
            day.into(),
            "  Track: ".bold(),
            track.into(),
            "  Favorites only: ".bold(),
            favorites_only.into(),
        ])
        .render(controls, buf);

        let mut spans = vec![Span::from(format!(
            "{} events, {} favorites",
            store.visible.len(),
            store.favorites.len()
        ))];
        if let Some(provenance) = provenance(&store.catalog) {
            spans.push("  ".into());
            spans.push(provenance.into());
        }
        Line::from(spans).italic().render(status, buf);
    }

    fn render_list(&self, store: &BrowserStore, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        if height == 0 {
            return;
        }

        if store.visible.is_empty() {
            Line::from("No events found".italic()).render(area, buf);
            return;
        }

        let offset = store.selected.saturating_sub(height - 1);
        let width = area.width as usize;
        let lines: Vec<Line> = store
            .visible_events()
            .enumerate()
            .skip(offset)
            .take(height)
            .map(|(i, event)| {
                let line = list_line(event, store.favorites.contains(&event.id), width);
                match i == store.selected {
                    true => line.reversed(),
                    false => line,
                }
            })
            .collect();
        Paragraph::new(lines).render(area, buf);
    }

    fn render_detail(&self, store: &BrowserStore, area: Rect, buf: &mut Buffer) {
        let Some(event) = store.selected_event() else {
            return;
        };

        let header = match event.link.as_deref() {
            Some(link) => sanitize(link).into_owned().underlined(),
            None => sanitize(&event.title).into_owned().bold(),
        };
        let mut lines = vec![Line::from(header)];

        let speakers: Vec<_> = event.speaker_names().map(sanitize).collect();
        if !speakers.is_empty() {
            lines.push(Line::from(speakers.join(", ").italic()));
        }

        if let Some(details) = Details::compose(event) {
            lines.push(Line::default());
            lines.extend(
                sanitize_multiline(&details.to_string())
                    .lines()
                    .map(|l| Line::from(l.to_owned())),
            );
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }

    fn render_body(&self, store: &BrowserStore, inner: Rect, buf: &mut Buffer) {
        let [header, main] =
            Layout::vertical([Constraint::Length(HEADER_ROWS), Constraint::Fill(1)]).areas(inner);
        self.render_header(store, header, buf);

        let main = match &store.error {
            Some(e) => {
                let [error, rest] =
                    Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(main);
                Line::from(sanitize(e).into_owned().red()).render(error, buf);
                rest
            }
            None => main,
        };

        let [list, detail] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(main);
        let list_block = Block::default().borders(Borders::TOP | Borders::RIGHT);
        self.render_list(store, list_block.inner(list), buf);
        list_block.render(list, buf);

        let detail_block = Block::default().borders(Borders::TOP);
        self.render_detail(store, detail_block.inner(detail).inner(Margin::new(1, 0)), buf);
        detail_block.render(detail, buf);
    }

    fn render_modal(&self, modal: &Modal, area: Rect, buf: &mut Buffer) {
        let (title, lines) = match modal {
            Modal::ConfirmReplace {
                current, incoming, ..
            } => (
                " Import favorites ",
                vec![
                    Line::from(format!(
                        "Replace your {current} favorites with {incoming} imported ones?"
                    )),
                    Line::from(vec![
                        "<y>".blue().bold(),
                        " Replace  ".into(),
                        "<n>".blue().bold(),
                        " Keep".into(),
                    ]),
                ],
            ),
            Modal::Message(msg) => (
                " Message ",
                vec![
                    Line::from(sanitize(msg).into_owned()),
                    Line::from("Press any key".italic()),
                ],
            ),
        };

        let area = centered(area, 60, lines.len() as u16 + 2);
        Clear.render(area, buf);
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(self.block().title(Line::from(title.bold()).centered()))
            .render(area, buf);
    }

    fn on_list_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        area: Rect,
        key: KeyEvent,
    ) -> Option<Message> {
        let page = page_size(self.block().inner(area));
        let action = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return Some(Message::Exit),
            KeyCode::Up | KeyCode::Char('k') => Action::MoveSelection(-1),
            KeyCode::Down | KeyCode::Char('j') => Action::MoveSelection(1),
            KeyCode::PageUp => Action::MoveSelection(-page),
            KeyCode::PageDown => Action::MoveSelection(page),
            KeyCode::Home => Action::SelectFirst,
            KeyCode::End => Action::SelectLast,
            KeyCode::Char('/') => Action::EnterSearch,
            KeyCode::Char('f') | KeyCode::Char(' ') => Action::RequestToggleFavorite,
            KeyCode::Char('F') => Action::ToggleFavoritesOnly,
            KeyCode::Char('s') => Action::CycleSort,
            KeyCode::Char('d') => Action::CycleDay,
            KeyCode::Char('t') => Action::CycleTrack,
            KeyCode::Char('e') => Action::RequestExport,
            KeyCode::Char('i') => Action::RequestImport,
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }

    fn on_search_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BrowserStore>,
        key: KeyEvent,
    ) -> Option<Message> {
        let action = match key.code {
            KeyCode::Enter => Action::LeaveSearch { clear: false },
            KeyCode::Esc => Action::LeaveSearch { clear: true },
            KeyCode::Backspace => {
                let mut search = store.borrow().criteria.search.clone();
                pop_grapheme(&mut search);
                Action::UpdateSearch(search)
            }
            KeyCode::Char(c) => {
                let mut search = store.borrow().criteria.search.clone();
                search.push(c);
                Action::UpdateSearch(search)
            }
            _ => return None,
        };
        dispatcher.dispatch(action);
        Some(Message::Handled)
    }
}

impl Component<BrowserStore> for Browser {
    fn render(&self, store: &RefCell<BrowserStore>, area: Rect, buf: &mut Buffer) {
        let store = store.borrow();
        let block = self
            .block()
            .title(Line::from(TITLE.bold()).centered())
            .title_bottom(instructions(store.mode).centered())
            .white();
        let inner = block.inner(area);
        block.render(area, buf);

        if store.loading {
            Line::from("Loading events...".italic())
                .centered()
                .render(centered(inner, 100, 1), buf);
        } else {
            self.render_body(&store, inner, buf);
        }

        if let Some(modal) = &store.modal {
            self.render_modal(modal, area, buf);
        }
    }

    fn get_cursor_position(&self, store: &RefCell<BrowserStore>, area: Rect) -> Option<(u16, u16)> {
        let store = store.borrow();
        if store.mode != Mode::Search || store.loading || store.modal.is_some() {
            return None;
        }

        let inner = self.block().inner(area);
        let text = SEARCH_LABEL.width() + sanitize(&store.criteria.search).width();
        let column = inner.x + (text as u16).min(inner.width.saturating_sub(1));
        Some((column, inner.y))
    }

    fn on_key(
        &mut self,
        dispatcher: &mut Dispatcher,
        store: &RefCell<BrowserStore>,
        area: Rect,
        key: KeyEvent,
    ) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Exit);
        }

        let (modal, mode) = {
            let store = store.borrow();
            (store.modal.clone(), store.mode)
        };

        match modal {
            Some(Modal::ConfirmReplace { .. }) => {
                let accepted = match key.code {
                    KeyCode::Char('y') | KeyCode::Enter => true,
                    KeyCode::Char('n') | KeyCode::Esc => false,
                    _ => return None,
                };
                dispatcher.dispatch(Action::ConfirmReplace(accepted));
                Some(Message::Handled)
            }
            Some(Modal::Message(_)) => {
                dispatcher.dispatch(Action::DismissMessage);
                Some(Message::Handled)
            }
            None => match mode {
                Mode::Search => self.on_search_key(dispatcher, store, key),
                Mode::List => self.on_list_key(dispatcher, area, key),
            },
        }
    }
}

/// `★ Title [Track] Sat 10:00`, cut to `width` columns.
fn list_line(event: &Event, favorite: bool, width: usize) -> Line<'static> {
    let mut text = String::new();
    text.push_str(if favorite { FAVORITE_MARK } else { NOT_FAVORITE_MARK });
    text.push(' ');
    text.push_str(&sanitize(&event.title));
    if let Some(track) = event.track.as_deref() {
        text.push_str(&format!(" [{}]", sanitize(track)));
    }
    let when = when_label(event);
    if !when.is_empty() {
        text.push(' ');
        text.push_str(&sanitize(&when));
    }

    let text = truncate_to_width(&text, width).into_owned();
    match favorite {
        true => Line::from(text.yellow()),
        false => Line::from(text),
    }
}

fn instructions(mode: Mode) -> Line<'static> {
    match mode {
        Mode::Search => Line::from(vec![
            " Keep ".into(),
            "<Enter>".blue().bold(),
            " Clear ".into(),
            "<Esc> ".blue().bold(),
        ]),
        Mode::List => Line::from(vec![
            " Search ".into(),
            "</>".blue().bold(),
            " Favorite ".into(),
            "<f>".blue().bold(),
            " Only favorites ".into(),
            "<F>".blue().bold(),
            " Sort ".into(),
            "<s>".blue().bold(),
            " Day ".into(),
            "<d>".blue().bold(),
            " Track ".into(),
            "<t>".blue().bold(),
            " Export ".into(),
            "<e>".blue().bold(),
            " Import ".into(),
            "<i>".blue().bold(),
            " Quit ".into(),
            "<q> ".blue().bold(),
        ]),
    }
}

/// Rows of the event list for the given inner area.
fn page_size(inner: Rect) -> isize {
    // header rows and the list's top border
    (inner.height.saturating_sub(HEADER_ROWS + 1)).max(1) as isize
}

fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}
