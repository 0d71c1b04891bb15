// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;

use ratatui::{crossterm::event::KeyEvent, prelude::*};

use crate::tui::dispatcher::Dispatcher;

#[derive(Debug, PartialEq, Eq)]
pub enum Message {
    Handled,
    Exit,
}

pub trait Component<S> {
    /// Renders the component into the given area.
    fn render(&self, store: &RefCell<S>, area: Rect, buf: &mut Buffer);

    /// Returns the cursor position (column, row) for the component, if applicable.
    fn get_cursor_position(&self, _store: &RefCell<S>, _area: Rect) -> Option<(u16, u16)> {
        None // Default implementation returns no cursor position
    }

    /// Handles key events for the component.
    fn on_key(
        &mut self,
        _dispatcher: &mut Dispatcher,
        _store: &RefCell<S>,
        _area: Rect,
        _event: KeyEvent,
    ) -> Option<Message> {
        None // Default implementation does nothing
    }
}
