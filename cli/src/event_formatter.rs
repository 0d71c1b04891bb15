// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use fosdem_core::{Event, FavoriteSet};

use crate::table::{PaddingDirection, Table, TableColumn, TableStyleBasic, TableStyleJson};
use crate::util::{OutputFormat, sanitize, when_label};

pub const FAVORITE_MARK: &str = "★";
pub const NOT_FAVORITE_MARK: &str = "☆";

/// An event together with its favorite state.
#[derive(Debug, Clone, Copy)]
pub struct EventRow<'a> {
    pub event: &'a Event,
    pub favorite: bool,
}

impl<'a> EventRow<'a> {
    pub fn new(event: &'a Event, favorites: &FavoriteSet) -> Self {
        Self {
            event,
            favorite: favorites.contains(&event.id),
        }
    }
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    /// Columns of the event list, with id, room and link when `verbose`.
    pub fn list_columns(verbose: bool) -> Vec<EventColumn> {
        if verbose {
            vec![
                EventColumn::Favorite,
                EventColumn::Id,
                EventColumn::When,
                EventColumn::Room,
                EventColumn::Track,
                EventColumn::Title,
                EventColumn::Link,
            ]
        } else {
            vec![
                EventColumn::Favorite,
                EventColumn::When,
                EventColumn::Track,
                EventColumn::Title,
            ]
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, rows: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            rows,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    rows: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let columns = &self.formatter.columns;
        match self.formatter.format {
            OutputFormat::Json => write!(
                f,
                "{}",
                Table::new(TableStyleJson::new(), columns, self.rows)
            ),
            OutputFormat::Table => write!(
                f,
                "{}",
                Table::new(TableStyleBasic::new(), columns, self.rows)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Favorite,
    Id,
    Title,
    Track,
    When,
    Room,
    Link,
}

impl<'r> TableColumn<EventRow<'r>> for EventColumn {
    fn name(&self) -> Cow<'_, str> {
        match self {
            EventColumn::Favorite => "favorite",
            EventColumn::Id => "id",
            EventColumn::Title => "title",
            EventColumn::Track => "track",
            EventColumn::When => "when",
            EventColumn::Room => "room",
            EventColumn::Link => "link",
        }
        .into()
    }

    fn format<'a>(&self, row: &'a EventRow<'r>) -> Cow<'a, str> {
        let event = row.event;
        match self {
            EventColumn::Favorite => match row.favorite {
                true => FAVORITE_MARK.into(),
                false => NOT_FAVORITE_MARK.into(),
            },
            EventColumn::Id => sanitize(&event.id).into_owned().into(),
            EventColumn::Title => sanitize(&event.title).into_owned().into(),
            EventColumn::Track => match event.track.as_deref() {
                Some(track) => format!("[{}]", sanitize(track)).into(),
                None => "".into(),
            },
            EventColumn::When => sanitize(&when_label(event)).into_owned().into(),
            EventColumn::Room => sanitize(event.room_name().unwrap_or_default())
                .into_owned()
                .into(),
            EventColumn::Link => sanitize(event.link.as_deref().unwrap_or_default())
                .into_owned()
                .into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::When => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn color(&self, row: &EventRow<'r>) -> Option<Color> {
        match self {
            EventColumn::Favorite if row.favorite => Some(Color::Yellow),
            EventColumn::Track => Some(Color::Cyan),
            _ => None,
        }
    }
}
