// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;
use std::fmt::Display;
use std::str::FromStr;

use crate::{Catalog, DayId, Event, FavoriteSet};

const MISSING_TIME: &str = "99:99";
const MISSING_LABEL: &str = "ZZZ";

/// Key used to order the visible events.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum SortKey {
    /// Day first (Saturday, Sunday, others), then start time.
    Time,

    /// Title, ascending.
    Title,

    /// Room name, events without a room last.
    Room,

    /// Day only.
    Day,

    /// Track name, events without a track last.
    #[default]
    Track,
}

impl SortKey {
    /// All keys, in the order the browser cycles through them.
    pub const ALL: [SortKey; 5] = [
        SortKey::Track,
        SortKey::Time,
        SortKey::Title,
        SortKey::Room,
        SortKey::Day,
    ];

    /// The key following this one when cycling.
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    fn compare(self, a: &Event, b: &Event) -> Ordering {
        match self {
            SortKey::Time => a
                .day_rank()
                .cmp(&b.day_rank())
                .then_with(|| start_time(a).cmp(start_time(b))),
            SortKey::Title => a.title.cmp(&b.title),
            SortKey::Room => room_label(a).cmp(room_label(b)),
            SortKey::Day => a.day_rank().cmp(&b.day_rank()),
            SortKey::Track => track_label(a).cmp(track_label(b)),
        }
    }
}

impl AsRef<str> for SortKey {
    fn as_ref(&self) -> &str {
        match self {
            SortKey::Time => "time",
            SortKey::Title => "title",
            SortKey::Room => "room",
            SortKey::Day => "day",
            SortKey::Track => "track",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_ref() == s)
            .ok_or_else(|| format!("Unknown sort key: {s}"))
    }
}

/// The current search, filter and sort selection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Criteria {
    /// Case-insensitive substring to look for. Empty matches everything.
    pub search: String,

    /// Only show favorites.
    pub favorites_only: bool,

    /// Sort order of the result.
    pub sort_by: SortKey,

    /// Only show events on this day. `None` shows all days.
    pub day: Option<DayId>,

    /// Only show events of this track. `None` shows all tracks.
    pub track: Option<String>,
}

impl Criteria {
    /// Default criteria sorted by the given key.
    pub fn sorted_by(sort_by: SortKey) -> Self {
        Self {
            sort_by,
            ..Default::default()
        }
    }

    /// Whether `event` passes every filter. `needle` is the lowercased search term.
    fn matches(&self, event: &Event, favorites: &FavoriteSet, needle: &str) -> bool {
        if self.favorites_only && !favorites.contains(&event.id) {
            return false;
        }

        if let Some(day) = &self.day
            && event.day.as_ref().is_none_or(|d| &d.id != day)
        {
            return false;
        }

        if let Some(track) = &self.track
            && event.track.as_ref() != Some(track)
        {
            return false;
        }

        needle.is_empty() || search_text(event).contains(needle)
    }
}

/// Produces the visible, ordered subset of a catalog.
pub trait QueryEngine {
    /// Filters the catalog by `criteria` and sorts the result.
    fn compute<'a>(
        &self,
        catalog: &'a Catalog,
        favorites: &FavoriteSet,
        criteria: &Criteria,
    ) -> Vec<&'a Event>;
}

/// Query engine scanning every event, fine for catalogs in the low thousands.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinearScan;

impl QueryEngine for LinearScan {
    fn compute<'a>(
        &self,
        catalog: &'a Catalog,
        favorites: &FavoriteSet,
        criteria: &Criteria,
    ) -> Vec<&'a Event> {
        let needle = criteria.search.to_lowercase();
        let mut events: Vec<_> = catalog
            .events()
            .iter()
            .filter(|e| criteria.matches(e, favorites, &needle))
            .collect();

        // stable, so ties keep catalog order
        events.sort_by(|a, b| criteria.sort_by.compare(a, b));
        events
    }
}

/// Lowercased title, speakers, room and track joined by spaces.
fn search_text(event: &Event) -> String {
    let mut parts = vec![event.title.as_str()];
    parts.extend(event.speaker_names());
    parts.push(event.room_name().unwrap_or_default());
    parts.push(event.track.as_deref().unwrap_or_default());
    parts.join(" ").to_lowercase()
}

fn start_time(event: &Event) -> &str {
    event.start_time.as_deref().unwrap_or(MISSING_TIME)
}

fn room_label(event: &Event) -> &str {
    event.room_name().unwrap_or(MISSING_LABEL)
}

fn track_label(event: &Event) -> &str {
    event.track.as_deref().unwrap_or(MISSING_LABEL)
}
