// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use crate::Event;

/// The detail panel of an event: free text on top, metadata below.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Details<'a> {
    /// Abstract and description paragraphs.
    pub text: Vec<&'a str>,

    /// Room, time, video and chat lines.
    pub meta: Vec<DetailLine<'a>>,
}

/// One metadata line of the detail panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailLine<'a> {
    Room(&'a str),
    Time(String),
    Video(&'a str),
    Chat(&'a str),
}

impl DetailLine<'_> {
    /// The label shown in front of the value.
    pub fn label(&self) -> &'static str {
        match self {
            DetailLine::Room(_) => "Room",
            DetailLine::Time(_) => "Time",
            DetailLine::Video(_) => "Video",
            DetailLine::Chat(_) => "Chat",
        }
    }

    /// The value of the line.
    pub fn value(&self) -> &str {
        match self {
            DetailLine::Room(v) | DetailLine::Video(v) | DetailLine::Chat(v) => v,
            DetailLine::Time(v) => v,
        }
    }
}

impl fmt::Display for DetailLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label(), self.value())
    }
}

impl<'a> Details<'a> {
    /// Composes the detail panel of an event.
    ///
    /// Returns `None` when the event has none of abstract, description, room, start time,
    /// video link or chat link.
    pub fn compose(event: &'a Event) -> Option<Self> {
        let has_any = event.r#abstract.is_some()
            || event.description.is_some()
            || event.room.is_some()
            || event.start_time.is_some()
            || event.video_link.is_some()
            || event.chat_link.is_some();
        if !has_any {
            return None;
        }

        let mut text = Vec::new();
        if let Some(summary) = event.r#abstract.as_deref() {
            text.push(summary);
        }
        if let Some(description) = event.description.as_deref()
            && event.r#abstract.as_deref() != Some(description)
        {
            text.push(description);
        }

        let mut meta = Vec::new();
        if let Some(room) = event.room_name() {
            meta.push(DetailLine::Room(room));
        }
        if let Some(time) = time_range(event) {
            meta.push(DetailLine::Time(time));
        }
        if let Some(video) = event.video_link.as_deref() {
            meta.push(DetailLine::Video(video));
        }
        if let Some(chat) = event.chat_link.as_deref() {
            meta.push(DetailLine::Chat(chat));
        }

        Some(Self { text, meta })
    }

    /// Whether a divider separates the text block from the metadata block.
    pub fn has_divider(&self) -> bool {
        !self.text.is_empty() && !self.meta.is_empty()
    }
}

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for paragraph in &self.text {
            writeln!(f, "{paragraph}")?;
        }
        if self.has_divider() {
            writeln!(f, "---")?;
        }
        for line in &self.meta {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Day name followed by `start–end`, or whichever bound is known.
fn time_range(event: &Event) -> Option<String> {
    let range = match (event.start_time.as_deref(), event.end_time.as_deref()) {
        (Some(start), Some(end)) => format!("{start}–{end}"),
        (Some(start), None) => start.to_owned(),
        (None, Some(end)) => format!("–{end}"),
        (None, None) => return None,
    };

    match event.day.as_ref().map(|d| d.name.as_str()) {
        Some(day) if !day.is_empty() => Some(format!("{day} {range}")),
        _ => Some(range),
    }
}
