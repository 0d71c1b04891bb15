// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::convert::Infallible;
use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

/// One scheduled conference session.
///
/// Events are loaded once from the catalog and never mutated. Empty strings in optional
/// text fields are treated as absent, since the catalog fetcher writes `""` for missing
/// start and end times.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// The unique identifier for the event.
    pub id: String,

    /// The display title, never empty.
    pub title: String,

    /// The track (thematic category) of the event, if any.
    #[serde(default, deserialize_with = "non_empty")]
    pub track: Option<String>,

    /// The day the event takes place, if known.
    #[serde(default)]
    pub day: Option<Day>,

    /// The room the event takes place in, if known.
    #[serde(default)]
    pub room: Option<Room>,

    /// Start time of day, formatted as `HH:MM`.
    #[serde(default, deserialize_with = "non_empty")]
    pub start_time: Option<String>,

    /// End time of day, formatted as `HH:MM`.
    #[serde(default, deserialize_with = "non_empty")]
    pub end_time: Option<String>,

    /// Speakers in the order announced by the schedule.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub speakers: Vec<Speaker>,

    /// Short abstract of the talk.
    #[serde(default, deserialize_with = "non_empty")]
    pub r#abstract: Option<String>,

    /// Longer description of the talk.
    #[serde(default, deserialize_with = "non_empty")]
    pub description: Option<String>,

    /// Link to the live stream or recording.
    #[serde(default, deserialize_with = "non_empty")]
    pub video_link: Option<String>,

    /// Link to the chat room of the talk.
    #[serde(default, deserialize_with = "non_empty")]
    pub chat_link: Option<String>,

    /// Link to the event page on the conference website.
    #[serde(default, deserialize_with = "non_empty")]
    pub link: Option<String>,

    /// Icon of the conference website.
    #[serde(default, deserialize_with = "non_empty")]
    pub navicon: Option<String>,
}

impl Event {
    /// Rank of the event day: Saturday first, then Sunday, then everything else.
    pub fn day_rank(&self) -> u8 {
        self.day.as_ref().map_or(DayId::OTHER_RANK, |d| d.id.rank())
    }

    /// The room name, if the room is known.
    pub fn room_name(&self) -> Option<&str> {
        self.room.as_ref().map(|r| r.name.as_str())
    }

    /// Names of all speakers, skipping empty ones.
    pub fn speaker_names(&self) -> impl Iterator<Item = &str> {
        self.speakers
            .iter()
            .map(|s| s.name.as_str())
            .filter(|name| !name.is_empty())
    }
}

/// The day of an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Day {
    /// Machine readable day identifier, e.g. `saturday`.
    pub id: DayId,

    /// Display name, e.g. `Saturday`.
    #[serde(default)]
    pub name: String,
}

impl Day {
    /// The first three characters of the day name, e.g. `Sat`.
    pub fn short_name(&self) -> String {
        let name = if self.name.is_empty() {
            self.id.as_ref()
        } else {
            &self.name
        };
        name.chars().take(3).collect()
    }
}

/// Identifier of a conference day.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum DayId {
    /// The first day of the conference.
    Saturday,

    /// The second day of the conference.
    Sunday,

    /// Any other day identifier found in the catalog.
    Other(String),
}

const DAY_SATURDAY: &str = "saturday";
const DAY_SUNDAY: &str = "sunday";

impl DayId {
    const OTHER_RANK: u8 = 2;

    /// Sort rank of the day.
    pub fn rank(&self) -> u8 {
        match self {
            DayId::Saturday => 0,
            DayId::Sunday => 1,
            DayId::Other(_) => Self::OTHER_RANK,
        }
    }
}

impl AsRef<str> for DayId {
    fn as_ref(&self) -> &str {
        match self {
            DayId::Saturday => DAY_SATURDAY,
            DayId::Sunday => DAY_SUNDAY,
            DayId::Other(id) => id,
        }
    }
}

impl Display for DayId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}

impl From<String> for DayId {
    fn from(value: String) -> Self {
        match value.as_str() {
            DAY_SATURDAY => DayId::Saturday,
            DAY_SUNDAY => DayId::Sunday,
            _ => DayId::Other(value),
        }
    }
}

impl From<&str> for DayId {
    fn from(value: &str) -> Self {
        value.to_owned().into()
    }
}

impl FromStr for DayId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.into())
    }
}

/// The room of an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Room {
    /// Room identifier on the conference website.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name of the room.
    #[serde(default)]
    pub name: String,
}

/// A speaker of an event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Speaker {
    /// Speaker identifier on the conference website.
    #[serde(default)]
    pub id: Option<String>,

    /// Display name of the speaker.
    #[serde(default)]
    pub name: String,
}

fn non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
