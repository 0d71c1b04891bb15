// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use clap::{Arg, ArgMatches, ValueHint, arg, value_parser};
use fosdem_core::{Criteria, DayId, SortKey};

use crate::util::OutputFormat;

/// Value meaning "no filter" for the day and track filters.
const ALL: &str = "all";

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information")
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }

    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }

    pub fn id() -> Arg {
        arg!(id: <ID> "The id of the event")
    }

    pub fn get_id(matches: &ArgMatches) -> String {
        matches.get_one::<String>("id").cloned().unwrap_or_default()
    }

    pub fn ids() -> Arg {
        arg!(id: <ID> "The ids of the events").num_args(1..)
    }

    pub fn get_ids(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("id")
            .map(|ids| ids.cloned().collect())
            .unwrap_or_default()
    }

    pub fn path(required: bool, help: &'static str) -> Arg {
        let arg = match required {
            true => arg!(path: <PATH>),
            false => arg!(path: [PATH]),
        };
        arg.help(help)
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
    }

    pub fn get_path(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("path").cloned()
    }
}

/// Search, filter and sort arguments shared by the listing commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CriteriaArgs {
    pub search: Option<String>,
    pub favorites: bool,
    pub sort: Option<SortKey>,
    pub day: Option<DayId>,
    pub track: Option<String>,
}

impl CriteriaArgs {
    pub fn args() -> [Arg; 5] {
        [
            arg!(-s --search <TEXT> "Search titles, speakers, rooms and tracks"),
            arg!(-f --favorites "Only show favorite events"),
            arg!(--sort <KEY> "Sort order, defaults to the configured one")
                .value_parser(value_parser!(SortKey)),
            arg!(-d --day <DAY> "Only show events on this day, e.g. saturday, or 'all'"),
            arg!(-t --track <TRACK> "Only show events of this track, or 'all'"),
        ]
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            search: matches.get_one("search").cloned(),
            favorites: matches.get_flag("favorites"),
            sort: matches.get_one("sort").copied(),
            day: matches
                .get_one::<String>("day")
                .filter(|a| !a.eq_ignore_ascii_case(ALL))
                .map(|a| DayId::from(a.to_lowercase())),
            track: matches
                .get_one::<String>("track")
                .filter(|a| !a.eq_ignore_ascii_case(ALL))
                .cloned(),
        }
    }

    /// Applies the arguments on top of `base`.
    pub fn into_criteria(self, base: Criteria) -> Criteria {
        Criteria {
            search: self.search.unwrap_or(base.search),
            favorites_only: self.favorites || base.favorites_only,
            sort_by: self.sort.unwrap_or(base.sort_by),
            day: self.day.or(base.day),
            track: self.track.or(base.track),
        }
    }
}
