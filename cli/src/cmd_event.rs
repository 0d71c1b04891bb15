// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use fosdem_core::{Catalog, Details, Fosdem, format_scraped_at};
use jiff::tz::TimeZone;

use crate::arg::{CommonArgs, CriteriaArgs};
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::util::{OutputFormat, sanitize, sanitize_multiline};

#[derive(Debug, Clone)]
pub struct CmdEventList {
    pub criteria: CriteriaArgs,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdEventList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List events matching the search and filters")
            .args(CriteriaArgs::args())
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            criteria: CriteriaArgs::from(matches),
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing events...");
        let catalog = fosdem.load_catalog().await?;
        let criteria = self.criteria.into_criteria(fosdem.default_criteria());

        let events = fosdem.query(&criteria);
        let rows: Vec<_> = events
            .iter()
            .map(|e| EventRow::new(e, fosdem.favorites()))
            .collect();

        if self.output_format == OutputFormat::Table {
            if rows.is_empty() {
                println!("{}", "No events found".italic());
            } else {
                print_rows(&rows, self.output_format, self.verbose);
            }
            let status = format!(
                "{} events, {} favorites",
                rows.len(),
                fosdem.favorites().len()
            );
            println!("{}", status.italic());
            if let Some(provenance) = provenance(&catalog) {
                println!("{}", provenance.italic());
            }
        } else {
            print_rows(&rows, self.output_format, self.verbose);
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdEventShow {
    pub id: String,
}

impl CmdEventShow {
    pub const NAME: &str = "show";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the details of an event")
            .arg(CommonArgs::id())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            id: CommonArgs::get_id(matches),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing event...");
        let catalog = fosdem.load_catalog().await?;
        let event = catalog
            .get(&self.id)
            .ok_or_else(|| format!("Event not found: {}", sanitize(&self.id)))?;

        let rows = [EventRow::new(event, fosdem.favorites())];
        let columns = vec![
            EventColumn::Favorite,
            EventColumn::When,
            EventColumn::Track,
            EventColumn::Title,
        ];
        print!("{}", EventFormatter::new(columns).format(&rows));

        let speakers: Vec<_> = event.speaker_names().map(sanitize).collect();
        if !speakers.is_empty() {
            println!("{}", speakers.join(", ").bold());
        }
        if let Some(link) = event.link.as_deref() {
            println!("{}", sanitize(link).underline());
        }

        if let Some(details) = Details::compose(event) {
            println!();
            print!("{}", sanitize_multiline(&details.to_string()));
            println!();
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdTracks;

impl CmdTracks {
    pub const NAME: &str = "tracks";

    pub fn command() -> Command {
        Command::new(Self::NAME).about("List the tracks of the conference")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        Self
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing tracks...");
        let catalog = fosdem.load_catalog().await?;
        for track in catalog.distinct_tracks() {
            println!("{}", sanitize(track));
        }
        Ok(())
    }
}

fn print_rows(rows: &[EventRow<'_>], output_format: OutputFormat, verbose: bool) {
    let formatter = EventFormatter::new(EventFormatter::list_columns(verbose))
        .with_output_format(output_format);
    print!("{}", formatter.format(rows));
}

/// `Data as of ...` line for the catalog, if it carries a timestamp.
pub fn provenance(catalog: &Catalog) -> Option<String> {
    catalog.scraped_at().map(|raw| {
        let at = format_scraped_at(raw, &TimeZone::system());
        format!("Data as of {}", sanitize(&at))
    })
}
