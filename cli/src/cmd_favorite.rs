// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use fosdem_core::{Catalog, FavoritesImport, Fosdem};
use tokio::fs;

use crate::arg::CommonArgs;
use crate::event_formatter::{EventFormatter, EventRow, FAVORITE_MARK, NOT_FAVORITE_MARK};
use crate::prompt::prompt_replace_favorites;
use crate::util::{OutputFormat, sanitize};

#[derive(Debug, Clone)]
pub struct CmdFavoriteToggle {
    pub ids: Vec<String>,
}

impl CmdFavoriteToggle {
    pub const NAME: &str = "toggle";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Add events to or remove them from your favorites")
            .arg(CommonArgs::ids())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            ids: CommonArgs::get_ids(matches),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "toggling favorites...");
        // only used for labels
        let catalog = match fosdem.load_catalog().await {
            Ok(catalog) => Some(catalog),
            Err(e) => {
                tracing::warn!(err = %e, "catalog unavailable, showing bare ids");
                None
            }
        };

        for id in &self.ids {
            let now_favorite = fosdem.toggle_favorite(id).await?;
            let mark = match now_favorite {
                true => FAVORITE_MARK.yellow(),
                false => NOT_FAVORITE_MARK.normal(),
            };
            println!("{mark} {}", toggle_label(catalog.as_deref(), id));
        }
        Ok(())
    }
}

/// Title of the event, or its id when the catalog does not know it.
fn toggle_label(catalog: Option<&Catalog>, id: &str) -> String {
    match catalog {
        Some(catalog) => match catalog.get(id) {
            Some(event) => sanitize(&event.title).into_owned(),
            None => format!("{} {}", sanitize(id), "(not in catalog)".italic()),
        },
        None => sanitize(id).into_owned(),
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CmdFavoriteList {
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdFavoriteList {
    pub const NAME: &str = "list";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("ls")
            .about("List your favorite events in the order they were added")
            .arg(CommonArgs::output_format())
            .arg(CommonArgs::verbose())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
            verbose: CommonArgs::get_verbose(matches),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing favorites...");
        let catalog = fosdem.load_catalog().await?;
        let favorites = fosdem.favorites();

        let rows: Vec<_> = favorites
            .iter()
            .filter_map(|id| catalog.get(id))
            .map(|e| EventRow::new(e, favorites))
            .collect();
        let dangling: Vec<_> = favorites.iter().filter(|id| !catalog.contains(id)).collect();

        let formatter = EventFormatter::new(EventFormatter::list_columns(self.verbose))
            .with_output_format(self.output_format);
        match self.output_format {
            OutputFormat::Json => print!("{}", formatter.format(&rows)),
            OutputFormat::Table if favorites.is_empty() => {
                println!("{}", "No favorites yet".italic());
            }
            OutputFormat::Table => {
                print!("{}", formatter.format(&rows));
                for id in &dangling {
                    println!("{} {}", sanitize(id), "(not in catalog)".italic());
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFavoriteExport {
    pub path: Option<PathBuf>,
}

impl CmdFavoriteExport {
    pub const NAME: &str = "export";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Write your favorites to a JSON file")
            .arg(CommonArgs::path(
                false,
                "Destination file, defaults to ./fosdem-favorites.json",
            ))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: CommonArgs::get_path(matches),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "exporting favorites...");
        let path = self.path.unwrap_or_else(|| fosdem.export_path());
        let bytes = fosdem.export_favorites()?;
        fs::write(&path, bytes)
            .await
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;

        println!(
            "Exported {} favorites to {}",
            fosdem.favorites().len(),
            path.display()
        );
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct CmdFavoriteImport {
    pub path: PathBuf,
    pub yes: bool,
}

impl CmdFavoriteImport {
    pub const NAME: &str = "import";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Replace your favorites with the ones in a JSON file")
            .arg(CommonArgs::path(true, "File with a JSON array of event ids"))
            .arg(arg!(-y --yes "Replace existing favorites without asking"))
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            path: CommonArgs::get_path(matches).unwrap_or_default(),
            yes: matches.get_flag("yes"),
        }
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "importing favorites...");
        let bytes = fs::read(&self.path)
            .await
            .map_err(|e| format!("Failed to read {}: {e}", self.path.display()))?;
        let import = FavoritesImport::parse(&bytes)?;

        if fosdem.needs_confirmation()
            && !self.yes
            && !prompt_replace_favorites(fosdem.favorites().len(), import.incoming().len())?
        {
            tracing::info!("user declined to replace favorites");
            return Ok(());
        }

        let count = fosdem.replace_favorites(import).await?;
        println!("Imported {count} favorites");
        Ok(())
    }
}
