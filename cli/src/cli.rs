// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use clap::{ArgMatches, Command, ValueHint, arg, builder::styling, crate_version, value_parser};
use colored::Colorize;
use fosdem_core::{APP_NAME, Fosdem};
use futures::{FutureExt, future::LocalBoxFuture};
use tracing_subscriber::EnvFilter;

use crate::cmd_browse::CmdBrowse;
use crate::cmd_event::{CmdEventList, CmdEventShow, CmdTracks};
use crate::cmd_favorite::{
    CmdFavoriteExport, CmdFavoriteImport, CmdFavoriteList, CmdFavoriteToggle,
};
use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::config::parse_config;

const CMD_FAVORITE: &str = "fav";

/// Run the FOSDEM command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(tracing::Level::ERROR.into())
                .from_env_lossy(),
        )
        .init();

    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Browse the FOSDEM schedule and keep track of your favorite talks.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to browse
            .arg_required_else_help(false)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $FOSDEM_CONFIG if set, otherwise \
$XDG_CONFIG_HOME/fosdem/config.toml on Linux and MacOS, %LOCALAPPDATA%/fosdem/config.toml \
on Windows.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .subcommand(CmdBrowse::command())
            .subcommand(CmdEventList::command())
            .subcommand(CmdEventShow::command())
            .subcommand(CmdTracks::command())
            .subcommand(
                Command::new(CMD_FAVORITE)
                    .alias("favorite")
                    .about("Manage your favorite events")
                    .arg_required_else_help(true)
                    .subcommand_required(true)
                    .subcommand(CmdFavoriteToggle::command())
                    .subcommand(CmdFavoriteList::command())
                    .subcommand(CmdFavoriteExport::command())
                    .subcommand(CmdFavoriteImport::command()),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdBrowse::NAME, matches)) => Browse(CmdBrowse::from(matches)),
            Some((CmdEventList::NAME, matches)) => List(CmdEventList::from(matches)),
            Some((CmdEventShow::NAME, matches)) => Show(CmdEventShow::from(matches)),
            Some((CmdTracks::NAME, matches)) => Tracks(CmdTracks::from(matches)),
            Some((CMD_FAVORITE, matches)) => match matches.subcommand() {
                Some((CmdFavoriteToggle::NAME, matches)) => {
                    FavoriteToggle(CmdFavoriteToggle::from(matches))
                }
                Some((CmdFavoriteList::NAME, matches)) => {
                    FavoriteList(CmdFavoriteList::from(matches))
                }
                Some((CmdFavoriteExport::NAME, matches)) => {
                    FavoriteExport(CmdFavoriteExport::from(matches))
                }
                Some((CmdFavoriteImport::NAME, matches)) => {
                    FavoriteImport(CmdFavoriteImport::from(matches))
                }
                _ => unreachable!(),
            },
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches))
            }
            None => Browse(CmdBrowse),
            _ => unreachable!(),
        };

        let config = matches.get_one("config").cloned();
        Ok(Cli { config, command })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        self.command.run(self.config).await
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Browse the schedule interactively
    Browse(CmdBrowse),

    /// List events
    List(CmdEventList),

    /// Show the details of an event
    Show(CmdEventShow),

    /// List tracks
    Tracks(CmdTracks),

    /// Toggle favorites
    FavoriteToggle(CmdFavoriteToggle),

    /// List favorites
    FavoriteList(CmdFavoriteList),

    /// Export favorites to a file
    FavoriteExport(CmdFavoriteExport),

    /// Import favorites from a file
    FavoriteImport(CmdFavoriteImport),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

impl Commands {
    /// Run the command with the given configuration
    #[rustfmt::skip]
    pub async fn run(self, config: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Browse(a)         => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            List(a)           => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Show(a)           => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            Tracks(a)         => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            FavoriteToggle(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            FavoriteList(a)   => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            FavoriteExport(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            FavoriteImport(a) => Self::run_with(config, |x| a.run(x).boxed_local()).await,
            GenerateCompletion(a) => a.run(),
        }
    }

    async fn run_with<F>(config: Option<PathBuf>, f: F) -> Result<(), Box<dyn Error>>
    where
        F: for<'a> FnOnce(&'a mut Fosdem) -> LocalBoxFuture<'a, Result<(), Box<dyn Error>>>,
    {
        tracing::debug!("parsing configuration...");
        let core_config = parse_config(config).await?;
        let mut fosdem = Fosdem::new(core_config).await?;

        let result = f(&mut fosdem).await;

        fosdem.close().await?;
        result
    }
}
