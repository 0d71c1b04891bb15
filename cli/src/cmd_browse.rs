// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use fosdem_core::Fosdem;

use crate::tui;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdBrowse;

impl CmdBrowse {
    pub const NAME: &str = "browse";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("b")
            .about("Browse the schedule interactively, the default when no command is given")
    }

    pub fn from(_matches: &ArgMatches) -> Self {
        CmdBrowse
    }

    pub async fn run(self, fosdem: &mut Fosdem) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "starting browser...");
        tui::browse(fosdem).await
    }
}
