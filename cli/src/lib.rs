// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod arg;
mod cli;
mod cmd_browse;
mod cmd_event;
mod cmd_favorite;
mod cmd_generate_completion;
mod config;
mod event_formatter;
mod prompt;
mod table;
mod tui;
mod util;

pub use crate::cli::{Cli, Commands, run};
