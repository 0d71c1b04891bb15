// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

/// Result type for schedule operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the data boundaries of the schedule browser.
#[derive(Error, Debug)]
pub enum Error {
    /// The event catalog is missing or could not be parsed.
    #[error("Error parsing events data: {0}")]
    DataFormat(String),

    /// An imported favorites file is not a JSON array.
    #[error("Invalid favorites file: {0}")]
    ImportFormat(String),

    /// An imported favorites file contains an element that is not a string.
    #[error("Invalid favorites file: element {index} is not an event id")]
    ImportType {
        /// Position of the offending element in the imported array.
        index: usize,
    },

    /// The local key-value store failed.
    #[error("Favorites store error: {0}")]
    Store(#[from] sqlx::Error),

    /// The local key-value store schema could not be prepared.
    #[error("Favorites store migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// File system error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}
