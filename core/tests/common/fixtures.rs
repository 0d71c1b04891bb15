// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use fosdem_core::Config;

/// A small wrapped catalog spanning both days and three tracks.
pub const SAMPLE_CATALOG: &str = r#"{
  "scrapedAt": "2026-01-20T10:11:12.123456",
  "events": [
    {
      "id": "rust-async",
      "title": "Async Rust in Practice",
      "track": "Rust",
      "day": {"id": "sunday", "name": "Sunday"},
      "room": {"id": "h1308", "name": "H.1308"},
      "startTime": "10:00",
      "endTime": "10:30",
      "speakers": [{"id": "ferris", "name": "Ferris Crab"}],
      "abstract": "Futures, executors and you.",
      "link": "https://fosdem.org/2026/schedule/event/rust-async/"
    },
    {
      "id": "keynote",
      "title": "Welcome to FOSDEM",
      "track": "Keynotes",
      "day": {"id": "saturday", "name": "Saturday"},
      "room": {"id": "janson", "name": "Janson"},
      "startTime": "09:30",
      "endTime": "09:55",
      "speakers": [{"id": "staff", "name": "FOSDEM Staff"}],
      "videoLink": "https://live.fosdem.org/watch/janson"
    },
    {
      "id": "kernel-rust",
      "title": "Rust for Linux",
      "track": "Kernel",
      "day": {"id": "saturday", "name": "Saturday"},
      "room": {"id": "ua2114", "name": "UA2.114"},
      "startTime": "14:00",
      "endTime": "14:40",
      "speakers": [{"id": "miguel", "name": "Miguel Ojeda"}]
    }
  ]
}"#;

/// The same kind of data in the older bare-array layout without provenance.
pub const SAMPLE_LEGACY_CATALOG: &str = r#"[
  {"id": "a", "title": "First", "track": "Go"},
  {"id": "b", "title": "Second", "track": "Go"}
]"#;

/// Creates a test configuration reading `catalog_path` and persisting into `state_dir`.
#[must_use]
pub fn test_config(catalog_path: &Path, state_dir: &Path) -> Config {
    let mut config = Config::new(catalog_path);
    config.state_dir = Some(state_dir.to_path_buf());
    config
}
