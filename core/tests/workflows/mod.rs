// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the fosdem-core crate.
//!
//! These tests drive [`fosdem_core::Fosdem`] against real files and a real SQLite state
//! directory, covering catalog loading, favorites persistence across sessions and the
//! export/import round trip.

mod catalog_loading;
mod config_driven;
mod favorites_lifecycle;
mod import_export;
