// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - Catalog and configuration fixtures
//! - Temporary directory management with auto-cleanup

mod fixtures;
mod temp_dir;

#[allow(unused_imports)]
pub use fixtures::{SAMPLE_CATALOG, SAMPLE_LEGACY_CATALOG, test_config};
pub use temp_dir::setup_temp_dirs;
