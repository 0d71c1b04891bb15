// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod app;
mod browser_store;
mod browser_view;
mod component;
mod dispatcher;
mod idle;

pub use app::browse;
