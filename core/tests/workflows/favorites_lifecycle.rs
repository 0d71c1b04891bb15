// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Favorites persistence across sessions.

use fosdem_core::{Criteria, Fosdem};

use crate::common::{SAMPLE_CATALOG, setup_temp_dirs, test_config};

#[tokio::test]
async fn favorites_survive_restart() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    assert!(fosdem.favorites().is_empty());
    assert!(fosdem.toggle_favorite("rust-async").await.unwrap());
    assert!(fosdem.toggle_favorite("keynote").await.unwrap());
    fosdem.close().await.unwrap();

    let fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    let ids: Vec<_> = fosdem.favorites().iter().collect();
    assert_eq!(ids, ["rust-async", "keynote"]);
    fosdem.close().await.unwrap();
}

#[tokio::test]
async fn toggle_twice_restores_state() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    assert!(fosdem.toggle_favorite("keynote").await.unwrap());
    assert!(!fosdem.toggle_favorite("keynote").await.unwrap());
    fosdem.close().await.unwrap();

    let fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    assert!(fosdem.favorites().is_empty());
}

#[tokio::test]
async fn favorites_only_query_uses_current_set() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    fosdem.load_catalog().await.unwrap();
    fosdem.toggle_favorite("kernel-rust").await.unwrap();

    let criteria = Criteria {
        favorites_only: true,
        ..fosdem.default_criteria()
    };
    let ids: Vec<_> = fosdem.query(&criteria).iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["kernel-rust"]);
}

#[tokio::test]
async fn dangling_favorites_are_kept() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    fosdem.load_catalog().await.unwrap();
    assert!(fosdem.toggle_favorite("removed-talk").await.unwrap());

    let criteria = Criteria {
        favorites_only: true,
        ..Default::default()
    };
    assert!(fosdem.query(&criteria).is_empty());
    assert!(fosdem.favorites().contains("removed-talk"));
}
