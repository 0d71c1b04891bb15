// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Favorites export and import between two state directories.

use std::cell::Cell;

use fosdem_core::{Error, Fosdem, ImportOutcome};
use tokio::fs;

use crate::common::{SAMPLE_CATALOG, setup_temp_dirs, test_config};

#[tokio::test]
async fn export_then_import_on_another_machine() {
    let laptop = setup_temp_dirs().await.unwrap();
    let phone = setup_temp_dirs().await.unwrap();
    let catalog = laptop.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut source = Fosdem::new(test_config(&catalog, &laptop.state_dir)).await.unwrap();
    source.toggle_favorite("keynote").await.unwrap();
    source.toggle_favorite("rust-async").await.unwrap();
    let exported = laptop.data_dir.join("favs.json");
    fs::write(&exported, source.export_favorites().unwrap())
        .await
        .unwrap();

    let mut target = Fosdem::new(test_config(&catalog, &phone.state_dir)).await.unwrap();
    let bytes = fs::read(&exported).await.unwrap();
    let asked = Cell::new(false);
    let outcome = target
        .import_favorites(&bytes, |_, _| {
            asked.set(true);
            true
        })
        .await
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Replaced(2));
    assert!(!asked.get(), "empty favorites need no confirmation");
    let ids: Vec<_> = target.favorites().iter().collect();
    assert_eq!(ids, ["keynote", "rust-async"]);
    target.close().await.unwrap();

    let target = Fosdem::new(test_config(&catalog, &phone.state_dir)).await.unwrap();
    assert_eq!(target.favorites().len(), 2);
}

#[tokio::test]
async fn declined_import_keeps_current_favorites() {
    let dirs = setup_temp_dirs().await.unwrap();
    let catalog = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&catalog, &dirs.state_dir)).await.unwrap();
    fosdem.toggle_favorite("keynote").await.unwrap();
    assert!(fosdem.needs_confirmation());

    let outcome = fosdem
        .import_favorites(br#"["rust-async", "kernel-rust"]"#, |current, incoming| {
            assert_eq!((current, incoming), (1, 2));
            false
        })
        .await
        .unwrap();

    assert_eq!(outcome, ImportOutcome::Declined);
    let ids: Vec<_> = fosdem.favorites().iter().collect();
    assert_eq!(ids, ["keynote"]);
}

#[tokio::test]
async fn invalid_import_leaves_favorites_untouched() {
    let dirs = setup_temp_dirs().await.unwrap();
    let catalog = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();

    let mut fosdem = Fosdem::new(test_config(&catalog, &dirs.state_dir)).await.unwrap();
    fosdem.toggle_favorite("keynote").await.unwrap();

    let err = fosdem
        .import_favorites(br#"{"favorites": []}"#, |_, _| true)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ImportFormat(_)), "unexpected error: {err}");

    let err = fosdem
        .import_favorites(br#"["a", 42]"#, |_, _| true)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ImportType { index: 1 }), "unexpected error: {err}");

    let ids: Vec<_> = fosdem.favorites().iter().collect();
    assert_eq!(ids, ["keynote"]);
}
