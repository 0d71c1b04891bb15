// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Catalog loading workflow tests.

use fosdem_core::{Criteria, DayId, Error, Fosdem, SortKey};

use crate::common::{SAMPLE_CATALOG, SAMPLE_LEGACY_CATALOG, setup_temp_dirs, test_config};

#[tokio::test]
async fn catalog_starts_empty_until_loaded() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();
    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();

    assert!(fosdem.catalog().is_empty());
    assert!(fosdem.query(&Criteria::default()).is_empty());

    let catalog = fosdem.load_catalog().await.unwrap();
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.scraped_at(), Some("2026-01-20T10:11:12.123456"));
    assert_eq!(fosdem.catalog().len(), 3);
}

#[tokio::test]
async fn legacy_catalog_has_no_provenance() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_LEGACY_CATALOG).await.unwrap();
    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();

    let catalog = fosdem.load_catalog().await.unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.scraped_at(), None);
}

#[tokio::test]
async fn missing_catalog_is_a_data_format_error() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.data_dir.join("missing.json");
    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();

    let err = fosdem.load_catalog().await.unwrap_err();
    assert!(matches!(err, Error::DataFormat(_)), "unexpected error: {err}");
    assert!(err.to_string().starts_with("Error parsing events data"));
    assert!(fosdem.catalog().is_empty());
}

#[tokio::test]
async fn malformed_catalog_is_a_data_format_error() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog("{\"events\": [").await.unwrap();
    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();

    let err = fosdem.load_catalog().await.unwrap_err();
    assert!(matches!(err, Error::DataFormat(_)), "unexpected error: {err}");
}

#[tokio::test]
async fn query_filters_and_sorts_loaded_catalog() {
    let dirs = setup_temp_dirs().await.unwrap();
    let path = dirs.write_catalog(SAMPLE_CATALOG).await.unwrap();
    let mut fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    fosdem.load_catalog().await.unwrap();

    let ids = |criteria: &Criteria| -> Vec<String> {
        fosdem.query(criteria).iter().map(|e| e.id.clone()).collect()
    };

    assert_eq!(
        ids(&fosdem.default_criteria()),
        ["kernel-rust", "keynote", "rust-async"]
    );
    assert_eq!(
        ids(&Criteria::sorted_by(SortKey::Time)),
        ["keynote", "kernel-rust", "rust-async"]
    );

    let saturday_rust = Criteria {
        search: "rust".to_string(),
        day: Some(DayId::Saturday),
        ..fosdem.default_criteria()
    };
    assert_eq!(ids(&saturday_rust), ["kernel-rust"]);

    let by_speaker = Criteria {
        search: "ferris".to_string(),
        ..Default::default()
    };
    assert_eq!(ids(&by_speaker), ["rust-async"]);
}
