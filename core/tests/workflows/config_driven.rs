// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.

use std::path::PathBuf;

use fosdem_core::{Config, EXPORT_FILE_NAME, Fosdem, SortKey};

use crate::common::{setup_temp_dirs, test_config};

#[tokio::test]
async fn config_creates_state_dir_and_database() {
    let dirs = setup_temp_dirs().await.unwrap();
    assert!(!dirs.state_dir.exists());

    let path = dirs.data_dir.join("events.json");
    let fosdem = Fosdem::new(test_config(&path, &dirs.state_dir)).await.unwrap();
    fosdem.close().await.unwrap();

    assert!(dirs.state_dir.is_dir());
    assert!(dirs.state_dir.join("fosdem.db").is_file());
}

#[tokio::test]
async fn config_default_sort_applied() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut config = test_config(&dirs.data_dir.join("events.json"), &dirs.state_dir);
    config.default_sort = SortKey::Room;

    let fosdem = Fosdem::new(config).await.unwrap();

    let criteria = fosdem.default_criteria();
    assert_eq!(criteria.sort_by, SortKey::Room);
    assert!(criteria.search.is_empty());
    assert!(!criteria.favorites_only);
    assert_eq!(criteria.day, None);
    assert_eq!(criteria.track, None);
}

#[tokio::test]
async fn config_export_path_defaults_to_working_directory() {
    let dirs = setup_temp_dirs().await.unwrap();
    let fosdem = Fosdem::new(test_config(&dirs.data_dir.join("e.json"), &dirs.state_dir))
        .await
        .unwrap();
    assert_eq!(fosdem.export_path(), PathBuf::from(EXPORT_FILE_NAME));
}

#[tokio::test]
async fn config_export_path_override() {
    let dirs = setup_temp_dirs().await.unwrap();
    let mut config = test_config(&dirs.data_dir.join("e.json"), &dirs.state_dir);
    config.export_path = Some(dirs.data_dir.join("mine.json"));

    let fosdem = Fosdem::new(config).await.unwrap();
    assert_eq!(fosdem.export_path(), dirs.data_dir.join("mine.json"));
}

#[tokio::test]
async fn config_from_toml_document() {
    let config: Config = toml::from_str(
        r#"
catalog_path = "/srv/fosdem/events.json"
default_sort = "title"
"#,
    )
    .unwrap();
    assert_eq!(config.catalog_path, PathBuf::from("/srv/fosdem/events.json"));
    assert_eq!(config.default_sort, SortKey::Title);
}
