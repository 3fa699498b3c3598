// ABOUTME: Integration tests for snapshot export, import, reset, and CSV export
// ABOUTME: Round-trips through a snapshot file on disk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{file_store, memory_store, sample_profile};
use vitality::backup::{
    export_snapshot, export_weigh_ins_csv, import_snapshot, read_snapshot, reset, write_snapshot,
    CSV_HEADER, SNAPSHOT_VERSION,
};
use vitality::errors::ErrorCode;
use vitality::repositories::{NutritionistDirectory, ProfileRepository, WeighInLog};
use vitality::storage::SharedStore;

async fn seed(store: &SharedStore) {
    ProfileRepository::new(store.clone())
        .save(&sample_profile())
        .await
        .unwrap();
    let log = WeighInLog::new(store.clone());
    log.append("63").await.unwrap();
    log.append("62,4").await.unwrap();
    let directory = NutritionistDirectory::new(store.clone());
    let paula = directory.add("Dra. Paula", "", "").await.unwrap();
    directory
        .add_recommendation(paula.id, "Reduzir o sal")
        .await
        .unwrap();
}

#[tokio::test]
async fn test_export_reset_import_restores_everything() {
    let (dir, store) = file_store().await;
    seed(&store).await;

    let snapshot = export_snapshot(&store).await.unwrap();
    assert_eq!(snapshot.version, SNAPSHOT_VERSION);
    let path = dir.path().join("backup.json");
    write_snapshot(&snapshot, &path).await.unwrap();

    reset(&store).await.unwrap();
    assert!(ProfileRepository::new(store.clone()).load().await.unwrap().is_none());
    assert!(WeighInLog::new(store.clone()).list().await.unwrap().is_empty());

    let restored = read_snapshot(&path).await.unwrap();
    import_snapshot(&store, &restored).await.unwrap();

    let again = export_snapshot(&store).await.unwrap();
    assert_eq!(again.profile, snapshot.profile);
    assert_eq!(again.weigh_ins, snapshot.weigh_ins);
    assert_eq!(again.nutritionists, snapshot.nutritionists);
}

#[tokio::test]
async fn test_import_replaces_existing_records() {
    let source = memory_store();
    seed(&source).await;
    let snapshot = export_snapshot(&source).await.unwrap();

    let target = memory_store();
    WeighInLog::new(target.clone()).append("90").await.unwrap();
    import_snapshot(&target, &snapshot).await.unwrap();

    let weights: Vec<f64> = WeighInLog::new(target)
        .list()
        .await
        .unwrap()
        .iter()
        .map(|entry| entry.weight_kg)
        .collect();
    assert_eq!(weights, vec![63.0, 62.4]);
}

#[tokio::test]
async fn test_newer_snapshot_version_rejected() {
    let store = memory_store();
    let mut snapshot = export_snapshot(&store).await.unwrap();
    snapshot.version = SNAPSHOT_VERSION + 1;
    let err = import_snapshot(&store, &snapshot).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[tokio::test]
async fn test_csv_export_includes_bmi() {
    let store = memory_store();
    seed(&store).await;

    let csv = export_weigh_ins_csv(&store).await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CSV_HEADER);
    assert_eq!(lines.len(), 3);
    assert!(lines[1].ends_with(",63,23.1"), "{}", lines[1]);
}

#[tokio::test]
async fn test_csv_export_without_profile_leaves_bmi_blank() {
    let store = memory_store();
    WeighInLog::new(store.clone()).append("70").await.unwrap();
    let csv = export_weigh_ins_csv(&store).await.unwrap();
    assert!(csv.lines().nth(1).unwrap().ends_with(",70,"));
}
