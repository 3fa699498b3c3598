// ABOUTME: Integration tests for the key-value stores and repositories on disk
// ABOUTME: Uses temporary directories so runs never touch the real data directory
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{file_store, memory_store, sample_profile};
use serde_json::json;
use std::sync::Arc;
use vitality::constants::storage_keys;
use vitality::errors::ErrorCode;
use vitality::models::{ActivityProfile, Profile};
use vitality::repositories::{NutritionistDirectory, ProfileRepository};
use vitality::storage::file::FileStore;
use vitality::storage::{load_json, open_store, save_json, StorageConfig};

#[tokio::test]
async fn test_records_survive_reopening_the_store() {
    let (dir, store) = file_store().await;
    ProfileRepository::new(store.clone())
        .save(&sample_profile())
        .await
        .unwrap();
    let paula = NutritionistDirectory::new(store)
        .add("Dra. Paula", "paula@clinica.com", "")
        .await
        .unwrap();

    let reopened = Arc::new(FileStore::open(dir.path().join("vitality")).await.unwrap());
    let profile = ProfileRepository::new(reopened.clone()).load().await.unwrap();
    assert_eq!(profile, Some(sample_profile()));
    let nutritionists = NutritionistDirectory::new(reopened).list().await.unwrap();
    assert_eq!(nutritionists, vec![paula]);
}

#[tokio::test]
async fn test_legacy_portuguese_profile_loads() {
    let store = memory_store();
    let legacy = json!({
        "nome": "João Lima",
        "idade": "41",
        "genero": "masculino",
        "altura": "1,78",
        "peso": 88,
        "estado": "atleta_amador",
        "hasComorbidities": true,
        "comorbidades": ["Diabetes", "Outros"],
        "comorbidadeOutros": "Asma leve"
    });
    store
        .set(storage_keys::PROFILE, legacy.to_string())
        .await
        .unwrap();

    let profile = ProfileRepository::new(store).load().await.unwrap().unwrap();
    assert_eq!(profile.name, "João Lima");
    assert_eq!(profile.age, 41);
    assert_eq!(profile.weight_kg(), Some(88.0));
    assert_eq!(profile.other_comorbidity_note(), Some("Asma leve"));
    assert_eq!(profile.activity_profile, ActivityProfile::AmateurAthlete);
}

#[tokio::test]
async fn test_malformed_record_is_a_serialization_error_for_typed_reads() {
    let store = memory_store();
    store
        .set(storage_keys::PROFILE, "[1, 2".to_owned())
        .await
        .unwrap();

    let err = load_json::<Profile>(store.as_ref(), storage_keys::PROFILE)
        .await
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);
    assert!(ProfileRepository::new(store).load().await.unwrap().is_none());
}

#[tokio::test]
async fn test_open_store_backends() {
    let memory = open_store(&StorageConfig::Memory).await.unwrap();
    assert_eq!(memory.backend_name(), "memory");

    let dir = tempfile::TempDir::new().unwrap();
    let file = open_store(&StorageConfig::File(dir.path().join("nested/data")))
        .await
        .unwrap();
    assert_eq!(file.backend_name(), "file");
    save_json(file.as_ref(), "probe", &vec![1, 2, 3]).await.unwrap();
    assert!(dir.path().join("nested/data/probe.json").exists());
}

#[tokio::test]
async fn test_invalid_keys_are_rejected() {
    let store = memory_store();
    let err = store.set("../escape", String::new()).await.unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}
