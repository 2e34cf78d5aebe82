// ABOUTME: Integration tests for the velocity baseline store
// ABOUTME: Interpolation, damped extrapolation, EMA updates, and the export contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use voltra_vbt::analytics::VelocityBaselineStore;
use voltra_vbt::core::config::BaselineConfig;
use voltra_vbt::core::errors::AnalyticsError;

const EXERCISE: &str = "goblet_squat";

/// Store seeded with the canonical two-point curve {50: 0.8, 100: 0.4}.
fn seeded_store() -> VelocityBaselineStore {
    let mut store = VelocityBaselineStore::new(BaselineConfig::default());
    store.update(EXERCISE, 50.0, 0.8, true);
    store.update(EXERCISE, 100.0, 0.4, true);
    store
}

#[test]
fn test_exact_match_returns_stored_velocity() {
    let store = seeded_store();
    assert!((store.get(EXERCISE, 50.0).unwrap() - 0.8).abs() < 1e-6);
    assert!((store.get(EXERCISE, 100.0).unwrap() - 0.4).abs() < 1e-6);
}

#[test]
fn test_linear_interpolation_between_known_weights() {
    let store = seeded_store();
    assert!((store.get(EXERCISE, 75.0).unwrap() - 0.6).abs() < 1e-6);
}

#[test]
fn test_light_extrapolation_is_faster_but_damped() {
    let store = seeded_store();
    let velocity = store.get(EXERCISE, 25.0).unwrap();
    // Lighter must be faster than the lightest known point...
    assert!(velocity > 0.8);
    // ...but damped below the naive linear projection of 1.0
    assert!(velocity < 1.0);
}

#[test]
fn test_heavy_extrapolation_is_slower_but_positive() {
    let store = seeded_store();
    let velocity = store.get(EXERCISE, 150.0).unwrap();
    assert!(velocity < 0.4);
    assert!(velocity > 0.0);
}

#[test]
fn test_far_heavy_extrapolation_clamps_at_zero() {
    let store = seeded_store();
    let velocity = store.get(EXERCISE, 400.0).unwrap();
    assert!(velocity >= 0.0);
}

#[test]
fn test_unknown_exercise_returns_none() {
    let store = seeded_store();
    assert!(store.get("deadlift", 100.0).is_none());
}

#[test]
fn test_single_point_extrapolates_by_weight_ratio() {
    let mut store = VelocityBaselineStore::new(BaselineConfig::default());
    store.update(EXERCISE, 50.0, 0.8, true);

    let lighter = store.get(EXERCISE, 25.0).unwrap();
    let heavier = store.get(EXERCISE, 100.0).unwrap();
    assert!(lighter > 0.8);
    assert!(heavier < 0.8);
    assert!(heavier > 0.0);
}

// === Updates ===

#[test]
fn test_update_requires_max_effort_and_positive_velocity() {
    let mut store = VelocityBaselineStore::new(BaselineConfig::default());
    store.update(EXERCISE, 50.0, 0.8, false);
    assert!(store.get(EXERCISE, 50.0).is_none());

    store.update(EXERCISE, 50.0, 0.0, true);
    assert!(store.get(EXERCISE, 50.0).is_none());

    store.update(EXERCISE, 50.0, 0.8, true);
    assert!(store.get(EXERCISE, 50.0).is_some());
}

#[test]
fn test_update_ema_blends_existing_point() {
    let mut store = seeded_store();
    store.update(EXERCISE, 50.0, 0.6, true);
    // 0.8 + 0.2 * (0.6 - 0.8) = 0.76
    assert!((store.get(EXERCISE, 50.0).unwrap() - 0.76).abs() < 1e-6);
}

#[test]
fn test_update_inserts_new_point_sorted() {
    let mut store = seeded_store();
    store.update(EXERCISE, 75.0, 0.55, true);
    // The new point now anchors interpolation on both sides
    assert!((store.get(EXERCISE, 75.0).unwrap() - 0.55).abs() < 1e-6);
    let mid = store.get(EXERCISE, 62.5).unwrap();
    assert!(mid > 0.55 && mid < 0.8);
}

// === Export / import contract ===

#[test]
fn test_export_import_round_trip() {
    let store = seeded_store();
    let export = store.export_baselines();

    let record = export.get(EXERCISE).unwrap();
    assert_eq!(record.weights.len(), 2);
    assert!((record.weights.get("50").unwrap() - 0.8).abs() < 1e-6);

    let mut restored = VelocityBaselineStore::new(BaselineConfig::default());
    restored.import_baselines(&export).unwrap();
    assert!((restored.get(EXERCISE, 75.0).unwrap() - 0.6).abs() < 1e-6);
    assert_eq!(
        restored.baseline(EXERCISE).unwrap().last_updated,
        store.baseline(EXERCISE).unwrap().last_updated
    );
}

#[test]
fn test_export_survives_json() {
    let store = seeded_store();
    let json = store.export_baselines_json().unwrap();
    // The JSON form is the same contract as the typed export
    let parsed: voltra_vbt::core::models::BaselineExport = serde_json::from_str(&json).unwrap();
    assert!((parsed.get(EXERCISE).unwrap().weights.get("50").unwrap() - 0.8).abs() < 1e-6);

    let mut restored = VelocityBaselineStore::new(BaselineConfig::default());
    restored.import_baselines_json(&json).unwrap();
    assert!((restored.get(EXERCISE, 50.0).unwrap() - 0.8).abs() < 1e-6);
    assert!((restored.get(EXERCISE, 75.0).unwrap() - 0.6).abs() < 1e-6);
}

#[test]
fn test_import_rejects_malformed_json() {
    let mut store = VelocityBaselineStore::new(BaselineConfig::default());
    let err = store.import_baselines_json("{not json").unwrap_err();
    assert!(matches!(err, AnalyticsError::Serialization { .. }));
    assert!(store.baseline(EXERCISE).is_none(), "failed import must not touch the store");
}

#[test]
fn test_import_rejects_bad_weight_key() {
    use voltra_vbt::core::models::{BaselineExport, BaselineRecord};

    let mut export = BaselineExport::new();
    let mut weights = std::collections::BTreeMap::new();
    weights.insert("not-a-number".to_owned(), 0.8_f32);
    export.insert(
        EXERCISE.to_owned(),
        BaselineRecord {
            weights,
            last_updated: chrono::Utc::now(),
        },
    );

    let mut store = VelocityBaselineStore::new(BaselineConfig::default());
    assert!(store.import_baselines(&export).is_err());
}
