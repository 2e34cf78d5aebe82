// ABOUTME: Integration tests for the three-tier set aggregator
// ABOUTME: Velocity baselines/deltas, fatigue bounds and monotonicity, effort mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::set_with_velocities;
use voltra_vbt::core::models::EffortConfidence;

// === Tier 1: velocity ===

#[test]
fn test_baseline_is_mean_of_first_two_reps() {
    let set = set_with_velocities(
        80.0,
        &[(0.8, 0.5), (0.7, 0.5), (0.6, 0.5), (0.5, 0.5)],
    );
    let velocity = &set.metrics.velocity;

    assert!((velocity.concentric_baseline - 0.75).abs() < 1e-3);
    assert!((velocity.concentric_last - 0.5).abs() < 1e-3);
    // (0.5 - 0.75) / 0.75 = -0.333...
    assert!((velocity.concentric_delta + 0.3333).abs() < 1e-3);
    assert_eq!(velocity.concentric_by_rep.len(), 4);
    assert_eq!(velocity.eccentric_by_rep.len(), 4);
}

#[test]
fn test_single_rep_set_has_zero_deltas() {
    let set = set_with_velocities(80.0, &[(0.8, 0.5)]);
    let velocity = &set.metrics.velocity;

    assert!((velocity.concentric_baseline - 0.8).abs() < 1e-3);
    assert!(velocity.concentric_delta.abs() < 1e-6);
    assert!(velocity.eccentric_delta.abs() < 1e-6);
}

#[test]
fn test_empty_set_metrics_are_zeroed() {
    let set = common::failed_set(80.0);
    let velocity = &set.metrics.velocity;

    assert!(velocity.concentric_baseline.abs() < f32::EPSILON);
    assert!(velocity.concentric_delta.abs() < f32::EPSILON);
    assert!(velocity.concentric_by_rep.is_empty());
    assert!(set.metrics.fatigue.fatigue_index.abs() < f32::EPSILON);
}

// === Tier 2: fatigue ===

#[test]
fn test_steady_set_has_zero_fatigue() {
    let set = set_with_velocities(80.0, &[(0.8, 0.5); 6]);
    let fatigue = &set.metrics.fatigue;

    assert!(fatigue.fatigue_index.abs() < f32::EPSILON);
    assert!((fatigue.eccentric_control_score - 100.0).abs() < 1e-3);
    assert!(fatigue.form_warning.is_none());
}

#[test]
fn test_fatigue_monotonic_in_concentric_slowdown() {
    let mild = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.72, 0.5)]);
    let severe = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.48, 0.5)]);

    assert!(mild.metrics.fatigue.fatigue_index > 0.0);
    assert!(severe.metrics.fatigue.fatigue_index > mild.metrics.fatigue.fatigue_index);
    assert!(severe.metrics.fatigue.fatigue_index <= 100.0);
}

#[test]
fn test_fifty_percent_slowdown_saturates_index() {
    let set = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.4, 0.5)]);
    assert!((set.metrics.fatigue.fatigue_index - 100.0).abs() < 1e-3);
}

#[test]
fn test_eccentric_speedup_penalized_harder_than_slowdown() {
    // 20% concentric slowdown vs 20% eccentric speedup
    let slowdown = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.64, 0.5)]);
    let speedup = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.8, 0.6)]);

    // composite: 0.6*0.2 = 0.12 vs 0.4*1.5*0.2 = 0.12 -> equal weighting at
    // defaults, but the speedup also tanks the control score
    assert!(
        (slowdown.metrics.fatigue.fatigue_index - speedup.metrics.fatigue.fatigue_index).abs()
            < 1e-3
    );
    assert!((slowdown.metrics.fatigue.eccentric_control_score - 100.0).abs() < 1e-3);
    assert!(speedup.metrics.fatigue.eccentric_control_score < 60.0);
}

#[test]
fn test_form_warning_on_eccentric_speedup() {
    // 30% eccentric speedup is past the 15% warning threshold
    let set = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.8, 0.65)]);
    let warning = set.metrics.fatigue.form_warning.as_ref().unwrap();
    assert!(warning.contains("Eccentric"));

    let controlled = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.8, 0.52)]);
    assert!(controlled.metrics.fatigue.form_warning.is_none());
}

// === Tier 3: effort ===

#[test]
fn test_fresh_set_has_high_rir_low_rpe() {
    let set = set_with_velocities(80.0, &[(0.8, 0.5); 8]);
    let effort = &set.metrics.effort;

    assert_eq!(effort.rir, 6);
    assert!((effort.rpe - 4.0).abs() < 1e-3);
    assert_eq!(effort.confidence, EffortConfidence::High);
}

#[test]
fn test_exhausted_set_has_zero_rir_max_rpe() {
    let set = set_with_velocities(
        80.0,
        &[(0.8, 0.5), (0.8, 0.5), (0.6, 0.5), (0.5, 0.5), (0.4, 0.5)],
    );
    let effort = &set.metrics.effort;

    assert_eq!(effort.rir, 0);
    assert!((effort.rpe - 10.0).abs() < 1e-3);
}

#[test]
fn test_rir_monotonic_in_fatigue() {
    let lasts = [0.8, 0.76, 0.7, 0.64, 0.56, 0.48, 0.4];
    let mut previous_rir = u32::MAX;
    for last in lasts {
        let set = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (last, 0.5)]);
        let rir = set.metrics.effort.rir;
        assert!(rir <= previous_rir, "rir must not rise as velocity falls");
        previous_rir = rir;
    }
}

#[test]
fn test_confidence_downgrades_with_few_reps() {
    let two_reps = set_with_velocities(80.0, &[(0.8, 0.5), (0.7, 0.5)]);
    assert_eq!(two_reps.metrics.effort.confidence, EffortConfidence::Low);

    let three_reps = set_with_velocities(80.0, &[(0.8, 0.5), (0.8, 0.5), (0.7, 0.5)]);
    assert_eq!(three_reps.metrics.effort.confidence, EffortConfidence::Medium);

    let six_reps = set_with_velocities(80.0, &[(0.8, 0.5); 6]);
    assert_eq!(six_reps.metrics.effort.confidence, EffortConfidence::High);
}

#[test]
fn test_form_warning_downgrades_confidence_and_rir() {
    let clean = set_with_velocities(80.0, &[(0.8, 0.5); 6]);
    let warned = set_with_velocities(
        80.0,
        &[(0.8, 0.5), (0.8, 0.5), (0.8, 0.5), (0.8, 0.5), (0.8, 0.5), (0.8, 0.7)],
    );

    assert!(warned.metrics.fatigue.form_warning.is_some());
    assert!(warned.metrics.effort.rir < clean.metrics.effort.rir);
    assert_ne!(warned.metrics.effort.confidence, EffortConfidence::High);
}
