// ABOUTME: Integration tests for the termination rule engine
// ABOUTME: Priority ordering, junk-volume thresholds, and discovery profile completion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{failed_set, session, steady_set};
use voltra_vbt::analytics::TerminationEngine;
use voltra_vbt::core::config::TerminationConfig;
use voltra_vbt::core::models::{SessionKind, TerminationReason, TerminationResult};

fn config() -> TerminationConfig {
    TerminationConfig::default()
}

#[test]
fn test_failure_on_zero_rep_set() {
    let mut session = session(SessionKind::Standard, &[(100.0, 8); 5]);
    let set = failed_set(100.0);
    session.add_completed_set(set.clone());

    let result = TerminationEngine::check(&session, &set, &config());
    assert!(result.should_terminate);
    assert_eq!(result.reason, Some(TerminationReason::Failure));
}

#[test]
fn test_failure_wins_over_velocity_grinding() {
    // Zero reps also means zero mean velocity; priority 1 must win
    let mut session = session(SessionKind::Standard, &[(100.0, 8); 5]);
    let set = failed_set(100.0);
    session.add_completed_set(set.clone());

    let result = TerminationEngine::check(&session, &set, &config());
    assert_eq!(result.reason, Some(TerminationReason::Failure));
    assert_ne!(result.reason, Some(TerminationReason::VelocityGrinding));
}

#[test]
fn test_velocity_grinding_below_threshold() {
    let mut session = session(SessionKind::Standard, &[(100.0, 8); 5]);
    let set = steady_set(100.0, 5, 0.25);
    session.add_completed_set(set.clone());

    let result = TerminationEngine::check(&session, &set, &config());
    assert!(result.should_terminate);
    assert_eq!(result.reason, Some(TerminationReason::VelocityGrinding));
}

#[test]
fn test_healthy_first_set_continues() {
    let mut session = session(SessionKind::Standard, &[(100.0, 8); 5]);
    let set = steady_set(100.0, 8, 0.7);
    session.add_completed_set(set.clone());

    let result = TerminationEngine::check(&session, &set, &config());
    assert_eq!(result, TerminationResult::continue_training());
}

#[test]
fn test_plan_exhausted_after_last_planned_set() {
    let mut session = session(SessionKind::Standard, &[(100.0, 8); 2]);
    let first = steady_set(100.0, 8, 0.7);
    session.add_completed_set(first.clone());
    assert!(!TerminationEngine::check(&session, &first, &config()).should_terminate);

    let second = steady_set(100.0, 8, 0.7);
    session.add_completed_set(second.clone());
    let result = TerminationEngine::check(&session, &second, &config());
    assert_eq!(result.reason, Some(TerminationReason::PlanExhausted));
}

#[test]
fn test_junk_volume_on_sixty_percent_rep_drop() {
    let mut session = session(SessionKind::Standard, &[(100.0, 10); 5]);
    session.add_completed_set(steady_set(100.0, 10, 0.7));
    let second = steady_set(100.0, 4, 0.7);
    session.add_completed_set(second.clone());

    let result = TerminationEngine::check(&session, &second, &config());
    assert!(result.should_terminate);
    assert_eq!(result.reason, Some(TerminationReason::JunkVolume));
}

#[test]
fn test_no_junk_volume_on_forty_percent_drop() {
    let mut session = session(SessionKind::Standard, &[(100.0, 10); 5]);
    session.add_completed_set(steady_set(100.0, 10, 0.7));
    let second = steady_set(100.0, 6, 0.7);
    session.add_completed_set(second.clone());

    let result = TerminationEngine::check(&session, &second, &config());
    assert!(!result.should_terminate);
}

#[test]
fn test_junk_volume_compares_heaviest_weight_only() {
    // Warmup at 60 kg dropped reps, but the working weight is 100 kg
    let mut session = session(SessionKind::Standard, &[(100.0, 10); 6]);
    session.add_completed_set(steady_set(60.0, 10, 0.9));
    session.add_completed_set(steady_set(100.0, 8, 0.7));
    let third = steady_set(60.0, 3, 0.9);
    session.add_completed_set(third.clone());

    let result = TerminationEngine::check(&session, &third, &config());
    assert!(!result.should_terminate, "drop at a lighter weight is not junk volume");
}

#[test]
fn test_junk_volume_skipped_for_discovery_sessions() {
    let mut session = session(SessionKind::Discovery, &[(100.0, 10); 5]);
    session.add_completed_set(steady_set(100.0, 10, 0.7));
    let second = steady_set(100.0, 4, 0.7);
    session.add_completed_set(second.clone());

    let result = TerminationEngine::check(&session, &second, &config());
    assert!(!result.should_terminate);
}

#[test]
fn test_profile_complete_after_three_spread_sets() {
    let mut session = session(SessionKind::Discovery, &[(50.0, 5); 6]);
    session.add_completed_set(steady_set(50.0, 5, 0.8));
    session.add_completed_set(steady_set(75.0, 5, 0.6));
    let third = steady_set(100.0, 5, 0.4);
    session.add_completed_set(third.clone());

    let result = TerminationEngine::check(&session, &third, &config());
    assert!(result.should_terminate);
    assert_eq!(result.reason, Some(TerminationReason::ProfileComplete));
}

#[test]
fn test_profile_not_complete_without_weight_spread() {
    let mut session = session(SessionKind::Discovery, &[(50.0, 5); 6]);
    session.add_completed_set(steady_set(50.0, 5, 0.8));
    session.add_completed_set(steady_set(55.0, 5, 0.6));
    let third = steady_set(60.0, 5, 0.4);
    session.add_completed_set(third.clone());

    // 20% spread is under the 30% minimum
    let result = TerminationEngine::check(&session, &third, &config());
    assert!(!result.should_terminate);
}

#[test]
fn test_profile_not_complete_without_velocity_spread() {
    let mut session = session(SessionKind::Discovery, &[(50.0, 5); 6]);
    session.add_completed_set(steady_set(50.0, 5, 0.7));
    session.add_completed_set(steady_set(75.0, 5, 0.6));
    let third = steady_set(100.0, 5, 0.55);
    session.add_completed_set(third.clone());

    let result = TerminationEngine::check(&session, &third, &config());
    assert!(!result.should_terminate);
}

#[test]
fn test_profile_rule_skipped_for_standard_sessions() {
    let mut session = session(SessionKind::Standard, &[(50.0, 5); 6]);
    session.add_completed_set(steady_set(50.0, 5, 0.8));
    session.add_completed_set(steady_set(75.0, 5, 0.6));
    let third = steady_set(100.0, 5, 0.4);
    session.add_completed_set(third.clone());

    let result = TerminationEngine::check(&session, &third, &config());
    assert!(!result.should_terminate);
}

#[test]
fn test_user_stopped_is_caller_constructed() {
    let result = TerminationResult::user_stopped();
    assert!(result.should_terminate);
    assert_eq!(result.reason, Some(TerminationReason::UserStopped));
    assert!(result.message.is_some());
}
