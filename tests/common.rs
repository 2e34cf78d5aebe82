// ABOUTME: Shared fixture builders for the integration test suite
// ABOUTME: Synthetic samples, reps, sets, and sessions with controlled velocities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![allow(dead_code, clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use voltra_analytics::{aggregate_phase, aggregate_rep, SetAggregator};
use voltra_core::config::AnalyticsConfig;
use voltra_core::models::{
    ExercisePlan, ExerciseSession, MovementPhase, PlannedSet, Rep, SessionKind, Set, WorkoutSample,
};

/// Milliseconds between synthetic samples (~11 Hz device rate).
pub const SAMPLE_INTERVAL_MS: i64 = 90;

/// One synthetic sample.
pub fn sample(
    sequence: u32,
    timestamp: i64,
    phase: MovementPhase,
    position: f32,
    velocity: f32,
    force: f32,
) -> WorkoutSample {
    WorkoutSample {
        sequence,
        timestamp,
        phase,
        position,
        velocity,
        force,
    }
}

/// A run of samples in one phase at constant velocity, positions ramping
/// between `start_position` and `end_position`.
pub fn phase_samples(
    phase: MovementPhase,
    count: usize,
    start_ts: i64,
    start_position: f32,
    end_position: f32,
    velocity: f32,
    force: f32,
) -> Vec<WorkoutSample> {
    (0..count)
        .map(|index| {
            let t = if count > 1 {
                index as f32 / (count - 1) as f32
            } else {
                0.0
            };
            sample(
                index as u32,
                start_ts + index as i64 * SAMPLE_INTERVAL_MS,
                phase,
                start_position + t * (end_position - start_position),
                velocity,
                force,
            )
        })
        .collect()
}

/// A full rep with the given mean concentric/eccentric velocities.
pub fn rep_with_velocities(rep_number: u32, concentric_v: f32, eccentric_v: f32) -> Rep {
    let base_ts = i64::from(rep_number) * 10_000;
    let concentric = aggregate_phase(
        MovementPhase::Concentric,
        phase_samples(
            MovementPhase::Concentric,
            5,
            base_ts,
            0.05,
            0.95,
            concentric_v,
            400.0,
        ),
    );
    let eccentric = aggregate_phase(
        MovementPhase::Eccentric,
        phase_samples(
            MovementPhase::Eccentric,
            5,
            base_ts + 2_000,
            0.95,
            0.05,
            eccentric_v,
            350.0,
        ),
    );
    aggregate_rep(rep_number, concentric, eccentric, None, None)
}

/// A completed set from per-rep (concentric, eccentric) mean velocities.
pub fn set_with_velocities(weight: f32, velocities: &[(f32, f32)]) -> Set {
    let reps: Vec<Rep> = velocities
        .iter()
        .enumerate()
        .map(|(index, &(con, ecc))| rep_with_velocities(index as u32 + 1, con, ecc))
        .collect();
    SetAggregator::aggregate(weight, reps, &AnalyticsConfig::default())
}

/// A steady set: `rep_count` reps at constant velocities.
pub fn steady_set(weight: f32, rep_count: usize, concentric_v: f32) -> Set {
    let velocities: Vec<(f32, f32)> = (0..rep_count).map(|_| (concentric_v, 0.5)).collect();
    set_with_velocities(weight, &velocities)
}

/// An empty (failed) set.
pub fn failed_set(weight: f32) -> Set {
    SetAggregator::aggregate(weight, Vec::new(), &AnalyticsConfig::default())
}

/// A session over a uniform plan.
pub fn session(kind: SessionKind, planned: &[(f32, u32)]) -> ExerciseSession {
    let plan = ExercisePlan {
        exercise_id: "goblet_squat".to_owned(),
        sets: planned
            .iter()
            .map(|&(weight, target_reps)| PlannedSet {
                weight,
                target_reps,
                target_rir: Some(2),
                warmup: false,
            })
            .collect(),
    };
    ExerciseSession::start(plan, kind).unwrap()
}
