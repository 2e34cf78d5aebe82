// ABOUTME: Priority-ordered rule engine deciding when a session should stop
// ABOUTME: Five rules evaluated strictly in order after each completed set; first match wins
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Termination rules, in strict priority order:
//!
//! 1. **failure** - the last set produced zero reps
//! 2. **velocity_grinding** - last set's mean concentric velocity below the minimum
//! 3. **plan_exhausted** - all planned sets completed
//! 4. **junk_volume** (standard sessions) - rep count at the working weight halved
//! 5. **profile_complete** (discovery sessions) - enough spread to map the curve
//!
//! `user_stopped` is never produced here; the caller constructs it explicitly
//! when the user ends a session manually. The check always returns a result;
//! it has no fallible path.

use tracing::info;
use voltra_core::config::TerminationConfig;
use voltra_core::constants::baseline::WEIGHT_MATCH_EPSILON_KG;
use voltra_core::models::{
    ExerciseSession, SessionKind, Set, TerminationReason, TerminationResult,
};

/// Post-set termination rule evaluator.
pub struct TerminationEngine;

impl TerminationEngine {
    /// Evaluate the rules for a session after `last_set` was recorded.
    ///
    /// Call after `ExerciseSession::add_completed_set`; `last_set` must be
    /// the set just added.
    #[must_use]
    pub fn check(
        session: &ExerciseSession,
        last_set: &Set,
        config: &TerminationConfig,
    ) -> TerminationResult {
        let result = Self::failure(last_set)
            .or_else(|| Self::velocity_grinding(last_set, config))
            .or_else(|| Self::plan_exhausted(session))
            .or_else(|| Self::junk_volume(session, config))
            .or_else(|| Self::profile_complete(session, config))
            .unwrap_or_else(TerminationResult::continue_training);
        if result.should_terminate {
            info!(
                session_id = %session.id,
                reason = ?result.reason,
                "session termination recommended"
            );
        }
        result
    }

    /// Rule 1: zero reps means the set failed outright.
    fn failure(last_set: &Set) -> Option<TerminationResult> {
        last_set.reps.is_empty().then(|| {
            TerminationResult::stop(
                TerminationReason::Failure,
                "No reps completed; end the session and recover",
            )
        })
    }

    /// Rule 2: bar speed collapsed below the minimum concentric velocity.
    fn velocity_grinding(last_set: &Set, config: &TerminationConfig) -> Option<TerminationResult> {
        let mean = last_set.mean_concentric_velocity();
        (mean < config.min_concentric_velocity).then(|| {
            TerminationResult::stop(
                TerminationReason::VelocityGrinding,
                format!(
                    "Mean concentric velocity {mean:.2} m/s is below {:.2} m/s; the bar is grinding",
                    config.min_concentric_velocity
                ),
            )
        })
    }

    /// Rule 3: every planned set is done.
    fn plan_exhausted(session: &ExerciseSession) -> Option<TerminationResult> {
        (session.completed_sets.len() >= session.plan.sets.len()).then(|| {
            TerminationResult::stop(
                TerminationReason::PlanExhausted,
                format!(
                    "All {} planned sets completed",
                    session.plan.sets.len()
                ),
            )
        })
    }

    /// Rule 4 (standard sessions): rep quality at the working weight halved.
    ///
    /// The first set at the heaviest completed weight is the reference; if the
    /// most recent set at that same weight dropped its rep count by the
    /// configured ratio or more, further volume is junk.
    fn junk_volume(session: &ExerciseSession, config: &TerminationConfig) -> Option<TerminationResult> {
        if session.kind != SessionKind::Standard {
            return None;
        }
        let sets = &session.completed_sets;
        let working_weight = sets
            .iter()
            .map(|set| set.weight)
            .max_by(f32::total_cmp)?;
        let at_weight =
            |set: &&Set| (set.weight - working_weight).abs() < WEIGHT_MATCH_EPSILON_KG;
        let reference = sets.iter().find(at_weight)?;
        let latest = sets.iter().rev().find(at_weight)?;
        if std::ptr::eq(reference, latest) || reference.rep_count() == 0 {
            return None;
        }
        let drop =
            (reference.rep_count() - latest.rep_count().min(reference.rep_count())) as f32
                / reference.rep_count() as f32;
        (drop >= config.junk_volume_drop_ratio).then(|| {
            TerminationResult::stop(
                TerminationReason::JunkVolume,
                format!(
                    "Rep count at {working_weight:.1} kg fell from {} to {}; further sets are junk volume",
                    reference.rep_count(),
                    latest.rep_count()
                ),
            )
        })
    }

    /// Rule 5 (discovery sessions): enough spread to map the load-velocity curve.
    fn profile_complete(
        session: &ExerciseSession,
        config: &TerminationConfig,
    ) -> Option<TerminationResult> {
        if session.kind != SessionKind::Discovery {
            return None;
        }
        let sets = &session.completed_sets;
        if sets.len() < config.profile_min_sets {
            return None;
        }
        let min_weight = sets.iter().map(|set| set.weight).min_by(f32::total_cmp)?;
        let max_weight = sets.iter().map(|set| set.weight).max_by(f32::total_cmp)?;
        if min_weight <= 0.0
            || (max_weight - min_weight) < config.profile_min_weight_spread_ratio * min_weight
        {
            return None;
        }
        let velocities: Vec<f32> = sets
            .iter()
            .map(Set::mean_concentric_velocity)
            .collect();
        let min_velocity = velocities.iter().copied().fold(f32::INFINITY, f32::min);
        let max_velocity = velocities.iter().copied().fold(0.0_f32, f32::max);
        ((max_velocity - min_velocity) >= config.profile_min_velocity_spread).then(|| {
            TerminationResult::stop(
                TerminationReason::ProfileComplete,
                format!(
                    "Load-velocity profile mapped across {} sets ({min_weight:.1}-{max_weight:.1} kg)",
                    sets.len()
                ),
            )
        })
    }
}
