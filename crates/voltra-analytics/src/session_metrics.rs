// ABOUTME: Session-level engine: volume, readiness, accumulated fatigue, 1RM estimate
// ABOUTME: Combines stored baselines, completed sets, and a fitted load-velocity profile
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};
use tracing::debug;
use voltra_core::config::AnalyticsConfig;
use voltra_core::models::{ExerciseSession, Set};

use crate::baseline::VelocityBaselineStore;

/// Reps within this many of failure count as effective training stimulus.
const EFFECTIVE_REP_WINDOW: u32 = 5;

/// Readiness score above this is a normal training day.
const READY_SCORE: f32 = 90.0;

/// Readiness score above this is usable but reduced.
const MODERATE_SCORE: f32 = 75.0;

/// Session volume accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct VolumeMetrics {
    /// Completed sets
    pub total_sets: usize,
    /// Completed reps across all sets
    pub total_reps: usize,
    /// Sum of weight x reps over all sets (kg)
    pub tonnage_kg: f32,
    /// Reps performed close enough to failure to drive adaptation
    pub effective_reps: usize,
}

/// Qualitative readiness bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessLevel {
    /// Bar speed at or near the stored baseline
    Ready,
    /// Noticeably below baseline; reduce planned load
    Moderate,
    /// Well below baseline; consider a recovery session
    Fatigued,
}

/// Today's bar speed measured against the stored baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReadinessScore {
    /// 0-100: observed velocity as a fraction of the baseline expectation
    pub score: f32,
    /// Qualitative bucket for display
    pub level: ReadinessLevel,
    /// Baseline expectation at the opening set's weight (m/s)
    pub reference_velocity: f32,
    /// Opening-set baseline velocity actually observed (m/s)
    pub observed_velocity: f32,
}

/// Fatigue accumulated across the session's sets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionFatigue {
    /// Percent drop from the first set's baseline velocity to the last set's
    pub velocity_loss_pct: f32,
    /// Mean per-set fatigue index
    pub mean_fatigue_index: f32,
    /// Per-set baseline concentric velocities in set order (chart-ready)
    pub set_velocity_trend: Vec<f32>,
}

/// Least-squares load-velocity profile over the session's sets.
///
/// Velocity falls roughly linearly with load; the fit needs at least three
/// sets at distinct weights and a negative slope to mean anything.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadVelocityProfile {
    /// Velocity change per added kilogram (m/s per kg, negative)
    pub slope: f32,
    /// Projected velocity at zero load (m/s)
    pub intercept: f32,
    /// Goodness of fit in [0, 1]
    pub r_squared: f32,
    /// Sets contributing to the fit
    pub point_count: usize,
}

impl LoadVelocityProfile {
    /// Fit a profile over completed sets; `None` when the data cannot support one.
    #[must_use]
    pub fn fit(sets: &[Set]) -> Option<Self> {
        let points: Vec<(f32, f32)> = sets
            .iter()
            .filter(|set| !set.reps.is_empty())
            .map(|set| (set.weight, set.mean_concentric_velocity()))
            .collect();
        if points.len() < 3 {
            return None;
        }
        let mut weights: Vec<f32> = points.iter().map(|(weight, _)| *weight).collect();
        weights.sort_by(f32::total_cmp);
        weights.dedup_by(|a, b| (*a - *b).abs() < 0.01);
        if weights.len() < 3 {
            return None;
        }

        let n = points.len() as f32;
        let mean_w = points.iter().map(|(weight, _)| weight).sum::<f32>() / n;
        let mean_v = points.iter().map(|(_, velocity)| velocity).sum::<f32>() / n;
        let mut ss_ww = 0.0_f32;
        let mut ss_wv = 0.0_f32;
        for (weight, velocity) in &points {
            ss_ww += (weight - mean_w) * (weight - mean_w);
            ss_wv += (weight - mean_w) * (velocity - mean_v);
        }
        if ss_ww <= f32::EPSILON {
            return None;
        }
        let slope = ss_wv / ss_ww;
        if slope >= 0.0 {
            // Velocity not falling with load: the sets do not form a profile.
            return None;
        }
        let intercept = slope.mul_add(-mean_w, mean_v);

        let mut ss_res = 0.0_f32;
        let mut ss_tot = 0.0_f32;
        for (weight, velocity) in &points {
            let predicted = slope.mul_add(*weight, intercept);
            ss_res += (velocity - predicted) * (velocity - predicted);
            ss_tot += (velocity - mean_v) * (velocity - mean_v);
        }
        let r_squared = if ss_tot <= f32::EPSILON {
            0.0
        } else {
            (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
        };

        Some(Self {
            slope,
            intercept,
            r_squared,
            point_count: points.len(),
        })
    }

    /// Load at which velocity would fall to `min_velocity` (the 1RM proxy).
    #[must_use]
    pub fn estimated_one_rm(&self, min_velocity: f32) -> Option<f32> {
        if self.slope >= 0.0 {
            return None;
        }
        let weight = (min_velocity - self.intercept) / self.slope;
        (weight.is_finite() && weight > 0.0).then_some(weight)
    }
}

/// Combined session-level estimates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionMetrics {
    /// Volume accounting
    pub volume: VolumeMetrics,
    /// Readiness vs stored baseline; absent without a baseline for the weight
    pub readiness: Option<ReadinessScore>,
    /// Across-set fatigue accumulation
    pub fatigue: SessionFatigue,
    /// Load-velocity fit over this session's sets, when supportable
    pub profile: Option<LoadVelocityProfile>,
    /// Estimated 1RM from the profile at the minimum concentric velocity
    pub estimated_one_rm: Option<f32>,
}

/// Session-level analytics over completed sets.
pub struct SessionMetricsEngine;

impl SessionMetricsEngine {
    /// Analyze a session against the stored baselines.
    #[must_use]
    pub fn analyze(
        session: &ExerciseSession,
        store: &VelocityBaselineStore,
        config: &AnalyticsConfig,
    ) -> SessionMetrics {
        let sets = &session.completed_sets;
        let volume = Self::volume(sets);
        let readiness = Self::readiness(session, store);
        let fatigue = Self::fatigue(sets);
        let profile = LoadVelocityProfile::fit(sets);
        let estimated_one_rm = profile
            .as_ref()
            .and_then(|fit| fit.estimated_one_rm(config.termination.min_concentric_velocity));
        debug!(
            session_id = %session.id,
            sets = sets.len(),
            estimated_one_rm,
            "session analyzed"
        );
        SessionMetrics {
            volume,
            readiness,
            fatigue,
            profile,
            estimated_one_rm,
        }
    }

    fn volume(sets: &[Set]) -> VolumeMetrics {
        let mut volume = VolumeMetrics::default();
        for set in sets {
            let reps = set.rep_count();
            volume.total_sets += 1;
            volume.total_reps += reps;
            volume.tonnage_kg += set.weight * reps as f32;

            let rir = set.metrics.effort.rir;
            if rir < EFFECTIVE_REP_WINDOW {
                volume.effective_reps += reps.min((EFFECTIVE_REP_WINDOW - rir) as usize);
            }
        }
        volume
    }

    fn readiness(
        session: &ExerciseSession,
        store: &VelocityBaselineStore,
    ) -> Option<ReadinessScore> {
        let opening = session
            .completed_sets
            .iter()
            .find(|set| !set.reps.is_empty())?;
        let reference = store.get(session.exercise_id(), opening.weight)?;
        if reference <= f32::EPSILON {
            return None;
        }
        let observed = opening.metrics.velocity.concentric_baseline;
        let score = (observed / reference * 100.0).clamp(0.0, 100.0);
        let level = if score >= READY_SCORE {
            ReadinessLevel::Ready
        } else if score >= MODERATE_SCORE {
            ReadinessLevel::Moderate
        } else {
            ReadinessLevel::Fatigued
        };
        Some(ReadinessScore {
            score,
            level,
            reference_velocity: reference,
            observed_velocity: observed,
        })
    }

    fn fatigue(sets: &[Set]) -> SessionFatigue {
        let set_velocity_trend: Vec<f32> = sets
            .iter()
            .map(|set| set.metrics.velocity.concentric_baseline)
            .collect();

        let velocity_loss_pct = match (set_velocity_trend.first(), set_velocity_trend.last()) {
            (Some(&first), Some(&last)) if set_velocity_trend.len() >= 2 && first > f32::EPSILON => {
                (first - last) / first * 100.0
            }
            _ => 0.0,
        };

        let mean_fatigue_index = if sets.is_empty() {
            0.0
        } else {
            sets.iter()
                .map(|set| set.metrics.fatigue.fatigue_index)
                .sum::<f32>()
                / sets.len() as f32
        };

        SessionFatigue {
            velocity_loss_pct,
            mean_fatigue_index,
            set_velocity_trend,
        }
    }
}
