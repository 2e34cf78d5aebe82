// ABOUTME: Three-tier set aggregation: velocity measurements, fatigue, effort
// ABOUTME: Tiers feed strictly forward; effort never reaches back past fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Tiered set aggregation.
//!
//! Tier 1 measures raw per-rep velocities against the set's opening baseline.
//! Tier 2 folds concentric slowdown and eccentric speedup into a bounded
//! fatigue index, reading only tier 1's output. Tier 3 maps fatigue into an
//! RIR/RPE estimate, reading only tier 2's output plus the rep count.
//!
//! The tier 2/3 mapping constants are provisional domain calibrations: each
//! mapping is monotonic and bounded, anchored on the documented defaults
//! (concentric weight 0.6, eccentric weight 0.4, speedup penalty 1.5).

use tracing::debug;
use voltra_core::config::{AnalyticsConfig, EffortConfig, FatigueConfig, VelocityConfig};
use voltra_core::constants::effort::{RPE_MAX, RPE_MIN};
use voltra_core::constants::fatigue::{ECCENTRIC_CONTROL_FULL_LOSS, FULL_FATIGUE_COMPOSITE};
use voltra_core::models::{
    EffortConfidence, EffortEstimate, FatigueAnalysis, Rep, Set, SetMetrics, VelocityMetrics,
};

/// Reduces a completed rep list into a [`Set`] with tiered metrics.
pub struct SetAggregator;

impl SetAggregator {
    /// Aggregate completed reps into a set at `weight` kilograms.
    #[must_use]
    pub fn aggregate(weight: f32, reps: Vec<Rep>, config: &AnalyticsConfig) -> Set {
        let velocity = Self::velocity_tier(&reps, config.velocity);
        let fatigue = Self::fatigue_tier(&velocity, config.fatigue);
        let effort = Self::effort_tier(&fatigue, reps.len(), config.effort, config.velocity);
        debug!(
            weight,
            reps = reps.len(),
            fatigue_index = fatigue.fatigue_index,
            rir = effort.rir,
            "set aggregated"
        );
        Set {
            weight,
            reps,
            metrics: SetMetrics {
                velocity,
                fatigue,
                effort,
            },
        }
    }

    /// Tier 1: baselines, last-rep values, deltas, and chart-ready arrays.
    fn velocity_tier(reps: &[Rep], config: VelocityConfig) -> VelocityMetrics {
        let concentric_by_rep: Vec<f32> = reps
            .iter()
            .map(|rep| rep.metrics.concentric_mean_velocity)
            .collect();
        let eccentric_by_rep: Vec<f32> = reps
            .iter()
            .map(|rep| rep.metrics.eccentric_mean_velocity)
            .collect();

        let window = config.baseline_reps.min(reps.len());
        let concentric_baseline = mean(&concentric_by_rep[..window]);
        let eccentric_baseline = mean(&eccentric_by_rep[..window]);
        let concentric_last = concentric_by_rep.last().copied().unwrap_or(0.0);
        let eccentric_last = eccentric_by_rep.last().copied().unwrap_or(0.0);

        VelocityMetrics {
            concentric_baseline,
            eccentric_baseline,
            concentric_last,
            eccentric_last,
            concentric_delta: fractional_delta(concentric_last, concentric_baseline),
            eccentric_delta: fractional_delta(eccentric_last, eccentric_baseline),
            concentric_by_rep,
            eccentric_by_rep,
        }
    }

    /// Tier 2: weighted slowdown/speedup composite, bounded to [0, 100].
    fn fatigue_tier(velocity: &VelocityMetrics, config: FatigueConfig) -> FatigueAnalysis {
        // Concentric slowing shows as a negative delta; eccentric loss of
        // control shows as a positive delta.
        let slowdown = (-velocity.concentric_delta).max(0.0);
        let speedup = velocity.eccentric_delta.max(0.0);

        let composite = (config.eccentric_weight * config.eccentric_speedup_penalty)
            .mul_add(speedup, config.concentric_weight * slowdown);
        let fatigue_index = (composite / FULL_FATIGUE_COMPOSITE * 100.0).clamp(0.0, 100.0);

        let eccentric_control_score = (speedup / ECCENTRIC_CONTROL_FULL_LOSS)
            .mul_add(-100.0, 100.0)
            .clamp(0.0, 100.0);

        let form_warning = (velocity.eccentric_delta > config.form_warning_threshold).then(|| {
            format!(
                "Eccentric velocity up {:.0}% from baseline; control the lowering phase",
                velocity.eccentric_delta * 100.0
            )
        });

        FatigueAnalysis {
            fatigue_index,
            eccentric_control_score,
            form_warning,
        }
    }

    /// Tier 3: fatigue into RIR/RPE with confidence.
    ///
    /// RIR steps down one estimated rep per `fatigue_per_rir` index points,
    /// capped at `rir_cap`, minus one when a form warning is active. RPE is
    /// the mirrored 4-10 scale. Confidence reflects how many reps beyond the
    /// baseline window actually informed the deltas.
    fn effort_tier(
        fatigue: &FatigueAnalysis,
        rep_count: usize,
        config: EffortConfig,
        velocity_config: VelocityConfig,
    ) -> EffortEstimate {
        let steps = ((100.0 - fatigue.fatigue_index) / config.fatigue_per_rir).floor();
        let mut rir = (steps.max(0.0) as u32).min(config.rir_cap);
        if fatigue.form_warning.is_some() {
            rir = rir.saturating_sub(1);
        }

        let rpe = (RPE_MAX - rir as f32).clamp(RPE_MIN, RPE_MAX);

        let confidence = if rep_count > velocity_config.baseline_reps + 2
            && fatigue.form_warning.is_none()
        {
            EffortConfidence::High
        } else if rep_count > velocity_config.baseline_reps {
            EffortConfidence::Medium
        } else {
            EffortConfidence::Low
        };

        EffortEstimate {
            rir,
            rpe,
            confidence,
        }
    }
}

/// Arithmetic mean, 0 for an empty slice.
fn mean(values: &[f32]) -> f32 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f32>() / values.len() as f32
}

/// `(last - baseline) / baseline`, 0 when the baseline is 0.
fn fractional_delta(last: f32, baseline: f32) -> f32 {
    if baseline.abs() < f32::EPSILON {
        0.0
    } else {
        (last - baseline) / baseline
    }
}
