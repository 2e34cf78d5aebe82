// ABOUTME: Set model with three-tier metrics: velocity, fatigue, and effort
// ABOUTME: Tier outputs feed forward only; fatigue reads velocity, effort reads fatigue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};

use super::rep::Rep;

/// Tier 1: raw velocity measurements for a completed set.
///
/// Baselines come from the first `baseline_reps` reps (config default 2);
/// deltas are fractional change from baseline. A negative concentric delta is
/// the expected slowdown under fatigue; a positive eccentric delta indicates
/// loss of lowering control.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VelocityMetrics {
    /// Mean concentric velocity over the baseline window (m/s)
    pub concentric_baseline: f32,
    /// Mean eccentric velocity over the baseline window (m/s)
    pub eccentric_baseline: f32,
    /// Last rep's mean concentric velocity (m/s)
    pub concentric_last: f32,
    /// Last rep's mean eccentric velocity (m/s)
    pub eccentric_last: f32,
    /// Fractional concentric change from baseline (0 when baseline is 0)
    pub concentric_delta: f32,
    /// Fractional eccentric change from baseline (0 when baseline is 0)
    pub eccentric_delta: f32,
    /// Per-rep mean concentric velocities in rep order (chart-ready)
    pub concentric_by_rep: Vec<f32>,
    /// Per-rep mean eccentric velocities in rep order (chart-ready)
    pub eccentric_by_rep: Vec<f32>,
}

/// Tier 2: fatigue pattern detection, computed only from `VelocityMetrics`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FatigueAnalysis {
    /// Composite fatigue index in [0, 100]
    pub fatigue_index: f32,
    /// Eccentric control score in [0, 100]; 100 means fully controlled lowering
    pub eccentric_control_score: f32,
    /// Human-readable form warning when eccentric speedup exceeds the threshold
    pub form_warning: Option<String>,
}

/// Confidence attached to an effort estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortConfidence {
    /// Enough reps and clean velocity data
    High,
    /// Usable but short on reps
    Medium,
    /// Too few reps past the baseline window to trust
    Low,
}

/// Tier 3: effort/RIR prediction, computed only from `FatigueAnalysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffortEstimate {
    /// Estimated reps in reserve (>= 0)
    pub rir: u32,
    /// Rate of perceived exertion on the 4-10 scale
    pub rpe: f32,
    /// How much to trust this estimate
    pub confidence: EffortConfidence,
}

/// Three-tier metrics for a completed set.
///
/// Tiers are strictly ordered: fatigue is derived from the velocity tier
/// output only, and effort from the fatigue tier output only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetMetrics {
    /// Tier 1: raw velocity measurements
    pub velocity: VelocityMetrics,
    /// Tier 2: fatigue pattern detection
    pub fatigue: FatigueAnalysis,
    /// Tier 3: effort/RIR prediction
    pub effort: EffortEstimate,
}

/// A completed working set: weight, reps, and tiered metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Set {
    /// Load on the cable in kilograms
    pub weight: f32,
    /// Completed reps in order
    pub reps: Vec<Rep>,
    /// Tiered set metrics
    pub metrics: SetMetrics,
}

impl Set {
    /// Number of completed reps.
    #[must_use]
    pub fn rep_count(&self) -> usize {
        self.reps.len()
    }

    /// Mean of the per-rep concentric mean velocities, 0 for an empty set.
    ///
    /// Shared by the termination rules and the session metrics engine.
    #[must_use]
    pub fn mean_concentric_velocity(&self) -> f32 {
        if self.reps.is_empty() {
            return 0.0;
        }
        let sum: f32 = self
            .reps
            .iter()
            .map(|rep| rep.metrics.concentric_mean_velocity)
            .sum();
        sum / self.reps.len() as f32
    }
}
