// ABOUTME: Phase and rep data models with per-phase kinematic metrics
// ABOUTME: Immutable aggregation results built from bucketed workout samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};

use super::sample::{MovementPhase, WorkoutSample};

/// Inclusive start/end timestamps of a phase or rep, milliseconds since epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// Timestamp of the first sample (ms)
    pub start: i64,
    /// Timestamp of the last sample (ms)
    pub end: i64,
}

impl TimeRange {
    /// Duration of the range in seconds.
    #[must_use]
    pub fn duration_s(&self) -> f32 {
        (self.end - self.start) as f32 / 1000.0
    }
}

/// Kinematic metrics derived solely from a phase's samples.
///
/// An empty sample set yields all-zero metrics with zero duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseMetrics {
    /// Phase duration in seconds
    pub duration_s: f32,
    /// Arithmetic mean velocity over the phase samples (m/s)
    pub mean_velocity: f32,
    /// Peak velocity over the phase samples (m/s)
    pub peak_velocity: f32,
    /// Arithmetic mean force over the phase samples (N)
    pub mean_force: f32,
    /// Peak force over the phase samples (N)
    pub peak_force: f32,
    /// Position of the first sample (directional, not a minimum)
    pub start_position: f32,
    /// Position of the last sample (directional, not a maximum)
    pub end_position: f32,
}

/// One contiguous movement phase with its sample bucket and derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Which movement phase this bucket covers
    pub phase_type: MovementPhase,
    /// First/last sample timestamps; `(0, 0)` when the bucket is empty
    pub time_range: TimeRange,
    /// Samples bucketed into this phase, in arrival order
    pub samples: Vec<WorkoutSample>,
    /// Metrics derived solely from `samples`
    pub metrics: PhaseMetrics,
}

/// Per-rep derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepMetrics {
    /// Sum of all four phase durations (holds contribute 0 when absent)
    pub total_duration_s: f32,
    /// Concentric phase duration (s)
    pub concentric_duration_s: f32,
    /// Eccentric phase duration (s)
    pub eccentric_duration_s: f32,
    /// Hold-at-top duration (s), 0 when absent
    pub top_hold_duration_s: f32,
    /// Hold-at-bottom duration (s), 0 when absent
    pub bottom_hold_duration_s: f32,
    /// Tempo string `"ecc-topPause-con-bottomPause"`, each rounded to 0.5 s
    pub tempo: String,
    /// Mean concentric velocity (m/s)
    pub concentric_mean_velocity: f32,
    /// Peak concentric velocity (m/s)
    pub concentric_peak_velocity: f32,
    /// Mean eccentric velocity (m/s)
    pub eccentric_mean_velocity: f32,
    /// Peak eccentric velocity (m/s)
    pub eccentric_peak_velocity: f32,
    /// Peak force across both driving phases (N)
    pub peak_force: f32,
    /// Range of motion: max of concentric end position and eccentric start position
    pub range_of_motion: f32,
}

/// A completed repetition built from closed phases.
///
/// Immutable once constructed. A rep's identity is its 1-based ordinal within
/// the set; there is no persisted id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rep {
    /// 1-based ordinal within the set
    pub rep_number: u32,
    /// Earliest phase start to latest phase end
    pub time_range: TimeRange,
    /// Lifting phase (always present)
    pub concentric: Phase,
    /// Lowering phase (always present)
    pub eccentric: Phase,
    /// Pause at the top of the movement, if any
    pub hold_at_top: Option<Phase>,
    /// Pause at the bottom of the movement, if any
    pub hold_at_bottom: Option<Phase>,
    /// Derived rep metrics
    pub metrics: RepMetrics,
}
