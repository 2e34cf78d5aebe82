// ABOUTME: Tunable analytics configuration with documented defaults
// ABOUTME: Nested sections for velocity, fatigue, effort, baseline, and termination
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Analytics Configuration
//!
//! Provides the tunable knobs for set aggregation, baseline maintenance, and
//! termination rules. Defaults mirror the constants module; `validate()`
//! rejects out-of-range values before a session starts.

use serde::{Deserialize, Serialize};

use crate::constants::{baseline, effort, fatigue, termination, velocity};
use crate::errors::{AnalyticsError, AnalyticsResult};

/// Top-level analytics configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Velocity tier settings
    pub velocity: VelocityConfig,
    /// Fatigue tier settings
    pub fatigue: FatigueConfig,
    /// Effort tier settings
    pub effort: EffortConfig,
    /// Velocity baseline store settings
    pub baseline: BaselineConfig,
    /// Termination rule settings
    pub termination: TerminationConfig,
}

/// Tier-1 velocity measurement settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VelocityConfig {
    /// How many initial reps form the set's velocity baseline
    pub baseline_reps: usize,
}

/// Tier-2 fatigue composite settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FatigueConfig {
    /// Weight of concentric slowdown in the composite
    pub concentric_weight: f32,
    /// Weight of eccentric speedup in the composite
    pub eccentric_weight: f32,
    /// Multiplier on eccentric speedup before weighting
    pub eccentric_speedup_penalty: f32,
    /// Eccentric delta above which a form warning is attached
    pub form_warning_threshold: f32,
}

/// Tier-3 effort estimation settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortConfig {
    /// Fatigue-index points per estimated rep in reserve
    pub fatigue_per_rir: f32,
    /// Cap on the RIR estimate
    pub rir_cap: u32,
}

/// Velocity baseline store settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// EMA learning rate for max-effort updates
    pub learning_rate: f32,
    /// Damping on the extrapolated ratio below the lightest known weight
    pub light_damping: f32,
    /// Damping on the extrapolated ratio above the heaviest known weight
    pub heavy_damping: f32,
}

/// Termination rule settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TerminationConfig {
    /// Mean concentric velocity below which the set is grinding (m/s)
    pub min_concentric_velocity: f32,
    /// Rep-count drop fraction that marks junk volume
    pub junk_volume_drop_ratio: f32,
    /// Minimum completed sets before a discovery profile can be complete
    pub profile_min_sets: usize,
    /// Required weight spread as a fraction of the minimum weight
    pub profile_min_weight_spread_ratio: f32,
    /// Required velocity spread across discovery sets (m/s)
    pub profile_min_velocity_spread: f32,
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self { baseline_reps: 2 }
    }
}

impl Default for FatigueConfig {
    fn default() -> Self {
        Self {
            concentric_weight: fatigue::DEFAULT_CONCENTRIC_WEIGHT,
            eccentric_weight: fatigue::DEFAULT_ECCENTRIC_WEIGHT,
            eccentric_speedup_penalty: fatigue::DEFAULT_ECCENTRIC_SPEEDUP_PENALTY,
            form_warning_threshold: fatigue::DEFAULT_FORM_WARNING_THRESHOLD,
        }
    }
}

impl Default for EffortConfig {
    fn default() -> Self {
        Self {
            fatigue_per_rir: effort::FATIGUE_PER_RIR,
            rir_cap: effort::RIR_CAP,
        }
    }
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            learning_rate: baseline::DEFAULT_LEARNING_RATE,
            light_damping: baseline::LIGHT_EXTRAPOLATION_DAMPING,
            heavy_damping: baseline::HEAVY_EXTRAPOLATION_DAMPING,
        }
    }
}

impl Default for TerminationConfig {
    fn default() -> Self {
        Self {
            min_concentric_velocity: velocity::MIN_CONCENTRIC_VELOCITY_MS,
            junk_volume_drop_ratio: termination::JUNK_VOLUME_DROP_RATIO,
            profile_min_sets: termination::PROFILE_MIN_SETS,
            profile_min_weight_spread_ratio: termination::PROFILE_MIN_WEIGHT_SPREAD_RATIO,
            profile_min_velocity_spread: termination::PROFILE_MIN_VELOCITY_SPREAD_MS,
        }
    }
}

impl AnalyticsConfig {
    /// Validate every section before use.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InvalidConfig`] naming the first offending
    /// field.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.velocity.baseline_reps == 0 {
            return Err(AnalyticsError::InvalidConfig {
                field: "velocity.baseline_reps",
                reason: "must be at least 1".into(),
            });
        }
        Self::check_unit_fraction("fatigue.concentric_weight", self.fatigue.concentric_weight)?;
        Self::check_unit_fraction("fatigue.eccentric_weight", self.fatigue.eccentric_weight)?;
        if self.fatigue.eccentric_speedup_penalty < 1.0 {
            return Err(AnalyticsError::InvalidConfig {
                field: "fatigue.eccentric_speedup_penalty",
                reason: "must be at least 1.0".into(),
            });
        }
        if self.effort.fatigue_per_rir <= 0.0 {
            return Err(AnalyticsError::InvalidConfig {
                field: "effort.fatigue_per_rir",
                reason: "must be positive".into(),
            });
        }
        Self::check_unit_fraction("baseline.learning_rate", self.baseline.learning_rate)?;
        Self::check_unit_fraction("baseline.light_damping", self.baseline.light_damping)?;
        Self::check_unit_fraction("baseline.heavy_damping", self.baseline.heavy_damping)?;
        if self.termination.min_concentric_velocity <= 0.0 {
            return Err(AnalyticsError::InvalidConfig {
                field: "termination.min_concentric_velocity",
                reason: "must be positive".into(),
            });
        }
        Self::check_unit_fraction(
            "termination.junk_volume_drop_ratio",
            self.termination.junk_volume_drop_ratio,
        )?;
        Ok(())
    }

    /// A knob that must lie in (0, 1].
    fn check_unit_fraction(field: &'static str, value: f32) -> AnalyticsResult<()> {
        if value > 0.0 && value <= 1.0 {
            Ok(())
        } else {
            Err(AnalyticsError::InvalidConfig {
                field,
                reason: format!("{value} is outside (0, 1]"),
            })
        }
    }
}
