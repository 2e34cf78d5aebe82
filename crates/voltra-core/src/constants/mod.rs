// ABOUTME: Pipeline constants organized by domain
// ABOUTME: Velocity thresholds, fatigue mapping anchors, baseline damping, termination rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

/// Velocity thresholds shared across the pipeline.
pub mod velocity {
    /// Minimum useful concentric velocity (m/s). Below this the bar is
    /// grinding and the set should end; also the velocity anchor used for
    /// estimating 1RM from a load-velocity profile.
    pub const MIN_CONCENTRIC_VELOCITY_MS: f32 = 0.3;
}

/// Fatigue tier mapping anchors.
pub mod fatigue {
    /// Weight of concentric slowdown in the fatigue composite.
    pub const DEFAULT_CONCENTRIC_WEIGHT: f32 = 0.6;

    /// Weight of eccentric speedup in the fatigue composite.
    pub const DEFAULT_ECCENTRIC_WEIGHT: f32 = 0.4;

    /// Multiplier on eccentric speedup before weighting. Uncontrolled
    /// eccentric speedup is a stronger fatigue/form signal than ordinary
    /// concentric slowdown.
    pub const DEFAULT_ECCENTRIC_SPEEDUP_PENALTY: f32 = 1.5;

    /// Weighted composite at which the fatigue index saturates at 100.
    /// A 50% concentric slowdown alone (0.6 x 0.5 = 0.30) maxes the index.
    pub const FULL_FATIGUE_COMPOSITE: f32 = 0.30;

    /// Eccentric speedup fraction at which the control score bottoms out at 0.
    pub const ECCENTRIC_CONTROL_FULL_LOSS: f32 = 0.4;

    /// Eccentric delta above which a form warning is attached.
    pub const DEFAULT_FORM_WARNING_THRESHOLD: f32 = 0.15;
}

/// Effort tier mapping anchors.
pub mod effort {
    /// Fatigue-index points per estimated rep in reserve.
    pub const FATIGUE_PER_RIR: f32 = 15.0;

    /// Cap on the RIR estimate; beyond this the signal is meaningless.
    pub const RIR_CAP: u32 = 6;

    /// RPE scale bounds.
    pub const RPE_MIN: f32 = 4.0;
    /// Upper RPE bound (momentary failure).
    pub const RPE_MAX: f32 = 10.0;
}

/// Velocity baseline store tuning.
pub mod baseline {
    /// EMA learning rate for max-effort updates at a known weight.
    pub const DEFAULT_LEARNING_RATE: f32 = 0.2;

    /// Damping on the extrapolated ratio below the lightest known weight
    /// (lighter loads move faster, but not linearly so).
    pub const LIGHT_EXTRAPOLATION_DAMPING: f32 = 0.5;

    /// Damping above the heaviest known weight; heavy-load slowdown is even
    /// less linear, so extrapolate more conservatively.
    pub const HEAVY_EXTRAPOLATION_DAMPING: f32 = 0.3;

    /// Two weights within this many kilograms are the same baseline point.
    pub const WEIGHT_MATCH_EPSILON_KG: f32 = 0.01;
}

/// Termination rule thresholds.
pub mod termination {
    /// Rep-count drop (fraction of the first working set) that marks junk volume.
    pub const JUNK_VOLUME_DROP_RATIO: f32 = 0.5;

    /// Minimum completed sets before a discovery profile can be complete.
    pub const PROFILE_MIN_SETS: usize = 3;

    /// Required weight spread as a fraction of the minimum weight.
    pub const PROFILE_MIN_WEIGHT_SPREAD_RATIO: f32 = 0.3;

    /// Required velocity spread across discovery sets (m/s).
    pub const PROFILE_MIN_VELOCITY_SPREAD_MS: f32 = 0.3;
}
