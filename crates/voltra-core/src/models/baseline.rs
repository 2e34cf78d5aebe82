// ABOUTME: Per-exercise velocity baseline model and its export/import contract
// ABOUTME: Weight-to-velocity points kept sorted; JSON export keys weights as strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One known point on an exercise's load-velocity curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaselinePoint {
    /// Load in kilograms
    pub weight: f32,
    /// Best (max-effort) mean concentric velocity observed at this load (m/s)
    pub velocity: f32,
}

/// Per-exercise velocity baseline: known weight-to-velocity points.
///
/// Points are kept sorted by ascending weight; the store interpolates between
/// them and extrapolates beyond them with damped ratios.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityBaseline {
    /// Stable exercise identifier
    pub exercise_id: String,
    /// Known points, sorted by ascending weight
    pub points: Vec<BaselinePoint>,
    /// When any point was last updated
    pub last_updated: DateTime<Utc>,
}

impl VelocityBaseline {
    /// Empty baseline for an exercise.
    #[must_use]
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            points: Vec::new(),
            last_updated: Utc::now(),
        }
    }
}

/// Export record for one exercise's baseline.
///
/// Weights are keyed as canonical decimal strings (`"100"`, `"102.5"`) so the
/// contract survives JSON, where object keys are always strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaselineRecord {
    /// Weight-string to velocity map
    pub weights: BTreeMap<String, f32>,
    /// When any point was last updated
    pub last_updated: DateTime<Utc>,
}

/// Stable export contract: exercise id to baseline record.
pub type BaselineExport = BTreeMap<String, BaselineRecord>;
