// ABOUTME: Exercise plan and session models with rest-window state
// ABOUTME: Plans are explicit ordered set lists; sessions grow by completed sets only
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AnalyticsError, AnalyticsResult};

use super::set::Set;

/// One intended set within an exercise plan.
///
/// Plans are always explicit weights, never abstract percentage rules.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannedSet {
    /// Intended load in kilograms
    pub weight: f32,
    /// Intended rep count
    pub target_reps: u32,
    /// Intended reps-in-reserve at set end, if coached
    pub target_rir: Option<u32>,
    /// Whether this is a warmup set (excluded from working-set analysis)
    pub warmup: bool,
}

/// An explicit ordered list of intended sets for one exercise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExercisePlan {
    /// Stable exercise identifier (e.g. `"goblet_squat"`)
    pub exercise_id: String,
    /// Intended sets in execution order
    pub sets: Vec<PlannedSet>,
}

impl ExercisePlan {
    /// Validate plan shape before starting a session.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InvalidPlan`] when the plan is empty or any
    /// set carries a non-positive weight or zero target reps.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.exercise_id.is_empty() {
            return Err(AnalyticsError::InvalidPlan {
                reason: "exercise_id is empty".into(),
            });
        }
        if self.sets.is_empty() {
            return Err(AnalyticsError::InvalidPlan {
                reason: "plan has no sets".into(),
            });
        }
        for (index, planned) in self.sets.iter().enumerate() {
            if planned.weight <= 0.0 || !planned.weight.is_finite() {
                return Err(AnalyticsError::InvalidPlan {
                    reason: format!("set {index} has non-positive weight"),
                });
            }
            if planned.target_reps == 0 {
                return Err(AnalyticsError::InvalidPlan {
                    reason: format!("set {index} has zero target reps"),
                });
            }
        }
        Ok(())
    }

    /// Number of planned working (non-warmup) sets.
    #[must_use]
    pub fn working_set_count(&self) -> usize {
        self.sets.iter().filter(|planned| !planned.warmup).count()
    }
}

/// What kind of session this is; drives which termination rules apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Ordinary working session against a plan
    Standard,
    /// Load-discovery session: increment weight to map the load-velocity curve
    Discovery,
}

/// Rest countdown state between sets.
///
/// The core holds the window only; an external 1 Hz interval drives the
/// countdown display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RestWindow {
    /// When the rest period started
    pub started_at: DateTime<Utc>,
    /// Intended rest duration in seconds
    pub duration_s: u32,
}

impl RestWindow {
    /// Seconds remaining at `now`, saturating at 0.
    #[must_use]
    pub fn remaining_s(&self, now: DateTime<Utc>) -> u32 {
        let elapsed = (now - self.started_at).num_seconds().max(0) as u64;
        u64::from(self.duration_s).saturating_sub(elapsed) as u32
    }
}

/// A live exercise session: immutable plan plus the growing completed-set list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Session identifier
    pub id: Uuid,
    /// Session kind (standard vs discovery)
    pub kind: SessionKind,
    /// The immutable plan this session executes
    pub plan: ExercisePlan,
    /// Completed sets in execution order
    pub completed_sets: Vec<Set>,
    /// Active rest window, if the user is between sets
    pub rest: Option<RestWindow>,
    /// When the session started
    pub started_at: DateTime<Utc>,
}

impl ExerciseSession {
    /// Start a new session from a validated plan.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InvalidPlan`] when the plan fails validation.
    pub fn start(plan: ExercisePlan, kind: SessionKind) -> AnalyticsResult<Self> {
        plan.validate()?;
        Ok(Self {
            id: Uuid::new_v4(),
            kind,
            plan,
            completed_sets: Vec::new(),
            rest: None,
            started_at: Utc::now(),
        })
    }

    /// Record a completed set and clear any active rest window.
    pub fn add_completed_set(&mut self, set: Set) {
        self.rest = None;
        self.completed_sets.push(set);
    }

    /// The next planned set, if the plan is not yet exhausted.
    #[must_use]
    pub fn next_planned_set(&self) -> Option<&PlannedSet> {
        self.plan.sets.get(self.completed_sets.len())
    }

    /// Begin a rest window of `duration_s` seconds.
    pub fn start_rest(&mut self, duration_s: u32) {
        self.rest = Some(RestWindow {
            started_at: Utc::now(),
            duration_s,
        });
    }

    /// Clear the rest window without completing a set (user skipped rest).
    pub fn clear_rest(&mut self) {
        self.rest = None;
    }

    /// Exercise identifier from the plan.
    #[must_use]
    pub fn exercise_id(&self) -> &str {
        &self.plan.exercise_id
    }
}
