// ABOUTME: Termination decision types returned by the rule engine after each set
// ABOUTME: user_stopped is caller-constructed only; check() never produces it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};

/// Why a session should stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationReason {
    /// Last set produced zero reps
    Failure,
    /// Bar speed collapsed below the minimum concentric velocity
    VelocityGrinding,
    /// Rep quality at the working weight dropped by half or more
    JunkVolume,
    /// All planned sets are complete
    PlanExhausted,
    /// Discovery session has mapped enough of the load-velocity curve
    ProfileComplete,
    /// The user ended the session manually (caller-constructed only)
    UserStopped,
}

/// Outcome of a post-set termination check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerminationResult {
    /// Whether the session should stop now
    pub should_terminate: bool,
    /// Which rule fired, when terminating
    pub reason: Option<TerminationReason>,
    /// Human-readable explanation, when terminating
    pub message: Option<String>,
}

impl TerminationResult {
    /// Keep going: no rule matched.
    #[must_use]
    pub const fn continue_training() -> Self {
        Self {
            should_terminate: false,
            reason: None,
            message: None,
        }
    }

    /// Stop for `reason` with a human-readable message.
    #[must_use]
    pub fn stop(reason: TerminationReason, message: impl Into<String>) -> Self {
        Self {
            should_terminate: true,
            reason: Some(reason),
            message: Some(message.into()),
        }
    }

    /// The user ended the session manually. Never produced by the rule engine.
    #[must_use]
    pub fn user_stopped() -> Self {
        Self::stop(TerminationReason::UserStopped, "Session ended by user")
    }
}
