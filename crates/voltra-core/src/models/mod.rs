// ABOUTME: Workout data models for the VBT analytics pipeline
// ABOUTME: Samples, phases, reps, sets, sessions, baselines, and termination results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

/// Per-notification sample and movement phase types
pub mod sample;

/// Phase and rep aggregation results
pub mod rep;

/// Set model with three-tier metrics
pub mod set;

/// Exercise plans and live sessions
pub mod session;

/// Per-exercise velocity baselines and the export contract
pub mod baseline;

/// Termination decisions
pub mod termination;

pub use baseline::{BaselineExport, BaselinePoint, BaselineRecord, VelocityBaseline};
pub use rep::{Phase, PhaseMetrics, Rep, RepMetrics, TimeRange};
pub use sample::{MovementPhase, WorkoutSample};
pub use session::{ExercisePlan, ExerciseSession, PlannedSet, RestWindow, SessionKind};
pub use set::{EffortConfidence, EffortEstimate, FatigueAnalysis, Set, SetMetrics, VelocityMetrics};
pub use termination::{TerminationReason, TerminationResult};
