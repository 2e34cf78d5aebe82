// ABOUTME: VBT analytics engine: rep detection, tiered metrics, baselines, termination
// ABOUTME: Consumes normalized samples, produces reps, sets, and session decisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![deny(unsafe_code)]

//! # Voltra Analytics
//!
//! The workout analytics pipeline: a rep-boundary state machine over the live
//! sample stream, pure phase/rep reducers, a three-tier set aggregator
//! (velocity, fatigue, effort), per-exercise velocity baselines, session-level
//! metrics, and the priority-ordered termination rule engine.
//!
//! Every component is a plain value transformer; state is confined to the
//! detector's open buckets, the baseline store's map, and the growing session
//! set list. A new recording constructs fresh state, so nothing is shared and
//! nothing needs locking.

/// Rep boundary detection state machine
pub mod rep_detector;

/// Pure phase and rep reducers
pub mod aggregation;

/// Three-tier set aggregation (velocity, fatigue, effort)
pub mod set_metrics;

/// Per-exercise velocity baseline store
pub mod baseline;

/// Session-level strength, readiness, fatigue, and volume estimates
pub mod session_metrics;

/// Priority-ordered set/session termination rules
pub mod termination;

pub use aggregation::{aggregate_phase, aggregate_rep};
pub use baseline::VelocityBaselineStore;
pub use rep_detector::{RepBoundary, RepDetector};
pub use session_metrics::{
    LoadVelocityProfile, ReadinessLevel, ReadinessScore, SessionFatigue, SessionMetrics,
    SessionMetricsEngine, VolumeMetrics,
};
pub use set_metrics::SetAggregator;
pub use termination::TerminationEngine;
