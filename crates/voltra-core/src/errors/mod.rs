// ABOUTME: Unified error types for the analytics pipeline
// ABOUTME: Hot-path decode stays Option-returning; Result is for real API surfaces
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Error handling for the analytics pipeline.
//!
//! Decode failures on the notification hot path are signaled by absent values
//! (`Option`), never by errors: malformed bytes degrade gracefully. The error
//! type below covers the genuinely fallible surfaces: plan validation,
//! baseline import, and configuration checks.

/// Result alias for fallible analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors from the fallible analytics surfaces.
#[derive(Debug, thiserror::Error)]
pub enum AnalyticsError {
    /// An exercise plan failed validation
    #[error("Invalid exercise plan: {reason}")]
    InvalidPlan {
        /// Why the plan was rejected
        reason: String,
    },

    /// A configuration knob is outside its valid range
    #[error("Invalid config value for '{field}': {reason}")]
    InvalidConfig {
        /// Name of the offending field
        field: &'static str,
        /// Why the value is invalid
        reason: String,
    },

    /// A baseline import record could not be parsed
    #[error("Invalid baseline record for '{exercise_id}': bad weight key '{key}'")]
    InvalidBaselineRecord {
        /// Exercise the record belongs to
        exercise_id: String,
        /// The weight key that failed to parse
        key: String,
    },

    /// Serialization failed while exporting or importing baselines
    #[error("Serialization failed for {context}")]
    Serialization {
        /// Context where serialization failed
        context: &'static str,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },
}
