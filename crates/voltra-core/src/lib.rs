// ABOUTME: Core types and constants for the Voltra VBT analytics pipeline
// ABOUTME: Foundation crate with workout models, error handling, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![deny(unsafe_code)]

//! # Voltra Core
//!
//! Foundation crate providing shared types and constants for the Voltra
//! velocity-based-training analytics pipeline. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **models**: Workout data model (`WorkoutSample`, `Rep`, `Set`, sessions, baselines)
//! - **errors**: Unified error handling with `AnalyticsError`
//! - **constants**: Pipeline constants organized by domain
//! - **config**: Tunable analytics configuration with documented defaults

/// Unified error handling for the analytics pipeline
pub mod errors;

/// Pipeline constants organized by domain (velocity, fatigue, termination)
pub mod constants;

/// Workout data models (`WorkoutSample`, `Rep`, `Set`, `ExerciseSession`, baselines)
pub mod models;

/// Analytics configuration with documented defaults
pub mod config;
