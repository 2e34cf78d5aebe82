// ABOUTME: Voltra VBT analytics - umbrella crate wiring the notification pipeline
// ABOUTME: Re-exports the core, telemetry, and analytics crates plus the pipeline glue
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![deny(unsafe_code)]

//! # Voltra VBT
//!
//! Hardware-agnostic workout analytics for the Voltra BLE resistance trainer:
//! binary telemetry decoding, rep boundary detection, tiered set metrics,
//! per-exercise velocity baselines, and the session termination rule engine.
//!
//! The pipeline is single-threaded and synchronous per sample: each inbound
//! notification is decoded and fed through detection and aggregation in the
//! same call. The BLE transport delivering the notifications (~11 Hz) is an
//! external collaborator; so is persistence of the exported baseline records.
//!
//! ```
//! use voltra_vbt::pipeline::NotificationPipeline;
//! use voltra_vbt::core::config::AnalyticsConfig;
//!
//! let mut pipeline = NotificationPipeline::new(AnalyticsConfig::default());
//! // feed raw notification buffers as they arrive:
//! // let event = pipeline.push_notification(&bytes, timestamp_ms);
//! ```

pub use voltra_analytics as analytics;
pub use voltra_core as core;
pub use voltra_telemetry as telemetry;

/// Per-notification pipeline glue: codec, adapter, detector, aggregators
pub mod pipeline;

pub use pipeline::{NotificationPipeline, PipelineEvent, SetRecorder};
