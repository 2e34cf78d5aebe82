// ABOUTME: Wire codec and sample adapter for Voltra trainer BLE notifications
// ABOUTME: Boundary crate between raw notification bytes and normalized samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

#![deny(unsafe_code)]

//! # Voltra Telemetry
//!
//! Decodes the trainer's fixed-size binary notification frames into typed
//! values and maps them into hardware-agnostic [`voltra_core::models::WorkoutSample`]s.
//!
//! Everything here degrades gracefully: malformed or short buffers,
//! unrecognized message headers, and out-of-range phase bytes all yield
//! absent values, never errors. The BLE transport itself (scanning,
//! connection, notification delivery) is an external collaborator.

/// Telemetry frame and message type definitions
pub mod frame;

/// Binary encode/decode for notification buffers
pub mod codec;

/// Device-unit to normalized-sample conversion
pub mod adapter;

pub use adapter::{DeviceCalibration, SampleAdapter};
pub use codec::{
    decode_notification, decode_telemetry_frame, encode_telemetry_frame, identify_message_type,
    DecodedNotification, TELEMETRY_FRAME_LEN,
};
pub use frame::{MessageType, TelemetryFrame};
