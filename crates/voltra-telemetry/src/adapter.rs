// ABOUTME: Maps device-unit telemetry frames into normalized workout samples
// ABOUTME: Thin mechanical conversion; the only place device calibration lives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};
use voltra_core::models::WorkoutSample;

use crate::frame::TelemetryFrame;

/// Device-unit scaling for the Voltra trainer.
///
/// The trainer reports position in raw encoder units over the full cable
/// travel, velocity in mm/s, and force in decinewtons with sign encoding
/// direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceCalibration {
    /// Encoder units spanning the full range of travel (maps to position 1.0)
    pub position_range: f32,
    /// Meters per second per velocity unit
    pub velocity_scale: f32,
    /// Newtons per force unit
    pub force_scale: f32,
}

impl Default for DeviceCalibration {
    fn default() -> Self {
        Self {
            position_range: 1000.0,
            velocity_scale: 0.001,
            force_scale: 0.1,
        }
    }
}

/// Converts decoded frames into hardware-agnostic samples.
///
/// The adapter is the pipeline's only unit-conversion point; everything
/// downstream works in normalized position, m/s, and newtons.
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleAdapter {
    calibration: DeviceCalibration,
}

impl SampleAdapter {
    /// Adapter with explicit calibration.
    #[must_use]
    pub const fn new(calibration: DeviceCalibration) -> Self {
        Self { calibration }
    }

    /// Map a frame into a sample, stamping it with the delivery timestamp.
    ///
    /// Position is clamped to [0, 1]; force keeps its magnitude only (sign is
    /// direction, which the phase already carries).
    #[must_use]
    pub fn sample(&self, frame: &TelemetryFrame, timestamp_ms: i64) -> WorkoutSample {
        let position = if self.calibration.position_range > 0.0 {
            (f32::from(frame.position) / self.calibration.position_range).clamp(0.0, 1.0)
        } else {
            0.0
        };
        WorkoutSample {
            sequence: u32::from(frame.sequence),
            timestamp: timestamp_ms,
            phase: frame.phase,
            position,
            velocity: f32::from(frame.velocity) * self.calibration.velocity_scale,
            force: f32::from(frame.force).abs() * self.calibration.force_scale,
        }
    }
}
