// ABOUTME: Hardware-agnostic workout sample and movement phase types
// ABOUTME: Boundary types produced once per device notification by the sample adapter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};

/// Phase of movement reported by the trainer for a single sample.
///
/// `Unknown` is strictly a decode fallback for out-of-range phase bytes; the
/// rep detector never assigns it and treats it as a continuation of whatever
/// phase is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPhase {
    /// No movement; cable at rest
    Idle,
    /// Lifting (muscle-shortening) phase
    Concentric,
    /// Pause at either end of the range of motion
    Hold,
    /// Lowering (muscle-lengthening) phase
    Eccentric,
    /// Decode fallback for unrecognized phase bytes
    Unknown,
}

impl MovementPhase {
    /// Map a raw device phase byte to a movement phase.
    ///
    /// Bytes 0-3 map to the named phases; anything else degrades to `Unknown`
    /// rather than failing the whole frame.
    #[must_use]
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Idle,
            1 => Self::Concentric,
            2 => Self::Hold,
            3 => Self::Eccentric,
            _ => Self::Unknown,
        }
    }

    /// Raw device byte for this phase, used when encoding replay fixtures.
    ///
    /// `Unknown` has no wire representation; it encodes as `0xFF`, which
    /// decodes back to `Unknown`.
    #[must_use]
    pub const fn as_raw(self) -> u8 {
        match self {
            Self::Idle => 0,
            Self::Concentric => 1,
            Self::Hold => 2,
            Self::Eccentric => 3,
            Self::Unknown => 0xFF,
        }
    }
}

/// One normalized sensor sample from the trainer.
///
/// Produced once per device notification (~11 Hz). Immutable after creation.
/// The `sequence` counter is carried through for external drop detection only;
/// the pipeline does not deduplicate or reorder (caller's contract).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSample {
    /// Rolling device sequence counter (external drop detection only)
    pub sequence: u32,
    /// Sample timestamp in milliseconds since the Unix epoch
    pub timestamp: i64,
    /// Movement phase tagged by the device
    pub phase: MovementPhase,
    /// Normalized cable position in [0, 1] across the full range of travel
    pub position: f32,
    /// Cable speed in m/s, always non-negative
    pub velocity: f32,
    /// Resistance force magnitude in newtons, always non-negative
    pub force: f32,
}
