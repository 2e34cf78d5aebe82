// ABOUTME: Typed telemetry frame and notification message-type definitions
// ABOUTME: Four 4-byte magic headers distinguish the notification kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use serde::{Deserialize, Serialize};
use voltra_core::models::MovementPhase;

/// Magic header opening a telemetry stream notification.
pub const TELEMETRY_STREAM_HEADER: [u8; 4] = [0x55, 0x3A, 0x04, 0x70];

/// Magic header opening a rep summary notification.
pub const REP_SUMMARY_HEADER: [u8; 4] = [0x55, 0x3A, 0x04, 0x71];

/// Magic header opening a set summary notification.
pub const SET_SUMMARY_HEADER: [u8; 4] = [0x55, 0x3A, 0x04, 0x72];

/// Magic header opening a status update notification.
pub const STATUS_UPDATE_HEADER: [u8; 4] = [0x55, 0x3A, 0x04, 0x73];

/// Kind of notification, identified from the 4-byte magic header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    /// Continuous sensor sample stream (~11 Hz)
    TelemetryStream,
    /// Device-side rep boundary marker
    RepSummary,
    /// Device-side set boundary marker
    SetSummary,
    /// Device status payload (battery, firmware state)
    StatusUpdate,
    /// Header did not match any known notification kind
    Unknown,
}

impl MessageType {
    /// Identify the message type from a buffer's leading bytes.
    ///
    /// Buffers shorter than 4 bytes are `Unknown`; so is any header that
    /// differs from the known magics by even one bit.
    #[must_use]
    pub fn from_header(buf: &[u8]) -> Self {
        let Some(header) = buf.get(..4).and_then(|bytes| <[u8; 4]>::try_from(bytes).ok()) else {
            return Self::Unknown;
        };
        match header {
            TELEMETRY_STREAM_HEADER => Self::TelemetryStream,
            REP_SUMMARY_HEADER => Self::RepSummary,
            SET_SUMMARY_HEADER => Self::SetSummary,
            STATUS_UPDATE_HEADER => Self::StatusUpdate,
            _ => Self::Unknown,
        }
    }

    /// The 4-byte magic for this message type, if it has a wire form.
    #[must_use]
    pub const fn header(self) -> Option<[u8; 4]> {
        match self {
            Self::TelemetryStream => Some(TELEMETRY_STREAM_HEADER),
            Self::RepSummary => Some(REP_SUMMARY_HEADER),
            Self::SetSummary => Some(SET_SUMMARY_HEADER),
            Self::StatusUpdate => Some(STATUS_UPDATE_HEADER),
            Self::Unknown => None,
        }
    }
}

/// One decoded telemetry stream frame, still in device units.
///
/// Field widths match the wire layout exactly so that encode/decode round-trip
/// across the full representable ranges, including the i16 extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryFrame {
    /// Rolling notification counter
    pub sequence: u16,
    /// Movement phase (out-of-range bytes decode to `Unknown`)
    pub phase: MovementPhase,
    /// Cable position in device units
    pub position: u16,
    /// Force in device units; two's-complement, sign encodes direction
    pub force: i16,
    /// Cable speed in device units
    pub velocity: u16,
}
