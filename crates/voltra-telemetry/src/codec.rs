// ABOUTME: Binary encode/decode for the 30-byte Voltra telemetry notification frame
// ABOUTME: Little-endian fields at fixed offsets; trailing bytes ignored for forward compat
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Telemetry notification codec.
//!
//! # Wire format
//!
//! Every telemetry stream notification is at least 30 bytes, little-endian:
//!
//! ```text
//! Offset  Size  Field
//! ------  ----  -----
//! 0       4     Magic header (0x55 0x3A 0x04 0x70 for the sample stream)
//! 4       2     Sequence (u16, rolling counter)
//! 6       1     Phase (0-3 valid, anything else decodes to Unknown)
//! 7       1     Reserved
//! 8       2     Position (u16, device units)
//! 10      2     Force (i16, two's-complement, sign = direction)
//! 12      2     Velocity (u16, device units)
//! 14      16    Reserved / firmware-specific (ignored)
//! ```
//!
//! Frames longer than 30 bytes decode identically to their first 30 bytes.
//! `encode_telemetry_frame` writes the exact inverse layout (reserved bytes
//! zeroed) and exists for test fixtures and replay.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Write};
use tracing::{trace, warn};

use voltra_core::models::MovementPhase;

use crate::frame::{MessageType, TelemetryFrame, TELEMETRY_STREAM_HEADER};

/// Minimum (and canonical encoded) telemetry frame length in bytes.
pub const TELEMETRY_FRAME_LEN: usize = 30;

/// Byte offset of the sequence field.
const SEQUENCE_OFFSET: u64 = 4;
/// Byte offset of the phase field.
const PHASE_OFFSET: u64 = 6;
/// Byte offset of the position field.
const POSITION_OFFSET: u64 = 8;
/// Byte offset of the force field.
const FORCE_OFFSET: u64 = 10;
/// Byte offset of the velocity field.
const VELOCITY_OFFSET: u64 = 12;

/// A successfully classified notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedNotification {
    /// A telemetry stream sample frame
    Frame(TelemetryFrame),
    /// Device-side rep boundary marker
    RepBoundarySignal,
    /// Device-side set boundary marker
    SetBoundarySignal,
    /// Status payload, passed through raw for the status layer
    Status(Vec<u8>),
}

/// Identify a notification's message type from its leading 4 bytes.
#[must_use]
pub fn identify_message_type(buf: &[u8]) -> MessageType {
    MessageType::from_header(buf)
}

/// Decode a telemetry stream frame from a notification buffer.
///
/// Returns `None` for buffers shorter than [`TELEMETRY_FRAME_LEN`]. Extra
/// trailing bytes are ignored. Out-of-range phase bytes degrade to
/// [`MovementPhase::Unknown`] rather than failing the frame.
#[must_use]
pub fn decode_telemetry_frame(buf: &[u8]) -> Option<TelemetryFrame> {
    if buf.len() < TELEMETRY_FRAME_LEN {
        warn!(len = buf.len(), "telemetry frame too short, dropping");
        return None;
    }

    let mut cursor = Cursor::new(buf);

    cursor.set_position(SEQUENCE_OFFSET);
    let sequence = cursor.read_u16::<LittleEndian>().ok()?;

    cursor.set_position(PHASE_OFFSET);
    let phase_raw = cursor.read_u8().ok()?;
    let phase = MovementPhase::from_raw(phase_raw);
    if phase == MovementPhase::Unknown {
        trace!(phase_raw, sequence, "unrecognized phase byte");
    }

    cursor.set_position(POSITION_OFFSET);
    let position = cursor.read_u16::<LittleEndian>().ok()?;

    cursor.set_position(FORCE_OFFSET);
    let force = cursor.read_i16::<LittleEndian>().ok()?;

    cursor.set_position(VELOCITY_OFFSET);
    let velocity = cursor.read_u16::<LittleEndian>().ok()?;

    Some(TelemetryFrame {
        sequence,
        phase,
        position,
        force,
        velocity,
    })
}

/// Encode a frame into the canonical 30-byte telemetry notification.
///
/// Exact inverse of [`decode_telemetry_frame`]: same magic header, same
/// offsets, reserved bytes zeroed, so `decode(encode(f)) == f` for every
/// representable frame including the i16/u16 extremes.
#[must_use]
pub fn encode_telemetry_frame(frame: &TelemetryFrame) -> Vec<u8> {
    let mut cursor = Cursor::new(vec![0_u8; TELEMETRY_FRAME_LEN]);
    // A Vec-backed cursor cannot fail to write.
    let _ = write_telemetry_fields(&mut cursor, frame);
    cursor.into_inner()
}

/// Write the frame fields in wire order; the reserved tail stays zeroed.
fn write_telemetry_fields(
    cursor: &mut Cursor<Vec<u8>>,
    frame: &TelemetryFrame,
) -> std::io::Result<()> {
    cursor.write_all(&TELEMETRY_STREAM_HEADER)?;
    cursor.write_u16::<LittleEndian>(frame.sequence)?;
    cursor.write_u8(frame.phase.as_raw())?;
    cursor.write_u8(0)?;
    cursor.write_u16::<LittleEndian>(frame.position)?;
    cursor.write_i16::<LittleEndian>(frame.force)?;
    cursor.write_u16::<LittleEndian>(frame.velocity)
}

/// Dispatch a raw notification on its message type.
///
/// Telemetry frames that fail to decode yield `None`, as do unknown headers.
#[must_use]
pub fn decode_notification(buf: &[u8]) -> Option<DecodedNotification> {
    match identify_message_type(buf) {
        MessageType::TelemetryStream => {
            decode_telemetry_frame(buf).map(DecodedNotification::Frame)
        }
        MessageType::RepSummary => Some(DecodedNotification::RepBoundarySignal),
        MessageType::SetSummary => Some(DecodedNotification::SetBoundarySignal),
        MessageType::StatusUpdate => Some(DecodedNotification::Status(buf[4..].to_vec())),
        MessageType::Unknown => {
            trace!(len = buf.len(), "unrecognized notification header");
            None
        }
    }
}
