// ABOUTME: State machine detecting rep boundaries in the live sample stream
// ABOUTME: Buckets samples per phase; emits a boundary only when a rep fully closes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Rep boundary detection.
//!
//! A rep is complete when the stream returns to idle (or the next concentric
//! begins) after traversing at least one concentric and one eccentric phase,
//! with optional holds at top or bottom. The detector does no metric
//! computation; it only groups samples. A stream that never closes (device
//! disconnect mid-rep) emits nothing: partial reps are intentionally never
//! surfaced.

use std::mem;

use tracing::{debug, trace};
use voltra_core::models::{MovementPhase, WorkoutSample};

/// Grouped per-phase sample buckets for one completed rep.
///
/// Hold buckets are empty when the rep had no pause at that end.
#[derive(Debug, Clone, PartialEq)]
pub struct RepBoundary {
    /// 1-based rep ordinal within the current recording
    pub rep_number: u32,
    /// Samples from the lifting phase
    pub concentric: Vec<WorkoutSample>,
    /// Samples from the lowering phase
    pub eccentric: Vec<WorkoutSample>,
    /// Samples paused at the top, if any
    pub hold_at_top: Vec<WorkoutSample>,
    /// Samples paused at the bottom, if any
    pub hold_at_bottom: Vec<WorkoutSample>,
}

/// Internal detector position within a rep.
///
/// Device `Hold` samples are disambiguated by what preceded them: a hold after
/// the concentric is a top pause, after the eccentric a bottom pause.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActivePhase {
    Idle,
    Concentric,
    TopHold,
    Eccentric,
    BottomHold,
}

/// The four open buckets, reset atomically as a unit.
#[derive(Debug, Default, Clone)]
struct PhaseBuckets {
    concentric: Vec<WorkoutSample>,
    eccentric: Vec<WorkoutSample>,
    hold_at_top: Vec<WorkoutSample>,
    hold_at_bottom: Vec<WorkoutSample>,
}

impl PhaseBuckets {
    fn clear(&mut self) {
        self.concentric.clear();
        self.eccentric.clear();
        self.hold_at_top.clear();
        self.hold_at_bottom.clear();
    }
}

/// Streaming rep boundary detector.
///
/// One instance per recording; a new recording constructs fresh state.
#[derive(Debug)]
pub struct RepDetector {
    active: ActivePhase,
    buckets: PhaseBuckets,
    saw_concentric: bool,
    saw_eccentric: bool,
    reps_completed: u32,
}

impl Default for RepDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl RepDetector {
    /// Fresh detector with a zeroed rep counter.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: ActivePhase::Idle,
            buckets: PhaseBuckets {
                concentric: Vec::new(),
                eccentric: Vec::new(),
                hold_at_top: Vec::new(),
                hold_at_bottom: Vec::new(),
            },
            saw_concentric: false,
            saw_eccentric: false,
            reps_completed: 0,
        }
    }

    /// Reps completed since construction or the last [`reset`](Self::reset).
    #[must_use]
    pub const fn reps_completed(&self) -> u32 {
        self.reps_completed
    }

    /// Zero the rep counter and discard all open buckets.
    pub fn reset(&mut self) {
        self.active = ActivePhase::Idle;
        self.buckets.clear();
        self.saw_concentric = false;
        self.saw_eccentric = false;
        self.reps_completed = 0;
    }

    /// Feed one sample; returns a boundary when this sample closes a rep.
    pub fn push(&mut self, sample: WorkoutSample) -> Option<RepBoundary> {
        match sample.phase {
            // A transient mis-decode continues the active bucket and can
            // never trigger a transition.
            MovementPhase::Unknown => {
                self.push_to_active(sample);
                None
            }
            MovementPhase::Idle => self.on_idle(),
            MovementPhase::Concentric => self.on_concentric(sample),
            MovementPhase::Hold => {
                self.on_hold(sample);
                None
            }
            MovementPhase::Eccentric => {
                self.on_eccentric(sample);
                None
            }
        }
    }

    /// Append to whatever bucket is currently open; idle samples drop.
    fn push_to_active(&mut self, sample: WorkoutSample) {
        match self.active {
            ActivePhase::Idle => {}
            ActivePhase::Concentric => self.buckets.concentric.push(sample),
            ActivePhase::TopHold => self.buckets.hold_at_top.push(sample),
            ActivePhase::Eccentric => self.buckets.eccentric.push(sample),
            ActivePhase::BottomHold => self.buckets.hold_at_bottom.push(sample),
        }
    }

    fn on_idle(&mut self) -> Option<RepBoundary> {
        if self.active == ActivePhase::Idle {
            return None;
        }
        self.active = ActivePhase::Idle;
        if self.saw_concentric && self.saw_eccentric {
            return Some(self.complete_rep());
        }
        // Returned to rest without a full traversal: aborted movement.
        trace!("movement returned to idle without closing a rep, discarding");
        self.buckets.clear();
        self.saw_concentric = false;
        self.saw_eccentric = false;
        None
    }

    fn on_concentric(&mut self, sample: WorkoutSample) -> Option<RepBoundary> {
        let closes_previous = matches!(
            self.active,
            ActivePhase::Eccentric | ActivePhase::BottomHold
        ) && self.saw_concentric
            && self.saw_eccentric;

        let boundary = closes_previous.then(|| self.complete_rep());

        self.active = ActivePhase::Concentric;
        self.saw_concentric = true;
        self.buckets.concentric.push(sample);
        boundary
    }

    fn on_hold(&mut self, sample: WorkoutSample) {
        match self.active {
            // A hold only means something once movement has started.
            ActivePhase::Idle => {}
            ActivePhase::Concentric | ActivePhase::TopHold => {
                self.active = ActivePhase::TopHold;
                self.buckets.hold_at_top.push(sample);
            }
            ActivePhase::Eccentric | ActivePhase::BottomHold => {
                self.active = ActivePhase::BottomHold;
                self.buckets.hold_at_bottom.push(sample);
            }
        }
    }

    fn on_eccentric(&mut self, sample: WorkoutSample) {
        self.active = ActivePhase::Eccentric;
        self.saw_eccentric = true;
        self.buckets.eccentric.push(sample);
    }

    /// Close the current buckets into a boundary and advance the counter.
    fn complete_rep(&mut self) -> RepBoundary {
        self.reps_completed += 1;
        self.saw_concentric = false;
        self.saw_eccentric = false;
        let buckets = mem::take(&mut self.buckets);
        debug!(
            rep_number = self.reps_completed,
            concentric_samples = buckets.concentric.len(),
            eccentric_samples = buckets.eccentric.len(),
            "rep boundary detected"
        );
        RepBoundary {
            rep_number: self.reps_completed,
            concentric: buckets.concentric,
            eccentric: buckets.eccentric,
            hold_at_top: buckets.hold_at_top,
            hold_at_bottom: buckets.hold_at_bottom,
        }
    }
}
