// ABOUTME: Wires decode, adaptation, rep detection, and aggregation per notification
// ABOUTME: One recorder per recording; finishing a set constructs fresh state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use std::mem;

use tracing::debug;
use voltra_analytics::rep_detector::{RepBoundary, RepDetector};
use voltra_analytics::{aggregate_phase, aggregate_rep, SetAggregator};
use voltra_core::config::AnalyticsConfig;
use voltra_core::models::{MovementPhase, Rep, Set, WorkoutSample};
use voltra_telemetry::{decode_notification, DecodedNotification, SampleAdapter};

/// What one notification produced once pushed through the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A telemetry sample that did not close a rep
    Sample(WorkoutSample),
    /// This notification's sample closed a rep
    RepCompleted(Rep),
    /// Device-side rep boundary marker (informational)
    RepSignal,
    /// Device-side set boundary marker (informational)
    SetSignal,
    /// Raw status payload for the status layer
    Status(Vec<u8>),
    /// Unrecognized or malformed notification, dropped
    Ignored,
}

/// Collects completed reps for one recording.
///
/// Owns the detector state; dropping the recorder discards any in-flight
/// partial rep, which is the whole cancellation story.
#[derive(Debug)]
pub struct SetRecorder {
    detector: RepDetector,
    reps: Vec<Rep>,
    config: AnalyticsConfig,
}

impl SetRecorder {
    /// Fresh recorder with zero completed reps.
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            detector: RepDetector::new(),
            reps: Vec::new(),
            config,
        }
    }

    /// Feed one sample; returns the completed rep when this sample closes one.
    pub fn push_sample(&mut self, sample: WorkoutSample) -> Option<&Rep> {
        let boundary = self.detector.push(sample)?;
        let rep = Self::build_rep(boundary);
        self.reps.push(rep);
        self.reps.last()
    }

    /// Completed reps so far, in order.
    #[must_use]
    pub fn reps(&self) -> &[Rep] {
        &self.reps
    }

    /// Close the recording into a set at `weight` kilograms.
    #[must_use]
    pub fn finish(self, weight: f32) -> Set {
        debug!(weight, reps = self.reps.len(), "recording finished");
        SetAggregator::aggregate(weight, self.reps, &self.config)
    }

    /// Discard all reps and detector state, keeping the configuration.
    pub fn reset(&mut self) {
        self.detector.reset();
        self.reps.clear();
    }

    /// Aggregate a detector boundary into an immutable rep.
    fn build_rep(boundary: RepBoundary) -> Rep {
        let concentric = aggregate_phase(MovementPhase::Concentric, boundary.concentric);
        let eccentric = aggregate_phase(MovementPhase::Eccentric, boundary.eccentric);
        let hold_at_top = (!boundary.hold_at_top.is_empty())
            .then(|| aggregate_phase(MovementPhase::Hold, boundary.hold_at_top));
        let hold_at_bottom = (!boundary.hold_at_bottom.is_empty())
            .then(|| aggregate_phase(MovementPhase::Hold, boundary.hold_at_bottom));
        aggregate_rep(
            boundary.rep_number,
            concentric,
            eccentric,
            hold_at_top,
            hold_at_bottom,
        )
    }
}

/// Full notification-to-rep pipeline for one recording session.
#[derive(Debug)]
pub struct NotificationPipeline {
    adapter: SampleAdapter,
    recorder: SetRecorder,
    config: AnalyticsConfig,
}

impl NotificationPipeline {
    /// Pipeline with default device calibration.
    #[must_use]
    pub fn new(config: AnalyticsConfig) -> Self {
        Self {
            adapter: SampleAdapter::default(),
            recorder: SetRecorder::new(config),
            config,
        }
    }

    /// Pipeline with explicit device calibration.
    #[must_use]
    pub fn with_adapter(config: AnalyticsConfig, adapter: SampleAdapter) -> Self {
        Self {
            adapter,
            recorder: SetRecorder::new(config),
            config,
        }
    }

    /// Decode one notification and advance the pipeline.
    ///
    /// `timestamp_ms` is the delivery time stamped onto the sample; the wire
    /// frame itself carries no clock.
    pub fn push_notification(&mut self, bytes: &[u8], timestamp_ms: i64) -> PipelineEvent {
        match decode_notification(bytes) {
            Some(DecodedNotification::Frame(frame)) => {
                let sample = self.adapter.sample(&frame, timestamp_ms);
                self.recorder.push_sample(sample).map_or(
                    PipelineEvent::Sample(sample),
                    |rep| PipelineEvent::RepCompleted(rep.clone()),
                )
            }
            Some(DecodedNotification::RepBoundarySignal) => PipelineEvent::RepSignal,
            Some(DecodedNotification::SetBoundarySignal) => PipelineEvent::SetSignal,
            Some(DecodedNotification::Status(payload)) => PipelineEvent::Status(payload),
            None => PipelineEvent::Ignored,
        }
    }

    /// Completed reps so far in the current recording.
    #[must_use]
    pub fn reps(&self) -> &[Rep] {
        self.recorder.reps()
    }

    /// Close the current recording into a set and start a fresh one.
    pub fn finish_set(&mut self, weight: f32) -> Set {
        let recorder = mem::replace(&mut self.recorder, SetRecorder::new(self.config));
        recorder.finish(weight)
    }

    /// Discard the in-flight recording without producing a set.
    pub fn cancel_recording(&mut self) {
        self.recorder.reset();
    }
}
