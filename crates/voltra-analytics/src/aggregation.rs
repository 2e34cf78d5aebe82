// ABOUTME: Pure reducers turning sample buckets into phases and phases into reps
// ABOUTME: Empty buckets yield zeroed metrics; directionality preserved for ROM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

use voltra_core::models::{
    MovementPhase, Phase, PhaseMetrics, Rep, RepMetrics, TimeRange, WorkoutSample,
};

/// Reduce a sample bucket into a [`Phase`] with derived metrics.
///
/// An empty bucket produces a zero-valued phase with a `(0, 0)` time range;
/// this is the defined degenerate case, not an error.
#[must_use]
pub fn aggregate_phase(phase_type: MovementPhase, samples: Vec<WorkoutSample>) -> Phase {
    let Some((first, last)) = samples.first().zip(samples.last()) else {
        return Phase {
            phase_type,
            time_range: TimeRange::default(),
            samples,
            metrics: PhaseMetrics::default(),
        };
    };

    let time_range = TimeRange {
        start: first.timestamp,
        end: last.timestamp,
    };
    let count = samples.len() as f32;
    let mut velocity_sum = 0.0_f32;
    let mut force_sum = 0.0_f32;
    let mut peak_velocity = 0.0_f32;
    let mut peak_force = 0.0_f32;
    for sample in &samples {
        velocity_sum += sample.velocity;
        force_sum += sample.force;
        peak_velocity = peak_velocity.max(sample.velocity);
        peak_force = peak_force.max(sample.force);
    }

    let metrics = PhaseMetrics {
        duration_s: time_range.duration_s(),
        mean_velocity: velocity_sum / count,
        peak_velocity,
        mean_force: force_sum / count,
        peak_force,
        // First/last, not min/max: directionality matters for range of motion.
        start_position: first.position,
        end_position: last.position,
    };

    Phase {
        phase_type,
        time_range,
        samples,
        metrics,
    }
}

/// Combine completed phases into an immutable [`Rep`].
///
/// Holds contribute zero duration when absent. Peak force is the max across
/// both driving phases; range of motion is the max of the concentric end
/// position and the eccentric start position.
#[must_use]
pub fn aggregate_rep(
    rep_number: u32,
    concentric: Phase,
    eccentric: Phase,
    hold_at_top: Option<Phase>,
    hold_at_bottom: Option<Phase>,
) -> Rep {
    // A phase claiming duration without samples cannot come from valid decoded
    // input; it is a programming-contract violation upstream.
    debug_assert!(
        !(concentric.samples.is_empty() && concentric.metrics.duration_s.abs() > f32::EPSILON),
        "concentric phase claims duration without samples"
    );
    debug_assert!(
        !(eccentric.samples.is_empty() && eccentric.metrics.duration_s.abs() > f32::EPSILON),
        "eccentric phase claims duration without samples"
    );

    let top_hold_duration_s = hold_at_top
        .as_ref()
        .map_or(0.0, |phase| phase.metrics.duration_s);
    let bottom_hold_duration_s = hold_at_bottom
        .as_ref()
        .map_or(0.0, |phase| phase.metrics.duration_s);

    let tempo = format!(
        "{}-{}-{}-{}",
        tempo_component(eccentric.metrics.duration_s),
        tempo_component(top_hold_duration_s),
        tempo_component(concentric.metrics.duration_s),
        tempo_component(bottom_hold_duration_s),
    );

    let mut start = i64::MAX;
    let mut end = i64::MIN;
    for phase in [&concentric, &eccentric]
        .into_iter()
        .chain(hold_at_top.iter())
        .chain(hold_at_bottom.iter())
    {
        if !phase.samples.is_empty() {
            start = start.min(phase.time_range.start);
            end = end.max(phase.time_range.end);
        }
    }
    let time_range = if start <= end {
        TimeRange { start, end }
    } else {
        TimeRange::default()
    };

    let metrics = RepMetrics {
        total_duration_s: concentric.metrics.duration_s
            + eccentric.metrics.duration_s
            + top_hold_duration_s
            + bottom_hold_duration_s,
        concentric_duration_s: concentric.metrics.duration_s,
        eccentric_duration_s: eccentric.metrics.duration_s,
        top_hold_duration_s,
        bottom_hold_duration_s,
        tempo,
        concentric_mean_velocity: concentric.metrics.mean_velocity,
        concentric_peak_velocity: concentric.metrics.peak_velocity,
        eccentric_mean_velocity: eccentric.metrics.mean_velocity,
        eccentric_peak_velocity: eccentric.metrics.peak_velocity,
        peak_force: concentric.metrics.peak_force.max(eccentric.metrics.peak_force),
        range_of_motion: concentric
            .metrics
            .end_position
            .max(eccentric.metrics.start_position),
    };

    Rep {
        rep_number,
        time_range,
        concentric,
        eccentric,
        hold_at_top,
        hold_at_bottom,
        metrics,
    }
}

/// Render one tempo component: duration rounded to the nearest 0.5 s,
/// whole values without a decimal (`"2"`, `"1.5"`, `"0"`).
fn tempo_component(duration_s: f32) -> String {
    let rounded = (duration_s * 2.0).round() / 2.0;
    if rounded.fract().abs() < f32::EPSILON {
        format!("{}", rounded as i32)
    } else {
        format!("{rounded:.1}")
    }
}
