// ABOUTME: Per-exercise weight-to-velocity baseline store with EMA updates
// ABOUTME: Interpolates between known weights; extrapolates beyond them with damped ratios
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Voltra Training Analytics

//! Velocity baseline maintenance.
//!
//! The store keeps, per exercise, the best max-effort mean concentric velocity
//! observed at each weight. Lookups at unseen weights interpolate linearly
//! between the two bracketing known weights. Below the lightest known weight
//! the extrapolated ratio is damped by 0.5 (lighter moves faster, but not
//! linearly so); above the heaviest it is damped by 0.3, since heavy-load
//! slowdown is even less linear.

use std::collections::HashMap;

use chrono::Utc;
use tracing::debug;
use voltra_core::config::BaselineConfig;
use voltra_core::constants::baseline::WEIGHT_MATCH_EPSILON_KG;
use voltra_core::errors::{AnalyticsError, AnalyticsResult};
use voltra_core::models::{BaselineExport, BaselinePoint, BaselineRecord, VelocityBaseline};

/// In-memory store of per-exercise velocity baselines.
#[derive(Debug, Clone, Default)]
pub struct VelocityBaselineStore {
    baselines: HashMap<String, VelocityBaseline>,
    config: BaselineConfig,
}

impl VelocityBaselineStore {
    /// Empty store with explicit tuning.
    #[must_use]
    pub fn new(config: BaselineConfig) -> Self {
        Self {
            baselines: HashMap::new(),
            config,
        }
    }

    /// The stored baseline for an exercise, if any updates have landed.
    #[must_use]
    pub fn baseline(&self, exercise_id: &str) -> Option<&VelocityBaseline> {
        self.baselines.get(exercise_id)
    }

    /// Expected max-effort velocity at `weight` for an exercise.
    ///
    /// Exact matches return the stored velocity; unseen weights interpolate or
    /// extrapolate as described in the module docs. Returns `None` when the
    /// exercise has no recorded points at all.
    #[must_use]
    pub fn get(&self, exercise_id: &str, weight: f32) -> Option<f32> {
        let points = &self.baselines.get(exercise_id)?.points;
        let (first, last) = points.first().zip(points.last())?;

        if let Some(exact) = points
            .iter()
            .find(|point| (point.weight - weight).abs() < WEIGHT_MATCH_EPSILON_KG)
        {
            return Some(exact.velocity);
        }

        if weight < first.weight {
            return Some(self.extrapolate(points, weight, Side::Light));
        }
        if weight > last.weight {
            return Some(self.extrapolate(points, weight, Side::Heavy));
        }

        // Bracketed by two known points: plain linear interpolation.
        let upper_index = points
            .iter()
            .position(|point| point.weight > weight)
            .unwrap_or(points.len() - 1);
        let lower = points[upper_index - 1];
        let upper = points[upper_index];
        let t = (weight - lower.weight) / (upper.weight - lower.weight);
        Some(t.mul_add(upper.velocity - lower.velocity, lower.velocity))
    }

    /// Record a max-effort observation.
    ///
    /// No-op unless `is_max_effort` and `velocity > 0`. An existing point at
    /// the same weight is EMA-blended with the configured learning rate; an
    /// unseen weight inserts a new point.
    pub fn update(&mut self, exercise_id: &str, weight: f32, velocity: f32, is_max_effort: bool) {
        if !is_max_effort || velocity <= 0.0 || !velocity.is_finite() {
            return;
        }
        let baseline = self
            .baselines
            .entry(exercise_id.to_owned())
            .or_insert_with(|| VelocityBaseline::new(exercise_id));

        if let Some(existing) = baseline
            .points
            .iter_mut()
            .find(|point| (point.weight - weight).abs() < WEIGHT_MATCH_EPSILON_KG)
        {
            existing.velocity += self.config.learning_rate * (velocity - existing.velocity);
        } else {
            let insert_at = baseline
                .points
                .iter()
                .position(|point| point.weight > weight)
                .unwrap_or(baseline.points.len());
            baseline
                .points
                .insert(insert_at, BaselinePoint { weight, velocity });
        }
        baseline.last_updated = Utc::now();
        debug!(exercise_id, weight, velocity, "baseline updated");
    }

    /// Export every baseline as the stable map-of-records contract.
    #[must_use]
    pub fn export_baselines(&self) -> BaselineExport {
        self.baselines
            .iter()
            .map(|(exercise_id, baseline)| {
                let weights = baseline
                    .points
                    .iter()
                    .map(|point| (point.weight.to_string(), point.velocity))
                    .collect();
                (
                    exercise_id.clone(),
                    BaselineRecord {
                        weights,
                        last_updated: baseline.last_updated,
                    },
                )
            })
            .collect()
    }

    /// Serialize every baseline to the JSON form of the export contract.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Serialization`] when JSON encoding fails.
    pub fn export_baselines_json(&self) -> AnalyticsResult<String> {
        serde_json::to_string(&self.export_baselines()).map_err(|source| {
            AnalyticsError::Serialization {
                context: "baseline export",
                source,
            }
        })
    }

    /// Replace stored baselines from the JSON form of the export contract.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::Serialization`] on malformed JSON and
    /// [`AnalyticsError::InvalidBaselineRecord`] on a weight key that does not
    /// parse to a finite positive number.
    pub fn import_baselines_json(&mut self, json: &str) -> AnalyticsResult<()> {
        let export: BaselineExport = serde_json::from_str(json).map_err(|source| {
            AnalyticsError::Serialization {
                context: "baseline import",
                source,
            }
        })?;
        self.import_baselines(&export)
    }

    /// Replace stored baselines from an export, validating every record.
    ///
    /// # Errors
    /// Returns [`AnalyticsError::InvalidBaselineRecord`] on a weight key that
    /// does not parse to a finite positive number.
    pub fn import_baselines(&mut self, export: &BaselineExport) -> AnalyticsResult<()> {
        for (exercise_id, record) in export {
            let mut points = Vec::with_capacity(record.weights.len());
            for (key, &velocity) in &record.weights {
                let weight: f32 = key.parse().map_err(|_| {
                    AnalyticsError::InvalidBaselineRecord {
                        exercise_id: exercise_id.clone(),
                        key: key.clone(),
                    }
                })?;
                if !weight.is_finite() || weight <= 0.0 {
                    return Err(AnalyticsError::InvalidBaselineRecord {
                        exercise_id: exercise_id.clone(),
                        key: key.clone(),
                    });
                }
                points.push(BaselinePoint { weight, velocity });
            }
            points.sort_by(|a, b| a.weight.total_cmp(&b.weight));
            self.baselines.insert(
                exercise_id.clone(),
                VelocityBaseline {
                    exercise_id: exercise_id.clone(),
                    points,
                    last_updated: record.last_updated,
                },
            );
        }
        Ok(())
    }

    /// Damped ratio extrapolation beyond the known weight range.
    fn extrapolate(&self, points: &[BaselinePoint], weight: f32, side: Side) -> f32 {
        let (anchor, damping) = match side {
            Side::Light => (points[0], self.config.light_damping),
            Side::Heavy => (points[points.len() - 1], self.config.heavy_damping),
        };
        if anchor.velocity <= f32::EPSILON {
            return anchor.velocity.max(0.0);
        }

        let naive = if points.len() < 2 {
            // One known point: scale by the inverse weight ratio
            // (half the weight, twice the speed, before damping).
            anchor.velocity * (anchor.weight / weight)
        } else {
            let (a, b) = match side {
                Side::Light => (points[0], points[1]),
                Side::Heavy => (points[points.len() - 2], points[points.len() - 1]),
            };
            let slope = (b.velocity - a.velocity) / (b.weight - a.weight);
            slope.mul_add(weight - anchor.weight, anchor.velocity)
        };

        let ratio = naive / anchor.velocity;
        let damped = (ratio - 1.0).mul_add(damping, 1.0);
        (anchor.velocity * damped).max(0.0)
    }
}

/// Which end of the known range an extrapolation falls on.
#[derive(Debug, Clone, Copy)]
enum Side {
    Light,
    Heavy,
}
