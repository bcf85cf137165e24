// ABOUTME: Engine configuration for landmark filtering, phase smoothing, and tracking loss
// ABOUTME: Loads tuning values from FORMSENSE_* environment variables with validated defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Engine Configuration
//!
//! Tuning shared by every evaluator a controller creates. Exercise-specific
//! thresholds live in the profiles, not here.

use std::env;

use formsense_core::constants::landmarks::DEFAULT_VISIBILITY_THRESHOLD;
use formsense_core::constants::tracking::{
    DEFAULT_SMOOTHING_WINDOW, DEFAULT_TRACKING_LOST_AFTER, DEFAULT_TREND_DEADBAND_DEGREES,
    MAX_SMOOTHING_WINDOW,
};
use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Engine-wide tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum landmark visibility accepted by the adapter
    pub visibility_threshold: f64,
    /// Primary-measure samples kept for trend detection
    pub smoothing_window: usize,
    /// Change across the window (measure units) below which there is no trend
    pub trend_deadband_degrees: f64,
    /// Consecutive missing-joint frames before "tracking lost" is reported
    pub tracking_lost_after: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            visibility_threshold: DEFAULT_VISIBILITY_THRESHOLD,
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            trend_deadband_degrees: DEFAULT_TREND_DEADBAND_DEGREES,
            tracking_lost_after: DEFAULT_TRACKING_LOST_AFTER,
        }
    }
}

impl EngineConfig {
    /// Load engine configuration from environment
    ///
    /// Unset or unparseable variables fall back to their defaults; call
    /// [`EngineConfig::validate`] to reject out-of-range values.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            visibility_threshold: env::var("FORMSENSE_VISIBILITY_THRESHOLD")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_VISIBILITY_THRESHOLD),
            smoothing_window: env::var("FORMSENSE_SMOOTHING_WINDOW")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SMOOTHING_WINDOW),
            trend_deadband_degrees: env::var("FORMSENSE_TREND_DEADBAND")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TREND_DEADBAND_DEGREES),
            tracking_lost_after: env::var("FORMSENSE_TRACKING_LOST_AFTER")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TRACKING_LOST_AFTER),
        }
    }

    /// Validate value ranges
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValueOutOfRange` for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.visibility_threshold) {
            return Err(ConfigError::ValueOutOfRange(
                "visibility_threshold must be between 0 and 1",
            ));
        }
        if self.smoothing_window < 2 || self.smoothing_window > MAX_SMOOTHING_WINDOW {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing_window must be between 2 and 30 samples",
            ));
        }
        if !self.trend_deadband_degrees.is_finite() || self.trend_deadband_degrees < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_deadband_degrees must be a non-negative number",
            ));
        }
        if self.tracking_lost_after == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "tracking_lost_after must be at least 1 frame",
            ));
        }
        Ok(())
    }
}
