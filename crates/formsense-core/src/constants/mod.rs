// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Landmark layout, tracking defaults, score bounds, and user-facing messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in one flat list.

/// Pose landmark layout
pub mod landmarks {
    /// Number of landmarks produced by a MediaPipe Pose detector
    pub const LANDMARK_COUNT: usize = 33;

    /// Minimum visibility for a landmark to count as detected
    pub const DEFAULT_VISIBILITY_THRESHOLD: f64 = 0.5;

    /// Visibility assumed when the detector does not report one
    pub const UNREPORTED_VISIBILITY: f64 = 1.0;
}

/// Rep-phase tracking defaults
pub mod tracking {
    /// Number of primary-measure samples kept for trend detection
    pub const DEFAULT_SMOOTHING_WINDOW: usize = 4;

    /// Smallest change across the window (degrees) treated as movement
    pub const DEFAULT_TREND_DEADBAND_DEGREES: f64 = 5.0;

    /// Consecutive missing-joint frames before tracking is reported lost
    pub const DEFAULT_TRACKING_LOST_AFTER: u32 = 3;

    /// Upper bound accepted for the smoothing window
    pub const MAX_SMOOTHING_WINDOW: usize = 30;
}

/// Form score bounds
pub mod scoring {
    /// Best possible form score
    pub const MAX_FORM_SCORE: f64 = 100.0;

    /// Worst possible form score
    pub const MIN_FORM_SCORE: f64 = 0.0;
}

/// Messages surfaced to the user
pub mod messages {
    /// Emitted once too many consecutive frames lack the required joints
    pub const TRACKING_LOST: &str = "Tracking lost - step back into the camera view";
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name reported by the engine's log output
    pub const FORMSENSE: &str = "formsense";
}
