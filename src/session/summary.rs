// ABOUTME: Final session summary handed to the caller when a session ends
// ABOUTME: Carries total reps, score statistics, duration, and frame counters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use chrono::{DateTime, TimeDelta, Utc};
use formsense_core::models::ExerciseType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Aggregate results of a finished session
///
/// Persisting the summary is left to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalSessionSummary {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise that was tracked
    pub exercise: ExerciseType,
    /// Completed repetitions
    pub total_reps: u32,
    /// Mean over scored frames, `None` if no frame was scored
    pub average_score: Option<f64>,
    /// Highest frame score
    pub peak_score: Option<f64>,
    /// Lowest frame score
    pub min_score: Option<f64>,
    /// Milliseconds between the first and last submitted frame timestamps
    pub duration_ms: i64,
    /// Wall-clock time the session was started
    pub started_at: DateTime<Utc>,
    /// Wall-clock time the session was ended
    pub ended_at: DateTime<Utc>,
    /// Frames that produced a score
    pub frames_processed: u64,
    /// Frames skipped for missing joints
    pub frames_skipped: u64,
}

impl FinalSessionSummary {
    /// Session duration measured on frame timestamps
    #[must_use]
    pub fn duration(&self) -> TimeDelta {
        TimeDelta::milliseconds(self.duration_ms)
    }

    /// Total frames submitted
    #[must_use]
    pub const fn total_frames(&self) -> u64 {
        self.frames_processed + self.frames_skipped
    }
}
