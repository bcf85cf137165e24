// ABOUTME: Exercise evaluator trait and the profile-driven evaluator implementation
// ABOUTME: Consumes one frame of joints at a time and emits phase, rep, score, and feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! # Exercise Evaluators
//!
//! An evaluator is a per-session state machine. It owns the repetition phase
//! and sample window for one tracked workout and is fed frames in temporal
//! order by a single caller.

use formsense_core::constants::messages::TRACKING_LOST;
use formsense_core::errors::MissingJointsError;
use formsense_core::models::{ExerciseType, RepPhase};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::adapter::{JointSet, Joints};
use crate::config::EngineConfig;
use crate::measures::MeasureReadings;
use crate::phase::PhaseTracker;
use crate::profiles::ExerciseProfile;
use crate::scoring;

/// Result of evaluating one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameResult {
    /// Phase after this frame
    pub phase: RepPhase,
    /// Whether the phase changed on this frame
    pub phase_changed: bool,
    /// Whether this frame completed a repetition
    pub rep_completed: bool,
    /// Form score in [0, 100]; `None` when the frame was skipped
    pub form_score: Option<f64>,
    /// Corrective messages, deduplicated, in rule order
    pub feedback: Vec<String>,
    /// Coaching cue for the current phase
    pub cue: Option<String>,
    /// Measure values computed this frame (empty when skipped)
    pub measurements: MeasureReadings,
}

impl FrameResult {
    /// Result for a frame that produced no measurement
    #[must_use]
    pub fn skipped(phase: RepPhase, feedback: Vec<String>) -> Self {
        Self {
            phase,
            phase_changed: false,
            rep_completed: false,
            form_score: None,
            feedback,
            cue: None,
            measurements: MeasureReadings::default(),
        }
    }

    /// Whether the frame was skipped for lack of joints
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        self.form_score.is_none()
    }
}

/// Per-session exercise state machine
///
/// Implementations must leave phase state untouched in `skip_frame`.
pub trait ExerciseEvaluator: Send {
    /// Exercise this evaluator scores
    fn exercise(&self) -> ExerciseType;

    /// Joints the landmark adapter must supply
    fn required_joints(&self) -> &JointSet;

    /// Evaluate one frame of joints
    fn process(&mut self, joints: &Joints) -> FrameResult;

    /// Record a frame that lacked required joints
    fn skip_frame(&mut self, missing: &MissingJointsError) -> FrameResult;

    /// Current repetition phase
    fn phase(&self) -> RepPhase;

    /// Exercise-specific label for the current phase
    fn phase_label(&self) -> &str;

    /// Return to the initial state
    fn reset(&mut self);
}

/// Evaluator driven entirely by an `ExerciseProfile`
#[derive(Debug, Clone)]
pub struct ProfileEvaluator {
    profile: ExerciseProfile,
    required: JointSet,
    tracker: PhaseTracker,
    consecutive_missing: u32,
    tracking_lost_after: u32,
}

impl ProfileEvaluator {
    /// Create an evaluator for a profile
    ///
    /// The profile should already have passed `ExerciseProfile::validate`;
    /// a frame whose primary measure cannot be computed is skipped.
    #[must_use]
    pub fn new(profile: ExerciseProfile, config: &EngineConfig) -> Self {
        let required = profile.required_joints();
        let tracker = PhaseTracker::new(
            profile.thresholds,
            config.smoothing_window,
            config.trend_deadband_degrees,
        );
        Self {
            profile,
            required,
            tracker,
            consecutive_missing: 0,
            tracking_lost_after: config.tracking_lost_after,
        }
    }

    /// Profile backing this evaluator
    #[must_use]
    pub const fn profile(&self) -> &ExerciseProfile {
        &self.profile
    }

    /// Consecutive frames skipped since the last evaluated one
    #[must_use]
    pub const fn consecutive_missing(&self) -> u32 {
        self.consecutive_missing
    }
}

impl ExerciseEvaluator for ProfileEvaluator {
    fn exercise(&self) -> ExerciseType {
        self.profile.exercise
    }

    fn required_joints(&self) -> &JointSet {
        &self.required
    }

    fn process(&mut self, joints: &Joints) -> FrameResult {
        let readings = match MeasureReadings::evaluate(&self.profile.measures, joints) {
            Ok(readings) => readings,
            Err(absent) => return self.skip_frame(&MissingJointsError::new(absent, Vec::new())),
        };
        let Some(primary) = readings.get(&self.profile.primary) else {
            return self.skip_frame(&MissingJointsError::default());
        };

        self.consecutive_missing = 0;
        let update = self.tracker.update(primary);
        let phase = update.current;

        if update.phase_changed() {
            debug!(
                exercise = %self.profile.exercise,
                from = self.profile.labels.label(update.previous),
                to = self.profile.labels.label(phase),
                primary,
                "Phase changed"
            );
        }
        if update.rep_completed {
            info!(exercise = %self.profile.exercise, "Repetition completed");
        }

        FrameResult {
            phase,
            phase_changed: update.phase_changed(),
            rep_completed: update.rep_completed,
            form_score: Some(scoring::form_score(
                &self.profile.score_terms,
                &readings,
                phase,
            )),
            feedback: scoring::feedback(&self.profile.feedback, &readings, phase),
            cue: self.profile.cue(phase).map(str::to_owned),
            measurements: readings,
        }
    }

    fn skip_frame(&mut self, missing: &MissingJointsError) -> FrameResult {
        self.consecutive_missing = self.consecutive_missing.saturating_add(1);

        let feedback = if self.consecutive_missing >= self.tracking_lost_after {
            if self.consecutive_missing == self.tracking_lost_after {
                warn!(
                    exercise = %self.profile.exercise,
                    frames = self.consecutive_missing,
                    %missing,
                    "Tracking lost"
                );
            }
            vec![TRACKING_LOST.to_owned()]
        } else {
            debug!(exercise = %self.profile.exercise, %missing, "Frame skipped");
            Vec::new()
        };

        FrameResult::skipped(self.tracker.phase(), feedback)
    }

    fn phase(&self) -> RepPhase {
        self.tracker.phase()
    }

    fn phase_label(&self) -> &str {
        self.profile.labels.label(self.tracker.phase())
    }

    fn reset(&mut self) {
        self.tracker.reset();
        self.consecutive_missing = 0;
    }
}
