// ABOUTME: Tracked workout session owning one exercise evaluator and its aggregate state
// ABOUTME: Feeds frames through the landmark adapter and evaluator, producing per-frame snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! # Sessions
//!
//! A [`Session`] owns exactly one evaluator for the length of a workout. Frames
//! must be submitted in capture order by a single caller; `&mut self` is the
//! only synchronization. [`SessionRegistry`] layers opaque handles on top for
//! callers that do not want to hold the session themselves.

/// Handle-based session registry
pub mod registry;

/// End-of-session summary
pub mod summary;

pub use registry::{SessionHandle, SessionRegistry};
pub use summary::FinalSessionSummary;

use std::fmt;

use chrono::{DateTime, Utc};
use formsense_core::errors::FormResult;
use formsense_core::models::{ExerciseType, LandmarkFrame, RepPhase};
use formsense_intelligence::{extract_joints, EngineConfig, ExerciseEvaluator, FrameResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Running statistics over scored frames
///
/// Frames skipped for missing joints never reach these statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreStats {
    /// Sum of all recorded scores
    pub sum: f64,
    /// Number of recorded scores
    pub count: u64,
    /// Lowest recorded score
    pub min: Option<f64>,
    /// Highest recorded score
    pub max: Option<f64>,
}

impl ScoreStats {
    /// Record one frame's score
    pub fn record(&mut self, score: f64) {
        self.sum += score;
        self.count += 1;
        self.min = Some(self.min.map_or(score, |min| min.min(score)));
        self.max = Some(self.max.map_or(score, |max| max.max(score)));
    }

    /// Running mean, `None` before the first score
    #[must_use]
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Aggregate state of one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    /// Exercise being tracked
    pub exercise: ExerciseType,
    /// Phase after the latest frame
    pub phase: RepPhase,
    /// Completed repetitions
    pub rep_count: u32,
    /// Score statistics over scored frames
    pub scores: ScoreStats,
    /// Score of the latest scored frame
    pub last_score: Option<f64>,
    /// Feedback produced by the latest frame
    pub last_feedback: Vec<String>,
    /// Coaching cue produced by the latest scored frame
    pub cue: Option<String>,
    /// Frames that produced a score
    pub frames_processed: u64,
    /// Frames skipped for missing joints
    pub frames_skipped: u64,
}

impl SessionState {
    /// Fresh state for `exercise`
    #[must_use]
    pub fn new(exercise: ExerciseType) -> Self {
        Self {
            exercise,
            phase: RepPhase::Up,
            rep_count: 0,
            scores: ScoreStats::default(),
            last_score: None,
            last_feedback: Vec::new(),
            cue: None,
            frames_processed: 0,
            frames_skipped: 0,
        }
    }

    /// Fold one frame result into the aggregate
    pub fn apply(&mut self, result: &FrameResult) {
        self.phase = result.phase;
        self.last_feedback.clone_from(&result.feedback);

        if result.rep_completed {
            self.rep_count += 1;
        }

        if let Some(score) = result.form_score {
            self.scores.record(score);
            self.last_score = Some(score);
            self.cue.clone_from(&result.cue);
            self.frames_processed += 1;
        } else {
            self.frames_skipped += 1;
        }
    }
}

/// What the caller sees after each frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Session identifier
    pub session_id: Uuid,
    /// Exercise being tracked
    pub exercise: ExerciseType,
    /// Current phase
    pub phase: RepPhase,
    /// Exercise-specific label for the current phase
    pub phase_label: String,
    /// Completed repetitions
    pub rep_count: u32,
    /// Whether the latest frame completed a repetition
    pub rep_completed: bool,
    /// Running mean over scored frames
    pub average_score: Option<f64>,
    /// Score of the latest scored frame
    pub last_score: Option<f64>,
    /// Feedback produced by the latest frame
    pub last_feedback: Vec<String>,
    /// Coaching cue for the current phase
    pub cue: Option<String>,
    /// Frames that produced a score
    pub frames_processed: u64,
    /// Frames skipped for missing joints
    pub frames_skipped: u64,
}

/// One tracked workout
pub struct Session {
    id: Uuid,
    evaluator: Box<dyn ExerciseEvaluator>,
    visibility_threshold: f64,
    state: SessionState,
    last_rep_completed: bool,
    started_at: DateTime<Utc>,
    first_frame_at: Option<DateTime<Utc>>,
    last_frame_at: Option<DateTime<Utc>>,
}

impl Session {
    /// Start a session around a freshly created evaluator
    #[must_use]
    pub fn new(evaluator: Box<dyn ExerciseEvaluator>, config: &EngineConfig) -> Self {
        let exercise = evaluator.exercise();
        Self {
            id: Uuid::new_v4(),
            evaluator,
            visibility_threshold: config.visibility_threshold,
            state: SessionState::new(exercise),
            last_rep_completed: false,
            started_at: Utc::now(),
            first_frame_at: None,
            last_frame_at: None,
        }
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Exercise being tracked
    #[must_use]
    pub fn exercise(&self) -> ExerciseType {
        self.state.exercise
    }

    /// Aggregate state
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Evaluate one frame and return the updated snapshot
    ///
    /// A frame lacking required joints is skipped by the evaluator; it never
    /// fails the call.
    pub fn submit_frame(&mut self, frame: &LandmarkFrame) -> SessionSnapshot {
        let extracted = extract_joints(
            frame,
            self.evaluator.required_joints(),
            self.visibility_threshold,
        );
        let result = match extracted {
            Ok(joints) => self.evaluator.process(&joints),
            Err(missing) => self.evaluator.skip_frame(&missing),
        };
        self.record(frame, &result)
    }

    /// Evaluate one frame, returning the missing joints instead of skipping
    ///
    /// A rejected frame leaves the session untouched: it is not counted as
    /// skipped and does not advance tracking loss.
    ///
    /// # Errors
    ///
    /// Returns `FormError::MissingJoints` when a required joint is absent or
    /// below the visibility threshold.
    pub fn submit_frame_strict(&mut self, frame: &LandmarkFrame) -> FormResult<SessionSnapshot> {
        let joints = extract_joints(
            frame,
            self.evaluator.required_joints(),
            self.visibility_threshold,
        )?;
        let result = self.evaluator.process(&joints);
        Ok(self.record(frame, &result))
    }

    fn record(&mut self, frame: &LandmarkFrame, result: &FrameResult) -> SessionSnapshot {
        self.first_frame_at.get_or_insert(frame.timestamp);
        self.last_frame_at = Some(frame.timestamp);
        self.last_rep_completed = result.rep_completed;
        self.state.apply(result);

        self.snapshot()
    }

    /// Snapshot of the current state
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.id,
            exercise: self.state.exercise,
            phase: self.state.phase,
            phase_label: self.evaluator.phase_label().to_owned(),
            rep_count: self.state.rep_count,
            rep_completed: self.last_rep_completed,
            average_score: self.state.scores.average(),
            last_score: self.state.last_score,
            last_feedback: self.state.last_feedback.clone(),
            cue: self.state.cue.clone(),
            frames_processed: self.state.frames_processed,
            frames_skipped: self.state.frames_skipped,
        }
    }

    /// End the session, consuming it
    #[must_use]
    pub fn finish(self) -> FinalSessionSummary {
        let duration_ms = match (self.first_frame_at, self.last_frame_at) {
            (Some(first), Some(last)) => (last - first).num_milliseconds(),
            _ => 0,
        };

        FinalSessionSummary {
            session_id: self.id,
            exercise: self.state.exercise,
            total_reps: self.state.rep_count,
            average_score: self.state.scores.average(),
            peak_score: self.state.scores.max,
            min_score: self.state.scores.min,
            duration_ms,
            started_at: self.started_at,
            ended_at: Utc::now(),
            frames_processed: self.state.frames_processed,
            frames_skipped: self.state.frames_skipped,
        }
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("started_at", &self.started_at)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_stats_track_mean_and_extremes() {
        let mut stats = ScoreStats::default();
        assert_eq!(stats.average(), None);

        for score in [90.0, 70.0, 100.0] {
            stats.record(score);
        }

        assert!((stats.average().unwrap() - 86.666_666).abs() < 1e-3);
        assert_eq!(stats.min, Some(70.0));
        assert_eq!(stats.max, Some(100.0));
    }

    #[test]
    fn test_skipped_results_do_not_touch_scores() {
        let mut state = SessionState::new(ExerciseType::Squat);
        state.apply(&FrameResult::skipped(RepPhase::Up, vec!["lost".to_owned()]));

        assert_eq!(state.frames_skipped, 1);
        assert_eq!(state.frames_processed, 0);
        assert_eq!(state.scores.average(), None);
        assert_eq!(state.last_feedback, vec!["lost".to_owned()]);
    }
}
