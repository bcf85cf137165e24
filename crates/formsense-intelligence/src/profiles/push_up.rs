// ABOUTME: Push-up profile counted on elbow flexion with a straight-body check
// ABOUTME: Thresholds, ideal ranges, and coaching messages for the push-up evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::models::{ExerciseType, RepPhase};

use super::{
    Condition, ExerciseProfile, FeedbackRule, IdealRange, PhaseCue, PhaseLabels, PhaseScope,
    PhaseThresholds, ScoreTerm,
};
use crate::measures::{Joint, Measure, MeasureSpec};

/// Shoulder-elbow-wrist angle, mean of both arms
pub const ELBOW_ANGLE: &str = "elbow_angle";
/// Shoulder-hip-ankle angle, mean of both sides (180° = plank-straight)
pub const BODY_LINE: &str = "body_line";

/// Elbow angle below which the bottom of the rep is reached
const ELBOW_DOWN_DEGREES: f64 = 90.0;
/// Elbow angle above which the arms count as locked out
const ELBOW_UP_DEGREES: f64 = 160.0;
/// Going deeper than this loads the shoulder joint
const ELBOW_MIN_SAFE_DEGREES: f64 = 60.0;
/// Body line below this is a visible hip sag or pike
const BODY_LINE_MIN_DEGREES: f64 = 160.0;
/// Body line at which sagging feedback kicks in
const BODY_LINE_SAG_DEGREES: f64 = 150.0;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::PushUp,
        primary: ELBOW_ANGLE.into(),
        measures: vec![
            MeasureSpec::new(
                ELBOW_ANGLE,
                Measure::BilateralAngle {
                    proximal: Joint::Shoulder,
                    vertex: Joint::Elbow,
                    distal: Joint::Wrist,
                },
            ),
            MeasureSpec::new(
                BODY_LINE,
                Measure::BilateralAngle {
                    proximal: Joint::Shoulder,
                    vertex: Joint::Hip,
                    distal: Joint::Ankle,
                },
            ),
        ],
        thresholds: PhaseThresholds::below(ELBOW_DOWN_DEGREES, ELBOW_UP_DEGREES),
        score_terms: vec![
            ScoreTerm::new(
                ELBOW_ANGLE,
                PhaseScope::Any,
                IdealRange::new(ELBOW_MIN_SAFE_DEGREES, 180.0),
                2.0,
            ),
            ScoreTerm::new(
                BODY_LINE,
                PhaseScope::Any,
                IdealRange::new(BODY_LINE_MIN_DEGREES, 180.0),
                1.5,
            ),
        ],
        feedback: vec![
            FeedbackRule::new(
                ELBOW_ANGLE,
                PhaseScope::Any,
                Condition::Below(ELBOW_MIN_SAFE_DEGREES),
                "Don't go too low - protect your shoulders",
            ),
            FeedbackRule::new(
                BODY_LINE,
                PhaseScope::Any,
                Condition::Below(BODY_LINE_SAG_DEGREES),
                "Keep your body straight - avoid sagging",
            ),
        ],
        cues: vec![
            PhaseCue::new(RepPhase::Up, "Great form!"),
            PhaseCue::new(RepPhase::Descending, "Lower your chest with control"),
            PhaseCue::new(RepPhase::Down, "Good depth! Now push up"),
            PhaseCue::new(RepPhase::Ascending, "Push all the way up"),
        ],
        labels: PhaseLabels::default(),
    }
}
