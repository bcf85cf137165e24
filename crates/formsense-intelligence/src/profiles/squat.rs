// ABOUTME: Squat profile counted on knee flexion with a torso-lean check at the bottom
// ABOUTME: Thresholds, ideal ranges, and coaching messages for the squat evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::models::{ExerciseType, RepPhase};

use super::{
    Condition, ExerciseProfile, FeedbackRule, IdealRange, PhaseCue, PhaseLabels, PhaseScope,
    PhaseThresholds, ScoreTerm,
};
use crate::measures::{Joint, Measure, MeasureSpec};

/// Hip-knee-ankle angle, mean of both legs
pub const KNEE_ANGLE: &str = "knee_angle";
/// Shoulder-hip-knee angle, mean of both sides (small = chest folded forward)
pub const TORSO_ANGLE: &str = "torso_angle";

const KNEE_DOWN_DEGREES: f64 = 120.0;
const KNEE_UP_DEGREES: f64 = 160.0;
const KNEE_MIN_SAFE_DEGREES: f64 = 80.0;
const TORSO_MIN_DEGREES: f64 = 50.0;
const TORSO_COLLAPSE_DEGREES: f64 = 45.0;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::Squat,
        primary: KNEE_ANGLE.into(),
        measures: vec![
            MeasureSpec::new(
                KNEE_ANGLE,
                Measure::BilateralAngle {
                    proximal: Joint::Hip,
                    vertex: Joint::Knee,
                    distal: Joint::Ankle,
                },
            ),
            MeasureSpec::new(
                TORSO_ANGLE,
                Measure::BilateralAngle {
                    proximal: Joint::Shoulder,
                    vertex: Joint::Hip,
                    distal: Joint::Knee,
                },
            ),
        ],
        thresholds: PhaseThresholds::below(KNEE_DOWN_DEGREES, KNEE_UP_DEGREES),
        score_terms: vec![
            ScoreTerm::new(
                KNEE_ANGLE,
                PhaseScope::Any,
                IdealRange::new(KNEE_MIN_SAFE_DEGREES, 180.0),
                1.5,
            ),
            // Torso lean only matters once the hips are low
            ScoreTerm::new(
                TORSO_ANGLE,
                PhaseScope::Active,
                IdealRange::new(TORSO_MIN_DEGREES, 180.0),
                1.0,
            ),
        ],
        feedback: vec![
            FeedbackRule::new(
                KNEE_ANGLE,
                PhaseScope::Any,
                Condition::Below(KNEE_MIN_SAFE_DEGREES),
                "Don't squat too deep",
            ),
            FeedbackRule::new(
                TORSO_ANGLE,
                PhaseScope::Active,
                Condition::Below(TORSO_COLLAPSE_DEGREES),
                "Keep your chest up",
            ),
        ],
        cues: vec![
            PhaseCue::new(RepPhase::Up, "Great squat!"),
            PhaseCue::new(RepPhase::Descending, "Sit back into your hips"),
            PhaseCue::new(RepPhase::Down, "Perfect depth! Now stand up"),
            PhaseCue::new(RepPhase::Ascending, "Stand up completely"),
        ],
        labels: PhaseLabels::default(),
    }
}
