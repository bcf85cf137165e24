// ABOUTME: Jumping jack profile counted on arm abduction with leg-spread coordination checks
// ABOUTME: Thresholds, ideal ranges, and coaching messages for the jumping jack evaluator
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::models::{ExerciseType, RepPhase};

use super::{
    Condition, ExerciseProfile, FeedbackRule, IdealRange, PhaseCue, PhaseLabels, PhaseScope,
    PhaseThresholds, ScoreTerm,
};
use crate::measures::{Joint, Measure, MeasureSpec};

/// Hip-shoulder-wrist angle, mean of both arms (0° = arms at sides)
pub const ARM_ABDUCTION: &str = "arm_abduction";
/// Ankle spread divided by body height
pub const LEG_SPREAD: &str = "leg_spread";

const ARMS_OPEN_DEGREES: f64 = 120.0;
const ARMS_CLOSED_DEGREES: f64 = 50.0;
const ARMS_OVERHEAD_DEGREES: f64 = 150.0;
const ARMS_LOW_DEGREES: f64 = 140.0;
const LEGS_OPEN_RATIO: f64 = 0.2;
const LEGS_NARROW_RATIO: f64 = 0.15;
const LEGS_CLOSED_MAX_RATIO: f64 = 0.15;
const LEGS_LEFT_OPEN_RATIO: f64 = 0.25;
/// Ratio penalties are scaled so 0.1 of spread costs 20 points
const SPREAD_PENALTY_PER_UNIT: f64 = 200.0;

pub(super) fn profile() -> ExerciseProfile {
    ExerciseProfile {
        exercise: ExerciseType::JumpingJack,
        primary: ARM_ABDUCTION.into(),
        measures: vec![
            MeasureSpec::new(
                ARM_ABDUCTION,
                Measure::BilateralAngle {
                    proximal: Joint::Hip,
                    vertex: Joint::Shoulder,
                    distal: Joint::Wrist,
                },
            ),
            MeasureSpec::new(
                LEG_SPREAD,
                Measure::SpreadRatio {
                    joint: Joint::Ankle,
                },
            ),
        ],
        thresholds: PhaseThresholds::above(ARMS_OPEN_DEGREES, ARMS_CLOSED_DEGREES),
        score_terms: vec![
            ScoreTerm::new(
                ARM_ABDUCTION,
                PhaseScope::Active,
                IdealRange::new(ARMS_OVERHEAD_DEGREES, 180.0),
                1.0,
            ),
            ScoreTerm::new(
                LEG_SPREAD,
                PhaseScope::Active,
                IdealRange::new(LEGS_OPEN_RATIO, 2.0),
                SPREAD_PENALTY_PER_UNIT,
            ),
            // Arms and legs should close together
            ScoreTerm::new(
                LEG_SPREAD,
                PhaseScope::Rest,
                IdealRange::new(0.0, LEGS_CLOSED_MAX_RATIO),
                SPREAD_PENALTY_PER_UNIT,
            ),
        ],
        feedback: vec![
            FeedbackRule::new(
                ARM_ABDUCTION,
                PhaseScope::Active,
                Condition::Below(ARMS_LOW_DEGREES),
                "Raise your arms higher",
            ),
            FeedbackRule::new(
                LEG_SPREAD,
                PhaseScope::Active,
                Condition::Below(LEGS_NARROW_RATIO),
                "Jump with wider legs",
            ),
            FeedbackRule::new(
                LEG_SPREAD,
                PhaseScope::Rest,
                Condition::Above(LEGS_LEFT_OPEN_RATIO),
                "Coordinate arms and legs together",
            ),
        ],
        cues: vec![
            PhaseCue::new(RepPhase::Down, "Perfect jumping jacks!"),
            PhaseCue::new(RepPhase::Ascending, "Bring it back in"),
        ],
        labels: PhaseLabels::new("closed", "opening", "open", "closing"),
    }
}
