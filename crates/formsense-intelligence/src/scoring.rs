// ABOUTME: Form score and corrective feedback evaluation against a profile's tables
// ABOUTME: Sum-of-penalties scoring clamped to [0, 100] and deduplicated feedback messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::constants::scoring::{MAX_FORM_SCORE, MIN_FORM_SCORE};
use formsense_core::models::RepPhase;

use crate::measures::MeasureReadings;
use crate::profiles::{FeedbackRule, ScoreTerm};

/// Form score for one frame
///
/// Policy: penalties from every applicable term are summed, then subtracted
/// from 100 and clamped to [0, 100]. Two moderate faults therefore cost as
/// much as one fault of twice the size. Terms whose measure has no reading
/// or whose scope excludes `phase` contribute nothing.
#[must_use]
pub fn form_score(terms: &[ScoreTerm], readings: &MeasureReadings, phase: RepPhase) -> f64 {
    let penalty: f64 = terms
        .iter()
        .filter(|term| term.scope.matches(phase))
        .filter_map(|term| {
            readings
                .get(&term.measure)
                .map(|value| term.ideal.deviation(value) * term.penalty_per_unit)
        })
        .sum();

    (MAX_FORM_SCORE - penalty).clamp(MIN_FORM_SCORE, MAX_FORM_SCORE)
}

/// Corrective messages whose conditions hold this frame
///
/// Messages keep rule order; a message produced by several rules appears once.
#[must_use]
pub fn feedback(rules: &[FeedbackRule], readings: &MeasureReadings, phase: RepPhase) -> Vec<String> {
    let mut messages: Vec<String> = Vec::new();
    for rule in rules.iter().filter(|rule| rule.scope.matches(phase)) {
        let triggered = readings
            .get(&rule.measure)
            .is_some_and(|value| rule.condition.holds(value));
        if triggered && !messages.iter().any(|m| m == &rule.message) {
            messages.push(rule.message.clone());
        }
    }
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::Joints;
    use crate::measures::{Joint, Measure, MeasureSpec};
    use crate::profiles::{Condition, IdealRange, PhaseScope};
    use formsense_core::models::{Landmark, LandmarkName};
    use std::collections::BTreeMap;

    /// Readings for a single arm-angle measure built from real geometry
    fn elbow_readings(degrees: f64) -> MeasureReadings {
        let theta = (degrees - 90.0).to_radians();
        let mut map = BTreeMap::new();
        for (shoulder, elbow, wrist, x) in [
            (
                LandmarkName::LeftShoulder,
                LandmarkName::LeftElbow,
                LandmarkName::LeftWrist,
                0.3,
            ),
            (
                LandmarkName::RightShoulder,
                LandmarkName::RightElbow,
                LandmarkName::RightWrist,
                0.7,
            ),
        ] {
            map.insert(shoulder, Landmark::new(x, 0.3, 1.0));
            map.insert(elbow, Landmark::new(x, 0.5, 1.0));
            map.insert(
                wrist,
                Landmark::new(x + 0.2 * theta.cos(), 0.5 + 0.2 * theta.sin(), 1.0),
            );
        }
        let specs = vec![MeasureSpec::new(
            "elbow",
            Measure::BilateralAngle {
                proximal: Joint::Shoulder,
                vertex: Joint::Elbow,
                distal: Joint::Wrist,
            },
        )];
        MeasureReadings::evaluate(&specs, &Joints::from_map(map)).unwrap()
    }

    fn terms() -> Vec<ScoreTerm> {
        vec![
            ScoreTerm::new("elbow", PhaseScope::Any, IdealRange::new(60.0, 180.0), 2.0),
            ScoreTerm::new("elbow", PhaseScope::Active, IdealRange::new(70.0, 100.0), 1.0),
        ]
    }

    #[test]
    fn test_ideal_reading_scores_full_marks() {
        let score = form_score(&terms(), &elbow_readings(170.0), RepPhase::Up);
        assert!((score - 100.0).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_penalties_are_summed_across_terms() {
        // 10° below the first range (x2) plus 20° below the second (x1)
        let score = form_score(&terms(), &elbow_readings(50.0), RepPhase::Down);
        assert!((score - 60.0).abs() < 1e-6, "got {score}");
    }

    #[test]
    fn test_score_is_clamped_at_zero() {
        let harsh = vec![ScoreTerm::new(
            "elbow",
            PhaseScope::Any,
            IdealRange::new(170.0, 180.0),
            50.0,
        )];
        let score = form_score(&harsh, &elbow_readings(90.0), RepPhase::Up);
        assert!(score.abs() < f64::EPSILON);
    }

    #[test]
    fn test_feedback_is_scoped_and_deduplicated() {
        let rules = vec![
            FeedbackRule::new("elbow", PhaseScope::Any, Condition::Below(60.0), "Too low"),
            FeedbackRule::new("elbow", PhaseScope::Any, Condition::Below(55.0), "Too low"),
            FeedbackRule::new("elbow", PhaseScope::Rest, Condition::Below(100.0), "Lock out"),
        ];

        let messages = feedback(&rules, &elbow_readings(50.0), RepPhase::Down);
        assert_eq!(messages, vec!["Too low".to_owned()]);

        let messages = feedback(&rules, &elbow_readings(50.0), RepPhase::Up);
        assert_eq!(messages, vec!["Too low".to_owned(), "Lock out".to_owned()]);
    }
}
