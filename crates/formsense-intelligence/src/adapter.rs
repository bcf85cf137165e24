// ABOUTME: Landmark adapter that reduces a raw frame to the joints an exercise requires
// ABOUTME: Rejects absent, non-finite, or low-visibility joints with a MissingJointsError
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::collections::{BTreeMap, BTreeSet};

use formsense_core::errors::MissingJointsError;
use formsense_core::models::{Landmark, LandmarkFrame, LandmarkName, Point};

/// Set of joints an evaluator needs, in canonical landmark order
pub type JointSet = BTreeSet<LandmarkName>;

/// Visible joints extracted from one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Joints {
    landmarks: BTreeMap<LandmarkName, Landmark>,
}

impl Joints {
    /// Build from an explicit map, bypassing visibility filtering
    #[must_use]
    pub const fn from_map(landmarks: BTreeMap<LandmarkName, Landmark>) -> Self {
        Self { landmarks }
    }

    /// Look up a joint
    #[must_use]
    pub fn get(&self, name: LandmarkName) -> Option<&Landmark> {
        self.landmarks.get(&name)
    }

    /// Planar position of a joint
    #[must_use]
    pub fn point(&self, name: LandmarkName) -> Option<Point> {
        self.get(name).map(Landmark::position)
    }

    /// Whether the joint is present
    #[must_use]
    pub fn contains(&self, name: LandmarkName) -> bool {
        self.landmarks.contains_key(&name)
    }

    /// Number of joints present
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether no joints are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Iterate joints in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (&LandmarkName, &Landmark)> {
        self.landmarks.iter()
    }
}

/// Extract the `required` joints from `frame`
///
/// A joint is accepted when it is present, every field is finite and its
/// visibility is at least `visibility_threshold`. Joints outside `required`
/// are dropped.
///
/// # Errors
///
/// Returns `MissingJointsError` listing every required joint that was absent
/// (or non-finite) and every one below the visibility threshold.
pub fn extract_joints(
    frame: &LandmarkFrame,
    required: &JointSet,
    visibility_threshold: f64,
) -> Result<Joints, MissingJointsError> {
    let mut landmarks = BTreeMap::new();
    let mut absent = Vec::new();
    let mut low_visibility = Vec::new();

    for &name in required {
        match frame.get(name) {
            Some(landmark) if !landmark.is_finite() => absent.push(name),
            Some(landmark) if landmark.visibility < visibility_threshold => {
                low_visibility.push(name);
            }
            Some(landmark) => {
                landmarks.insert(name, *landmark);
            }
            None => absent.push(name),
        }
    }

    if absent.is_empty() && low_visibility.is_empty() {
        Ok(Joints { landmarks })
    } else {
        Err(MissingJointsError::new(absent, low_visibility))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn required_arm() -> JointSet {
        [
            LandmarkName::LeftShoulder,
            LandmarkName::LeftElbow,
            LandmarkName::LeftWrist,
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_filters_to_required_joints() {
        let frame = LandmarkFrame::new(Utc::now())
            .with_landmark(LandmarkName::LeftShoulder, Landmark::new(0.4, 0.3, 0.9))
            .with_landmark(LandmarkName::LeftElbow, Landmark::new(0.4, 0.5, 0.9))
            .with_landmark(LandmarkName::LeftWrist, Landmark::new(0.4, 0.7, 0.9))
            .with_landmark(LandmarkName::Nose, Landmark::new(0.5, 0.1, 0.9));

        let joints = extract_joints(&frame, &required_arm(), 0.5).unwrap();

        assert_eq!(joints.len(), 3);
        assert!(!joints.contains(LandmarkName::Nose));
    }

    #[test]
    fn test_reports_absent_and_low_visibility_separately() {
        let frame = LandmarkFrame::new(Utc::now())
            .with_landmark(LandmarkName::LeftShoulder, Landmark::new(0.4, 0.3, 0.9))
            .with_landmark(LandmarkName::LeftElbow, Landmark::new(0.4, 0.5, 0.2));

        let err = extract_joints(&frame, &required_arm(), 0.5).unwrap_err();

        assert_eq!(err.absent, vec![LandmarkName::LeftWrist]);
        assert_eq!(err.low_visibility, vec![LandmarkName::LeftElbow]);
    }

    #[test]
    fn test_visibility_at_threshold_is_accepted() {
        let frame = LandmarkFrame::new(Utc::now())
            .with_landmark(LandmarkName::LeftShoulder, Landmark::new(0.4, 0.3, 0.5))
            .with_landmark(LandmarkName::LeftElbow, Landmark::new(0.4, 0.5, 0.5))
            .with_landmark(LandmarkName::LeftWrist, Landmark::new(0.4, 0.7, 0.5));

        assert!(extract_joints(&frame, &required_arm(), 0.5).is_ok());
    }

    #[test]
    fn test_non_finite_coordinates_count_as_absent() {
        let frame = LandmarkFrame::new(Utc::now())
            .with_landmark(LandmarkName::LeftShoulder, Landmark::new(f64::NAN, 0.3, 0.9))
            .with_landmark(LandmarkName::LeftElbow, Landmark::new(0.4, 0.5, 0.9))
            .with_landmark(LandmarkName::LeftWrist, Landmark::new(0.4, 0.7, 0.9));

        let err = extract_joints(&frame, &required_arm(), 0.5).unwrap_err();
        assert_eq!(err.absent, vec![LandmarkName::LeftShoulder]);
    }

    #[test]
    fn test_nan_visibility_counts_as_absent() {
        let frame = LandmarkFrame::new(Utc::now())
            .with_landmark(LandmarkName::LeftShoulder, Landmark::new(0.4, 0.3, 0.9))
            .with_landmark(LandmarkName::LeftElbow, Landmark::new(0.4, 0.5, f64::NAN))
            .with_landmark(LandmarkName::LeftWrist, Landmark::new(0.4, 0.7, 0.9));

        let err = extract_joints(&frame, &required_arm(), 0.5).unwrap_err();
        assert_eq!(err.absent, vec![LandmarkName::LeftElbow]);
        assert!(err.low_visibility.is_empty());
    }
}
