// ABOUTME: Named body measures computed from extracted joints
// ABOUTME: Bilateral joint angles and width-to-height spread ratios used by exercise profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::models::LandmarkName;
use serde::{Deserialize, Serialize};

use crate::adapter::Joints;
use crate::angles::AngleMeasurement;

/// Body heights below this are treated as a degenerate frame
const MIN_BODY_HEIGHT: f64 = 1e-6;

/// Side-agnostic joint kind, resolved to a left/right landmark pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Shoulder
    Shoulder,
    /// Elbow
    Elbow,
    /// Wrist
    Wrist,
    /// Hip
    Hip,
    /// Knee
    Knee,
    /// Ankle
    Ankle,
}

impl Joint {
    /// Left-side landmark
    #[must_use]
    pub const fn left(self) -> LandmarkName {
        match self {
            Self::Shoulder => LandmarkName::LeftShoulder,
            Self::Elbow => LandmarkName::LeftElbow,
            Self::Wrist => LandmarkName::LeftWrist,
            Self::Hip => LandmarkName::LeftHip,
            Self::Knee => LandmarkName::LeftKnee,
            Self::Ankle => LandmarkName::LeftAnkle,
        }
    }

    /// Right-side landmark
    #[must_use]
    pub const fn right(self) -> LandmarkName {
        match self {
            Self::Shoulder => LandmarkName::RightShoulder,
            Self::Elbow => LandmarkName::RightElbow,
            Self::Wrist => LandmarkName::RightWrist,
            Self::Hip => LandmarkName::RightHip,
            Self::Knee => LandmarkName::RightKnee,
            Self::Ankle => LandmarkName::RightAnkle,
        }
    }
}

/// Quantity derived from one frame's joints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Measure {
    /// Angle at `vertex`, averaged over the left and right sides
    BilateralAngle {
        /// Joint on the first ray
        proximal: Joint,
        /// Joint the angle is measured at
        vertex: Joint,
        /// Joint on the second ray
        distal: Joint,
    },
    /// Horizontal distance between the left and right `joint`, divided by
    /// body height (nose to mean ankle height)
    ///
    /// Evaluates to 0 when the body height is degenerate.
    SpreadRatio {
        /// Joint pair whose spread is measured
        joint: Joint,
    },
}

impl Measure {
    /// Landmarks this measure reads
    #[must_use]
    pub fn landmarks(&self) -> Vec<LandmarkName> {
        match *self {
            Self::BilateralAngle {
                proximal,
                vertex,
                distal,
            } => vec![
                proximal.left(),
                vertex.left(),
                distal.left(),
                proximal.right(),
                vertex.right(),
                distal.right(),
            ],
            Self::SpreadRatio { joint } => vec![
                joint.left(),
                joint.right(),
                LandmarkName::Nose,
                LandmarkName::LeftAnkle,
                LandmarkName::RightAnkle,
            ],
        }
    }

    /// Evaluate against a frame's joints
    ///
    /// Returns `None` when a landmark the measure reads is missing.
    #[must_use]
    pub fn evaluate(&self, joints: &Joints) -> Option<f64> {
        match *self {
            Self::BilateralAngle {
                proximal,
                vertex,
                distal,
            } => {
                let left = AngleMeasurement::between(
                    joints,
                    proximal.left(),
                    vertex.left(),
                    distal.left(),
                )?;
                let right = AngleMeasurement::between(
                    joints,
                    proximal.right(),
                    vertex.right(),
                    distal.right(),
                )?;
                Some((left.degrees + right.degrees) / 2.0)
            }
            Self::SpreadRatio { joint } => {
                let left = joints.point(joint.left())?;
                let right = joints.point(joint.right())?;
                let nose = joints.point(LandmarkName::Nose)?;
                let left_ankle = joints.point(LandmarkName::LeftAnkle)?;
                let right_ankle = joints.point(LandmarkName::RightAnkle)?;

                let body_height = (nose.y - (left_ankle.y + right_ankle.y) / 2.0).abs();
                if body_height < MIN_BODY_HEIGHT {
                    return Some(0.0);
                }
                Some((right.x - left.x).abs() / body_height)
            }
        }
    }
}

/// Measure with the name profiles refer to it by
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureSpec {
    /// Identifier used by score terms, feedback rules and readouts
    pub name: String,
    /// What to compute
    pub measure: Measure,
}

impl MeasureSpec {
    /// Create a named measure
    #[must_use]
    pub fn new(name: impl Into<String>, measure: Measure) -> Self {
        Self {
            name: name.into(),
            measure,
        }
    }
}

/// One named measure value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Measure name
    pub name: String,
    /// Measured value (degrees for angles, a ratio for spreads)
    pub value: f64,
}

/// All measure values for one frame, in profile order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeasureReadings(Vec<Reading>);

impl MeasureReadings {
    /// Evaluate every spec against `joints`
    ///
    /// # Errors
    ///
    /// Returns the landmarks that prevented evaluation, in canonical order.
    pub fn evaluate(specs: &[MeasureSpec], joints: &Joints) -> Result<Self, Vec<LandmarkName>> {
        let mut readings = Vec::with_capacity(specs.len());
        let mut missing: Vec<LandmarkName> = Vec::new();

        for spec in specs {
            if let Some(value) = spec.measure.evaluate(joints) {
                readings.push(Reading {
                    name: spec.name.clone(),
                    value,
                });
            } else {
                missing.extend(
                    spec.measure
                        .landmarks()
                        .into_iter()
                        .filter(|name| !joints.contains(*name)),
                );
            }
        }

        if missing.is_empty() {
            Ok(Self(readings))
        } else {
            missing.sort();
            missing.dedup();
            Err(missing)
        }
    }

    /// Value of a named measure
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|reading| reading.name == name)
            .map(|reading| reading.value)
    }

    /// Iterate readings in profile order
    pub fn iter(&self) -> impl Iterator<Item = &Reading> {
        self.0.iter()
    }

    /// Whether no readings are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsense_core::models::Landmark;
    use std::collections::BTreeMap;

    fn joints(points: &[(LandmarkName, f64, f64)]) -> Joints {
        let map: BTreeMap<_, _> = points
            .iter()
            .map(|&(name, x, y)| (name, Landmark::new(x, y, 1.0)))
            .collect();
        Joints::from_map(map)
    }

    #[test]
    fn test_bilateral_angle_averages_sides() {
        let elbow = Measure::BilateralAngle {
            proximal: Joint::Shoulder,
            vertex: Joint::Elbow,
            distal: Joint::Wrist,
        };
        // Left arm straight (180°), right arm bent at 90°
        let joints = joints(&[
            (LandmarkName::LeftShoulder, 0.2, 0.3),
            (LandmarkName::LeftElbow, 0.2, 0.5),
            (LandmarkName::LeftWrist, 0.2, 0.7),
            (LandmarkName::RightShoulder, 0.8, 0.3),
            (LandmarkName::RightElbow, 0.8, 0.5),
            (LandmarkName::RightWrist, 1.0, 0.5),
        ]);

        let value = elbow.evaluate(&joints).unwrap();
        assert!((value - 135.0).abs() < 1e-6, "got {value}");
    }

    #[test]
    fn test_spread_ratio_normalizes_by_body_height() {
        let spread = Measure::SpreadRatio {
            joint: Joint::Ankle,
        };
        let joints = joints(&[
            (LandmarkName::Nose, 0.5, 0.1),
            (LandmarkName::LeftAnkle, 0.3, 0.9),
            (LandmarkName::RightAnkle, 0.7, 0.9),
        ]);

        let value = spread.evaluate(&joints).unwrap();
        assert!((value - 0.5).abs() < 1e-9, "got {value}");
    }

    #[test]
    fn test_spread_ratio_degenerate_height_is_zero() {
        let spread = Measure::SpreadRatio {
            joint: Joint::Ankle,
        };
        let joints = joints(&[
            (LandmarkName::Nose, 0.5, 0.9),
            (LandmarkName::LeftAnkle, 0.3, 0.9),
            (LandmarkName::RightAnkle, 0.7, 0.9),
        ]);

        assert_eq!(spread.evaluate(&joints), Some(0.0));
    }

    #[test]
    fn test_readings_report_missing_landmarks() {
        let specs = vec![MeasureSpec::new(
            "leg_spread",
            Measure::SpreadRatio {
                joint: Joint::Ankle,
            },
        )];
        let joints = joints(&[(LandmarkName::LeftAnkle, 0.3, 0.9)]);

        let missing = MeasureReadings::evaluate(&specs, &joints).unwrap_err();
        assert_eq!(missing, vec![LandmarkName::Nose, LandmarkName::RightAnkle]);
    }
}
