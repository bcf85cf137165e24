// ABOUTME: Landmark, frame, and joint-name models for pose detector output
// ABOUTME: Maps MediaPipe Pose indices to named joints and builds frames from raw detector arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::landmarks::{LANDMARK_COUNT, UNREPORTED_VISIBILITY};

/// Named body joint in the MediaPipe Pose topology
///
/// Variants are declared in detector index order, so the derived `Ord`
/// matches the index order and `BTreeMap`/`BTreeSet` iteration is canonical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LandmarkName {
    /// Index 0
    Nose,
    /// Index 1
    LeftEyeInner,
    /// Index 2
    LeftEye,
    /// Index 3
    LeftEyeOuter,
    /// Index 4
    RightEyeInner,
    /// Index 5
    RightEye,
    /// Index 6
    RightEyeOuter,
    /// Index 7
    LeftEar,
    /// Index 8
    RightEar,
    /// Index 9
    MouthLeft,
    /// Index 10
    MouthRight,
    /// Index 11
    LeftShoulder,
    /// Index 12
    RightShoulder,
    /// Index 13
    LeftElbow,
    /// Index 14
    RightElbow,
    /// Index 15
    LeftWrist,
    /// Index 16
    RightWrist,
    /// Index 17
    LeftPinky,
    /// Index 18
    RightPinky,
    /// Index 19
    LeftIndex,
    /// Index 20
    RightIndex,
    /// Index 21
    LeftThumb,
    /// Index 22
    RightThumb,
    /// Index 23
    LeftHip,
    /// Index 24
    RightHip,
    /// Index 25
    LeftKnee,
    /// Index 26
    RightKnee,
    /// Index 27
    LeftAnkle,
    /// Index 28
    RightAnkle,
    /// Index 29
    LeftHeel,
    /// Index 30
    RightHeel,
    /// Index 31
    LeftFootIndex,
    /// Index 32
    RightFootIndex,
}

impl LandmarkName {
    /// All landmarks in detector index order
    pub const ALL: [Self; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftEyeInner,
        Self::LeftEye,
        Self::LeftEyeOuter,
        Self::RightEyeInner,
        Self::RightEye,
        Self::RightEyeOuter,
        Self::LeftEar,
        Self::RightEar,
        Self::MouthLeft,
        Self::MouthRight,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftPinky,
        Self::RightPinky,
        Self::LeftIndex,
        Self::RightIndex,
        Self::LeftThumb,
        Self::RightThumb,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
        Self::LeftHeel,
        Self::RightHeel,
        Self::LeftFootIndex,
        Self::RightFootIndex,
    ];

    /// Detector index of this landmark
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a landmark by detector index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Snake-case name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftEyeInner => "left_eye_inner",
            Self::LeftEye => "left_eye",
            Self::LeftEyeOuter => "left_eye_outer",
            Self::RightEyeInner => "right_eye_inner",
            Self::RightEye => "right_eye",
            Self::RightEyeOuter => "right_eye_outer",
            Self::LeftEar => "left_ear",
            Self::RightEar => "right_ear",
            Self::MouthLeft => "mouth_left",
            Self::MouthRight => "mouth_right",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftPinky => "left_pinky",
            Self::RightPinky => "right_pinky",
            Self::LeftIndex => "left_index",
            Self::RightIndex => "right_index",
            Self::LeftThumb => "left_thumb",
            Self::RightThumb => "right_thumb",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
            Self::LeftHeel => "left_heel",
            Self::RightHeel => "right_heel",
            Self::LeftFootIndex => "left_foot_index",
            Self::RightFootIndex => "right_foot_index",
        }
    }
}

impl fmt::Display for LandmarkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 2-D position in normalized frame coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate (0 = left edge, 1 = right edge)
    pub x: f64,
    /// Vertical coordinate (0 = top edge, 1 = bottom edge)
    pub y: f64,
}

impl Point {
    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A single detected joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized horizontal coordinate
    pub x: f64,
    /// Normalized vertical coordinate
    pub y: f64,
    /// Relative depth, when the detector provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    /// Detection confidence in [0, 1]
    pub visibility: f64,
}

impl Landmark {
    /// Create a 2-D landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self {
            x,
            y,
            z: None,
            visibility,
        }
    }

    /// Attach a depth coordinate
    #[must_use]
    pub const fn with_z(mut self, z: f64) -> Self {
        self.z = Some(z);
        self
    }

    /// Planar position of the landmark
    #[must_use]
    pub const fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether the planar coordinates and visibility are finite numbers
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.visibility.is_finite()
    }
}

/// Landmark as sent by a browser-side detector: `{x, y, z, visibility}`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawLandmark {
    /// Normalized horizontal coordinate
    pub x: f64,
    /// Normalized vertical coordinate
    pub y: f64,
    /// Relative depth
    #[serde(default)]
    pub z: Option<f64>,
    /// Detection confidence, absent for detectors that do not report one
    #[serde(default)]
    pub visibility: Option<f64>,
}

impl From<RawLandmark> for Landmark {
    fn from(raw: RawLandmark) -> Self {
        Self {
            x: raw.x,
            y: raw.y,
            z: raw.z,
            visibility: raw.visibility.unwrap_or(UNREPORTED_VISIBILITY),
        }
    }
}

/// Timestamped landmark snapshot for one video frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandmarkFrame {
    /// Capture time of the video frame
    pub timestamp: DateTime<Utc>,
    /// Detected landmarks keyed by joint name
    pub landmarks: BTreeMap<LandmarkName, Landmark>,
}

impl LandmarkFrame {
    /// Create an empty frame
    #[must_use]
    pub const fn new(timestamp: DateTime<Utc>) -> Self {
        Self {
            timestamp,
            landmarks: BTreeMap::new(),
        }
    }

    /// Build a frame from a detector's index-ordered landmark array
    ///
    /// Entries past the 33rd index are ignored; a short array simply yields
    /// a frame with fewer landmarks.
    #[must_use]
    pub fn from_indexed(timestamp: DateTime<Utc>, raw: &[RawLandmark]) -> Self {
        let landmarks = raw
            .iter()
            .enumerate()
            .filter_map(|(index, landmark)| {
                LandmarkName::from_index(index).map(|name| (name, Landmark::from(*landmark)))
            })
            .collect();
        Self {
            timestamp,
            landmarks,
        }
    }

    /// Builder-style insertion
    #[must_use]
    pub fn with_landmark(mut self, name: LandmarkName, landmark: Landmark) -> Self {
        self.landmarks.insert(name, landmark);
        self
    }

    /// Insert or replace a landmark
    pub fn insert(&mut self, name: LandmarkName, landmark: Landmark) {
        self.landmarks.insert(name, landmark);
    }

    /// Look up a landmark
    #[must_use]
    pub fn get(&self, name: LandmarkName) -> Option<&Landmark> {
        self.landmarks.get(&name)
    }

    /// Number of landmarks present
    #[must_use]
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    /// Whether the frame carries no landmarks at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_detector_layout() {
        assert_eq!(LandmarkName::LeftShoulder.index(), 11);
        assert_eq!(LandmarkName::RightHip.index(), 24);
        assert_eq!(LandmarkName::from_index(27), Some(LandmarkName::LeftAnkle));
        assert_eq!(LandmarkName::from_index(33), None);
    }

    #[test]
    fn test_from_indexed_defaults_missing_visibility() {
        let raw = vec![
            RawLandmark {
                x: 0.5,
                y: 0.1,
                z: None,
                visibility: None,
            };
            40
        ];
        let frame = LandmarkFrame::from_indexed(Utc::now(), &raw);

        assert_eq!(frame.len(), LANDMARK_COUNT);
        let nose = frame.get(LandmarkName::Nose).unwrap();
        assert!((nose.visibility - UNREPORTED_VISIBILITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_raw_landmark_parses_detector_json() {
        let json = r#"{"x": 0.4, "y": 0.6, "z": -0.1, "visibility": 0.93}"#;
        let raw: RawLandmark = serde_json::from_str(json).unwrap();
        let landmark = Landmark::from(raw);

        assert_eq!(landmark.z, Some(-0.1));
        assert!((landmark.visibility - 0.93).abs() < f64::EPSILON);
    }
}
