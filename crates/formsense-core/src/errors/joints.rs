// ABOUTME: Missing-joint error raised when a frame lacks the joints an exercise needs
// ABOUTME: Frame-local and recoverable; evaluators skip the frame without touching phase state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::LandmarkName;

/// Required joints were absent or not visible enough in a frame
///
/// Both lists are in canonical landmark order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MissingJointsError {
    /// Joints the detector did not report at all (or reported as non-finite)
    pub absent: Vec<LandmarkName>,
    /// Joints reported below the visibility threshold
    pub low_visibility: Vec<LandmarkName>,
}

impl MissingJointsError {
    /// Create an error from the two offending joint lists
    #[must_use]
    pub const fn new(absent: Vec<LandmarkName>, low_visibility: Vec<LandmarkName>) -> Self {
        Self {
            absent,
            low_visibility,
        }
    }

    /// Every offending joint, absent ones first
    #[must_use]
    pub fn joints(&self) -> Vec<LandmarkName> {
        self.absent
            .iter()
            .chain(&self.low_visibility)
            .copied()
            .collect()
    }

    /// Whether no joint is reported (an empty error is never returned by the adapter)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.absent.is_empty() && self.low_visibility.is_empty()
    }
}

fn write_joint_list(f: &mut fmt::Formatter<'_>, joints: &[LandmarkName]) -> fmt::Result {
    for (i, joint) in joints.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{joint}")?;
    }
    Ok(())
}

impl fmt::Display for MissingJointsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Missing required joints")?;
        if !self.absent.is_empty() {
            f.write_str("; absent: ")?;
            write_joint_list(f, &self.absent)?;
        }
        if !self.low_visibility.is_empty() {
            f.write_str("; below visibility threshold: ")?;
            write_joint_list(f, &self.low_visibility)?;
        }
        Ok(())
    }
}

impl Error for MissingJointsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_both_groups() {
        let err = MissingJointsError::new(
            vec![LandmarkName::LeftWrist],
            vec![LandmarkName::LeftKnee, LandmarkName::RightKnee],
        );
        assert_eq!(
            err.to_string(),
            "Missing required joints; absent: left_wrist; below visibility threshold: left_knee, right_knee"
        );
        assert_eq!(err.joints().len(), 3);
    }
}
