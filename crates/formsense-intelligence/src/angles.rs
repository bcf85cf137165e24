// ABOUTME: Joint angle calculation from three landmark positions
// ABOUTME: Angle at a vertex between two reference points, folded into [0, 180] degrees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use formsense_core::models::{LandmarkName, Point};
use serde::{Deserialize, Serialize};

use crate::adapter::Joints;

/// Angle in degrees at vertex `b`, between rays `b→a` and `b→c`
///
/// Formula: `|atan2(c.y − b.y, c.x − b.x) − atan2(a.y − b.y, a.x − b.x)|`,
/// converted to degrees and reflected to `360 − angle` when it exceeds 180.
///
/// - 180° = the three points are collinear (straight limb)
/// - 90° = right angle at the vertex
#[must_use]
pub fn joint_angle(a: Point, b: Point, c: Point) -> f64 {
    let radians = (c.y - b.y).atan2(c.x - b.x) - (a.y - b.y).atan2(a.x - b.x);
    let angle = radians.to_degrees().abs();
    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}

/// Angle measured at a named joint
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleMeasurement {
    /// Joint the angle is measured at
    pub vertex: LandmarkName,
    /// Angle in degrees, in [0, 180]
    pub degrees: f64,
}

impl AngleMeasurement {
    /// Measure the angle at `vertex` between `first` and `second`
    ///
    /// Returns `None` when any of the three joints is missing from `joints`.
    #[must_use]
    pub fn between(
        joints: &Joints,
        first: LandmarkName,
        vertex: LandmarkName,
        second: LandmarkName,
    ) -> Option<Self> {
        let a = joints.point(first)?;
        let b = joints.point(vertex)?;
        let c = joints.point(second)?;
        Some(Self {
            vertex,
            degrees: joint_angle(a, b, c),
        })
    }
}
