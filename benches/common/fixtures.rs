// ABOUTME: Benchmark fixtures generating synthetic pose-landmark recordings
// ABOUTME: Provides deterministic frame sequences for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Benchmark fixtures generating synthetic pose-landmark recordings.

use std::f64::consts::TAU;

use chrono::{DateTime, TimeDelta, Utc};
use formsense::models::{Landmark, LandmarkFrame, LandmarkName};

/// Predefined recording lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum RecordingLength {
    /// One second of video at 30 fps
    Second,
    /// One minute of video at 30 fps
    Minute,
}

impl RecordingLength {
    #[must_use]
    pub const fn frames(self) -> usize {
        match self {
            Self::Second => 30,
            Self::Minute => 1800,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Second => "1s",
            Self::Minute => "60s",
        }
    }
}

/// Elbow angle following a smooth push-up cycle every 60 frames
#[must_use]
pub fn push_up_elbow_angle(index: usize) -> f64 {
    let phase = (index % 60) as f64 / 60.0 * TAU;
    // Oscillates between 75° and 175°
    125.0 + 50.0 * phase.cos()
}

/// Full 33-landmark frame for a plank with the given elbow angle
#[must_use]
pub fn push_up_frame(timestamp: DateTime<Utc>, elbow_degrees: f64) -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(timestamp);
    for name in LandmarkName::ALL {
        frame.insert(name, Landmark::new(0.5, 0.5, 0.2));
    }

    let theta = (elbow_degrees - 90.0).to_radians();
    let visible = |x: f64, y: f64| Landmark::new(x, y, 0.95);
    for (shoulder, elbow, wrist, hip, ankle) in [
        (
            LandmarkName::LeftShoulder,
            LandmarkName::LeftElbow,
            LandmarkName::LeftWrist,
            LandmarkName::LeftHip,
            LandmarkName::LeftAnkle,
        ),
        (
            LandmarkName::RightShoulder,
            LandmarkName::RightElbow,
            LandmarkName::RightWrist,
            LandmarkName::RightHip,
            LandmarkName::RightAnkle,
        ),
    ] {
        frame.insert(shoulder, visible(0.3, 0.4));
        frame.insert(elbow, visible(0.3, 0.6));
        frame.insert(
            wrist,
            visible(0.3 + 0.2 * theta.cos(), 0.6 + 0.2 * theta.sin()),
        );
        frame.insert(hip, visible(0.55, 0.4));
        frame.insert(ankle, visible(0.8, 0.4));
    }
    frame
}

/// Deterministic push-up recording
#[must_use]
pub fn push_up_recording(length: RecordingLength) -> Vec<LandmarkFrame> {
    let start = DateTime::<Utc>::UNIX_EPOCH;
    (0..length.frames())
        .map(|i| {
            let timestamp = start + TimeDelta::milliseconds(i as i64 * 33);
            push_up_frame(timestamp, push_up_elbow_angle(i))
        })
        .collect()
}
