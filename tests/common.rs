// ABOUTME: Shared test utilities and synthetic pose builders for integration tests
// ABOUTME: Builds landmark frames with exact joint angles for push-ups, squats, and jumping jacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `formsense`
//!
//! Poses are built from plain geometry so each frame has a known angle at
//! the joint that drives the exercise. Image coordinates grow downward.

use std::env;
use std::sync::Once;

use chrono::{DateTime, TimeDelta, Utc};
use formsense::models::{Landmark, LandmarkFrame, LandmarkName};

static INIT_LOGGER: Once = Once::new();

/// Visibility given to every synthetic landmark
pub const VISIBLE: f64 = 0.99;

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Timestamp of the `index`-th frame of a 30 fps recording
pub fn frame_time(index: i64) -> DateTime<Utc> {
    let start = DateTime::from_timestamp(1_735_689_600, 0).unwrap();
    start + TimeDelta::milliseconds(index * 33)
}

/// Point `length` away from `origin` in direction `degrees`
fn offset(origin: (f64, f64), degrees: f64, length: f64) -> (f64, f64) {
    let radians = degrees.to_radians();
    (
        origin.0 + length * radians.cos(),
        origin.1 + length * radians.sin(),
    )
}

fn put(frame: &mut LandmarkFrame, name: LandmarkName, point: (f64, f64)) {
    frame.insert(name, Landmark::new(point.0, point.1, VISIBLE));
}

/// Frame with no landmarks at all (subject out of view)
pub fn empty_frame(index: i64) -> LandmarkFrame {
    LandmarkFrame::new(frame_time(index))
}

/// Side-view plank with both elbows at `elbow_degrees` and a straight body
pub fn push_up_frame(index: i64, elbow_degrees: f64) -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(frame_time(index));
    put(&mut frame, LandmarkName::Nose, (0.2, 0.4));
    for (shoulder, elbow, wrist, hip, knee, ankle) in [
        (
            LandmarkName::LeftShoulder,
            LandmarkName::LeftElbow,
            LandmarkName::LeftWrist,
            LandmarkName::LeftHip,
            LandmarkName::LeftKnee,
            LandmarkName::LeftAnkle,
        ),
        (
            LandmarkName::RightShoulder,
            LandmarkName::RightElbow,
            LandmarkName::RightWrist,
            LandmarkName::RightHip,
            LandmarkName::RightKnee,
            LandmarkName::RightAnkle,
        ),
    ] {
        let elbow_at = (0.3, 0.6);
        put(&mut frame, shoulder, (0.3, 0.4));
        put(&mut frame, elbow, elbow_at);
        put(&mut frame, wrist, offset(elbow_at, elbow_degrees - 90.0, 0.2));
        put(&mut frame, hip, (0.55, 0.4));
        put(&mut frame, knee, (0.68, 0.4));
        put(&mut frame, ankle, (0.8, 0.4));
    }
    frame
}

/// Side-view squat with both knees at `knee_degrees` and an upright back
pub fn squat_frame(index: i64, knee_degrees: f64) -> LandmarkFrame {
    squat_frame_with_torso(index, knee_degrees, knee_degrees)
}

/// Side-view squat with explicit knee and torso (shoulder-hip-knee) angles
pub fn squat_frame_with_torso(index: i64, knee_degrees: f64, torso_degrees: f64) -> LandmarkFrame {
    let knee_at = (0.5, 0.6);
    let ankle_at = (0.5, 0.8);
    let hip_at = offset(knee_at, 90.0 + knee_degrees, 0.2);
    // Direction from hip to knee, then rotated back toward vertical
    let thigh = knee_degrees - 90.0;
    let shoulder_at = offset(hip_at, thigh - torso_degrees, 0.25);

    let mut frame = LandmarkFrame::new(frame_time(index));
    put(&mut frame, LandmarkName::Nose, (shoulder_at.0, shoulder_at.1 - 0.1));
    for (shoulder, hip, knee, ankle) in [
        (
            LandmarkName::LeftShoulder,
            LandmarkName::LeftHip,
            LandmarkName::LeftKnee,
            LandmarkName::LeftAnkle,
        ),
        (
            LandmarkName::RightShoulder,
            LandmarkName::RightHip,
            LandmarkName::RightKnee,
            LandmarkName::RightAnkle,
        ),
    ] {
        put(&mut frame, shoulder, shoulder_at);
        put(&mut frame, hip, hip_at);
        put(&mut frame, knee, knee_at);
        put(&mut frame, ankle, ankle_at);
    }
    frame
}

/// Front-view jumping jack
///
/// `arm_degrees` is the hip-shoulder-wrist angle on both sides;
/// `leg_spread` is the ankle distance as a fraction of body height.
pub fn jumping_jack_frame(index: i64, arm_degrees: f64, leg_spread: f64) -> LandmarkFrame {
    let mut frame = LandmarkFrame::new(frame_time(index));
    let nose_y = 0.1;
    let ankle_y = 0.9;
    let half_spread = leg_spread * (ankle_y - nose_y) / 2.0;

    put(&mut frame, LandmarkName::Nose, (0.5, nose_y));
    for (shoulder, wrist, hip, ankle, x, outward) in [
        (
            LandmarkName::LeftShoulder,
            LandmarkName::LeftWrist,
            LandmarkName::LeftHip,
            LandmarkName::LeftAnkle,
            0.4,
            1.0,
        ),
        (
            LandmarkName::RightShoulder,
            LandmarkName::RightWrist,
            LandmarkName::RightHip,
            LandmarkName::RightAnkle,
            0.6,
            -1.0,
        ),
    ] {
        let shoulder_at = (x, 0.3);
        put(&mut frame, shoulder, shoulder_at);
        put(&mut frame, hip, (x, 0.55));
        put(
            &mut frame,
            wrist,
            offset(shoulder_at, 90.0 + outward * arm_degrees, 0.25),
        );
        put(&mut frame, ankle, (0.5 - outward * half_spread, ankle_y));
    }
    frame
}

/// Copy of `frame` with one landmark's visibility replaced
pub fn with_visibility(mut frame: LandmarkFrame, name: LandmarkName, visibility: f64) -> LandmarkFrame {
    if let Some(landmark) = frame.landmarks.get_mut(&name) {
        landmark.visibility = visibility;
    }
    frame
}
