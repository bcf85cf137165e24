// ABOUTME: Core data models for the FormSense scoring engine
// ABOUTME: Re-exports landmark, frame, exercise type, and repetition phase types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! # Data Models
//!
//! - `LandmarkName`: the 33 named joints of the MediaPipe Pose topology
//! - `Landmark`: one joint position plus its visibility confidence
//! - `LandmarkFrame`: a timestamped snapshot of landmarks for one video frame
//! - `ExerciseType`: the exercises the engine can evaluate
//! - `RepPhase`: the stage of a single repetition cycle
//!
//! Frames are produced by an external detector and only ever read by the
//! engine.

mod exercise;
mod landmark;

pub use exercise::{ExerciseType, RepPhase};
pub use landmark::{Landmark, LandmarkFrame, LandmarkName, Point, RawLandmark};
