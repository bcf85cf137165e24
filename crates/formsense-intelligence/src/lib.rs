// ABOUTME: Exercise-form intelligence: angles, landmark adapter, rep phases, scoring, evaluators
// ABOUTME: Pure and I/O-free; one evaluator instance owns all mutable state for one session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

#![deny(unsafe_code)]

//! # FormSense Intelligence
//!
//! Turns landmark frames into repetition counts, form scores and corrective
//! feedback.
//!
//! - **angles**: the joint-angle primitive every measure is built on
//! - **adapter**: filters a raw frame down to the joints an exercise needs
//! - **measures**: named quantities computed from joints (angles, spreads)
//! - **profiles**: declarative per-exercise tables (thresholds, ideal ranges, messages)
//! - **phase**: the rep-phase state machine with hysteresis
//! - **scoring**: form score and feedback evaluation
//! - **evaluator**: the `ExerciseEvaluator` trait and its profile-driven implementation
//! - **registry**: maps exercise types to evaluator factories
//! - **config**: engine configuration loaded from the environment

/// Joint-angle computation
pub mod angles;

/// Landmark adapter (frame to required joints)
pub mod adapter;

/// Named measures computed from joints
pub mod measures;

/// Declarative exercise profiles
pub mod profiles;

/// Rep-phase state machine
pub mod phase;

/// Form score and feedback evaluation
pub mod scoring;

/// Exercise evaluators
pub mod evaluator;

/// Evaluator registry
pub mod registry;

/// Engine configuration
pub mod config;

pub use adapter::{extract_joints, JointSet, Joints};
pub use angles::{joint_angle, AngleMeasurement};
pub use config::{ConfigError, EngineConfig};
pub use evaluator::{ExerciseEvaluator, FrameResult, ProfileEvaluator};
pub use phase::{PhaseTracker, PhaseUpdate};
pub use profiles::ExerciseProfile;
pub use registry::{EvaluatorFactory, EvaluatorRegistry};
