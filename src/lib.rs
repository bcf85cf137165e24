// ABOUTME: Main library entry point for the FormSense exercise-form scoring engine
// ABOUTME: Provides session control on top of the core models and intelligence crates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

#![deny(unsafe_code)]

//! # FormSense
//!
//! Real-time exercise form scoring from pose landmarks. An external detector
//! supplies one landmark frame per video frame; FormSense counts repetitions,
//! scores form, and produces corrective feedback.
//!
//! ## Architecture
//!
//! - **`formsense-core`**: landmark and exercise models, errors, constants
//! - **`formsense-intelligence`**: angle math, landmark adapter, exercise
//!   profiles, the rep-phase state machine, and evaluators
//! - **session** (this crate): per-workout state and the handle-based
//!   session controller
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Utc;
//! use formsense::models::{ExerciseType, LandmarkFrame};
//! use formsense::session::SessionRegistry;
//!
//! let mut sessions = SessionRegistry::default();
//! let handle = sessions.start_session(ExerciseType::PushUp)?;
//! let snapshot = sessions.submit_frame(handle, &LandmarkFrame::new(Utc::now()))?;
//! println!("reps: {}", snapshot.rep_count);
//! let summary = sessions.end_session(handle)?;
//! println!("average: {:?}", summary.average_score);
//! # Ok::<(), formsense::errors::FormError>(())
//! ```

/// Application configuration
pub mod config;

/// Logging configuration and session log helpers
pub mod logging;

/// Sessions and the session controller
pub mod session;

pub use formsense_core::{constants, errors, models};
pub use formsense_intelligence as intelligence;
