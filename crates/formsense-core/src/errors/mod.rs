// ABOUTME: Unified error handling for the FormSense engine with stable error codes
// ABOUTME: Defines FormError, session-state misuse reasons, and the missing-joint error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! # Error Types
//!
//! Every failure in the engine is a value returned to the caller:
//! - `MissingJointsError` - recoverable, frame-local
//! - `FormError::InvalidSessionState` - caller misuse of a session handle
//! - `FormError::UnsupportedExercise` - no evaluator registered for the exercise

mod joints;

pub use joints::MissingJointsError;

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Stable error codes for engine failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Input (3000-3999)
    #[serde(rename = "MISSING_JOINTS")]
    /// A frame lacked required joints
    MissingJoints = 3100,
    #[serde(rename = "UNSUPPORTED_EXERCISE")]
    /// No evaluator is registered for the exercise
    UnsupportedExercise = 3200,

    // Session lifecycle (4000-4999)
    #[serde(rename = "INVALID_SESSION_STATE")]
    /// Session handle is unknown or already ended
    InvalidSessionState = 4100,
}

impl ErrorCode {
    /// User-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::MissingJoints => "Required joints were not detected in the frame",
            Self::UnsupportedExercise => "The exercise type is not supported",
            Self::InvalidSessionState => "The session is not active",
        }
    }

    /// Whether the caller can simply continue with the next frame
    #[must_use]
    pub const fn is_recoverable(self) -> bool {
        matches!(self, Self::MissingJoints)
    }
}

/// Why a session handle was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStateIssue {
    /// The session was ended before this call
    Ended,
    /// The handle was never issued by this controller
    Unknown,
}

impl fmt::Display for SessionStateIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ended => f.write_str("already ended"),
            Self::Unknown => f.write_str("not a known session"),
        }
    }
}

/// Unified error type for engine operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A frame could not be evaluated
    #[error(transparent)]
    MissingJoints(#[from] MissingJointsError),

    /// Frame or end request for a session that is not active
    #[error("Session {session_id} is {reason}")]
    InvalidSessionState {
        /// Handle the caller supplied
        session_id: Uuid,
        /// Why it was rejected
        reason: SessionStateIssue,
    },

    /// Session requested for an exercise without an evaluator
    #[error("Unsupported exercise: {exercise}")]
    UnsupportedExercise {
        /// Exercise name as requested
        exercise: String,
    },
}

impl FormError {
    /// Create an "unsupported exercise" error
    #[must_use]
    pub fn unsupported_exercise(exercise: impl Into<String>) -> Self {
        Self::UnsupportedExercise {
            exercise: exercise.into(),
        }
    }

    /// Create an error for a session that has already ended
    #[must_use]
    pub const fn session_ended(session_id: Uuid) -> Self {
        Self::InvalidSessionState {
            session_id,
            reason: SessionStateIssue::Ended,
        }
    }

    /// Create an error for a handle this controller never issued
    #[must_use]
    pub const fn unknown_session(session_id: Uuid) -> Self {
        Self::InvalidSessionState {
            session_id,
            reason: SessionStateIssue::Unknown,
        }
    }

    /// Stable code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::MissingJoints(_) => ErrorCode::MissingJoints,
            Self::InvalidSessionState { .. } => ErrorCode::InvalidSessionState,
            Self::UnsupportedExercise { .. } => ErrorCode::UnsupportedExercise,
        }
    }
}

/// Result alias for engine operations
pub type FormResult<T> = Result<T, FormError>;
