// ABOUTME: Configuration error types for engine and profile validation
// ABOUTME: Defines error variants for out-of-range values, parse failures, and inconsistent profiles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Configuration error types for engine and profile validation.

use formsense_core::models::ExerciseType;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),

    /// Failed to parse configuration value
    #[error("Parse error: {0}")]
    Parse(String),

    /// Exercise profile is internally inconsistent
    #[error("Invalid {exercise} profile: {reason}")]
    InvalidProfile {
        /// Exercise the profile belongs to
        exercise: ExerciseType,
        /// First problem found
        reason: String,
    },
}
