// ABOUTME: Exercise type enumeration and repetition phase state
// ABOUTME: Parses exercise names from client strings and labels phases per exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::FormError;

/// Exercises the engine knows how to name
///
/// Whether an exercise can actually be tracked depends on the evaluator
/// registry the session controller was built with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseType {
    /// Push-up, counted on elbow flexion
    PushUp,
    /// Bodyweight squat, counted on knee flexion
    Squat,
    /// Jumping jack, counted on arm abduction
    JumpingJack,
}

impl ExerciseType {
    /// All known exercises
    pub const ALL: [Self; 3] = [Self::PushUp, Self::Squat, Self::JumpingJack];

    /// Canonical snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PushUp => "push_up",
            Self::Squat => "squat",
            Self::JumpingJack => "jumping_jack",
        }
    }
}

impl fmt::Display for ExerciseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseType {
    type Err = FormError;

    /// Accepts the spellings used by web clients (`pushup`, `push-up`, ...)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "pushup" | "pushups" => Ok(Self::PushUp),
            "squat" | "squats" => Ok(Self::Squat),
            "jumpingjack" | "jumpingjacks" => Ok(Self::JumpingJack),
            _ => Err(FormError::unsupported_exercise(s)),
        }
    }
}

/// Stage of one repetition cycle
///
/// The shape is the same for every exercise: rest position, moving toward
/// the active position, active position, returning. Labels differ per
/// exercise (a jumping jack is "closed"/"open" rather than "up"/"down").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepPhase {
    /// Rest position (top of a push-up or squat, arms down for a jumping jack)
    #[default]
    Up,
    /// Moving from rest toward the active position
    Descending,
    /// Active position (bottom of the movement)
    Down,
    /// Returning from the active position toward rest
    Ascending,
}

impl RepPhase {
    /// Snake-case name, matching the serde representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Descending => "descending",
            Self::Down => "down",
            Self::Ascending => "ascending",
        }
    }
}

impl fmt::Display for RepPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
