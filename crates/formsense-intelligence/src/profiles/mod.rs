// ABOUTME: Declarative exercise profiles: measures, phase thresholds, ideal ranges, and messages
// ABOUTME: Adding an exercise means adding one profile table, not new control flow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Exercise Profiles
//!
//! A profile describes everything exercise-specific:
//! - which measures to compute and which one drives the rep phase
//! - the two phase thresholds and the direction of the movement
//! - ideal ranges that feed the form score
//! - corrective feedback rules and per-phase coaching cues
//!
//! Profiles are plain data and (de)serialize with `serde`, so a caller can
//! replace the built-in table with one loaded from JSON.

mod jumping_jack;
mod push_up;
mod squat;

pub use jumping_jack::{ARM_ABDUCTION, LEG_SPREAD};
pub use push_up::{BODY_LINE, ELBOW_ANGLE};
pub use squat::{KNEE_ANGLE, TORSO_ANGLE};

use formsense_core::models::{ExerciseType, RepPhase};
use serde::{Deserialize, Serialize};

use crate::adapter::JointSet;
use crate::config::ConfigError;
use crate::measures::{Measure, MeasureSpec};

/// Direction in which the primary measure moves to reach the active phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Active phase is below the thresholds (joint flexion: push-up, squat)
    Below,
    /// Active phase is above the thresholds (abduction: jumping jack)
    Above,
}

/// Hysteresis thresholds on the primary measure
///
/// The gap between `active` and `rest` keeps jitter around either value from
/// toggling the phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseThresholds {
    /// Direction of the movement
    pub trigger: Trigger,
    /// Crossing this enters the active (down) phase
    pub active: f64,
    /// Crossing this back returns to rest and completes a rep
    pub rest: f64,
}

impl PhaseThresholds {
    /// Thresholds for a measure that falls into the active phase
    #[must_use]
    pub const fn below(active: f64, rest: f64) -> Self {
        Self {
            trigger: Trigger::Below,
            active,
            rest,
        }
    }

    /// Thresholds for a measure that rises into the active phase
    #[must_use]
    pub const fn above(active: f64, rest: f64) -> Self {
        Self {
            trigger: Trigger::Above,
            active,
            rest,
        }
    }

    /// Whether `value` is past the active threshold
    #[must_use]
    pub fn reached_active(&self, value: f64) -> bool {
        match self.trigger {
            Trigger::Below => value < self.active,
            Trigger::Above => value > self.active,
        }
    }

    /// Whether `value` is past the rest threshold
    #[must_use]
    pub fn reached_rest(&self, value: f64) -> bool {
        match self.trigger {
            Trigger::Below => value > self.rest,
            Trigger::Above => value < self.rest,
        }
    }

    /// Whether a change of `delta` moves toward the active phase
    #[must_use]
    pub fn toward_active(&self, delta: f64) -> bool {
        match self.trigger {
            Trigger::Below => delta < 0.0,
            Trigger::Above => delta > 0.0,
        }
    }

    /// Whether the thresholds leave a hysteresis band between them
    #[must_use]
    pub fn has_hysteresis(&self) -> bool {
        match self.trigger {
            Trigger::Below => self.active < self.rest,
            Trigger::Above => self.active > self.rest,
        }
    }
}

/// Phases in which a score term or feedback rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseScope {
    /// Every frame
    #[default]
    Any,
    /// Only while holding the active (down) position
    Active,
    /// Only while at rest
    Rest,
}

impl PhaseScope {
    /// Whether the scope covers `phase`
    #[must_use]
    pub fn matches(self, phase: RepPhase) -> bool {
        match self {
            Self::Any => true,
            Self::Active => phase == RepPhase::Down,
            Self::Rest => phase == RepPhase::Up,
        }
    }
}

/// Threshold test on a measure value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Holds when the value is strictly below the bound
    Below(f64),
    /// Holds when the value is strictly above the bound
    Above(f64),
}

impl Condition {
    /// Evaluate the condition
    #[must_use]
    pub fn holds(self, value: f64) -> bool {
        match self {
            Self::Below(bound) => value < bound,
            Self::Above(bound) => value > bound,
        }
    }
}

/// Inclusive target range for a measure
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

impl IdealRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance from `value` to the nearest bound, 0 inside the range
    #[must_use]
    pub fn deviation(&self, value: f64) -> f64 {
        if value < self.min {
            self.min - value
        } else if value > self.max {
            value - self.max
        } else {
            0.0
        }
    }
}

/// Contribution of one measure to the form score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreTerm {
    /// Measure name
    pub measure: String,
    /// Phases in which the term applies
    #[serde(default)]
    pub scope: PhaseScope,
    /// Range that costs nothing
    pub ideal: IdealRange,
    /// Points deducted per unit of deviation outside `ideal`
    pub penalty_per_unit: f64,
}

impl ScoreTerm {
    /// Create a term
    #[must_use]
    pub fn new(
        measure: impl Into<String>,
        scope: PhaseScope,
        ideal: IdealRange,
        penalty_per_unit: f64,
    ) -> Self {
        Self {
            measure: measure.into(),
            scope,
            ideal,
            penalty_per_unit,
        }
    }
}

/// Corrective message emitted when a condition holds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRule {
    /// Measure name
    pub measure: String,
    /// Phases in which the rule applies
    #[serde(default)]
    pub scope: PhaseScope,
    /// Trigger condition
    pub condition: Condition,
    /// Message shown to the user
    pub message: String,
}

impl FeedbackRule {
    /// Create a rule
    #[must_use]
    pub fn new(
        measure: impl Into<String>,
        scope: PhaseScope,
        condition: Condition,
        message: impl Into<String>,
    ) -> Self {
        Self {
            measure: measure.into(),
            scope,
            condition,
            message: message.into(),
        }
    }
}

/// Positive coaching line shown while in a phase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseCue {
    /// Phase the cue belongs to
    pub phase: RepPhase,
    /// Message shown to the user
    pub message: String,
}

impl PhaseCue {
    /// Create a cue
    #[must_use]
    pub fn new(phase: RepPhase, message: impl Into<String>) -> Self {
        Self {
            phase,
            message: message.into(),
        }
    }
}

/// Exercise-specific names for the four phases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseLabels {
    /// Label for `RepPhase::Up`
    pub up: String,
    /// Label for `RepPhase::Descending`
    pub descending: String,
    /// Label for `RepPhase::Down`
    pub down: String,
    /// Label for `RepPhase::Ascending`
    pub ascending: String,
}

impl PhaseLabels {
    /// Create labels in cycle order
    #[must_use]
    pub fn new(up: &str, descending: &str, down: &str, ascending: &str) -> Self {
        Self {
            up: up.to_owned(),
            descending: descending.to_owned(),
            down: down.to_owned(),
            ascending: ascending.to_owned(),
        }
    }

    /// Label of `phase`
    #[must_use]
    pub fn label(&self, phase: RepPhase) -> &str {
        match phase {
            RepPhase::Up => &self.up,
            RepPhase::Descending => &self.descending,
            RepPhase::Down => &self.down,
            RepPhase::Ascending => &self.ascending,
        }
    }
}

impl Default for PhaseLabels {
    fn default() -> Self {
        Self::new("up", "descending", "down", "ascending")
    }
}

/// Complete rule table for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseProfile {
    /// Exercise this profile evaluates
    pub exercise: ExerciseType,
    /// Name of the measure that drives the rep phase
    pub primary: String,
    /// Measures computed every frame
    pub measures: Vec<MeasureSpec>,
    /// Phase thresholds on the primary measure
    pub thresholds: PhaseThresholds,
    /// Form score terms
    #[serde(default)]
    pub score_terms: Vec<ScoreTerm>,
    /// Corrective feedback rules, in display order
    #[serde(default)]
    pub feedback: Vec<FeedbackRule>,
    /// Coaching cues per phase
    #[serde(default)]
    pub cues: Vec<PhaseCue>,
    /// Display names for the phases
    #[serde(default)]
    pub labels: PhaseLabels,
}

impl ExerciseProfile {
    /// Built-in profile for `exercise`
    #[must_use]
    pub fn builtin(exercise: ExerciseType) -> Self {
        match exercise {
            ExerciseType::PushUp => push_up::profile(),
            ExerciseType::Squat => squat::profile(),
            ExerciseType::JumpingJack => jumping_jack::profile(),
        }
    }

    /// All built-in profiles
    #[must_use]
    pub fn builtins() -> Vec<Self> {
        ExerciseType::ALL.into_iter().map(Self::builtin).collect()
    }

    /// Parse a JSON array of profiles and validate each one
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` for malformed JSON and
    /// `ConfigError::InvalidProfile` for a profile that fails validation.
    pub fn table_from_json(json: &str) -> Result<Vec<Self>, ConfigError> {
        let profiles: Vec<Self> =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(profiles)
    }

    /// Every landmark the profile's measures read
    #[must_use]
    pub fn required_joints(&self) -> JointSet {
        self.measures
            .iter()
            .flat_map(|spec| spec.measure.landmarks())
            .collect()
    }

    /// Look up a measure by name
    #[must_use]
    pub fn measure(&self, name: &str) -> Option<&Measure> {
        self.measures
            .iter()
            .find(|spec| spec.name == name)
            .map(|spec| &spec.measure)
    }

    /// Coaching cue for `phase`, if the profile defines one
    #[must_use]
    pub fn cue(&self, phase: RepPhase) -> Option<&str> {
        self.cues
            .iter()
            .find(|cue| cue.phase == phase)
            .map(|cue| cue.message.as_str())
    }

    /// Check the table is internally consistent
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProfile` naming the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidProfile {
            exercise: self.exercise,
            reason,
        };

        if self.measures.is_empty() {
            return Err(invalid("profile defines no measures".into()));
        }
        for (i, spec) in self.measures.iter().enumerate() {
            if self.measures[..i].iter().any(|other| other.name == spec.name) {
                return Err(invalid(format!("measure '{}' is defined twice", spec.name)));
            }
        }
        if self.measure(&self.primary).is_none() {
            return Err(invalid(format!(
                "primary measure '{}' is not defined",
                self.primary
            )));
        }

        let thresholds = &self.thresholds;
        if !thresholds.active.is_finite() || !thresholds.rest.is_finite() {
            return Err(invalid("phase thresholds must be finite".into()));
        }
        if !thresholds.has_hysteresis() {
            return Err(invalid(format!(
                "active threshold {} and rest threshold {} leave no hysteresis band",
                thresholds.active, thresholds.rest
            )));
        }

        for term in &self.score_terms {
            if self.measure(&term.measure).is_none() {
                return Err(invalid(format!(
                    "score term refers to unknown measure '{}'",
                    term.measure
                )));
            }
            if term.ideal.min > term.ideal.max {
                return Err(invalid(format!(
                    "ideal range for '{}' has min above max",
                    term.measure
                )));
            }
            if !term.penalty_per_unit.is_finite() || term.penalty_per_unit < 0.0 {
                return Err(invalid(format!(
                    "penalty for '{}' must be a non-negative number",
                    term.measure
                )));
            }
        }

        for rule in &self.feedback {
            if self.measure(&rule.measure).is_none() {
                return Err(invalid(format!(
                    "feedback rule refers to unknown measure '{}'",
                    rule.measure
                )));
            }
            if rule.message.trim().is_empty() {
                return Err(invalid(format!(
                    "feedback rule for '{}' has an empty message",
                    rule.measure
                )));
            }
        }

        Ok(())
    }
}
