// ABOUTME: Evaluator registry mapping exercise types to evaluator factories
// ABOUTME: Session controllers look up exercises here instead of switching on the type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::collections::HashMap;
use std::fmt;

use formsense_core::errors::{FormError, FormResult};
use formsense_core::models::ExerciseType;
use tracing::{debug, info};

use crate::config::{ConfigError, EngineConfig};
use crate::evaluator::{ExerciseEvaluator, ProfileEvaluator};
use crate::profiles::ExerciseProfile;

/// Builds a fresh evaluator for each new session
pub trait EvaluatorFactory: Send + Sync {
    /// Create an evaluator in its initial state
    fn create(&self, config: &EngineConfig) -> Box<dyn ExerciseEvaluator>;
}

/// Factory backed by a validated profile table
struct ProfileFactory {
    profile: ExerciseProfile,
}

impl EvaluatorFactory for ProfileFactory {
    fn create(&self, config: &EngineConfig) -> Box<dyn ExerciseEvaluator> {
        Box::new(ProfileEvaluator::new(self.profile.clone(), config))
    }
}

impl<F> EvaluatorFactory for F
where
    F: Fn(&EngineConfig) -> Box<dyn ExerciseEvaluator> + Send + Sync,
{
    fn create(&self, config: &EngineConfig) -> Box<dyn ExerciseEvaluator> {
        self(config)
    }
}

/// Registry of the exercises a controller can start sessions for
pub struct EvaluatorRegistry {
    factories: HashMap<ExerciseType, Box<dyn EvaluatorFactory>>,
}

impl EvaluatorRegistry {
    /// Registry with nothing registered
    #[must_use]
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registry with the built-in push-up, squat, and jumping-jack profiles
    #[must_use]
    pub fn with_builtin_profiles() -> Self {
        let mut registry = Self::empty();
        for profile in ExerciseProfile::builtins() {
            registry.factories.insert(
                profile.exercise,
                Box::new(ProfileFactory { profile }),
            );
        }
        info!(
            "Evaluator registry initialized with {} exercise(s): [{}]",
            registry.factories.len(),
            registry.supported_names().join(", ")
        );
        registry
    }

    /// Register (or replace) the evaluator for a profile's exercise
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidProfile` when the profile fails validation.
    pub fn register_profile(&mut self, profile: ExerciseProfile) -> Result<(), ConfigError> {
        profile.validate()?;
        debug!(exercise = %profile.exercise, "Registering exercise profile");
        self.factories
            .insert(profile.exercise, Box::new(ProfileFactory { profile }));
        Ok(())
    }

    /// Register (or replace) the evaluator for every profile in a table
    ///
    /// Nothing is registered unless every profile validates.
    ///
    /// # Errors
    ///
    /// Returns the first profile's `ConfigError::InvalidProfile`.
    pub fn register_profiles(&mut self, profiles: Vec<ExerciseProfile>) -> Result<(), ConfigError> {
        for profile in &profiles {
            profile.validate()?;
        }
        for profile in profiles {
            self.factories
                .insert(profile.exercise, Box::new(ProfileFactory { profile }));
        }
        Ok(())
    }

    /// Register (or replace) a custom evaluator factory
    pub fn register_factory(
        &mut self,
        exercise: ExerciseType,
        factory: impl EvaluatorFactory + 'static,
    ) {
        self.factories.insert(exercise, Box::new(factory));
    }

    /// Create an evaluator for `exercise`
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnsupportedExercise` when nothing is registered
    /// for the exercise.
    pub fn create(
        &self,
        exercise: ExerciseType,
        config: &EngineConfig,
    ) -> FormResult<Box<dyn ExerciseEvaluator>> {
        self.factories
            .get(&exercise)
            .map(|factory| factory.create(config))
            .ok_or_else(|| FormError::unsupported_exercise(exercise.as_str()))
    }

    /// Whether an evaluator is registered for `exercise`
    #[must_use]
    pub fn supports(&self, exercise: ExerciseType) -> bool {
        self.factories.contains_key(&exercise)
    }

    /// Registered exercises in declaration order
    #[must_use]
    pub fn supported(&self) -> Vec<ExerciseType> {
        ExerciseType::ALL
            .into_iter()
            .filter(|exercise| self.supports(*exercise))
            .collect()
    }

    fn supported_names(&self) -> Vec<&'static str> {
        self.supported().into_iter().map(ExerciseType::as_str).collect()
    }
}

impl Default for EvaluatorRegistry {
    fn default() -> Self {
        Self::with_builtin_profiles()
    }
}

impl fmt::Debug for EvaluatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EvaluatorRegistry")
            .field("exercises", &self.supported_names())
            .finish()
    }
}
