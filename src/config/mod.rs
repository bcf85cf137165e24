// ABOUTME: Application configuration bundling engine tuning, logging, and profile overrides
// ABOUTME: Loads everything from environment variables and builds the evaluator registry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Configuration module for FormSense
//!
//! - **Engine**: visibility, smoothing, and tracking-loss tuning
//!   (see [`EngineConfig`])
//! - **Logging**: level and output format (see [`LoggingConfig`])
//! - **Profiles**: an optional JSON profile table replacing built-in rules

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use formsense_intelligence::{EngineConfig, EvaluatorRegistry, ExerciseProfile};
use tracing::info;

use crate::logging::LoggingConfig;

/// Environment variable naming a JSON profile table
pub const PROFILES_ENV_VAR: &str = "FORMSENSE_PROFILES";

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Engine tuning
    pub engine: EngineConfig,
    /// Logging setup
    pub logging: LoggingConfig,
    /// JSON profile table overriding the built-in profiles
    pub profiles_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if an engine setting is out of range
    pub fn from_env() -> Result<Self> {
        let config = Self {
            engine: EngineConfig::from_env(),
            logging: LoggingConfig::from_env(),
            profiles_path: env::var(PROFILES_ENV_VAR).ok().map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if an engine setting is out of range
    pub fn validate(&self) -> Result<()> {
        self.engine
            .validate()
            .context("Invalid engine configuration")?;
        Ok(())
    }

    /// Build the evaluator registry: built-in profiles, then any overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the profile table cannot be read or fails validation
    pub fn evaluator_registry(&self) -> Result<EvaluatorRegistry> {
        let mut registry = EvaluatorRegistry::with_builtin_profiles();
        if let Some(path) = &self.profiles_path {
            let profiles = load_profile_table(path)?;
            info!(
                "Loaded {} exercise profile(s) from {}",
                profiles.len(),
                path.display()
            );
            registry.register_profiles(profiles)?;
        }
        Ok(registry)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "FormSense Configuration:\n\
             - Visibility Threshold: {}\n\
             - Smoothing Window: {} samples\n\
             - Trend Deadband: {}\n\
             - Tracking Lost After: {} frames\n\
             - Profiles: {}\n\
             - Log Level: {}",
            self.engine.visibility_threshold,
            self.engine.smoothing_window,
            self.engine.trend_deadband_degrees,
            self.engine.tracking_lost_after,
            self.profiles_path
                .as_deref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            self.logging.level,
        )
    }
}

/// Read and validate a JSON profile table
///
/// # Errors
///
/// Returns an error if the file cannot be read or a profile is invalid
pub fn load_profile_table(path: &Path) -> Result<Vec<ExerciseProfile>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile table {}", path.display()))?;
    let profiles = ExerciseProfile::table_from_json(&json)
        .with_context(|| format!("Invalid profile table {}", path.display()))?;
    Ok(profiles)
}
