// ABOUTME: Configuration module for formsense-intelligence crate
// ABOUTME: Re-exports engine configuration and configuration error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

/// Engine tuning (visibility, smoothing, tracking loss)
pub mod engine;

/// Configuration error types
pub mod error;

pub use engine::EngineConfig;
pub use error::ConfigError;
