// ABOUTME: Core types and constants for the FormSense exercise-form scoring engine
// ABOUTME: Foundation crate with landmark models, exercise types, error taxonomy, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

#![deny(unsafe_code)]

//! # FormSense Core
//!
//! Foundation crate providing shared types for the FormSense scoring engine.
//! Every other crate in the workspace depends on it, so it is kept small and
//! free of algorithms.
//!
//! ## Modules
//!
//! - **errors**: `FormError`, `MissingJointsError` and stable `ErrorCode`s
//! - **constants**: Landmark counts, tracking defaults and user-facing messages
//! - **models**: Landmarks, frames, exercise types and repetition phases

/// Error taxonomy shared by the adapter, evaluators and session controller
pub mod errors;

/// Engine-wide constants organized by domain
pub mod constants;

/// Core data models (landmarks, frames, exercise types, phases)
pub mod models;
