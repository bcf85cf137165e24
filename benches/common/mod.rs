// ABOUTME: Common benchmark utilities and fixtures for performance testing
// ABOUTME: Provides reusable landmark-frame generators for Criterion benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

//! Common benchmark utilities and fixtures.

pub mod fixtures;
