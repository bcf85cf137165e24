// ABOUTME: Session registry mapping opaque handles to live sessions
// ABOUTME: Implements start, submit-frame, and end operations with session-state validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 FormSense Contributors

use std::collections::HashMap;
use std::fmt;
use std::num::NonZeroUsize;

use formsense_core::errors::{FormError, FormResult};
use formsense_core::models::{ExerciseType, LandmarkFrame};
use formsense_intelligence::{ConfigError, EngineConfig, EvaluatorRegistry};
use lru::LruCache;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FinalSessionSummary, Session, SessionSnapshot};
use crate::logging::SessionLogger;

/// Opaque handle to a session held by a [`SessionRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionHandle(Uuid);

impl SessionHandle {
    /// Session identifier behind the handle
    #[must_use]
    pub const fn id(self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for SessionHandle {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for SessionHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Session controller keyed by handle
///
/// The most recently ended handles are remembered so that late frames are
/// reported as submitted to an ended session rather than an unknown one. Only
/// the last [`SessionRegistry::ENDED_HANDLE_CAPACITY`] are kept; older ended
/// handles are reported as unknown.
#[derive(Debug)]
pub struct SessionRegistry {
    evaluators: EvaluatorRegistry,
    config: EngineConfig,
    sessions: HashMap<SessionHandle, Session>,
    ended: LruCache<SessionHandle, ()>,
}

impl SessionRegistry {
    /// Number of ended handles remembered for error reporting
    pub const ENDED_HANDLE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a controller that builds evaluators from `evaluators`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when `config` fails validation.
    pub fn new(evaluators: EvaluatorRegistry, config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(evaluators, config))
    }

    fn with_valid_config(evaluators: EvaluatorRegistry, config: EngineConfig) -> Self {
        Self {
            evaluators,
            config,
            sessions: HashMap::new(),
            ended: LruCache::new(Self::ENDED_HANDLE_CAPACITY),
        }
    }

    /// Engine configuration handed to every new evaluator
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start a session for `exercise`
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnsupportedExercise` when no evaluator is registered.
    pub fn start_session(&mut self, exercise: ExerciseType) -> FormResult<SessionHandle> {
        let evaluator = self.evaluators.create(exercise, &self.config)?;
        let session = Session::new(evaluator, &self.config);
        let handle = SessionHandle(session.id());

        SessionLogger::log_session_started(session.id(), exercise);
        self.sessions.insert(handle, session);
        Ok(handle)
    }

    /// Start a session from an exercise name such as `"push-up"`
    ///
    /// # Errors
    ///
    /// Returns `FormError::UnsupportedExercise` for an unknown name or an
    /// exercise without a registered evaluator.
    pub fn start_session_named(&mut self, exercise: &str) -> FormResult<SessionHandle> {
        self.start_session(exercise.parse()?)
    }

    /// Evaluate one frame for the session behind `handle`
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidSessionState` when the session has ended or
    /// the handle was never issued.
    pub fn submit_frame(
        &mut self,
        handle: SessionHandle,
        frame: &LandmarkFrame,
    ) -> FormResult<SessionSnapshot> {
        let session = self.active_mut(handle)?;
        Ok(session.submit_frame(frame))
    }

    /// Evaluate one frame, failing instead of skipping when joints are missing
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidSessionState` when the session is not active
    /// and `FormError::MissingJoints` when the frame lacks required joints.
    pub fn submit_frame_strict(
        &mut self,
        handle: SessionHandle,
        frame: &LandmarkFrame,
    ) -> FormResult<SessionSnapshot> {
        self.active_mut(handle)?.submit_frame_strict(frame)
    }

    /// Latest snapshot without submitting a frame
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidSessionState` when the session is not active.
    pub fn snapshot(&self, handle: SessionHandle) -> FormResult<SessionSnapshot> {
        self.sessions
            .get(&handle)
            .map(Session::snapshot)
            .ok_or_else(|| self.inactive_error(handle))
    }

    /// End the session and return its summary
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidSessionState` when the session already ended
    /// or the handle was never issued.
    pub fn end_session(&mut self, handle: SessionHandle) -> FormResult<FinalSessionSummary> {
        let session = self
            .sessions
            .remove(&handle)
            .ok_or_else(|| self.inactive_error(handle))?;
        self.ended.put(handle, ());

        let summary = session.finish();
        SessionLogger::log_session_ended(&summary);
        Ok(summary)
    }

    /// Whether `handle` refers to a live session
    #[must_use]
    pub fn is_active(&self, handle: SessionHandle) -> bool {
        self.sessions.contains_key(&handle)
    }

    /// Number of live sessions
    #[must_use]
    pub fn active_sessions(&self) -> usize {
        self.sessions.len()
    }

    fn active_mut(&mut self, handle: SessionHandle) -> FormResult<&mut Session> {
        if self.ended.contains(&handle) {
            return Err(FormError::session_ended(handle.id()));
        }
        self.sessions
            .get_mut(&handle)
            .ok_or_else(|| FormError::unknown_session(handle.id()))
    }

    fn inactive_error(&self, handle: SessionHandle) -> FormError {
        if self.ended.contains(&handle) {
            FormError::session_ended(handle.id())
        } else {
            FormError::unknown_session(handle.id())
        }
    }
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_valid_config(EvaluatorRegistry::default(), EngineConfig::default())
    }
}
