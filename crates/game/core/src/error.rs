//! Common error infrastructure for game-core.
//!
//! This module provides shared types and traits used across all error types in
//! game-core. Action-specific errors live next to the engine operations that
//! produce them (see [`crate::engine::ActionError`]).
//!
//! Nothing in the battle rules is fatal: every error describes a call that was
//! rejected without touching gameplay state, or an inconsistency the engine
//! skipped over.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The call is fine, just not right now (e.g. acting during the enemy's turn).
    Recoverable,

    /// Invalid input that should not be retried unchanged (e.g. unknown reward id).
    Validation,

    /// Unexpected state inconsistency. These indicate misuse of the state
    /// machine and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Snapshot of where the game was when an error was raised.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorContext {
    /// Floor at the time of the error.
    pub floor: u32,

    /// Turn counter at the time of the error.
    pub turn_count: u32,

    /// Engine nonce at the time of the error.
    pub nonce: u64,
}

impl ErrorContext {
    #[must_use]
    pub const fn new(floor: u32, turn_count: u32, nonce: u64) -> Self {
        Self {
            floor,
            turn_count,
            nonce,
        }
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for metrics, log fields, and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
