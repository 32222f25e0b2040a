//! Common error infrastructure for combat-core.
//!
//! Domain-specific errors (`SetupError`, `DecisionError`, `SkillError`,
//! `ExecuteError`) live next to the code that raises them. This module only
//! provides the classification shared by all of them.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each concern has its own error enum with specific variants
//! - **Severity Classification**: Errors are categorized for recovery strategies
//! - **Stable Codes**: Every variant maps to a static code usable in logs and tests

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the caller may retry with a different input (re-prompt)
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: unexpected state inconsistency, indicates a bug
/// - **Fatal**: the battle cannot be constructed or continued
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - can retry with an alternative decision.
    ///
    /// Examples: dead target, same-faction target
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown skill, decision for the wrong combatant
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: skill resolved against a combatant missing from the roster
    Internal,

    /// Fatal error - battle cannot start or continue.
    ///
    /// Examples: empty roster, single-faction roster
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug or corrupted setup.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all combat-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
/// - Return a distinct `error_code` per variant
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
