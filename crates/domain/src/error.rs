//! Error types for the domain layer
//!
//! `RollError` covers the dice-pool check. `DomainError` is the general
//! error for everything else (input validation, parsing of closed sets) and
//! absorbs `RollError` so callers can hold a single error type.

use thiserror::Error;

/// Failure while resolving or interpreting a dice-pool check.
///
/// All variants point at a caller or configuration defect; none of them are
/// transient and none should be retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RollError {
    /// The chosen stat is not one of the actor's abilities
    #[error("Unknown stat: {0}")]
    UnknownStat(String),

    /// No ability carries a skill with this (normalized) name
    #[error("Unknown skill: {0}")]
    UnknownSkill(String),

    /// A die face outside the die's range was reported
    #[error("Invalid die face {face}: expected a value between 1 and {faces}")]
    InvalidFace { face: i32, faces: u8 },

    /// A roll expression could not be built or parsed
    #[error("Malformed roll expression: {0}")]
    MalformedExpression(String),
}

impl RollError {
    pub fn unknown_stat(key: impl Into<String>) -> Self {
        Self::UnknownStat(key.into())
    }

    pub fn unknown_skill(key: impl Into<String>) -> Self {
        Self::UnknownSkill(key.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedExpression(msg.into())
    }
}

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Dice-pool check failed
    #[error(transparent)]
    Roll(#[from] RollError),
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    ///
    /// # Example
    /// ```ignore
    /// if min > max {
    ///     return Err(DomainError::validation("tracker minimum exceeds maximum"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
