//! Common error infrastructure for battle-core.
//!
//! The resolver has no fatal runtime faults: every failure it reports is a
//! rejected request (full battlefield, insufficient power, etc.). Domain errors
//! such as [`crate::BattlefieldError`] and [`crate::OracleError`] live next to
//! the operations they guard and share the classification trait defined here.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the request may succeed after the player changes something
/// - **Validation**: invalid input, a caller-side misuse
/// - **Internal**: unexpected state inconsistency
/// - **Fatal**: unrecoverable, the battle cannot continue
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Can retry after adjusting the board.
    ///
    /// Examples: not enough power to beat the enemy yet
    Recoverable,

    /// Invalid input, should not retry without changes.
    ///
    /// Examples: placing into a full battlefield, removing an empty slot
    Validation,

    /// Unexpected state inconsistency.
    ///
    /// Examples: mutating a battlefield that already won
    Internal,

    /// The session cannot continue and must be rebuilt from content.
    ///
    /// Nothing in the resolver reports this today; embedders classifying
    /// their own errors (e.g. corrupt content tables) use it.
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

    /// Returns true if this error indicates a caller bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all battle-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait BattleError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
