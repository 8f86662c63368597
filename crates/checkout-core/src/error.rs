//! # Error Types
//!
//! Domain-specific error types for checkout-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  checkout-core errors (this file)                                      │
//! │  ├── CoreError        - Purchase-level rule violations                 │
//! │  └── ValidationError  - Raw input that failed to parse or validate     │
//! │                                                                         │
//! │  checkout-cli errors (app crate)                                       │
//! │  ├── ConfigError      - Bad flags / environment                        │
//! │  └── AppError         - What ends a session                            │
//! │                                                                         │
//! │  Flow: ValidationError → shown to user → re-prompt                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The discount engine itself has no error paths: every input it sees has
//! already passed through [`crate::validation`].

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Purchase-level business rule violations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Purchase has reached the maximum allowed line items.
    #[error("A purchase cannot have more than {max} items")]
    TooManyLineItems { max: usize },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Each message is phrased so the console can show it verbatim before
/// asking again.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value cannot be negative (zero is fine).
    #[error("{field} cannot be negative")]
    Negative { field: String },

    /// Invalid format (e.g., not a DD/MM/YYYY date, not a number).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Date lies after the reference date.
    #[error("{field} cannot be after {reference}")]
    InFuture { field: String, reference: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
