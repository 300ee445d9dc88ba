//! Error definitions
//!
//! This module provides error types for testkit-matchers.

use thiserror::Error;

/// Main error type for testkit-matchers
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A matcher rejected the subject it was checked against.
    #[error("assertion failed: {actual}\n  expected: {expected}")]
    AssertionFailed {
        /// What the matcher expected, from its self-description.
        expected: String,
        /// Why the subject was rejected, from the mismatch description.
        actual: String,
    },
}

impl Error {
    /// Create an assertion failure from the two rendered descriptions.
    #[must_use]
    pub fn assertion_failed(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::AssertionFailed {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
