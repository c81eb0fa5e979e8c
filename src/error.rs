//! Error types for the `proxymark` runtime.
//!
//! This module defines the error types used throughout the crate: selector
//! interning failures, method table registration conflicts, and generic
//! dispatch failures. All errors surface at setup time; a validated wrapper
//! has no failure modes during measurement.

use std::fmt;

/// Errors that can occur while building or dispatching through a proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Selector interning was given an empty name.
    EmptySelectorName,

    /// Selector not found in the capability's method table.
    ///
    /// Raised at proxy construction when the supplied table does not
    /// register the operation the proxy must forward.
    SelectorNotFound {
        /// The selector that was looked up.
        selector: String,
    },

    /// Method already registered for this selector in the table.
    MethodAlreadyRegistered {
        /// The selector that was registered twice.
        selector: String,
    },

    /// Argument count mismatch between a generic call and the method's arity.
    ArgumentCountMismatch {
        /// Expected number of arguments
        expected: usize,
        /// Actual number of arguments provided
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptySelectorName => {
                write!(f, "Selector name must not be empty")
            }
            Error::SelectorNotFound { selector } => {
                write!(f, "Selector '{selector}' not found in method table")
            }
            Error::MethodAlreadyRegistered { selector } => {
                write!(
                    f,
                    "Method already registered for selector '{selector}'"
                )
            }
            Error::ArgumentCountMismatch { expected, got } => {
                write!(
                    f,
                    "Argument count mismatch: expected {expected}, got {got}"
                )
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type for `proxymark` runtime operations.
pub type Result<T> = std::result::Result<T, Error>;
