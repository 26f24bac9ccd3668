//! Error taxonomy shared by every fallible function in the crate.
//!
//! All failures are caller errors: the functions are pure, so the same
//! input always fails the same way and there is nothing to retry.

use thiserror::Error;

/// Errors returned by the crate's fallible functions.
///
/// Each variant records the name of the function that rejected its input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilError {
    /// Input is outside the function's domain.
    #[error("{function}: {message}")]
    InvalidArgument {
        function: &'static str,
        message: String,
    },

    /// A divisor or modulus was zero.
    #[error("{function}: division by zero")]
    DivisionByZero { function: &'static str },

    /// A reducer or selector was given no elements.
    #[error("{function}: input is empty")]
    EmptyInput { function: &'static str },
}

impl UtilError {
    pub(crate) fn invalid(function: &'static str, message: impl Into<String>) -> Self {
        let err = UtilError::InvalidArgument {
            function,
            message: message.into(),
        };
        tracing::debug!(error = %err, "rejected input");
        err
    }

    pub(crate) fn division_by_zero(function: &'static str) -> Self {
        tracing::debug!(function, "rejected zero divisor");
        UtilError::DivisionByZero { function }
    }

    pub(crate) fn empty(function: &'static str) -> Self {
        tracing::debug!(function, "rejected empty input");
        UtilError::EmptyInput { function }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, UtilError>;
