//! The validation failure error type.
//!
//! This module provides [`ValidationError`], raised when input fails
//! validation, and [`ValidationErrorBuilder`] for constructing one with
//! non-default parts.

use std::error::Error as StdError;

use thiserror::Error;

use super::field_errors::FieldErrors;

/// A boxed, thread-safe error used as the cause of a [`ValidationError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// The code a [`ValidationError`] carries unless another one is given
/// (HTTP 422 Unprocessable Entity).
pub const DEFAULT_CODE: i64 = 422;

/// Input failed validation.
///
/// `ValidationError` carries everything a terminal handler needs to report
/// the failure:
/// - **message**: Human-readable summary of the failure
/// - **errors**: Per-field reasons, see [`FieldErrors`]
/// - **code**: Status code the handler uses to pick a response, defaulting to [`DEFAULT_CODE`]
/// - **cause**: The lower-level error that triggered the failure, if any
///
/// A value is fixed once constructed. There are no setters, so the error
/// reaches its handler exactly as it was raised.
///
/// # Example
///
/// ```rust
/// use unprocessable::{FieldErrors, ValidationError};
///
/// let error = ValidationError::from_errors(
///     "Validation failed",
///     FieldErrors::single("email", "must be a valid address"),
/// );
///
/// assert_eq!(error.to_string(), "Validation failed");
/// assert_eq!(error.code(), 422);
/// assert_eq!(
///     error.errors().get("email"),
///     Some(&["must be a valid address".to_string()][..])
/// );
/// assert!(error.cause().is_none());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    errors: FieldErrors,
    code: i64,
    #[source]
    cause: Option<BoxError>,
}

impl ValidationError {
    /// Creates an error with the given message, no field errors, the
    /// default code and no cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self::from_parts(message, FieldErrors::new(), DEFAULT_CODE, None)
    }

    /// Creates an error with the given message and field errors, the default
    /// code and no cause.
    pub fn from_errors(message: impl Into<String>, errors: impl Into<FieldErrors>) -> Self {
        Self::from_parts(message, errors, DEFAULT_CODE, None)
    }

    /// Creates an error from all four of its parts.
    ///
    /// Nothing is checked: the code may be any integer and the errors are
    /// stored as given.
    pub fn from_parts(
        message: impl Into<String>,
        errors: impl Into<FieldErrors>,
        code: i64,
        cause: Option<BoxError>,
    ) -> Self {
        Self {
            message: message.into(),
            errors: errors.into(),
            code,
            cause,
        }
    }

    /// Starts building an error with the given message.
    ///
    /// # Example
    ///
    /// ```rust
    /// use unprocessable::ValidationError;
    ///
    /// let error = ValidationError::builder("Invalid input")
    ///     .with_error("age", "must be a number")
    ///     .with_code(400)
    ///     .build();
    ///
    /// assert_eq!(error.code(), 400);
    /// assert!(error.errors().contains("age"));
    /// ```
    pub fn builder(message: impl Into<String>) -> ValidationErrorBuilder {
        ValidationErrorBuilder {
            message: message.into(),
            errors: FieldErrors::new(),
            code: DEFAULT_CODE,
            cause: None,
        }
    }

    /// Returns the summary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the field errors exactly as supplied at construction.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Returns the status code.
    pub fn code(&self) -> i64 {
        self.code
    }

    /// Returns the error that triggered this one, if any.
    ///
    /// This is the same error reported by [`source`](StdError::source), so
    /// it can be downcast to its concrete type.
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Consumes the error and returns its field errors.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }

    /// Consumes the error and returns `(message, errors, code, cause)`.
    pub fn into_parts(self) -> (String, FieldErrors, i64, Option<BoxError>) {
        (self.message, self.errors, self.code, self.cause)
    }
}

/// Builder for a [`ValidationError`] with non-default parts.
///
/// Obtained from [`ValidationError::builder`]. Unset parts keep their
/// defaults: no field errors, [`DEFAULT_CODE`], no cause.
#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct ValidationErrorBuilder {
    message: String,
    errors: FieldErrors,
    code: i64,
    cause: Option<BoxError>,
}

impl ValidationErrorBuilder {
    /// Replaces the field errors.
    pub fn with_errors(mut self, errors: impl Into<FieldErrors>) -> Self {
        self.errors = errors.into();
        self
    }

    /// Appends a single reason to `field`.
    pub fn with_error(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.errors.push(field, reason);
        self
    }

    /// Sets the status code.
    pub fn with_code(mut self, code: i64) -> Self {
        self.code = code;
        self
    }

    /// Sets the error that triggered the failure.
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Builds the error.
    pub fn build(self) -> ValidationError {
        ValidationError::from_parts(self.message, self.errors, self.code, self.cause)
    }
}

// Errors cross thread and task boundaries on their way to a handler.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
