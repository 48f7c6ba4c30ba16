//! # Unprocessable
//!
//! A single error type for input that failed validation, carrying enough
//! structure for a handler (commonly an HTTP layer) to report every rejected
//! field.
//!
//! ## Overview
//!
//! A [`ValidationError`] is raised where a validation rule fails, propagated
//! unchanged with `?`, and consumed by one handler that turns it into a
//! response. It carries a summary message, per-field reasons, a status code
//! (422 Unprocessable Entity unless told otherwise) and, optionally, the
//! lower-level error that triggered it.
//!
//! ## Core Types
//!
//! - [`ValidationError`]: The error itself, immutable once constructed
//! - [`FieldErrors`]: Ordered mapping from field name to rejection reasons
//! - [`ValidationResult`]: Accumulating check result, convertible into a `ValidationError`
//!
//! ## Example
//!
//! ```rust
//! use unprocessable::{FieldErrors, ValidationError};
//!
//! fn parse_age(input: &str) -> unprocessable::Result<u8> {
//!     input.parse::<u8>().map_err(|e| {
//!         ValidationError::builder("Invalid input")
//!             .with_error("age", "must be a number between 0 and 255")
//!             .with_cause(e)
//!             .build()
//!     })
//! }
//!
//! let error = parse_age("old").unwrap_err();
//! assert_eq!(error.code(), 422);
//! assert_eq!(
//!     error.errors(),
//!     &FieldErrors::single("age", "must be a number between 0 and 255")
//! );
//! assert!(error.cause().is_some());
//! ```

pub mod error;
pub mod validation;

pub use error::{BoxError, FieldErrors, ValidationError, ValidationErrorBuilder, DEFAULT_CODE};
pub use validation::{RejectExt, ValidationResult};

/// Result type whose error defaults to [`ValidationError`].
pub type Result<T, E = ValidationError> = std::result::Result<T, E>;
