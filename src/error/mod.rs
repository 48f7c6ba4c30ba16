//! Error types for validation failures.
//!
//! This module provides [`ValidationError`], the error raised when input is
//! rejected, and [`FieldErrors`], the per-field detail it carries.

mod field_errors;
mod validation_error;

pub use field_errors::FieldErrors;
pub use validation_error::{BoxError, ValidationError, ValidationErrorBuilder, DEFAULT_CODE};
