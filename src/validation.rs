//! Turning accumulated validation results into a [`ValidationError`].
//!
//! Independent checks report their failures as [`ValidationResult`]s, which
//! accumulate every failing field instead of stopping at the first one.
//! Once all checks have run, [`RejectExt::or_reject`] converts the outcome
//! into a plain `Result` so the failure can be propagated with `?`.
//!
//! # Example
//!
//! ```rust
//! use unprocessable::validation::{check, collect, RejectExt};
//!
//! fn register(name: &str, age: i64) -> unprocessable::Result<()> {
//!     collect(vec![
//!         check(!name.is_empty(), "name", "is required"),
//!         check(age >= 0, "age", "must not be negative"),
//!     ])
//!     .or_reject("Validation failed")?;
//!     Ok(())
//! }
//!
//! let error = register("", -1).unwrap_err();
//! assert_eq!(error.code(), 422);
//! assert_eq!(error.errors().len(), 2);
//! ```

use stillwater::prelude::*;
use stillwater::Validation;

use crate::error::{FieldErrors, ValidationError};

/// Result of a validation check, accumulating failures as [`FieldErrors`].
pub type ValidationResult<T> = Validation<T, FieldErrors>;

/// Succeeds if `condition` holds, otherwise fails with `reason` on `field`.
pub fn check(
    condition: bool,
    field: impl Into<String>,
    reason: impl Into<String>,
) -> ValidationResult<()> {
    if condition {
        Validation::Success(())
    } else {
        reject(field, reason)
    }
}

/// Fails with `reason` on `field`.
pub fn reject<T>(field: impl Into<String>, reason: impl Into<String>) -> ValidationResult<T> {
    Validation::Failure(FieldErrors::single(field, reason))
}

/// Runs every result and collects the successes in order.
///
/// If any result failed, the failures of all of them are combined and the
/// successes are discarded.
pub fn collect<T, I>(results: I) -> ValidationResult<Vec<T>>
where
    I: IntoIterator<Item = ValidationResult<T>>,
{
    let mut values = Vec::new();
    let mut failures: Option<FieldErrors> = None;

    for result in results {
        match result {
            Validation::Success(value) => values.push(value),
            Validation::Failure(errors) => {
                failures = Some(match failures {
                    Some(existing) => existing.combine(errors),
                    None => errors,
                });
            }
        }
    }

    match failures {
        Some(errors) => Validation::Failure(errors),
        None => Validation::Success(values),
    }
}

/// Conversion from a [`ValidationResult`] into a propagatable `Result`.
pub trait RejectExt<T> {
    /// Returns the value on success, or a [`ValidationError`] with `message`,
    /// the accumulated field errors and the default code on failure.
    fn or_reject(self, message: impl Into<String>) -> Result<T, ValidationError>;
}

impl<T> RejectExt<T> for ValidationResult<T> {
    fn or_reject(self, message: impl Into<String>) -> Result<T, ValidationError> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(errors) => Err(ValidationError::from_errors(message, errors)),
        }
    }
}
