//! Per-field validation failures.
//!
//! This module provides [`FieldErrors`], the structured payload carried by
//! [`ValidationError`](crate::ValidationError): an ordered mapping from field
//! name to the reasons that field was rejected.

use std::fmt::{self, Display};

use indexmap::IndexMap;
use stillwater::prelude::*;

/// An ordered collection of validation failures keyed by field name.
///
/// Each field maps to the list of reasons it was rejected. Fields keep the
/// order in which they were first added, and reasons keep the order in which
/// they were pushed, so a collection reads back exactly as it was built.
///
/// # Example
///
/// ```rust
/// use unprocessable::FieldErrors;
///
/// let errors = FieldErrors::new()
///     .with("email", "must be a valid address")
///     .with("password", "is too short")
///     .with("password", "must contain a digit");
///
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors.reason_count(), 3);
/// assert_eq!(
///     errors.get("password"),
///     Some(&["is too short".to_string(), "must contain a digit".to_string()][..])
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(IndexMap<String, Vec<String>>);

impl FieldErrors {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection holding a single reason for a single field.
    pub fn single(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new().with(field, reason)
    }

    /// Appends a reason to `field` and returns self for chaining.
    pub fn with(mut self, field: impl Into<String>, reason: impl Into<String>) -> Self {
        self.push(field, reason);
        self
    }

    /// Appends a reason to `field`.
    ///
    /// A field seen for the first time is added after all existing fields.
    pub fn push(&mut self, field: impl Into<String>, reason: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(reason.into());
    }

    /// Returns the reasons recorded for `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// Returns true if `field` has an entry.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Returns the number of fields with an entry.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field has an entry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the total number of reasons across all fields.
    pub fn reason_count(&self) -> usize {
        self.0.values().map(Vec::len).sum()
    }

    /// Returns an iterator over field names in insertion order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Returns an iterator over `(field, reasons)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Returns the underlying map.
    pub fn as_map(&self) -> &IndexMap<String, Vec<String>> {
        &self.0
    }

    /// Converts this collection into the underlying map.
    pub fn into_map(self) -> IndexMap<String, Vec<String>> {
        self.0
    }
}

impl From<IndexMap<String, Vec<String>>> for FieldErrors {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

impl<K, R> FromIterator<(K, R)> for FieldErrors
where
    K: Into<String>,
    R: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, R)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, reason) in iter {
            errors.push(field, reason);
        }
        errors
    }
}

impl Semigroup for FieldErrors {
    fn combine(mut self, other: Self) -> Self {
        for (field, reasons) in other.0 {
            self.0.entry(field).or_default().extend(reasons);
        }
        self
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (field, reasons) in self.iter() {
            writeln!(f, "{}: {}", field, reasons.join("; "))?;
        }
        Ok(())
    }
}

impl IntoIterator for FieldErrors {
    type Item = (String, Vec<String>);
    type IntoIter = indexmap::map::IntoIter<String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<FieldErrors>();
    assert_sync::<FieldErrors>();
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let errors = FieldErrors::new();
        assert!(errors.is_empty());
        assert_eq!(errors.len(), 0);
        assert_eq!(errors.reason_count(), 0);
        assert_eq!(errors, FieldErrors::default());
    }

    #[test]
    fn test_push_groups_reasons_by_field() {
        let mut errors = FieldErrors::new();
        errors.push("name", "is required");
        errors.push("age", "must be positive");
        errors.push("name", "is too short");

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.reason_count(), 3);
        assert_eq!(
            errors.get("name"),
            Some(&["is required".to_string(), "is too short".to_string()][..])
        );
        assert!(errors.get("email").is_none());
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let errors = FieldErrors::new()
            .with("zeta", "z")
            .with("alpha", "a")
            .with("mid", "m")
            .with("zeta", "z2");

        let fields: Vec<_> = errors.fields().collect();
        assert_eq!(fields, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_from_map_is_verbatim() {
        let mut map = IndexMap::new();
        map.insert("b".to_string(), vec!["second".to_string()]);
        map.insert("a".to_string(), Vec::new());

        let errors = FieldErrors::from(map.clone());
        assert_eq!(errors.as_map(), &map);
        assert_eq!(errors.get("a"), Some(&[][..]));
        assert_eq!(errors.into_map(), map);
    }

    #[test]
    fn test_from_iterator_accumulates() {
        let errors: FieldErrors = vec![("a", "one"), ("b", "two"), ("a", "three")]
            .into_iter()
            .collect();

        assert_eq!(errors.len(), 2);
        assert_eq!(
            errors.get("a"),
            Some(&["one".to_string(), "three".to_string()][..])
        );
    }

    #[test]
    fn test_combine_appends() {
        let left = FieldErrors::new().with("a", "1").with("b", "2");
        let right = FieldErrors::new().with("c", "3").with("a", "4");

        let combined = left.combine(right);
        let fields: Vec<_> = combined.fields().collect();
        assert_eq!(fields, vec!["a", "b", "c"]);
        assert_eq!(
            combined.get("a"),
            Some(&["1".to_string(), "4".to_string()][..])
        );
    }

    #[test]
    fn test_combine_associativity() {
        let e1 = FieldErrors::single("x", "1");
        let e2 = FieldErrors::single("y", "2");
        let e3 = FieldErrors::single("x", "3");

        let left = e1.clone().combine(e2.clone()).combine(e3.clone());
        let right = e1.combine(e2.combine(e3));

        assert_eq!(left, right);
    }

    #[test]
    fn test_display() {
        let errors = FieldErrors::new()
            .with("email", "must be a valid address")
            .with("password", "is too short")
            .with("password", "must contain a digit");

        assert_eq!(
            errors.to_string(),
            "email: must be a valid address\npassword: is too short; must contain a digit\n"
        );
    }
}
