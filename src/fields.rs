//! Field values bound by the parser.

use std::collections::BTreeMap;

use crate::error::ParseErrorKind;

/// Values bound to the value-carrying segments of a shape, keyed by field name.
///
/// # Examples
///
/// ```
/// use arm_resource_id::Fields;
///
/// let mut fields = Fields::new();
/// fields.insert("server_name", "Server1");
/// assert_eq!(fields.get("server_name"), Some("Server1"));
/// assert_eq!(fields.get("database_name"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields(BTreeMap<&'static str, String>);

impl Fields {
    /// Creates an empty field set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `name`, replacing any previous value.
    pub fn insert(&mut self, name: &'static str, value: impl Into<String>) {
        self.0.insert(name, value.into());
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Removes and returns the value bound to `name`.
    ///
    /// # Errors
    ///
    /// Returns `MissingSegmentValue` if nothing is bound to `name`.
    pub fn take(&mut self, name: &'static str) -> Result<String, ParseErrorKind> {
        self.0
            .remove(name)
            .ok_or(ParseErrorKind::MissingSegmentValue { segment: name })
    }

    /// Returns the number of bound fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no field is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(name, value)| (*name, value.as_str()))
    }
}

impl<V: Into<String>> FromIterator<(&'static str, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (&'static str, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name, value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_removes_value() {
        let mut fields: Fields = [("vault_name", "kv1")].into_iter().collect();
        assert_eq!(fields.take("vault_name").unwrap(), "kv1");
        assert!(fields.is_empty());
    }

    #[test]
    fn take_missing_reports_field() {
        let mut fields = Fields::new();
        assert_eq!(
            fields.take("vault_name"),
            Err(ParseErrorKind::MissingSegmentValue {
                segment: "vault_name"
            })
        );
    }

    #[test]
    fn insert_replaces() {
        let mut fields = Fields::new();
        fields.insert("a", "1");
        fields.insert("a", "2");
        assert_eq!(fields.len(), 1);
        assert_eq!(fields.get("a"), Some("2"));
    }

    #[test]
    fn iter_is_sorted_by_name() {
        let fields: Fields = [("b", "2"), ("a", "1")].into_iter().collect();
        let names: Vec<_> = fields.iter().map(|(name, _)| name).collect();
        assert_eq!(names, ["a", "b"]);
    }
}
