//! SymptomList value object.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ValidationError;

/// Ordered, immutable sequence of symptoms submitted by the user.
///
/// Entries are kept exactly as typed. Every entry contains at least one
/// non-whitespace character.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymptomList(Vec<String>);

impl SymptomList {
    /// Builds a list from raw entries, rejecting blank ones.
    ///
    /// An empty list is allowed here; the collector is what refuses to
    /// submit one.
    pub fn new(entries: Vec<String>) -> Result<Self, ValidationError> {
        if entries.iter().any(|e| is_blank(e)) {
            return Err(ValidationError::empty_field("symptom"));
        }
        Ok(Self(entries))
    }

    /// Empty list, as held by a fresh session.
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Keeps only non-blank entries. Used by the collector on submit.
    pub(crate) fn from_non_blank(entries: impl IntoIterator<Item = String>) -> Self {
        Self(entries.into_iter().filter(|e| !is_blank(e)).collect())
    }
}

pub(crate) fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl<'a> IntoIterator for &'a SymptomList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
