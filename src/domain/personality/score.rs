//! PersonalityScore value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sum of the five selected answer weights.
///
/// The quiz always produces a value in `MIN..=MAX`, but the type accepts
/// any integer so downstream scoring stays total.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityScore(i32);

impl PersonalityScore {
    pub const MIN: i32 = 5;
    pub const MAX: i32 = 25;

    pub fn new(value: i32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i32 {
        self.0
    }

    /// True if the score could have come out of the quiz.
    pub fn is_in_quiz_range(&self) -> bool {
        (Self::MIN..=Self::MAX).contains(&self.0)
    }

    pub(crate) fn from_weights(weights: &[u8]) -> Self {
        Self(weights.iter().map(|w| i32::from(*w)).sum())
    }
}

impl fmt::Display for PersonalityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PersonalityScore {
    fn from(value: i32) -> Self {
        Self(value)
    }
}
