//! Personality quiz.
//!
//! Five fixed questions, each answered with an option weighted 1..=5.
//! The weights add up to a `PersonalityScore` in 5..=25.

mod questions;
mod score;
mod scorer;

pub use questions::{AnswerOption, Question, QUESTIONS};
pub use score::PersonalityScore;
pub use scorer::{Advance, PersonalityScorer};
