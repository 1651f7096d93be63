//! PersonalityScorer - walks the user through the quiz one question at a time.

use crate::domain::foundation::ValidationError;

use super::questions::{Question, QUESTIONS};
use super::score::PersonalityScore;

/// Result of asking the scorer to move on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// No option selected, or the quiz is already finished.
    Blocked,
    /// Moved to the question at this 0-based index.
    NextQuestion(usize),
    /// Fifth answer recorded. Emitted exactly once.
    Complete(PersonalityScore),
}

/// Forward-only quiz state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalityScorer {
    current: usize,
    answers: Vec<u8>,
    selected: Option<usize>,
    finished: bool,
}

impl PersonalityScorer {
    pub fn new() -> Self {
        Self {
            current: 0,
            answers: Vec::with_capacity(QUESTIONS.len()),
            selected: None,
            finished: false,
        }
    }

    pub fn question_count(&self) -> usize {
        QUESTIONS.len()
    }

    /// The question on screen, or `None` once the quiz is finished.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.finished {
            None
        } else {
            QUESTIONS.get(self.current)
        }
    }

    /// 1-based number for "Question n of 5".
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    /// Progress bar fill, 20..=100.
    pub fn progress_percent(&self) -> u8 {
        ((self.question_number() * 100) / QUESTIONS.len()) as u8
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 == QUESTIONS.len()
    }

    pub fn advance_label(&self) -> &'static str {
        if self.is_last_question() {
            "Complete Assessment"
        } else {
            "Next Question"
        }
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Selects an option (0-based) on the current question.
    ///
    /// The selection can be changed freely until `advance` is called.
    pub fn select(&mut self, option_index: usize) -> Result<(), ValidationError> {
        let question = self.current_question().ok_or_else(|| {
            ValidationError::invalid_format("personality", "Assessment already complete")
        })?;

        if option_index >= question.options.len() {
            return Err(ValidationError::out_of_range(
                "option",
                1,
                question.options.len() as i32,
                i32::try_from(option_index.saturating_add(1)).unwrap_or(i32::MAX),
            ));
        }

        self.selected = Some(option_index);
        Ok(())
    }

    /// Records the selection and moves forward.
    pub fn advance(&mut self) -> Advance {
        let (Some(question), Some(choice)) = (self.current_question(), self.selected) else {
            return Advance::Blocked;
        };

        self.answers.push(question.options[choice].weight);
        self.selected = None;

        if self.is_last_question() {
            self.finished = true;
            Advance::Complete(PersonalityScore::from_weights(&self.answers))
        } else {
            self.current += 1;
            Advance::NextQuestion(self.current)
        }
    }
}

impl Default for PersonalityScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer_all(scorer: &mut PersonalityScorer, option_index: usize) -> Advance {
        let mut last = Advance::Blocked;
        for _ in 0..QUESTIONS.len() {
            scorer.select(option_index).unwrap();
            last = scorer.advance();
        }
        last
    }

    #[test]
    fn all_fives_score_twenty_five() {
        let mut scorer = PersonalityScorer::new();
        assert_eq!(
            answer_all(&mut scorer, 4),
            Advance::Complete(PersonalityScore::new(25))
        );
    }

    #[test]
    fn all_ones_score_five() {
        let mut scorer = PersonalityScorer::new();
        assert_eq!(
            answer_all(&mut scorer, 0),
            Advance::Complete(PersonalityScore::new(5))
        );
    }

    #[test]
    fn mixed_answers_sum_weights() {
        let mut scorer = PersonalityScorer::new();
        for choice in [0, 1, 2, 3] {
            scorer.select(choice).unwrap();
            scorer.advance();
        }
        scorer.select(4).unwrap();
        assert_eq!(scorer.advance(), Advance::Complete(PersonalityScore::new(15)));
    }

    #[test]
    fn advance_without_selection_is_blocked() {
        let mut scorer = PersonalityScorer::new();
        assert_eq!(scorer.advance(), Advance::Blocked);
        assert_eq!(scorer.question_number(), 1);
    }

    #[test]
    fn selection_can_change_before_advancing() {
        let mut scorer = PersonalityScorer::new();
        scorer.select(0).unwrap();
        scorer.select(3).unwrap();
        assert_eq!(scorer.selected(), Some(3));
        assert_eq!(scorer.advance(), Advance::NextQuestion(1));
        assert_eq!(scorer.selected(), None);
    }

    #[test]
    fn completion_is_emitted_once() {
        let mut scorer = PersonalityScorer::new();
        answer_all(&mut scorer, 2);
        assert!(scorer.is_finished());
        assert_eq!(scorer.current_question(), None);
        assert!(scorer.select(0).is_err());
        assert_eq!(scorer.advance(), Advance::Blocked);
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut scorer = PersonalityScorer::new();
        assert_eq!(
            scorer.select(5),
            Err(ValidationError::out_of_range("option", 1, 5, 6))
        );
        assert_eq!(scorer.selected(), None);
    }

    #[test]
    fn progress_and_labels_follow_question_number() {
        let mut scorer = PersonalityScorer::new();
        assert_eq!(scorer.progress_percent(), 20);
        assert_eq!(scorer.advance_label(), "Next Question");

        for _ in 0..4 {
            scorer.select(1).unwrap();
            scorer.advance();
        }
        assert_eq!(scorer.question_number(), 5);
        assert_eq!(scorer.progress_percent(), 100);
        assert_eq!(scorer.advance_label(), "Complete Assessment");
    }
}
