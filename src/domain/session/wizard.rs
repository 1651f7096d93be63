//! Wizard - the four-screen orchestrator.
//!
//! Owns the current `Screen`, the `Session`, and the per-screen form
//! state. Every callback checks the screen first and leaves the wizard
//! untouched when invoked out of order.

use crate::domain::diagnosis::{select_diagnosis, Diagnosis};
use crate::domain::foundation::{StateMachine, ValidationError};
use crate::domain::personality::{Advance, PersonalityScore, PersonalityScorer};
use crate::domain::symptoms::{SymptomCollector, SymptomList};
use crate::ports::RandomSource;

use super::{Screen, Session, WizardError};

#[derive(Debug, Clone)]
pub struct Wizard {
    screen: Screen,
    session: Session,
    collector: SymptomCollector,
    scorer: PersonalityScorer,
}

impl Wizard {
    pub fn new() -> Self {
        Self {
            screen: Screen::Welcome,
            session: Session::new(),
            collector: SymptomCollector::new(),
            scorer: PersonalityScorer::new(),
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn collector(&self) -> &SymptomCollector {
        &self.collector
    }

    pub fn scorer(&self) -> &PersonalityScorer {
        &self.scorer
    }

    /// Symptom form, editable only on the symptoms screen.
    pub fn collector_mut(&mut self) -> Option<&mut SymptomCollector> {
        (self.screen == Screen::Symptoms).then_some(&mut self.collector)
    }

    /// Quiz state, editable only on the personality screen.
    pub fn scorer_mut(&mut self) -> Option<&mut PersonalityScorer> {
        (self.screen == Screen::Personality).then_some(&mut self.scorer)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Transitions
    // ─────────────────────────────────────────────────────────────────────────

    /// Welcome -> Symptoms.
    pub fn start(&mut self) -> Result<(), WizardError> {
        self.move_to(Screen::Symptoms)?;
        self.collector = SymptomCollector::new();
        Ok(())
    }

    /// Submits the symptom form.
    ///
    /// Returns `Ok(false)` without moving when every entry is blank.
    pub fn submit_symptoms(&mut self) -> Result<bool, WizardError> {
        self.require(Screen::Symptoms, Screen::Personality)?;
        match self.collector.submit() {
            Some(list) => {
                self.on_symptoms_submit(list)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Symptoms -> Personality, carrying the submitted list.
    pub fn on_symptoms_submit(&mut self, symptoms: SymptomList) -> Result<(), WizardError> {
        self.require(Screen::Symptoms, Screen::Personality)?;
        if symptoms.is_empty() {
            return Err(ValidationError::empty_field("symptoms").into());
        }

        self.move_to(Screen::Personality)?;
        self.session.record_symptoms(symptoms);
        self.scorer = PersonalityScorer::new();
        Ok(())
    }

    /// Selects an answer (0-based) on the current quiz question.
    pub fn select_answer(&mut self, option_index: usize) -> Result<(), WizardError> {
        self.require(Screen::Personality, Screen::Personality)?;
        self.scorer.select(option_index)?;
        Ok(())
    }

    /// Advances the quiz; on the fifth answer moves on to the diagnosis.
    pub fn advance_quiz<R>(&mut self, rng: &mut R) -> Result<Advance, WizardError>
    where
        R: RandomSource + ?Sized,
    {
        self.require(Screen::Personality, Screen::Diagnosis)?;
        let step = self.scorer.advance();
        if let Advance::Complete(score) = step {
            self.on_personality_complete(score, rng)?;
        }
        Ok(step)
    }

    /// Personality -> Diagnosis, drawing the diagnosis for this session.
    pub fn on_personality_complete<R>(
        &mut self,
        score: PersonalityScore,
        rng: &mut R,
    ) -> Result<&Diagnosis, WizardError>
    where
        R: RandomSource + ?Sized,
    {
        self.move_to(Screen::Diagnosis)?;
        let diagnosis = select_diagnosis(self.session.symptoms(), score, rng);
        self.session.record_score(score);
        self.session.record_diagnosis(diagnosis);

        self.session
            .diagnosis()
            .ok_or_else(|| ValidationError::empty_field("diagnosis").into())
    }

    /// Diagnosis -> Welcome, discarding everything from this pass.
    pub fn on_restart(&mut self) -> Result<(), WizardError> {
        self.move_to(Screen::Welcome)?;
        self.session = Session::new();
        self.collector = SymptomCollector::new();
        self.scorer = PersonalityScorer::new();
        Ok(())
    }

    fn require(&self, current: Screen, target: Screen) -> Result<(), WizardError> {
        if self.screen == current {
            Ok(())
        } else {
            Err(WizardError::invalid_transition(self.screen, target))
        }
    }

    fn move_to(&mut self, target: Screen) -> Result<(), WizardError> {
        self.screen = self
            .screen
            .transition_to(target)
            .map_err(|_| WizardError::invalid_transition(self.screen, target))?;
        Ok(())
    }
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new()
    }
}
