//! WizardService - drives the wizard with injected randomness and timing.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::RevealConfig;
use crate::domain::diagnosis::Diagnosis;
use crate::domain::personality::{Advance, PersonalityScore};
use crate::domain::session::{Screen, Session, Wizard, WizardError};
use crate::domain::symptoms::{SymptomCollector, SymptomList};
use crate::ports::{RandomSource, RevealTimer};

/// Owns the single wizard of this process.
pub struct WizardService {
    wizard: Wizard,
    rng: Box<dyn RandomSource>,
    timer: Arc<dyn RevealTimer>,
    reveal_delay: Duration,
}

impl WizardService {
    pub fn new(
        rng: Box<dyn RandomSource>,
        timer: Arc<dyn RevealTimer>,
        reveal: &RevealConfig,
    ) -> Self {
        Self {
            wizard: Wizard::new(),
            rng,
            timer,
            reveal_delay: reveal.delay(),
        }
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn screen(&self) -> Screen {
        self.wizard.screen()
    }

    pub fn session(&self) -> &Session {
        self.wizard.session()
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    pub fn start(&mut self) -> Result<(), WizardError> {
        self.wizard.start()?;
        info!(
            session_id = %self.session().id(),
            started_at = %self.session().started_at(),
            "Assessment started"
        );
        Ok(())
    }

    /// The symptom form, when the symptoms screen is showing.
    pub fn symptom_form(&mut self) -> Option<&mut SymptomCollector> {
        self.wizard.collector_mut()
    }

    /// Submits the symptom form. `Ok(false)` means nothing was submitted.
    pub fn submit_symptoms(&mut self) -> Result<bool, WizardError> {
        let submitted = self.wizard.submit_symptoms()?;
        if submitted {
            self.log_symptoms();
        } else {
            debug!(session_id = %self.session().id(), "Blank symptom form not submitted");
        }
        Ok(submitted)
    }

    /// Symptom callback for front ends that keep their own form state.
    pub fn on_symptoms_submit(&mut self, symptoms: SymptomList) -> Result<(), WizardError> {
        self.wizard.on_symptoms_submit(symptoms)?;
        self.log_symptoms();
        Ok(())
    }

    /// Selects an option (0-based) and advances the quiz in one step.
    ///
    /// On the fifth answer the diagnosis is drawn immediately; call
    /// `reveal_diagnosis` to wait out the reveal delay and read it.
    pub fn answer(&mut self, option_index: usize) -> Result<Advance, WizardError> {
        self.wizard.select_answer(option_index)?;
        let step = self.wizard.advance_quiz(self.rng.as_mut())?;

        match step {
            Advance::NextQuestion(index) => {
                debug!(session_id = %self.session().id(), question = index + 1, "Next question");
            }
            Advance::Complete(score) => self.log_diagnosis(score),
            Advance::Blocked => {}
        }
        Ok(step)
    }

    /// Score callback: draws the diagnosis, waits, and returns it.
    pub async fn complete_personality(
        &mut self,
        score: PersonalityScore,
    ) -> Result<Diagnosis, WizardError> {
        self.wizard
            .on_personality_complete(score, self.rng.as_mut())?;
        self.log_diagnosis(score);
        self.reveal_diagnosis().await
    }

    /// Waits the reveal delay, then hands back the session's diagnosis.
    pub async fn reveal_diagnosis(&self) -> Result<Diagnosis, WizardError> {
        let diagnosis = self
            .session()
            .diagnosis()
            .cloned()
            .ok_or_else(|| WizardError::invalid_transition(self.screen(), Screen::Diagnosis))?;

        self.timer.wait(self.reveal_delay).await;
        Ok(diagnosis)
    }

    /// Back to the welcome screen with an empty session.
    pub fn restart(&mut self) -> Result<(), WizardError> {
        let previous = *self.session().id();
        let previous_started_at = *self.session().started_at();
        self.wizard.on_restart()?;
        info!(
            previous_session_id = %previous,
            previous_duration_ms = self.session().started_at().millis_since(&previous_started_at),
            session_id = %self.session().id(),
            started_at = %self.session().started_at(),
            "Session restarted"
        );
        Ok(())
    }

    fn log_symptoms(&self) {
        info!(
            session_id = %self.session().id(),
            symptom_count = self.session().symptoms().len(),
            "Symptoms submitted"
        );
    }

    fn log_diagnosis(&self, score: PersonalityScore) {
        if !score.is_in_quiz_range() {
            warn!(
                session_id = %self.session().id(),
                score = score.value(),
                min = PersonalityScore::MIN,
                max = PersonalityScore::MAX,
                "Score outside the quiz range"
            );
        }
        if let Some(diagnosis) = self.session().diagnosis() {
            info!(
                session_id = %self.session().id(),
                score = score.value(),
                disease = %diagnosis.disease,
                severity = %diagnosis.severity,
                outcome = %diagnosis.outcome,
                afterlife = ?diagnosis.afterlife,
                "Diagnosis drawn"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InstantRevealTimer, ScriptedRandomSource};
    use crate::domain::diagnosis::{Afterlife, Outcome, Severity, CATALOG};

    fn service(draws: Vec<f64>, timer: &InstantRevealTimer) -> WizardService {
        WizardService::new(
            Box::new(ScriptedRandomSource::new(draws)),
            Arc::new(timer.clone()),
            &RevealConfig::default(),
        )
    }

    #[tokio::test]
    async fn quiz_completion_reveals_after_configured_delay() {
        let timer = InstantRevealTimer::new();
        let mut svc = service(vec![0.0, 0.99], &timer);

        svc.start().unwrap();
        svc.symptom_form().unwrap().fill_next("headache");
        assert!(svc.submit_symptoms().unwrap());

        for i in 0..4 {
            assert_eq!(svc.answer(0).unwrap(), Advance::NextQuestion(i + 1));
        }
        assert_eq!(
            svc.answer(0).unwrap(),
            Advance::Complete(PersonalityScore::new(5))
        );

        let diagnosis = svc.reveal_diagnosis().await.unwrap();
        assert_eq!(diagnosis.disease, CATALOG[0].disease);
        assert_eq!(diagnosis.severity, Severity::Terminal);
        assert_eq!(diagnosis.afterlife, Some(Afterlife::Heaven));
        assert_eq!(timer.requested(), vec![Duration::from_secs(2)]);
    }

    #[tokio::test]
    async fn score_callback_draws_and_waits() {
        let timer = InstantRevealTimer::new();
        let mut svc = service(vec![0.5, 0.0], &timer);
        svc.start().unwrap();
        svc.on_symptoms_submit(SymptomList::new(vec!["cough".into()]).unwrap())
            .unwrap();

        let diagnosis = svc
            .complete_personality(PersonalityScore::new(22))
            .await
            .unwrap();

        assert_eq!(diagnosis.outcome, Outcome::Death);
        assert_eq!(diagnosis.severity, Severity::Catastrophic);
        assert_eq!(diagnosis.afterlife, Some(Afterlife::Hell));
        assert_eq!(svc.session().diagnosis(), Some(&diagnosis));
        assert_eq!(timer.requested().len(), 1);
    }

    #[tokio::test]
    async fn reveal_before_diagnosis_is_rejected_without_waiting() {
        let timer = InstantRevealTimer::new();
        let svc = service(vec![0.5], &timer);

        assert_eq!(
            svc.reveal_diagnosis().await,
            Err(WizardError::invalid_transition(Screen::Welcome, Screen::Diagnosis))
        );
        assert!(timer.requested().is_empty());
    }

    #[tokio::test]
    async fn restart_clears_the_session() {
        let timer = InstantRevealTimer::new();
        let mut svc = service(vec![0.5], &timer);
        svc.start().unwrap();
        svc.on_symptoms_submit(SymptomList::new(vec!["rash".into()]).unwrap())
            .unwrap();
        svc.complete_personality(PersonalityScore::new(10))
            .await
            .unwrap();

        let first_id = *svc.session().id();
        let first_started_at = *svc.session().started_at();

        svc.restart().unwrap();

        assert_eq!(svc.screen(), Screen::Welcome);
        assert!(svc.session().is_empty());
        assert_ne!(svc.session().id(), &first_id);
        assert!(*svc.session().started_at() >= first_started_at);
    }

    #[tokio::test]
    async fn out_of_range_score_is_still_diagnosed() {
        let timer = InstantRevealTimer::new();
        let mut svc = service(vec![0.5, 0.0], &timer);
        svc.start().unwrap();
        svc.on_symptoms_submit(SymptomList::new(vec!["hiccups".into()]).unwrap())
            .unwrap();

        let score = PersonalityScore::new(40);
        assert!(!score.is_in_quiz_range());
        let diagnosis = svc.complete_personality(score).await.unwrap();

        assert_eq!(diagnosis.severity, Severity::Catastrophic);
        assert_eq!(svc.session().score(), Some(score));
    }

    #[test]
    fn blank_form_submission_stays_on_symptoms() {
        let timer = InstantRevealTimer::new();
        let mut svc = service(vec![0.5], &timer);
        svc.start().unwrap();

        assert_eq!(svc.submit_symptoms(), Ok(false));
        assert_eq!(svc.screen(), Screen::Symptoms);
    }
}
