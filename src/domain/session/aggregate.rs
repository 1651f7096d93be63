//! Session aggregate.
//!
//! Holds everything gathered during one pass through the wizard. Owned by
//! the `Wizard` and replaced wholesale on restart; nothing is persisted.

use serde::Serialize;

use crate::domain::diagnosis::Diagnosis;
use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::personality::PersonalityScore;
use crate::domain::symptoms::SymptomList;

/// One user's symptoms, score and diagnosis.
///
/// # Invariants
///
/// - `score` is only set once `symptoms` is non-empty
/// - `diagnosis` is only set once `score` is set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Session {
    id: SessionId,
    started_at: Timestamp,
    symptoms: SymptomList,
    score: Option<PersonalityScore>,
    diagnosis: Option<Diagnosis>,
}

impl Session {
    /// A fresh, empty session.
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            started_at: Timestamp::now(),
            symptoms: SymptomList::empty(),
            score: None,
            diagnosis: None,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    pub fn started_at(&self) -> &Timestamp {
        &self.started_at
    }

    pub fn symptoms(&self) -> &SymptomList {
        &self.symptoms
    }

    pub fn score(&self) -> Option<PersonalityScore> {
        self.score
    }

    pub fn diagnosis(&self) -> Option<&Diagnosis> {
        self.diagnosis.as_ref()
    }

    /// True if nothing has been gathered yet.
    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty() && self.score.is_none() && self.diagnosis.is_none()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations (driven by the wizard)
    // ─────────────────────────────────────────────────────────────────────────

    pub(crate) fn record_symptoms(&mut self, symptoms: SymptomList) {
        self.symptoms = symptoms;
    }

    pub(crate) fn record_score(&mut self, score: PersonalityScore) {
        self.score = Some(score);
    }

    pub(crate) fn record_diagnosis(&mut self, diagnosis: Diagnosis) {
        self.diagnosis = Some(diagnosis);
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
