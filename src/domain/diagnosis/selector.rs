//! Diagnosis selector - template draw, score escalation and afterlife roll.

use serde::{Deserialize, Serialize};

use crate::domain::personality::PersonalityScore;
use crate::domain::symptoms::SymptomList;
use crate::ports::RandomSource;

use super::catalog::{DiagnosisTemplate, CATALOG};
use super::values::{Afterlife, Outcome, Severity};

/// Scores at or above this are always fatal and catastrophic.
pub const CATASTROPHIC_THRESHOLD: i32 = 20;

/// Scores at or above this (and below the catastrophic one) are rated Fatal.
pub const FATAL_THRESHOLD: i32 = 15;

const HELL_WEIGHT_PER_SYMPTOM: f64 = 0.2;
const HELL_WEIGHT_PER_SCORE_POINT: f64 = 0.02;

/// A drawn diagnosis.
///
/// `afterlife` is `Some` exactly when `outcome` is death.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnosis {
    pub disease: String,
    pub severity: Severity,
    pub time_left: String,
    pub description: String,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub afterlife: Option<Afterlife>,
}

impl Diagnosis {
    /// Copies a template with no afterlife assigned.
    pub fn from_template(template: &DiagnosisTemplate) -> Self {
        Self {
            disease: template.disease.to_string(),
            severity: template.severity,
            time_left: template.time_left.to_string(),
            description: template.description.to_string(),
            outcome: template.outcome,
            afterlife: None,
        }
    }

    /// Applies the score thresholds. In the 15..20 band severity is set to
    /// Fatal outright; below 15 the template stands.
    fn escalate(&mut self, score: PersonalityScore) {
        if score.value() >= CATASTROPHIC_THRESHOLD {
            self.outcome = Outcome::Death;
            self.severity = Severity::Catastrophic;
        } else if score.value() >= FATAL_THRESHOLD {
            self.severity = Severity::Fatal;
        }
    }
}

/// Chance of hell for a fatal diagnosis, clamped to `[0, 1]`.
///
/// Non-decreasing in both the symptom count and the score.
pub fn hell_probability(symptom_count: usize, score: PersonalityScore) -> f64 {
    let raw = symptom_count as f64 * HELL_WEIGHT_PER_SYMPTOM
        + f64::from(score.value()) * HELL_WEIGHT_PER_SCORE_POINT;
    raw.clamp(0.0, 1.0)
}

/// Draws a diagnosis for the given symptoms and score.
///
/// Total for every input, including an empty symptom list and scores
/// outside the quiz range. Consumes one draw for the template and a
/// second one only when the outcome is death.
pub fn select_diagnosis<R>(symptoms: &SymptomList, score: PersonalityScore, rng: &mut R) -> Diagnosis
where
    R: RandomSource + ?Sized,
{
    let template = &CATALOG[rng.pick_index(CATALOG.len())];
    let mut diagnosis = Diagnosis::from_template(template);

    diagnosis.escalate(score);

    if diagnosis.outcome.is_death() {
        let p_hell = hell_probability(symptoms.len(), score);
        diagnosis.afterlife = Some(if rng.next_unit() < p_hell {
            Afterlife::Hell
        } else {
            Afterlife::Heaven
        });
    }

    diagnosis
}
