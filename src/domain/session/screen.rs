//! Screen enum for the four wizard steps.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Which screen the wizard is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Welcome,
    Symptoms,
    Personality,
    Diagnosis,
}

impl Screen {
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Welcome,
            Screen::Symptoms,
            Screen::Personality,
            Screen::Diagnosis,
        ]
    }

    /// Heading shown at the top of the screen.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Welcome => "HYPOCHONDRIAPP",
            Screen::Symptoms => "Medical Symptom Assessment",
            Screen::Personality => "Psychological Assessment",
            Screen::Diagnosis => "DIAGNOSIS COMPLETE",
        }
    }

    /// Line printed under the title.
    pub fn subtitle(&self) -> &'static str {
        match self {
            Screen::Welcome => "The Medical App That Always Finds The Worst",
            Screen::Symptoms => {
                "Please describe your symptoms in detail for the most accurate diagnosis"
            }
            Screen::Personality => "Your mental state affects diagnosis severity. Answer honestly.",
            Screen::Diagnosis => "Medical Assessment Results",
        }
    }
}

impl StateMachine for Screen {
    fn can_transition_to(&self, target: &Self) -> bool {
        use Screen::*;
        matches!(
            (self, target),
            (Welcome, Symptoms)
                | (Symptoms, Personality)
                | (Personality, Diagnosis)
                | (Diagnosis, Welcome)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use Screen::*;
        match self {
            Welcome => vec![Symptoms],
            Symptoms => vec![Personality],
            Personality => vec![Diagnosis],
            Diagnosis => vec![Welcome],
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Screen::Welcome => "welcome",
            Screen::Symptoms => "symptoms",
            Screen::Personality => "personality",
            Screen::Diagnosis => "diagnosis",
        };
        write!(f, "{}", s)
    }
}
