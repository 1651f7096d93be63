//! Enumerated diagnosis attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Narrative gravity of a diagnosis, in ascending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Terminal,
    Fatal,
    Catastrophic,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Terminal => "Terminal",
            Severity::Fatal => "Fatal",
            Severity::Catastrophic => "Catastrophic",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How the story ends for the patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    #[serde(rename = "death")]
    Death,
    #[serde(rename = "chronic suffering")]
    ChronicSuffering,
    #[serde(rename = "mild discomfort")]
    MildDiscomfort,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Death => "death",
            Outcome::ChronicSuffering => "chronic suffering",
            Outcome::MildDiscomfort => "mild discomfort",
        }
    }

    pub fn is_death(&self) -> bool {
        matches!(self, Outcome::Death)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Where the patient ends up. Only assigned when the outcome is death.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Afterlife {
    Heaven,
    Hell,
}

impl fmt::Display for Afterlife {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Afterlife::Heaven => "heaven",
            Afterlife::Hell => "hell",
        };
        write!(f, "{}", s)
    }
}
