//! The six diagnosis templates.

use super::values::{Outcome, Severity};

/// Read-only diagnosis record a draw starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagnosisTemplate {
    pub disease: &'static str,
    pub severity: Severity,
    pub time_left: &'static str,
    pub description: &'static str,
    pub outcome: Outcome,
}

pub static CATALOG: [DiagnosisTemplate; 6] = [
    DiagnosisTemplate {
        disease: "Acute Existential Dread Syndrome",
        severity: Severity::Terminal,
        time_left: "3-7 days",
        description: "A rare condition where the patient realizes the futility of existence while experiencing mild headaches.",
        outcome: Outcome::Death,
    },
    DiagnosisTemplate {
        disease: "Catastrophic Paper Cut Disease",
        severity: Severity::Fatal,
        time_left: "2 hours",
        description: "What appeared to be a simple paper cut has evolved into a civilization-ending plague.",
        outcome: Outcome::Death,
    },
    DiagnosisTemplate {
        disease: "Terminal Monday-itis",
        severity: Severity::Critical,
        time_left: "Until Friday",
        description: "An incurable condition that affects millions every week. Symptoms worsen during alarm clock exposure.",
        outcome: Outcome::ChronicSuffering,
    },
    DiagnosisTemplate {
        disease: "Malignant Procrastination Disorder",
        severity: Severity::Catastrophic,
        time_left: "Eventually",
        description: "Patient will die from putting off important medical treatment. Death scheduled for sometime next week.",
        outcome: Outcome::Death,
    },
    DiagnosisTemplate {
        disease: "Acute Netflix Dependency",
        severity: Severity::Terminal,
        time_left: "One more episode",
        description: "Fatal addiction to binge-watching. Patient's eyes will eventually fall out from screen exposure.",
        outcome: Outcome::ChronicSuffering,
    },
    DiagnosisTemplate {
        disease: "Spontaneous Meme Overdose",
        severity: Severity::Critical,
        time_left: "LOL seconds",
        description: "Patient has consumed too many internet memes. Brain cells are converting to emojis.",
        outcome: Outcome::Death,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_six_distinct_diseases() {
        let mut names: Vec<_> = CATALOG.iter().map(|t| t.disease).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 6);
    }

    #[test]
    fn two_templates_end_in_chronic_suffering() {
        let suffering = CATALOG
            .iter()
            .filter(|t| t.outcome == Outcome::ChronicSuffering)
            .count();
        assert_eq!(suffering, 2);
        assert!(CATALOG.iter().all(|t| t.outcome != Outcome::MildDiscomfort));
    }
}
