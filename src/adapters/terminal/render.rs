//! Plain-text renderings of each screen.

use std::io::{self, Write};

use crate::domain::diagnosis::{
    afterlife_blurb, afterlife_headline, Diagnosis, SeverityTone, DISCLAIMER,
};
use crate::domain::personality::PersonalityScorer;
use crate::domain::session::Screen;
use crate::domain::symptoms::{SymptomCollector, SymptomList};

const RULE: &str = "────────────────────────────────────────────────────────────";
const PROGRESS_WIDTH: usize = 20;

fn header(out: &mut impl Write, screen: Screen) -> io::Result<()> {
    writeln!(out, "{RULE}")?;
    writeln!(out, "  {}", screen.title())?;
    writeln!(out, "  {}", screen.subtitle())
}

pub(super) fn welcome(out: &mut impl Write) -> io::Result<()> {
    header(out, Screen::Welcome)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Enter your symptoms and let our advanced AI diagnose you with the most catastrophic diseases imaginable."
    )?;
    writeln!(
        out,
        "Your personality will determine just how doomed you really are."
    )?;
    writeln!(out)?;
    writeln!(out, "⚠️  Medical Disclaimer")?;
    writeln!(
        out,
        "This app is designed for entertainment purposes only. All diagnoses are completely fabricated"
    )?;
    writeln!(
        out,
        "and should not be used for actual medical advice. Please consult real doctors for real problems."
    )?;
    writeln!(out)?;
    write!(out, "Press Enter to Begin Medical Assessment (q to quit): ")?;
    out.flush()
}

pub(super) fn symptoms_intro(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    header(out, Screen::Symptoms)?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Type one symptom per line. Commands: /remove N, /info TEXT, /list, /done"
    )?;
    out.flush()
}

pub(super) fn symptom_fields(out: &mut impl Write, form: &SymptomCollector) -> io::Result<()> {
    writeln!(out, "Primary Symptoms")?;
    for (i, field) in form.fields().iter().enumerate() {
        let shown = if field.trim().is_empty() { "(blank)" } else { field.as_str() };
        writeln!(out, "  {}. {}", i + 1, shown)?;
    }
    if !form.additional_info().trim().is_empty() {
        writeln!(out, "Additional Information: {}", form.additional_info())?;
    }
    out.flush()
}

pub(super) fn question(out: &mut impl Write, scorer: &PersonalityScorer) -> io::Result<()> {
    let Some(question) = scorer.current_question() else {
        return Ok(());
    };

    let filled = PROGRESS_WIDTH * usize::from(scorer.progress_percent()) / 100;
    writeln!(out)?;
    header(out, Screen::Personality)?;
    writeln!(
        out,
        "  [{}{}] Question {} of {}",
        "#".repeat(filled),
        ".".repeat(PROGRESS_WIDTH - filled),
        scorer.question_number(),
        scorer.question_count()
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", question.prompt)?;
    for (i, option) in question.options.iter().enumerate() {
        writeln!(out, "  {}) {}", i + 1, option.text)?;
    }
    write!(out, "{} [1-{}]: ", scorer.advance_label(), question.options.len())?;
    out.flush()
}

pub(super) fn analyzing(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "Analyzing Your Condition...")?;
    writeln!(out, "Our advanced AI is determining your fate...")?;
    out.flush()
}

pub(super) fn diagnosis(
    out: &mut impl Write,
    diagnosis: &Diagnosis,
    symptoms: &SymptomList,
    color: bool,
) -> io::Result<()> {
    writeln!(out)?;
    header(out, Screen::Diagnosis)?;
    writeln!(out, "{RULE}")?;
    writeln!(out, "{}", diagnosis.disease)?;
    writeln!(out, "{}", severity_badge(diagnosis, color))?;
    writeln!(out)?;
    writeln!(out, "Time Remaining: {}", diagnosis.time_left)?;
    writeln!(out, "Prognosis: {}", diagnosis.description)?;
    writeln!(out, "Your Symptoms Led To:")?;
    for symptom in symptoms.iter() {
        writeln!(out, "  • {}", symptom)?;
    }

    if let Some(afterlife) = diagnosis.afterlife {
        writeln!(out)?;
        writeln!(out, "{}", afterlife_headline(afterlife))?;
        writeln!(out, "{}", afterlife_blurb(afterlife))?;
    }

    writeln!(out)?;
    writeln!(out, "{DISCLAIMER}")?;
    write!(out, "Get Another Opinion? [y/N]: ")?;
    out.flush()
}

pub(super) fn goodbye(out: &mut impl Write) -> io::Result<()> {
    writeln!(out)?;
    writeln!(
        out,
        "© 2024 Hypochondriapp - Making hypochondria fun since today"
    )?;
    out.flush()
}

fn severity_badge(diagnosis: &Diagnosis, color: bool) -> String {
    let label = diagnosis.severity.label();
    if color {
        let tone = SeverityTone::from(diagnosis.severity);
        format!("\x1b[{}m {} \x1b[0m", tone.ansi_code(), label)
    } else {
        format!("[{}]", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::diagnosis::{Afterlife, CATALOG};

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn question_shows_progress_and_options() {
        let scorer = PersonalityScorer::new();
        let text = rendered(|out| question(out, &scorer));

        assert!(text.contains("[####................] Question 1 of 5"));
        assert!(text.contains("How often do you worry about your health?"));
        assert!(text.contains("  5) Constantly"));
        assert!(text.ends_with("Next Question [1-5]: "));
    }

    #[test]
    fn finished_scorer_renders_nothing() {
        let mut scorer = PersonalityScorer::new();
        for _ in 0..5 {
            scorer.select(0).unwrap();
            scorer.advance();
        }
        assert_eq!(rendered(|out| question(out, &scorer)), "");
    }

    #[test]
    fn fields_mark_blank_entries() {
        let mut form = SymptomCollector::new();
        form.fill_next("cough");
        form.add_field();
        form.set_additional_info("since birth");
        let text = rendered(|out| symptom_fields(out, &form));

        assert!(text.contains("  1. cough"));
        assert!(text.contains("  2. (blank)"));
        assert!(text.contains("Additional Information: since birth"));
    }

    #[test]
    fn diagnosis_card_includes_afterlife_only_when_present() {
        let symptoms = SymptomList::new(vec!["sneezing".into()]).unwrap();

        let mut fatal = Diagnosis::from_template(&CATALOG[0]);
        fatal.afterlife = Some(Afterlife::Hell);
        let text = rendered(|out| diagnosis(out, &fatal, &symptoms, false));
        assert!(text.contains("Acute Existential Dread Syndrome"));
        assert!(text.contains("[Terminal]"));
        assert!(text.contains("  • sneezing"));
        assert!(text.contains("Welcome to Eternal Damnation!"));

        let chronic = Diagnosis::from_template(&CATALOG[2]);
        let text = rendered(|out| diagnosis(out, &chronic, &symptoms, false));
        assert!(text.contains("Time Remaining: Until Friday"));
        assert!(!text.contains("Heaven"));
        assert!(!text.contains("Damnation"));
    }

    #[test]
    fn screens_open_with_their_title() {
        let text = rendered(|out| welcome(out));
        assert!(text.starts_with(&format!("{RULE}\n  HYPOCHONDRIAPP\n")));

        let text = rendered(|out| symptoms_intro(out));
        assert!(text.contains("  Medical Symptom Assessment\n"));

        let scorer = PersonalityScorer::new();
        let text = rendered(|out| question(out, &scorer));
        assert!(text.contains("  Psychological Assessment\n"));

        let symptoms = SymptomList::new(vec!["cough".into()]).unwrap();
        let d = Diagnosis::from_template(&CATALOG[2]);
        let text = rendered(|out| diagnosis(out, &d, &symptoms, false));
        assert!(text.contains("  DIAGNOSIS COMPLETE\n  Medical Assessment Results\n"));
    }

    #[test]
    fn colored_badge_uses_ansi_codes() {
        let d = Diagnosis::from_template(&CATALOG[3]);
        assert_eq!(severity_badge(&d, true), "\x1b[1;37;41m Catastrophic \x1b[0m");
        assert_eq!(severity_badge(&d, false), "[Catastrophic]");
    }
}
