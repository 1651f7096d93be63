//! Property tests for diagnosis selection.

use proptest::prelude::*;

use hypochondriapp::adapters::ScriptedRandomSource;
use hypochondriapp::domain::diagnosis::{
    hell_probability, select_diagnosis, Afterlife, Outcome, Severity, CATALOG,
};
use hypochondriapp::domain::personality::PersonalityScore;
use hypochondriapp::domain::symptoms::SymptomList;

fn symptoms(count: usize) -> SymptomList {
    SymptomList::new((0..count).map(|i| format!("symptom {}", i + 1)).collect())
        .expect("generated symptoms are not blank")
}

fn template_for(draw: f64) -> usize {
    ((draw * CATALOG.len() as f64) as usize).min(CATALOG.len() - 1)
}

proptest! {
    #[test]
    fn high_scores_are_always_catastrophic_deaths(
        count in 0usize..8,
        score in 20i32..60,
        draw in 0.0f64..1.0,
        roll in 0.0f64..1.0,
    ) {
        let mut rng = ScriptedRandomSource::new(vec![draw, roll]);
        let diagnosis = select_diagnosis(&symptoms(count), PersonalityScore::new(score), &mut rng);

        prop_assert_eq!(diagnosis.outcome, Outcome::Death);
        prop_assert_eq!(diagnosis.severity, Severity::Catastrophic);
        prop_assert!(diagnosis.afterlife.is_some());
    }

    #[test]
    fn middle_scores_are_fatal_with_template_outcome(
        count in 0usize..8,
        score in 15i32..20,
        draw in 0.0f64..1.0,
        roll in 0.0f64..1.0,
    ) {
        let mut rng = ScriptedRandomSource::new(vec![draw, roll]);
        let diagnosis = select_diagnosis(&symptoms(count), PersonalityScore::new(score), &mut rng);
        let template = &CATALOG[template_for(draw)];

        prop_assert_eq!(diagnosis.severity, Severity::Fatal);
        prop_assert_eq!(diagnosis.outcome, template.outcome);
    }

    #[test]
    fn low_scores_keep_the_template(
        count in 0usize..8,
        score in -10i32..15,
        draw in 0.0f64..1.0,
        roll in 0.0f64..1.0,
    ) {
        let mut rng = ScriptedRandomSource::new(vec![draw, roll]);
        let diagnosis = select_diagnosis(&symptoms(count), PersonalityScore::new(score), &mut rng);
        let template = &CATALOG[template_for(draw)];

        prop_assert_eq!(diagnosis.disease.as_str(), template.disease);
        prop_assert_eq!(diagnosis.severity, template.severity);
        prop_assert_eq!(diagnosis.outcome, template.outcome);
    }

    #[test]
    fn afterlife_present_exactly_on_death(
        count in 0usize..8,
        score in 0i32..30,
        draw in 0.0f64..1.0,
        roll in 0.0f64..1.0,
    ) {
        let mut rng = ScriptedRandomSource::new(vec![draw, roll]);
        let diagnosis = select_diagnosis(&symptoms(count), PersonalityScore::new(score), &mut rng);

        prop_assert_eq!(diagnosis.afterlife.is_some(), diagnosis.outcome.is_death());
        let expected_draws = if diagnosis.outcome.is_death() { 2 } else { 1 };
        prop_assert_eq!(rng.taken(), expected_draws);
    }

    #[test]
    fn severity_never_drops_below_the_template(
        score in 0i32..30,
        draw in 0.0f64..1.0,
    ) {
        let mut rng = ScriptedRandomSource::new(vec![draw, 0.5]);
        let diagnosis = select_diagnosis(&symptoms(1), PersonalityScore::new(score), &mut rng);
        let template = &CATALOG[template_for(draw)];

        if score < 15 || template.severity <= Severity::Fatal {
            prop_assert!(diagnosis.severity >= template.severity);
        }
    }

    #[test]
    fn hell_probability_is_clamped_and_non_decreasing(
        count in 0usize..20,
        score in -50i32..80,
    ) {
        let p = hell_probability(count, PersonalityScore::new(score));
        prop_assert!((0.0..=1.0).contains(&p));
        prop_assert!(hell_probability(count + 1, PersonalityScore::new(score)) >= p);
        prop_assert!(hell_probability(count, PersonalityScore::new(score + 1)) >= p);
    }
}

#[test]
fn five_symptoms_at_top_score_always_go_to_hell() {
    assert_eq!(hell_probability(5, PersonalityScore::new(25)), 1.0);

    for roll in [0.0, 0.5, 0.999_999] {
        let mut rng = ScriptedRandomSource::new(vec![0.0, roll]);
        let diagnosis = select_diagnosis(&symptoms(5), PersonalityScore::new(25), &mut rng);
        assert_eq!(
            diagnosis.afterlife,
            Some(Afterlife::Hell)
        );
    }
}

#[test]
fn empty_symptoms_with_high_score_still_resolve() {
    let p = hell_probability(0, PersonalityScore::new(22));
    assert!((p - 0.44).abs() < 1e-9);

    let mut rng = ScriptedRandomSource::new(vec![0.5, 0.43]);
    let diagnosis = select_diagnosis(&SymptomList::empty(), PersonalityScore::new(22), &mut rng);
    assert_eq!(diagnosis.outcome, Outcome::Death);
    assert_eq!(diagnosis.severity, Severity::Catastrophic);
    assert_eq!(
        diagnosis.afterlife,
        Some(Afterlife::Hell)
    );
}
