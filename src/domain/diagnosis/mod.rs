//! Diagnosis selection.
//!
//! A diagnosis is one of six catalog templates, escalated by the
//! personality score and, when fatal, sent to heaven or hell.
//!
//! - `values` - Severity, outcome and afterlife enums
//! - `catalog` - The fixed template catalog
//! - `selector` - Template draw, escalation and afterlife roll
//! - `presentation` - Labels and blurbs for the result screen

mod catalog;
mod presentation;
mod selector;
mod values;

pub use catalog::{DiagnosisTemplate, CATALOG};
pub use presentation::{afterlife_blurb, afterlife_headline, SeverityTone, DISCLAIMER};
pub use selector::{
    hell_probability, select_diagnosis, Diagnosis, CATASTROPHIC_THRESHOLD, FATAL_THRESHOLD,
};
pub use values::{Afterlife, Outcome, Severity};
