//! Symptom collection.
//!
//! The collector owns the editable form; a `SymptomList` is what it emits
//! once the user submits at least one non-blank entry.

mod collector;
mod symptom_list;

pub use collector::SymptomCollector;
pub use symptom_list::SymptomList;
