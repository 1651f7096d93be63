//! SymptomCollector - the editable symptom form.

use super::symptom_list::{is_blank, SymptomList};

/// Editable list of symptom fields plus a freeform "additional info" box.
///
/// There is always at least one field. Submission drops blank fields and
/// yields nothing if no entry survives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymptomCollector {
    fields: Vec<String>,
    additional_info: String,
}

impl SymptomCollector {
    /// Creates a collector with a single empty field.
    pub fn new() -> Self {
        Self {
            fields: vec![String::new()],
            additional_info: String::new(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn additional_info(&self) -> &str {
        &self.additional_info
    }

    /// Appends a new empty field.
    pub fn add_field(&mut self) {
        self.fields.push(String::new());
    }

    /// Replaces the text of a field. Out-of-range indexes are ignored.
    pub fn update_field(&mut self, index: usize, value: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            *field = value.into();
        }
    }

    /// Removes a field.
    ///
    /// No-op when only one field remains or the index is out of range.
    pub fn remove_field(&mut self, index: usize) {
        if self.fields.len() > 1 && index < self.fields.len() {
            self.fields.remove(index);
        }
    }

    pub fn set_additional_info(&mut self, value: impl Into<String>) {
        self.additional_info = value.into();
    }

    /// Writes into the last field if it is blank, otherwise appends a field.
    ///
    /// Convenience for line-oriented front ends. Returns the index written.
    pub fn fill_next(&mut self, value: impl Into<String>) -> usize {
        let last = self.fields.len() - 1;
        if is_blank(&self.fields[last]) {
            self.fields[last] = value.into();
            last
        } else {
            self.fields.push(value.into());
            last + 1
        }
    }

    /// True if submitting would emit a non-empty list.
    pub fn can_submit(&self) -> bool {
        self.fields.iter().any(|f| !is_blank(f)) || !is_blank(&self.additional_info)
    }

    /// Builds the submitted list, or `None` if everything is blank.
    pub fn submit(&self) -> Option<SymptomList> {
        let mut entries: Vec<String> = self.fields.clone();
        if !is_blank(&self.additional_info) {
            entries.push(self.additional_info.clone());
        }

        let list = SymptomList::from_non_blank(entries);
        if list.is_empty() {
            None
        } else {
            Some(list)
        }
    }
}

impl Default for SymptomCollector {
    fn default() -> Self {
        Self::new()
    }
}
