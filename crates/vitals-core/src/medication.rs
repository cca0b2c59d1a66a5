//! Medication reminder list.

use tracing::debug;

use crate::text::TextField;

/// Form state of the medication modal: a pending entry and the
/// reminders added so far, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicationForm {
    pub pending: TextField,
    entries: Vec<String>,
}

impl MedicationForm {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pending: TextField::text(),
            entries: Vec::new(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Append the pending text as a new reminder.
    ///
    /// Blank input is ignored and left in place. Otherwise the text is
    /// stored exactly as typed and the input is cleared. Returns whether
    /// an entry was added.
    pub fn add(&mut self) -> bool {
        if self.pending.value().trim().is_empty() {
            return false;
        }
        self.entries.push(self.pending.value().to_owned());
        self.pending.clear();
        debug!(count = self.entries.len(), "medication reminder added");
        true
    }
}

impl Default for MedicationForm {
    fn default() -> Self {
        Self::new()
    }
}
