use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::models::{ThoughtEntry, ThoughtStats};

/// Confirmation previews are cut to this many characters
const PREVIEW_CHARS: usize = 50;

/// In-memory, insertion-ordered log of thoughts for one session
#[derive(Debug, Default)]
pub struct ThoughtLog {
    entries: Mutex<Vec<ThoughtEntry>>,
}

impl ThoughtLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self::default()
    }

    // Every operation leaves the vector consistent, so a poisoned lock is still usable.
    fn entries(&self) -> MutexGuard<'_, Vec<ThoughtEntry>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a thought and return the confirmation message
    pub fn record(&self, thought: &str) -> String {
        self.entries().push(ThoughtEntry::new(thought.to_string()));

        let mut chars = thought.char_indices();
        match chars.nth(PREVIEW_CHARS) {
            Some((cut, _)) => format!("Thought recorded: {}...", &thought[..cut]),
            None => format!("Thought recorded: {}", thought),
        }
    }

    /// Render every entry in insertion order, or `None` when the log is empty
    pub fn list(&self) -> Option<String> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }

        let transcript = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                format!(
                    "Thought #{} ({}):\n{}\n\n",
                    i + 1,
                    entry.formatted_timestamp(),
                    entry.text()
                )
            })
            .collect();
        Some(transcript)
    }

    /// Remove every entry and return how many were removed
    pub fn clear(&self) -> usize {
        let mut entries = self.entries();
        let count = entries.len();
        entries.clear();
        count
    }

    /// Compute statistics over the current entries, or `None` when the log is empty
    pub fn summarize(&self) -> Option<ThoughtStats> {
        let entries = self.entries();
        if entries.is_empty() {
            return None;
        }

        let total_thoughts = entries.len();
        let total_length: usize = entries.iter().map(ThoughtEntry::len).sum();
        // Average in hundredths, rounded half away from zero before any float conversion.
        let hundredths = (total_length * 200 + total_thoughts) / (2 * total_thoughts);

        // Strict comparison keeps the earliest entry on ties.
        let (longest_index, longest_length) = entries
            .iter()
            .map(ThoughtEntry::len)
            .enumerate()
            .fold((0, 0), |best, (i, len)| if len > best.1 { (i, len) } else { best });

        Some(ThoughtStats {
            total_thoughts,
            average_length: hundredths as f64 / 100.0,
            longest_thought_index: longest_index + 1,
            longest_thought_length: longest_length,
        })
    }

    /// Snapshot of the recorded entries
    pub fn entries_snapshot(&self) -> Vec<ThoughtEntry> {
        self.entries().clone()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}
