/// Session transcript
///
/// Append-only record of what was typed and what came back.

use crate::registry::Line;
use serde::Serialize;

/// One command and its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    pub raw_input: String,
    pub output: Vec<Line>,
}

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, raw_input: impl Into<String>, output: Vec<Line>) {
        self.entries.push(TranscriptEntry {
            raw_input: raw_input.into(),
            output,
        });
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
