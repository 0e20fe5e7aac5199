/// Interactive session state
///
/// Owns the input buffer, transcript and history for one session. Each
/// public method is one event; the host feeds them in order.

use crate::core::dispatcher::Dispatcher;
use crate::core::history::{History, Recall};
use crate::core::transcript::Transcript;
use crate::registry::content::WELCOME;
use crate::registry::{Effect, Line};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Session {
    dispatcher: Dispatcher,
    input: String,
    transcript: Transcript,
    history: History,
}

impl Session {
    /// Start a session with an empty transcript
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            input: String::new(),
            transcript: Transcript::new(),
            history: History::new(),
        }
    }

    /// Append the welcome banner as an entry with no input
    pub fn greet(&mut self) {
        let lines = WELCOME.iter().map(|text| Line::plain(*text)).collect();
        self.transcript.push("", lines);
    }

    /// Commit the input buffer
    ///
    /// Non-blank input is remembered in history as typed. The buffer is
    /// dispatched even when empty. A clearing command empties the transcript
    /// instead of adding to it.
    ///
    /// # Returns
    /// * The effect of the dispatched command, for the host to act on
    pub fn submit(&mut self) -> Effect {
        let raw = std::mem::take(&mut self.input);

        if !raw.trim().is_empty() {
            self.history.push(raw.clone());
        }

        let response = self.dispatcher.dispatch(&raw);
        match response.effect {
            Effect::ClearTranscript => self.clear(),
            _ => self.transcript.push(raw, response.lines),
        }

        self.history.reset_cursor();
        response.effect
    }

    /// Load the previous history entry into the buffer
    ///
    /// Returns `false` (and changes nothing) when history is empty.
    pub fn recall_previous(&mut self) -> bool {
        match self.history.back() {
            Some(entry) => {
                self.input = entry.to_string();
                debug!(cursor = ?self.history.cursor(), "recalled previous");
                true
            }
            None => false,
        }
    }

    /// Load the next history entry into the buffer
    ///
    /// Walking past the newest entry empties the buffer. Returns `false`
    /// when not currently recalling.
    pub fn recall_next(&mut self) -> bool {
        match self.history.forward() {
            Recall::Idle => false,
            Recall::Entry(entry) => {
                self.input = entry.to_string();
                debug!(cursor = ?self.history.cursor(), "recalled next");
                true
            }
            Recall::Exhausted => {
                self.input.clear();
                true
            }
        }
    }

    /// Empty the transcript. History is left alone.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn insert(&mut self, c: char) {
        self.input.push(c);
    }

    /// Delete the last character. Returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        self.input.pop().is_some()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }
}
