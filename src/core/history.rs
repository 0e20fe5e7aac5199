// Input history with a recall cursor.
//
// The cursor is `None` while the user is not recalling anything, which is
// the same as sitting one past the newest entry.

/// Result of moving the cursor forward
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall<'a> {
    /// Cursor was not recalling; nothing happened
    Idle,
    /// Cursor moved onto this entry
    Entry(&'a str),
    /// Cursor walked past the newest entry and is idle again
    Exhausted,
}

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, raw: impl Into<String>) {
        self.entries.push(raw.into());
    }

    /// Step back toward older entries. Clamps at the oldest.
    ///
    /// Returns `None` when there is no history at all.
    pub fn back(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;

        let index = match self.cursor {
            None => last,
            Some(i) => i.saturating_sub(1).min(last),
        };
        self.cursor = Some(index);
        Some(&self.entries[index])
    }

    /// Step forward toward newer entries
    pub fn forward(&mut self) -> Recall<'_> {
        let Some(i) = self.cursor else {
            return Recall::Idle;
        };

        let index = i + 1;
        if index >= self.entries.len() {
            self.cursor = None;
            Recall::Exhausted
        } else {
            self.cursor = Some(index);
            Recall::Entry(&self.entries[index])
        }
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(items: &[&str]) -> History {
        let mut history = History::new();
        for item in items {
            history.push(*item);
        }
        history
    }

    #[test]
    fn test_back_on_empty_is_noop() {
        let mut history = History::new();
        assert_eq!(history.back(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_forward_when_idle_is_noop() {
        let mut history = history(&["about"]);
        assert_eq!(history.forward(), Recall::Idle);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_walk_back_and_forth() {
        let mut history = history(&["about", "skills", "contact"]);

        assert_eq!(history.back(), Some("contact"));
        assert_eq!(history.back(), Some("skills"));
        assert_eq!(history.forward(), Recall::Entry("contact"));
        assert_eq!(history.forward(), Recall::Exhausted);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn test_back_clamps_at_oldest() {
        let mut history = history(&["about", "skills"]);

        history.back();
        history.back();
        assert_eq!(history.back(), Some("about"));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn test_reset_cursor() {
        let mut history = history(&["about"]);
        history.back();
        history.reset_cursor();
        assert_eq!(history.cursor(), None);
        assert_eq!(history.len(), 1);
    }
}
