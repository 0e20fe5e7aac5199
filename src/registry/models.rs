/// Data models for the command registry
///
/// Output is kept as styled segments rather than raw markup so that text
/// typed by the user can only ever end up in an unstyled segment.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Palette available to static content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
    Purple,
    Gray,
}

impl Color {
    /// Marker name used in content, e.g. `[cyan]`
    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
            Color::Yellow => "yellow",
            Color::Cyan => "cyan",
            Color::Purple => "purple",
            Color::Gray => "gray",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "white" => Some(Color::White),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "blue" => Some(Color::Blue),
            "yellow" => Some(Color::Yellow),
            "cyan" => Some(Color::Cyan),
            "purple" => Some(Color::Purple),
            "gray" => Some(Color::Gray),
            _ => None,
        }
    }
}

/// A run of text with at most one color
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub color: Option<Color>,
    pub text: String,
}

/// One display line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    segments: Vec<Segment>,
}

impl Line {
    pub fn blank() -> Self {
        Self::default()
    }

    /// Unstyled line. The text is taken literally, markers included.
    pub fn plain(text: impl Into<String>) -> Self {
        let mut line = Self::default();
        line.push(None, text);
        line
    }

    /// Append a segment, merging with the previous one when the color matches
    pub fn push(&mut self, color: Option<Color>, text: impl Into<String>) -> &mut Self {
        let text = text.into();
        if text.is_empty() {
            return self;
        }

        match self.segments.last_mut() {
            Some(last) if last.color == color => last.text.push_str(&text),
            _ => self.segments.push(Segment { color, text }),
        }
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn is_blank(&self) -> bool {
        self.segments.is_empty()
    }

    /// Text with all styling dropped
    pub fn text(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(&segment.text)?;
        }
        Ok(())
    }
}

/// Observable side effect attached to a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "snake_case")]
pub enum Effect {
    None,
    /// Ask the host to open a URL in a new browsing context
    OpenUrl(&'static str),
    /// Empty the session transcript
    ClearTranscript,
}

/// A registry declaration as authored in content
#[derive(Debug, Clone, Copy)]
pub enum Declaration {
    Command {
        name: &'static str,
        /// One-line description for command listings
        summary: &'static str,
        body: &'static [&'static str],
        effect: Effect,
    },
    Alias {
        name: &'static str,
        target: &'static str,
    },
}

impl Declaration {
    pub fn name(&self) -> &'static str {
        match self {
            Declaration::Command { name, .. } | Declaration::Alias { name, .. } => *name,
        }
    }
}

/// A canonical command after the registry is built
#[derive(Debug, Clone)]
pub struct CommandEntry {
    pub name: &'static str,
    pub summary: &'static str,
    pub aliases: Vec<&'static str>,
    pub lines: Vec<Line>,
    pub effect: Effect,
}

impl CommandEntry {
    /// Name followed by its aliases, e.g. `help, h`
    pub fn label(&self) -> String {
        std::iter::once(self.name)
            .chain(self.aliases.iter().copied())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// What a dispatch produces
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub lines: Vec<Line>,
    pub effect: Effect,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_merges_same_color() {
        let mut line = Line::blank();
        line.push(Some(Color::Green), "├──")
            .push(Some(Color::Green), " ")
            .push(None, "text");

        assert_eq!(line.segments().len(), 2);
        assert_eq!(line.text(), "├── text");
    }

    #[test]
    fn test_empty_push_is_ignored() {
        let mut line = Line::blank();
        line.push(Some(Color::Red), "");
        assert!(line.is_blank());
    }

    #[test]
    fn test_color_names_round_trip() {
        for color in [Color::White, Color::Purple, Color::Gray] {
            assert_eq!(Color::from_name(color.name()), Some(color));
        }
        assert_eq!(Color::from_name("magenta"), None);
    }

    #[test]
    fn test_effect_serializes_tagged() {
        let json = serde_json::to_string(&Effect::OpenUrl("https://example.com")).unwrap();
        assert_eq!(json, r#"{"kind":"open_url","url":"https://example.com"}"#);
    }
}
