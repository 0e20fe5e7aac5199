// Parses the inline style markers used by static content.
//
// Content looks like `[yellow]export[/] [blue]NAME[/]`. Only the palette in
// `Color` is recognised; anything else in brackets stays literal text.

use crate::error::{PortfolioError, Result};
use crate::registry::models::{Color, Line};
use regex::Regex;

const SPAN_PATTERN: &str = r"\[(white|red|green|blue|yellow|cyan|purple|gray)\](.*?)\[/\]";
const OPEN_PATTERN: &str = r"\[(white|red|green|blue|yellow|cyan|purple|gray)\]";

pub struct MarkupParser {
    span: Regex,
    open: Regex,
}

impl MarkupParser {
    pub fn new() -> Result<Self> {
        // Compile once; the registry parses every content line through here
        let span = Regex::new(SPAN_PATTERN).map_err(|e| PortfolioError::Markup(e.to_string()))?;
        let open = Regex::new(OPEN_PATTERN).map_err(|e| PortfolioError::Markup(e.to_string()))?;

        Ok(Self { span, open })
    }

    /// Parse one line of content. Unmatched markers are kept as text.
    pub fn parse(&self, source: &str) -> Line {
        let mut line = Line::blank();
        let mut rest = 0;

        for caps in self.span.captures_iter(source) {
            let (Some(whole), Some(name), Some(body)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };

            line.push(None, &source[rest..whole.start()]);
            line.push(Color::from_name(name.as_str()), body.as_str());
            rest = whole.end();
        }

        line.push(None, &source[rest..]);
        line
    }

    /// Like `parse`, but reject a colour marker that never gets closed.
    ///
    /// Used when building the registry so broken content fails at startup
    /// instead of rendering stray brackets.
    pub fn parse_strict(&self, source: &str) -> Result<Line> {
        let leftover = self.span.replace_all(source, "");
        if let Some(open) = self.open.find(&leftover) {
            return Err(PortfolioError::Markup(format!(
                "unclosed {} in {:?}",
                open.as_str(),
                source
            )));
        }

        Ok(self.parse(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::models::Segment;

    fn parser() -> MarkupParser {
        MarkupParser::new().unwrap()
    }

    #[test]
    fn test_parse_colored_spans() {
        let line = parser().parse("[yellow]export[/] [blue]NAME[/]=[green]\"Sankalp\"[/]");

        assert_eq!(
            line.segments(),
            &[
                Segment { color: Some(Color::Yellow), text: "export".into() },
                Segment { color: None, text: " ".into() },
                Segment { color: Some(Color::Blue), text: "NAME".into() },
                Segment { color: None, text: "=".into() },
                Segment { color: Some(Color::Green), text: "\"Sankalp\"".into() },
            ]
        );
    }

    #[test]
    fn test_plain_text_untouched() {
        let line = parser().parse("Type 'help' to see available commands");
        assert_eq!(line.segments().len(), 1);
        assert_eq!(line.segments()[0].color, None);
    }

    #[test]
    fn test_unknown_marker_is_literal() {
        let line = parser().parse("[magenta]nope[/]");
        assert_eq!(line.text(), "[magenta]nope[/]");
        assert_eq!(line.segments()[0].color, None);
    }

    #[test]
    fn test_empty_source_is_blank() {
        assert!(parser().parse("").is_blank());
    }

    #[test]
    fn test_strict_rejects_unclosed() {
        let parser = parser();
        assert!(parser.parse_strict("[red]oops").is_err());
        assert!(parser.parse_strict("[red]fine[/] and [green]fine[/]").is_ok());
    }

    #[test]
    fn test_plain_line_never_parses_markers() {
        let line = Line::plain("[red]typed by user[/]");
        assert_eq!(line.segments()[0].color, None);
        assert_eq!(line.text(), "[red]typed by user[/]");
    }
}
