/// Terminal rendering
///
/// Turns lines and transcript entries into text for the terminal. Colors are
/// ANSI via crossterm, or nothing when color is off.

use crate::config::Config;
use crate::core::TranscriptEntry;
use crate::registry::content::FOOTER;
use crate::registry::{Color, Line};
use crossterm::style::{Color as TermColor, Stylize};
use crossterm::{cursor, queue, terminal};
use std::borrow::Cow;
use std::io::{self, Write};

/// Indent for command output under its echo line
const OUTPUT_INDENT: &str = "  ";

fn term_color(color: Color) -> TermColor {
    match color {
        Color::White => TermColor::White,
        Color::Red => TermColor::Red,
        Color::Green => TermColor::Green,
        Color::Blue => TermColor::Blue,
        Color::Yellow => TermColor::Yellow,
        Color::Cyan => TermColor::Cyan,
        Color::Purple => TermColor::Magenta,
        Color::Gray => TermColor::DarkGrey,
    }
}

/// Show control characters escaped, e.g. ESC as `\u{1b}`
fn visible(text: &str) -> Cow<'_, str> {
    if !text.chars().any(char::is_control) {
        return Cow::Borrowed(text);
    }

    let mut shown = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        if c.is_control() {
            shown.extend(c.escape_default());
        } else {
            shown.push(c);
        }
    }
    Cow::Owned(shown)
}

pub struct Renderer {
    color: bool,
    raw: bool,
    header: String,
    prompt: String,
}

impl Renderer {
    /// `raw` means the terminal is in raw mode and needs `\r\n`
    pub fn new(config: &Config, color: bool, raw: bool) -> Self {
        Self {
            color,
            raw,
            header: config.header.clone(),
            prompt: config.prompt.clone(),
        }
    }

    fn newline(&self) -> &'static str {
        if self.raw {
            "\r\n"
        } else {
            "\n"
        }
    }

    pub fn format_line(&self, line: &Line) -> String {
        line.segments()
            .iter()
            .map(|segment| {
                let text = visible(&segment.text);
                match segment.color {
                    Some(color) if self.color => text.as_ref().with(term_color(color)).to_string(),
                    _ => text.into_owned(),
                }
            })
            .collect()
    }

    pub fn write_line<W: Write>(&self, out: &mut W, line: &Line) -> io::Result<()> {
        write!(out, "{}{}", self.format_line(line), self.newline())
    }

    pub fn write_header<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut line = Line::blank();
        line.push(Some(Color::Green), "➜").push(None, " ").push(None, self.header.as_str());
        self.write_line(out, &line)?;
        self.write_line(out, &Line::plain("─".repeat(self.header.chars().count() + 2)))
    }

    pub fn write_footer<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mut line = Line::blank();
        line.push(Some(Color::Gray), FOOTER);
        self.write_line(out, &line)
    }

    /// Echo line (when input is non-empty) followed by indented output
    pub fn write_entry<W: Write>(&self, out: &mut W, entry: &TranscriptEntry) -> io::Result<()> {
        if !entry.raw_input.is_empty() {
            let mut echo = Line::blank();
            echo.push(Some(Color::Green), self.prompt.as_str())
                .push(None, " ")
                .push(Some(Color::White), entry.raw_input.as_str());
            self.write_line(out, &echo)?;
        }

        for line in &entry.output {
            if line.is_blank() {
                write!(out, "{}", self.newline())?;
            } else {
                write!(out, "{}", OUTPUT_INDENT)?;
                self.write_line(out, line)?;
            }
        }
        Ok(())
    }

    /// Redraw the input line in place
    pub fn write_prompt<W: Write>(&self, out: &mut W, input: &str) -> io::Result<()> {
        queue!(
            out,
            cursor::MoveToColumn(0),
            terminal::Clear(terminal::ClearType::CurrentLine)
        )?;

        let mut line = Line::blank();
        line.push(Some(Color::Green), self.prompt.as_str())
            .push(None, " ")
            .push(Some(Color::White), input);
        write!(out, "{}", self.format_line(&line))?;
        out.flush()
    }

    /// Wipe the screen and redraw the header
    pub fn write_cleared<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(
            out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        self.write_header(out)
    }
}
