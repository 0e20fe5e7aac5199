/// Input loop
///
/// One task owns the session and handles events strictly in order. In a
/// terminal, keys come from a blocking reader thread and clock ticks from
/// the clock task, both over channels. Piped input is read line by line.

use crate::config::Config;
use crate::core::{Dispatcher, Session};
use crate::error::Result;
use crate::registry::Effect;
use crate::terminal::browser::{DisabledBrowser, LinkOpener, SystemBrowser};
use crate::terminal::clock::Clock;
use crate::terminal::events::{map_key, InputEvent};
use crate::terminal::render::Renderer;
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, queue, terminal};
use std::io::{self, Write};
use std::time::Duration;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// How often the key reader checks whether the loop has gone away
const KEY_POLL_INTERVAL: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Session plus everything needed to show it
pub struct Host<W: Write> {
    session: Session,
    renderer: Renderer,
    opener: Box<dyn LinkOpener>,
    out: W,
    interactive: bool,
}

impl<W: Write> Host<W> {
    pub fn new(
        session: Session,
        renderer: Renderer,
        opener: Box<dyn LinkOpener>,
        out: W,
        interactive: bool,
    ) -> Self {
        Self {
            session,
            renderer,
            opener,
            out,
            interactive,
        }
    }

    /// Print the header, welcome banner and footer
    pub fn start(&mut self) -> Result<()> {
        self.renderer.write_header(&mut self.out)?;
        self.session.greet();
        if let Some(entry) = self.session.transcript().last() {
            self.renderer.write_entry(&mut self.out, entry)?;
        }
        self.renderer.write_footer(&mut self.out)?;

        if self.interactive {
            self.renderer.write_prompt(&mut self.out, self.session.input())?;
        }
        self.out.flush()?;
        Ok(())
    }

    pub fn handle(&mut self, event: InputEvent) -> Result<Flow> {
        let redraw = match event {
            InputEvent::Insert(c) => {
                self.session.insert(c);
                true
            }
            InputEvent::Backspace => self.session.backspace(),
            InputEvent::RecallPrevious => self.session.recall_previous(),
            InputEvent::RecallNext => self.session.recall_next(),
            InputEvent::Submit => {
                self.submit()?;
                false
            }
            InputEvent::Quit => return Ok(Flow::Quit),
        };

        if redraw && self.interactive {
            self.renderer.write_prompt(&mut self.out, self.session.input())?;
        }
        Ok(Flow::Continue)
    }

    /// Replace the buffer with `line` and submit it
    pub fn submit_line(&mut self, line: &str) -> Result<()> {
        self.session.set_input(line);
        self.submit()
    }

    fn submit(&mut self) -> Result<()> {
        if self.interactive {
            queue!(
                self.out,
                cursor::MoveToColumn(0),
                terminal::Clear(terminal::ClearType::CurrentLine)
            )?;
        }

        let effect = self.session.submit();
        match effect {
            Effect::ClearTranscript => {
                // A pipe has no screen to wipe
                if self.interactive {
                    self.renderer.write_cleared(&mut self.out)?;
                }
            }
            _ => {
                if let Some(entry) = self.session.transcript().last() {
                    self.renderer.write_entry(&mut self.out, entry)?;
                }
            }
        }

        if let Effect::OpenUrl(url) = effect {
            // Popup blockers and missing openers are not our problem
            if let Err(e) = self.opener.open(url) {
                warn!(url, error = %e, "could not open link");
            }
        }

        if self.interactive {
            self.renderer.write_prompt(&mut self.out, self.session.input())?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Show the clock in the terminal title
    pub fn show_clock(&mut self, now: &str) -> Result<()> {
        execute!(self.out, terminal::SetTitle(now))?;
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

/// Restores cooked mode however the loop exits
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

fn opener_for(config: &Config) -> Box<dyn LinkOpener> {
    if config.open_links {
        Box::new(SystemBrowser)
    } else {
        Box::new(DisabledBrowser)
    }
}

// Runs on a blocking thread until the loop drops its receiver or the user quits
fn read_keys(events: mpsc::Sender<InputEvent>) -> Result<()> {
    loop {
        if events.is_closed() {
            return Ok(());
        }
        if !event::poll(KEY_POLL_INTERVAL)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if let Some(input) = map_key(key) {
                let quit = input == InputEvent::Quit;
                if events.blocking_send(input).is_err() || quit {
                    return Ok(());
                }
            }
        }
    }
}

/// Interactive session on the current terminal
pub async fn run_interactive(config: &Config, dispatcher: Dispatcher) -> Result<()> {
    let renderer = Renderer::new(config, config.use_color(true), true);
    let session = Session::new(dispatcher);

    let raw_mode = RawMode::enable()?;
    let mut host = Host::new(session, renderer, opener_for(config), io::stdout(), true);
    host.start()?;
    info!("session started");

    let (key_tx, mut key_rx) = mpsc::channel(64);
    let reader = tokio::task::spawn_blocking(move || read_keys(key_tx));

    let (tick_tx, mut tick_rx) = mpsc::channel(1);
    let clock = if config.clock.enabled {
        Some(Clock::new(config.clock.period()).start(tick_tx))
    } else {
        None
    };

    loop {
        tokio::select! {
            event = key_rx.recv() => {
                let Some(event) = event else { break };
                if host.handle(event)? == Flow::Quit {
                    break;
                }
            }
            Some(now) = tick_rx.recv() => host.show_clock(&now)?,
        }
    }

    if let Some(clock) = clock {
        clock.stop().await;
    }

    drop(key_rx);
    match reader.await {
        Ok(Err(e)) => warn!(error = %e, "key reader failed"),
        Err(e) => warn!(error = %e, "key reader panicked"),
        Ok(Ok(())) => {}
    }

    drop(raw_mode);
    println!();
    info!(commands = host.session().history().len(), "session ended");
    Ok(())
}

/// Feed each line from `reader` to the host as a submitted command
///
/// Used when stdin is not a terminal. Stops at end of input.
pub async fn run_lines<R, W>(mut host: Host<W>, reader: R) -> Result<Host<W>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    host.start()?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.strip_suffix('\r').unwrap_or(&line);
        debug!(input = line, "line submitted");
        host.submit_line(line)?;
    }

    Ok(host)
}

/// Non-interactive session over stdin/stdout
pub async fn run_piped(config: &Config, dispatcher: Dispatcher) -> Result<()> {
    use std::io::IsTerminal;

    let color = config.use_color(io::stdout().is_terminal());
    let renderer = Renderer::new(config, color, false);
    let host = Host::new(
        Session::new(dispatcher),
        renderer,
        opener_for(config),
        io::stdout(),
        false,
    );

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    run_lines(host, stdin).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PortfolioError;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingBrowser(Arc<Mutex<Vec<String>>>);

    impl LinkOpener for RecordingBrowser {
        fn open(&self, url: &str) -> Result<()> {
            self.0.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    struct BlockedBrowser;

    impl LinkOpener for BlockedBrowser {
        fn open(&self, url: &str) -> Result<()> {
            Err(PortfolioError::LinkOpen {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            })
        }
    }

    fn host(opener: Box<dyn LinkOpener>) -> Host<Vec<u8>> {
        let config = Config::default();
        Host::new(
            Session::new(Dispatcher::builtin().unwrap()),
            Renderer::new(&config, false, false),
            opener,
            Vec::new(),
            false,
        )
    }

    fn output(host: Host<Vec<u8>>) -> String {
        String::from_utf8(host.into_output()).unwrap()
    }

    #[tokio::test]
    async fn test_lines_produce_transcript() {
        let host = run_lines(host(Box::new(DisabledBrowser)), &b"joke\nhalp\n"[..])
            .await
            .unwrap();

        // welcome banner plus two commands
        assert_eq!(host.session().transcript().len(), 3);
        assert_eq!(host.session().history().len(), 2);

        let text = output(host);
        assert!(text.starts_with("➜ prajapati@sankalp:~"));
        assert!(text.contains("$ joke\n  Really ? You here for the jokes ?\n"));
        assert!(text.contains("Did you mean: help"));
    }

    #[tokio::test]
    async fn test_crlf_input() {
        let host = run_lines(host(Box::new(DisabledBrowser)), &b"skills\r\n"[..])
            .await
            .unwrap();
        assert_eq!(host.session().history().entries(), &["skills".to_string()]);
    }

    #[tokio::test]
    async fn test_escape_sequences_never_reach_output() {
        let host = run_lines(
            host(Box::new(DisabledBrowser)),
            &b"\x1b[2J\x1b]0;x\x07\n"[..],
        )
        .await
        .unwrap();

        // kept verbatim in the session, neutralized on screen
        assert_eq!(
            host.session().history().entries(),
            &["\x1b[2J\x1b]0;x\x07".to_string()]
        );

        let text = output(host);
        assert!(!text.contains('\u{1b}'));
        assert!(!text.contains('\u{7}'));
        assert!(text.contains("$ \\u{1b}[2J\\u{1b}]0;x\\u{7}"));
        assert!(text.contains("Command not found: \\u{1b}[2J"));
    }

    #[tokio::test]
    async fn test_clear_in_line_mode() {
        let host = run_lines(host(Box::new(DisabledBrowser)), &b"about\ncls\n"[..])
            .await
            .unwrap();
        assert!(host.session().transcript().is_empty());
        assert_eq!(host.session().history().len(), 2);
    }

    #[tokio::test]
    async fn test_open_url_reaches_opener() {
        let browser = RecordingBrowser::default();
        let seen = Arc::clone(&browser.0);

        run_lines(host(Box::new(browser)), &b"github\nresume\nlinkedin\n"[..])
            .await
            .unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].contains("github.com"));
        assert!(seen[1].contains("linkedin.com"));
    }

    #[tokio::test]
    async fn test_blocked_link_is_ignored() {
        let host = run_lines(host(Box::new(BlockedBrowser)), &b"github\n"[..])
            .await
            .unwrap();

        let text = output(host);
        assert!(text.contains("Opening GitHub profile..."));
    }

    #[test]
    fn test_key_events_drive_session() {
        let mut host = host(Box::new(DisabledBrowser));

        for c in "about".chars() {
            host.handle(InputEvent::Insert(c)).unwrap();
        }
        host.handle(InputEvent::Submit).unwrap();
        host.handle(InputEvent::RecallPrevious).unwrap();
        assert_eq!(host.session().input(), "about");

        host.handle(InputEvent::RecallNext).unwrap();
        assert_eq!(host.session().input(), "");

        assert_eq!(host.handle(InputEvent::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_exit_keeps_running() {
        let mut host = host(Box::new(DisabledBrowser));
        host.submit_line("exit").unwrap();

        assert_eq!(host.handle(InputEvent::Insert('h')).unwrap(), Flow::Continue);
        let text = output(host);
        assert!(text.contains("Goodbye ! May the devil bless you :)"));
    }
}
