/// External link opening
///
/// `github` and `linkedin` ask the host to open a profile. It is fire and
/// forget: the opener is spawned and never waited on.

use crate::error::{PortfolioError, Result};
use std::process::{Command, Stdio};
use tracing::info;

/// Something that can open a URL outside the terminal
pub trait LinkOpener: Send + Sync {
    fn open(&self, url: &str) -> Result<()>;
}

/// Uses the platform's default URL handler
pub struct SystemBrowser;

impl SystemBrowser {
    fn command(url: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }
}

impl LinkOpener for SystemBrowser {
    fn open(&self, url: &str) -> Result<()> {
        Self::command(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(|_| ())
            .map_err(|e| PortfolioError::LinkOpen {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        info!(url, "opened external link");
        Ok(())
    }
}

/// Opens nothing. Used when `open_links` is off and for piped input.
pub struct DisabledBrowser;

impl LinkOpener for DisabledBrowser {
    fn open(&self, url: &str) -> Result<()> {
        info!(url, "link opening disabled, skipping");
        Ok(())
    }
}
