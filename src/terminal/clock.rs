// Live clock.
//
// A cancellable repeating task that formats the local time and hands it to
// the event loop. It never touches session state and never waits on the
// loop: if the loop is busy, the tick is dropped.

use chrono::{DateTime, Local, TimeZone};
use std::fmt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Format like `Mon, Oct 19, 2026 03:04:05 PM`
pub fn format_clock<Tz>(now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    now.format("%a, %b %-d, %Y %I:%M:%S %p").to_string()
}

pub struct Clock {
    period: Duration,
}

impl Clock {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }

    /// Start ticking. The first tick is immediate.
    ///
    /// Must be called inside a tokio runtime.
    pub fn start(self, ticks: mpsc::Sender<String>) -> ClockHandle {
        let token = CancellationToken::new();
        let cancelled = token.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = cancelled.cancelled() => {
                        debug!("clock stopped");
                        break;
                    }
                    _ = interval.tick() => {
                        match ticks.try_send(format_clock(&Local::now())) {
                            Ok(()) | Err(mpsc::error::TrySendError::Full(_)) => {}
                            Err(mpsc::error::TrySendError::Closed(_)) => break,
                        }
                    }
                }
            }
        });

        debug!(?period, "clock started");
        ClockHandle {
            token,
            task: Some(task),
        }
    }
}

/// Running clock. Dropping it cancels the task.
pub struct ClockHandle {
    token: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl ClockHandle {
    /// Cancel and wait for the task to finish
    pub async fn stop(mut self) {
        self.token.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }

    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for ClockHandle {
    fn drop(&mut self) {
        self.token.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_format_afternoon() {
        let at = Utc.with_ymd_and_hms(2026, 10, 19, 15, 4, 5).unwrap();
        assert_eq!(format_clock(&at), "Mon, Oct 19, 2026 03:04:05 PM");
    }

    #[test]
    fn test_format_single_digit_day() {
        let at = Utc.with_ymd_and_hms(2024, 1, 7, 0, 30, 0).unwrap();
        assert_eq!(format_clock(&at), "Sun, Jan 7, 2024 12:30:00 AM");
    }

    #[tokio::test]
    async fn test_ticks_then_stops() {
        let (tx, mut rx) = mpsc::channel(8);
        let handle = Clock::new(Duration::from_millis(20)).start(tx);

        let first = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(first.ends_with("AM") || first.ends_with("PM"));

        let second = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
        assert!(second.is_some());
        assert!(handle.is_running());

        handle.stop().await;

        // Buffered ticks drain, then the channel reports the sender gone
        while rx.try_recv().is_ok() {}
        assert!(rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn test_drop_cancels() {
        let (tx, mut rx) = mpsc::channel(8);
        let handle = Clock::new(Duration::from_millis(10)).start(tx);
        drop(handle);

        let closed = tokio::time::timeout(Duration::from_secs(2), async {
            while rx.recv().await.is_some() {}
        })
        .await;
        assert!(closed.is_ok());
    }

    #[tokio::test]
    async fn test_full_channel_does_not_block_stop() {
        let (tx, _rx) = mpsc::channel(1);
        let handle = Clock::new(Duration::from_millis(5)).start(tx);

        tokio::time::sleep(Duration::from_millis(30)).await;
        tokio::time::timeout(Duration::from_secs(2), handle.stop())
            .await
            .unwrap();
    }
}
