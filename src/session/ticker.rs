use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};
use uuid::Uuid;

use crate::event::AppEvent;

/// Owns the background tick task of one session. Dropping it stops the ticks.
#[derive(Debug)]
pub struct TickerHandle {
    session: Uuid,
    task: JoinHandle<()>,
}

impl TickerHandle {
    /// Stop delivering ticks. Idempotent.
    pub fn stop(&self) {
        if !self.task.is_finished() {
            tracing::debug!(session = %self.session, "ticker stopped");
        }
        self.task.abort();
    }
}

impl Drop for TickerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Send `AppEvent::Tick(session)` every `period`, starting one period from now.
///
/// Must be called from within a tokio runtime.
pub fn spawn_ticker(
    session: Uuid,
    period: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
) -> TickerHandle {
    let task = tokio::spawn(async move {
        let mut interval = interval_at(Instant::now() + period, period);
        loop {
            interval.tick().await;
            if events.send(AppEvent::Tick(session)).is_err() {
                tracing::debug!(%session, "event channel closed, ticker exiting");
                break;
            }
        }
    });

    TickerHandle { session, task }
}
