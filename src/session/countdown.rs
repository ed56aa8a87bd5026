/// Fifteen minutes.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 900;

/// Outcome of delivering one timer tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Time left after this tick.
    Running(u32),
    /// This tick reached zero. Reported once.
    Expired,
    /// The countdown had already stopped; nothing changed.
    Stopped,
}

/// Remaining-time counter decremented once per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    limit: u32,
    remaining: u32,
    stopped: bool,
}

impl Countdown {
    pub fn new(limit_secs: u32) -> Self {
        Self {
            limit: limit_secs,
            remaining: limit_secs,
            stopped: false,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Seconds counted off so far. Drifts from wall-clock time when ticks
    /// are delayed.
    pub fn elapsed(&self) -> u32 {
        self.limit - self.remaining
    }

    pub fn stop(&mut self) {
        self.stopped = true;
    }

    pub fn tick(&mut self) -> Tick {
        if self.stopped {
            return Tick::Stopped;
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.stopped = true;
            Tick::Expired
        } else {
            Tick::Running(self.remaining)
        }
    }

    /// Remaining time as `m:ss`.
    pub fn formatted(&self) -> String {
        format!("{}:{:02}", self.remaining / 60, self.remaining % 60)
    }
}
