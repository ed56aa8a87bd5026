//! Quiz session core.
//!
//! A session walks through the question bank with unrestricted navigation,
//! counts down a fixed time limit and is scored once, on manual submission
//! or on expiry.

mod countdown;
mod quiz;
mod scoring;
mod ticker;

pub use countdown::{Countdown, Tick, DEFAULT_TIME_LIMIT_SECS};
pub use quiz::{QuizSession, SessionError, SessionTick};
pub use scoring::{evaluate, percentage};
pub use ticker::{spawn_ticker, TickerHandle};
