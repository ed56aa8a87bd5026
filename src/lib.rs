//! # quizmaster
//!
//! A terminal quiz: sign in (mock), start the general-knowledge quiz from the
//! dashboard, answer ten multiple-choice questions against a fifteen minute
//! clock and review the scored result.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quizmaster::{Config, QuizError};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), QuizError> {
//!     let config = Config {
//!         settings: Default::default(),
//!         log_file: "quizmaster.log".into(),
//!         log_level: "info".to_string(),
//!         print_result: false,
//!     };
//!
//!     // Takes over the terminal until the user quits
//!     let result = quizmaster::run(&config).await?;
//!     println!("{:?}", result);
//!
//!     Ok(())
//! }
//! ```

mod app;
pub mod auth;
mod config;
mod data;
mod error;
mod event;
mod input;
pub mod logging;
mod models;
pub mod session;
pub mod terminal;
mod ui;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures_util::StreamExt;
use tokio::sync::mpsc;

pub use app::{App, AuthScreen, QuizScreen, Settings, View};
pub use config::{Args, Config};
pub use data::questions;
pub use error::QuizError;
pub use event::AppEvent;
pub use input::{handle_key, Flow};
pub use models::{AnswerSheet, Question, QuizResult, User, OPTION_COUNT};

/// Run the application in the terminal until the user quits.
///
/// Returns the result on screen at exit, if the user quit from the results view.
pub async fn run(config: &Config) -> Result<Option<QuizResult>, QuizError> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut app = App::new(config.settings, tx);

    let mut guard = terminal::TerminalGuard::enter()?;
    let outcome = run_event_loop(guard.terminal(), &mut app, &mut rx).await;
    guard.restore()?;
    outcome?;

    Ok(app.result().cloned())
}

async fn run_event_loop(
    terminal: &mut terminal::AppTerminal,
    app: &mut App,
    events: &mut mpsc::UnboundedReceiver<AppEvent>,
) -> Result<(), QuizError> {
    let mut keys = EventStream::new();

    loop {
        terminal.draw(|frame| ui::render(frame, app))?;

        tokio::select! {
            next = keys.next() => match next {
                Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                    if handle_key(app, key) == Flow::Quit {
                        break;
                    }
                }
                Some(Ok(_)) => {}
                Some(Err(err)) => return Err(err.into()),
                None => break,
            },
            Some(event) = events.recv() => app.handle_event(event),
        }
    }

    tracing::info!(view = app.view().name(), "exiting");
    Ok(())
}
