//! Top-level controller: which screen is shown and how screens change.

use std::time::Duration;

use tokio::sync::mpsc;
use uuid::Uuid;

use crate::auth::{spawn_authentication, AuthError, AuthForm, AuthHandle, DEFAULT_AUTH_LATENCY};
use crate::data::questions;
use crate::event::AppEvent;
use crate::models::{QuizResult, User, OPTION_COUNT};
use crate::session::{
    spawn_ticker, QuizSession, SessionError, SessionTick, TickerHandle, DEFAULT_TIME_LIMIT_SECS,
};

/// Timing knobs for sessions and the mock backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub time_limit_secs: u32,
    pub tick_period: Duration,
    pub auth_latency: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            time_limit_secs: DEFAULT_TIME_LIMIT_SECS,
            tick_period: Duration::from_secs(1),
            auth_latency: DEFAULT_AUTH_LATENCY,
        }
    }
}

/// Login or signup screen.
#[derive(Debug)]
pub struct AuthScreen {
    pub form: AuthForm,
    pending: Option<AuthHandle>,
    notice: Option<String>,
}

impl AuthScreen {
    fn new(form: AuthForm) -> Self {
        Self {
            form,
            pending: None,
            notice: None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

/// The quiz screen: the session plus the ticker driving it.
#[derive(Debug)]
pub struct QuizScreen {
    pub session: QuizSession,
    cursor: usize,
    awaiting_jump: bool,
    ticker: TickerHandle,
}

impl QuizScreen {
    /// Option highlighted by the keyboard cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn awaiting_jump(&self) -> bool {
        self.awaiting_jump
    }

    pub fn set_awaiting_jump(&mut self, awaiting: bool) {
        self.awaiting_jump = awaiting;
    }

    pub fn move_cursor_down(&mut self) {
        self.cursor = (self.cursor + 1) % OPTION_COUNT;
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = (self.cursor + OPTION_COUNT - 1) % OPTION_COUNT;
    }

    pub fn select(&mut self, option: usize) {
        log_rejected(self.session.select_answer(option));
        if let Some(answer) = self.session.current_answer() {
            self.cursor = answer;
        }
    }

    pub fn select_at_cursor(&mut self) {
        self.select(self.cursor);
    }

    pub fn next(&mut self) {
        log_rejected(self.session.next());
        self.sync_cursor();
    }

    pub fn previous(&mut self) {
        log_rejected(self.session.previous());
        self.sync_cursor();
    }

    pub fn go_to(&mut self, index: usize) {
        log_rejected(self.session.go_to(index));
        self.sync_cursor();
    }

    fn sync_cursor(&mut self) {
        self.cursor = self.session.current_answer().unwrap_or(0);
    }
}

/// The single screen currently on display.
#[derive(Debug)]
pub enum View {
    Login(AuthScreen),
    Signup(AuthScreen),
    Dashboard,
    Quiz(QuizScreen),
    Results(QuizResult),
}

impl View {
    pub fn name(&self) -> &'static str {
        match self {
            View::Login(_) => "login",
            View::Signup(_) => "signup",
            View::Dashboard => "dashboard",
            View::Quiz(_) => "quiz",
            View::Results(_) => "results",
        }
    }
}

/// Host controller. Owns the signed-in user and the current view; views
/// change only through the named transition methods.
pub struct App {
    view: View,
    user: Option<User>,
    settings: Settings,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl App {
    pub fn new(settings: Settings, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            view: View::Login(AuthScreen::new(AuthForm::login())),
            user: None,
            settings,
            events,
        }
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut View {
        &mut self.view
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// The result on screen, if the results view is showing.
    pub fn result(&self) -> Option<&QuizResult> {
        match &self.view {
            View::Results(result) => Some(result),
            _ => None,
        }
    }

    fn set_view(&mut self, view: View) {
        tracing::debug!(from = self.view.name(), to = view.name(), "view changed");
        self.view = view;
    }

    pub fn switched_to_signup(&mut self) {
        self.set_view(View::Signup(AuthScreen::new(AuthForm::signup())));
    }

    pub fn switched_to_login(&mut self) {
        self.set_view(View::Login(AuthScreen::new(AuthForm::login())));
    }

    /// Validate the visible form and start the mock sign-in. Invalid input is
    /// reported on the form and nothing is sent.
    pub fn submit_credentials(&mut self) {
        let latency = self.settings.auth_latency;
        let events = self.events.clone();

        let (View::Login(screen) | View::Signup(screen)) = &mut self.view else {
            return;
        };
        if screen.pending.is_some() {
            return;
        }

        let request = screen.form.request();
        if let Err(err) = request.validate() {
            tracing::info!(error = %err, "credentials rejected");
            screen.notice = Some(err.to_string());
            return;
        }

        screen.notice = None;
        screen.pending = Some(spawn_authentication(request, latency, events));
    }

    pub fn logged_in(&mut self, user: User) {
        tracing::info!(user = %user.id, name = %user.display_name, "signed in");
        self.user = Some(user);
        self.set_view(View::Dashboard);
    }

    pub fn logged_out(&mut self) {
        if let Some(user) = self.user.take() {
            tracing::info!(user = %user.id, "signed out");
        }
        self.switched_to_login();
    }

    /// Start a fresh session. Any result on screen is discarded.
    pub fn quiz_started(&mut self) {
        if self.user.is_none() {
            tracing::warn!("quiz start requested without a signed-in user");
            return;
        }

        let session = QuizSession::start(questions(), self.settings.time_limit_secs);
        let ticker = spawn_ticker(session.id(), self.settings.tick_period, self.events.clone());
        self.set_view(View::Quiz(QuizScreen {
            session,
            cursor: 0,
            awaiting_jump: false,
            ticker,
        }));
    }

    /// Submit the running session by hand.
    pub fn submit_quiz(&mut self) {
        let View::Quiz(screen) = &mut self.view else {
            return;
        };
        match screen.session.submit() {
            Ok(result) => {
                screen.ticker.stop();
                self.quiz_finished(result);
            }
            Err(err) => tracing::warn!(error = %err, "submit rejected"),
        }
    }

    /// Show the result. Replacing the quiz view drops its ticker.
    pub fn quiz_finished(&mut self, result: QuizResult) {
        self.set_view(View::Results(result));
    }

    /// Leave a running session without a result.
    pub fn quiz_abandoned(&mut self) {
        if let View::Quiz(screen) = &self.view {
            tracing::info!(session = %screen.session.id(), "quiz abandoned");
        }
        self.returned_to_dashboard();
    }

    pub fn returned_to_dashboard(&mut self) {
        self.set_view(View::Dashboard);
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick(session_id) => self.handle_tick(session_id),
            AppEvent::AuthCompleted { request, outcome } => {
                self.handle_auth_completed(request, outcome)
            }
        }
    }

    fn handle_tick(&mut self, session_id: Uuid) {
        let View::Quiz(screen) = &mut self.view else {
            tracing::trace!(session = %session_id, "tick with no quiz on screen");
            return;
        };
        if screen.session.id() != session_id {
            tracing::trace!(session = %session_id, "stale tick ignored");
            return;
        }

        match screen.session.tick() {
            Ok(SessionTick::Running(_)) => {}
            Ok(SessionTick::Expired(result)) => {
                screen.ticker.stop();
                self.quiz_finished(result);
            }
            Err(err) => tracing::debug!(error = %err, "tick ignored"),
        }
    }

    fn handle_auth_completed(&mut self, request: Uuid, outcome: Result<User, AuthError>) {
        let (View::Login(screen) | View::Signup(screen)) = &mut self.view else {
            tracing::debug!(%request, "authentication finished after leaving the form");
            return;
        };
        if screen.pending.as_ref().map(AuthHandle::id) != Some(request) {
            tracing::debug!(%request, "stale authentication result ignored");
            return;
        }

        screen.pending = None;
        match outcome {
            Ok(user) => self.logged_in(user),
            Err(err) => screen.notice = Some(err.to_string()),
        }
    }
}

fn log_rejected(outcome: Result<(), SessionError>) {
    if let Err(err) = outcome {
        tracing::warn!(error = %err, "quiz action rejected");
    }
}
