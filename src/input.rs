//! Keyboard handling for each view.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, View};
use crate::auth::AuthMode;

/// Whether the event loop keeps running after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Flow::Quit;
    }

    match app.view() {
        View::Login(_) | View::Signup(_) => handle_form_input(app, key),
        View::Dashboard => handle_dashboard_input(app, key.code),
        View::Quiz(_) => handle_quiz_input(app, key.code),
        View::Results(_) => handle_results_input(app, key.code),
    }
}

fn handle_form_input(app: &mut App, key: KeyEvent) -> Flow {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('s') {
            switch_form(app);
        }
        return Flow::Continue;
    }

    match key.code {
        KeyCode::Esc => return Flow::Quit,
        KeyCode::Enter => {
            if focused_on_last_field(app) {
                app.submit_credentials();
            } else if let View::Login(screen) | View::Signup(screen) = app.view_mut() {
                screen.form.focus_next();
            }
        }
        code => {
            let (View::Login(screen) | View::Signup(screen)) = app.view_mut() else {
                return Flow::Continue;
            };
            match code {
                KeyCode::Tab | KeyCode::Down => screen.form.focus_next(),
                KeyCode::BackTab | KeyCode::Up => screen.form.focus_previous(),
                KeyCode::Backspace => {
                    screen.clear_notice();
                    screen.form.pop();
                }
                KeyCode::Char(c) => {
                    screen.clear_notice();
                    screen.form.push(c);
                }
                _ => {}
            }
        }
    }
    Flow::Continue
}

fn focused_on_last_field(app: &App) -> bool {
    match app.view() {
        View::Login(screen) | View::Signup(screen) => screen.form.is_last_field(),
        _ => false,
    }
}

fn switch_form(app: &mut App) {
    let mode = match app.view() {
        View::Login(screen) | View::Signup(screen) => screen.form.mode(),
        _ => return,
    };
    match mode {
        AuthMode::Login => app.switched_to_signup(),
        AuthMode::Signup => app.switched_to_login(),
    }
}

fn handle_dashboard_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Enter | KeyCode::Char('s') | KeyCode::Char('S') => app.quiz_started(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.logged_out(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

fn handle_quiz_input(app: &mut App, key: KeyCode) -> Flow {
    let View::Quiz(screen) = app.view_mut() else {
        return Flow::Continue;
    };

    if screen.awaiting_jump() {
        screen.set_awaiting_jump(false);
        if let Some(index) = jump_target(key) {
            screen.go_to(index);
        }
        return Flow::Continue;
    }

    match key {
        KeyCode::Char(c @ '1'..='4') => screen.select(c as usize - '1' as usize),
        KeyCode::Char(c @ 'a'..='d') => screen.select(c as usize - 'a' as usize),
        KeyCode::Up | KeyCode::Char('k') => screen.move_cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => screen.move_cursor_down(),
        KeyCode::Char(' ') => screen.select_at_cursor(),
        KeyCode::Left | KeyCode::Char('h') => screen.previous(),
        KeyCode::Right | KeyCode::Char('l') => screen.next(),
        KeyCode::Char('g') => screen.set_awaiting_jump(true),
        KeyCode::Enter => {
            if screen.session.is_last() {
                app.submit_quiz();
            } else {
                screen.next();
            }
        }
        KeyCode::Esc => app.quiz_abandoned(),
        KeyCode::Char('q') | KeyCode::Char('Q') => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

/// Question index for the digit typed after `g`; `0` means the tenth.
fn jump_target(key: KeyCode) -> Option<usize> {
    match key {
        KeyCode::Char('0') => Some(9),
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}

fn handle_results_input(app: &mut App, key: KeyCode) -> Flow {
    match key {
        KeyCode::Char('r') | KeyCode::Char('R') => app.quiz_started(),
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Enter => app.returned_to_dashboard(),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Flow::Quit,
        _ => {}
    }
    Flow::Continue
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::app::Settings;
    use crate::models::User;

    fn press(app: &mut App, code: KeyCode) -> Flow {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn signed_in_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Settings::default(), tx);
        app.logged_in(User {
            id: "1".to_string(),
            display_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
        });
        app
    }

    fn session_index(app: &App) -> usize {
        match app.view() {
            View::Quiz(screen) => screen.session.current_index(),
            other => panic!("expected quiz view, got {}", other.name()),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_ctrl_s_toggles_forms() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Settings::default(), tx);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);

        handle_key(&mut app, ctrl_s);
        assert!(matches!(app.view(), View::Signup(_)));
        handle_key(&mut app, ctrl_s);
        assert!(matches!(app.view(), View::Login(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_typing_q_in_a_form_does_not_quit() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(Settings::default(), tx);
        assert_eq!(press(&mut app, KeyCode::Char('q')), Flow::Continue);

        let View::Login(screen) = app.view() else {
            panic!("expected login view");
        };
        assert_eq!(screen.form.fields()[0].value(), "q");
        assert_eq!(press(&mut app, KeyCode::Esc), Flow::Quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_quiz_keys() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Enter);
        assert_eq!(session_index(&app), 0);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('0'));
        assert_eq!(session_index(&app), 9);

        press(&mut app, KeyCode::Left);
        assert_eq!(session_index(&app), 8);
        press(&mut app, KeyCode::Enter);
        assert_eq!(session_index(&app), 9);

        press(&mut app, KeyCode::Enter);
        let result = app.result().expect("enter on the last question submits");
        assert_eq!(result.correct_answers, 2);
        assert_eq!(result.score, 20);
    }

    #[tokio::test(start_paused = true)]
    async fn test_results_keys() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        assert!(app.result().is_some());

        press(&mut app, KeyCode::Char('r'));
        assert_eq!(session_index(&app), 0);

        press(&mut app, KeyCode::Esc);
        assert!(matches!(app.view(), View::Dashboard));
        press(&mut app, KeyCode::Char('l'));
        assert!(matches!(app.view(), View::Login(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_b_selects_option_b() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('b'));

        let View::Quiz(screen) = app.view() else {
            panic!("expected quiz view, got {}", app.view().name());
        };
        assert_eq!(screen.session.current_answer(), Some(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_esc_abandons_quiz_without_result() {
        let mut app = signed_in_app();
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        assert_eq!(press(&mut app, KeyCode::Esc), Flow::Continue);
        assert!(matches!(app.view(), View::Dashboard));
        assert!(app.result().is_none());

        press(&mut app, KeyCode::Enter);
        assert_eq!(session_index(&app), 0);
        let View::Quiz(screen) = app.view() else {
            panic!("expected quiz view, got {}", app.view().name());
        };
        assert_eq!(screen.session.answered_count(), 0);
    }
}
