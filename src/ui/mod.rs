mod auth;
mod dashboard;
mod footer;
mod quiz;
mod results;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, View};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    let chunks = Layout::vertical([Constraint::Fill(1), Constraint::Length(2)]).split(area);

    match app.view() {
        View::Login(screen) | View::Signup(screen) => auth::render(frame, chunks[0], screen),
        View::Dashboard => {
            dashboard::render(frame, chunks[0], app.user(), app.settings().time_limit_secs)
        }
        View::Quiz(screen) => quiz::render(frame, chunks[0], screen),
        View::Results(result) => results::render(frame, chunks[0], app.user(), result),
    }
    footer::render(frame, chunks[1]);
}
