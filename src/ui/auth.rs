use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::AuthScreen;
use crate::auth::{AuthMode, Field};

pub fn render(frame: &mut Frame, area: Rect, screen: &AuthScreen) {
    let form = &screen.form;
    let field_rows = form.fields().len() as u16 * 3;

    let outer = Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(56),
        Constraint::Fill(1),
    ])
    .split(area);
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(field_rows),
        Constraint::Length(2),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .split(outer[1]);

    render_heading(frame, chunks[1], form.mode());
    render_fields(frame, chunks[2], form.fields(), form.focus());
    render_status(frame, chunks[3], screen);
    render_controls(frame, chunks[4], form.mode());
}

fn render_heading(frame: &mut Frame, area: Rect, mode: AuthMode) {
    let (title, subtitle) = match mode {
        AuthMode::Login => ("Welcome Back", "Sign in to continue your learning journey"),
        AuthMode::Signup => ("Create Account", "Join us to start your quiz journey"),
    };

    let content = vec![
        Line::from(Span::styled(title, Style::default().fg(Color::Cyan).bold())),
        Line::from(""),
        Line::from(subtitle.fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_fields(frame: &mut Frame, area: Rect, fields: &[Field], focus: usize) {
    let rows = Layout::vertical(vec![Constraint::Length(3); fields.len()]).split(area);

    for (index, (field, row)) in fields.iter().zip(rows.iter()).enumerate() {
        let focused = index == focus;
        let border = if focused { Color::Cyan } else { Color::DarkGray };

        let text = if field.is_empty() {
            Line::from(field.placeholder().fg(Color::DarkGray))
        } else {
            Line::from(field.display().fg(Color::White))
        };
        let text = if focused {
            let mut spans = text.spans;
            spans.push(Span::styled("_", Style::default().fg(Color::Cyan)));
            Line::from(spans)
        } else {
            text
        };

        let widget = Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", field.label()))
                .padding(Padding::horizontal(1)),
        );
        frame.render_widget(widget, *row);
    }
}

fn render_status(frame: &mut Frame, area: Rect, screen: &AuthScreen) {
    let line = if screen.is_pending() {
        let busy = match screen.form.mode() {
            AuthMode::Login => "Signing In...",
            AuthMode::Signup => "Creating Account...",
        };
        Line::from(busy.fg(Color::Yellow))
    } else if let Some(notice) = screen.notice() {
        Line::from(Span::styled(notice, Style::default().fg(Color::Red).bold()))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn render_controls(frame: &mut Frame, area: Rect, mode: AuthMode) {
    let text = match mode {
        AuthMode::Login => "tab next field  ·  enter sign in  ·  ctrl+s sign up  ·  esc quit",
        AuthMode::Signup => "tab next field  ·  enter create account  ·  ctrl+s sign in  ·  esc quit",
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
