use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::data::questions;
use crate::models::User;

pub fn render(frame: &mut Frame, area: Rect, user: Option<&User>, time_limit_secs: u32) {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(12),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_greeting(frame, chunks[0], user);
    render_quiz_card(frame, chunks[2], time_limit_secs);
    render_controls(frame, chunks[4]);
}

fn render_greeting(frame: &mut Frame, area: Rect, user: Option<&User>) {
    let name = user.map(|u| u.display_name.as_str()).unwrap_or("there");
    let content = vec![
        Line::from(Span::styled(
            format!("Welcome back, {}!", name),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from("Ready to test your knowledge?".fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content), area);
}

fn render_quiz_card(frame: &mut Frame, area: Rect, time_limit_secs: u32) {
    let stat = |value: String, label: &'static str, color: Color| {
        Line::from(vec![
            Span::styled(format!("{:>5} ", value), Style::default().fg(color).bold()),
            Span::styled(label, Style::default().fg(Color::Gray)),
        ])
    };

    let content = vec![
        Line::from(Span::styled(
            "General Knowledge Quiz",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(
            format!(
                "Test your knowledge with {} carefully crafted questions",
                questions().len()
            )
            .fg(Color::DarkGray),
        ),
        Line::from(""),
        stat(questions().len().to_string(), "Questions", Color::Magenta),
        {
            let (value, label) = time_limit_stat(time_limit_secs);
            stat(value, label, Color::Blue)
        },
        stat("MCQ".to_string(), "Format", Color::Green),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER  Start Quiz Now",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("Challenge yourself and see how much you know!".fg(Color::DarkGray)),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

/// Whole minutes when the limit divides evenly, otherwise `m:ss`.
fn time_limit_stat(secs: u32) -> (String, &'static str) {
    if secs % 60 == 0 {
        ((secs / 60).to_string(), "Minutes")
    } else {
        (format!("{}:{:02}", secs / 60, secs % 60), "Time Limit")
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("enter start quiz  ·  l logout  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
