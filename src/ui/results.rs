use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::models::{QuizResult, User};

pub fn render(frame: &mut Frame, area: Rect, user: Option<&User>, result: &QuizResult) {
    let chunks = Layout::vertical([
        Constraint::Length(4),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0], user, result);
    render_score_card(frame, chunks[1], result);
    render_analysis(frame, chunks[2], result);
    render_encouragement(frame, chunks[3], result);
    render_controls(frame, chunks[5]);
}

fn score_color(score: u32) -> Color {
    match score {
        80.. => Color::Green,
        60..=79 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_heading(frame: &mut Frame, area: Rect, user: Option<&User>, result: &QuizResult) {
    let name = user.map(|u| u.display_name.as_str()).unwrap_or("there");
    let content = vec![
        Line::from(Span::styled(
            "Quiz Complete!",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(format!("{}, {}", result.verdict(), name).fg(Color::Gray)),
    ];
    frame.render_widget(Paragraph::new(content).alignment(Alignment::Center), area);
}

fn render_score_card(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let color = score_color(result.score);
    let content = vec![
        Line::from(Span::styled(
            format!("{}%", result.score),
            Style::default().fg(color).bold(),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("{}/{}", result.correct_answers, result.total_questions),
                Style::default().fg(Color::Green).bold(),
            ),
            Span::styled(" correct   ", Style::default().fg(Color::Gray)),
            Span::styled(
                result.formatted_time_taken(),
                Style::default().fg(Color::Blue).bold(),
            ),
            Span::styled(" time taken   ", Style::default().fg(Color::Gray)),
            Span::styled(
                result.grade().to_string(),
                Style::default().fg(Color::Magenta).bold(),
            ),
            Span::styled(" grade", Style::default().fg(Color::Gray)),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Your Score ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::vertical(1)),
    );
    frame.render_widget(widget, area);
}

fn render_analysis(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("{:<28}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::White).bold()),
        ])
    };

    let content = vec![
        row("Accuracy Rate", format!("{}%", result.score)),
        row(
            "Average Time per Question",
            format!("{}s", result.average_seconds_per_question()),
        ),
        row(
            "Questions Attempted",
            format!("{}/{}", result.total_questions, result.total_questions),
        ),
    ];

    let widget = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray)
            .title(" Performance Analysis ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::uniform(1)),
    );
    frame.render_widget(widget, area);
}

fn render_encouragement(frame: &mut Frame, area: Rect, result: &QuizResult) {
    let widget = Paragraph::new(result.encouragement())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .fg(Color::Gray);
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("r retake quiz  ·  d back to dashboard  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
