use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
};

use crate::app::QuizScreen;
use crate::models::Question;
use crate::session::QuizSession;

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];
const LOW_TIME_SECS: u32 = 60;

pub fn render(frame: &mut Frame, area: Rect, screen: &QuizScreen) {
    let session = &screen.session;

    let chunks = Layout::vertical([
        Constraint::Length(1), // Timer and answered count
        Constraint::Length(3), // Progress
        Constraint::Length(4), // Question text
        Constraint::Min(10),   // Options
        Constraint::Length(3), // Navigator
        Constraint::Length(1), // Controls
    ])
    .margin(1)
    .split(area);

    render_status(frame, chunks[0], session);
    render_progress(frame, chunks[1], session);
    render_question_text(frame, chunks[2], session.current_question());
    render_options(
        frame,
        chunks[3],
        session.current_question(),
        session.current_answer(),
        screen.cursor(),
    );
    render_navigator(frame, chunks[4], session);
    render_controls(frame, chunks[5], session.is_last(), screen.awaiting_jump());
}

fn render_status(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let timer_color = if session.remaining_seconds() <= LOW_TIME_SECS {
        Color::Red
    } else {
        Color::Yellow
    };

    let line = Line::from(vec![
        Span::styled("Time ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            session.formatted_remaining(),
            Style::default().fg(timer_color).bold(),
        ),
        Span::styled("   Answered ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("{}/{}", session.answered_count(), session.total_questions()),
            Style::default().fg(Color::Green),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn render_progress(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let label = format!(
        "Question {} of {}",
        session.current_index() + 1,
        session.total_questions()
    );

    let widget = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(" Progress ")
                .title_style(Style::default().fg(Color::Cyan)),
        )
        .gauge_style(Style::default().fg(Color::Magenta).bg(Color::Black))
        .percent(session.progress_percent())
        .label(label);
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, question: &Question) {
    let widget = Paragraph::new(question.prompt)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White).bold())
        .block(Block::default().padding(Padding::new(1, 1, 1, 0)));
    frame.render_widget(widget, area);
}

fn render_options(
    frame: &mut Frame,
    area: Rect,
    question: &Question,
    answer: Option<usize>,
    cursor: usize,
) {
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_chosen = answer == Some(index);
        let style = if is_chosen {
            Style::default().fg(Color::Magenta).bold()
        } else if index == cursor {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if index == cursor { ">" } else { " " };
        let check = if is_chosen { "(x)" } else { "( )" };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, check), style),
            Span::styled(format!("{}. ", OPTION_LABELS[index]), style),
            Span::styled(*option, style),
        ]));
        lines.push(Line::from(""));
    }

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Options ")
            .title_style(Style::default().fg(Color::Cyan))
            .padding(Padding::new(1, 1, 1, 0)),
    );
    frame.render_widget(widget, area);
}

fn render_navigator(frame: &mut Frame, area: Rect, session: &QuizSession) {
    let spans: Vec<Span> = (0..session.total_questions())
        .map(|index| {
            let style = if index == session.current_index() {
                Style::default().fg(Color::Black).bg(Color::Magenta).bold()
            } else if session.answers().is_answered(index) {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" {} ", index + 1), style)
        })
        .collect();

    let widget = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP).border_style(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect, is_last: bool, awaiting_jump: bool) {
    let text = if awaiting_jump {
        "jump to question: 1-9, 0 for 10".to_string()
    } else {
        let enter = if is_last { "submit quiz" } else { "next" };
        format!(
            "1-4/a-d answer  ·  h/l prev/next  ·  g jump  ·  enter {}  ·  esc dashboard  ·  q quit",
            enter
        )
    };

    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
