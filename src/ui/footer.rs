use chrono::{Datelike, Local};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(footer_line(Local::now().year()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Color::DarkGray),
        );
    frame.render_widget(widget, area);
}

fn footer_line(year: i32) -> Line<'static> {
    Line::from(vec![
        Span::styled("QuizMaster", Style::default().fg(Color::Cyan).bold()),
        Span::styled(
            format!("  ·  {} QuizMaster. All rights reserved.", year),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            "  ·  support@quizmaster.com",
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;

    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_footer_shows_given_year() {
        assert!(text(&footer_line(2031)).contains("2031 QuizMaster. All rights reserved."));
    }

    #[test]
    fn test_rendered_footer_uses_current_year() {
        let mut terminal = Terminal::new(TestBackend::new(100, 2)).unwrap();
        terminal.draw(|frame| render(frame, frame.area())).unwrap();
        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        let year = Local::now().year();
        assert!(rendered.contains(&format!("{} QuizMaster", year)));
    }
}
