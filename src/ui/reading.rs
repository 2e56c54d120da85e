use ratatui::{
    prelude::*,
    widgets::{Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Section;

use super::{render_feedback, render_heading, render_status};

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let index = app.cursor(Section::Reading);
    let question = app.content().reading_question(index);

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(4),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_heading(frame, chunks[0], Section::Reading.title(), app, Section::Reading);

    let widget = Paragraph::new(question.prompt.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, chunks[1]);

    render_options(frame, chunks[2], &question.options, app.selected_option());
    render_feedback(frame, chunks[3], app);
    render_status(
        frame,
        chunks[4],
        app,
        "j/k navigate  ·  enter check  ·  n next  ·  esc menu",
    );
}

fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

fn render_options(frame: &mut Frame, area: Rect, options: &[String], selected: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(options.len() * 2);

    for (index, option) in options.iter().enumerate() {
        let is_selected = index == selected;
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::data::builtin;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render(frame, area, app);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_reading_screen_shows_section_and_progress() {
        let mut app = App::new(Arc::new(builtin().clone()));
        app.open_section(Section::Reading);

        let text = screen_text(&app);
        assert!(text.contains("Reading  1/2"));
        assert!(text.contains("A. "));

        app.advance();
        assert!(screen_text(&app).contains("Reading  2/2"));
    }

    #[test]
    fn test_option_labels() {
        assert_eq!(option_label(0), 'A');
        assert_eq!(option_label(3), 'D');
    }
}
