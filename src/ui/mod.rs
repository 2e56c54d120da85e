mod menu;
mod practice;
mod reading;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::{App, Screen};
use crate::models::Section;

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.screen {
        Screen::Menu => menu::render(frame, area, app),
        Screen::Practice(Section::Speaking) => practice::render_speaking(frame, area, app),
        Screen::Practice(Section::Writing) => practice::render_writing(frame, area, app),
        Screen::Practice(Section::Listening) => practice::render_listening(frame, area, app),
        Screen::Practice(Section::Reading) => reading::render(frame, area, app),
    }
}

/// Section title followed by the `position/total` progress.
fn render_heading(frame: &mut Frame, area: Rect, title: &str, app: &App, section: Section) {
    let progress = format!(
        "{}/{}",
        app.cursor(section) + 1,
        app.content().len(section)
    );
    let line = Line::from(vec![
        Span::styled(title, Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!("  {}", progress), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_feedback(frame: &mut Frame, area: Rect, app: &App) {
    let Some(feedback) = app.feedback() else {
        return;
    };

    let lines: Vec<Line> = feedback
        .lines()
        .iter()
        .map(|line| Line::from(Span::styled(line.as_str(), Color::Green)))
        .collect();

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Color::DarkGray)
            .title(" Feedback ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, area);
}

/// Bottom line: last status message if any, otherwise the key hints.
fn render_status(frame: &mut Frame, area: Rect, app: &App, controls: &str) {
    let text = match app.status() {
        Some(status) => format!("{}  ·  {}", status, controls),
        None => controls.to_string(),
    };
    let widget = Paragraph::new(text)
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
