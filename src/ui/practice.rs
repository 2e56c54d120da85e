//! Screens for the free-text sections: speaking, writing and listening.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::models::Section;

use super::{render_feedback, render_heading, render_status};

pub fn render_speaking(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_heading(frame, chunks[0], "Speaking", app, Section::Speaking);

    let prompt = app.content().speaking_prompt(app.cursor(Section::Speaking));
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(prompt, Style::default().fg(Color::White).bold())),
        Line::from(""),
        Line::from(Span::styled(
            Section::Speaking.quick_tip(),
            Style::default().fg(Color::Yellow),
        )),
    ];
    frame.render_widget(Paragraph::new(content).wrap(Wrap { trim: true }), chunks[1]);

    render_status(frame, chunks[2], app, "n next  ·  esc menu  ·  ctrl+c quit");
}

pub fn render_writing(frame: &mut Frame, area: Rect, app: &App) {
    let prompt = app.content().writing_prompt(app.cursor(Section::Writing));

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Length(prompt.tips.len() as u16 + 1),
        Constraint::Fill(1),
        Constraint::Length(7),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0], &prompt.title, app, Section::Writing);
    render_text(frame, chunks[1], &prompt.task, Color::White);

    let tips: Vec<Line> = prompt
        .tips
        .iter()
        .map(|tip| Line::from(Span::styled(format!(" • {}", tip), Color::Yellow)))
        .collect();
    frame.render_widget(Paragraph::new(tips).wrap(Wrap { trim: false }), chunks[2]);

    render_input(frame, chunks[3], app, "Response");
    render_feedback(frame, chunks[4], app);
    render_status(frame, chunks[5], app, EDITING_CONTROLS);
}

pub fn render_listening(frame: &mut Frame, area: Rect, app: &App) {
    let exercise = app.content().listening_exercise(app.cursor(Section::Listening));

    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(5),
        Constraint::Length(2),
        Constraint::Fill(1),
        Constraint::Length(5),
        Constraint::Length(1),
    ])
    .margin(1)
    .split(area);

    render_heading(frame, chunks[0], &exercise.title, app, Section::Listening);

    let transcript = Paragraph::new(exercise.transcript.as_str())
        .wrap(Wrap { trim: true })
        .fg(Color::Gray)
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Color::DarkGray)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(transcript, chunks[1]);

    render_text(frame, chunks[2], &exercise.question, Color::White);
    render_input(frame, chunks[3], app, "Summary");
    render_feedback(frame, chunks[4], app);
    render_status(frame, chunks[5], app, EDITING_CONTROLS);
}

const EDITING_CONTROLS: &str = "ctrl+e evaluate  ·  ctrl+n next  ·  esc menu";

fn render_text(frame: &mut Frame, area: Rect, text: &str, color: Color) {
    let widget = Paragraph::new(text).wrap(Wrap { trim: true }).fg(color);
    frame.render_widget(widget, area);
}

fn render_input(frame: &mut Frame, area: Rect, app: &App, title: &str) {
    let mut lines: Vec<Line> = app.input().split('\n').map(Line::from).collect();
    if let Some(last) = lines.last_mut() {
        last.push_span(Span::styled("_", Style::default().fg(Color::Yellow)));
    }

    // Keep the cursor line visible once the text outgrows the box.
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible) as u16;

    let words = app.input().split_whitespace().count();
    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::DarkGray)
                .title(format!(" {} ({} words) ", title, words))
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(widget, area);
}
