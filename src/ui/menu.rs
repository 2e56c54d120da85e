use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::app::App;
use crate::models::Section;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(16),
        Constraint::Fill(1),
    ])
    .split(area);

    let mut content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "PTE PRACTICE",
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from("Speaking · Writing · Listening · Reading".fg(Color::DarkGray)),
        Line::from(""),
    ];

    for (index, section) in Section::ALL.iter().enumerate() {
        let is_selected = index == app.menu_selection();
        let style = if is_selected {
            Style::default().fg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_selected { ">" } else { " " };
        let total = app.content().len(*section);

        content.push(Line::from(vec![
            Span::styled(format!("{} {}. ", marker, index + 1), style),
            Span::styled(format!("{:<10}", section.title()), style),
            Span::styled(
                format!(" {} items", total),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let tip = Section::ALL[app.menu_selection()].quick_tip();
    content.extend([
        Line::from(""),
        Line::from(Span::styled(tip, Style::default().fg(Color::Yellow))),
        Line::from(""),
        Line::from(Span::styled(
            "ENTER",
            Style::default().fg(Color::Green).bold(),
        )),
        Line::from("to practice".fg(Color::DarkGray)),
        Line::from(""),
    ]);

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, chunks[1]);

    let controls = Paragraph::new("j/k navigate  ·  1-4 jump  ·  enter open  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(controls, chunks[2]);
}
