//! Meeting summarizer view

use super::forms::{draw_action_panel, draw_field, draw_help_text, split};
use super::layout::accent;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, SummarizerForm, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.summarizer;
    let color = accent(View::Summarizer);
    let (form_area, action_area) = split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),      // File path
            Constraint::Min(6),         // Meeting text
            Constraint::Percentage(35), // Summary
            Constraint::Length(1),      // Help text
        ])
        .margin(1)
        .split(form_area);

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        color
    };
    let block = Block::default()
        .title(" Meeting Summarizer ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, form_area);

    draw_field(frame, chunks[0], &form.file_path, form.active_field() == 0, color);
    draw_field(frame, chunks[1], &form.text, form.active_field() == 1, color);
    draw_summary(frame, chunks[2], form, color);

    draw_help_text(
        frame,
        chunks[3],
        &[
            ("Enter", "upload file"),
            (SUBMIT_SHORTCUT, "summarize"),
            ("Tab", "next"),
        ],
        color,
    );

    draw_action_panel(frame, action_area, form, color);
}

fn draw_summary(frame: &mut Frame, area: Rect, form: &SummarizerForm, color: Color) {
    let mut lines = Vec::new();
    match &form.summary {
        Some(summary) => lines.push(Line::from(summary.as_str())),
        None if form.key_points.is_empty() => lines.push(Line::from(Span::styled(
            "Summarize the meeting text to see the summary here",
            Style::default().fg(Color::DarkGray),
        ))),
        None => {}
    }

    if !form.key_points.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Key points",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )));
        for point in &form.key_points {
            lines.push(Line::from(vec![
                Span::styled("• ", Style::default().fg(color)),
                Span::raw(point.as_str()),
            ]));
        }
    }

    let summary = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .title(" Summary ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(summary, area);
}
