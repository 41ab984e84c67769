//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

/// Draw a form field, showing its placeholder while empty
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool, accent: Color) {
    let border_style = if is_active {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let cursor = Span::styled(
        if is_active { CURSOR } else { "" },
        Style::default().fg(accent),
    );

    let display_value = field.display_value();
    let is_empty = display_value.is_empty();
    let mut lines: Vec<Line> = if is_empty {
        vec![Line::from(Span::styled(
            field.placeholder.clone(),
            Style::default().fg(Color::DarkGray),
        ))]
    } else if field.is_multiline {
        // split('\n') keeps a trailing empty line so the cursor follows Enter
        display_value
            .split('\n')
            .map(|l| Line::from(l.to_string()))
            .collect()
    } else {
        vec![Line::from(display_value)]
    };

    if is_empty {
        if let Some(first) = lines.first_mut() {
            first.spans.insert(0, cursor);
        }
    } else if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}

/// Draw a one-line key hint row
pub fn draw_help_text(frame: &mut Frame, area: Rect, hints: &[(&str, &str)], accent: Color) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, action) in hints {
        spans.push(Span::styled(key.to_string(), Style::default().fg(accent)));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
