//! NFR assistant view

use super::forms::{draw_action_panel, draw_field, draw_help_text, split};
use super::layout::accent;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.nfr;
    let color = accent(View::Nfr);
    let (form_area, action_area) = split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Project name
            Constraint::Min(6),    // Description
            Constraint::Min(4),    // Generated document
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(form_area);

    let border_color = if form.is_buttons_row_active() {
        Color::DarkGray
    } else {
        color
    };
    let block = Block::default()
        .title(" NFR Assistant ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, form_area);

    draw_field(frame, chunks[0], &form.project_name, form.active_field() == 0, color);
    draw_field(frame, chunks[1], &form.description, form.active_field() == 1, color);

    let document = match &form.generated_markdown {
        Some(markdown) => Paragraph::new(markdown.as_str()),
        None => Paragraph::new(Line::from(Span::styled(
            "Generate a document to enable export",
            Style::default().fg(Color::DarkGray),
        ))),
    };
    frame.render_widget(
        document.wrap(Wrap { trim: false }).block(
            Block::default()
                .title(" Document ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        ),
        chunks[2],
    );

    draw_help_text(
        frame,
        chunks[3],
        &[
            ("Tab", "next field"),
            (SUBMIT_SHORTCUT, "generate"),
            ("Esc", "home"),
        ],
        color,
    );

    draw_action_panel(frame, action_area, form, color);
}
