//! Sample data generator view

use super::forms::{draw_action_panel, draw_field, draw_help_text, split};
use super::layout::accent;
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{Form, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.generator;
    let color = accent(View::Generator);
    let (form_area, action_area) = split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Template
            Constraint::Length(3), // Record count
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
        .title(" Sample Data Generator ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, form_area);

    draw_field(frame, chunks[0], &form.template, form.active_field() == 0, color);
    draw_field(frame, chunks[1], &form.count, form.active_field() == 1, color);

    draw_help_text(
        frame,
        chunks[2],
        &[
            ("Tab", "next field"),
            (SUBMIT_SHORTCUT, "generate"),
            ("Esc", "home"),
        ],
        color,
    );

    draw_action_panel(frame, action_area, form, color);
}
