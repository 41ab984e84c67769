//! Semantic search view

use super::forms::{draw_action_panel, draw_field, draw_help_text, split};
use super::layout::accent;
use crate::app::App;
use crate::state::{Form, RequestStatus, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.search;
    let color = accent(View::Search);
    let (form_area, action_area) = split(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query
            Constraint::Min(3),    // Results
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
        .title(" Semantic Search Assistant ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, form_area);

    draw_field(frame, chunks[0], &form.query, form.active_field() == 0, color);

    // The backend answer carries no result list to display
    let results_text = match form.submission().status() {
        RequestStatus::Pending { .. } => "Searching...",
        RequestStatus::Succeeded => "Search completed. Results have been fetched successfully.",
        RequestStatus::Idle | RequestStatus::Failed => {
            "Enter a search query above to see semantic search results"
        }
    };
    let results = Paragraph::new(results_text)
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Results ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(results, chunks[1]);

    draw_help_text(
        frame,
        chunks[2],
        &[
            ("Enter", "search"),
            ("Tab", "actions"),
            ("Esc", "home"),
        ],
        color,
    );

    draw_action_panel(frame, action_area, form, color);
}
