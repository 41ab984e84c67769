//! Action panel shown to the right of every form

use crate::state::{Form, RequestStatus};
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Width of the action panel
const PANEL_WIDTH: u16 = 24;

/// Split a form view into form (left) and action panel (right)
pub fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),              // Form area
            Constraint::Length(PANEL_WIDTH), // Action panel
        ])
        .split(area);
    (chunks[0], chunks[1])
}

/// Draw the form's buttons followed by its request status
pub fn draw_action_panel(frame: &mut Frame, area: Rect, form: &dyn Form, accent: Color) {
    let is_focused = form.is_buttons_row_active();
    let border_color = if is_focused { accent } else { Color::DarkGray };

    let block = Block::default()
        .title(" Actions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    let actions = form.actions();
    let mut constraints: Vec<Constraint> = actions
        .iter()
        .map(|_| Constraint::Length(BUTTON_HEIGHT))
        .collect();
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Status line

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner_area);

    for (idx, button) in actions.iter().enumerate() {
        render_action_button(
            frame,
            chunks[idx],
            button.action.label(),
            is_focused && form.selected_button() == idx,
            button.enabled,
            accent,
        );
    }

    let status = form.submission().status();
    let status_color = match status {
        RequestStatus::Idle => Color::DarkGray,
        RequestStatus::Pending { .. } => Color::Yellow,
        RequestStatus::Succeeded => Color::Green,
        RequestStatus::Failed => Color::Red,
    };
    let status_line = Paragraph::new(Line::from(vec![
        Span::styled(" Status: ", Style::default().fg(Color::DarkGray)),
        Span::styled(status.label(), Style::default().fg(status_color)),
    ]));
    frame.render_widget(status_line, chunks[chunks.len() - 1]);
}
