//! Layout components (sidebar, status bar)

use super::components::{render_sidebar_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::{BackendHealth, Severity, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Accent color of each view
pub fn accent(view: View) -> Color {
    match view {
        View::Landing => Color::Cyan,
        View::Search => Color::Blue,
        View::Generator => Color::Green,
        View::Summarizer => Color::Magenta,
        View::Nfr => Color::Rgb(255, 140, 0),
    }
}

/// Create the main layout: sidebar, main content, status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(18), // Sidebar
            Constraint::Min(0),     // Main content
        ])
        .split(rows[0]);

    (columns[0], columns[1], rows[1])
}

/// Draw the sidebar with one boxed button per view
pub fn draw_sidebar(frame: &mut Frame, area: Rect, app: &App) {
    let mut constraints = vec![Constraint::Min(0)]; // Top padding (flex)
    constraints.extend(View::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0)); // Bottom padding (flex)

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, view) in View::ALL.iter().enumerate() {
        render_sidebar_button(
            frame,
            chunks[idx + 1],
            &format!("F{}", idx + 1),
            view.title(),
            app.state.current_view == *view,
            accent(*view),
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (dot, dot_color) = match app.state.backend_health {
        BackendHealth::Healthy { .. } => (" ● ", Color::Green),
        BackendHealth::Unreachable => (" ● ", Color::Red),
        BackendHealth::Unknown | BackendHealth::Checking => (" ○ ", Color::Yellow),
    };
    spans.push(Span::styled(dot, Style::default().fg(dot_color)));
    spans.push(Span::styled(
        app.state.backend_health.label(),
        Style::default().fg(Color::Gray),
    ));
    spans.push(Span::raw(" | "));
    spans.push(Span::styled(
        view_hints(app.state.current_view),
        Style::default().fg(Color::Gray),
    ));

    if let Some(event) = app.state.notifications.current() {
        let color = match event.severity {
            Severity::Success => Color::Green,
            Severity::Destructive => Color::Red,
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(event.title.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current view
fn view_hints(view: View) -> String {
    match view {
        View::Landing => "h/j/k/l:nav  Enter:open  F1-F5:views  r:recheck  q:quit".to_string(),
        _ => format!(
            "Tab:next  {}:submit  Enter:press  F1-F5:views  Esc:home",
            crate::platform::SUBMIT_SHORTCUT
        ),
    }
}
