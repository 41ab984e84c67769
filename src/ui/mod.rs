//! UI module for rendering the TUI

mod components;
mod forms;
mod generator;
mod landing;
mod layout;
mod nfr;
mod search;
mod summarizer;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (sidebar_area, main_area, status_area) = layout::create_layout(area);

    layout::draw_sidebar(frame, sidebar_area, app);

    match app.state.current_view {
        View::Landing => landing::draw(frame, main_area, app),
        View::Search => search::draw(frame, main_area, app),
        View::Generator => generator::draw(frame, main_area, app),
        View::Summarizer => summarizer::draw(frame, main_area, app),
        View::Nfr => nfr::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Toast goes on top of everything else
    if let Some(event) = app.state.notifications.current() {
        components::render_toast(frame, event, app.state.notifications.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockApiClientTrait;
    use crate::config::TuiConfig;
    use crate::state::NotificationEvent;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render_to_string(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut lines = Vec::new();
        for y in 0..height {
            let mut line = String::new();
            for x in 0..width {
                line.push_str(buffer[(x, y)].symbol());
            }
            lines.push(line.trim_end().to_string());
        }
        lines.join("\n")
    }

    fn app() -> App {
        App::new(TuiConfig::default(), Arc::new(MockApiClientTrait::new()))
    }

    #[test]
    fn test_landing_shows_heading_cards_and_footer() {
        let app = app();
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("tGPT Documentation Hub"));
        assert!(screen.contains("Search Results"));
        assert!(screen.contains("NFR Assistant"));
        assert!(screen.contains("Version 1.0.0 | Powered by AI"));
        assert!(screen.contains("backend: unknown"));
    }

    #[test]
    fn test_each_form_view_renders_its_title_and_buttons() {
        let cases = [
            (View::Search, "Semantic Search Assistant", "Search"),
            (View::Generator, "Sample Data Generator", "Load JSON Template"),
            (View::Summarizer, "Meeting Summarizer", "Upload File"),
            (View::Nfr, "NFR Assistant", "Export to PDF"),
        ];
        for (view, title, button) in cases {
            let mut app = app();
            app.navigate(view);
            let screen = render_to_string(&app, 120, 40);
            assert!(screen.contains(title), "{view:?} missing title");
            assert!(screen.contains(button), "{view:?} missing {button}");
            assert!(screen.contains("Status: Idle"), "{view:?} missing status");
        }
    }

    #[test]
    fn test_typed_text_replaces_placeholder() {
        let mut app = app();
        app.navigate(View::Search);
        assert!(render_to_string(&app, 120, 40).contains("Enter your search query..."));

        for c in "kafka".chars() {
            app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE));
        }
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("kafka▌"));
        assert!(!screen.contains("Enter your search query..."));
    }

    #[test]
    fn test_multiline_field_renders_each_line() {
        let mut app = app();
        app.navigate(View::Nfr);
        app.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE));
        app.handle_paste("first line\nsecond line");
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("first line"));
        assert!(screen.contains("second line▌"));
    }

    #[test]
    fn test_sidebar_and_disabled_actions_render() {
        let mut app = app();
        app.navigate(View::Nfr);
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("F1 Home"));
        assert!(screen.contains("F5 NFR"));
        // Export stays disabled until a document exists
        assert!(screen.contains("Export to DOCX"));
        assert!(screen.contains("Generate Document"));
    }

    #[test]
    fn test_toast_renders_over_view() {
        let mut app = app();
        app.state
            .notifications
            .push(NotificationEvent::destructive("Failed to perform search."));
        let screen = render_to_string(&app, 120, 40);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Failed to perform search."));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut app = app();
        for view in View::ALL {
            app.navigate(view);
            render_to_string(&app, 20, 6);
        }
    }
}
