//! Toast overlay for notifications

use crate::state::{NotificationEvent, Severity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const MAX_WIDTH: u16 = 48;

/// Render `event` in the top-right corner of the frame
pub fn render_toast(frame: &mut Frame, event: &NotificationEvent, queued: usize) {
    let area = frame.area();
    let padding = 2u16; // 1 char padding on each side
    let max_line_width = MAX_WIDTH.saturating_sub(padding + 2).max(1) as usize;

    let wrapped_lines = wrap_text(&event.message, max_line_width);

    let content_width = wrapped_lines
        .iter()
        .map(|l| l.chars().count())
        .max()
        .unwrap_or(0)
        .max(event.title.chars().count()) as u16;
    let width = (content_width + padding + 2).min(MAX_WIDTH).min(area.width);
    // title + message lines + hint + borders
    let height = (1 + wrapped_lines.len() as u16 + 1 + 2).min(area.height);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width,
        height,
    };

    frame.render_widget(Clear, toast_area);

    let color = match event.severity {
        Severity::Success => Color::Green,
        Severity::Destructive => Color::Red,
    };

    let mut content = vec![Line::from(Span::styled(
        event.title.as_str(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ))];
    content.extend(wrapped_lines.into_iter().map(Line::from));

    let hint = if queued > 1 {
        format!("Esc: dismiss (+{} more)", queued - 1)
    } else {
        "Esc: dismiss".to_string()
    };
    content.push(Line::from(Span::styled(
        hint,
        Style::default().fg(Color::DarkGray),
    )));

    let toast = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(toast, toast_area);
}

/// Wrap text to fit within a maximum width
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        for word in paragraph.split_whitespace() {
            let current_width = current_line.chars().count();
            if current_width + word.chars().count() + 1 > max_width && !current_line.is_empty() {
                lines.push(std::mem::take(&mut current_line));
            }
            if !current_line.is_empty() {
                current_line.push(' ');
            }
            current_line.push_str(word);
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_wrap_breaks_on_words() {
        let lines = wrap_text("Failed to perform search. Please try again.", 20);
        assert_eq!(
            lines,
            vec!["Failed to perform", "search. Please try", "again."]
        );
    }

    #[test]
    fn test_wrap_keeps_blank_paragraphs() {
        assert_eq!(wrap_text("a\n\nb", 10), vec!["a", "", "b"]);
    }

    #[test]
    fn test_wrap_empty_message() {
        assert_eq!(wrap_text("", 10), vec![String::new()]);
    }

    #[test]
    fn test_long_word_gets_its_own_line() {
        assert_eq!(
            wrap_text("see /tmp/exports/atlas-nfr.pdf now", 10),
            vec!["see", "/tmp/exports/atlas-nfr.pdf", "now"]
        );
    }
}
