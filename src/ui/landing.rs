//! Landing view: feature cards linking to each tool

use super::layout::accent;
use crate::app::App;
use crate::state::{FeatureDescriptor, FEATURES, FEATURE_COLUMNS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Card dimensions
const CARD_HEIGHT: u16 = 6; // 1 (top border) + 4 (content) + 1 (bottom border)
const CARD_SPACING_H: u16 = 2;

const HEADING: &str = "tGPT Documentation Hub";
const SUBTITLE: &str =
    "Team Guidance and Productive Tool - Your centralized hub for managing documentation and workflows";
const FOOTER: &str = "Version 1.0.0 | Powered by AI";

/// Grid layout with the same column count the landing keys move over
struct GridLayout {
    columns: usize,
    card_width: u16,
}

impl GridLayout {
    fn new(area_width: u16) -> Self {
        let columns = FEATURE_COLUMNS;
        let spacing = CARD_SPACING_H * (columns as u16 - 1);
        let card_width = area_width.saturating_sub(spacing) / columns as u16;
        Self {
            columns,
            card_width,
        }
    }

    fn index_to_pos(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    fn card_area(&self, inner: Rect, row: usize, col: usize) -> Rect {
        let x = inner.x + (col as u16) * (self.card_width + CARD_SPACING_H);
        let y = inner.y + (row as u16) * CARD_HEIGHT;
        Rect {
            x,
            y,
            width: self.card_width,
            height: CARD_HEIGHT,
        }
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Heading + subtitle
            Constraint::Min(0),    // Cards
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            HEADING,
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ])
    .wrap(Wrap { trim: true })
    .alignment(Alignment::Center);
    frame.render_widget(header, chunks[0]);

    let grid = GridLayout::new(chunks[1].width);
    for (index, feature) in FEATURES.iter().enumerate() {
        let (row, col) = grid.index_to_pos(index);
        let card = grid.card_area(chunks[1], row, col);
        if card.bottom() > chunks[1].bottom() {
            break;
        }
        draw_feature_card(frame, card, feature, index == app.state.landing_index);
    }

    let footer = Paragraph::new(FOOTER)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[2]);
}

fn draw_feature_card(frame: &mut Frame, area: Rect, feature: &FeatureDescriptor, is_selected: bool) {
    let color = accent(feature.view);
    let border_style = if is_selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let title_style = if is_selected {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };

    let content = vec![
        Line::from(Span::styled(feature.title, title_style)),
        Line::from(Span::styled(
            feature.description,
            Style::default().fg(Color::Gray),
        )),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
