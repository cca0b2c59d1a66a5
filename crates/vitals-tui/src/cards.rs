//! Card list: one entry per wellness tool, in fixed order.

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use vitals_core::steps::StepCounter;
use vitals_core::tool::{ToolKind, CARDS};

use crate::styles::ColorTheme;

/// Rows taken by one card, borders included.
pub const CARD_HEIGHT: u16 = 3;

/// Areas of the five cards, top to bottom.
#[must_use]
pub fn card_rects(area: Rect) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Length(CARD_HEIGHT); CARDS.len()];
    constraints.push(Constraint::Min(0));
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);
    chunks[..CARDS.len()].to_vec()
}

/// Card under a terminal cell, if any.
#[must_use]
pub fn card_at(area: Rect, column: u16, row: u16) -> Option<ToolKind> {
    card_rects(area)
        .iter()
        .position(|rect| rect.contains(Position::new(column, row)))
        .and_then(ToolKind::from_card_index)
}

/// Secondary text shown under a card title. Only the step card has one.
#[must_use]
pub fn card_subtext(kind: ToolKind, steps: StepCounter) -> Option<String> {
    match kind {
        ToolKind::Steps => Some(steps.display()),
        _ => None,
    }
}

/// Render the card list with `cursor` highlighted.
pub fn render_cards(frame: &mut Frame, area: Rect, cursor: usize, steps: StepCounter) {
    let theme = ColorTheme::default();

    for (i, (kind, rect)) in CARDS.iter().zip(card_rects(area)).enumerate() {
        if rect.height == 0 {
            break;
        }
        let selected = i == cursor;
        let border = if selected {
            theme.selected_style()
        } else {
            theme.border_style()
        };

        let mut spans = vec![Span::styled(kind.card_title(), theme.text_style())];
        if let Some(subtext) = card_subtext(*kind, steps) {
            spans.push(Span::raw("  "));
            spans.push(Span::styled(subtext, theme.muted_style()));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", i + 1));
        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), rect);
    }
}
