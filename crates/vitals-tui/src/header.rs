//! TUI header panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Render the header panel.
pub fn render_header(frame: &mut Frame, area: Rect, steps: &str) {
    let text = vec![Line::from(vec![
        Span::styled("More", Style::default().fg(Color::Cyan)),
        Span::raw(format!(" | Steps today: {steps}")),
    ])];

    let block = Block::default().borders(Borders::BOTTOM).title(" Vitals ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
