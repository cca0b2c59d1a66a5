//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use vitals_core::tool::ToolKind;

use crate::keymap::InputMode;

fn hints(active: Option<ToolKind>) -> &'static [(&'static str, &'static str)] {
    match (InputMode::for_tool(active), active) {
        (InputMode::Browse, _) => &[
            ("\u{2191}\u{2193}", "move"),
            ("enter", "open"),
            ("1-5", "tool"),
            ("q", "quit"),
        ],
        (_, Some(ToolKind::Bmi)) => &[
            ("enter", "calculate"),
            ("tab", "next field"),
            ("^X", "close"),
            ("F1-F5", "switch"),
        ],
        (InputMode::Form, _) => &[
            ("enter", "submit"),
            ("^X", "close"),
            ("F1-F5", "switch"),
        ],
        (_, Some(ToolKind::Water)) => &[
            ("+", "add glass"),
            ("r", "reset"),
            ("^X", "close"),
            ("F1-F5", "switch"),
        ],
        (InputMode::Counter, _) => &[
            ("+/-", "adjust"),
            ("^X", "close"),
            ("F1-F5", "switch"),
        ],
    }
}

/// Render the footer panel with keyboard shortcuts for the open tool.
pub fn render_footer(frame: &mut Frame, area: Rect, active: Option<ToolKind>) {
    let entries = hints(active);
    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (i, (key, label)) in entries.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < entries.len() { " | " } else { "" };
        spans.push(Span::raw(format!(": {label}{sep}")));
    }

    let block = Block::default().borders(Borders::TOP);
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}
