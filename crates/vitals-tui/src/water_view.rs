//! Water reminder modal content.

use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use vitals_core::water::{self, WaterCounter};

use crate::styles::ColorTheme;

/// Render the session's glass count and the recommended range.
pub fn render_water(frame: &mut Frame, area: Rect, counter: WaterCounter) {
    let theme = ColorTheme::default();
    let lines = vec![
        Line::styled(counter.display(), theme.header_style()),
        Line::raw(""),
        Line::styled("[+] 1 glass    [r] reset", theme.warning_style()),
        Line::styled(water::recommendation(), theme.muted_style()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}
