//! Blood-sugar modal content.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use vitals_core::constants::GLUCOSE_INPUT_RANGE;
use vitals_core::glucose::{GlucoseClassification, GlucoseForm};

use crate::fields::field_line;
use crate::styles::ColorTheme;

/// Render the reading input and, after a submit, its classification.
pub fn render_glucose(frame: &mut Frame, area: Rect, form: &GlucoseForm) {
    let theme = ColorTheme::default();
    let (low, high) = GLUCOSE_INPUT_RANGE;

    let mut lines = vec![
        field_line("Level (mg/dL):", &form.level, true),
        Line::styled(
            format!("Range {low}-{high}. Press enter to check."),
            theme.muted_style(),
        ),
    ];
    if let Some(result) = form.result() {
        let style = match result {
            GlucoseClassification::Invalid => theme.error_style(),
            _ => theme.result_style(),
        };
        lines.push(Line::raw(""));
        lines.push(Line::styled(result.message(), style));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
