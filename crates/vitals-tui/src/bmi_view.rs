//! BMI modal content.

use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

use vitals_core::bmi::{BmiField, BmiForm};
use vitals_core::constants::{BMI_MIN_HEIGHT_CM, BMI_MIN_WEIGHT_KG};

use crate::fields::field_line;
use crate::styles::ColorTheme;

/// Render both inputs, the focused one highlighted, and the last result.
pub fn render_bmi(frame: &mut Frame, area: Rect, form: &BmiForm) {
    let theme = ColorTheme::default();
    let focus = form.focus();

    let mut lines = vec![
        field_line("Weight (kg):", &form.weight, focus == BmiField::Weight),
        field_line("Height (cm):", &form.height, focus == BmiField::Height),
        Line::styled(
            format!("Min {BMI_MIN_WEIGHT_KG} kg / {BMI_MIN_HEIGHT_CM} cm. Tab switches, enter calculates."),
            theme.muted_style(),
        ),
    ];
    if let Some(result) = form.result() {
        lines.push(Line::raw(""));
        lines.push(Line::styled(result.to_string(), theme.result_style()));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}
