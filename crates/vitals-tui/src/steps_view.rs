//! Step counter modal content.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::Line;
use ratatui::widgets::{Gauge, Paragraph};
use ratatui::Frame;

use vitals_core::constants::STEPS_INCREMENT;
use vitals_core::steps::StepCounter;

use crate::styles::ColorTheme;

/// Render the shared count, progress toward the goal and the controls.
pub fn render_steps(frame: &mut Frame, area: Rect, steps: StepCounter) {
    let theme = ColorTheme::default();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // count
            Constraint::Length(1), // gauge
            Constraint::Length(1),
            Constraint::Length(1), // controls
            Constraint::Min(1),    // goal line
        ])
        .split(area);

    let count = Paragraph::new(Line::styled(
        steps.display(),
        theme.header_style().add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(count, rows[0]);

    let gauge = Gauge::default()
        .gauge_style(theme.success_style())
        .ratio(steps.progress());
    frame.render_widget(gauge, rows[1]);

    let controls = Paragraph::new(Line::styled(
        format!("[-] {STEPS_INCREMENT}    [+] {STEPS_INCREMENT}"),
        theme.warning_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(controls, rows[3]);

    let goal = Paragraph::new(Line::styled(
        format!("Go for a walk! Daily goal: {}", steps.goal()),
        theme.muted_style(),
    ))
    .alignment(Alignment::Center);
    frame.render_widget(goal, rows[4]);
}
