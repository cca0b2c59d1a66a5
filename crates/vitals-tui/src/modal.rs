//! Modal shell: a centred overlay with a title and a close affordance.

use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding};
use ratatui::Frame;

use vitals_core::tool::ToolKind;

use crate::styles::ColorTheme;

/// Preferred modal width in columns.
pub const MODAL_WIDTH: u16 = 48;

/// Label of the close affordance drawn on the top border.
pub const CLOSE_LABEL: &str = "[x]";

/// Rows needed by each tool's modal, borders included.
#[must_use]
pub fn modal_height(kind: ToolKind) -> u16 {
    match kind {
        ToolKind::BloodSugar | ToolKind::Water => 8,
        ToolKind::Bmi | ToolKind::Steps => 9,
        ToolKind::Medication => 14,
    }
}

/// Geometry of an open modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModalLayout {
    /// Whole overlay window.
    pub popup: Rect,
    /// Content area inside borders and padding.
    pub body: Rect,
    /// Cells occupied by the close affordance.
    pub close_button: Rect,
}

impl ModalLayout {
    /// Whether a click at this cell hits the close affordance.
    #[must_use]
    pub fn hits_close(&self, column: u16, row: u16) -> bool {
        self.close_button.contains(Position::new(column, row))
    }
}

fn modal_block(title: &str) -> Block<'_> {
    let theme = ColorTheme::default();
    Block::default()
        .borders(Borders::ALL)
        .border_style(theme.selected_style())
        .padding(Padding::horizontal(1))
        .title(Line::styled(format!(" {title} "), theme.header_style()))
        .title(Line::styled(CLOSE_LABEL, theme.header_style()).right_aligned())
}

/// Compute where a modal of `height` rows sits inside `area`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn modal_layout(area: Rect, height: u16) -> ModalLayout {
    let width = MODAL_WIDTH.min(area.width);
    let height = height.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };
    let body = modal_block("").inner(popup);
    // Right-aligned titles end one cell before the corner.
    let label_width = CLOSE_LABEL.len() as u16;
    let close_button = Rect {
        x: popup.right().saturating_sub(label_width + 1).max(popup.x),
        y: popup.y,
        width: label_width.min(popup.width),
        height: u16::from(popup.height > 0),
    };
    ModalLayout {
        popup,
        body,
        close_button,
    }
}

/// Render a modal over `area`.
///
/// When `open` is false nothing is drawn and `body` is never called.
/// Otherwise the backdrop is dimmed, the window is cleared and framed,
/// and `body` draws the content into the inner area.
pub fn render_modal<F>(
    frame: &mut Frame,
    area: Rect,
    open: bool,
    title: &str,
    height: u16,
    body: F,
) -> Option<ModalLayout>
where
    F: FnOnce(&mut Frame, Rect),
{
    if !open {
        return None;
    }

    let layout = modal_layout(area, height);
    frame
        .buffer_mut()
        .set_style(area, Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(Clear, layout.popup);
    frame.render_widget(modal_block(title), layout.popup);
    body(frame, layout.body);
    Some(layout)
}
