//! Shared rendering for form inputs.

use ratatui::text::{Line, Span};

use vitals_core::text::TextField;

use crate::styles::ColorTheme;

/// Shown after the text of the focused field.
pub const CURSOR: &str = "_";

/// One labelled input, e.g. `Weight (kg): [72_]`.
#[must_use]
pub fn field_line<'a>(label: &'a str, field: &'a TextField, focused: bool) -> Line<'a> {
    labelled(label, field.value(), focused)
}

/// Like [`field_line`], but keeps the end of a long value in view so the
/// cursor never leaves a row `width` cells wide.
#[must_use]
pub fn scrolled_field_line<'a>(label: &'a str, field: &'a TextField, width: u16) -> Line<'a> {
    // " [" + CURSOR + "]"
    let chrome = label.chars().count() + 4;
    let room = usize::from(width).saturating_sub(chrome);
    labelled(label, tail(field.value(), room), true)
}

/// The last `max_chars` characters of `value`.
#[must_use]
pub fn tail(value: &str, max_chars: usize) -> &str {
    let skip = value.chars().count().saturating_sub(max_chars);
    value.char_indices().nth(skip).map_or("", |(i, _)| &value[i..])
}

fn labelled<'a>(label: &'a str, value: &'a str, focused: bool) -> Line<'a> {
    let theme = ColorTheme::default();
    let value_style = if focused {
        theme.selected_style()
    } else {
        theme.text_style()
    };
    let mut spans = vec![
        Span::styled(label, theme.muted_style()),
        Span::raw(" ["),
        Span::styled(value, value_style),
    ];
    if focused {
        spans.push(Span::styled(CURSOR, theme.warning_style()));
    }
    spans.push(Span::raw("]"));
    Line::from(spans)
}
