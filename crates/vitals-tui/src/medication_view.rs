//! Medication modal content.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use vitals_core::medication::MedicationForm;

use crate::fields::scrolled_field_line;
use crate::styles::ColorTheme;

const BULLET: &str = "\u{2022} ";
const INDENT: &str = "  ";

/// Render the pending entry and the reminders added so far.
///
/// Long entries wrap onto indented rows. When the list outgrows the modal
/// the newest entries stay visible.
pub fn render_medication(frame: &mut Frame, area: Rect, form: &MedicationForm) {
    let mut lines = vec![
        scrolled_field_line("Medicine or alarm:", &form.pending, area.width),
        Line::raw(""),
    ];

    let mut room = usize::from(area.height).saturating_sub(lines.len());
    let mut shown: Vec<Vec<Line<'static>>> = Vec::new();
    for entry in form.entries().iter().rev() {
        let rows = entry_lines(entry, area.width);
        if rows.len() > room {
            break;
        }
        room -= rows.len();
        shown.push(rows);
    }
    lines.extend(shown.into_iter().rev().flatten());

    frame.render_widget(Paragraph::new(lines), area);
}

/// One entry broken into rows of at most `width` cells.
fn entry_lines(entry: &str, width: u16) -> Vec<Line<'static>> {
    let theme = ColorTheme::default();
    let chunk = usize::from(width).saturating_sub(BULLET.chars().count()).max(1);
    let chars: Vec<char> = entry.chars().collect();
    if chars.is_empty() {
        return vec![Line::styled(BULLET, theme.muted_style())];
    }

    chars
        .chunks(chunk)
        .enumerate()
        .map(|(i, part)| {
            let lead = if i == 0 { BULLET } else { INDENT };
            Line::from(vec![
                Span::styled(lead, theme.muted_style()),
                Span::styled(part.iter().collect::<String>(), theme.text_style()),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn rows(form: &MedicationForm, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let frame = terminal
            .draw(|frame| render_medication(frame, frame.area(), form))
            .unwrap();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| frame.buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn add(form: &mut MedicationForm, text: &str) {
        form.pending.set(text);
        assert!(form.add());
    }

    #[test]
    fn entries_listed_in_order() {
        let mut form = MedicationForm::new();
        add(&mut form, "Aspirin");
        add(&mut form, "Metformin");
        let screen = rows(&form, 44, 12).join("\n");
        let first = screen.find("Aspirin").unwrap();
        let second = screen.find("Metformin").unwrap();
        assert!(first < second);
    }

    #[test]
    fn overflow_keeps_newest_entries() {
        let mut form = MedicationForm::new();
        for i in 1..=8 {
            add(&mut form, &format!("Dose {i}"));
        }
        // Two rows go to the input and the spacer, leaving four for entries.
        let screen = rows(&form, 44, 6).join("\n");
        assert!(screen.contains("Dose 8"));
        assert!(screen.contains("Dose 5"));
        assert!(!screen.contains("Dose 4"));
        assert!(!screen.contains("Dose 1"));
    }

    #[test]
    fn long_entry_wraps_without_losing_text() {
        let mut form = MedicationForm::new();
        add(&mut form, "Amoxicillin 500mg every eight hours with food");
        let screen = rows(&form, 24, 8);
        let body: String = screen[2..]
            .iter()
            .map(|row| row.trim_start_matches(['\u{2022}', ' ']).trim_end())
            .collect();
        assert_eq!(body, "Amoxicillin 500mg every eight hours with food");
    }

    #[test]
    fn long_pending_text_keeps_cursor_visible() {
        let mut form = MedicationForm::new();
        form.pending.set("Take vitamin D with breakfast every morning");
        let screen = rows(&form, 44, 4);
        assert!(screen[0].ends_with("morning_]"));
    }
}
