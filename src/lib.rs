//! Helpers for the workspace integration tests: drive a [`TuiApp`] with
//! real terminal events and read back what it draws.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use vitals_tui::TuiApp;

/// Feed one terminal event through the same path the event loop uses.
pub fn send(app: &mut TuiApp, event: Event) {
    if let Some(msg) = app.message_for_event(event) {
        app.handle_message(msg);
    }
}

/// Press a key with no modifiers.
pub fn press(app: &mut TuiApp, code: KeyCode) {
    press_with(app, code, KeyModifiers::NONE);
}

pub fn press_with(app: &mut TuiApp, code: KeyCode, modifiers: KeyModifiers) {
    send(app, Event::Key(KeyEvent::new(code, modifiers)));
}

/// Close the open modal from the keyboard (Ctrl+X).
pub fn close_modal(app: &mut TuiApp) {
    press_with(app, KeyCode::Char('x'), KeyModifiers::CONTROL);
}

/// Type each character of `text`.
pub fn type_text(app: &mut TuiApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

/// Left-click a terminal cell.
pub fn click(app: &mut TuiApp, column: u16, row: u16) {
    send(
        app,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }),
    );
}

/// Render the app at its current terminal size and return the screen as text,
/// one line per row.
pub fn render_to_string(app: &TuiApp) -> String {
    let backend = TestBackend::new(app.terminal_width, app.terminal_height);
    let mut terminal = Terminal::new(backend).expect("test backend");
    let frame = terminal.draw(|frame| app.render(frame)).expect("draw");
    let mut out = String::new();
    for y in 0..frame.area.height {
        for x in 0..frame.area.width {
            out.push_str(frame.buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}
