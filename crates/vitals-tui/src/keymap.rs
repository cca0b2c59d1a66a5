//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use vitals_core::tool::{InputStyle, ToolKind};

/// How key presses are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// No modal open: navigating the card list.
    Browse,
    /// A form modal is open and owns typed characters.
    Form,
    /// A counter modal is open.
    Counter,
}

impl InputMode {
    /// Mode for the currently active tool.
    #[must_use]
    pub fn for_tool(active: Option<ToolKind>) -> Self {
        match active.map(ToolKind::input_style) {
            None => Self::Browse,
            Some(InputStyle::Form) => Self::Form,
            Some(InputStyle::Counter) => Self::Counter,
        }
    }
}

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Cancel,
    CursorUp,
    CursorDown,
    Open,
    Select(ToolKind),
    Close,
    Input(char),
    Backspace,
    NextField,
    Submit,
    Increment,
    Decrement,
    Reset,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent, mode: InputMode) -> KeyAction {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Cancel;
    }
    if mode != InputMode::Browse && is_close_chord(key) {
        return KeyAction::Close;
    }
    if let KeyCode::F(n @ 1..=5) = key.code {
        return ToolKind::from_card_index(usize::from(n - 1)).map_or(KeyAction::None, KeyAction::Select);
    }

    match mode {
        InputMode::Browse => map_browse(key),
        InputMode::Form => map_form(key),
        InputMode::Counter => map_counter(key),
    }
}

/// Ctrl+X, the keyboard route to the modal's `[x]`.
fn is_close_chord(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn map_browse(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => KeyAction::CursorUp,
        KeyCode::Down | KeyCode::Char('j') => KeyAction::CursorDown,
        KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Open,
        KeyCode::Char(c @ '1'..='5') => {
            let index = (c as usize) - ('1' as usize);
            ToolKind::from_card_index(index).map_or(KeyAction::None, KeyAction::Select)
        }
        _ => KeyAction::None,
    }
}

fn map_form(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab | KeyCode::BackTab => KeyAction::NextField,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::Input(c)
        }
        _ => KeyAction::None,
    }
}

fn map_counter(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('+' | '=') | KeyCode::Right | KeyCode::Up => KeyAction::Increment,
        KeyCode::Char('-') | KeyCode::Left | KeyCode::Down => KeyAction::Decrement,
        KeyCode::Char('r' | '0') => KeyAction::Reset,
        _ => KeyAction::None,
    }
}
