//! TUI application model (Elm architecture).

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event::DisableMouseCapture, event::EnableMouseCapture, execute};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::{debug, info, warn};

use vitals_core::coordinator::{Dashboard, ToolSession};
use vitals_core::tool::{ToolKind, CARDS};

use crate::bmi_view::render_bmi;
use crate::cards::{card_at, render_cards};
use crate::footer::render_footer;
use crate::glucose_view::render_glucose;
use crate::header::render_header;
use crate::keymap::{map_key, InputMode, KeyAction};
use crate::medication_view::render_medication;
use crate::messages::TuiMessage;
use crate::modal::{modal_height, modal_layout, render_modal};
use crate::steps_view::render_steps;
use crate::water_view::render_water;

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Tool selection and shared step count.
    pub dashboard: Dashboard,
    /// Highlighted card, for keyboard navigation.
    pub cursor: usize,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
}

impl TuiApp {
    /// Create a new TUI app around a dashboard.
    #[must_use]
    pub fn new(dashboard: Dashboard) -> Self {
        Self {
            should_quit: false,
            dashboard,
            cursor: 0,
            terminal_width: 80,
            terminal_height: 24,
        }
    }

    /// Current keyboard mode.
    #[must_use]
    pub fn input_mode(&self) -> InputMode {
        InputMode::for_tool(self.dashboard.active_tool())
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Click { column, row } => {
                self.handle_click(column, row);
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
            }
            TuiMessage::Tick => {
                // Tick triggers re-render, nothing to update in model
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit | KeyAction::Cancel => {
                self.should_quit = true;
            }
            KeyAction::CursorUp => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyAction::CursorDown => {
                self.cursor = (self.cursor + 1).min(CARDS.len() - 1);
            }
            KeyAction::Open => {
                if let Some(kind) = ToolKind::from_card_index(self.cursor) {
                    self.dashboard.select_tool(kind);
                }
            }
            KeyAction::Select(kind) => {
                self.select(kind);
            }
            KeyAction::Close => {
                self.dashboard.close_tool();
            }
            KeyAction::Input(c) => {
                if let Some(field) = self.focused_field() {
                    field.push(c);
                }
            }
            KeyAction::Backspace => {
                if let Some(field) = self.focused_field() {
                    field.backspace();
                }
            }
            KeyAction::NextField => {
                if let Some(ToolSession::Bmi(form)) = self.dashboard.session_mut() {
                    form.toggle_focus();
                }
            }
            KeyAction::Submit => match self.dashboard.session_mut() {
                Some(ToolSession::BloodSugar(form)) => {
                    form.evaluate();
                }
                Some(ToolSession::Bmi(form)) => {
                    form.evaluate();
                }
                Some(ToolSession::Medication(form)) => {
                    form.add();
                }
                _ => {}
            },
            KeyAction::Increment => {
                if self.dashboard.is_open(ToolKind::Steps) {
                    self.dashboard.steps_mut().increment();
                } else if let Some(ToolSession::Water(counter)) = self.dashboard.session_mut() {
                    counter.increment();
                }
            }
            KeyAction::Decrement => {
                if self.dashboard.is_open(ToolKind::Steps) {
                    self.dashboard.steps_mut().decrement();
                }
            }
            KeyAction::Reset => {
                if let Some(ToolSession::Water(counter)) = self.dashboard.session_mut() {
                    counter.reset();
                }
            }
            KeyAction::None => {}
        }
    }

    /// Handle a left click at a terminal cell.
    ///
    /// While a modal is open only its close affordance reacts; the
    /// overlay swallows every other click.
    pub fn handle_click(&mut self, column: u16, row: u16) {
        let area = Rect::new(0, 0, self.terminal_width, self.terminal_height);
        if let Some(kind) = self.dashboard.active_tool() {
            let layout = modal_layout(area, modal_height(kind));
            if layout.hits_close(column, row) {
                self.dashboard.close_tool();
            }
            return;
        }

        let (_, cards_area, _) = Self::compute_layout(area);
        if let Some(kind) = card_at(cards_area, column, row) {
            self.select(kind);
        }
    }

    fn select(&mut self, kind: ToolKind) {
        self.cursor = kind.card_index();
        self.dashboard.select_tool(kind);
    }

    /// Text field receiving keystrokes in the open form, if any.
    fn focused_field(&mut self) -> Option<&mut vitals_core::text::TextField> {
        match self.dashboard.session_mut()? {
            ToolSession::BloodSugar(form) => Some(&mut form.level),
            ToolSession::Bmi(form) => Some(form.focused_mut()),
            ToolSession::Medication(form) => Some(&mut form.pending),
            ToolSession::Steps | ToolSession::Water(_) => None,
        }
    }

    /// Compute the screen layout.
    ///
    /// Returns (header, cards, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Min(5),    // cards
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        let (header_area, cards_area, footer_area) = Self::compute_layout(area);
        let steps = self.dashboard.steps();

        render_header(frame, header_area, &steps.display());
        render_cards(frame, cards_area, self.cursor, steps);
        render_footer(frame, footer_area, self.dashboard.active_tool());

        // Only the active tool has a session, so at most one modal draws.
        if let Some(session) = self.dashboard.session() {
            let kind = session.kind();
            render_modal(
                frame,
                area,
                true,
                kind.modal_title(),
                modal_height(kind),
                |frame, body| match session {
                    ToolSession::BloodSugar(form) => render_glucose(frame, body, form),
                    ToolSession::Bmi(form) => render_bmi(frame, body, form),
                    ToolSession::Medication(form) => render_medication(frame, body, form),
                    ToolSession::Steps => render_steps(frame, body, steps),
                    ToolSession::Water(counter) => render_water(frame, body, *counter),
                },
            );
        }
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal or an error.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Translate a terminal event into a message, if it carries one.
    #[must_use]
    pub fn message_for_event(&self, event: Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => Some(
                TuiMessage::KeyPress(map_key(key_event, self.input_mode())),
            ),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiMessage::Click {
                    column: mouse.column,
                    row: mouse.row,
                })
            }
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update, render),
    /// and tears down on exit, including when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let size = terminal.size()?;
        self.terminal_width = size.width;
        self.terminal_height = size.height;
        info!(width = size.width, height = size.height, "dashboard started");

        let result = self.event_loop(&mut terminal);
        let teardown = Self::teardown_terminal(&mut terminal);
        info!(steps = self.dashboard.steps().value(), "dashboard closed");
        finish_run(result, teardown)
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let tick_rate = Duration::from_millis(250);

        loop {
            // Render
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                break;
            }

            // Poll for events with tick rate timeout
            let msg = if event::poll(tick_rate)? {
                self.message_for_event(event::read()?)
            } else {
                Some(TuiMessage::Tick)
            };
            if let Some(msg) = msg {
                if msg != TuiMessage::Tick {
                    debug!(?msg, "message");
                }
                self.handle_message(msg);
            }
        }
        Ok(())
    }
}

/// Combine the event loop outcome with the teardown outcome.
///
/// A loop error wins, but a failed teardown is always logged since it can
/// leave the terminal in raw mode.
fn finish_run(result: io::Result<()>, teardown: io::Result<()>) -> io::Result<()> {
    if let Err(e) = &teardown {
        warn!(error = %e, "terminal teardown failed");
    }
    result.and(teardown)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
    use ratatui::backend::TestBackend;
    use vitals_core::glucose::GlucoseClassification;
    use vitals_core::steps::StepCounter;

    use crate::modal::CLOSE_LABEL;

    fn make_app() -> TuiApp {
        TuiApp::new(Dashboard::new())
    }

    fn type_text(app: &mut TuiApp, text: &str) {
        for c in text.chars() {
            app.handle_key_action(KeyAction::Input(c));
        }
    }

    fn screen(app: &TuiApp) -> String {
        let backend = TestBackend::new(app.terminal_width, app.terminal_height);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();
        let mut out = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                out.push_str(buf.buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn initial_state() {
        let app = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.cursor, 0);
        assert_eq!(app.dashboard.active_tool(), None);
        assert_eq!(app.input_mode(), InputMode::Browse);
    }

    #[test]
    fn handle_quit() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn cancel_action_quits() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Cancel);
        assert!(app.should_quit);
    }

    #[test]
    fn handle_resize() {
        let mut app = make_app();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.terminal_width, 120);
        assert_eq!(app.terminal_height, 40);
    }

    #[test]
    fn cursor_moves_within_bounds() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::CursorUp);
        assert_eq!(app.cursor, 0);
        for _ in 0..10 {
            app.handle_key_action(KeyAction::CursorDown);
        }
        assert_eq!(app.cursor, CARDS.len() - 1);
        app.handle_key_action(KeyAction::Open);
        assert_eq!(app.dashboard.active_tool(), Some(ToolKind::Water));
    }

    #[test]
    fn glucose_flow() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::BloodSugar));
        assert_eq!(app.input_mode(), InputMode::Form);
        type_text(&mut app, "65");
        app.handle_key_action(KeyAction::Submit);
        match app.dashboard.session() {
            Some(ToolSession::BloodSugar(form)) => {
                assert_eq!(form.result(), Some(GlucoseClassification::Low));
            }
            other => panic!("unexpected session {other:?}"),
        }
        assert!(screen(&app).contains("hypoglycemia"));
    }

    #[test]
    fn bmi_flow_uses_tab_between_fields() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Bmi));
        type_text(&mut app, "70");
        app.handle_key_action(KeyAction::NextField);
        type_text(&mut app, "175");
        app.handle_key_action(KeyAction::Submit);
        assert!(screen(&app).contains("BMI: 22.9 (Normal)"));
    }

    #[test]
    fn backspace_edits_focused_field() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Medication));
        type_text(&mut app, "Aspirinn");
        app.handle_key_action(KeyAction::Backspace);
        app.handle_key_action(KeyAction::Submit);
        match app.dashboard.session() {
            Some(ToolSession::Medication(form)) => {
                assert_eq!(form.entries(), ["Aspirin"]);
                assert!(form.pending.is_empty());
            }
            other => panic!("unexpected session {other:?}"),
        }
    }

    #[test]
    fn steps_counter_updates_card_subtext() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Steps));
        app.handle_key_action(KeyAction::Increment);
        assert_eq!(app.dashboard.steps().value(), 141);
        app.handle_key_action(KeyAction::Close);
        let text = screen(&app);
        assert!(text.contains("141/3000"));
    }

    #[test]
    fn steps_decrement_floors_at_zero() {
        let mut app = TuiApp::new(Dashboard::with_steps(StepCounter::new(5)));
        app.handle_key_action(KeyAction::Select(ToolKind::Steps));
        app.handle_key_action(KeyAction::Decrement);
        assert_eq!(app.dashboard.steps().value(), 0);
    }

    #[test]
    fn decrement_ignored_outside_steps() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Water));
        app.handle_key_action(KeyAction::Increment);
        app.handle_key_action(KeyAction::Decrement);
        assert_eq!(app.dashboard.steps().value(), 131);
        match app.dashboard.session() {
            Some(ToolSession::Water(counter)) => assert_eq!(counter.glasses(), 1),
            other => panic!("unexpected session {other:?}"),
        }
    }

    #[test]
    fn water_resets_on_reopen() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Water));
        for _ in 0..3 {
            app.handle_key_action(KeyAction::Increment);
        }
        assert!(screen(&app).contains("3 glasses"));
        app.handle_key_action(KeyAction::Close);
        app.handle_key_action(KeyAction::Select(ToolKind::Water));
        assert!(screen(&app).contains("0 glasses"));
    }

    #[test]
    fn input_ignored_without_modal() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Input('x'));
        app.handle_key_action(KeyAction::Submit);
        app.handle_key_action(KeyAction::Increment);
        assert_eq!(app.dashboard.active_tool(), None);
        assert_eq!(app.dashboard.steps().value(), 131);
    }

    #[test]
    fn closed_dashboard_shows_no_modal() {
        let app = make_app();
        let text = screen(&app);
        assert!(text.contains("Blood sugar"));
        assert!(!text.contains(CLOSE_LABEL));
    }

    #[test]
    fn switching_tools_shows_single_modal() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Water));
        app.handle_key_action(KeyAction::Select(ToolKind::Bmi));
        let text = screen(&app);
        assert_eq!(text.matches(CLOSE_LABEL).count(), 1);
        assert!(text.contains("BMI calculator"));
        assert!(!text.contains("glasses"));
        assert_eq!(app.cursor, ToolKind::Bmi.card_index());
    }

    #[test]
    fn click_on_card_opens_it() {
        let mut app = make_app();
        let (_, cards_area, _) = TuiApp::compute_layout(Rect::new(0, 0, 80, 24));
        // Second card starts three rows into the card area.
        app.handle_message(TuiMessage::Click {
            column: 10,
            row: cards_area.y + 4,
        });
        assert_eq!(app.dashboard.active_tool(), Some(ToolKind::Bmi));
    }

    #[test]
    fn click_on_close_affordance_closes() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Steps));
        let layout = modal_layout(
            Rect::new(0, 0, app.terminal_width, app.terminal_height),
            modal_height(ToolKind::Steps),
        );
        app.handle_click(layout.close_button.x + 1, layout.close_button.y);
        assert_eq!(app.dashboard.active_tool(), None);
    }

    #[test]
    fn backdrop_and_body_clicks_are_inert() {
        let mut app = make_app();
        app.handle_key_action(KeyAction::Select(ToolKind::Water));
        let layout = modal_layout(
            Rect::new(0, 0, app.terminal_width, app.terminal_height),
            modal_height(ToolKind::Water),
        );
        app.handle_click(0, 0);
        app.handle_click(layout.body.x, layout.body.y);
        // A click where a card sits under the overlay does not switch tools.
        let (_, cards_area, _) = TuiApp::compute_layout(Rect::new(0, 0, 80, 24));
        app.handle_click(1, cards_area.y + 1);
        assert_eq!(app.dashboard.active_tool(), Some(ToolKind::Water));
    }

    #[test]
    fn key_events_follow_input_mode() {
        let mut app = make_app();
        let q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert_eq!(
            app.message_for_event(q.clone()),
            Some(TuiMessage::KeyPress(KeyAction::Quit))
        );
        app.handle_key_action(KeyAction::Select(ToolKind::Medication));
        assert_eq!(
            app.message_for_event(q),
            Some(TuiMessage::KeyPress(KeyAction::Input('q')))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let app = make_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(app.message_for_event(Event::Key(key)), None);
    }

    #[test]
    fn left_click_event_becomes_message() {
        let app = make_app();
        let event = Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 4,
            row: 9,
            modifiers: KeyModifiers::NONE,
        });
        assert_eq!(
            app.message_for_event(event),
            Some(TuiMessage::Click { column: 4, row: 9 })
        );
    }

    #[test]
    fn finish_run_reports_loop_error_first() {
        let err = finish_run(
            Err(io::Error::other("loop")),
            Err(io::Error::other("teardown")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "loop");
    }

    #[test]
    fn finish_run_surfaces_teardown_failure() {
        let err = finish_run(Ok(()), Err(io::Error::other("teardown"))).unwrap_err();
        assert_eq!(err.to_string(), "teardown");
        assert!(finish_run(Ok(()), Ok(())).is_ok());
    }

    #[derive(Clone, Default)]
    struct Captured(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn teardown_failure_is_logged_even_when_loop_failed() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result = tracing::subscriber::with_default(subscriber, || {
            finish_run(
                Err(io::Error::other("loop")),
                Err(io::Error::other("raw mode stuck")),
            )
        });
        assert!(result.is_err());

        let log = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(log.contains("terminal teardown failed"), "log was: {log}");
        assert!(log.contains("raw mode stuck"));
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 80, 24);
        let (header, cards, footer) = TuiApp::compute_layout(area);

        assert_eq!(header.y, 0);
        assert_eq!(header.height, 3);
        assert_eq!(footer.height, 2);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(header.height + cards.height + footer.height, area.height);
    }
}
