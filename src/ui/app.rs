//! Main TUI application state and logic

use crate::eval::ops::Operation;
use crate::session::Session;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::Duration;

/// What the keyboard is currently driving.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Mode {
    /// Navigating the operation menu.
    Menu,

    /// Collecting operands for a menu operation. `lhs` holds the first
    /// operand once it has been entered; unary operations submit directly
    /// from `lhs: None`.
    Operands { op: Operation, lhs: Option<f64> },

    /// Typing an infix expression.
    Expression,
}

/// Entries in the operation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Op(Operation),
    Expression,
}

impl MenuItem {
    /// Menu order; digit shortcuts map onto these indices.
    pub const ALL: [MenuItem; 8] = [
        MenuItem::Op(Operation::Add),
        MenuItem::Op(Operation::Subtract),
        MenuItem::Op(Operation::Multiply),
        MenuItem::Op(Operation::Divide),
        MenuItem::Op(Operation::Power),
        MenuItem::Op(Operation::Modulo),
        MenuItem::Op(Operation::SquareRoot),
        MenuItem::Expression,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuItem::Op(op) => op.label(),
            MenuItem::Expression => "Evaluate expression",
        }
    }
}

/// The main application state
pub struct App {
    /// The calculator session (history and transcript)
    pub session: Session,

    /// What the keyboard is currently driving
    pub mode: Mode,

    /// Selected row in the operation menu
    pub menu_index: usize,

    /// Input buffer for the entry modes
    pub input: String,

    /// Per-pane scroll offsets
    pub output_scroll: usize,
    pub history_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message is an error
    pub status_is_error: bool,
}

impl App {
    /// Create a new app over the given session.
    pub fn new(session: Session) -> Self {
        App {
            session,
            mode: Mode::Menu,
            menu_index: 0,
            input: String::new(),
            output_scroll: 0,
            history_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Poll with a timeout so resizes repaint promptly
            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Menu, input and output on the left, history on the right,
        // status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        let menu_height = MenuItem::ALL.len() as u16 + 2;
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(menu_height),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(columns[0]);

        super::panes::render_menu_pane(
            frame,
            left_rows[0],
            self.menu_index,
            self.mode == Mode::Menu,
        );

        super::panes::render_input_pane(
            frame,
            left_rows[1],
            self.input_prompt(),
            &self.input,
            self.mode != Mode::Menu,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[2],
            self.session.transcript(),
            &mut self.output_scroll,
        );

        super::panes::render_history_pane(
            frame,
            columns[1],
            self.session.history(),
            &mut self.history_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.status_is_error,
            &self.mode,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        // History scrolling works in every mode
        match key.code {
            KeyCode::PageUp => {
                self.history_scroll = self.history_scroll.saturating_sub(1);
                return;
            }
            KeyCode::PageDown => {
                self.history_scroll = self.history_scroll.saturating_add(1);
                return;
            }
            _ => {}
        }

        match self.mode {
            Mode::Menu => self.handle_menu_key(key),
            Mode::Operands { .. } | Mode::Expression => self.handle_entry_key(key),
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Up => {
                self.menu_index = if self.menu_index == 0 {
                    MenuItem::ALL.len() - 1
                } else {
                    self.menu_index - 1
                };
            }
            KeyCode::Down => {
                self.menu_index = (self.menu_index + 1) % MenuItem::ALL.len();
            }
            KeyCode::Enter => {
                self.select_menu_item(MenuItem::ALL[self.menu_index]);
            }
            // Digit shortcuts select and run in one keypress
            KeyCode::Char(c @ '1'..='8') => {
                let index = c.to_digit(10).unwrap() as usize - 1;
                self.menu_index = index;
                self.select_menu_item(MenuItem::ALL[index]);
            }
            KeyCode::Char('e') | KeyCode::Char('E') => {
                self.menu_index = MenuItem::ALL.len() - 1;
                self.select_menu_item(MenuItem::Expression);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                self.session.history_mut().clear();
                self.history_scroll = 0;
                self.set_status("History cleared".to_string(), false);
            }
            _ => {}
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Menu;
                self.input.clear();
                self.set_status("Cancelled".to_string(), false);
            }
            KeyCode::Enter => {
                self.submit_input();
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Char(c) if !c.is_control() => {
                self.input.push(c);
            }
            _ => {}
        }
    }

    fn select_menu_item(&mut self, item: MenuItem) {
        self.input.clear();
        match item {
            MenuItem::Op(op) => {
                self.mode = Mode::Operands { op, lhs: None };
                let prompt = if op.arity() == 1 {
                    "enter the operand"
                } else {
                    "enter the first operand"
                };
                self.set_status(format!("{}: {}", op.label(), prompt), false);
            }
            MenuItem::Expression => {
                self.mode = Mode::Expression;
                self.set_status("Type an infix expression".to_string(), false);
            }
        }
    }

    /// Submit the input buffer to whichever entry mode is active.
    fn submit_input(&mut self) {
        let text = self.input.trim().to_string();
        if text.is_empty() {
            self.set_status("Nothing to submit".to_string(), true);
            return;
        }

        match self.mode {
            Mode::Operands { op, lhs } => self.submit_operand(op, lhs, &text),
            Mode::Expression => self.submit_expression(&text),
            Mode::Menu => {}
        }
    }

    fn submit_operand(&mut self, op: Operation, lhs: Option<f64>, text: &str) {
        let value: f64 = match text.parse() {
            Ok(value) => value,
            Err(_) => {
                // Keep the buffer so the user can fix it in place
                self.set_status(format!("'{}' is not a number", text), true);
                return;
            }
        };

        if lhs.is_none() && op.arity() == 2 {
            self.mode = Mode::Operands {
                op,
                lhs: Some(value),
            };
            self.input.clear();
            self.set_status(
                format!("{}: enter the second operand", op.label()),
                false,
            );
            return;
        }

        // Unary operations take the typed value as their only operand
        let (lhs_value, rhs_value) = match lhs {
            Some(first) => (first, value),
            None => (value, 0.0),
        };

        match self.session.apply(op, lhs_value, rhs_value) {
            Ok(result) => {
                self.set_status(format!("= {}", result), false);
                self.output_scroll = usize::MAX;
                self.history_scroll = usize::MAX;
            }
            Err(err) => {
                self.set_status(err.to_string(), true);
            }
        }

        self.mode = Mode::Menu;
        self.input.clear();
    }

    fn submit_expression(&mut self, text: &str) {
        match self.session.eval_expression(text) {
            Ok(evaluation) => {
                self.set_status(format!("= {}", evaluation.value), false);
                self.output_scroll = usize::MAX;
                self.mode = Mode::Menu;
                self.input.clear();
            }
            Err(err) => {
                // Stay in expression mode with the buffer intact
                self.set_status(err.to_string(), true);
            }
        }
    }

    fn input_prompt(&self) -> &'static str {
        match self.mode {
            Mode::Menu => "",
            Mode::Operands { op, lhs: None } if op.arity() == 1 => "Operand:",
            Mode::Operands { lhs: None, .. } => "First operand:",
            Mode::Operands { lhs: Some(_), .. } => "Second operand:",
            Mode::Expression => "Expression:",
        }
    }

    fn set_status(&mut self, message: String, is_error: bool) {
        self.status_message = message;
        self.status_is_error = is_error;
    }
}
