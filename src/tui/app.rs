//! Player application state and logic.

use crate::catalog;
use crate::config::Config;
use crate::play::{PuzzleLoader, SlotEvent, SolutionChecker, Verdict, InputOutcome};
use crate::ternary::Trit;
use crate::ast::NodeId;

/// Terminal player state.
pub struct PlayerApp {
    /// Owner of the active puzzle.
    pub loader: PuzzleLoader,
    /// Wrong-answer bookkeeping.
    pub checker: SolutionChecker,
    /// Index into the catalog of the loaded puzzle.
    pub puzzle_index: usize,
    /// Cursor over all slots: value slots first, then operator slots.
    pub cursor: usize,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl PlayerApp {
    /// Create a player with the named catalog puzzle loaded.
    pub fn new(config: &Config, puzzle: &str) -> Result<Self, catalog::CatalogError> {
        let puzzle_index = catalog::all()
            .iter()
            .position(|p| p.name == puzzle)
            .ok_or_else(|| catalog::CatalogError::UnknownPuzzle(puzzle.to_string()))?;

        let mut app = Self {
            loader: PuzzleLoader::new(),
            checker: SolutionChecker::new(config.checker),
            puzzle_index,
            cursor: 0,
            should_quit: false,
            status: String::new(),
        };
        app.load_current()?;
        Ok(app)
    }

    fn load_current(&mut self) -> Result<(), catalog::CatalogError> {
        let puzzle = &catalog::all()[self.puzzle_index];
        self.loader.load_named(puzzle.name)?;
        self.checker.reset();
        self.cursor = 0;
        self.status = format!(
            "Loaded {}. ←→ select, space cycle, 0/1/2 set, c check, q quit.",
            puzzle.name
        );
        Ok(())
    }

    /// Total number of slots under the cursor.
    pub fn slot_count(&self) -> usize {
        self.loader
            .template()
            .map_or(0, |t| t.value_slots().len() + t.operator_slots().len())
    }

    /// Slot under the cursor.
    pub fn selected(&self) -> Option<NodeId> {
        let template = self.loader.template()?;
        let values = template.value_slots().len();
        if self.cursor < values {
            Some(NodeId::Value(self.cursor))
        } else if self.cursor < self.slot_count() {
            Some(NodeId::Operator(self.cursor - values))
        } else {
            None
        }
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let count = self.slot_count();
        if count == 0 {
            return;
        }
        self.cursor = if forward {
            (self.cursor + 1) % count
        } else {
            (self.cursor + count - 1) % count
        };
    }

    /// Cycle the content of the selected slot.
    pub fn cycle(&mut self) {
        let event = match self.selected() {
            Some(NodeId::Value(slot)) => SlotEvent::CycleValue { slot },
            Some(NodeId::Operator(slot)) => SlotEvent::CycleOperator { slot },
            None => return,
        };
        self.send(event);
    }

    /// Set the selected value slot.
    pub fn set_value(&mut self, value: Trit) {
        match self.selected() {
            Some(NodeId::Value(slot)) => self.send(SlotEvent::SetValue { slot, value }),
            _ => self.status = "Select a value slot first.".into(),
        }
    }

    fn send(&mut self, event: SlotEvent) {
        match self.loader.apply(event) {
            Ok(InputOutcome::Applied(id)) => self.status = format!("Updated {}.", id),
            Ok(InputOutcome::Ignored(id)) => self.status = format!("{} is locked.", id),
            Err(e) => self.status = format!("Error: {}", e),
        }
    }

    /// Submit the current attempt.
    pub fn check(&mut self) {
        let Some(template) = self.loader.template() else {
            self.status = "No puzzle loaded.".into();
            return;
        };
        self.status = match self.checker.submit(template) {
            Ok(Verdict::Correct) => "Correct!".into(),
            Ok(Verdict::Incorrect { result, errors, nth }) => {
                let mut text = format!("Incorrect: left side is {} (mistakes: {}).", result, errors);
                if nth {
                    text.push_str(" Hint: try changing a different slot.");
                }
                text
            }
            Ok(Verdict::Incomplete(e)) => format!("Not ready: {}.", e),
            Err(e) => format!("Error: {}", e),
        };
    }

    /// Switch to the next or previous catalog puzzle.
    pub fn switch_puzzle(&mut self, forward: bool) {
        let count = catalog::all().len();
        self.puzzle_index = if forward {
            (self.puzzle_index + 1) % count
        } else {
            (self.puzzle_index + count - 1) % count
        };
        if let Err(e) = self.load_current() {
            self.status = format!("Error: {}", e);
        }
    }

    /// Start the current puzzle over.
    pub fn reset(&mut self) {
        if let Err(e) = self.load_current() {
            self.status = format!("Error: {}", e);
        }
    }
}

/// Run the terminal player on a catalog puzzle.
pub fn run_player(config: &Config, puzzle: &str) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    let mut app = PlayerApp::new(config, puzzle)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    loop {
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
                        KeyCode::Left | KeyCode::BackTab => app.move_cursor(false),
                        KeyCode::Right | KeyCode::Tab => app.move_cursor(true),
                        KeyCode::Char(' ') | KeyCode::Enter => app.cycle(),
                        KeyCode::Char('0') => app.set_value(Trit::False),
                        KeyCode::Char('1') => app.set_value(Trit::Neutral),
                        KeyCode::Char('2') => app.set_value(Trit::True),
                        KeyCode::Char('c') => app.check(),
                        KeyCode::Char('n') => app.switch_puzzle(true),
                        KeyCode::Char('p') => app.switch_puzzle(false),
                        KeyCode::Char('x') => app.reset(),
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_wraps_over_all_slots() {
        let mut app = PlayerApp::new(&Config::default(), "neutral-or-x").unwrap();
        assert_eq!(app.slot_count(), 3);
        assert_eq!(app.selected(), Some(NodeId::Value(0)));
        app.move_cursor(false);
        assert_eq!(app.selected(), Some(NodeId::Operator(0)));
        app.move_cursor(true);
        app.move_cursor(true);
        assert_eq!(app.selected(), Some(NodeId::Value(1)));
    }

    #[test]
    fn test_play_through() {
        let mut app = PlayerApp::new(&Config::default(), "neutral-or-x").unwrap();
        app.move_cursor(true);
        app.set_value(Trit::True);
        app.check();
        assert_eq!(app.status, "Correct!");
    }

    #[test]
    fn test_locked_slot_reports_status() {
        let mut app = PlayerApp::new(&Config::default(), "neutral-or-x").unwrap();
        app.cycle();
        assert_eq!(app.status, "v0 is locked.");
    }

    #[test]
    fn test_switch_puzzle_wraps() {
        let mut app = PlayerApp::new(&Config::default(), "neutral-or-x").unwrap();
        app.switch_puzzle(false);
        assert_eq!(app.loader.name(), catalog::all().last().map(|p| p.name));
    }

    #[test]
    fn test_unknown_puzzle() {
        assert!(PlayerApp::new(&Config::default(), "nope").is_err());
    }
}
