//! Interactive option picker drawn on stderr.
//!
//! Key handling lives in `PickerState` so it can be tested without a
//! terminal; `TerminalPicker` wires it to crossterm.

use crate::error::Result;
use crossterm::cursor::{Hide, MoveToColumn, MoveUp, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, Stylize};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::Write;

/// "Present choices, return index". `Ok(None)` means the user cancelled.
pub trait Picker {
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>>;
}

/// What a key press did to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Picked(usize),
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct PickerState {
    cursor: usize,
    len: usize,
}

impl PickerState {
    pub fn new(len: usize) -> Self {
        Self { cursor: 0, len }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Step {
        if key.kind != KeyEventKind::Press || self.len == 0 {
            return Step::Continue;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Step::Cancelled,
            KeyCode::Esc | KeyCode::Char('q') => Step::Cancelled,
            KeyCode::Enter => Step::Picked(self.cursor),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => {
                self.cursor = (self.cursor + self.len - 1) % self.len;
                Step::Continue
            }
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => {
                self.cursor = (self.cursor + 1) % self.len;
                Step::Continue
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                Step::Continue
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.len - 1;
                Step::Continue
            }
            KeyCode::Char(c) => match c.to_digit(10) {
                Some(n) if n >= 1 && (n as usize) <= self.len => Step::Picked(n as usize - 1),
                _ => Step::Continue,
            },
            _ => Step::Continue,
        }
    }
}

/// Used when the terminal won't report its size
const FALLBACK_WIDTH: usize = 80;

/// Cut `line` so it fits in `width` columns without wrapping
///
/// Writing into the last column makes some terminals wrap early, so one
/// column is kept free. Every character is counted as one column.
fn fit_line(line: &str, width: usize) -> String {
    let room = width.saturating_sub(1);
    if line.chars().count() <= room {
        return line.to_string();
    }

    let mut cut: String = line.chars().take(room.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Raw mode for as long as this lives
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
        let _ = execute!(std::io::stderr(), Show);
    }
}

/// Arrow-key menu on the real terminal
#[derive(Default)]
pub struct TerminalPicker;

impl TerminalPicker {
    pub fn new() -> Self {
        Self
    }

    /// Every line is cut to `width` so the menu is exactly one row per line
    fn draw<W: Write>(
        out: &mut W,
        prompt: &str,
        labels: &[String],
        cursor: usize,
        width: usize,
    ) -> Result<()> {
        queue!(out, MoveToColumn(0), Clear(ClearType::FromCursorDown))?;
        queue!(out, Print(fit_line(prompt, width).bold()), Print("\r\n"))?;

        for (i, label) in labels.iter().enumerate() {
            let marker = if i == cursor { "  →" } else { "   " };
            let line = fit_line(&format!("{} {}. {}", marker, i + 1, label), width);
            if i == cursor {
                queue!(out, Print(line.cyan()))?;
            } else {
                queue!(out, Print(line))?;
            }
            queue!(out, Print("\r\n"))?;
        }

        let hint = fit_line("↑/↓ to move, enter to select, esc to cancel", width);
        queue!(out, Print(hint.dark_grey()))?;
        out.flush()?;
        Ok(())
    }

    /// Move back to the first line of the menu
    fn rewind<W: Write>(out: &mut W, labels: &[String]) -> Result<()> {
        // prompt + options; the hint line is the one we're on
        queue!(out, MoveUp(labels.len() as u16 + 1), MoveToColumn(0))?;
        Ok(())
    }

    fn width() -> usize {
        terminal::size()
            .map(|(cols, _)| cols as usize)
            .unwrap_or(FALLBACK_WIDTH)
    }
}

impl Picker for TerminalPicker {
    fn pick(&mut self, prompt: &str, labels: &[String]) -> Result<Option<usize>> {
        let mut out = std::io::stderr();
        let mut state = PickerState::new(labels.len());
        let width = Self::width();

        let step = {
            let _raw = RawModeGuard::enable()?;
            execute!(out, Hide)?;
            Self::draw(&mut out, prompt, labels, state.cursor(), width)?;

            loop {
                let step = match event::read()? {
                    Event::Key(key) => state.handle_key(key),
                    _ => Step::Continue,
                };

                Self::rewind(&mut out, labels)?;
                match step {
                    Step::Continue => Self::draw(&mut out, prompt, labels, state.cursor(), width)?,
                    done => {
                        execute!(out, Clear(ClearType::FromCursorDown))?;
                        break done;
                    }
                }
            }
        };

        match step {
            Step::Picked(index) => {
                writeln!(out, "{} {}", "✓".green(), labels[index])?;
                Ok(Some(index))
            }
            _ => Ok(None),
        }
    }
}
