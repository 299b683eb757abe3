//! Raw mode and alternate screen handling for the real terminal

use std::io;

use crossterm::cursor::Show;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};

/// Holds the terminal in dashboard mode. Dropping it restores the terminal,
/// so early returns and panics leave the shell usable.
#[derive(Debug)]
pub struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // From here on, a failed step is undone when `guard` drops.
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restore now and report the first failing step.
    pub fn restore(mut self) -> io::Result<()> {
        self.active = false;
        restore()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = restore();
        }
    }
}

/// Run every teardown step even when an earlier one fails.
pub fn restore() -> io::Result<()> {
    first_error([
        disable_raw_mode(),
        execute!(io::stdout(), LeaveAlternateScreen),
        execute!(io::stdout(), DisableMouseCapture),
        execute!(io::stdout(), Show),
    ])
}

/// Collapse already-run steps into the first error, if any
pub fn first_error<E>(results: impl IntoIterator<Item = Result<(), E>>) -> Result<(), E> {
    results.into_iter().find_map(Result::err).map_or(Ok(()), Err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_error_wins() {
        let steps: [Result<(), &str>; 3] = [Ok(()), Err("leave screen"), Err("mouse")];
        assert_eq!(first_error(steps), Err("leave screen"));
    }

    #[test]
    fn test_all_steps_ok() {
        let steps: [Result<(), &str>; 2] = [Ok(()), Ok(())];
        assert_eq!(first_error(steps), Ok(()));
    }

    #[test]
    fn test_every_step_runs_before_reporting() {
        let mut ran = Vec::new();
        let mut step = |name: &'static str, ok: bool| {
            ran.push(name);
            if ok {
                Ok(())
            } else {
                Err(name)
            }
        };
        let result = first_error([
            step("raw mode", false),
            step("alternate screen", true),
            step("mouse", false),
        ]);
        assert_eq!(result, Err("raw mode"));
        assert_eq!(ran, vec!["raw mode", "alternate screen", "mouse"]);
    }
}
