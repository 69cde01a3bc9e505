//! Terminal setup/teardown helpers for the demo.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    style::ResetColor,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout};

pub fn init() -> io::Result<Stdout> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, Hide)?;
    Ok(stdout)
}

pub fn restore() -> io::Result<()> {
    execute!(io::stdout(), ResetColor, Show, LeaveAlternateScreen)?;
    disable_raw_mode()
}

/// Restores the terminal on every exit path, panics included.
pub struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore();
    }
}
