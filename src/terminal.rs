//! Terminal management: ratatui init/restore and a restoring panic hook.

use anyhow::Result;
use crossterm::{cursor, execute, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};

/// The concrete terminal type used by the event loop.
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// Enter alternate screen and raw mode, hide the cursor, and hand back a
/// ratatui terminal. Call [`restore`] before exiting.
pub fn init() -> Result<Term> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;
    let term = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok(term)
}

/// Restore the terminal to its normal state. Errors are ignored: this runs
/// on every exit path, including after failures.
pub fn restore() {
    let _ = terminal::disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
}

/// Install a custom panic hook that restores the terminal before printing
/// the panic message. Call this once at startup.
pub fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        default_hook(info);
    }));
}

/// Get the current terminal size, falling back to (80, 24) if unavailable.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or((80, 24))
}
