use std::io::{self, Stdout};
use std::ops::{Deref, DerefMut};
use std::panic;
use std::sync::Once;

use crossterm::{
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::warn;

pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Raw-mode, alternate-screen terminal that puts the user's shell back the
/// way it was when dropped.
pub struct TerminalSession {
    terminal: AppTerminal,
}

impl TerminalSession {
    pub fn start() -> io::Result<Self> {
        install_panic_hook();
        enable_raw_mode()?;
        or_undo(io::stdout().execute(EnterAlternateScreen), disable_raw_mode)?;
        let terminal = or_undo(Terminal::new(CrosstermBackend::new(io::stdout())), restore)?;
        Ok(Self { terminal })
    }
}

impl Deref for TerminalSession {
    type Target = AppTerminal;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for TerminalSession {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = restore() {
            warn!("Failed to restore terminal: {}", e);
        }
        let _ = self.terminal.show_cursor();
    }
}

pub fn restore() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Runs `undo` when a setup step failed, keeping the step's own error.
fn or_undo<T>(result: io::Result<T>, undo: impl FnOnce() -> io::Result<()>) -> io::Result<T> {
    result.inspect_err(|_| {
        let _ = undo();
    })
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = restore();
            original_hook(panic_info);
        }));
    });
}
