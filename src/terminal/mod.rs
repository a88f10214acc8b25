//! Raw-mode terminal session: alternate screen, mouse capture, drawing.

pub mod size;

use std::io::{self, Write, stdout};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};

use self::size::{TerminalSize, terminal_size};

/// The main entry point for terminal interaction.
#[derive(Default)]
pub struct Terminal;

impl Terminal {
    pub fn new() -> Self {
        Self
    }

    /// Query the current terminal size.
    pub fn size(&self) -> TerminalSize {
        terminal_size()
    }

    /// Enter the alternate screen, enable raw mode and mouse capture, and
    /// run the provided closure. Terminal state is always restored on
    /// exit, even on panic.
    pub fn run<F>(&self, f: F) -> io::Result<()>
    where
        F: FnOnce(&Self) -> io::Result<()>,
    {
        let mut out = stdout();

        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = terminal::disable_raw_mode();
            let _ = execute!(
                io::stdout(),
                DisableMouseCapture,
                LeaveAlternateScreen,
                cursor::Show
            );
            original_hook(info);
        }));

        // Enter alternate screen + raw mode + mouse reporting
        execute!(out, EnterAlternateScreen, EnableMouseCapture, cursor::Hide)?;
        terminal::enable_raw_mode()?;

        // Run user code
        let result = f(self);

        // Always restore
        terminal::disable_raw_mode()?;
        execute!(out, DisableMouseCapture, cursor::Show, LeaveAlternateScreen)?;
        out.flush()?;

        result
    }

    /// Clear the entire screen.
    pub fn clear(&self) -> io::Result<()> {
        execute!(
            stdout(),
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )
    }

    /// Write a string at the given column and row.
    pub fn print_at(&self, col: u16, row: u16, text: &str) -> io::Result<()> {
        execute!(stdout(), cursor::MoveTo(col, row))?;
        print!("{text}");
        stdout().flush()
    }

    /// Wait up to `timeout` for the next input event.
    pub fn poll_event(&self, timeout: Duration) -> io::Result<Option<Event>> {
        if event::poll(timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }
}
