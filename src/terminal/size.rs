/// Terminal dimensions in columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub cols: u16,
    pub rows: u16,
}

impl Default for TerminalSize {
    fn default() -> Self {
        Self { cols: 80, rows: 24 }
    }
}

/// Query the current terminal size, falling back to 80x24.
pub fn terminal_size() -> TerminalSize {
    crossterm::terminal::size()
        .map(|(cols, rows)| TerminalSize { cols, rows })
        .unwrap_or_default()
}
