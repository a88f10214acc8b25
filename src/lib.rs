pub mod app;
pub mod config;
pub mod routes;
pub mod store;
pub mod terminal;
pub mod virtual_scroll;

use std::io::Write;

/// Debug log beside the executable; stdout belongs to the raw-mode UI.
pub fn log_path() -> std::path::PathBuf {
    std::env::current_exe()
        .unwrap_or_default()
        .parent()
        .unwrap_or(std::path::Path::new("."))
        .join("pubboard_debug.log")
}

pub fn log(msg: &str) {
    use std::fs::OpenOptions;
    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path())
        .and_then(|mut f| {
            Write::write_all(&mut f, msg.as_bytes())?;
            Write::write_all(&mut f, b"\n")
        });
}
