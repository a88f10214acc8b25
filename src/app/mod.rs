//! Application state, startup, and module dispatch.

mod event_loop;
mod input;
mod render;
mod viewport;

pub use viewport::ListViewport;

use std::rc::Rc;
use std::sync::mpsc;

use crate::config::monitor::ConfigMonitor;
use crate::config::{Config, UiState};
use crate::log;
use crate::routes::Route;
use crate::store::PublishStore;
use crate::terminal::Terminal;
use crate::terminal::size::TerminalSize;
use crate::virtual_scroll::VirtualScroll;

/// Chrome above the list panel: nav, stats, filter line, separator.
pub(super) const HEADER_ROWS: u16 = 4;

/// Help line below the list panel.
pub(super) const FOOTER_ROWS: u16 = 1;

/// Cross-thread events delivered to the UI loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    ConfigReload,
}

pub struct App {
    config: Config,
    store: PublishStore,
    route: Route,
    /// The scrollable list panel; the calculator holds a weak handle to it.
    viewport: Rc<ListViewport>,
    scroll: VirtualScroll<ListViewport>,
    term_size: TerminalSize,
    events_rx: mpsc::Receiver<AppEvent>,
    /// Keyword entry mode: keystrokes edit the search filter live.
    keyword_entry: bool,
    /// Replace the list panel with the per-depth1 summary.
    grouped_overlay: bool,
    dirty: bool,
    running: bool,
    saved_scroll: f32,
    _config_monitor: Option<ConfigMonitor>,
}

impl App {
    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        std::panic::set_hook(Box::new(|info| {
            let _ = std::fs::write("pubboard_panic.log", format!("{info}"));
        }));

        let _ = std::fs::remove_file(crate::log_path());
        log("starting");

        let config = Config::load();
        log(&format!(
            "config: row_height={}, overscan={}, data_dir={}, frame_ms={}, scroll_lines={}",
            config.list.row_height,
            config.list.overscan,
            config.data.dir.display(),
            config.ui.effective_frame_ms(),
            config.ui.effective_scroll_lines(),
        ));

        let mut store = PublishStore::new();
        store.load(&config.data.dir);
        log(&format!("store: {} items loaded", store.len()));

        let saved = UiState::load().unwrap_or_default();
        let route = Route::from_path(&saved.route).unwrap_or(Route::PublishStatus);

        let (events_tx, events_rx) = mpsc::channel();
        let config_monitor = ConfigMonitor::new(events_tx);

        let scroll = VirtualScroll::new(config.list.window_config());

        let mut app = Self {
            config,
            store,
            route,
            viewport: Rc::new(ListViewport::new()),
            scroll,
            term_size: TerminalSize::default(),
            events_rx,
            keyword_entry: false,
            grouped_overlay: false,
            dirty: false,
            running: true,
            saved_scroll: saved.scroll_top,
            _config_monitor: config_monitor,
        };

        let terminal = Terminal::new();
        terminal.run(|term| app.event_loop(term))?;

        app.scroll.unbind();
        UiState {
            route: app.route.path().to_owned(),
            scroll_top: app.viewport.scroll_top(),
        }
        .save();
        log("exited");
        Ok(())
    }

    /// Terminal rows available to the list panel.
    pub(super) fn list_panel_rows(&self) -> u16 {
        self.term_size.rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS)
    }

    pub(super) fn row_height(&self) -> f32 {
        self.scroll.config().effective_row_height()
    }

    /// Map the panel's cell rows into the calculator's pixel space.
    pub(super) fn sync_viewport_height(&mut self) {
        let height = f32::from(self.list_panel_rows()) * self.row_height();
        self.viewport.set_client_height(height);
    }

    /// Largest valid scroll offset for the current list.
    pub(super) fn max_scroll(&self) -> f32 {
        (self.scroll.total_height() - self.viewport.client_height()).max(0.0)
    }

    /// Feed the filtered length back into the calculator and re-clamp the
    /// scroll offset against the new total height.
    pub(super) fn refresh_row_count(&mut self) {
        self.scroll.set_row_count(self.store.total_count());
        self.viewport
            .set_scroll_top(self.viewport.scroll_top(), self.max_scroll());
        self.scroll.recompute();
        self.dirty = true;
    }

    pub(super) fn apply_config_reload(&mut self) {
        let config = Config::load();
        log(&format!(
            "config reloaded: row_height={}, overscan={}, data_dir={}",
            config.list.row_height,
            config.list.overscan,
            config.data.dir.display(),
        ));
        let data_dir_changed = config.data.dir != self.config.data.dir;
        self.config = config;
        self.scroll.set_config(self.config.list.window_config());
        if data_dir_changed {
            self.store.load(&self.config.data.dir);
        }
        self.sync_viewport_height();
        self.refresh_row_count();
    }
}
