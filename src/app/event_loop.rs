//! Cooperative event loop: input dispatch, frame tick, coalesced redraw.

use std::io;
use std::time::{Duration, Instant};

use super::{App, AppEvent};
use crate::log;
use crate::terminal::Terminal;

impl App {
    pub(super) fn event_loop(&mut self, term: &Terminal) -> io::Result<()> {
        self.term_size = term.size();
        self.sync_viewport_height();
        self.scroll.set_row_count(self.store.total_count());
        self.viewport
            .set_scroll_top(self.saved_scroll, self.max_scroll());

        let state = self.scroll.bind(&self.viewport);
        log(&format!(
            "bound: rows={}, window=[{}, {}), total_height={}",
            self.store.total_count(),
            state.start,
            state.end,
            self.scroll.total_height(),
        ));
        self.render(term)?;

        while self.running {
            let frame = Duration::from_millis(self.config.ui.effective_frame_ms());
            let deadline = Instant::now() + frame;

            // Drain input until the frame deadline. Scroll events only mark
            // the calculator; the single recomputation happens at the tick
            // below, against whatever offset the last event left behind.
            loop {
                let budget = deadline.saturating_duration_since(Instant::now());
                match term.poll_event(budget)? {
                    Some(event) => self.dispatch(event),
                    None => break,
                }
                if Instant::now() >= deadline {
                    break;
                }
            }

            // Cross-thread events (config monitor).
            while let Ok(event) = self.events_rx.try_recv() {
                match event {
                    AppEvent::ConfigReload => self.apply_config_reload(),
                }
            }

            // Frame tick: at most one window recomputation per frame.
            if self.scroll.on_frame() {
                self.dirty = true;
            }

            if self.dirty {
                self.render(term)?;
                self.dirty = false;
            }
        }
        Ok(())
    }
}
