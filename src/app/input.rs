//! Input dispatch: scrolling, filters, route navigation, keyword entry.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};

use super::App;
use crate::log;
use crate::routes::Route;
use crate::store::{Category, DesignFilter, Filters, Status};
use crate::terminal::size::TerminalSize;

impl App {
    pub(super) fn dispatch(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind != KeyEventKind::Release => self.handle_key(&key),
            Event::Mouse(mouse) => self.handle_mouse(&mouse),
            Event::Resize(cols, rows) => self.apply_resize(cols, rows),
            _ => {}
        }
    }

    fn apply_resize(&mut self, cols: u16, rows: u16) {
        self.term_size = TerminalSize { cols, rows };
        self.sync_viewport_height();
        // The window recomputation follows through the size observation on
        // the next frame tick; the chrome needs a repaint either way.
        self.dirty = true;
    }

    fn handle_key(&mut self, key: &KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.running = false;
            return;
        }

        if self.keyword_entry {
            self.handle_keyword_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            KeyCode::Tab => {
                self.route = self.route.next();
                self.dirty = true;
            }
            KeyCode::BackTab => {
                self.route = self.route.prev();
                self.dirty = true;
            }
            _ => {
                if self.route == Route::PublishStatus {
                    self.handle_board_key(key);
                }
            }
        }
    }

    fn handle_board_key(&mut self, key: &KeyEvent) {
        let row_height = self.row_height();
        match key.code {
            KeyCode::Up => self.scroll_list(-row_height),
            KeyCode::Down => self.scroll_list(row_height),
            KeyCode::PageUp => self.scroll_list(-self.viewport.client_height()),
            KeyCode::PageDown => self.scroll_list(self.viewport.client_height()),
            KeyCode::Home => {
                self.viewport.set_scroll_top(0.0, self.max_scroll());
                self.scroll.on_scroll();
            }
            KeyCode::End => {
                self.viewport.set_scroll_top(self.max_scroll(), self.max_scroll());
                self.scroll.on_scroll();
            }
            KeyCode::Char('/') => {
                self.keyword_entry = true;
                self.dirty = true;
            }
            KeyCode::Char('s') => self.cycle_status(),
            KeyCode::Char('c') => self.cycle_category(),
            KeyCode::Char('1') => self.cycle_depth1(),
            KeyCode::Char('d') => self.cycle_design(),
            KeyCode::Char('g') => {
                self.grouped_overlay = !self.grouped_overlay;
                self.dirty = true;
            }
            KeyCode::Char('x') => {
                self.store.filters = Filters::default();
                self.refresh_row_count();
            }
            KeyCode::Char('r') => self.reload_data(),
            _ => {}
        }
    }

    /// Live keyword editing: every keystroke re-filters the list.
    fn handle_keyword_key(&mut self, key: &KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.keyword_entry = false;
                self.dirty = true;
            }
            KeyCode::Backspace => {
                self.store.filters.keyword.pop();
                self.refresh_row_count();
            }
            KeyCode::Char(ch) => {
                self.store.filters.keyword.push(ch);
                self.refresh_row_count();
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) {
        if self.route != Route::PublishStatus {
            return;
        }
        let step = self.config.ui.effective_scroll_lines() as f32 * self.row_height();
        match mouse.kind {
            MouseEventKind::ScrollUp => self.scroll_list(-step),
            MouseEventKind::ScrollDown => self.scroll_list(step),
            _ => {}
        }
    }

    /// Move the viewport and schedule the coalesced window recomputation.
    fn scroll_list(&mut self, delta: f32) {
        self.viewport.scroll_by(delta, self.max_scroll());
        self.scroll.on_scroll();
    }

    fn cycle_status(&mut self) {
        self.store.filters.status = match self.store.filters.status {
            None => Some(Status::Done),
            Some(Status::Done) => Some(Status::InProgress),
            Some(Status::InProgress) => Some(Status::Waiting),
            Some(Status::Waiting) => None,
        };
        self.refresh_row_count();
    }

    fn cycle_category(&mut self) {
        self.store.filters.category = match self.store.filters.category {
            None => Some(Category::Main),
            Some(Category::Main) => Some(Category::Auth),
            Some(Category::Auth) => Some(Category::Other),
            Some(Category::Other) => None,
        };
        self.refresh_row_count();
    }

    fn cycle_design(&mut self) {
        self.store.filters.has_design = match self.store.filters.has_design {
            DesignFilter::All => DesignFilter::With,
            DesignFilter::With => DesignFilter::Without,
            DesignFilter::Without => DesignFilter::All,
        };
        self.refresh_row_count();
    }

    /// Step through the distinct depth1 values, then back to "all".
    fn cycle_depth1(&mut self) {
        let values = self.store.depth1_values();
        self.store.filters.depth1 = match self.store.filters.depth1.take() {
            None => values.first().cloned(),
            Some(current) => match values.iter().position(|value| *value == current) {
                Some(index) if index + 1 < values.len() => Some(values[index + 1].clone()),
                _ => None,
            },
        };
        self.refresh_row_count();
    }

    fn reload_data(&mut self) {
        self.store.load(&self.config.data.dir);
        log(&format!("store: reloaded, {} items", self.store.len()));
        self.refresh_row_count();
    }
}
