//! Virtual scroll windowing: maps a scroll offset and viewport height to
//! the contiguous slice of rows worth mounting.
//!
//! The calculator is host-agnostic: it reads scroll state through the
//! [`Viewport`] trait, never writes to it, and leaves all presentation to
//! the host. Scroll events are coalesced to at most one recomputation per
//! frame tick; resize and row-count changes recompute directly.


use std::rc::{Rc, Weak};

/// Default pixel height of one row.
pub const DEFAULT_ROW_HEIGHT: f32 = 40.0;

/// Default number of extra rows rendered beyond each visible edge.
pub const DEFAULT_OVERSCAN: usize = 5;

/// Read-only view of the scrollable element the calculator observes.
///
/// The host owns the element; the calculator holds only a weak handle and
/// skips recomputation entirely once the host drops it.
pub trait Viewport {
    /// Current scroll offset in pixels from the top of the full list.
    fn scroll_top(&self) -> f32;

    /// Visible height of the scrollable area in pixels.
    fn client_height(&self) -> f32;

    /// Register interest in size changes of the element.
    ///
    /// Hosts without a size-observation capability return `None`; windowing
    /// then still reacts to bind, scroll, and row-count changes, just not
    /// to pure element resizes.
    fn observe_size(&self) -> Option<Box<dyn SizeObservation>> {
        None
    }
}

/// Receipt for a size-change subscription. Dropping it detaches the
/// observer from the host element.
pub trait SizeObservation {
    /// True when the observed element changed size since the last call.
    /// Reading clears the pending change.
    fn take_resized(&mut self) -> bool;
}

/// Windowing parameters, fixed for the lifetime of a binding (the row
/// count is fed separately, since it changes with every filter or reload).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowConfig {
    /// Pixel height of one row. Uniform across the whole list.
    pub row_height: f32,
    /// Extra rows rendered beyond the visible edge, on each side.
    pub overscan: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            row_height: DEFAULT_ROW_HEIGHT,
            overscan: DEFAULT_OVERSCAN,
        }
    }
}

impl WindowConfig {
    /// Returns `row_height`, falling back to the default when the
    /// configured value is not positive.
    pub fn effective_row_height(&self) -> f32 {
        if self.row_height > 0.0 {
            self.row_height
        } else {
            DEFAULT_ROW_HEIGHT
        }
    }
}

/// The computed window: the half-open row range `[start, end)` to mount,
/// plus the pixel geometry needed to position it inside the full-height
/// scroll container.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WindowState {
    pub start: usize,
    pub end: usize,
    /// Pixel offset of the rendered slice within the full list.
    /// Always `start * row_height`.
    pub offset_top: f32,
    /// Pixel height spanned by the rendered slice.
    /// Always `(end - start) * row_height`.
    pub rendered_height: f32,
}

impl WindowState {
    /// Number of rows in the window.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Computes which rows to mount from the bound viewport's scroll state.
///
/// Recomputation is a pure function of the inputs at call time; the
/// previous window never feeds into the next one.
pub struct VirtualScroll<V: Viewport> {
    viewport: Weak<V>,
    config: WindowConfig,
    row_count: usize,
    state: WindowState,
    /// A scroll event arrived; recompute on the next frame tick.
    frame_pending: bool,
    size_obs: Option<Box<dyn SizeObservation>>,
}

impl<V: Viewport> VirtualScroll<V> {
    pub fn new(config: WindowConfig) -> Self {
        Self {
            viewport: Weak::new(),
            config,
            row_count: 0,
            state: WindowState::default(),
            frame_pending: false,
            size_obs: None,
        }
    }

    /// Attach to a viewport: store a weak handle, acquire the size
    /// observation, and compute the initial window.
    pub fn bind(&mut self, viewport: &Rc<V>) -> WindowState {
        self.unbind();
        self.viewport = Rc::downgrade(viewport);
        self.size_obs = viewport.observe_size();
        self.recompute()
    }

    /// Detach from the viewport: cancel any pending frame-scheduled
    /// recomputation and release the size observation. Safe to call when
    /// never bound. The last computed window is retained.
    pub fn unbind(&mut self) {
        self.frame_pending = false;
        self.size_obs = None;
        self.viewport = Weak::new();
    }

    /// Scroll-event entry point. Schedules at most one recomputation for
    /// the next frame tick; any number of calls within a frame collapse
    /// into a single recomputation against the scroll position current at
    /// tick time.
    pub fn on_scroll(&mut self) {
        self.frame_pending = true;
    }

    /// Frame tick: runs a pending scroll recomputation and reacts to an
    /// observed size change. Returns whether the window was recomputed.
    pub fn on_frame(&mut self) -> bool {
        let resized = self
            .size_obs
            .as_mut()
            .is_some_and(|obs| obs.take_resized());
        if !self.frame_pending && !resized {
            return false;
        }
        self.frame_pending = false;
        if self.viewport.upgrade().is_none() {
            return false;
        }
        self.recompute();
        true
    }

    /// Reactive row-count trigger: the list grew or shrank (filter
    /// change, data reload). Recomputes immediately.
    pub fn set_row_count(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.recompute();
    }

    /// Swap windowing parameters (config reload). Recomputes immediately.
    pub fn set_config(&mut self, config: WindowConfig) {
        self.config = config;
        self.recompute();
    }

    /// Recompute the window from the viewport's current scroll state.
    ///
    /// Unbound, or the host already dropped the viewport: no-op, the prior
    /// window stands.
    pub fn recompute(&mut self) -> WindowState {
        let Some(viewport) = self.viewport.upgrade() else {
            return self.state;
        };

        let row_height = self.config.effective_row_height();
        let scroll_top = viewport.scroll_top().max(0.0);
        let client_height = viewport.client_height().max(0.0);

        let raw_start = (scroll_top / row_height).floor() as usize;
        let visible = (client_height / row_height).ceil() as usize;

        // Extend backward by the overscan, clamped to the list start. The
        // extra clamp to `row_count` keeps `start <= end` while the host
        // still carries a stale scroll offset after a row-count shrink.
        let start = raw_start
            .saturating_sub(self.config.overscan)
            .min(self.row_count);
        // Forward budget is `visible + 2*overscan`: the backward extension
        // already consumed plus the forward one. Intentionally asymmetric
        // when the backward clamp at the list start bites.
        let end = (start + visible + 2 * self.config.overscan).min(self.row_count);

        self.state = WindowState {
            start,
            end,
            offset_top: start as f32 * row_height,
            rendered_height: (end - start) as f32 * row_height,
        };
        self.state
    }

    /// Height of the full logical list, used to size the scroll container so
    /// native scrollbar behavior reflects all rows, mounted or not.
    pub fn total_height(&self) -> f32 {
        self.row_count as f32 * self.config.effective_row_height()
    }

    /// The last computed window.
    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }
}
