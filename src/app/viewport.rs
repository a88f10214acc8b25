//! The scrollable list panel the window calculator binds to.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::virtual_scroll::{SizeObservation, Viewport};

/// Pixel-space scroll state for the list panel. The host writes, the
/// calculator only reads.
#[derive(Default)]
pub struct ListViewport {
    scroll_top: Cell<f32>,
    client_height: Cell<f32>,
    /// Dirty flags of live size observations; dead ones are pruned on the
    /// next height change, so repeated bind/unbind cycles cannot pile up.
    observers: RefCell<Vec<Weak<Cell<bool>>>>,
}

impl ListViewport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_top(&self) -> f32 {
        self.scroll_top.get()
    }

    pub fn client_height(&self) -> f32 {
        self.client_height.get()
    }

    /// Move to an absolute offset, clamped to `[0, max_scroll]`.
    pub fn set_scroll_top(&self, value: f32, max_scroll: f32) {
        self.scroll_top.set(value.clamp(0.0, max_scroll.max(0.0)));
    }

    /// Move by a relative amount, clamped to `[0, max_scroll]`.
    pub fn scroll_by(&self, delta: f32, max_scroll: f32) {
        self.set_scroll_top(self.scroll_top.get() + delta, max_scroll);
    }

    /// Host-side resize: updates the visible height and flags every live
    /// size observation.
    pub fn set_client_height(&self, height: f32) {
        let height = height.max(0.0);
        if (height - self.client_height.get()).abs() < f32::EPSILON {
            return;
        }
        self.client_height.set(height);
        self.observers.borrow_mut().retain(|flag| match flag.upgrade() {
            Some(flag) => {
                flag.set(true);
                true
            }
            None => false,
        });
    }
}

impl Viewport for ListViewport {
    fn scroll_top(&self) -> f32 {
        self.scroll_top.get()
    }

    fn client_height(&self) -> f32 {
        self.client_height.get()
    }

    fn observe_size(&self) -> Option<Box<dyn SizeObservation>> {
        let flag = Rc::new(Cell::new(false));
        self.observers.borrow_mut().push(Rc::downgrade(&flag));
        Some(Box::new(PanelSizeObservation { flag }))
    }
}

struct PanelSizeObservation {
    flag: Rc<Cell<bool>>,
}

impl SizeObservation for PanelSizeObservation {
    fn take_resized(&mut self) -> bool {
        self.flag.replace(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_is_clamped_to_range() {
        let vp = ListViewport::new();
        vp.set_scroll_top(500.0, 300.0);
        assert!((vp.scroll_top() - 300.0).abs() < f32::EPSILON);
        vp.scroll_by(-1000.0, 300.0);
        assert!(vp.scroll_top().abs() < f32::EPSILON);
        // A shrunken list can push max_scroll below zero; offset stays at 0.
        vp.set_scroll_top(100.0, -50.0);
        assert!(vp.scroll_top().abs() < f32::EPSILON);
    }

    #[test]
    fn resize_flags_live_observations() {
        let vp = ListViewport::new();
        let mut obs = vp.observe_size().expect("panel observes sizes");
        assert!(!obs.take_resized());

        vp.set_client_height(480.0);
        assert!(obs.take_resized());
        assert!(!obs.take_resized());

        // Same height again is not a size change.
        vp.set_client_height(480.0);
        assert!(!obs.take_resized());
    }

    #[test]
    fn dropped_observations_are_pruned() {
        let vp = ListViewport::new();
        for _ in 0..16 {
            drop(vp.observe_size());
        }
        let obs = vp.observe_size();
        vp.set_client_height(100.0);
        assert_eq!(vp.observers.borrow().len(), 1);
        drop(obs);
    }
}
