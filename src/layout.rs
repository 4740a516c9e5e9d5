//! Responsive Navigation Layout
//!
//! Computes how many bottom-navigation items fit the measured container and
//! coalesces DOM measurement work to one unit per animation frame.

use std::cell::Cell;
use std::rc::Rc;

use leptos::{
    create_node_ref, create_rw_signal, html, request_animation_frame, NodeRef, RwSignal, SignalSet,
};

/// Fixed per-item width in pixels (90px CSS width plus a 2px spacing buffer).
pub const ITEM_WIDTH: f64 = 92.0;

/// Minimum number of items kept in the bar once the overflow trigger shows.
pub const MIN_VISIBLE: usize = 2;

/// Split of the navigation items between the bar and the overflow popup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverflowLayout {
    /// Items shown in the bar itself.
    pub visible_count: usize,
    /// Whether the overflow trigger is shown.
    pub overflow_button: bool,
}

/// Computes the overflow split for `item_count` items in a container of
/// `container_width` pixels.
///
/// When not everything fits, one slot is reserved for the overflow trigger
/// and at least [`MIN_VISIBLE`] items stay in the bar.
pub fn compute_overflow(item_count: usize, container_width: f64) -> OverflowLayout {
    let max_visible = (container_width.max(0.0) / ITEM_WIDTH).floor() as usize;

    if item_count <= max_visible {
        return OverflowLayout {
            visible_count: item_count,
            overflow_button: false,
        };
    }

    let visible_count = MIN_VISIBLE
        .max(max_visible.saturating_sub(1))
        .min(item_count);

    OverflowLayout {
        visible_count,
        overflow_button: visible_count < item_count,
    }
}

/// Coalesces repeated relayout requests into one callback per animation
/// frame. Requests made while a frame is already queued merge into it.
#[derive(Clone, Default)]
pub struct FrameScheduler {
    pending: Rc<Cell<bool>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&self, work: impl FnOnce() + 'static) {
        if self.pending.get() {
            return;
        }
        self.pending.set(true);

        let pending = Rc::clone(&self.pending);
        request_animation_frame(move || {
            pending.set(false);
            work();
        });
    }
}

/// Frame-debounced layout pass shared by the sidenav and the bottom bar.
///
/// One scheduled unit measures the bottom-navigation container (driving the
/// reactive [`compute_overflow`] split) and realigns the sidenav collapse
/// toggle with its anchor item.
#[derive(Clone)]
pub struct LayoutController {
    scheduler: FrameScheduler,
    /// Last measured width of the bottom-navigation container.
    pub nav_width: RwSignal<f64>,
    /// Bottom-navigation container.
    pub bar: NodeRef<html::Nav>,
    /// Sidenav collapse toggle.
    pub toggle: NodeRef<html::Div>,
    /// Sidenav item the toggle aligns with.
    pub anchor: NodeRef<html::Div>,
}

impl LayoutController {
    pub fn new() -> Self {
        Self {
            scheduler: FrameScheduler::new(),
            nav_width: create_rw_signal(0.0),
            bar: create_node_ref(),
            toggle: create_node_ref(),
            anchor: create_node_ref(),
        }
    }

    /// Requests a layout pass on the next animation frame. Bursts of
    /// requests (resize storms, rapid navigation) collapse into one pass.
    pub fn request(&self) {
        let nav_width = self.nav_width;
        let bar = self.bar;
        let toggle = self.toggle;
        let anchor = self.anchor;

        self.scheduler.schedule(move || {
            if let Some(el) = bar.get_untracked() {
                nav_width.set(el.offset_width() as f64);
            }
            if let (Some(toggle), Some(anchor)) = (toggle.get_untracked(), anchor.get_untracked()) {
                let top = anchor.offset_top();
                let _ = toggle.style("top", format!("{top}px"));
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_items_fit() {
        // 3 items of 92px in 500px: maxVisible = 5, everything fits.
        let layout = compute_overflow(3, 500.0);
        assert_eq!(layout.visible_count, 3);
        assert!(!layout.overflow_button);
    }

    #[test]
    fn test_overflow_reserves_trigger_slot() {
        // 7 items in 500px: maxVisible = 5, one slot goes to the trigger.
        let layout = compute_overflow(7, 500.0);
        assert_eq!(layout.visible_count, 4);
        assert!(layout.overflow_button);
        assert_eq!(7 - layout.visible_count, 3);
    }

    #[test]
    fn test_minimum_visible_floor() {
        // 5 items in 180px: maxVisible = 1, but at least 2 items stay.
        let layout = compute_overflow(5, 180.0);
        assert_eq!(layout.visible_count, MIN_VISIBLE);
        assert!(layout.overflow_button);
    }

    #[test]
    fn test_minimum_floor_can_swallow_overflow() {
        // 2 items in 92px: the floor keeps both visible, nothing is left
        // for the popup and the trigger stays hidden.
        let layout = compute_overflow(2, 92.0);
        assert_eq!(layout.visible_count, 2);
        assert!(!layout.overflow_button);
    }

    #[test]
    fn test_exact_fit_boundary() {
        // 5 items in exactly 5 * 92px.
        let layout = compute_overflow(5, 460.0);
        assert_eq!(layout.visible_count, 5);
        assert!(!layout.overflow_button);

        // One item more no longer fits.
        let layout = compute_overflow(6, 460.0);
        assert_eq!(layout.visible_count, 4);
        assert!(layout.overflow_button);
    }

    #[test]
    fn test_zero_width_container() {
        let layout = compute_overflow(4, 0.0);
        assert_eq!(layout.visible_count, MIN_VISIBLE);
        assert!(layout.overflow_button);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    async fn settle() {
        // Long enough for the queued animation frame to have fired.
        gloo_timers::future::TimeoutFuture::new(50).await;
    }

    #[wasm_bindgen_test]
    async fn test_burst_requests_coalesce_into_one_frame() {
        let scheduler = FrameScheduler::new();
        let runs = Rc::new(Cell::new(0u32));

        // Resize storms and rapid navigation issue many requests before
        // the frame fires; only the first queued unit runs.
        for _ in 0..3 {
            let runs = Rc::clone(&runs);
            scheduler.schedule(move || runs.set(runs.get() + 1));
        }
        settle().await;
        assert_eq!(runs.get(), 1);

        // The pending flag clears with the frame, so later requests
        // schedule again.
        let counter = Rc::clone(&runs);
        scheduler.schedule(move || counter.set(counter.get() + 1));
        settle().await;
        assert_eq!(runs.get(), 2);
    }
}
