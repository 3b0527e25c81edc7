//! Scrollable list view: translates scroll gestures into a discrete
//! center-row index and keeps the adapter informed.
//!
//! The view owns the scroll state machine: it is [`ScrollPhase::Idle`]
//! between gestures, enters [`ScrollPhase::Scrolling`] while a step is being
//! processed, and on settle commits the row nearest the visual center
//! through the adapter's select path. Programmatic selection via
//! [`ListView::set_selection`] runs through the same settle path, so
//! user-driven and programmatic centering are indistinguishable downstream.

use super::adapter::Adapter;
use super::types::ScrollPhase;

/// Number of rows visible in the panel. Odd, so a single row sits exactly on
/// the visual midpoint.
pub const VISIBLE_ROWS: usize = 5;

/// List view wrapping the adapter with scroll/selection logic.
#[derive(Debug, Clone)]
pub struct ListView {
    adapter: Adapter,
    phase: ScrollPhase,
    visible_rows: usize,
}

impl ListView {
    /// Creates a list view with the default viewport geometry.
    pub fn new() -> Self {
        Self::with_visible_rows(VISIBLE_ROWS)
    }

    /// Creates a list view showing `visible_rows` rows (forced odd, min 1).
    pub fn with_visible_rows(visible_rows: usize) -> Self {
        let visible_rows = if visible_rows % 2 == 0 {
            visible_rows.max(2) - 1
        } else {
            visible_rows.max(1)
        };
        Self {
            adapter: Adapter::new(visible_rows / 2),
            phase: ScrollPhase::Idle,
            visible_rows,
        }
    }

    /// Scrolls by `delta` rows and settles on the nearest row to the center.
    ///
    /// Each step is a complete gesture: the view enters `Scrolling`,
    /// commits the new center through the adapter, and returns to `Idle`.
    pub fn scroll_by(&mut self, delta: isize) {
        if self.adapter.is_empty() {
            return;
        }
        self.phase = ScrollPhase::Scrolling;
        let len = self.adapter.len() as isize;
        let nearest = (self.adapter.center() as isize + delta).clamp(0, len - 1) as usize;
        self.settle(nearest);
    }

    /// Programmatically centers `index`.
    ///
    /// Out-of-range indexes are clamped, not rejected; with no items this is
    /// a no-op and the center stays 0.
    pub fn set_selection(&mut self, index: usize) {
        if self.adapter.is_empty() {
            return;
        }
        self.phase = ScrollPhase::Scrolling;
        self.settle(index.min(self.adapter.len() - 1));
    }

    /// Commits `index` as the centered row and returns to `Idle`.
    fn settle(&mut self, index: usize) {
        // Select events travel in view space, offset by the look-ahead pad.
        self.adapter.handle_select_event(index + self.adapter.pad());
        self.phase = ScrollPhase::Idle;
    }

    /// Index of the row currently in the center. Used for persistence.
    pub fn item_in_list_center(&self) -> usize {
        self.adapter.center()
    }

    /// Current phase of the scroll state machine.
    pub fn phase(&self) -> ScrollPhase {
        self.phase
    }

    /// Rows visible in the viewport.
    pub fn visible_rows(&self) -> usize {
        self.visible_rows
    }

    /// Item index occupying view-space row `view_row`, if any.
    ///
    /// Rows outside the item range are look-ahead padding, present so edge
    /// items can still reach the center slot.
    pub fn item_at_view_row(&self, view_row: usize) -> Option<usize> {
        let pad = self.adapter.pad();
        let index = self.adapter.center() as isize + view_row as isize - pad as isize;
        if index >= 0 && (index as usize) < self.adapter.len() {
            Some(index as usize)
        } else {
            None
        }
    }

    /// The adapter backing this view.
    pub fn adapter(&self) -> &Adapter {
        &self.adapter
    }

    /// Mutable access to the adapter, for configuration setters.
    pub fn adapter_mut(&mut self) -> &mut Adapter {
        &mut self.adapter
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_with(n: usize) -> ListView {
        let mut v = ListView::new();
        let items = (0..n).map(|i| format!("item {i}")).collect();
        v.adapter_mut().set_items(items, 0, 0, true);
        v
    }

    #[test]
    fn set_selection_round_trips_every_valid_index() {
        let mut v = view_with(7);
        for i in 0..7 {
            v.set_selection(i);
            assert_eq!(v.item_in_list_center(), i);
        }
    }

    #[test]
    fn set_selection_clamps_out_of_range() {
        let mut v = view_with(4);
        v.set_selection(100);
        assert_eq!(v.item_in_list_center(), 3);
    }

    #[test]
    fn set_selection_on_empty_is_noop() {
        let mut v = view_with(0);
        v.set_selection(5);
        assert_eq!(v.item_in_list_center(), 0);
        assert_eq!(v.phase(), ScrollPhase::Idle);
    }

    #[test]
    fn scroll_settles_back_to_idle() {
        let mut v = view_with(5);
        v.scroll_by(2);
        assert_eq!(v.item_in_list_center(), 2);
        assert_eq!(v.phase(), ScrollPhase::Idle);
        v.scroll_by(-1);
        assert_eq!(v.item_in_list_center(), 1);
    }

    #[test]
    fn scroll_stops_at_both_edges() {
        let mut v = view_with(3);
        v.scroll_by(-5);
        assert_eq!(v.item_in_list_center(), 0);
        v.scroll_by(10);
        assert_eq!(v.item_in_list_center(), 2);
    }

    #[test]
    fn programmatic_and_user_driven_selection_match() {
        let mut by_scroll = view_with(6);
        by_scroll.scroll_by(4);
        let mut by_call = view_with(6);
        by_call.set_selection(4);
        assert_eq!(
            by_scroll.item_in_list_center(),
            by_call.item_in_list_center()
        );
        assert_eq!(by_scroll.phase(), by_call.phase());
    }

    #[test]
    fn viewport_rows_pad_near_the_edges() {
        let v = view_with(5); // center 0, pad 2
        assert_eq!(v.item_at_view_row(0), None);
        assert_eq!(v.item_at_view_row(1), None);
        assert_eq!(v.item_at_view_row(2), Some(0)); // center slot
        assert_eq!(v.item_at_view_row(3), Some(1));
        assert_eq!(v.item_at_view_row(4), Some(2));
    }

    #[test]
    fn even_viewport_heights_are_forced_odd() {
        let v = ListView::with_visible_rows(6);
        assert_eq!(v.visible_rows(), 5);
        let v = ListView::with_visible_rows(0);
        assert_eq!(v.visible_rows(), 1);
    }
}
