//! Row adapter: maps items and selection state to per-row render models and
//! owns click gating.
//!
//! The adapter holds the backing items, the index of the row currently
//! considered centered, and the style tokens each row is rendered with. The
//! list view drives centering through [`Adapter::handle_select_event`]; the
//! adapter never moves the center on its own.

use super::types::{ClickEvent, RowViewModel};
use super::style;

/// Backing data and selection state for the picker's rows.
#[derive(Debug, Clone)]
pub struct Adapter {
    items: Vec<String>,
    center: usize,
    /// Last-clicked row index, carried through item replacement.
    which: usize,
    clickable: bool,
    color_text_center: String,
    color_text_no_center: String,
    /// Look-ahead rows prepended in view space so edge items can be
    /// centered; select events arrive offset by this amount.
    pad: usize,
}

impl Adapter {
    /// Creates an empty adapter with the given look-ahead padding.
    pub fn new(pad: usize) -> Self {
        Self {
            items: Vec::new(),
            center: 0,
            which: 0,
            clickable: true,
            color_text_center: style::DEFAULT_TEXT_CENTER.to_string(),
            color_text_no_center: style::DEFAULT_TEXT_NO_CENTER.to_string(),
            pad,
        }
    }

    /// Replaces the backing data and resets clickability.
    ///
    /// Does not move the center beyond recording the provided initial value
    /// (clamped); centering is driven by the list view's settle path.
    pub fn set_items(
        &mut self,
        items: Vec<String>,
        which: usize,
        center: usize,
        clickable: bool,
    ) {
        self.items = items;
        self.which = which;
        self.clickable = clickable;
        self.center = if self.items.is_empty() {
            0
        } else {
            center.min(self.items.len() - 1)
        };
    }

    /// Commits a select event arriving from the list view.
    ///
    /// `raw` is a view-space index: the item index plus the look-ahead
    /// padding. The padding is stripped and the result clamped into
    /// `[0, len - 1]` before being recorded. Returns the `(previous, new)`
    /// center pair so callers can re-render just the two affected rows;
    /// with an empty backing list the center stays pinned at 0.
    pub fn handle_select_event(&mut self, raw: usize) -> (usize, usize) {
        let previous = self.center;
        if self.items.is_empty() {
            self.center = 0;
        } else {
            self.center = raw.saturating_sub(self.pad).min(self.items.len() - 1);
        }
        (previous, self.center)
    }

    /// Updates the centered row's text color token.
    pub fn set_color_text_center(&mut self, color: &str) {
        self.color_text_center = color.to_string();
    }

    /// Updates the non-centered rows' text color token.
    pub fn set_color_text_no_center(&mut self, color: &str) {
        self.color_text_no_center = color.to_string();
    }

    /// Toggles whether taps are dispatched. Non-clickable rows still render.
    pub fn set_items_clickables(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    /// Handles a tap on `tapped`.
    ///
    /// Returns `None` when items are not clickable or the index is out of
    /// range; otherwise the click event to deliver to the listener. Also
    /// records `tapped` as the last-clicked row.
    pub fn click(&mut self, tapped: usize) -> Option<ClickEvent> {
        if !self.clickable {
            return None;
        }
        let value = self.items.get(tapped)?.clone();
        self.which = tapped;
        Some(ClickEvent {
            which: tapped,
            position: self.center,
            value,
        })
    }

    /// Derives the render model for the item at `index`.
    pub fn row(&self, index: usize) -> Option<RowViewModel> {
        self.items.get(index).map(|text| RowViewModel {
            text: text.clone(),
            is_center: index == self.center,
            is_clickable: self.clickable,
        })
    }

    /// Index of the centered row.
    pub fn center(&self) -> usize {
        self.center
    }

    /// Index of the last-clicked row.
    pub fn which(&self) -> usize {
        self.which
    }

    /// Whether taps are currently dispatched.
    pub fn clickable(&self) -> bool {
        self.clickable
    }

    /// The backing items.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Number of backing items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the backing list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The look-ahead padding select events are offset by.
    pub fn pad(&self) -> usize {
        self.pad
    }

    pub(super) fn color_text_center(&self) -> &str {
        &self.color_text_center
    }

    pub(super) fn color_text_no_center(&self) -> &str {
        &self.color_text_no_center
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item {i}")).collect()
    }

    #[test]
    fn select_event_strips_padding() {
        let mut a = Adapter::new(2);
        a.set_items(items(5), 0, 0, true);
        // item index 3 arrives as view-space 5
        let (prev, new) = a.handle_select_event(5);
        assert_eq!((prev, new), (0, 3));
        assert_eq!(a.center(), 3);
    }

    #[test]
    fn select_event_clamps_to_last_item() {
        let mut a = Adapter::new(2);
        a.set_items(items(3), 0, 0, true);
        a.handle_select_event(99);
        assert_eq!(a.center(), 2);
    }

    #[test]
    fn select_event_on_empty_pins_center_to_zero() {
        let mut a = Adapter::new(2);
        let (prev, new) = a.handle_select_event(7);
        assert_eq!((prev, new), (0, 0));
    }

    #[test]
    fn set_items_clamps_initial_center() {
        let mut a = Adapter::new(2);
        a.set_items(items(3), 0, 10, true);
        assert_eq!(a.center(), 2);
        a.set_items(Vec::new(), 0, 10, true);
        assert_eq!(a.center(), 0);
    }

    #[test]
    fn click_yields_event_with_center_position() {
        let mut a = Adapter::new(2);
        a.set_items(items(5), 0, 0, true);
        a.handle_select_event(2 + 2); // center item 2
        let ev = a.click(4).unwrap();
        assert_eq!(ev.which, 4);
        assert_eq!(ev.position, 2);
        assert_eq!(ev.value, "item 4");
        assert_eq!(a.which(), 4);
    }

    #[test]
    fn click_swallowed_when_not_clickable() {
        let mut a = Adapter::new(2);
        a.set_items(items(5), 0, 0, false);
        assert!(a.click(1).is_none());
        a.set_items_clickables(true);
        assert!(a.click(1).is_some());
    }

    #[test]
    fn click_out_of_range_is_ignored() {
        let mut a = Adapter::new(2);
        a.set_items(items(2), 0, 0, true);
        assert!(a.click(5).is_none());
    }

    #[test]
    fn row_models_mark_only_the_center() {
        let mut a = Adapter::new(2);
        a.set_items(items(3), 0, 1, false);
        let rows: Vec<_> = (0..3).map(|i| a.row(i).unwrap()).collect();
        assert_eq!(
            rows.iter().map(|r| r.is_center).collect::<Vec<_>>(),
            vec![false, true, false]
        );
        assert!(rows.iter().all(|r| !r.is_clickable));
        assert!(a.row(3).is_none());
    }

    #[test]
    fn color_setters_take_effect_without_moving_center() {
        let mut a = Adapter::new(2);
        a.set_items(items(3), 0, 1, true);
        a.set_color_text_center("white");
        a.set_color_text_no_center("gray");
        assert_eq!(a.color_text_center(), "white");
        assert_eq!(a.color_text_no_center(), "gray");
        assert_eq!(a.center(), 1);
        assert_eq!(a.items().len(), 3);
    }
}
