//! The picker panel model.
//!
//! Ties the list view, settings, and styles together into a bubbletea
//! component: keyboard navigation moves the centered row, `enter` taps it,
//! and the panel renders a fixed-height viewport with rules bracketing the
//! center slot. State can be captured and restored across sessions via
//! [`SavedState`]; a restored position is applied on the first
//! `WindowSizeMsg`, once the panel knows it is on screen.

use bubbletea_rs::{Cmd, KeyMsg, Msg, WindowSizeMsg};
use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

use super::keys::PickerKeyMap;
use super::listview::ListView;
use super::settings::PickerSettings;
use super::style::{PickerStyles, DEFAULT_BACKGROUND, DEFAULT_LINES};
use super::types::{ClickEvent, ItemClickListener, Slide};
use crate::error::PickerError;
use crate::Component;

/// Panel width used before the first window size message arrives.
const FALLBACK_WIDTH: usize = 24;

/// A vertical picker panel.
///
/// The panel shows a fixed odd number of rows; the middle row is the
/// selection. Scrolling moves items through the center slot, and look-ahead
/// padding above and below lets the first and last items reach it.
pub struct Model {
    list: ListView,
    styles: PickerStyles,
    keymap: PickerKeyMap,
    background_color: String,
    lines_color: String,
    width: usize,
    focused: bool,
    pending_restore: Option<usize>,
    on_click: Option<ItemClickListener>,
}

/// Snapshot of a picker's persistent state.
///
/// Serializes to plain JSON via serde; the host decides where the bytes
/// live. Settings are optional so a host that styles the panel itself can
/// persist only the centered index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SavedState {
    /// Visual and behavioral configuration at capture time.
    pub settings: Option<PickerSettings>,
    /// Index of the row that was centered.
    pub center_index: usize,
}

impl Model {
    /// Creates a panel with default settings and no items.
    pub fn new() -> Self {
        Self::with_settings(&PickerSettings::default())
    }

    /// Creates a panel configured from `settings`.
    pub fn with_settings(settings: &PickerSettings) -> Self {
        let mut model = Self {
            list: ListView::new(),
            styles: PickerStyles::default(),
            keymap: PickerKeyMap::default(),
            background_color: DEFAULT_BACKGROUND.to_string(),
            lines_color: DEFAULT_LINES.to_string(),
            width: 0,
            focused: true,
            pending_restore: None,
            on_click: None,
        };
        model.set_settings(settings);
        model
    }

    /// Applies `settings` as a sequence of individual setters.
    ///
    /// Items are replaced with the default placement (nothing tapped yet,
    /// centered on the middle item).
    pub fn set_settings(&mut self, settings: &PickerSettings) {
        self.set_color_text_center(settings.color_text_center());
        self.set_color_text_no_center(settings.color_text_no_center());
        self.set_items(settings.items().to_vec());
        self.set_background_color_panel(settings.background_color());
        self.set_lines_color(settings.lines_color());
        self.set_items_clickables(settings.items_clickable());
    }

    /// Replaces the items, centering on the middle one.
    pub fn set_items(&mut self, items: Vec<String>) {
        let position = items.len() / 2;
        self.set_items_with(items, 0, position);
    }

    /// Replaces the items with an explicit last-tapped row and center.
    pub fn set_items_with(&mut self, items: Vec<String>, which: usize, position: usize) {
        let clickable = self.list.adapter().clickable();
        self.list.adapter_mut().set_items(items, which, 0, clickable);
        self.list.set_selection(position);
    }

    /// Centers the middle item. With no items this does nothing.
    pub fn slide(&mut self) {
        let len = self.list.adapter().len();
        if len > 0 {
            self.list.set_selection(len / 2);
        }
    }

    /// Centers `position`, clamping out-of-range values.
    pub fn slide_to(&mut self, position: usize) {
        self.list.set_selection(position);
    }

    /// Slides in `direction`. Only [`Slide::Up`] has an effect.
    pub fn slide_dir(&mut self, direction: Slide) {
        match direction {
            Slide::Up => self.slide(),
            Slide::Down => {}
        }
    }

    /// Updates the centered row's text color.
    pub fn set_color_text_center(&mut self, color: &str) {
        self.list.adapter_mut().set_color_text_center(color);
        self.restyle();
    }

    /// Updates the non-centered rows' text color.
    pub fn set_color_text_no_center(&mut self, color: &str) {
        self.list.adapter_mut().set_color_text_no_center(color);
        self.restyle();
    }

    /// Updates the panel background color.
    pub fn set_background_color_panel(&mut self, color: &str) {
        self.background_color = color.to_string();
        self.restyle();
    }

    /// Updates the color of the rules bracketing the center row.
    pub fn set_lines_color(&mut self, color: &str) {
        self.lines_color = color.to_string();
        self.restyle();
    }

    /// Toggles whether rows respond to taps.
    pub fn set_items_clickables(&mut self, clickable: bool) {
        self.list.adapter_mut().set_items_clickables(clickable);
    }

    /// Installs the click listener invoked when a clickable row is tapped.
    pub fn set_on_click_item_listener<F>(&mut self, listener: F)
    where
        F: FnMut(ClickEvent) + Send + 'static,
    {
        self.on_click = Some(Box::new(listener));
    }

    /// Taps the row at `index`.
    ///
    /// Silently does nothing when items are not clickable or the index is
    /// out of range. A tap that would dispatch but has no listener attached
    /// is a host programming error and returns
    /// [`PickerError::NoClickListener`].
    pub fn tap(&mut self, index: usize) -> Result<(), PickerError> {
        let Some(event) = self.list.adapter_mut().click(index) else {
            return Ok(());
        };
        match self.on_click.as_mut() {
            Some(listener) => {
                listener(event);
                Ok(())
            }
            None => Err(PickerError::NoClickListener),
        }
    }

    /// Index of the row currently in the center.
    pub fn item_in_list_center(&self) -> usize {
        self.list.item_in_list_center()
    }

    /// The current items.
    pub fn items(&self) -> &[String] {
        self.list.adapter().items()
    }

    /// Whether rows currently respond to taps.
    pub fn items_clickable(&self) -> bool {
        self.list.adapter().clickable()
    }

    /// The key bindings driving navigation and selection.
    pub fn keymap(&self) -> &PickerKeyMap {
        &self.keymap
    }

    /// Captures the panel's persistent state.
    pub fn save_state(&self) -> SavedState {
        SavedState {
            settings: Some(self.snapshot_settings()),
            center_index: self.list.item_in_list_center(),
        }
    }

    /// Restores a previously captured state.
    ///
    /// Settings apply immediately; the centered row is applied on the next
    /// window size message, once the panel is laid out. An index beyond the
    /// restored item count is clamped at apply time.
    pub fn restore_state(&mut self, state: &SavedState) {
        if let Some(settings) = &state.settings {
            self.set_settings(settings);
        }
        self.pending_restore = Some(state.center_index);
    }

    /// Captures the panel's persistent state as a JSON string.
    pub fn save_state_json(&self) -> String {
        match serde_json::to_string(&self.save_state()) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "failed to serialize picker state");
                String::from("{}")
            }
        }
    }

    /// Restores state from a JSON string produced by
    /// [`save_state_json`](Self::save_state_json).
    ///
    /// Malformed input restores the default state instead of failing.
    pub fn restore_state_json(&mut self, json: &str) {
        let state = match serde_json::from_str::<SavedState>(json) {
            Ok(state) => state,
            Err(err) => {
                tracing::warn!(%err, "malformed picker state, restoring defaults");
                SavedState::default()
            }
        };
        self.restore_state(&state);
    }

    /// Handles a runtime message.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(size) = msg.downcast_ref::<WindowSizeMsg>() {
            self.width = size.width as usize;
            // One-shot: the pending restore is consumed on the first layout.
            if let Some(index) = self.pending_restore.take() {
                self.list.set_selection(index);
            }
            return None;
        }

        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            if !self.focused {
                return None;
            }
            if self.keymap.up.matches(key) {
                self.list.scroll_by(-1);
            } else if self.keymap.down.matches(key) {
                self.list.scroll_by(1);
            } else if self.keymap.go_to_start.matches(key) {
                self.list.set_selection(0);
            } else if self.keymap.go_to_end.matches(key) {
                let len = self.list.adapter().len();
                if len > 0 {
                    self.list.set_selection(len - 1);
                }
            } else if self.keymap.select.matches(key) {
                let center = self.list.item_in_list_center();
                if let Err(err) = self.tap(center) {
                    tracing::warn!(%err, "tap on centered row dropped");
                }
            }
        }

        None
    }

    /// Renders the panel.
    pub fn view(&self) -> String {
        let width = self.panel_width();
        let rule = self.styles.line.render(&"─".repeat(width));
        let center_slot = self.list.visible_rows() / 2;

        let mut lines = Vec::with_capacity(self.list.visible_rows() + 2);
        for view_row in 0..self.list.visible_rows() {
            if view_row == center_slot {
                lines.push(rule.clone());
            }
            lines.push(self.render_row(view_row, width));
            if view_row == center_slot {
                lines.push(rule.clone());
            }
        }
        lines.join("\n")
    }

    fn render_row(&self, view_row: usize, width: usize) -> String {
        let row = self
            .list
            .item_at_view_row(view_row)
            .and_then(|index| self.list.adapter().row(index));
        match row {
            Some(row) => {
                let text = centered(&row.text, width);
                if row.is_center {
                    self.styles.text_center.render(&text)
                } else {
                    self.styles.text_no_center.render(&text)
                }
            }
            // Look-ahead padding row.
            None => self.styles.panel.render(&" ".repeat(width)),
        }
    }

    fn panel_width(&self) -> usize {
        if self.width > 0 {
            return self.width;
        }
        self.items()
            .iter()
            .map(|item| item.width() + 4)
            .max()
            .unwrap_or(FALLBACK_WIDTH)
            .max(FALLBACK_WIDTH)
    }

    fn restyle(&mut self) {
        let adapter = self.list.adapter();
        self.styles = PickerStyles::from_tokens(
            adapter.color_text_center(),
            adapter.color_text_no_center(),
            &self.background_color,
            &self.lines_color,
        );
    }

    fn snapshot_settings(&self) -> PickerSettings {
        let adapter = self.list.adapter();
        PickerSettings::builder()
            .with_items(adapter.items().to_vec())
            .with_color_text_center(adapter.color_text_center())
            .with_color_text_no_center(adapter.color_text_no_center())
            .with_background_color(&self.background_color)
            .with_lines_color(&self.lines_color)
            .with_items_clickable(adapter.clickable())
            .build()
    }
}

impl Default for Model {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focused = true;
        None
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn focused(&self) -> bool {
        self.focused
    }
}

/// Pads `text` with spaces so it occupies `width` display columns.
fn centered(text: &str, width: usize) -> String {
    let text_width = text.width();
    if text_width >= width {
        return text.to_string();
    }
    let left = (width - text_width) / 2;
    let right = width - text_width - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}
