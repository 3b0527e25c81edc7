//! Immutable configuration snapshot for the picker panel.
//!
//! [`PickerSettings`] bundles the display items and style tokens into a
//! value that can be applied atomically with
//! [`Model::set_settings`](super::Model::set_settings) and persisted across
//! lifecycle transitions. Once built it cannot be mutated; producing a
//! changed configuration means building a new value.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_picker::picker::PickerSettings;
//!
//! let settings = PickerSettings::builder()
//!     .with_items(vec!["one".into(), "two".into(), "three".into()])
//!     .with_color_text_center("212")
//!     .with_items_clickable(false)
//!     .build();
//!
//! assert_eq!(settings.items().len(), 3);
//! assert_eq!(settings.color_text_center(), "212");
//! assert!(!settings.items_clickable());
//! ```

use super::style;
use serde::{Deserialize, Serialize};

/// Immutable bundle of display/style configuration, independent of runtime
/// selection state.
///
/// Built via [`PickerSettings::builder`]; getters are pure. Serializes
/// structurally with serde, so persisted snapshots are field-order
/// independent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerSettings {
    items: Vec<String>,
    color_text_center: String,
    color_text_no_center: String,
    background_color: String,
    lines_color: String,
    items_clickable: bool,
}

impl PickerSettings {
    /// Starts a builder with theme defaults and no items.
    pub fn builder() -> PickerSettingsBuilder {
        PickerSettingsBuilder::default()
    }

    /// Builds settings from an external style-attribute source.
    ///
    /// Every attribute is optional; absent fields keep their defaults. No
    /// validation is performed on color tokens here; unknown values fall
    /// back to literal colors at render time.
    pub fn from_attrs(attrs: &StyleAttrs) -> Self {
        let mut b = Self::builder();
        if let Some(clickable) = attrs.items_clickable {
            b = b.with_items_clickable(clickable);
        }
        if let Some(color) = &attrs.background_color {
            b = b.with_background_color(color);
        }
        if let Some(color) = &attrs.lines_color {
            b = b.with_lines_color(color);
        }
        if let Some(color) = &attrs.text_center_color {
            b = b.with_color_text_center(color);
        }
        if let Some(color) = &attrs.text_no_center_color {
            b = b.with_color_text_no_center(color);
        }
        if let Some(entries) = &attrs.entries {
            b = b.with_items(entries.clone());
        }
        b.build()
    }

    /// The display items, in display order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Color token for the centered row's text.
    pub fn color_text_center(&self) -> &str {
        &self.color_text_center
    }

    /// Color token for non-centered rows' text.
    pub fn color_text_no_center(&self) -> &str {
        &self.color_text_no_center
    }

    /// Color token for the panel background.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Color token for the lines bracketing the center row.
    pub fn lines_color(&self) -> &str {
        &self.lines_color
    }

    /// Whether row taps are dispatched to the click listener.
    pub fn items_clickable(&self) -> bool {
        self.items_clickable
    }
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Chaining builder for [`PickerSettings`].
///
/// Unset fields default to the theme color constants in
/// [`style`](super::style) and `items_clickable = true`. The clickable
/// default lives here, not in process-wide mutable state.
#[derive(Debug, Clone)]
pub struct PickerSettingsBuilder {
    items: Vec<String>,
    color_text_center: String,
    color_text_no_center: String,
    background_color: String,
    lines_color: String,
    items_clickable: bool,
}

impl Default for PickerSettingsBuilder {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            color_text_center: style::DEFAULT_TEXT_CENTER.to_string(),
            color_text_no_center: style::DEFAULT_TEXT_NO_CENTER.to_string(),
            background_color: style::DEFAULT_BACKGROUND.to_string(),
            lines_color: style::DEFAULT_LINES.to_string(),
            items_clickable: true,
        }
    }
}

impl PickerSettingsBuilder {
    /// Sets the display items.
    pub fn with_items(mut self, items: Vec<String>) -> Self {
        self.items = items;
        self
    }

    /// Sets the centered row's text color token.
    pub fn with_color_text_center(mut self, color: &str) -> Self {
        self.color_text_center = color.to_string();
        self
    }

    /// Sets the non-centered rows' text color token.
    pub fn with_color_text_no_center(mut self, color: &str) -> Self {
        self.color_text_no_center = color.to_string();
        self
    }

    /// Sets the panel background color token.
    pub fn with_background_color(mut self, color: &str) -> Self {
        self.background_color = color.to_string();
        self
    }

    /// Sets the center-line color token.
    pub fn with_lines_color(mut self, color: &str) -> Self {
        self.lines_color = color.to_string();
        self
    }

    /// Sets whether row taps are dispatched.
    pub fn with_items_clickable(mut self, clickable: bool) -> Self {
        self.items_clickable = clickable;
        self
    }

    /// Finalizes the settings value.
    pub fn build(self) -> PickerSettings {
        PickerSettings {
            items: self.items,
            color_text_center: self.color_text_center,
            color_text_no_center: self.color_text_no_center,
            background_color: self.background_color,
            lines_color: self.lines_color,
            items_clickable: self.items_clickable,
        }
    }
}

/// External style-attribute source.
///
/// The host supplies this mapping when constructing a picker from declarative
/// configuration; every field is optional and missing values fall back to
/// the documented defaults. Deserializes from the host's config format via
/// serde.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleAttrs {
    /// Whether rows respond to taps.
    #[serde(default)]
    pub items_clickable: Option<bool>,
    /// Panel background color token.
    #[serde(default)]
    pub background_color: Option<String>,
    /// Center-line color token.
    #[serde(default)]
    pub lines_color: Option<String>,
    /// Centered row text color token.
    #[serde(default)]
    pub text_center_color: Option<String>,
    /// Non-centered row text color token.
    #[serde(default)]
    pub text_no_center_color: Option<String>,
    /// Initial display items.
    #[serde(default)]
    pub entries: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> Vec<String> {
        vec!["a".to_string(), "b".to_string(), "c".to_string()]
    }

    #[test]
    fn builder_defaults() {
        let s = PickerSettings::builder().build();
        assert!(s.items().is_empty());
        assert!(s.items_clickable());
        assert_eq!(s.color_text_center(), style::DEFAULT_TEXT_CENTER);
        assert_eq!(s.color_text_no_center(), style::DEFAULT_TEXT_NO_CENTER);
        assert_eq!(s.background_color(), style::DEFAULT_BACKGROUND);
        assert_eq!(s.lines_color(), style::DEFAULT_LINES);
    }

    #[test]
    fn builder_chaining_sets_all_fields() {
        let s = PickerSettings::builder()
            .with_items(abc())
            .with_color_text_center("212")
            .with_color_text_no_center("243")
            .with_background_color("236")
            .with_lines_color("240")
            .with_items_clickable(false)
            .build();
        assert_eq!(s.items(), abc().as_slice());
        assert_eq!(s.color_text_center(), "212");
        assert_eq!(s.color_text_no_center(), "243");
        assert_eq!(s.background_color(), "236");
        assert_eq!(s.lines_color(), "240");
        assert!(!s.items_clickable());
    }

    #[test]
    fn serde_round_trip_preserves_every_field() {
        let original = PickerSettings::builder()
            .with_items(abc())
            .with_color_text_center("#FFFFFF")
            .with_items_clickable(false)
            .build();
        let json = serde_json::to_string(&original).unwrap();
        let restored: PickerSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn attrs_with_absent_fields_yield_defaults() {
        let s = PickerSettings::from_attrs(&StyleAttrs::default());
        assert_eq!(s, PickerSettings::default());
    }

    #[test]
    fn attrs_override_only_present_fields() {
        let attrs = StyleAttrs {
            text_center_color: Some("white".to_string()),
            entries: Some(abc()),
            ..Default::default()
        };
        let s = PickerSettings::from_attrs(&attrs);
        assert_eq!(s.color_text_center(), "white");
        assert_eq!(s.items(), abc().as_slice());
        // untouched fields keep defaults
        assert_eq!(s.background_color(), style::DEFAULT_BACKGROUND);
        assert!(s.items_clickable());
    }

    #[test]
    fn attrs_deserialize_with_missing_keys() {
        let attrs: StyleAttrs = serde_json::from_str(r#"{"items_clickable": false}"#).unwrap();
        assert_eq!(attrs.items_clickable, Some(false));
        assert_eq!(attrs.entries, None);
    }
}
