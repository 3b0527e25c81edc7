//! Error types for the picker component.

use thiserror::Error;

/// Errors surfaced by the picker's public API.
///
/// Style-attribute and persisted-state parsing problems are recovered locally
/// (logged, falling back to defaults) and never appear here; the only error
/// that crosses the API surface is the invalid-state condition of dispatching
/// a click with no listener attached.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PickerError {
    /// A click passed the clickable gate but no listener was registered.
    ///
    /// Silently dropping the event would hide integration bugs, so this is
    /// surfaced immediately instead.
    #[error("no click listener attached; call set_on_click_item_listener first")]
    NoClickListener,
}
