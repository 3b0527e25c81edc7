#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-picker/")]

//! # bubbletea-picker
//!
//! A vertical picker panel for terminal applications built with
//! [bubbletea-rs](https://github.com/joshka/bubbletea-rs).
//!
//! ## Overview
//!
//! The picker shows a short scrollable list in which the row sitting on the
//! visual center is the current selection. Scrolling or programmatic slides
//! move items through the center slot; two rules bracket the centered row so
//! the selection is always obvious. Rows can be tapped, delivering a
//! [`picker::ClickEvent`] to a host-supplied listener. The component follows
//! the Elm Architecture pattern with `init()`, `update()`, and `view()`
//! methods and plugs directly into a bubbletea-rs program.
//!
//! ## Features
//!
//! - **Center-row selection** with look-ahead padding so edge items can be
//!   centered too
//! - **Type-safe key bindings** for navigation and tapping
//! - **Configurable colors** via string tokens (named palette entries, ANSI
//!   indexes, or hex values)
//! - **Serializable state** so a host can save and restore the panel across
//!   sessions
//! - **Focus management** through the [`Component`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_picker::prelude::*;
//!
//! let mut picker = Picker::new();
//! picker.set_items(vec![
//!     "Option A".to_string(),
//!     "Option B".to_string(),
//!     "Option C".to_string(),
//! ]);
//! picker.set_on_click_item_listener(|ev| {
//!     println!("picked {} (row {})", ev.value, ev.which);
//! });
//!
//! // The middle item starts in the center.
//! assert_eq!(picker.item_in_list_center(), 1);
//! ```
//!
//! ## Configuration
//!
//! Build a [`picker::PickerSettings`] for declarative setup, or call the
//! individual setters on [`Picker`] at runtime:
//!
//! ```rust
//! use bubbletea_picker::prelude::*;
//!
//! let settings = PickerSettings::builder()
//!     .with_items(vec!["red".into(), "green".into(), "blue".into()])
//!     .with_color_text_center("#EE6FF8")
//!     .with_background_color("black")
//!     .with_items_clickable(true)
//!     .build();
//! let picker = Picker::with_settings(&settings);
//! assert!(picker.items_clickable());
//! ```

use bubbletea_rs::Cmd;

pub mod error;
pub mod key;
pub mod picker;

/// Trait for components that can receive and lose keyboard focus.
///
/// A blurred component keeps rendering but ignores key input. Hosts that
/// compose several widgets route focus by calling these methods as the user
/// tabs between them.
pub trait Component {
    /// Sets the component to focused state.
    ///
    /// May return a command for initialization tasks such as starting
    /// timers or triggering redraws.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::PickerError;
pub use picker::Model as Picker;

/// Convenient re-exports for typical usage.
///
/// ```rust
/// use bubbletea_picker::prelude::*;
///
/// let picker = Picker::new();
/// assert!(picker.focused());
/// ```
pub mod prelude {
    pub use crate::error::PickerError;
    pub use crate::key::{Binding, Help as KeyHelp, KeyMap};
    pub use crate::picker::{
        ClickEvent, ListView, Model as Picker, PickerKeyMap, PickerSettings,
        PickerSettingsBuilder, PickerStyles, SavedState, ScrollPhase, Slide, StyleAttrs,
    };
    pub use crate::Component;
}
