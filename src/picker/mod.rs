//! Vertical picker panel with center-row selection.
//!
//! A fixed-height scrollable panel: the row in the visual center is the
//! current selection, with a configurable number of look-ahead rows above
//! and below so the first and last items can still reach the center slot.
//! Two rules bracket the center row.
//!
//! The module splits responsibilities the same way across submodules:
//! - `model`: the panel component ([`Model`], [`SavedState`])
//! - `listview`: scroll state machine and viewport geometry
//! - `adapter`: backing items, center tracking, click dispatch
//! - `settings`: serializable configuration ([`PickerSettings`])
//! - `style`: color token resolution and lipgloss styles
//! - `keys`: navigation key bindings
//! - `types`: shared event and render types
//!
//! # Examples
//!
//! ```
//! use bubbletea_picker::picker::{Model, PickerSettings};
//!
//! let settings = PickerSettings::builder()
//!     .with_items(vec!["one".into(), "two".into(), "three".into()])
//!     .with_color_text_center("pink")
//!     .build();
//! let mut picker = Model::with_settings(&settings);
//! picker.set_on_click_item_listener(|ev| println!("picked {}", ev.value));
//! assert_eq!(picker.item_in_list_center(), 1);
//! ```

pub mod adapter;
pub mod keys;
pub mod listview;
pub mod model;
pub mod settings;
pub mod style;
pub mod types;

pub use adapter::Adapter;
pub use keys::PickerKeyMap;
pub use listview::{ListView, VISIBLE_ROWS};
pub use model::{Model, SavedState};
pub use settings::{PickerSettings, PickerSettingsBuilder, StyleAttrs};
pub use style::{resolve_color, PickerStyles};
pub use types::{ClickEvent, ItemClickListener, RowViewModel, ScrollPhase, Slide};

use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};

// BubbleTeaModel implementation - integrates with the bubbletea-rs runtime.
impl BubbleTeaModel for Model {
    /// Creates an empty, focused panel with default colors.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        Model::update(self, msg)
    }

    fn view(&self) -> String {
        Model::view(self)
    }
}
