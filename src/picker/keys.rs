//! Key bindings for picker navigation and selection.
//!
//! ## Navigation Keys
//!
//! - **Move center**: `↑/k` (previous item), `↓/j` (next item)
//! - **Jump**: `g/home` (first item), `G/end` (last item)
//! - **Tap**: `enter` (tap the centered row)

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for moving the centered row and tapping it.
#[derive(Debug, Clone)]
pub struct PickerKeyMap {
    /// Move the center up one item.
    pub up: key::Binding,
    /// Move the center down one item.
    pub down: key::Binding,
    /// Jump to the first item.
    pub go_to_start: key::Binding,
    /// Jump to the last item.
    pub go_to_end: key::Binding,
    /// Tap the centered row.
    pub select: key::Binding,
}

impl Default for PickerKeyMap {
    fn default() -> Self {
        Self {
            up: key::Binding::new(vec![KeyCode::Up, KeyCode::Char('k')]).with_help("↑/k", "up"),
            down: key::Binding::new(vec![KeyCode::Down, KeyCode::Char('j')])
                .with_help("↓/j", "down"),
            go_to_start: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first"),
            go_to_end: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        }
    }
}

impl key::KeyMap for PickerKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.up, &self.down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.up, &self.down],
            vec![&self.go_to_start, &self.go_to_end],
            vec![&self.select],
        ]
    }
}
