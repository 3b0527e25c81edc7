//! Type-safe key bindings for picker navigation.
//!
//! This module defines [`Binding`], a small declarative description of the
//! keys that trigger an action plus the help text describing it, and the
//! [`KeyMap`] trait that components implement to expose their bindings to
//! help displays.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_picker::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let select = Binding::new(vec![KeyCode::Enter]).with_help("enter", "select");
//! assert_eq!(select.help().key, "enter");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help information for a key binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key representation shown in help (e.g. "↑/k").
    pub key: String,
    /// Description of what the key does (e.g. "up").
    pub desc: String,
}

/// A key binding: one or more key codes that trigger the same action.
///
/// Bindings can be disabled, which makes [`Binding::matches`] always return
/// `false` without removing the binding from help layouts.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding that matches any of the given key codes.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            disabled: false,
        }
    }

    /// Attaches help text for this binding (builder style).
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// Returns the help entry for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Returns whether the binding currently participates in matching.
    pub fn enabled(&self) -> bool {
        !self.disabled
    }

    /// Returns `true` if the key message matches one of this binding's keys.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        !self.disabled && self.keys.contains(&msg.key)
    }
}

/// Trait implemented by components that expose key bindings for help views.
pub trait KeyMap {
    /// Bindings for the compact, single-line help view.
    fn short_help(&self) -> Vec<&Binding>;

    /// Bindings for the expanded help view, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
