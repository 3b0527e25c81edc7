//! Styling for the picker panel.
//!
//! Colors are carried as string tokens (the same form lipgloss accepts:
//! ANSI indexes like `"212"` or hex values like `"#EE6FF8"`), which keeps
//! [`PickerSettings`](super::PickerSettings) serializable. A small named
//! palette is resolved first; anything unknown is handed to lipgloss as a
//! literal color value, so an unresolvable name degrades to "whatever the
//! terminal makes of it" instead of failing widget construction.

use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Default token for the centered row's text.
pub const DEFAULT_TEXT_CENTER: &str = "#EE6FF8";
/// Default token for non-centered rows' text.
pub const DEFAULT_TEXT_NO_CENTER: &str = "#777777";
/// Default token for the panel background.
pub const DEFAULT_BACKGROUND: &str = "#2D2D2D";
/// Default token for the lines bracketing the center row.
pub const DEFAULT_LINES: &str = "#AD58B4";

/// Named colors accepted by the style-attribute source.
static PALETTE: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("black", "#000000"),
        ("white", "#FFFFFF"),
        ("gray", "#808080"),
        ("grey", "#808080"),
        ("red", "#FF5555"),
        ("green", "#50FA7B"),
        ("yellow", "#F1FA8C"),
        ("blue", "#6272A4"),
        ("magenta", "#FF79C6"),
        ("cyan", "#8BE9FD"),
        ("pink", "#EE6FF8"),
        ("purple", "#AD58B4"),
        ("subdued", "#777777"),
    ])
});

/// Resolves a color token to a lipgloss color.
///
/// Known palette names are mapped to their hex values; any other token is
/// treated as a literal color value (ANSI index or hex). Resolution never
/// fails; an unrecognized name is handed to the terminal as-is.
pub fn resolve_color(token: &str) -> Color {
    match PALETTE.get(token.to_ascii_lowercase().as_str()) {
        Some(hex) => Color::from(*hex),
        None => {
            if !token.starts_with('#') && token.parse::<u8>().is_err() {
                tracing::debug!(token, "color token not in palette, using as literal");
            }
            Color::from(token)
        }
    }
}

/// Resolved lipgloss styles for the panel's visual elements.
#[derive(Debug, Clone)]
pub struct PickerStyles {
    /// Style for the centered row's text.
    pub text_center: Style,
    /// Style for non-centered rows' text.
    pub text_no_center: Style,
    /// Style for blank padding rows and the panel surface.
    pub panel: Style,
    /// Style for the rules above and below the center row.
    pub line: Style,
}

impl PickerStyles {
    /// Builds styles from color tokens.
    pub fn from_tokens(
        text_center: &str,
        text_no_center: &str,
        background: &str,
        lines: &str,
    ) -> Self {
        let bg = resolve_color(background);
        Self {
            text_center: Style::new()
                .foreground(resolve_color(text_center))
                .background(bg.clone())
                .bold(true),
            text_no_center: Style::new()
                .foreground(resolve_color(text_no_center))
                .background(bg.clone()),
            panel: Style::new().background(bg.clone()),
            line: Style::new().foreground(resolve_color(lines)).background(bg),
        }
    }
}

impl Default for PickerStyles {
    fn default() -> Self {
        Self::from_tokens(
            DEFAULT_TEXT_CENTER,
            DEFAULT_TEXT_NO_CENTER,
            DEFAULT_BACKGROUND,
            DEFAULT_LINES,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_names_resolve() {
        // Palette hit and literal fallback must both produce a color; the
        // rendered escape sequences differ, which is all we rely on here.
        let named = Style::new().foreground(resolve_color("white")).render("x");
        let hex = Style::new().foreground(resolve_color("#FFFFFF")).render("x");
        assert_eq!(named, hex);
    }

    #[test]
    fn unknown_token_is_literal() {
        // An unknown name falls through to lipgloss untouched.
        let a = Style::new().foreground(resolve_color("#ABCDEF")).render("x");
        let b = Style::new()
            .foreground(Color::from("#ABCDEF"))
            .render("x");
        assert_eq!(a, b);
    }

    #[test]
    fn case_insensitive_palette() {
        let a = Style::new().foreground(resolve_color("White")).render("x");
        let b = Style::new().foreground(resolve_color("white")).render("x");
        assert_eq!(a, b);
    }
}
