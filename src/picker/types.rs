//! Core types for the picker component.
//!
//! The event and row-model types shared by the adapter, the list view, and
//! the panel widget: the slide direction, the click callback contract, the
//! per-row render model, and the scroll state machine phases.

/// Direction for [`Model::slide_dir`](super::Model::slide_dir).
///
/// Only `Up` has a defined effect (center on the midpoint of the items).
/// `Down` is a documented no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slide {
    /// Slide the panel up, centering on the middle item.
    Up,
    /// No defined effect.
    Down,
}

/// Payload delivered to the click listener when a row is tapped.
///
/// # Examples
///
/// ```rust
/// use bubbletea_picker::picker::ClickEvent;
///
/// let ev = ClickEvent {
///     which: 2,
///     position: 1,
///     value: "February".to_string(),
/// };
/// assert_eq!(ev.which, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    /// Index of the tapped row.
    pub which: usize,
    /// Index of the row currently in the center.
    pub position: usize,
    /// Text of the tapped row.
    pub value: String,
}

/// Callback invoked when a clickable row is tapped.
pub type ItemClickListener = Box<dyn FnMut(ClickEvent) + Send>;

/// Render model for a single row, derived each view pass from the current
/// settings and selection state. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowViewModel {
    /// Row text.
    pub text: String,
    /// Whether this row occupies the visual center.
    pub is_center: bool,
    /// Whether taps on this row are dispatched.
    pub is_clickable: bool,
}

/// Phase of the scroll state machine.
///
/// The list view is `Idle` between gestures; a scroll step enters
/// `Scrolling` and settles back to `Idle` once the nearest row to the
/// visual center has been committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollPhase {
    /// No scroll in progress.
    #[default]
    Idle,
    /// A scroll gesture is being processed.
    Scrolling,
}
