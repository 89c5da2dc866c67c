//! Per-element interaction state.

/// The interaction state of one element.
///
/// Transitions: `Idle → Selected → {Dragging, Resizing} → Selected → Idle`.
/// Dragging and Resizing are mutually exclusive and only reachable from
/// Selected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ElementState {
    /// No interaction.
    #[default]
    Idle,
    /// Element is the scope's exclusive selection.
    Selected,
    /// A drag session is repositioning the element.
    Dragging,
    /// A resize session is adjusting the element's font size.
    Resizing,
}

impl ElementState {
    /// Whether the element is selected (including while dragging/resizing).
    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Whether a pointer session is currently mutating the element.
    pub fn is_engaged(&self) -> bool {
        matches!(self, Self::Dragging | Self::Resizing)
    }
}
