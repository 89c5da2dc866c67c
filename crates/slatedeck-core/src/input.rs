//! Pointer event types for unified mouse/touch handling.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Modifier keys state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// Pointer event, position in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point, button: MouseButton },
    Move { position: Point },
    Up { position: Point, button: MouseButton },
}

impl PointerEvent {
    /// Convenience constructor for a left-button press.
    pub fn down(position: Point) -> Self {
        Self::Down {
            position,
            button: MouseButton::Left,
        }
    }

    pub fn moved(position: Point) -> Self {
        Self::Move { position }
    }

    /// Convenience constructor for a left-button release.
    pub fn up(position: Point) -> Self {
        Self::Up {
            position,
            button: MouseButton::Left,
        }
    }

    /// The event's pointer position.
    pub fn position(&self) -> Point {
        match self {
            Self::Down { position, .. } | Self::Move { position } | Self::Up { position, .. } => {
                *position
            }
        }
    }
}
