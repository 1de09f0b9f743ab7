//! Raw player input and which of it counts as activity.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum Key {
    Escape,
    /// F1 through F12
    Function(u8),
    Char(char),
    Enter,
    Space,
    Other,
}

/// Input forwarded from the UI layer.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum PlayerInput {
    /// Touch or click anywhere on the play area
    PointerDown,
    Drag,
    Key(Key),
    Scroll(f32),
    /// A settings or help control was used
    UiButton(String),
}

impl PlayerInput {
    /// Whether this input proves the player is present. System keys and
    /// zero or non-finite scrolls do not.
    pub fn qualifies(&self) -> bool {
        match self {
            Self::PointerDown | Self::Drag | Self::UiButton(_) => true,
            Self::Key(Key::Escape) => false,
            Self::Key(Key::Function(n)) => !(1..=12).contains(n),
            Self::Key(_) => true,
            Self::Scroll(delta) => delta.is_finite() && *delta != 0.0,
        }
    }
}
