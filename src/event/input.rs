//! Host input events.
//!
//! Defines [`InputEvent`], [`KeyEvent`] and supporting types. The host (a
//! browser shim, the CLI simulator or the test [`Pilot`](crate::testing::Pilot))
//! translates its native events into these so the runtime never depends on a
//! particular event API.

use std::ops::{BitAnd, BitOr};

use crate::dom::NodeId;

// ---------------------------------------------------------------------------
// Key
// ---------------------------------------------------------------------------

/// Keyboard key, named after the DOM `KeyboardEvent.key` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Escape,
    Tab,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` string. Unknown names yield `None`.
    pub fn from_dom(name: &str) -> Option<Self> {
        let key = match name {
            "Enter" => Key::Enter,
            "Escape" | "Esc" => Key::Escape,
            "Tab" => Key::Tab,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            " " => Key::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => return None,
                }
            }
        };
        Some(key)
    }
}

// ---------------------------------------------------------------------------
// Modifiers
// ---------------------------------------------------------------------------

/// Modifier key bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(pub u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const SHIFT: Modifiers = Modifiers(1);
    pub const CTRL: Modifiers = Modifiers(2);
    pub const ALT: Modifiers = Modifiers(4);

    /// Check whether `self` contains all the bits in `other`.
    pub fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }

    /// Check whether no modifier bits are set.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Modifiers {
    type Output = Modifiers;
    fn bitor(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 | rhs.0)
    }
}

impl BitAnd for Modifiers {
    type Output = Modifiers;
    fn bitand(self, rhs: Self) -> Self::Output {
        Modifiers(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// KeyEvent
// ---------------------------------------------------------------------------

/// A keyboard event with key and modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    pub code: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    pub fn new(code: Key, modifiers: Modifiers) -> Self {
        Self { code, modifiers }
    }

    /// A key press with no modifiers.
    pub fn plain(code: Key) -> Self {
        Self::new(code, Modifiers::NONE)
    }
}

// ---------------------------------------------------------------------------
// InputEvent
// ---------------------------------------------------------------------------

/// Top-level input event delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary-button click on `target`.
    Click { target: NodeId },
    /// Key pressed; delivered to whatever node currently holds focus.
    Key(KeyEvent),
    /// `target` received keyboard focus.
    Focus { target: NodeId },
    /// Focus left the page content.
    Blur,
    /// First contact of a touch on `target`, in screen coordinates.
    TouchStart { target: NodeId, screen_x: f64 },
    /// Touch lifted from `target`.
    TouchEnd { target: NodeId, screen_x: f64 },
    /// Pointer entered `target` (does not bubble).
    PointerEnter { target: NodeId },
    /// Pointer left `target` (does not bubble).
    PointerLeave { target: NodeId },
    /// Mouse button or finger pressed on `target`, ahead of any click.
    PointerDown { target: NodeId },
    /// Viewport changed size.
    Resize { width: u32, height: u32 },
}

// ===========================================================================
// Tests
// ===========================================================================
