//! Key binding registry and resolution.
//!
//! [`KeyBindingRegistry`] maps key+modifier combinations to [`BindingAction`]s.
//! The `with_defaults()` constructor installs the page's bindings: the arrow
//! keys step a focused carousel and Escape dismisses the portfolio modal.

use std::collections::HashMap;

use super::input::{Key, KeyEvent, Modifiers};

// ---------------------------------------------------------------------------
// BindingAction
// ---------------------------------------------------------------------------

/// Action to take when a key binding is matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingAction {
    /// Step the focused carousel one card back.
    CarouselPrevious,
    /// Step the focused carousel one card forward.
    CarouselNext,
    /// Close the portfolio modal if it is open.
    DismissModal,
}

// ---------------------------------------------------------------------------
// KeyBindingRegistry
// ---------------------------------------------------------------------------

/// Registry of key bindings, mapping (Key, Modifiers) -> BindingAction.
#[derive(Debug)]
pub struct KeyBindingRegistry {
    bindings: HashMap<(Key, Modifiers), BindingAction>,
}

impl KeyBindingRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Create a registry with the page's default bindings.
    ///
    /// Defaults:
    /// - `ArrowLeft` -> CarouselPrevious
    /// - `ArrowRight` -> CarouselNext
    /// - `Escape` -> DismissModal
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.bind(Key::ArrowLeft, Modifiers::NONE, BindingAction::CarouselPrevious);
        registry.bind(Key::ArrowRight, Modifiers::NONE, BindingAction::CarouselNext);
        registry.bind(Key::Escape, Modifiers::NONE, BindingAction::DismissModal);
        registry
    }

    /// Register a key binding.
    ///
    /// If a binding already exists for this key+modifier combination, it is replaced.
    pub fn bind(&mut self, key: Key, modifiers: Modifiers, action: BindingAction) {
        self.bindings.insert((key, modifiers), action);
    }

    /// Remove a key binding.
    ///
    /// Returns the removed action, if any.
    pub fn unbind(&mut self, key: Key, modifiers: Modifiers) -> Option<BindingAction> {
        self.bindings.remove(&(key, modifiers))
    }

    /// Look up the action for a given key event.
    ///
    /// An exact key + modifiers binding wins; otherwise a binding registered
    /// without modifiers matches the key whatever modifiers are held, so
    /// Shift+ArrowRight still steps a carousel.
    pub fn resolve(&self, event: &KeyEvent) -> Option<BindingAction> {
        self.bindings
            .get(&(event.code, event.modifiers))
            .or_else(|| self.bindings.get(&(event.code, Modifiers::NONE)))
            .copied()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the registry has no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for KeyBindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
