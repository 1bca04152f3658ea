//! # Keyboard Input
//!
//! Key presses delivered to component handlers. The key and modifier types are
//! winit's, so hosts built on winit can forward events without translation.

use winit::keyboard::{Key, ModifiersState, NamedKey};

/// A single key-down event together with the modifiers held at the time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    /// The logical key that was pressed.
    pub key: Key,
    /// Modifier state at the moment of the press.
    pub modifiers: ModifiersState,
}

impl KeyPress {
    /// A key press without modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: ModifiersState::empty(),
        }
    }

    /// A press of a named key such as Enter or Escape.
    pub fn named(key: NamedKey) -> Self {
        Self::new(Key::Named(key))
    }

    /// A press of a key producing the given text.
    pub fn character(text: &str) -> Self {
        Self::new(Key::Character(text.into()))
    }

    /// Returns the same press with `modifiers` held.
    pub fn with_modifiers(mut self, modifiers: ModifiersState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if this is a press of `named`.
    pub fn is(&self, named: NamedKey) -> bool {
        self.key == Key::Named(named)
    }

    /// Whether Shift was held.
    pub fn shift(&self) -> bool {
        self.modifiers.shift_key()
    }

    /// Whether the platform meta key (Command on macOS, Windows key
    /// elsewhere) was held.
    pub fn meta(&self) -> bool {
        self.modifiers.super_key()
    }

    /// Whether Control was held.
    pub fn control(&self) -> bool {
        self.modifiers.control_key()
    }

    /// Whether Alt was held.
    pub fn alt(&self) -> bool {
        self.modifiers.alt_key()
    }
}

impl From<NamedKey> for KeyPress {
    fn from(key: NamedKey) -> Self {
        Self::named(key)
    }
}
