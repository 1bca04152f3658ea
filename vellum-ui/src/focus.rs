//! # Focus Management
//!
//! Focus is tracked by a [`FocusManager`] that the host creates once per
//! window (or per test) and passes to the components it builds. Each focusable
//! element owns a [`Focus`] handle with a unique [`FocusId`]; at most one id is
//! focused per manager at a time.
//!
//! ## Usage
//!
//! ```
//! use vellum_ui::FocusManager;
//!
//! let manager = FocusManager::new();
//! let input = manager.create();
//! let button = manager.create();
//!
//! input.request_focus();
//! assert!(input.is_focused());
//!
//! button.request_focus();
//! assert!(!input.is_focused());
//!
//! // Only the current owner can release focus.
//! input.unfocus();
//! assert!(button.is_focused());
//! ```

use std::{fmt, sync::Arc};

use parking_lot::RwLock;
use uuid::Uuid;

/// Identifies a focusable element.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(Uuid);

impl FocusId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Debug for FocusId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FocusId({})", self.0.simple())
    }
}

#[derive(Default)]
struct FocusState {
    focused: Option<FocusId>,
}

/// Owner of the focus state for one tree of components.
#[derive(Clone, Default)]
pub struct FocusManager {
    state: Arc<RwLock<FocusState>>,
}

impl FocusManager {
    /// Creates a manager with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new focus handle bound to this manager.
    pub fn create(&self) -> Focus {
        Focus {
            id: FocusId::new(),
            manager: self.clone(),
        }
    }

    /// The currently focused element, if any.
    pub fn focused(&self) -> Option<FocusId> {
        self.state.read().focused
    }

    /// Returns `true` if `id` currently has focus.
    pub fn is_focused(&self, id: FocusId) -> bool {
        self.focused() == Some(id)
    }

    /// Moves focus to `id`, returning the element that lost it.
    pub fn focus(&self, id: FocusId) -> Option<FocusId> {
        let mut state = self.state.write();
        let previous = state.focused.replace(id);
        previous.filter(|previous| *previous != id)
    }

    /// Clears focus entirely, returning the element that lost it.
    pub fn clear(&self) -> Option<FocusId> {
        self.state.write().focused.take()
    }

    fn release(&self, id: FocusId) -> bool {
        let mut state = self.state.write();
        if state.focused == Some(id) {
            state.focused = None;
            true
        } else {
            false
        }
    }
}

impl fmt::Debug for FocusManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FocusManager")
            .field("focused", &self.focused())
            .finish()
    }
}

/// A focus handle for one focusable element.
///
/// Focus is released automatically when the handle is dropped.
pub struct Focus {
    id: FocusId,
    manager: FocusManager,
}

impl Focus {
    /// The id renderers attach to the element.
    pub fn id(&self) -> FocusId {
        self.id
    }

    /// Checks if this element currently has focus.
    pub fn is_focused(&self) -> bool {
        self.manager.is_focused(self.id)
    }

    /// Requests focus for this element.
    pub fn request_focus(&self) {
        self.manager.focus(self.id);
    }

    /// Clears focus if this element currently has it.
    ///
    /// Returns `true` if focus was released.
    pub fn unfocus(&self) -> bool {
        self.manager.release(self.id)
    }
}

impl fmt::Debug for Focus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Focus")
            .field("id", &self.id)
            .field("focused", &self.is_focused())
            .finish()
    }
}

impl Drop for Focus {
    fn drop(&mut self) {
        self.unfocus();
    }
}
