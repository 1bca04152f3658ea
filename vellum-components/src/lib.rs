//! Headless form controls built on vellum-ui.
//!
//! Each component is a controller that owns interaction state and hands out
//! prop bundles. Rendering is left to the host: it reads the props, draws the
//! elements and forwards events back through the bundled handlers.
//!
//! # Example
//!
//! ```
//! use vellum_components::editable::{Editable, EditableArgs, InputOverrides, PreviewOverrides};
//! use vellum_ui::{FocusManager, KeyPress, winit::keyboard::NamedKey};
//!
//! let focus = FocusManager::new();
//! let editable = Editable::new(EditableArgs::default().placeholder("Add a title"), &focus);
//!
//! editable.preview_props(PreviewOverrides::default()).focus();
//! let input = editable.input_props(InputOverrides::default());
//! input.change("Groceries");
//! input.key_down(KeyPress::named(NamedKey::Enter));
//!
//! assert!(!editable.is_editing());
//! assert_eq!(editable.value(), "Groceries");
//! ```
//!
//! - [`editable`]: inline text that switches between a preview and an input.
//! - [`multi_select`]: selection model for a multi-value select field.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod editable;
pub mod multi_select;
