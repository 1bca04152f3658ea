//! vellum-ui provides the interaction primitives that headless components are
//! built from.
//!
//! # Overview
//!
//! The crate does not render anything. It supplies the pieces a component
//! needs to own its interaction state and hand typed event-handler bundles to
//! whatever renderer draws it:
//!
//! - [`State`] for shared, lock-protected component state.
//! - [`Callback`], [`CallbackWith`] and [`Handlers`] for identity-comparable
//!   event handlers and ordered handler chains.
//! - [`Scope`] for passing controller handles down a component tree
//!   explicitly.
//! - [`FocusManager`] and [`Focus`] for focus ownership.
//! - [`KeyPress`] for keyboard input.
//! - [`EffectQueue`] for side effects that must run after the host commits a
//!   render.
//!
//! # Callbacks
//!
//! ```
//! use vellum_ui::{CallbackWith, Handlers};
//!
//! let log = CallbackWith::new(|value: String| println!("changed to {value}"));
//! let handlers = Handlers::new().with(log);
//! handlers.call("hello".to_string());
//! ```
//!
//! # Scopes
//!
//! ```
//! use vellum_ui::Scope;
//!
//! struct Theme {
//!     dense: bool,
//! }
//!
//! let root = Scope::new();
//! let child = root.provide(Theme { dense: true });
//! assert!(child.get::<Theme>().map(|theme| theme.dense).unwrap_or(false));
//! assert!(root.get::<Theme>().is_err());
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod effect;
pub mod error;
pub mod focus;
pub mod keyboard;
pub mod logging;
pub mod prop;
pub mod scope;
pub mod state;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use winit;

pub use crate::{
    effect::EffectQueue,
    error::ScopeError,
    focus::{Focus, FocusId, FocusManager},
    keyboard::KeyPress,
    prop::{Callback, CallbackWith, Handlers},
    scope::Scope,
    state::State,
};
