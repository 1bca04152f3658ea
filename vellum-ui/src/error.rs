//! Error types shared by vellum crates.

use thiserror::Error;

/// Errors produced when reading a value out of a [`Scope`](crate::Scope).
///
/// These indicate a composition mistake, such as rendering a custom control
/// outside the component that provides its controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScopeError {
    /// No value of the requested type was provided by any ancestor.
    #[error("no `{type_name}` was provided in this scope")]
    Missing {
        /// Name of the requested type.
        type_name: &'static str,
    },
    /// A value was registered under the type's id but could not be downcast.
    #[error("scope entry for `{type_name}` has a different type")]
    TypeMismatch {
        /// Name of the requested type.
        type_name: &'static str,
    },
}
