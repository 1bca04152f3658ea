//! Event handler handles and ordered handler chains.
//!
//! ## Usage
//!
//! Store callbacks in component args as [`Callback`] or [`CallbackWith`], and
//! hand [`Handlers`] chains to renderers so a component's own handler and any
//! caller-supplied handlers run together.

use std::{fmt, sync::Arc};

use smallvec::SmallVec;

/// Stable, comparable callback handle for `Fn()`.
///
/// `Callback` compares by identity (`Arc::ptr_eq`) so it can live in
/// configuration structs without forcing deep closure comparisons.
#[derive(Clone)]
pub struct Callback {
    handler: Arc<dyn Fn() + Send + Sync>,
}

impl Callback {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// A callback that does nothing.
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    /// Invoke the callback.
    pub fn call(&self) {
        (self.handler)();
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl Default for Callback {
    fn default() -> Self {
        Self::noop()
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback(..)")
    }
}

/// Stable, comparable callback handle for `Fn(T) -> R`.
///
/// Used for value-carrying notifications such as `on_change(String)`.
pub struct CallbackWith<T, R = ()> {
    handler: Arc<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Create a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            handler: Arc::new(handler),
        }
    }

    /// Invoke the callback with an argument.
    pub fn call(&self, value: T) -> R {
        (self.handler)(value)
    }
}

impl<T> CallbackWith<T> {
    /// A callback that ignores its argument.
    pub fn noop() -> Self {
        Self::new(|_| {})
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T> Default for CallbackWith<T> {
    fn default() -> Self {
        Self::noop()
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            handler: Arc::clone(&self.handler),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

/// An ordered list of handlers for one kind of event.
///
/// Handlers run in insertion order and every handler sees its own clone of the
/// event. Merging two chains with [`Handlers::extend`] appends, so handlers are
/// never silently replaced.
pub struct Handlers<E> {
    chain: SmallVec<[CallbackWith<E>; 2]>,
}

impl<E> Handlers<E> {
    /// An empty chain.
    pub fn new() -> Self {
        Self {
            chain: SmallVec::new(),
        }
    }

    /// Appends a handler and returns the chain.
    pub fn with(mut self, handler: impl Into<CallbackWith<E>>) -> Self {
        self.push(handler);
        self
    }

    /// Appends a handler.
    pub fn push(&mut self, handler: impl Into<CallbackWith<E>>) {
        self.chain.push(handler.into());
    }

    /// Appends every handler of `other`, keeping their order.
    pub fn extend(mut self, other: Handlers<E>) -> Self {
        self.chain.extend(other.chain);
        self
    }

    /// Number of handlers in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Returns `true` if no handler is attached.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl<E: Clone> Handlers<E> {
    /// Dispatches `event` to every handler in order.
    pub fn call(&self, event: E) {
        for handler in &self.chain {
            handler.call(event.clone());
        }
    }
}

impl Handlers<()> {
    /// Dispatches an argument-less event such as a click.
    pub fn fire(&self) {
        self.call(());
    }
}

impl<E> Default for Handlers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for Handlers<E> {
    fn clone(&self) -> Self {
        Self {
            chain: self.chain.clone(),
        }
    }
}

impl<E> PartialEq for Handlers<E> {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl<E> fmt::Debug for Handlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handlers")
            .field("len", &self.chain.len())
            .finish()
    }
}

impl<E> From<CallbackWith<E>> for Handlers<E> {
    fn from(handler: CallbackWith<E>) -> Self {
        Self::new().with(handler)
    }
}

impl From<Callback> for Handlers<()> {
    fn from(callback: Callback) -> Self {
        Self::new().with(CallbackWith::new(move |()| callback.call()))
    }
}
