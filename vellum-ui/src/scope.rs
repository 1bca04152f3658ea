//! Explicit, typed values shared with descendants.
//!
//! ## Usage
//!
//! A parent component calls [`Scope::provide`] and passes the returned scope to
//! its children. Children read values back with [`Scope::get`], which fails
//! with [`ScopeError::Missing`] when nothing was provided.

use std::{
    any::{Any, TypeId, type_name},
    fmt,
    sync::Arc,
};

use im::HashMap;

use crate::error::ScopeError;

type ScopeMap = HashMap<TypeId, Arc<dyn Any + Send + Sync>>;

/// An immutable layer of provided values.
///
/// Providing a value creates a new scope that shares structure with its
/// parent; the parent is left untouched, so siblings never observe each
/// other's values.
#[derive(Clone)]
pub struct Scope {
    values: ScopeMap,
}

impl Scope {
    /// An empty root scope.
    pub fn new() -> Self {
        Self {
            values: ScopeMap::new(),
        }
    }

    /// Returns a child scope where `value` shadows any ancestor value of the
    /// same type.
    pub fn provide<T>(&self, value: T) -> Scope
    where
        T: Send + Sync + 'static,
    {
        self.provide_shared(Arc::new(value))
    }

    /// Like [`Scope::provide`] for a value that is already shared.
    pub fn provide_shared<T>(&self, value: Arc<T>) -> Scope
    where
        T: Send + Sync + 'static,
    {
        let value: Arc<dyn Any + Send + Sync> = value;
        Scope {
            values: self.values.update(TypeId::of::<T>(), value),
        }
    }

    /// Reads the nearest provided value of type `T`.
    pub fn get<T>(&self) -> Result<Arc<T>, ScopeError>
    where
        T: Send + Sync + 'static,
    {
        let value = self
            .values
            .get(&TypeId::of::<T>())
            .cloned()
            .ok_or(ScopeError::Missing {
                type_name: type_name::<T>(),
            })?;
        value.downcast::<T>().map_err(|_| ScopeError::TypeMismatch {
            type_name: type_name::<T>(),
        })
    }

    /// Returns `true` if a value of type `T` is visible in this scope.
    pub fn contains<T>(&self) -> bool
    where
        T: Send + Sync + 'static,
    {
        self.values.contains_key(&TypeId::of::<T>())
    }
}

impl Default for Scope {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("values", &self.values.len())
            .finish()
    }
}
