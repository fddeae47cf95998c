// enumkit/src/methods.rs

//! Write-once custom-behavior registry.
//!
//! Every domain carries its own [`MethodTable`]. A host program may
//! register named closures exactly once, after which the table is
//! locked; variants resolve the closures by name through
//! [`Enumerated::call`](crate::Enumerated::call).

use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use once_cell::unsync::OnceCell;

use crate::error::EnumError;

/// A caller-supplied operation attached to every variant of a domain.
pub type Method<V> = Rc<dyn Fn(&V) -> String>;

/// A named collection of [`Method`]s, as passed to `methods()`.
pub type MethodMap<V> = HashMap<String, Method<V>>;

/// Wraps a closure into a [`Method`] handle.
///
/// # Example
///
/// ```
/// use enumkit::{method, Enumerated, EnumType, EnumVariant, MethodMap};
///
/// let mut map = MethodMap::new();
/// map.insert("shout".into(), method(|v: &EnumVariant| format!("{v}!")));
///
/// let color = EnumType::new(["RED", "GREEN"]).methods(map).unwrap();
/// let red = color.variant("RED").unwrap();
/// assert_eq!(red.call("shout").unwrap(), "RED!");
/// ```
pub fn method<V, F>(f: F) -> Method<V>
where
    F: Fn(&V) -> String + 'static,
{
    Rc::new(f)
}

/// Per-domain registry of shared custom behavior.
///
/// Empty until the domain's single `methods()` registration; immutable
/// afterwards. Each domain owns an independent table, so registrations
/// on one domain never leak into another.
pub struct MethodTable<V> {
    cell: OnceCell<MethodMap<V>>,
}

impl<V> MethodTable<V> {
    pub(crate) fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// Installs the method map. Fails with
    /// [`EnumError::AlreadyExtended`] if a map was already installed.
    pub(crate) fn register(&self, map: MethodMap<V>) -> Result<(), EnumError> {
        self.cell.set(map).map_err(|_| EnumError::AlreadyExtended)
    }

    /// Looks up a registered method by name.
    pub(crate) fn lookup(&self, name: &str) -> Option<Method<V>> {
        self.cell.get().and_then(|map| map.get(name)).cloned()
    }
}

impl<V> fmt::Debug for MethodTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodTable")
            .field("registered", &self.cell.get().is_some())
            .finish()
    }
}
