// enumkit/src/objects.rs

//! Closed enumerations whose variants carry their own behavior.

use std::fmt;
use std::rc::Rc;

use crate::domain::{Domain, Enumerated};
use crate::error::EnumError;
use crate::methods::{MethodMap, MethodTable};

/// A closed enumeration where each variant may carry caller-supplied
/// methods of its own, beyond the shared default set.
///
/// A variant's own methods shadow same-named methods registered later
/// through `methods()`; the shared registration only fills in for
/// names a variant did not itself define.
///
/// # Example
///
/// ```
/// use enumkit::{method, Enumerated, MethodMap, ObjectEnum, ObjectVariant};
///
/// let mut dog = MethodMap::new();
/// dog.insert("speak".into(), method(|_: &ObjectVariant| "woof!".into()));
/// let mut cat = MethodMap::new();
/// cat.insert("speak".into(), method(|_: &ObjectVariant| "meow!".into()));
///
/// let mut fallback = MethodMap::new();
/// fallback.insert("speak".into(), method(|_: &ObjectVariant| "...".into()));
///
/// let animal = ObjectEnum::new([
///     ("DOG", dog),
///     ("CAT", cat),
///     ("GIRAFFE", MethodMap::new()),
/// ])
/// .methods(fallback)
/// .unwrap();
///
/// assert_eq!(animal.variant("DOG").unwrap().call("speak").unwrap(), "woof!");
/// assert_eq!(animal.variant("GIRAFFE").unwrap().call("speak").unwrap(), "...");
/// ```
#[derive(Clone)]
pub struct ObjectEnum {
    shared: Rc<ObjectShared>,
}

struct ObjectShared {
    names: Vec<String>,
    own: Vec<MethodMap<ObjectVariant>>,
    methods: MethodTable<ObjectVariant>,
}

impl ObjectEnum {
    /// Builds an object enumeration from declaration-ordered
    /// `(name, methods)` entries; empty method maps are allowed.
    ///
    /// The domain is immutable after construction apart from the single
    /// shared `methods()` registration.
    ///
    /// # Panics
    ///
    /// Panics if `entries` is empty or declares a duplicate name.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MethodMap<ObjectVariant>)>,
        S: Into<String>,
    {
        let mut names = Vec::new();
        let mut own = Vec::new();
        for (name, map) in entries {
            let name = name.into();
            assert!(!names.contains(&name), "duplicate variant name '{name}'");
            names.push(name);
            own.push(map);
        }
        assert!(!names.is_empty(), "enumeration needs at least one name");
        Self {
            shared: Rc::new(ObjectShared {
                names,
                own,
                methods: MethodTable::new(),
            }),
        }
    }

    /// Number of declared variants.
    pub fn len(&self) -> usize {
        self.shared.names.len()
    }

    /// Always false; the constructor rejects empty declarations.
    pub fn is_empty(&self) -> bool {
        self.shared.names.is_empty()
    }

    /// Looks up a variant by its declared name.
    pub fn variant(&self, name: &str) -> Option<ObjectVariant> {
        let index = self.shared.names.iter().position(|n| n == name)?;
        Some(ObjectVariant {
            shared: Rc::clone(&self.shared),
            index,
        })
    }

    /// Registers shared fallback behavior for names the variants did
    /// not define themselves. Write-once: a second call fails with
    /// [`EnumError::AlreadyExtended`]. Returns the domain for chaining.
    pub fn methods(self, map: MethodMap<ObjectVariant>) -> Result<Self, EnumError> {
        self.shared.methods.register(map)?;
        Ok(self)
    }
}

impl Domain for ObjectEnum {
    type Value = ObjectVariant;

    fn first(&self) -> Result<ObjectVariant, EnumError> {
        Ok(ObjectVariant {
            shared: Rc::clone(&self.shared),
            index: 0,
        })
    }

    fn last(&self) -> Result<ObjectVariant, EnumError> {
        Ok(ObjectVariant {
            shared: Rc::clone(&self.shared),
            index: self.shared.names.len() - 1,
        })
    }

    fn from_int(&self, i: i64) -> Result<ObjectVariant, EnumError> {
        object_at(&self.shared, i)
    }
}

impl fmt::Debug for ObjectEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectEnum")
            .field("names", &self.shared.names)
            .finish()
    }
}

fn object_at(shared: &Rc<ObjectShared>, i: i64) -> Result<ObjectVariant, EnumError> {
    let index = usize::try_from(i)
        .ok()
        .filter(|&index| index < shared.names.len())
        .ok_or(EnumError::UnknownValue { value: i })?;
    Ok(ObjectVariant {
        shared: Rc::clone(shared),
        index,
    })
}

/// A singleton constant of an [`ObjectEnum`].
///
/// Behaves like an [`EnumVariant`](crate::EnumVariant), with `call()`
/// resolving the variant's own methods before the domain's shared
/// table.
#[derive(Clone)]
pub struct ObjectVariant {
    shared: Rc<ObjectShared>,
    index: usize,
}

impl ObjectVariant {
    /// Declared name of this variant.
    pub fn name(&self) -> &str {
        &self.shared.names[self.index]
    }
}

impl Enumerated for ObjectVariant {
    fn to_int(&self) -> i64 {
        self.index as i64
    }

    fn from_int(&self, i: i64) -> Result<Self, EnumError> {
        object_at(&self.shared, i)
    }

    fn call(&self, name: &str) -> Result<String, EnumError> {
        if let Some(method) = self.shared.own[self.index].get(name) {
            return Ok(method(self));
        }
        match self.shared.methods.lookup(name) {
            Some(method) => Ok(method(self)),
            None => Err(EnumError::UnknownMethod { name: name.into() }),
        }
    }
}

impl fmt::Display for ObjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for ObjectVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectVariant")
            .field("name", &self.name())
            .field("value", &self.index)
            .finish()
    }
}

impl PartialEq for ObjectVariant {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared) && self.index == other.index
    }
}

impl Eq for ObjectVariant {}
