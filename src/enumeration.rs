// enumkit/src/enumeration.rs

//! Closed enumerations of named constants.

use std::fmt;
use std::rc::Rc;

use crate::domain::{Domain, Enumerated};
use crate::error::EnumError;
use crate::methods::{MethodMap, MethodTable};

/// A closed enumeration: a fixed ordered set of named constants.
///
/// Each declared name becomes one singleton variant whose integer value
/// is its declaration index, `0..n-1`.
///
/// # Example
///
/// ```
/// use enumkit::{Domain, Enumerated, EnumType};
///
/// let color = EnumType::new(["RED", "GREEN", "BLUE"]);
/// assert_eq!(color.variant("GREEN").unwrap().to_int(), 1);
///
/// let blue = color.from_int(2).unwrap();
/// assert_eq!(blue.previous().unwrap().to_string(), "GREEN");
/// ```
#[derive(Clone)]
pub struct EnumType {
    shared: Rc<EnumShared>,
}

struct EnumShared {
    names: Vec<String>,
    methods: MethodTable<EnumVariant>,
}

impl EnumType {
    /// Builds a closed enumeration from declaration-ordered names.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty or contains a duplicate.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(!names.is_empty(), "enumeration needs at least one name");
        for (i, name) in names.iter().enumerate() {
            assert!(
                !names[..i].contains(name),
                "duplicate variant name '{name}'"
            );
        }
        Self {
            shared: Rc::new(EnumShared {
                names,
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

    /// Declared names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.shared.names.iter().map(String::as_str)
    }

    /// Looks up a variant by its declared name.
    pub fn variant(&self, name: &str) -> Option<EnumVariant> {
        let index = self.shared.names.iter().position(|n| n == name)?;
        Some(EnumVariant {
            shared: Rc::clone(&self.shared),
            index,
        })
    }

    /// Registers shared custom behavior on every variant of this
    /// domain. Write-once: a second call fails with
    /// [`EnumError::AlreadyExtended`]. Returns the domain for chaining.
    pub fn methods(self, map: MethodMap<EnumVariant>) -> Result<Self, EnumError> {
        self.shared.methods.register(map)?;
        Ok(self)
    }
}

impl Domain for EnumType {
    type Value = EnumVariant;

    fn first(&self) -> Result<EnumVariant, EnumError> {
        Ok(EnumVariant {
            shared: Rc::clone(&self.shared),
            index: 0,
        })
    }

    fn last(&self) -> Result<EnumVariant, EnumError> {
        Ok(EnumVariant {
            shared: Rc::clone(&self.shared),
            index: self.shared.names.len() - 1,
        })
    }

    fn from_int(&self, i: i64) -> Result<EnumVariant, EnumError> {
        variant_at(&self.shared, i)
    }
}

impl fmt::Debug for EnumType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumType")
            .field("names", &self.shared.names)
            .finish()
    }
}

fn variant_at(shared: &Rc<EnumShared>, i: i64) -> Result<EnumVariant, EnumError> {
    let index = usize::try_from(i)
        .ok()
        .filter(|&index| index < shared.names.len())
        .ok_or(EnumError::UnknownValue { value: i })?;
    Ok(EnumVariant {
        shared: Rc::clone(shared),
        index,
    })
}

/// A singleton constant of an [`EnumType`].
///
/// Equality is identity: two handles are equal iff they denote the same
/// position of the same domain, so variants of distinct domains never
/// compare equal even at equal positions. Ordering-style comparison
/// across values of one domain goes through the
/// [`Enumerated`] methods.
#[derive(Clone)]
pub struct EnumVariant {
    shared: Rc<EnumShared>,
    index: usize,
}

impl EnumVariant {
    /// Declared name of this variant.
    pub fn name(&self) -> &str {
        &self.shared.names[self.index]
    }
}

impl Enumerated for EnumVariant {
    fn to_int(&self) -> i64 {
        self.index as i64
    }

    fn from_int(&self, i: i64) -> Result<Self, EnumError> {
        variant_at(&self.shared, i)
    }

    fn call(&self, name: &str) -> Result<String, EnumError> {
        let method = self
            .shared
            .methods
            .lookup(name)
            .ok_or_else(|| EnumError::UnknownMethod { name: name.into() })?;
        Ok(method(self))
    }
}

impl fmt::Display for EnumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for EnumVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnumVariant")
            .field("name", &self.name())
            .field("value", &self.index)
            .finish()
    }
}

impl PartialEq for EnumVariant {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared) && self.index == other.index
    }
}

impl Eq for EnumVariant {}
