// enumkit/src/range.rs

//! Bounded integer ranges with on-demand value construction.

use std::fmt;
use std::rc::Rc;

use crate::domain::{Domain, Enumerated};
use crate::error::EnumError;
use crate::methods::{MethodMap, MethodTable};

/// A domain over a contiguous integer interval `[minimum, maximum]`.
///
/// Unlike the closed constructors, range values are built fresh on
/// every `from_int` call and compare structurally, never by identity:
///
/// ```
/// use enumkit::{Domain, Enumerated, RangeType};
///
/// let small = RangeType::named(1, 10, "SmallNum");
/// let a = small.from_int(5).unwrap();
/// let b = small.from_int(5).unwrap();
/// assert!(a.is_equal_to(&b));
/// assert_eq!(a.to_string(), "SmallNum(5)");
/// assert!(small.from_int(0).is_err());
/// assert!(small.from_int(11).is_err());
/// ```
///
/// Inverted bounds (`minimum > maximum`) are not rejected; such a
/// domain is empty and every construction fails with
/// [`EnumError::OutOfRange`].
///
/// The type-level surface is deliberately only `first`, `last`,
/// `from_int`, `iterator`, and `methods`; value-level operations live
/// on [`RangeValue`] alone.
#[derive(Clone)]
pub struct RangeType {
    shared: Rc<RangeShared>,
}

struct RangeShared {
    minimum: i64,
    maximum: i64,
    name: Option<String>,
    methods: MethodTable<RangeValue>,
}

impl RangeType {
    /// Builds an anonymous range; values display as bare integers.
    pub fn new(minimum: i64, maximum: i64) -> Self {
        Self::build(minimum, maximum, None)
    }

    /// Builds a named range; values display as `Name(i)`.
    pub fn named(minimum: i64, maximum: i64, name: impl Into<String>) -> Self {
        Self::build(minimum, maximum, Some(name.into()))
    }

    fn build(minimum: i64, maximum: i64, name: Option<String>) -> Self {
        Self {
            shared: Rc::new(RangeShared {
                minimum,
                maximum,
                name,
                methods: MethodTable::new(),
            }),
        }
    }

    /// Smallest allowed value.
    pub fn minimum(&self) -> i64 {
        self.shared.minimum
    }

    /// Largest allowed value.
    pub fn maximum(&self) -> i64 {
        self.shared.maximum
    }

    /// Registers shared custom behavior on every value of this range.
    /// Write-once: a second call fails with
    /// [`EnumError::AlreadyExtended`]. Returns the domain for chaining.
    pub fn methods(self, map: MethodMap<RangeValue>) -> Result<Self, EnumError> {
        self.shared.methods.register(map)?;
        Ok(self)
    }
}

impl Domain for RangeType {
    type Value = RangeValue;

    fn first(&self) -> Result<RangeValue, EnumError> {
        value_at(&self.shared, self.shared.minimum)
    }

    fn last(&self) -> Result<RangeValue, EnumError> {
        value_at(&self.shared, self.shared.maximum)
    }

    fn from_int(&self, i: i64) -> Result<RangeValue, EnumError> {
        value_at(&self.shared, i)
    }
}

impl fmt::Debug for RangeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeType")
            .field("minimum", &self.shared.minimum)
            .field("maximum", &self.shared.maximum)
            .field("name", &self.shared.name)
            .finish()
    }
}

fn value_at(shared: &Rc<RangeShared>, i: i64) -> Result<RangeValue, EnumError> {
    if i >= shared.minimum && i <= shared.maximum {
        Ok(RangeValue {
            shared: Rc::clone(shared),
            value: i,
        })
    } else {
        Err(EnumError::OutOfRange { value: i })
    }
}

/// A freshly constructed value of a [`RangeType`].
///
/// Not a singleton: two `from_int` calls with the same integer return
/// distinct instances. Equality is structural over the integer value.
#[derive(Clone)]
pub struct RangeValue {
    shared: Rc<RangeShared>,
    value: i64,
}

impl Enumerated for RangeValue {
    fn to_int(&self) -> i64 {
        self.value
    }

    fn from_int(&self, i: i64) -> Result<Self, EnumError> {
        value_at(&self.shared, i)
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

impl fmt::Display for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.shared.name {
            Some(name) => write!(f, "{name}({})", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

impl fmt::Debug for RangeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeValue")
            .field("value", &self.value)
            .field("name", &self.shared.name)
            .finish()
    }
}

impl PartialEq for RangeValue {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for RangeValue {}
