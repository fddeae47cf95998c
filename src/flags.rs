// enumkit/src/flags.rs

//! Power-of-two flag sets with bitmask composition and decomposition.

use std::fmt;
use std::ops::{BitAnd, BitOr};
use std::rc::Rc;

use crate::domain::{Domain, Enumerated};
use crate::error::EnumError;
use crate::methods::{MethodMap, MethodTable};

/// A domain of named flags whose integer values are distinct powers of
/// two in declaration order: `1, 2, 4, …, 2^(n-1)`.
///
/// Composite bitmasks (sums of flag values) are valid inputs to
/// [`list_from_int`](FlagSet::list_from_int) but are not themselves
/// variants.
///
/// # Example
///
/// ```
/// use enumkit::{Domain, Enumerated, FlagSet};
///
/// let options = FlagSet::new(["A", "B", "C", "D"]);
/// let a = options.flag("A").unwrap();
/// let c = options.flag("C").unwrap();
///
/// assert_eq!(a.to_int(), 1);
/// assert_eq!(&a | &c, 5);
/// assert_eq!(options.from_int(8).unwrap().to_string(), "D");
///
/// let set = options.list_from_int(11).unwrap(); // binary 1011
/// let names: Vec<_> = set.iter().map(|f| f.to_string()).collect();
/// assert_eq!(names, ["A", "B", "D"]);
/// ```
#[derive(Clone)]
pub struct FlagSet {
    shared: Rc<FlagShared>,
}

struct FlagShared {
    names: Vec<String>,
    methods: MethodTable<FlagVariant>,
}

impl FlagSet {
    /// Builds a flag set from declaration-ordered names.
    ///
    /// # Panics
    ///
    /// Panics if `names` is empty, contains a duplicate, or declares
    /// more than 62 flags (the `i64` bitmask limit).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        assert!(!names.is_empty(), "flag set needs at least one name");
        assert!(names.len() <= 62, "flag set exceeds 62 names");
        for (i, name) in names.iter().enumerate() {
            assert!(!names[..i].contains(name), "duplicate flag name '{name}'");
        }
        Self {
            shared: Rc::new(FlagShared {
                names,
                methods: MethodTable::new(),
            }),
        }
    }

    /// Number of declared flags.
    pub fn len(&self) -> usize {
        self.shared.names.len()
    }

    /// Always false; the constructor rejects empty declarations.
    pub fn is_empty(&self) -> bool {
        self.shared.names.is_empty()
    }

    /// Looks up a flag by its declared name.
    pub fn flag(&self, name: &str) -> Option<FlagVariant> {
        let index = self.shared.names.iter().position(|n| n == name)?;
        Some(FlagVariant {
            shared: Rc::clone(&self.shared),
            index,
        })
    }

    /// Bitmask with every declared flag set: `2^n - 1`.
    pub fn mask(&self) -> i64 {
        (1_i64 << self.shared.names.len()) - 1
    }

    /// Decomposes a bitmask into the ascending list of declared flags
    /// whose bit is set in `i`.
    ///
    /// Valid input is `[0, 2^n - 1]`; anything outside fails with
    /// [`EnumError::OutOfRange`]. `list_from_int(0)` is the empty list.
    pub fn list_from_int(&self, i: i64) -> Result<Vec<FlagVariant>, EnumError> {
        if i < 0 || i > self.mask() {
            return Err(EnumError::OutOfRange { value: i });
        }
        Ok(self
            .iterator(None, None)?
            .filter(|flag| (i & flag.to_int()) != 0)
            .collect())
    }

    /// Registers shared custom behavior on every flag of this domain.
    /// Write-once: a second call fails with
    /// [`EnumError::AlreadyExtended`]. Returns the domain for chaining.
    pub fn methods(self, map: MethodMap<FlagVariant>) -> Result<Self, EnumError> {
        self.shared.methods.register(map)?;
        Ok(self)
    }
}

impl Domain for FlagSet {
    type Value = FlagVariant;

    fn first(&self) -> Result<FlagVariant, EnumError> {
        Ok(FlagVariant {
            shared: Rc::clone(&self.shared),
            index: 0,
        })
    }

    fn last(&self) -> Result<FlagVariant, EnumError> {
        Ok(FlagVariant {
            shared: Rc::clone(&self.shared),
            index: self.shared.names.len() - 1,
        })
    }

    fn from_int(&self, i: i64) -> Result<FlagVariant, EnumError> {
        flag_at(&self.shared, i)
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagSet")
            .field("names", &self.shared.names)
            .finish()
    }
}

// Valid flag values are exactly one set bit within the declared width.
fn flag_at(shared: &Rc<FlagShared>, i: i64) -> Result<FlagVariant, EnumError> {
    if i > 0 && (i & (i - 1)) == 0 {
        let index = i.trailing_zeros() as usize;
        if index < shared.names.len() {
            return Ok(FlagVariant {
                shared: Rc::clone(shared),
                index,
            });
        }
    }
    Err(EnumError::InvalidFlag { value: i })
}

/// A singleton flag of a [`FlagSet`].
///
/// Converts to its integer value for bitmask construction, so flags
/// compose with `|` and test with `&` like plain integers. Equality is
/// identity, as for [`EnumVariant`](crate::EnumVariant).
#[derive(Clone)]
pub struct FlagVariant {
    shared: Rc<FlagShared>,
    index: usize,
}

impl FlagVariant {
    /// Declared name of this flag.
    pub fn name(&self) -> &str {
        &self.shared.names[self.index]
    }
}

impl Enumerated for FlagVariant {
    fn to_int(&self) -> i64 {
        1_i64 << self.index
    }

    fn from_int(&self, i: i64) -> Result<Self, EnumError> {
        flag_at(&self.shared, i)
    }

    fn call(&self, name: &str) -> Result<String, EnumError> {
        let method = self
            .shared
            .methods
            .lookup(name)
            .ok_or_else(|| EnumError::UnknownMethod { name: name.into() })?;
        Ok(method(self))
    }

    /// The flag with double this value, not the declaration successor.
    fn next(&self) -> Result<Self, EnumError> {
        self.from_int(self.to_int() * 2)
    }

    /// The flag with half this value; fails at the first flag since
    /// its halved value is no flag at all.
    fn previous(&self) -> Result<Self, EnumError> {
        self.from_int(self.to_int() / 2)
    }
}

impl fmt::Display for FlagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Debug for FlagVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlagVariant")
            .field("name", &self.name())
            .field("value", &self.to_int())
            .finish()
    }
}

impl PartialEq for FlagVariant {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.shared, &other.shared) && self.index == other.index
    }
}

impl Eq for FlagVariant {}

impl From<&FlagVariant> for i64 {
    fn from(flag: &FlagVariant) -> i64 {
        flag.to_int()
    }
}

impl From<FlagVariant> for i64 {
    fn from(flag: FlagVariant) -> i64 {
        flag.to_int()
    }
}

macro_rules! impl_flag_bits {
    ($($trait:ident, $method:ident, $op:tt;)*) => {
        $(
            impl $trait for &FlagVariant {
                type Output = i64;

                fn $method(self, rhs: &FlagVariant) -> i64 {
                    self.to_int() $op rhs.to_int()
                }
            }

            impl $trait<i64> for &FlagVariant {
                type Output = i64;

                fn $method(self, rhs: i64) -> i64 {
                    self.to_int() $op rhs
                }
            }

            impl $trait<&FlagVariant> for i64 {
                type Output = i64;

                fn $method(self, rhs: &FlagVariant) -> i64 {
                    self $op rhs.to_int()
                }
            }
        )*
    };
}

impl_flag_bits! {
    BitOr, bitor, |;
    BitAnd, bitand, &;
}
