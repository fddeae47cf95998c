// enumkit/src/domain.rs

//! The primitive contract and the default behavior built on top of it.
//!
//! [`Domain`] is the type-level half: `first`, `last`, `from_int`, and
//! the derived `iterator`. [`Enumerated`] is the value-level half:
//! integer conversion plus the comparison and successor/predecessor
//! methods every variant shares. Concrete domains supply only the
//! primitives; everything else is provided once here.

use std::fmt;

use crate::error::EnumError;
use crate::iter::DomainIter;

/// Value-level contract shared by every variant kind.
///
/// Required methods are the primitives a variant must supply; provided
/// methods are the default behavior, defined purely in terms of the
/// primitives. Ordering follows integer values, so two values compare
/// equal iff their integers match, regardless of identity.
pub trait Enumerated: fmt::Display + Sized {
    /// Integer value of this variant within its domain.
    fn to_int(&self) -> i64;

    /// Looks up the variant of this value's own domain whose integer
    /// value is `i`.
    fn from_int(&self, i: i64) -> Result<Self, EnumError>;

    /// Invokes a custom method registered on this variant or its
    /// domain. Fails with [`EnumError::UnknownMethod`] when neither
    /// defines `name`.
    fn call(&self, name: &str) -> Result<String, EnumError>;

    /// Successor in the domain. Fails at the upper boundary with the
    /// underlying `from_int` error.
    fn next(&self) -> Result<Self, EnumError> {
        self.from_int(self.to_int() + 1)
    }

    /// Predecessor in the domain. Fails at the lower boundary with the
    /// underlying `from_int` error.
    fn previous(&self) -> Result<Self, EnumError> {
        self.from_int(self.to_int() - 1)
    }

    /// True iff both values hold the same integer.
    fn is_equal_to(&self, other: &Self) -> bool {
        self.to_int() == other.to_int()
    }

    /// True iff `self`'s integer exceeds `other`'s.
    fn is_greater(&self, other: &Self) -> bool {
        self.to_int() > other.to_int()
    }

    /// True iff `self` is equal to or greater than `other`.
    fn is_greater_or_equal_to(&self, other: &Self) -> bool {
        self.is_equal_to(other) || self.is_greater(other)
    }

    /// True iff `self`'s integer is below `other`'s.
    fn is_less(&self, other: &Self) -> bool {
        self.to_int() < other.to_int()
    }

    /// True iff `self` is equal to or less than `other`.
    fn is_less_or_equal_to(&self, other: &Self) -> bool {
        self.is_equal_to(other) || self.is_less(other)
    }
}

/// Type-level contract of an enumerated domain.
///
/// The three primitive operations default to
/// [`EnumError::NotImplemented`] so that a domain missing an override
/// fails loudly instead of silently misbehaving; concrete domains
/// override all three, and the erroring defaults are never an expected
/// runtime path.
pub trait Domain {
    /// The variant type this domain produces.
    type Value: Enumerated;

    /// First variant in declaration order.
    fn first(&self) -> Result<Self::Value, EnumError> {
        Err(EnumError::NotImplemented { operation: "first" })
    }

    /// Last variant in declaration order.
    fn last(&self) -> Result<Self::Value, EnumError> {
        Err(EnumError::NotImplemented { operation: "last" })
    }

    /// The variant whose integer value is `i`.
    fn from_int(&self, _i: i64) -> Result<Self::Value, EnumError> {
        Err(EnumError::NotImplemented {
            operation: "from_int",
        })
    }

    /// Lazy inclusive traversal between two variants.
    ///
    /// Endpoints default to `first()` and `last()`. Direction follows
    /// the endpoints' integers: ascending via `next()` when
    /// `from.to_int() < to.to_int()`, otherwise descending via
    /// `previous()`. The returned iterator is `Clone`, so a traversal
    /// can be restarted from a saved copy.
    fn iterator(
        &self,
        from: Option<&Self::Value>,
        to: Option<&Self::Value>,
    ) -> Result<DomainIter<Self::Value>, EnumError> {
        let start = match from {
            Some(value) => value.to_int(),
            None => self.first()?.to_int(),
        };
        let end = match to {
            Some(value) => value.to_int(),
            None => self.last()?.to_int(),
        };
        Ok(DomainIter::new(self.from_int(start)?, end))
    }
}
