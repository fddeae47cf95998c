// enumkit/src/error.rs

//! Error type for domain operations.

use thiserror::Error;

/// Failure raised by a domain or variant operation.
///
/// Every error is returned synchronously at the offending call; the
/// library never retries or recovers internally, and no operation has
/// partial effects.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnumError {
    /// A primitive contract operation was invoked without a concrete
    /// override. Indicates a construction defect in a `Domain` impl,
    /// not a runtime data error.
    #[error("{operation}() not implemented")]
    NotImplemented {
        /// Name of the missing operation.
        operation: &'static str,
    },

    /// `from_int` on a closed or object enumeration received an integer
    /// with no corresponding variant.
    #[error("integer '{value}' has no variant")]
    UnknownValue {
        /// The integer that missed.
        value: i64,
    },

    /// A bounded-range construction or bitmask decomposition received
    /// an integer outside the domain's valid interval.
    #[error("value '{value}' is out of range")]
    OutOfRange {
        /// The offending integer.
        value: i64,
    },

    /// `from_int` on a flag set received an integer that is not one of
    /// the declared powers of two.
    #[error("integer '{value}' is not a valid flag value")]
    InvalidFlag {
        /// The offending integer.
        value: i64,
    },

    /// A second `methods()` registration was attempted on a domain
    /// whose extension point is already locked.
    #[error("methods are already registered for this domain")]
    AlreadyExtended,

    /// `call()` on a variant named a method that neither the variant
    /// nor its domain defines.
    #[error("no method named '{name}'")]
    UnknownMethod {
        /// The requested method name.
        name: String,
    },
}
