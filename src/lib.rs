//! Enumerated-value domains with one shared behavioral contract.
//!
//! `enumkit` builds closed or bounded domains of discrete values -
//! symbolic constants, contiguous integer ranges, and power-of-two
//! flag sets - that all share the same comparison, successor /
//! predecessor, iteration, and extension behavior instead of each
//! call site reinventing it.
//!
//! Four constructors, one contract:
//!
//! - [`EnumType`] - a fixed ordered set of named constants.
//! - [`RangeType`] - a bounded integer interval with on-demand values.
//! - [`FlagSet`] - named flags valued at powers of two, with bitmask
//!   composition and decomposition.
//! - [`ObjectEnum`] - named constants carrying per-variant behavior.
//!
//! # Example
//!
//! ```
//! use enumkit::{Domain, Enumerated, EnumType};
//!
//! let color = EnumType::new(["RED", "GREEN", "BLUE"]);
//!
//! let green = color.variant("GREEN").unwrap();
//! assert_eq!(green.to_int(), 1);
//! assert_eq!(color.from_int(2).unwrap().previous().unwrap().to_string(), "GREEN");
//!
//! for c in color.iterator(None, None).unwrap() {
//!     println!("{c}");
//! }
//! ```
//!
//! Domains are single-threaded values: handles are `Rc`-based and
//! deliberately not `Send`. All operations are synchronous and pure.

#![warn(missing_docs)]

mod domain;
mod enumeration;
mod error;
mod flags;
mod iter;
mod methods;
mod objects;
mod range;

pub use domain::{Domain, Enumerated};
pub use enumeration::{EnumType, EnumVariant};
pub use error::EnumError;
pub use flags::{FlagSet, FlagVariant};
pub use iter::DomainIter;
pub use methods::{method, Method, MethodMap, MethodTable};
pub use objects::{ObjectEnum, ObjectVariant};
pub use range::{RangeType, RangeValue};
