//! Typed error wrapping with call-site traces.
//!
//! Errors are created as leaves, wrapped with context at every call boundary,
//! and classified later by the factory that wrapped them or by the root cause
//! they lead back to. Every creation and wrap records its call site, and any
//! chain renders either as a single line or as a multi-line trace.
//!
//! # Examples
//!
//! ## Wrapping and Rendering
//!
//! ```
//! use error_wrap::{factory, new};
//!
//! struct First;
//! struct Second;
//!
//! let (first, _) = factory::<First>("first");
//! let (second, _) = factory::<Second>("second");
//!
//! let err = second.wrap(first.wrap(new("sample")));
//! assert_eq!(format!("{err}"), "second: first: sample");
//!
//! // One block per link: message, function, file:line.
//! let trace = format!("{err:#}");
//! assert_eq!(trace.split("\n\n").count(), 3);
//! ```
//!
//! ## Category Assertion
//!
//! ```
//! use error_wrap::{factory, new};
//!
//! struct Storage;
//! struct Network;
//!
//! let (storage, assert_storage) = factory::<Storage>("failed");
//! let (_, assert_network) = factory::<Network>("failed");
//!
//! let err = storage.wrap(new("disk full"));
//! assert!(assert_storage.assert(&err).is_some());
//! assert!(assert_network.assert(&err).is_none());
//! ```
//!
//! ## Root-Cause Checker
//!
//! ```
//! use error_wrap::{factory, new, with_checker};
//!
//! struct Parse;
//! struct Handle;
//!
//! let (mut parse, _) = factory::<Parse>("parse");
//! let (handle, _) = factory::<Handle>("handle");
//! let parsed = with_checker(&mut parse);
//!
//! let err = handle.wrap(parse.wrap(new("unexpected eof")));
//! assert!(parsed.check(&err));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Chain traversal and identity queries
pub mod chain;
/// Root-cause checkers attached to wrappers
pub mod checker;
/// Category-bound wrap/assert pairs
pub mod factory;
/// Call-site capture
pub mod location;
/// Macros recording the enclosing function
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits for inspection, wrapping and rendering
pub mod traits;
/// Error representations and rendering
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}

pub use chain::{chain, innermost, is, Chain, Link};
pub use checker::{with_checker, with_checker_capacity, Checker};
pub use factory::{factory, factoryf, Assertor, Wrapper};
pub use location::Location;
pub use traits::{AsDynError, ResultExt, TraceFormatter};
pub use types::{
    new, new_typed, new_typedf, newf, render, BaseError, Category, DynError, Error, Render,
    Result, Trace, TraceConfig, Untyped, WrappedError, UNTRACEABLE,
};
