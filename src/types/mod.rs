//! Error representations.
//!
//! - [`Error`]: the shared handle every constructor returns
//! - [`BaseError`]: leaf error, a message and a call site
//! - [`WrappedError`]: a message and a call site around an inner cause
//! - [`Category`]: runtime identity of a factory's marker type
//!
//! # Examples
//!
//! ```
//! use error_wrap::{factory, new, WrappedError};
//!
//! struct Db;
//!
//! let (db, _) = factory::<Db>("query users");
//! let err = db.wrap(new("connection reset"));
//!
//! let outer = err.downcast_ref::<WrappedError>().unwrap();
//! assert_eq!(outer.message(), "query users");
//! assert!(outer.is_category::<Db>());
//! assert_eq!(outer.inner().unwrap().to_string(), "connection reset");
//! ```
pub mod alloc_type;
pub mod base_error;
pub mod category;
pub mod error;
pub mod error_formatter;
pub mod wrapped_error;

pub use base_error::*;
pub use category::*;
pub use error::*;
pub use error_formatter::{render, Render, Trace, TraceConfig, UNTRACEABLE};
pub use wrapped_error::*;

/// Result alias returning the shared [`Error`] handle.
pub type Result<T, E = Error> = core::result::Result<T, E>;
