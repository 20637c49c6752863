//! Traits shared by the inspection and wrapping surface.
//!
//! - [`AsDynError`]: uniform access to an error as a chain root
//! - [`ResultExt`]: wrapping the error side of a `Result`
//! - [`TraceFormatter`]: customizing the detailed rendering
//!
//! # Examples
//!
//! ```
//! use error_wrap::traits::{AsDynError, ResultExt};
//! use error_wrap::{factory, innermost};
//!
//! struct Parse;
//!
//! let (parse, _) = factory::<Parse>("parsing header");
//! let result: Result<u8, _> = "x".parse::<u8>();
//! let err = result.wrap_with(&parse).unwrap_err();
//!
//! assert!(innermost(&err).to_string().contains("invalid digit"));
//! assert_eq!(err.as_dyn_error().to_string(), err.to_string());
//! ```

pub mod as_dyn_error;
pub mod result_ext;

pub use crate::types::error_formatter::TraceFormatter;
pub use as_dyn_error::AsDynError;
pub use result_ext::ResultExt;
