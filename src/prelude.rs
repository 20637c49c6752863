//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use error_wrap::prelude::*;
//!
//! struct Load;
//!
//! fn load(path: &str) -> Result<String> {
//!     let (load, _) = factory::<Load>("loading file");
//!     Err(error!("{} is missing", path)).wrap_with(&load)
//! }
//!
//! assert_eq!(load("a.toml").unwrap_err().to_string(), "loading file: a.toml is missing");
//! ```

// Macros
pub use crate::{error, typed_error, wrap};

// Core types
pub use crate::types::{Error, Result};
pub use crate::{Assertor, Checker, Wrapper};

// Constructors
pub use crate::{factory, factoryf, innermost, new, newf, with_checker};

// Traits
pub use crate::traits::{AsDynError, ResultExt};
