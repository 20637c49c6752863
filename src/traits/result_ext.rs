//! Extension trait for wrapping the error side of a `Result`.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{factory, traits::ResultExt, Error};
//!
//! struct Config;
//!
//! let (wrap_config, assert_config) = factory::<Config>("loading configuration");
//!
//! fn load() -> Result<String, std::io::Error> {
//!     Err(std::io::Error::other("no such file"))
//! }
//!
//! let err: Error = load().wrap_with(&wrap_config).unwrap_err();
//! assert_eq!(err.to_string(), "loading configuration: no such file");
//! assert!(assert_config.assert(&err).is_some());
//! ```

use crate::factory::Wrapper;
use crate::location::Location;
use crate::types::Error;

/// Wraps the `Err` side of a `Result` through a [`Wrapper`].
///
/// `Ok` values pass through untouched, the same way wrapping an absent error
/// yields no error.
pub trait ResultExt<T> {
    /// Wraps the error, attributing it to the caller.
    fn wrap_with(self, wrapper: &Wrapper) -> Result<T, Error>;

    /// Wraps the error with an explicitly captured location.
    fn wrap_with_at(self, wrapper: &Wrapper, location: Location) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[inline]
    #[track_caller]
    fn wrap_with(self, wrapper: &Wrapper) -> Result<T, Error> {
        self.wrap_with_at(wrapper, Location::capture())
    }

    #[inline]
    fn wrap_with_at(self, wrapper: &Wrapper, location: Location) -> Result<T, Error> {
        self.map_err(|e| wrapper.wrap_at(e, location))
    }
}
