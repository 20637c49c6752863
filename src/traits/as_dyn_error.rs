use crate::types::Error;
use core::error::Error as StdError;

/// Anything that can be inspected as a chain of errors.
///
/// Implemented for the [`Error`] handle, every concrete `'static` error type and
/// the common `dyn Error` trait objects, so inspection functions such as
/// [`innermost`](crate::innermost) or [`Checker::check`](crate::Checker::check)
/// accept whichever of them the caller holds.
///
/// # Examples
///
/// ```
/// use error_wrap::{new, traits::AsDynError};
///
/// let err = new("sample");
/// let io = std::io::Error::other("disk");
///
/// assert_eq!(err.as_dyn_error().to_string(), "sample");
/// assert_eq!(io.as_dyn_error().to_string(), "disk");
/// ```
pub trait AsDynError {
    fn as_dyn_error(&self) -> &(dyn StdError + 'static);
}

impl AsDynError for Error {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self.as_dyn()
    }
}

impl<E: StdError + 'static> AsDynError for E {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}

impl AsDynError for dyn StdError + Send + Sync + 'static {
    #[inline]
    fn as_dyn_error(&self) -> &(dyn StdError + 'static) {
        self
    }
}
