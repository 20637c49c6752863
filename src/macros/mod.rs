//! Macros recording the enclosing function next to the call site.
//!
//! `#[track_caller]` gives file, line and column but not the function a call
//! sits in. These macros expand at the call site, so they can name it:
//!
//! - [`macro@crate::error`] - formatted, untyped leaf error
//! - [`macro@crate::typed_error`] - formatted leaf error of a given category
//! - [`macro@crate::wrap`] - wraps through a [`Wrapper`](crate::Wrapper)
//!
//! # Examples
//!
//! ```
//! use error_wrap::{error, factory, wrap, BaseError, WrappedError};
//!
//! struct Connect;
//!
//! fn connect(port: u16) -> error_wrap::Error {
//!     let (connect, _) = factory::<Connect>("connecting");
//!     wrap!(connect, error!("port {} refused", port))
//! }
//!
//! let err = connect(5432);
//! assert_eq!(err.to_string(), "connecting: port 5432 refused");
//!
//! let outer = err.downcast_ref::<WrappedError>().unwrap();
//! assert!(outer.location().function().ends_with("connect"));
//! let leaf = outer.inner().unwrap().downcast_ref::<BaseError>().unwrap();
//! assert!(leaf.location().function().ends_with("connect"));
//! ```

/// Expands to the path of the enclosing function.
#[macro_export]
#[doc(hidden)]
macro_rules! __function {
    () => {{
        fn f() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        let name = type_name_of(f);
        &name[..name.len() - 3]
    }};
}

/// Creates an untyped leaf error from a format string, recording the enclosing function.
///
/// ```
/// use error_wrap::error;
///
/// let err = error!("user {} not found", 42);
/// assert_eq!(err.to_string(), "user 42 not found");
/// ```
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::Error::from($crate::BaseError::new(
            $crate::__private::format!($($arg)*),
            $crate::Location::capture_in($crate::__function!()),
            $crate::Category::of::<$crate::Untyped>(),
        ))
    };
}

/// Creates a leaf error of category `$category` from a format string.
///
/// ```
/// use error_wrap::{typed_error, BaseError};
///
/// struct Quota;
///
/// let err = typed_error!(Quota, "limit {} exceeded", 10);
/// assert!(err.downcast_ref::<BaseError>().unwrap().is_category::<Quota>());
/// ```
#[macro_export]
macro_rules! typed_error {
    ($category:ty, $($arg:tt)*) => {
        $crate::Error::from($crate::BaseError::new(
            $crate::__private::format!($($arg)*),
            $crate::Location::capture_in($crate::__function!()),
            $crate::Category::of::<$category>(),
        ))
    };
}

/// Wraps `$error` through `$wrapper`, recording the enclosing function.
#[macro_export]
macro_rules! wrap {
    ($wrapper:expr, $error:expr $(,)?) => {
        $wrapper.wrap_at($error, $crate::Location::capture_in($crate::__function!()))
    };
}
