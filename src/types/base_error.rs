//! Leaf errors: a message and a call site, no cause.
use crate::location::Location;
use crate::types::alloc_type::String;
use crate::types::category::{Category, Untyped};
use crate::types::error::Error;
use crate::types::error_formatter::{TraceConfig, TraceFormatter};
use core::fmt::{self, Debug, Display};

/// Originating error with a captured location and no inner cause.
///
/// `{}` yields exactly the message, `{:#}` appends the function and
/// `file:line` the error was created at.
///
/// # Examples
///
/// ```
/// use error_wrap::{new, BaseError};
///
/// let err = new("disk full");
/// let leaf = err.downcast_ref::<BaseError>().unwrap();
/// assert_eq!(leaf.message(), "disk full");
/// assert!(leaf.location().file().ends_with(".rs"));
/// ```
pub struct BaseError {
    message: String,
    location: Location,
    category: Category,
}

impl BaseError {
    #[inline]
    pub fn new(message: impl Into<String>, location: Location, category: Category) -> Self {
        Self { message: message.into(), location, category }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn location(&self) -> Location {
        self.location
    }

    #[inline]
    pub fn category(&self) -> Category {
        self.category
    }

    #[inline]
    pub fn is_category<T: ?Sized + 'static>(&self) -> bool {
        self.category.is::<T>()
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return TraceConfig::default().write_trace(f, self);
        }
        f.write_str(&self.message)
    }
}

impl Debug for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{?(error={})}}", self.message)
    }
}

impl core::error::Error for BaseError {}

/// Creates an untyped leaf error at the caller's location.
#[track_caller]
pub fn new(message: impl Into<String>) -> Error {
    Error::from(BaseError::new(message, Location::capture(), Category::of::<Untyped>()))
}

/// Creates an untyped leaf error from pre-formatted arguments.
///
/// ```
/// let err = error_wrap::newf(format_args!("port {} in use", 8080));
/// assert_eq!(err.to_string(), "port 8080 in use");
/// ```
#[track_caller]
pub fn newf(args: fmt::Arguments<'_>) -> Error {
    let message = alloc::fmt::format(args);
    Error::from(BaseError::new(message, Location::capture(), Category::of::<Untyped>()))
}

/// Creates a leaf error tagged with the category `T`.
#[track_caller]
pub fn new_typed<T: ?Sized + 'static>(message: impl Into<String>) -> Error {
    Error::from(BaseError::new(message, Location::capture(), Category::of::<T>()))
}

#[track_caller]
pub fn new_typedf<T: ?Sized + 'static>(args: fmt::Arguments<'_>) -> Error {
    let message = alloc::fmt::format(args);
    Error::from(BaseError::new(message, Location::capture(), Category::of::<T>()))
}
