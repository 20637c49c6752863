//! Wrapping errors: context added around an inner cause at one call boundary.
use crate::location::Location;
use crate::types::alloc_type::String;
use crate::types::category::Category;
use crate::types::error::Error;
use crate::types::error_formatter::{TraceConfig, TraceFormatter};
use core::fmt::{self, Debug, Display};

/// Error adding a message and a call site around an optional cause.
///
/// Produced by a [`Wrapper`](crate::Wrapper) and tagged with the category of the
/// factory that built it. The cause may be any error, including one that was not
/// created by this crate.
///
/// `{}` yields `message` followed by `": "` and the cause's short text, so a
/// chain reads outermost first. `{:#}` renders the detailed trace.
pub struct WrappedError {
    message: String,
    inner: Option<Error>,
    location: Location,
    category: Category,
}

impl WrappedError {
    #[inline]
    pub fn new(
        message: impl Into<String>,
        inner: Option<Error>,
        location: Location,
        category: Category,
    ) -> Self {
        Self { message: message.into(), inner, location, category }
    }

    /// Returns the message of this link only.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[inline]
    pub fn inner(&self) -> Option<&Error> {
        self.inner.as_ref()
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

impl Display for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return TraceConfig::default().write_trace(f, self);
        }
        match &self.inner {
            Some(inner) => write!(f, "{}: {}", self.message, inner),
            None => f.write_str(&self.message),
        }
    }
}

impl Debug for WrappedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{?(error={})}}", self)
    }
}

impl core::error::Error for WrappedError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        self.inner.as_ref().map(Error::as_dyn)
    }
}
