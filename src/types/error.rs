//! The shared error handle.
//!
//! [`Error`] is what every constructor and wrapper of this crate returns. It is
//! a cheaply clonable, `Send + Sync` handle around any error value: a leaf
//! ([`BaseError`](crate::BaseError)), a wrapping error
//! ([`WrappedError`](crate::WrappedError)) or a foreign error converted with
//! `From`.
//!
//! Clones of a handle share the same error value, and the address of that value
//! is its identity: [`Checker`](crate::Checker) and [`is`](crate::is) compare
//! chain links by identity, never by message.
use crate::chain::{self, same, Chain};
use crate::types::alloc_type::{Arc, Box};
use crate::types::error_formatter::{Trace, TraceFormatter};
use core::error::Error as StdError;
use core::fmt::{self, Debug, Display};
use core::ops::Deref;

/// Thread-safe trait object every [`Error`] handle points at.
pub type DynError = dyn StdError + Send + Sync + 'static;

/// Shared handle to an error value.
///
/// `{}` renders the short form (messages joined down the chain) and `{:#}` the
/// detailed multi-line trace.
///
/// # Examples
///
/// ```
/// use error_wrap::{new, Error};
///
/// let leaf = new("sample");
/// let copy: Error = leaf.clone();
/// assert!(leaf.ptr_eq(&copy));
/// assert_eq!(leaf.to_string(), "sample");
/// ```
#[derive(Clone)]
pub struct Error {
    inner: Arc<DynError>,
}

impl Error {
    /// Adopts an already shared error without re-allocating it, keeping its identity.
    #[inline]
    pub fn from_arc(inner: Arc<DynError>) -> Self {
        Self { inner }
    }

    /// Returns the error value as a plain trait object.
    #[inline]
    pub fn as_dyn(&self) -> &(dyn StdError + 'static) {
        &*self.inner
    }

    #[inline]
    pub fn downcast_ref<E: StdError + 'static>(&self) -> Option<&E> {
        self.as_dyn().downcast_ref::<E>()
    }

    #[inline]
    pub fn is<E: StdError + 'static>(&self) -> bool {
        self.as_dyn().is::<E>()
    }

    /// Returns `true` if both handles point at the same error value.
    #[inline]
    pub fn ptr_eq(&self, other: &Error) -> bool {
        same(self.as_dyn(), other.as_dyn())
    }

    /// Iterates the chain, starting with this error.
    #[inline]
    pub fn chain(&self) -> Chain<'_> {
        chain::chain(self.as_dyn())
    }

    /// Returns the root cause of the chain.
    #[inline]
    pub fn innermost(&self) -> &(dyn StdError + 'static) {
        chain::innermost(self.as_dyn())
    }

    /// Returns a builder for the detailed rendering of this chain.
    #[must_use]
    #[inline]
    pub fn trace(&self) -> Trace<'_> {
        Trace::new(self.as_dyn())
    }

    /// Renders the detailed trace with a custom formatter.
    #[must_use]
    pub fn trace_with<F: TraceFormatter>(&self, formatter: F) -> crate::types::alloc_type::String {
        formatter.render(self.as_dyn())
    }

    #[inline]
    pub fn into_inner(self) -> Arc<DynError> {
        self.inner
    }
}

impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    #[inline]
    fn from(error: E) -> Self {
        let inner: Arc<DynError> = Arc::new(error);
        Self { inner }
    }
}

impl From<Error> for Box<DynError> {
    #[inline]
    fn from(error: Error) -> Self {
        Box::new(Shared(error.inner))
    }
}

/// Boxed form of a handle. Chain traversal looks through it to the shared value.
pub(crate) struct Shared(pub(crate) Arc<DynError>);

impl Display for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&Trace::new(&*self.0), f);
        }
        Display::fmt(&*self.0, f)
    }
}

impl Debug for Shared {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl StdError for Shared {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&*self.0)
    }
}

impl Deref for Error {
    type Target = DynError;

    #[inline]
    fn deref(&self) -> &DynError {
        &*self.inner
    }
}

impl AsRef<DynError> for Error {
    #[inline]
    fn as_ref(&self) -> &DynError {
        &*self.inner
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            return Display::fmt(&self.trace(), f);
        }
        Display::fmt(&*self.inner, f)
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.inner, f)
    }
}
