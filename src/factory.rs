//! Category-bound wrap/assert pairs.
//!
//! [`factory`] binds a marker type `T` and a message into a [`Wrapper`], which
//! turns any error into a [`WrappedError`] of category `T`, and an
//! [`Assertor<T>`], which finds such an error anywhere in a chain.
//!
//! Marker types are usually empty structs, one per wrapping site:
//!
//! ```
//! use error_wrap::{factory, new};
//!
//! struct First;
//! struct Second;
//!
//! let (first, assert_first) = factory::<First>("first");
//! let (second, assert_second) = factory::<Second>("second");
//!
//! let err = second.wrap(first.wrap(new("sample")));
//! assert_eq!(err.to_string(), "second: first: sample");
//!
//! let matched = assert_first.assert(&err).unwrap();
//! assert_eq!(matched.to_string(), "first: sample");
//! assert!(assert_second.assert(matched).is_none());
//! ```
use crate::chain::chain;
use crate::location::Location;
use crate::traits::AsDynError;
use crate::types::alloc_type::{Handle, MaybeSendSync, String};
use crate::types::{Category, Error, WrappedError};
use core::fmt;
use core::marker::PhantomData;

/// Builds the [`WrappedError`] for one wrap call.
#[cfg(feature = "std")]
pub(crate) type WrapFn = dyn Fn(Option<Error>, Location) -> WrappedError + Send + Sync;
#[cfg(not(feature = "std"))]
pub(crate) type WrapFn = dyn Fn(Option<Error>, Location) -> WrappedError;

/// Wrap half of a factory pair.
///
/// Every wrap entry point is `#[track_caller]`: the location recorded in the
/// produced error is the line that called it. Clones share the same wrapping
/// behavior; attaching a [`Checker`](crate::Checker) decorates only the handle
/// it was attached to.
///
/// With the `std` feature a wrapper is `Send + Sync` and can live in a `static`
/// or behind a lock. In `no_std` builds it stays on the thread that made it.
#[derive(Clone)]
pub struct Wrapper {
    pub(crate) wrap: Handle<WrapFn>,
}

impl Wrapper {
    pub(crate) fn from_fn<F>(wrap: F) -> Self
    where
        F: Fn(Option<Error>, Location) -> WrappedError + MaybeSendSync + 'static,
    {
        Self { wrap: Handle::new(wrap) }
    }

    /// Wraps `error`, recording the caller's location.
    #[track_caller]
    #[inline]
    pub fn wrap(&self, error: impl Into<Error>) -> Error {
        self.wrap_at(error, Location::capture())
    }

    /// Wraps `error` with an explicitly captured location.
    pub fn wrap_at(&self, error: impl Into<Error>, location: Location) -> Error {
        Error::from((self.wrap)(Some(error.into()), location))
    }

    /// Wraps a possibly absent error. Wrapping no error yields no error.
    ///
    /// ```
    /// use error_wrap::{factory, Error};
    ///
    /// struct Step;
    ///
    /// let (step, _) = factory::<Step>("step");
    /// assert!(step.wrap_opt(None::<Error>).is_none());
    /// ```
    #[track_caller]
    pub fn wrap_opt<E: Into<Error>>(&self, error: Option<E>) -> Option<Error> {
        let location = Location::capture();
        error.map(|e| self.wrap_at(e, location))
    }

    /// Wraps the error side of a `Result`; `Ok` passes through.
    #[track_caller]
    pub fn wrap_result<T, E: Into<Error>>(&self, result: Result<T, E>) -> Result<T, Error> {
        let location = Location::capture();
        result.map_err(|e| self.wrap_at(e, location))
    }

    /// Originates an error of this factory's category with no inner cause.
    #[track_caller]
    pub fn raise(&self) -> Error {
        Error::from((self.wrap)(None, Location::capture()))
    }
}

impl fmt::Debug for Wrapper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wrapper").finish_non_exhaustive()
    }
}

/// Assert half of a factory pair.
///
/// Matches a [`WrappedError`] whose category is exactly `T`. Errors produced by
/// any other factory never match, even with an identical message.
pub struct Assertor<T: ?Sized> {
    _category: PhantomData<fn() -> T>,
}

impl<T: ?Sized + 'static> Assertor<T> {
    #[inline]
    pub const fn new() -> Self {
        Self { _category: PhantomData }
    }

    #[inline]
    pub fn category(&self) -> Category {
        Category::of::<T>()
    }

    /// Returns the outermost link of `error`'s chain produced with category `T`.
    pub fn assert<'a, E>(&self, error: &'a E) -> Option<&'a WrappedError>
    where
        E: AsDynError + ?Sized,
    {
        let category = self.category();
        chain(error)
            .filter_map(|link| link.downcast_ref::<WrappedError>())
            .find(|wrapped| wrapped.category() == category)
    }

    #[inline]
    pub fn matches<E: AsDynError + ?Sized>(&self, error: &E) -> bool {
        self.assert(error).is_some()
    }
}

impl<T: ?Sized + 'static> Default for Assertor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> Clone for Assertor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Assertor<T> {}

impl<T: ?Sized + 'static> fmt::Debug for Assertor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Assertor").field(&self.category()).finish()
    }
}

/// Creates the wrap/assert pair for category `T` and `message`.
pub fn factory<T: ?Sized + 'static>(message: impl Into<String>) -> (Wrapper, Assertor<T>) {
    let message: Handle<str> = Handle::from(message.into());
    let category = Category::of::<T>();
    let wrapper = Wrapper::from_fn(move |inner, location| {
        WrappedError::new(&*message, inner, location, category)
    });
    (wrapper, Assertor::new())
}

/// Same as [`factory`], with the message interpolated once, at construction.
///
/// ```
/// use error_wrap::{factoryf, new};
///
/// struct Shard;
///
/// let (shard, _) = factoryf::<Shard>(format_args!("shard {}", 7));
/// assert_eq!(shard.wrap(new("offline")).to_string(), "shard 7: offline");
/// ```
pub fn factoryf<T: ?Sized + 'static>(args: fmt::Arguments<'_>) -> (Wrapper, Assertor<T>) {
    factory::<T>(alloc::fmt::format(args))
}
