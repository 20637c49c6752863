//! Chain traversal.
//!
//! A chain is the sequence of errors reached by following
//! [`source`](core::error::Error::source) from a starting error. [`Chain`]
//! iterates it, [`innermost`] returns its last link (the root cause) and [`is`]
//! tests identity-based membership.
//!
//! Traversal has no cycle guard. Chains assembled from this crate's types cannot
//! loop, since each link owns its immutable cause; a foreign error whose `source`
//! leads back to one of its ancestors makes traversal run forever.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{factory, innermost, is, new};
//!
//! struct Load;
//!
//! let root = new("missing file");
//! let (load, _) = factory::<Load>("loading config");
//! let err = load.wrap(root.clone());
//!
//! assert_eq!(err.chain().count(), 2);
//! assert!(is(&err, &root));
//! assert_eq!(innermost(&err).to_string(), "missing file");
//! ```
use crate::location::Location;
use crate::traits::AsDynError;
use crate::types::error::Shared;
use crate::types::{BaseError, WrappedError};
use core::error::Error as StdError;
use core::iter::FusedIterator;

/// Iterator over the links of a chain, outermost first.
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn StdError + 'static)>,
}

impl<'a> Chain<'a> {
    #[inline]
    pub fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { next: Some(see_through(error)) }
    }
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn StdError + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source().map(see_through);
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterates the chain starting at `error` itself.
#[inline]
pub fn chain<E: AsDynError + ?Sized>(error: &E) -> Chain<'_> {
    Chain::new(error.as_dyn_error())
}

/// Follows causes until an error without one is reached, and returns it.
pub fn innermost<E: AsDynError + ?Sized>(error: &E) -> &(dyn StdError + 'static) {
    let mut current = see_through(error.as_dyn_error());
    while let Some(next) = current.source() {
        current = see_through(next);
    }
    current
}

/// Returns `true` if `target` is, by identity, one of the links of `error`'s chain.
pub fn is<E, T>(error: &E, target: &T) -> bool
where
    E: AsDynError + ?Sized,
    T: AsDynError + ?Sized,
{
    let target = target.as_dyn_error();
    chain(error).any(|link| same(link, target))
}

/// Skips the boxing shim of a handle converted into `Box<dyn Error>`.
#[inline]
fn see_through<'a>(error: &'a (dyn StdError + 'static)) -> &'a (dyn StdError + 'static) {
    match error.downcast_ref::<Shared>() {
        Some(shared) => &*shared.0,
        None => error,
    }
}

/// Address an error value lives at. A value and its first field share it, so
/// this alone is not an identity; see [`same`].
#[inline]
pub(crate) fn addr(error: &(dyn StdError + 'static)) -> usize {
    error as *const dyn StdError as *const () as usize
}

/// Identity of two errors: same address and same concrete type.
#[inline]
#[allow(ambiguous_wide_pointer_comparisons)]
pub(crate) fn same(a: &(dyn StdError + 'static), b: &(dyn StdError + 'static)) -> bool {
    core::ptr::eq(a, b)
}

/// One link of a chain as the detailed rendering sees it.
#[derive(Clone, Copy)]
pub enum Link<'a> {
    /// A link created by this crate, carrying its own message and call site.
    Traced { message: &'a str, location: Location },
    /// A foreign link, known only through its `Display` text.
    Untraceable(&'a (dyn StdError + 'static)),
}

impl<'a> Link<'a> {
    pub fn classify(error: &'a (dyn StdError + 'static)) -> Self {
        if let Some(wrapped) = error.downcast_ref::<WrappedError>() {
            return Link::Traced { message: wrapped.message(), location: wrapped.location() };
        }
        if let Some(leaf) = error.downcast_ref::<BaseError>() {
            return Link::Traced { message: leaf.message(), location: leaf.location() };
        }
        Link::Untraceable(error)
    }

    #[inline]
    pub fn is_traced(&self) -> bool {
        matches!(self, Link::Traced { .. })
    }
}
