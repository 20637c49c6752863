//! Root-cause checkers.
//!
//! A [`Checker`] decorates a [`Wrapper`]: every error wrapped through the
//! decorated wrapper has its root cause recorded, by identity, in the checker's
//! set. [`Checker::check`] then answers whether any recorded root is part of a
//! given chain, i.e. whether that chain was ever wrapped through this wrapper,
//! directly or beneath later wrapping layers.
//!
//! The set only grows. Each distinct root cause wrapped through the decorated
//! wrapper stays alive, and recorded, for as long as the checker does.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{factory, new, with_checker};
//!
//! struct Read;
//! struct Serve;
//!
//! let (mut read, _) = factory::<Read>("read");
//! let (serve, _) = factory::<Serve>("serve");
//! let read_checker = with_checker(&mut read);
//!
//! let err = serve.wrap(read.wrap(new("eof")));
//! assert!(read_checker.check(&err));
//! assert!(!read_checker.check(&new("eof")));
//! ```
use crate::chain::{addr, chain, innermost, same};
use crate::factory::Wrapper;
use crate::traits::AsDynError;
use crate::types::alloc_type::{BTreeMap, Handle, Lock};
use crate::types::Error;
use core::error::Error as StdError;
use core::fmt;
use smallvec::SmallVec;

/// Identity set of root causes.
///
/// Keyed by address; the few roots sharing one address (a value and its first
/// field) are told apart by type. Each entry keeps the chain it was recorded
/// from alive, so a recorded address is never reused.
#[derive(Default)]
pub(crate) struct RootSet {
    roots: BTreeMap<usize, SmallVec<[Error; 1]>>,
    len: usize,
}

impl RootSet {
    /// Records the root cause of `error`. Returns `false` if it was already known.
    pub(crate) fn record(&mut self, error: &Error) -> bool {
        let root = innermost(error);
        let anchors = self.roots.entry(addr(root)).or_default();
        if anchors.iter().any(|anchor| same(innermost(anchor), root)) {
            return false;
        }
        anchors.push(error.clone());
        self.len += 1;
        true
    }

    pub(crate) fn contains(&self, link: &(dyn StdError + 'static)) -> bool {
        self.roots
            .get(&addr(link))
            .is_some_and(|anchors| anchors.iter().any(|anchor| same(innermost(anchor), link)))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }
}

/// Predicate over the root causes wrapped through a decorated [`Wrapper`].
///
/// The checker and its wrapper share the set. With the `std` feature the set sits
/// behind a mutex and both are `Send + Sync`; in `no_std` builds they share it
/// through `Rc` and stay on one thread.
#[derive(Clone)]
pub struct Checker {
    roots: Handle<Lock<RootSet>>,
}

impl Checker {
    /// Returns `true` if any recorded root cause is, by identity, a link of `error`'s chain.
    pub fn check<E: AsDynError + ?Sized>(&self, error: &E) -> bool {
        self.roots.with(|roots| chain(error).any(|link| roots.contains(link)))
    }

    /// Number of distinct root causes recorded so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.roots.with(|roots| roots.len())
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Checker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Checker").field("roots", &self.len()).finish()
    }
}

/// Decorates `wrapper` in place and returns the checker observing it.
#[inline]
pub fn with_checker(wrapper: &mut Wrapper) -> Checker {
    with_checker_capacity(wrapper, 0)
}

/// Same as [`with_checker`], taking the expected number of root causes.
///
/// The set is an ordered map that allocates per entry, so the hint does not
/// preallocate anything.
pub fn with_checker_capacity(wrapper: &mut Wrapper, _capacity: usize) -> Checker {
    let roots = Handle::new(Lock::new(RootSet::default()));
    let recorder = Handle::clone(&roots);
    let previous = Handle::clone(&wrapper.wrap);

    *wrapper = Wrapper::from_fn(move |inner, location| {
        let wrapped = previous(inner.clone(), location);
        if let Some(inner) = &inner {
            recorder.with(|roots| {
                if roots.record(inner) {
                    #[cfg(feature = "tracing")]
                    tracing::trace!(
                        root = %innermost(inner),
                        recorded = roots.len(),
                        "recorded root cause"
                    );
                }
            });
        }
        wrapped
    });

    Checker { roots }
}

impl Wrapper {
    /// Consumes the wrapper and returns its decorated version with the checker observing it.
    ///
    /// ```
    /// use error_wrap::{factory, new};
    ///
    /// struct Fetch;
    ///
    /// let (fetch, _) = factory::<Fetch>("fetch");
    /// let (fetch, fetched) = fetch.checked();
    ///
    /// let root = new("refused");
    /// let _ = fetch.wrap(root.clone());
    /// assert!(fetched.check(&root));
    /// ```
    pub fn checked(mut self) -> (Wrapper, Checker) {
        let checker = with_checker(&mut self);
        (self, checker)
    }
}
