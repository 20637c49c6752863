//! Allocation types shared by the `std` and `no_std` builds.

#[cfg(feature = "std")]
pub type Arc<T> = std::sync::Arc<T>;
#[cfg(not(feature = "std"))]
pub type Arc<T> = alloc::sync::Arc<T>;

#[cfg(feature = "std")]
pub type Box<T> = std::boxed::Box<T>;
#[cfg(not(feature = "std"))]
pub type Box<T> = alloc::boxed::Box<T>;

#[cfg(feature = "std")]
pub type String = std::string::String;
#[cfg(not(feature = "std"))]
pub type String = alloc::string::String;

#[cfg(feature = "std")]
pub type Cow<'a, B> = std::borrow::Cow<'a, B>;
#[cfg(not(feature = "std"))]
pub type Cow<'a, B> = alloc::borrow::Cow<'a, B>;

#[cfg(feature = "std")]
pub type BTreeMap<K, V> = std::collections::BTreeMap<K, V>;
#[cfg(not(feature = "std"))]
pub type BTreeMap<K, V> = alloc::collections::BTreeMap<K, V>;

/// Pointer shared between a wrapper and its checkers: `Arc` with `std`, `Rc` without.
#[cfg(feature = "std")]
pub(crate) type Handle<T> = std::sync::Arc<T>;
#[cfg(not(feature = "std"))]
pub(crate) type Handle<T> = alloc::rc::Rc<T>;

/// Bound carried by state behind a [`Handle`]: `Send + Sync` with `std`, nothing without.
#[cfg(feature = "std")]
pub(crate) trait MaybeSendSync: Send + Sync {}
#[cfg(feature = "std")]
impl<T: Send + Sync + ?Sized> MaybeSendSync for T {}

#[cfg(not(feature = "std"))]
pub(crate) trait MaybeSendSync {}
#[cfg(not(feature = "std"))]
impl<T: ?Sized> MaybeSendSync for T {}

/// Interior mutability for state behind a [`Handle`].
///
/// A `parking_lot` mutex with `std`; a `RefCell` in `no_std` builds, where the
/// handle is `Rc` and never crosses threads.
pub(crate) struct Lock<T> {
    #[cfg(feature = "std")]
    inner: parking_lot::Mutex<T>,
    #[cfg(not(feature = "std"))]
    inner: core::cell::RefCell<T>,
}

impl<T> Lock<T> {
    pub(crate) fn new(value: T) -> Self {
        #[cfg(feature = "std")]
        let inner = parking_lot::Mutex::new(value);
        #[cfg(not(feature = "std"))]
        let inner = core::cell::RefCell::new(value);
        Self { inner }
    }

    pub(crate) fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        #[cfg(feature = "std")]
        let mut guard = self.inner.lock();
        #[cfg(not(feature = "std"))]
        let mut guard = self.inner.borrow_mut();
        f(&mut guard)
    }
}
