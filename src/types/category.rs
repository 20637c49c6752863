//! Runtime category tokens.
//!
//! A [`Category`] is the runtime identity of a marker type. Factories are
//! parameterized by a marker type (usually an empty struct per wrapping site)
//! and stamp its `Category` into every error they produce; assertions compare
//! categories by [`TypeId`], so two distinct marker types never match, no matter
//! how they are named or what they contain.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{Category, Untyped};
//!
//! struct Storage;
//! struct Network;
//!
//! assert_eq!(Category::of::<Storage>(), Category::of::<Storage>());
//! assert_ne!(Category::of::<Storage>(), Category::of::<Network>());
//! assert!(Category::of::<Untyped>().is_untyped());
//! ```
use core::any::{type_name, TypeId};
use core::fmt::{self, Debug, Display};
use core::hash::{Hash, Hasher};

/// Marker for errors created without an explicit category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Untyped;

/// Identity token of a marker type.
#[derive(Clone, Copy)]
pub struct Category {
    id: TypeId,
    name: &'static str,
}

impl Category {
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self { id: TypeId::of::<T>(), name: type_name::<T>() }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Type name of the marker, for display only.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is<T: ?Sized + 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    #[inline]
    pub fn is_untyped(&self) -> bool {
        self.is::<Untyped>()
    }
}

impl PartialEq for Category {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Category {}

impl Hash for Category {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Category").field(&self.name).finish()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
