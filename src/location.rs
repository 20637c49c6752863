//! Call-site capture.
//!
//! A [`Location`] identifies the source position that created or wrapped an
//! error. It is captured with `#[track_caller]`, so every public entry point of
//! this crate that records a location is itself `#[track_caller]` and the
//! recorded frame is always the user's call site, never an internal helper.
//!
//! The file, line and column are always known for a captured location. The
//! enclosing function path comes from one of two places:
//!
//! - the crate macros ([`error!`](crate::error), [`wrap!`](crate::wrap)), which
//!   record it with [`Location::capture_in`];
//! - with the `std` feature, the stack: the first capture at each call site
//!   symbolizes a backtrace and caches the name found for that site.
//!
//! Without either, or without debug info to symbolize, it renders as
//! [`Location::PLACEHOLDER`].
//!
//! # Examples
//!
//! ```
//! use error_wrap::Location;
//!
//! let here = Location::capture();
//! assert!(here.file().ends_with(".rs"));
//! assert!(here.line() > 0);
//! assert_eq!(Location::unknown().function(), Location::PLACEHOLDER);
//! ```
use core::fmt::{self, Display};
use core::panic;

/// Source position of an error's creation or wrap.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    caller: Option<&'static panic::Location<'static>>,
    function: Option<&'static str>,
}

impl Location {
    /// Rendered in place of any value that could not be resolved.
    pub const PLACEHOLDER: &'static str = "<unknown>";

    /// Captures the location of the caller.
    #[track_caller]
    #[inline]
    pub fn capture() -> Self {
        let caller = panic::Location::caller();
        Self { caller: Some(caller), function: enclosing_function(caller) }
    }

    /// Captures the location of the caller and records the function it sits in.
    #[track_caller]
    #[inline]
    pub fn capture_in(function: &'static str) -> Self {
        Self { caller: Some(panic::Location::caller()), function: Some(function) }
    }

    /// A location that resolves to placeholders only.
    #[inline]
    pub const fn unknown() -> Self {
        Self { caller: None, function: None }
    }

    /// Returns `true` if the location points at a real source position.
    #[inline]
    pub fn is_resolved(&self) -> bool {
        self.caller.is_some()
    }

    #[inline]
    pub fn file(&self) -> &'static str {
        self.caller.map_or(Self::PLACEHOLDER, |c| c.file())
    }

    /// Returns the line, or `0` for an unresolved location.
    #[inline]
    pub fn line(&self) -> u32 {
        self.caller.map_or(0, |c| c.line())
    }

    /// Returns the column, or `0` for an unresolved location.
    #[inline]
    pub fn column(&self) -> u32 {
        self.caller.map_or(0, |c| c.column())
    }

    /// Returns the enclosing function path, or [`Location::PLACEHOLDER`].
    #[inline]
    pub fn function(&self) -> &'static str {
        self.function.unwrap_or(Self::PLACEHOLDER)
    }
}

#[cfg(feature = "std")]
#[inline]
fn enclosing_function(caller: &'static panic::Location<'static>) -> Option<&'static str> {
    resolve::function_at(caller)
}

#[cfg(not(feature = "std"))]
#[inline]
fn enclosing_function(_: &'static panic::Location<'static>) -> Option<&'static str> {
    None
}

/// Function names resolved from symbolized backtraces, cached per call site.
#[cfg(feature = "std")]
mod resolve {
    use crate::types::alloc_type::{BTreeMap, Box, String};
    use core::panic;
    use parking_lot::Mutex;
    use std::backtrace::Backtrace;

    type Site = (&'static str, u32, u32);

    static RESOLVED: Mutex<BTreeMap<Site, Option<&'static str>>> =
        parking_lot::const_mutex(BTreeMap::new());

    pub(super) fn function_at(caller: &'static panic::Location<'static>) -> Option<&'static str> {
        let site = (caller.file(), caller.line(), caller.column());
        if let Some(known) = RESOLVED.lock().get(&site) {
            return *known;
        }
        let found = symbolize(caller);
        *RESOLVED
            .lock()
            .entry(site)
            .or_insert_with(|| found.map(|name| &*Box::leak(name.into_boxed_str())))
    }

    #[cold]
    fn symbolize(caller: &panic::Location<'_>) -> Option<String> {
        let trace = Backtrace::force_capture().to_string();
        function_in(&trace, caller.file(), caller.line())
    }

    /// Finds the symbol whose frame points at `file:line` in a rendered backtrace.
    ///
    /// Frames render as a symbol line (`  12: path::to::function`, or the bare
    /// name for inlined symbols) followed by `at path/to/file.rs:line:column`.
    pub(super) fn function_in(trace: &str, file: &str, line: u32) -> Option<String> {
        let mut symbol = None;
        for entry in trace.lines().map(str::trim_start) {
            match entry.strip_prefix("at ") {
                Some(position) if points_at(position, file, line) => {
                    return symbol.map(|name: &str| String::from(strip_hash(name)));
                },
                Some(_) => {},
                None => symbol = Some(symbol_name(entry)),
            }
        }
        None
    }

    fn symbol_name(entry: &str) -> &str {
        match entry.split_once(": ") {
            Some((index, name)) if index.bytes().all(|b| b.is_ascii_digit()) => name,
            _ => entry,
        }
    }

    fn points_at(position: &str, file: &str, line: u32) -> bool {
        let mut parts = position.rsplitn(3, ':');
        let (Some(_column), Some(at_line), Some(path)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };
        at_line.parse::<u32>().ok() == Some(line) && path.ends_with(file)
    }

    /// Drops a trailing `::h0123456789abcdef` symbol hash.
    fn strip_hash(name: &str) -> &str {
        match name.rsplit_once("::h") {
            Some((path, hash)) if hash.len() == 16 && hash.bytes().all(|b| b.is_ascii_hexdigit()) => {
                path
            },
            _ => name,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::unknown()
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file(), self.line())?;
        if f.alternate() {
            write!(f, ":{}", self.column())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Location")
            .field("function", &self.function())
            .field("file", &self.file())
            .field("line", &self.line())
            .field("column", &self.column())
            .finish()
    }
}
