//! Detailed chain rendering.
//!
//! Every link of a chain renders as one block; blocks are separated by a blank
//! line. A link created by this crate prints its own message followed by the
//! function and `file:line` it was created at:
//!
//! ```text
//! second
//! 	my_app::handler
//! 	src/handler.rs:42
//! ```
//!
//! A foreign link prints the [`UNTRACEABLE`] sentinel followed by its own text.
//! Traversal continues through a foreign link only if it exposes a `source`.
//!
//! # Examples
//!
//! ```
//! use error_wrap::{factory, new, TraceConfig, TraceFormatter};
//!
//! struct Query;
//!
//! let (query, _) = factory::<Query>("query failed");
//! let err = query.wrap(new("timeout"));
//!
//! let trace = TraceConfig::compact().render(err.as_dyn());
//! assert!(trace.starts_with("query failed\n"));
//! assert!(trace.contains("\ntimeout\n"));
//! ```
use crate::chain::{Chain, Link};
use crate::location::Location;
use crate::traits::AsDynError;
use crate::types::alloc_type::{Cow, String};
use core::error::Error as StdError;
use core::fmt::{self, Display, Write};

/// Sentinel printed in place of a call site for foreign links.
pub const UNTRACEABLE: &str = "UNTRACEABLE";

/// Trait for customizing detailed chain rendering.
pub trait TraceFormatter {
    fn separator(&self) -> &str {
        "\n\n"
    }

    /// Writes the block for a single link.
    fn write_link(&self, out: &mut dyn Write, link: Link<'_>) -> fmt::Result;

    fn write_trace(&self, out: &mut dyn Write, error: &(dyn StdError + 'static)) -> fmt::Result {
        for (i, link) in Chain::new(error).enumerate() {
            if i > 0 {
                out.write_str(self.separator())?;
            }
            self.write_link(out, Link::classify(link))?;
        }
        Ok(())
    }

    fn render(&self, error: &(dyn StdError + 'static)) -> String {
        let mut out = String::new();
        let _ = self.write_trace(&mut out, error);
        out
    }
}

/// Configuration-based trace formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceConfig {
    pub indent: Cow<'static, str>,
    pub separator: Cow<'static, str>,
    pub untraceable: Cow<'static, str>,
    pub show_column: bool,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            indent: Cow::Borrowed("\t"),
            separator: Cow::Borrowed("\n\n"),
            untraceable: Cow::Borrowed(UNTRACEABLE),
            show_column: false,
        }
    }
}

impl TraceConfig {
    /// Blocks separated by a single newline instead of a blank line.
    #[inline]
    pub fn compact() -> Self {
        Self { separator: Cow::Borrowed("\n"), ..Default::default() }
    }

    #[inline]
    pub fn with_columns() -> Self {
        Self { show_column: true, ..Default::default() }
    }

    fn write_location(&self, out: &mut dyn Write, location: Location) -> fmt::Result {
        write!(out, "{}\n{}", location.function(), self.indent)?;
        if self.show_column {
            write!(out, "{:#}", location)
        } else {
            write!(out, "{}", location)
        }
    }
}

impl TraceFormatter for TraceConfig {
    fn separator(&self) -> &str {
        &self.separator
    }

    fn write_link(&self, out: &mut dyn Write, link: Link<'_>) -> fmt::Result {
        match link {
            Link::Traced { message, location } => {
                write!(out, "{}\n{}", message, self.indent)?;
                self.write_location(out, location)
            },
            Link::Untraceable(error) => {
                write!(out, "{}\n{}{}", self.untraceable, self.indent, error)
            },
        }
    }
}

/// Builder for the detailed rendering of one chain.
///
/// Returned by [`Error::trace`](crate::Error::trace); renders through `Display`.
pub struct Trace<'a> {
    pub(crate) error: &'a (dyn StdError + 'static),
    pub(crate) config: TraceConfig,
}

impl<'a> Trace<'a> {
    pub fn new(error: &'a (dyn StdError + 'static)) -> Self {
        Self { error, config: TraceConfig::default() }
    }

    pub fn indent(mut self, indent: impl Into<Cow<'static, str>>) -> Self {
        self.config.indent = indent.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<Cow<'static, str>>) -> Self {
        self.config.separator = separator.into();
        self
    }

    pub fn untraceable(mut self, sentinel: impl Into<Cow<'static, str>>) -> Self {
        self.config.untraceable = sentinel.into();
        self
    }

    pub fn show_column(mut self, show: bool) -> Self {
        self.config.show_column = show;
        self
    }

    pub fn compact(mut self) -> Self {
        self.config.separator = Cow::Borrowed("\n");
        self
    }

    pub fn config(mut self, config: TraceConfig) -> Self {
        self.config = config;
        self
    }
}

impl Display for Trace<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.config.write_trace(f, self.error)
    }
}

/// Rendering modes of an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Render {
    /// Messages joined down the chain with `": "`.
    #[default]
    Short,
    /// One block per link, see [`Trace`].
    Detailed,
}

/// Renders any error in the requested mode.
///
/// ```
/// use error_wrap::{new, render, Render};
///
/// let err = new("sample");
/// assert_eq!(render(&err, Render::Short), "sample");
/// assert!(render(&err, Render::Detailed).starts_with("sample\n\t"));
/// ```
pub fn render<E: AsDynError + ?Sized>(error: &E, mode: Render) -> String {
    let error = error.as_dyn_error();
    match mode {
        Render::Short => {
            let mut out = String::new();
            let _ = write!(out, "{}", error);
            out
        },
        Render::Detailed => TraceConfig::default().render(error),
    }
}
