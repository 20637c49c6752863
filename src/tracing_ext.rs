//! Tracing integration for error-wrap.
//!
//! Emits error chains as `tracing` events, with the short text and the detailed
//! trace as separate fields.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! error-wrap = { version = "0.1", features = ["tracing"] }
//! ```

use crate::traits::AsDynError;
use crate::types::Trace;

/// Emits `error` as an `ERROR` level event.
///
/// # Example
///
/// ```rust,ignore
/// use error_wrap::tracing_ext::emit;
///
/// if let Err(err) = serve() {
///     emit(&err);
/// }
/// ```
pub fn emit<E: AsDynError + ?Sized>(error: &E) {
    let error = error.as_dyn_error();
    tracing::error!(error = %error, trace = %Trace::new(error), "error chain");
}

/// Extension trait logging the error side of a `Result` without consuming it.
pub trait TracingResultExt {
    /// Emits the error, if any, and returns `self` unchanged.
    fn log_err(self) -> Self;
}

impl<T, E> TracingResultExt for Result<T, E>
where
    E: AsDynError,
{
    fn log_err(self) -> Self {
        if let Err(error) = &self {
            emit(error);
        }
        self
    }
}
