pub mod chain;
pub mod traits;
pub mod types;

#[cfg(feature = "tracing")]
mod tracing_tests;
