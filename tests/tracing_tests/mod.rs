//! Tests for tracing integration.

use error_wrap::tracing_ext::{emit, TracingResultExt};
use error_wrap::{factory, new, with_checker, Error};

struct Emit;

#[test]
fn emit_accepts_handles_and_foreign_errors() {
    let (wrap_emit, _) = factory::<Emit>("emit");
    emit(&wrap_emit.wrap(new("sample")));
    emit(&std::io::Error::other("refused"));
}

#[test]
fn log_err_passes_results_through() {
    let ok: Result<u8, Error> = Ok(1);
    assert_eq!(ok.log_err().unwrap(), 1);

    let err: Result<u8, Error> = Err(new("sample"));
    assert_eq!(err.log_err().unwrap_err().to_string(), "sample");
}

#[test]
fn checker_recording_is_unaffected_by_tracing() {
    let (mut wrap_emit, _) = factory::<Emit>("emit");
    let checker = with_checker(&mut wrap_emit);
    let err = wrap_emit.wrap(new("sample"));
    assert!(checker.check(&err));
}
