use error_wrap::traits::AsDynError;
use error_wrap::{factory, innermost, new};

struct Io;

#[test]
fn handles_and_concrete_errors_share_one_view() {
    let err = new("sample");
    assert_eq!(err.as_dyn_error().to_string(), "sample");

    let io = std::io::Error::other("broken pipe");
    assert_eq!(io.as_dyn_error().to_string(), "broken pipe");
}

#[test]
fn trait_objects_are_inspectable() {
    let (wrap_io, assert_io) = factory::<Io>("io");
    let err = wrap_io.wrap(std::io::Error::other("broken pipe"));

    let boxed: Box<dyn std::error::Error + Send + Sync> = err.into();
    assert!(assert_io.matches(&*boxed));
    assert_eq!(innermost(&*boxed).to_string(), "broken pipe");

    let plain: &(dyn std::error::Error + 'static) = &*boxed;
    assert!(assert_io.matches(plain));
}
