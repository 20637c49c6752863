use error_wrap::traits::ResultExt;
use error_wrap::{factory, new, with_checker, Error, Location, WrappedError};

struct Config;

fn read_config(present: bool) -> Result<String, std::io::Error> {
    if present {
        Ok("port = 80".to_string())
    } else {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml"))
    }
}

#[test]
fn ok_passes_through() {
    let (wrap_config, _) = factory::<Config>("loading configuration");
    let value = read_config(true).wrap_with(&wrap_config).unwrap();
    assert_eq!(value, "port = 80");
}

#[test]
fn err_is_wrapped_with_the_callers_location() {
    let (wrap_config, assert_config) = factory::<Config>("loading configuration");

    let expected = line!() + 1;
    let err = read_config(false).wrap_with(&wrap_config).unwrap_err();

    assert_eq!(err.to_string(), "loading configuration: config.toml");
    let matched = assert_config.assert(&err).unwrap();
    assert_eq!(matched.location().line(), expected);
}

#[test]
fn explicit_location_is_kept() {
    let (wrap_config, _) = factory::<Config>("loading configuration");
    let err = Err::<(), Error>(new("sample"))
        .wrap_with_at(&wrap_config, Location::unknown())
        .unwrap_err();

    let wrapped = err.downcast_ref::<WrappedError>().unwrap();
    assert!(!wrapped.location().is_resolved());
    assert!(format!("{err:#}").starts_with("loading configuration\n\t<unknown>\n\t<unknown>:0"));
}

#[test]
fn works_through_a_checked_wrapper() {
    let (mut wrap_config, _) = factory::<Config>("loading configuration");
    let checker = with_checker(&mut wrap_config);

    let err = read_config(false).wrap_with(&wrap_config).unwrap_err();
    assert!(checker.check(&err));
}
