use error_wrap::{factory, new, Error, WrappedError, UNTRACEABLE};
use std::fmt;

struct First;
struct Second;
struct Third;
struct Fourth;

#[derive(Debug)]
struct DiskOnFire;

impl fmt::Display for DiskOnFire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("disk on fire")
    }
}

impl std::error::Error for DiskOnFire {}

/// Foreign error that still exposes its cause.
#[derive(Debug)]
struct Adapter {
    cause: Error,
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("adapter")
    }
}

impl std::error::Error for Adapter {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.cause.as_dyn())
    }
}

fn four_deep() -> Error {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");
    let (w3, _) = factory::<Third>("third");
    let (w4, _) = factory::<Fourth>("fourth");

    w4.wrap(w3.wrap(w2.wrap(w1.wrap(new("sample")))))
}

#[test]
fn short_text_concatenates_outermost_first() {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");

    let err = w2.wrap(w1.wrap(new("sample")));
    assert_eq!(err.to_string(), "second: first: sample");
    assert_eq!(four_deep().to_string(), "fourth: third: second: first: sample");
}

#[test]
fn link_message_excludes_the_cause() {
    let err = four_deep();
    let outer = err.downcast_ref::<WrappedError>().unwrap();
    assert_eq!(outer.message(), "fourth");
    assert_eq!(outer.inner().unwrap().to_string(), "third: second: first: sample");
}

#[test]
fn raised_error_has_no_cause() {
    let (w1, _) = factory::<First>("first");
    let err = w1.raise();

    assert_eq!(err.to_string(), "first");
    assert!(err.source().is_none());
    assert!(err.downcast_ref::<WrappedError>().unwrap().inner().is_none());
}

#[test]
fn wraps_foreign_errors() {
    let (w1, _) = factory::<First>("first");
    let err = w1.wrap(DiskOnFire);
    assert_eq!(err.to_string(), "first: disk on fire");
    assert!(err.source().unwrap().is::<DiskOnFire>());
}

#[test]
fn wrap_records_the_calling_line() {
    let (w1, _) = factory::<First>("first");
    let expected = line!() + 1;
    let err = w1.wrap(new("sample"));

    let wrapped = err.downcast_ref::<WrappedError>().unwrap();
    assert_eq!(wrapped.location().line(), expected);
    assert_eq!(wrapped.location().file(), file!());
}

#[test]
fn detailed_rendering_has_one_block_per_link() {
    let err = four_deep();
    let trace = format!("{err:#}");
    let blocks: Vec<&str> = trace.split("\n\n").collect();

    assert_eq!(blocks.len(), 5);
    assert!(blocks[0].starts_with("fourth\n\t"));
    assert!(blocks[3].starts_with("first\n\t"));
    assert!(blocks[4].starts_with("sample\n\t"));
    assert!(blocks.iter().all(|b| b.lines().count() == 3));
}

#[test]
fn detailed_rendering_ends_with_untraceable_foreign_root() {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");
    let err = w2.wrap(w1.wrap(DiskOnFire));

    let trace = format!("{err:#}");
    let blocks: Vec<&str> = trace.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[2], format!("{UNTRACEABLE}\n\tdisk on fire"));
}

#[test]
fn detailed_rendering_continues_through_foreign_sources() {
    let (w1, _) = factory::<First>("first");
    let err = w1.wrap(Adapter { cause: new("sample") });

    let trace = format!("{err:#}");
    let blocks: Vec<&str> = trace.split("\n\n").collect();
    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks[1], "UNTRACEABLE\n\tadapter");
    assert!(blocks[2].starts_with("sample\n\t"));
}

#[test]
fn wrapped_error_renders_like_its_handle() {
    let err = four_deep();
    let wrapped = err.downcast_ref::<WrappedError>().unwrap();
    assert_eq!(format!("{wrapped}"), format!("{err}"));
    assert_eq!(format!("{wrapped:#}"), format!("{err:#}"));
}

#[test]
fn debug_falls_back_to_bracketed_form() {
    let (w1, _) = factory::<First>("first");
    let err = w1.wrap(new("sample"));
    assert_eq!(format!("{err:?}"), "{?(error=first: sample)}");
}

#[test]
fn handles_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
    assert_send_sync::<WrappedError>();
}

#[test]
fn converts_into_boxed_std_error() {
    let (w1, _) = factory::<First>("first");
    let boxed: Box<dyn std::error::Error + Send + Sync> = w1.wrap(new("sample")).into();
    assert_eq!(boxed.to_string(), "first: sample");
}

#[test]
fn boxed_handle_keeps_the_detailed_rendering() {
    let err = four_deep();
    let boxed: Box<dyn std::error::Error + Send + Sync> = err.clone().into();

    assert_eq!(format!("{boxed:#}"), format!("{err:#}"));
    assert_eq!(format!("{boxed}"), format!("{err}"));
}
