use error_wrap::{chain, factory, innermost, is, new, Error};
use std::fmt;

struct First;
struct Second;
struct Third;

#[derive(Debug)]
struct Refused;

impl fmt::Display for Refused {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("refused")
    }
}

impl std::error::Error for Refused {}

fn same(a: &(dyn std::error::Error + 'static), b: &(dyn std::error::Error + 'static)) -> bool {
    std::ptr::addr_eq(a as *const dyn std::error::Error, b as *const dyn std::error::Error)
}

#[test]
fn innermost_is_the_original_leaf() {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");
    let (w3, _) = factory::<Third>("third");

    let leaf = new("sample");
    let err = w3.wrap(w2.wrap(w1.wrap(leaf.clone())));

    assert!(same(innermost(&err), leaf.as_dyn()));
    assert!(same(err.innermost(), leaf.as_dyn()));
}

#[test]
fn innermost_of_an_unwrapped_error_is_itself() {
    let leaf = new("sample");
    assert!(same(innermost(&leaf), leaf.as_dyn()));

    let refused = Refused;
    assert!(innermost(&refused).is::<Refused>());
}

#[test]
fn innermost_stops_at_foreign_roots() {
    let (w1, _) = factory::<First>("first");
    let err = w1.wrap(Refused);
    assert!(innermost(&err).is::<Refused>());
}

#[test]
fn chain_lists_links_outermost_first() {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");
    let err = w2.wrap(w1.wrap(new("sample")));

    let texts: Vec<String> = chain(&err).map(|link| link.to_string()).collect();
    assert_eq!(texts, ["second: first: sample", "first: sample", "sample"]);
    assert_eq!(err.chain().count(), 3);
}

#[test]
fn is_matches_identity_anywhere_in_the_chain() {
    let (w1, _) = factory::<First>("first");
    let (w2, _) = factory::<Second>("second");

    let leaf = new("sample");
    let middle = w1.wrap(leaf.clone());
    let err = w2.wrap(middle.clone());

    assert!(is(&err, &leaf));
    assert!(is(&err, &middle));
    assert!(is(&err, &err));
    assert!(!is(&leaf, &err));
    assert!(!is(&err, &new("sample")));
}

#[test]
fn from_arc_keeps_identity() {
    let leaf = new("sample");
    let adopted = Error::from_arc(leaf.clone().into_inner());
    assert!(adopted.ptr_eq(&leaf));
}
