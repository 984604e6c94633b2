use crate::church::{church, unchurch};
use crate::term::Term;

#[test]
fn church_zero_is_the_zero_constant() {
    assert_eq!(church(0), Term::constant("zero"));
}

#[test]
fn church_builds_a_succ_spine() {
    let three = church(3);
    assert_eq!(
        three,
        Term::app(
            Term::constant("succ"),
            Term::app(
                Term::constant("succ"),
                Term::app(Term::constant("succ"), Term::constant("zero")),
            ),
        )
    );
}

#[test]
fn unchurch_round_trips_through_church() {
    for n in 0..8 {
        assert_eq!(unchurch(&church(n)).unwrap(), n);
    }
}

#[test]
fn unchurch_rejects_non_numeral_terms() {
    assert!(unchurch(&Term::constant("iter")).is_err());
    assert!(unchurch(&Term::var(0)).is_err());
    let malformed = Term::app(Term::constant("succ"), Term::constant("iter"));
    assert!(unchurch(&malformed).is_err());
}
