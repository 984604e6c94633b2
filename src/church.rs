//! `church`/`unchurch` convenience conversions (spec.md §6). Exposed for a
//! driver's oracle to build and read back numerals; not part of the
//! enumerator or reducer themselves.
use std::rc::Rc;

use crate::error::ChurchError;
use crate::term::Term;

/// `church(0) = zero`, `church(k+1) = succ (church(k))`.
pub fn church(n: u64) -> Rc<Term> {
    let mut term = Term::constant("zero");
    for _ in 0..n {
        term = Term::app(Term::constant("succ"), term);
    }
    term
}

/// The inverse of [`church`]; fails when `term` is not a `zero`/`succ`
/// spine.
pub fn unchurch(term: &Rc<Term>) -> Result<u64, ChurchError> {
    match term.as_ref() {
        Term::Const(name) if name == "zero" => Ok(0),
        Term::App(function, argument) => match function.as_ref() {
            Term::Const(name) if name == "succ" => Ok(1 + unchurch(argument)?),
            _ => Err(ChurchError::NotANumeral(term.to_string())),
        },
        _ => Err(ChurchError::NotANumeral(term.to_string())),
    }
}
