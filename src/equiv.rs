//! Inductive equivalence (spec.md §4.3): a heuristic congruence recognizing
//! that two terms of the same type compute the same function on ℕ even when
//! their normal forms differ syntactically.
use std::rc::Rc;

use log::trace;

use crate::engine::Engine;
use crate::error::ReductionError;
use crate::term::Term;
use crate::types::{Type, NATURAL};

/// Structural subterm replacement: every occurrence of `needle` within
/// `term` becomes `replacement`; everything else is rebuilt unchanged.
pub fn replace(term: &Rc<Term>, needle: &Rc<Term>, replacement: &Rc<Term>) -> Rc<Term> {
    if term == needle {
        return Rc::clone(replacement);
    }
    match term.as_ref() {
        Term::Const(_) | Term::Var(_) => Rc::clone(term),
        Term::Abs(annotation, body) => {
            Term::abs(Rc::clone(annotation), replace(body, needle, replacement))
        }
        Term::App(function, argument) => Term::app(
            replace(function, needle, replacement),
            replace(argument, needle, replacement),
        ),
    }
}

/// `inductively_equal(f, ty_f, g, ty_g)`: the symmetric closure of `helper`.
pub fn inductively_equal(
    engine: &Engine,
    f: &Rc<Term>,
    ty_f: &Rc<Type>,
    g: &Rc<Term>,
    ty_g: &Rc<Type>,
) -> Result<bool, ReductionError> {
    Ok(helper(engine, f, ty_f, g, ty_g)? || helper(engine, g, ty_g, f, ty_f)?)
}

fn is_natural(ty: &Type) -> bool {
    matches!(ty, Type::Base(name) if name == NATURAL)
}

fn helper(
    engine: &Engine,
    f: &Rc<Term>,
    ty_f: &Rc<Type>,
    g: &Rc<Term>,
    ty_g: &Rc<Type>,
) -> Result<bool, ReductionError> {
    if ty_f != ty_g {
        return Ok(false);
    }
    if is_natural(ty_f) {
        return Ok(engine.normalize(f)? == engine.normalize(g)?);
    }
    let Type::Arrow(argument, result) = ty_f.as_ref() else {
        return Ok(false);
    };
    if !is_natural(argument) {
        return Ok(false);
    }

    let zero = Term::constant("zero");
    let f0 = engine.normalize(&Term::app(Rc::clone(f), Rc::clone(&zero)))?;
    let g0 = engine.normalize(&Term::app(Rc::clone(g), Rc::clone(&zero)))?;

    let n = engine.fresh_symbol();
    let succ_n = Term::app(Term::constant("succ"), Rc::clone(&n));

    let fn_ = engine.normalize(&Term::app(Rc::clone(f), Rc::clone(&n)))?;
    let gn = engine.normalize(&Term::app(Rc::clone(g), Rc::clone(&n)))?;
    let fsn = engine.normalize(&Term::app(Rc::clone(f), Rc::clone(&succ_n)))?;
    let gsn = engine.normalize(&Term::app(Rc::clone(g), succ_n))?;

    let fsn_rep = replace(&fsn, &fn_, &gn);

    trace!("inductively_equal: f(0)={f0} g(0)={g0} f(n)={fn_} g(n)={gn} f(succ n) rep={fsn_rep} g(succ n)={gsn}");

    if !inductively_equal(engine, &f0, result, &g0, result)? {
        return Ok(false);
    }
    inductively_equal(engine, &fsn_rep, result, &gsn, result)
}
