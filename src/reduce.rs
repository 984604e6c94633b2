//! β-, η-, and ι-reduction, and normalization to a canonical form
//! (spec.md §4.2).
//!
//! The Python source this was distilled from (`original_source/reducers.py`)
//! ships two generations of `reduce`/`normalize`; spec.md §9 calls for
//! treating the *later* definition as authoritative. This module implements
//! only that one: a single-step `reduce` trying η, then β, then ι at the
//! root, else recursing into `Abs.body`, then `App.function`, then
//! `App.argument`; `normalize` iterates `reduce` to a fixed point under a
//! step budget.
use std::rc::Rc;

use log::trace;

use crate::engine::Engine;
use crate::error::ReductionError;
use crate::term::Term;
use crate::types::Type;

/// A term matches the root pattern of β-reduction: `App(Abs(_, body), arg)`.
pub fn is_beta_reducible(term: &Term) -> bool {
    matches!(term, Term::App(function, _) if matches!(function.as_ref(), Term::Abs(..)))
}

/// `App(Abs(_, body), arg) -> substitute(body, arg)`.
fn beta_reduce(engine: &Engine, term: &Term) -> Rc<Term> {
    match term {
        Term::App(function, argument) => match function.as_ref() {
            Term::Abs(_, body) => crate::subst::substitute(engine, body, argument, 0),
            _ => unreachable!("beta_reduce called on a non-redex"),
        },
        _ => unreachable!("beta_reduce called on a non-redex"),
    }
}

/// Whether de Bruijn index `variable` occurs free in `term`.
fn occurs(variable: usize, term: &Term) -> bool {
    match term {
        Term::Const(_) => false,
        Term::Var(index) => *index == variable,
        Term::Abs(_, body) => occurs(variable + 1, body),
        Term::App(function, argument) => occurs(variable, function) || occurs(variable, argument),
    }
}

/// A term matches the root pattern of η-reduction: `Abs(_, App(f, Var(0)))`
/// where `Var(0)` does not occur free in `f`.
pub fn is_eta_reducible(term: &Term) -> bool {
    matches!(term, Term::Abs(_, body) if matches!(
        body.as_ref(),
        Term::App(function, argument)
            if matches!(argument.as_ref(), Term::Var(0)) && !occurs(0, function)
    ))
}

/// `Abs(_, App(f, Var(0))) -> lift(f, -1)`.
fn eta_reduce(engine: &Engine, term: &Term) -> Rc<Term> {
    match term {
        Term::Abs(_, body) => match body.as_ref() {
            Term::App(function, _) => crate::subst::lift(engine, function, -1, 0),
            _ => unreachable!("eta_reduce called on a non-redex"),
        },
        _ => unreachable!("eta_reduce called on a non-redex"),
    }
}

fn is_const(term: &Term, name: &str) -> bool {
    matches!(term, Term::Const(n) if n == name)
}

/// A term matches the root pattern of ι-reduction: `App(iter, zero)` or
/// `App(iter, App(succ, i))`.
pub fn is_iter_reducible(term: &Term) -> bool {
    match term {
        Term::App(function, argument) => {
            is_const(function, "iter")
                && (is_const(argument, "zero")
                    || matches!(argument.as_ref(), Term::App(f, _) if is_const(f, "succ")))
        }
        _ => false,
    }
}

/// `iter zero -> λf. λx. x`, `iter (succ i) -> λf. λx. f ((iter i) f x)`.
/// The recursive occurrence of `i` is lifted by 2 to move it under the two
/// new binders.
fn iter_reduce(engine: &Engine, term: &Term) -> Rc<Term> {
    let nat = Type::nat();
    let nat_to_nat = Type::arrow(Rc::clone(&nat), Rc::clone(&nat));
    match term {
        Term::App(function, argument) if is_const(function, "iter") => {
            if is_const(argument, "zero") {
                Term::abs(nat_to_nat, Term::abs(Rc::clone(&nat), Term::var(0)))
            } else if let Term::App(succ, i) = argument.as_ref() {
                debug_assert!(is_const(succ, "succ"));
                let lifted_i = crate::subst::lift(engine, i, 2, 0);
                let recur = Term::app(
                    Term::app(Term::app(Term::constant("iter"), lifted_i), Term::var(1)),
                    Term::var(0),
                );
                Term::abs(nat_to_nat, Term::abs(nat, Term::app(Term::var(1), recur)))
            } else {
                unreachable!("iter_reduce called on a non-redex")
            }
        }
        _ => unreachable!("iter_reduce called on a non-redex"),
    }
}

/// A term is head-reducible iff it matches the root pattern of β, η, or ι
/// (spec.md §4.2, used by the enumerator's filter to spot open-term redexes
/// without fully normalizing). This is the raw, unmemoized predicate;
/// [`crate::engine::Engine::is_head_reducible`] is the memoized entry point
/// and should be preferred by callers that hold an `Engine`.
pub fn is_head_reducible(term: &Term) -> bool {
    is_eta_reducible(term) || is_beta_reducible(term) || is_iter_reducible(term)
}

/// [`is_head_reducible`], memoized by the structural identity of `term`
/// (spec.md §5).
pub(crate) fn is_head_reducible_memoized(engine: &Engine, term: &Rc<Term>) -> bool {
    if let Some(hit) = engine.caches.head_reducible.borrow().get(term) {
        return *hit;
    }
    let result = is_head_reducible(term);
    engine
        .caches
        .head_reducible
        .borrow_mut()
        .insert(Rc::clone(term), result);
    result
}

/// Try η, then β, then ι at the root; on failure recurse into `Abs.body`,
/// then `App.function`, then `App.argument`, returning the first rewritten
/// result. Returns `None` when `term` has no redex anywhere.
fn reduce_step(engine: &Engine, term: &Rc<Term>) -> Option<Rc<Term>> {
    if is_eta_reducible(term) {
        return Some(eta_reduce(engine, term));
    }
    if is_beta_reducible(term) {
        return Some(beta_reduce(engine, term));
    }
    if is_iter_reducible(term) {
        return Some(iter_reduce(engine, term));
    }
    match term.as_ref() {
        Term::Abs(annotation, body) => {
            reduce_step(engine, body).map(|body| Term::abs(Rc::clone(annotation), body))
        }
        Term::App(function, argument) => {
            if let Some(function) = reduce_step(engine, function) {
                Some(Term::app(function, Rc::clone(argument)))
            } else {
                reduce_step(engine, argument).map(|argument| Term::app(Rc::clone(function), argument))
            }
        }
        Term::Const(_) | Term::Var(_) => None,
    }
}

/// Normalize `term` to its β/η/ι normal form, iterating single-step
/// reduction to a fixed point. Fails with
/// [`ReductionError::BudgetExceeded`] rather than returning a partially
/// reduced term if `engine`'s step budget is not enough — spec.md §7
/// requires a distinct failure here, never a silent wrong answer.
pub fn normalize(engine: &Engine, term: &Rc<Term>) -> Result<Rc<Term>, ReductionError> {
    let mut current = Rc::clone(term);
    for step in 0..engine.step_budget {
        match reduce_step(engine, &current) {
            Some(next) => {
                trace!("normalize: step {step}: {current} -> {next}");
                current = next;
            }
            None => return Ok(current),
        }
    }
    Err(ReductionError::BudgetExceeded(engine.step_budget))
}
