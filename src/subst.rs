//! The substitution kernel (spec.md §4.1): index lifting and capture-free
//! substitution, both structurally recursive and deterministic, memoized by
//! structural identity of `(term, offset/index)` (spec.md §5,
//! `original_source/reducers.py:4,23`'s `@lru_cache`). Every recursive call
//! goes back through the cache, not just the outermost one, since the
//! enumerator calls these on a heavily shared term DAG.
use std::rc::Rc;

use crate::engine::Engine;
use crate::term::Term;

/// Add `offset` (signed) to every `Var(i)` with `i >= depth`; variables
/// bound within the rewritten region (`i < depth`) are untouched. Descending
/// into an `Abs` increments `depth`.
pub fn lift(engine: &Engine, term: &Rc<Term>, offset: i64, depth: usize) -> Rc<Term> {
    let key = (Rc::clone(term), offset, depth);
    if let Some(hit) = engine.caches.lift.borrow().get(&key) {
        return Rc::clone(hit);
    }
    let result = match term.as_ref() {
        Term::Const(_) => Rc::clone(term),
        Term::Var(index) => {
            if *index < depth {
                Rc::clone(term)
            } else {
                let shifted = *index as i64 + offset;
                assert!(shifted >= 0, "lift produced a negative de Bruijn index");
                Term::var(shifted as usize)
            }
        }
        Term::Abs(annotation, body) => {
            Term::abs(Rc::clone(annotation), lift(engine, body, offset, depth + 1))
        }
        Term::App(function, argument) => Term::app(
            lift(engine, function, offset, depth),
            lift(engine, argument, offset, depth),
        ),
    };
    engine.caches.lift.borrow_mut().insert(key, Rc::clone(&result));
    result
}

/// Substitute the variable with de Bruijn index `index` by `replacement`,
/// decrementing higher free indices to restore the invariant that one
/// binder has been peeled away. `replacement` is lifted by `index` on
/// insertion so its free variables are read in the outer scope it came
/// from, not the scope it lands in.
pub fn substitute(
    engine: &Engine,
    term: &Rc<Term>,
    replacement: &Rc<Term>,
    index: usize,
) -> Rc<Term> {
    let key = (Rc::clone(term), Rc::clone(replacement), index);
    if let Some(hit) = engine.caches.substitute.borrow().get(&key) {
        return Rc::clone(hit);
    }
    let result = match term.as_ref() {
        Term::Const(_) => Rc::clone(term),
        Term::Var(i) => {
            use std::cmp::Ordering::*;
            match i.cmp(&index) {
                Less => Rc::clone(term),
                Equal => lift(engine, replacement, index as i64, 0),
                Greater => Term::var(i - 1),
            }
        }
        Term::Abs(annotation, body) => Term::abs(
            Rc::clone(annotation),
            substitute(engine, body, replacement, index + 1),
        ),
        Term::App(function, argument) => Term::app(
            substitute(engine, function, replacement, index),
            substitute(engine, argument, replacement, index),
        ),
    };
    engine
        .caches
        .substitute
        .borrow_mut()
        .insert(key, Rc::clone(&result));
    result
}
