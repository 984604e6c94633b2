//! Typing contexts (spec.md §3) and the `augment` scope-extension helper
//! used by the abstraction case of the term enumerator (§4.5).
use std::rc::Rc;

use crate::engine::Engine;
use crate::term::Term;
use crate::types::Type;

/// An ordered sequence of `(term, type)` pairs, the enumeration seed at
/// `steps = 0` (spec.md §3, §4.5). Cheaply cloned — it is threaded through
/// every recursive call of the enumerator.
pub type Context = Rc<[(Rc<Term>, Rc<Type>)]>;

/// Shift every free variable in `term` up by one de Bruijn index. Used by
/// `augment` to keep existing context entries valid under a freshly-bound
/// outermost variable.
fn increment(engine: &Engine, term: &Rc<Term>) -> Rc<Term> {
    crate::subst::lift(engine, term, 1, 0)
}

/// Extend `context` with a fresh `(Var(0), annotation)` binding, shifting
/// every existing entry's term so it still refers to the right binder.
pub fn augment(engine: &Engine, context: &Context, annotation: Rc<Type>) -> Context {
    let mut entries = Vec::with_capacity(context.len() + 1);
    entries.push((Term::var(0), annotation));
    entries.extend(
        context
            .iter()
            .map(|(term, ty)| (increment(engine, term), Rc::clone(ty))),
    );
    entries.into()
}

/// Build the canonical enumeration context for ℕ with `zero`, `succ`, `iter`
/// (spec.md §6).
pub fn canonical() -> Context {
    let nat = Type::nat();
    let nat_to_nat = Type::arrow(Rc::clone(&nat), Rc::clone(&nat));
    let iter_ty = Type::arrow(
        Rc::clone(&nat),
        Type::arrow(Rc::clone(&nat_to_nat), Rc::clone(&nat_to_nat)),
    );
    vec![
        (Term::constant("zero"), Rc::clone(&nat)),
        (Term::constant("succ"), nat_to_nat),
        (Term::constant("iter"), iter_ty),
    ]
    .into()
}
