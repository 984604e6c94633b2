use crate::context::{augment, canonical};
use crate::engine::Engine;
use crate::term::Term;
use crate::types::Type;

#[test]
fn canonical_context_has_zero_succ_iter() {
    let ctx = canonical();
    assert_eq!(ctx.len(), 3);
    assert_eq!(ctx[0].0, Term::constant("zero"));
    assert_eq!(ctx[0].1, Type::nat());
    assert_eq!(ctx[1].0, Term::constant("succ"));
    assert_eq!(ctx[1].1, Type::arrow(Type::nat(), Type::nat()));
    assert_eq!(ctx[2].0, Term::constant("iter"));
}

#[test]
fn augment_prepends_fresh_variable_and_shifts_existing_entries() {
    let engine = Engine::default();
    let ctx = canonical();
    let augmented = augment(&engine, &ctx, Type::nat());
    assert_eq!(augmented.len(), ctx.len() + 1);
    assert_eq!(augmented[0].0, Term::var(0));
    assert_eq!(augmented[0].1, Type::nat());
    // Constants have no free variables, so their terms are unaffected by
    // the shift even though the binder count grew.
    assert_eq!(augmented[1].0, Term::constant("zero"));
}

#[test]
fn augment_shifts_variables_already_in_context() {
    let engine = Engine::default();
    let ctx: crate::context::Context = vec![(Term::var(0), Type::nat())].into();
    let augmented = augment(&engine, &ctx, Type::nat());
    assert_eq!(augmented[0].0, Term::var(0));
    assert_eq!(augmented[1].0, Term::var(1));
}
