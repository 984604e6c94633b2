//! The type enumerator (spec.md §4.4, component D) and the term enumerator
//! with its redundancy filter (spec.md §4.5–§4.6, components E+F), all
//! backed by the engine's memo tables (component G).
use std::rc::Rc;

use log::debug;

use crate::context::{augment, Context};
use crate::engine::{Engine, TypedTerm};
use crate::equiv::inductively_equal;
use crate::error::ReductionError;
use crate::term::Term;
use crate::types::{Type, PENALTY};

/// Every type of exactly type-size `steps`, deduplicated by structural
/// equality (spec.md §4.4). Memoized per step count.
pub fn types(engine: &Engine, steps: usize) -> Rc<[Rc<Type>]> {
    if let Some(hit) = engine.caches.types.borrow().get(&steps) {
        return Rc::clone(hit);
    }
    let result: Rc<[Rc<Type>]> = if steps == 0 {
        vec![Type::nat()].into()
    } else if steps < PENALTY {
        Vec::new().into()
    } else {
        let mut out = Vec::new();
        for n in 0..=(steps - PENALTY) {
            let m = steps - PENALTY - n;
            for t1 in types(engine, n).iter() {
                for t2 in types(engine, m).iter() {
                    out.push(Type::arrow(Rc::clone(t1), Rc::clone(t2)));
                }
            }
        }
        out.into()
    };
    engine.caches.types.borrow_mut().insert(steps, Rc::clone(&result));
    result
}

/// `(Abs(τ, e), Arrow(τ, σ))` for every split `steps = 1 + n + m` with
/// `τ ∈ types(n)` and `(e, σ) ∈ terms(augment(context, τ), m)` (spec.md
/// §4.5).
fn abstractions(
    engine: &Engine,
    context: &Context,
    steps: usize,
) -> Result<Rc<[TypedTerm]>, ReductionError> {
    if steps == 0 {
        return Ok(Rc::from(Vec::new()));
    }
    let key = (Rc::clone(context), steps);
    if let Some(hit) = engine.caches.abstractions.borrow().get(&key) {
        return Ok(Rc::clone(hit));
    }
    let mut out = Vec::new();
    for n in 0..steps {
        let m = steps - 1 - n;
        for annotation in types(engine, n).iter() {
            let inner_context = augment(engine, context, Rc::clone(annotation));
            for (body, result_ty) in terms(engine, &inner_context, m)?.iter() {
                let abs = Term::abs(Rc::clone(annotation), Rc::clone(body));
                let ty = Type::arrow(Rc::clone(annotation), Rc::clone(result_ty));
                out.push((abs, ty));
            }
        }
    }
    let result: Rc<[_]> = out.into();
    engine
        .caches
        .abstractions
        .borrow_mut()
        .insert(key, Rc::clone(&result));
    Ok(result)
}

/// The subset of `terms(context, steps)` whose type is `Arrow(argument, _)`.
fn functions(
    engine: &Engine,
    context: &Context,
    steps: usize,
    argument: &Rc<Type>,
) -> Result<Vec<TypedTerm>, ReductionError> {
    Ok(terms(engine, context, steps)?
        .iter()
        .filter(|(_, ty)| matches!(ty.as_ref(), Type::Arrow(a, _) if a == argument))
        .cloned()
        .collect())
}

/// `(App(e1, e2), σ)` for every split `steps = 1 + n + m` with
/// `(e2, τ) ∈ terms(context, n)` and `(e1, Arrow(τ, σ)) ∈ terms(context, m)`
/// (spec.md §4.5).
fn applications(
    engine: &Engine,
    context: &Context,
    steps: usize,
) -> Result<Rc<[TypedTerm]>, ReductionError> {
    if steps == 0 {
        return Ok(Rc::from(Vec::new()));
    }
    let key = (Rc::clone(context), steps);
    if let Some(hit) = engine.caches.applications.borrow().get(&key) {
        return Ok(Rc::clone(hit));
    }
    let mut out = Vec::new();
    for n in 0..steps {
        let m = steps - 1 - n;
        for (argument, argument_ty) in terms(engine, context, n)?.iter() {
            for (function, function_ty) in functions(engine, context, m, argument_ty)? {
                let Type::Arrow(_, result_ty) = function_ty.as_ref() else {
                    unreachable!("functions() only returns Arrow-typed terms")
                };
                out.push((
                    Term::app(function, Rc::clone(argument)),
                    Rc::clone(result_ty),
                ));
            }
        }
    }
    let result: Rc<[_]> = out.into();
    engine
        .caches
        .applications
        .borrow_mut()
        .insert(key, Rc::clone(&result));
    Ok(result)
}

/// Every `(normalize(e), τ)` produced at exactly `terms(context, steps)`,
/// unioned with every earlier step's — the running set of known normal
/// forms the redundancy filter checks new candidates against (spec.md
/// §4.6).
fn normal_forms(
    engine: &Engine,
    context: &Context,
    steps: usize,
) -> Result<Rc<[TypedTerm]>, ReductionError> {
    let key = (Rc::clone(context), steps);
    if let Some(hit) = engine.caches.normal_forms.borrow().get(&key) {
        return Ok(Rc::clone(hit));
    }
    let mut out: Vec<TypedTerm> = if steps == 0 {
        Vec::new()
    } else {
        normal_forms(engine, context, steps - 1)?.to_vec()
    };
    for (term, ty) in terms(engine, context, steps)?.iter() {
        out.push((engine.normalize(term)?, Rc::clone(ty)));
    }
    let result: Rc<[_]> = out.into();
    engine
        .caches
        .normal_forms
        .borrow_mut()
        .insert(key, Rc::clone(&result));
    Ok(result)
}

/// Every well-typed term of exactly size `steps` under `context`, with the
/// two-part redundancy filter already applied (spec.md §4.5, §4.6):
/// `terms(Γ, 0)` is the context itself; at `steps > 0` every abstraction and
/// application candidate is kept only if its normal form was not already
/// seen at the same type, and it is not inductively equal to anything seen
/// at the same type. The asymmetry spec.md §9 calls out — normal-form
/// comparison checks the whole history, inductive-equivalence comparison is
/// restricted to the candidate's own type — is preserved deliberately.
pub fn terms(
    engine: &Engine,
    context: &Context,
    steps: usize,
) -> Result<Rc<[TypedTerm]>, ReductionError> {
    if steps == 0 {
        return Ok(Rc::clone(context));
    }
    let key = (Rc::clone(context), steps);
    if let Some(hit) = engine.caches.terms.borrow().get(&key) {
        return Ok(Rc::clone(hit));
    }

    // SeenNF(Γ, steps - 1): `normal_forms` already folds in every step from
    // 0 up to its argument, so this one call is all of §4.6's SeenNF.
    let seen = normal_forms(engine, context, steps - 1)?;

    let mut candidates: Vec<TypedTerm> = Vec::new();
    candidates.extend(abstractions(engine, context, steps)?.iter().cloned());
    candidates.extend(applications(engine, context, steps)?.iter().cloned());

    let mut accepted: Vec<TypedTerm> = Vec::new();
    let mut rejected_normal_form = 0usize;
    let mut rejected_inductive = 0usize;
    for (term, ty) in candidates {
        let normal = engine.normalize(&term)?;
        if seen.iter().any(|(nf, t)| *nf == normal && *t == ty) {
            rejected_normal_form += 1;
            continue;
        }
        let mut redundant = false;
        for (seen_term, seen_ty) in seen.iter().filter(|(_, t)| *t == ty) {
            if inductively_equal(engine, &term, &ty, seen_term, seen_ty)? {
                redundant = true;
                break;
            }
        }
        if redundant {
            rejected_inductive += 1;
            continue;
        }
        accepted.push((term, ty));
    }
    debug!(
        "terms: step {steps}: {} candidates, {} accepted ({} normal-form dupes, {} inductive dupes)",
        accepted.len() + rejected_normal_form + rejected_inductive,
        accepted.len(),
        rejected_normal_form,
        rejected_inductive,
    );

    let result: Rc<[_]> = accepted.into();
    engine.caches.terms.borrow_mut().insert(key, Rc::clone(&result));
    Ok(result)
}
