//! The memoization fabric (spec.md §2 component G, §5): an `Engine` bundles
//! the deterministic caches every pure recursive function here is backed
//! by, plus the one piece of mutable state in the whole crate — the
//! monotonic fresh-constant counter used by inductive equivalence (§4.3).
//! Caches grow monotonically within a run and are never invalidated except
//! by an explicit [`Engine::clear_caches`] between runs.
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use crate::context::Context;
use crate::error::ReductionError;
use crate::term::Term;
use crate::types::Type;

/// Default reduction-step cap passed to [`crate::reduce::normalize`]. Well
/// above anything the canonical context's small-step synthesis runs need,
/// comfortably below a runaway recursion turning into an unbounded loop.
pub const DEFAULT_STEP_BUDGET: usize = 10_000;

/// A typed term paired with its type, as produced throughout the
/// enumerator (spec.md §4.5).
pub type TypedTerm = (Rc<Term>, Rc<Type>);

/// A memoized slice of [`TypedTerm`]s keyed by `(context, step count)`.
type ByContextAndStep = RefCell<HashMap<(Context, usize), Rc<[TypedTerm]>>>;

/// [`crate::subst::lift`]'s cache, keyed by `(term, offset, depth)`.
type LiftCache = RefCell<HashMap<(Rc<Term>, i64, usize), Rc<Term>>>;

/// [`crate::subst::substitute`]'s cache, keyed by `(term, replacement, index)`.
type SubstituteCache = RefCell<HashMap<(Rc<Term>, Rc<Term>, usize), Rc<Term>>>;

#[derive(Default)]
pub(crate) struct Caches {
    pub(crate) normalize: RefCell<HashMap<Rc<Term>, Rc<Term>>>,
    pub(crate) lift: LiftCache,
    pub(crate) substitute: SubstituteCache,
    pub(crate) head_reducible: RefCell<HashMap<Rc<Term>, bool>>,
    pub(crate) types: RefCell<HashMap<usize, Rc<[Rc<Type>]>>>,
    pub(crate) terms: ByContextAndStep,
    pub(crate) abstractions: ByContextAndStep,
    pub(crate) applications: ByContextAndStep,
    pub(crate) normal_forms: ByContextAndStep,
}

/// The engine every enumeration, normalization, and equivalence query runs
/// through. Single-threaded and not `Sync` — `Rc` and `RefCell` throughout,
/// matching the purely sequential resource model of spec.md §5.
pub struct Engine {
    pub(crate) step_budget: usize,
    pub(crate) fresh_counter: Cell<u64>,
    pub(crate) caches: Caches,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(DEFAULT_STEP_BUDGET)
    }
}

impl Engine {
    /// Build an engine with a custom reduction-step budget (spec.md §7's
    /// "configurable reduction-step cap").
    pub fn new(step_budget: usize) -> Self {
        Engine {
            step_budget,
            fresh_counter: Cell::new(0),
            caches: Caches::default(),
        }
    }

    /// Mint a fresh opaque constant, guaranteed distinct from every other
    /// symbol this engine has minted. Used by inductive equivalence
    /// (spec.md §4.3) — a monotonic counter, not randomness, so cache keys
    /// and test runs stay reproducible (spec.md §5, §9).
    pub fn fresh_symbol(&self) -> Rc<Term> {
        let id = self.fresh_counter.get();
        self.fresh_counter.set(id + 1);
        Term::constant(format!("${id}"))
    }

    /// Normalize `term`, memoized by the term's structural identity.
    pub fn normalize(&self, term: &Rc<Term>) -> Result<Rc<Term>, ReductionError> {
        if let Some(hit) = self.caches.normalize.borrow().get(term) {
            return Ok(Rc::clone(hit));
        }
        let result = crate::reduce::normalize(self, term)?;
        self.caches
            .normalize
            .borrow_mut()
            .insert(Rc::clone(term), Rc::clone(&result));
        Ok(result)
    }

    /// Whether `term` matches the root pattern of β, η, or ι reduction,
    /// memoized by the term's structural identity (spec.md §5).
    pub fn is_head_reducible(&self, term: &Rc<Term>) -> bool {
        crate::reduce::is_head_reducible_memoized(self, term)
    }

    /// Drop every memo table. Purely advisory (spec.md §7) — caches are
    /// never invalidated mid-run because their keys are immutable terms;
    /// this exists only so a long-lived driver can bound memory between
    /// independent runs.
    pub fn clear_caches(&self) {
        self.caches.normalize.borrow_mut().clear();
        self.caches.lift.borrow_mut().clear();
        self.caches.substitute.borrow_mut().clear();
        self.caches.head_reducible.borrow_mut().clear();
        self.caches.types.borrow_mut().clear();
        self.caches.terms.borrow_mut().clear();
        self.caches.abstractions.borrow_mut().clear();
        self.caches.applications.borrow_mut().clear();
        self.caches.normal_forms.borrow_mut().clear();
    }
}
