#![allow(clippy::needless_return)]
/// Enumerative program synthesis for a simply-typed lambda calculus
/// extended with a primitive recursor over the naturals.
///
/// # What this crate is
///
/// Given a typing context of constants (`zero`, `succ`, `iter`, ...), this
/// crate enumerates every well-typed closed term up to a chosen size,
/// reduces each to a canonical normal form, and discards terms that are
/// observationally redundant with previously enumerated ones — either
/// because they share a normal form, or because a heuristic inductive
/// congruence recognizes them as computing the same function on ℕ. Handed
/// a property oracle ("behaves like multiplication on small inputs"), a
/// driver can use this as a bottom-up program search.
///
/// # What this crate is not
///
/// Not a proof assistant: inductive equivalence (see [`equiv`]) is a
/// heuristic congruence, not a decision procedure, and a caller that needs
/// certainty should re-verify any candidate independently. No
/// polymorphism, no dependent types, no let-binding, no pattern matching
/// beyond what `iter` provides.
///
/// # Layout
///
/// - [`types`] / [`term`]: the type and term algebras.
/// - [`subst`]: capture-free substitution and index lifting.
/// - [`reduce`]: β/η/ι reduction and normalization.
/// - [`equiv`]: the inductive-equivalence congruence.
/// - [`enumerate`]: the bounded type and term enumerators, with the
///   redundancy filter built in.
/// - [`context`]: typing contexts and the canonical ℕ/`succ`/`iter` seed.
/// - [`engine`]: the memoization fabric every operation above runs through.
/// - [`church`]: church-numeral conversion helpers for a driver's oracle.
pub mod church;
pub mod context;
pub mod engine;
pub mod enumerate;
pub mod equiv;
pub mod error;
pub mod reduce;
pub mod subst;
pub mod term;
pub mod types;

pub use church::{church as to_church, unchurch};
pub use context::{augment, canonical, Context};
pub use engine::Engine;
pub use enumerate::{terms, types};
pub use equiv::inductively_equal;
pub use error::{ChurchError, ReductionError};
pub use term::Term;
pub use types::Type;
