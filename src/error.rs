//! Typed failures for the kernel. Every public operation either returns a
//! total result or one of these, never a silently-wrong term.

use thiserror::Error;

/// Failure modes of the reducer (spec.md §7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReductionError {
    /// `normalize` did not reach a fixed point within the configured step
    /// budget. On well-typed closed terms this should not happen (the rule
    /// set is strongly normalizing there); it is reachable on the open,
    /// fresh-constant-laden terms the redundancy filter should never
    /// actually produce, and is kept as a defense rather than an assertion.
    #[error("reduction budget exceeded after {0} steps")]
    BudgetExceeded(usize),
}

/// Failure modes of `unchurch` (spec.md §6, §7).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChurchError {
    /// The term is not `zero` or an iterated `succ` spine ending in `zero`.
    #[error("term is not a church numeral: {0}")]
    NotANumeral(String),
}
