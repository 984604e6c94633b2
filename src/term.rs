//! The term algebra (spec.md §3).
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// A closed-or-open term of the calculus, indexed by de Bruijn level within
/// its own binders.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Term {
    /// A free constant drawn from the enumeration context (`zero`, `succ`,
    /// `iter`, plus the transient opaque symbols inductive equivalence
    /// mints).
    Const(String),
    /// A de Bruijn-indexed bound variable; `0` is the innermost binder.
    Var(usize),
    /// A typed lambda abstraction.
    Abs(Rc<Type>, Rc<Term>),
    /// An application.
    App(Rc<Term>, Rc<Term>),
}

impl Term {
    /// Shorthand for `Const(name)`.
    pub fn constant(name: impl Into<String>) -> Rc<Term> {
        Rc::new(Term::Const(name.into()))
    }

    /// Shorthand for `Var(index)`.
    pub fn var(index: usize) -> Rc<Term> {
        Rc::new(Term::Var(index))
    }

    /// Shorthand for `Abs(annotation, body)`.
    pub fn abs(annotation: Rc<Type>, body: Rc<Term>) -> Rc<Term> {
        Rc::new(Term::Abs(annotation, body))
    }

    /// Shorthand for `App(function, argument)`.
    pub fn app(function: Rc<Term>, argument: Rc<Term>) -> Rc<Term> {
        Rc::new(Term::App(function, argument))
    }

    /// Term size: one per `Abs` (plus its annotation's type size), one per
    /// `App`, zero per `Var`/`Const` (spec.md §3).
    pub fn size(&self) -> usize {
        match self {
            Term::Const(_) | Term::Var(_) => 0,
            Term::Abs(annotation, body) => 1 + annotation.size() + body.size(),
            Term::App(function, argument) => 1 + function.size() + argument.size(),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Const(name) => write!(f, "{name}"),
            Term::Var(index) => write!(f, "{index}"),
            Term::Abs(annotation, body) => write!(f, "(λ:{annotation} {body})"),
            Term::App(function, argument) => write!(f, "({function} {argument})"),
        }
    }
}
