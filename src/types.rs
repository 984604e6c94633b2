//! The type algebra (spec.md §3) and the bounded type enumerator (§4.4).
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// A simple type: the base type ℕ, or a function type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
    /// A base type, named by its token. The only inhabitant this crate's
    /// context ever uses is `ℕ`, but the algebra does not hard-code it.
    Base(String),
    /// A right-associative function type `argument → result`.
    Arrow(Rc<Type>, Rc<Type>),
}

/// The canonical token for the natural-number base type, defined once
/// (spec.md §9 flags that the original source built this token in two
/// unrelated places).
pub const NATURAL: &str = "\u{2115}";

impl Type {
    /// Shorthand for the base type ℕ.
    pub fn nat() -> Rc<Type> {
        Rc::new(Type::Base(NATURAL.to_string()))
    }

    /// Shorthand for `argument → result`.
    pub fn arrow(argument: Rc<Type>, result: Rc<Type>) -> Rc<Type> {
        Rc::new(Type::Arrow(argument, result))
    }

    /// Type size: one per `Arrow`, zero per `Base` (spec.md §3).
    pub fn size(&self) -> usize {
        match self {
            Type::Base(_) => 0,
            Type::Arrow(argument, result) => 1 + argument.size() + result.size(),
        }
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(name) => write!(f, "{name}"),
            Type::Arrow(argument, result) => write!(f, "({argument} → {result})"),
        }
    }
}
/// Penalty per `Arrow` charged against the step budget (spec.md §4.4).
/// `p = 1` makes type size exactly the arrow count. The bounded enumerator
/// itself, `types(steps)`, lives in `enumerate.rs` alongside the term
/// enumerator it feeds, since both are driven by the same `Engine` memo
/// table discipline.
pub const PENALTY: usize = 1;
