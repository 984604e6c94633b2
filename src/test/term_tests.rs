use crate::term::Term;
use crate::types::Type;

#[test]
fn abs_and_app_size_count_nodes() {
    let body = Term::app(Term::var(0), Term::var(0));
    let abs = Term::abs(Type::nat(), body);
    assert_eq!(abs.size(), 2);
}

#[test]
fn const_and_var_have_zero_size() {
    assert_eq!(Term::constant("zero").size(), 0);
    assert_eq!(Term::var(3).size(), 0);
}

#[test]
fn display_parenthesizes_applications_and_abstractions() {
    let term = Term::app(Term::constant("succ"), Term::constant("zero"));
    assert_eq!(term.to_string(), "(succ zero)");

    let abs = Term::abs(Type::nat(), Term::var(0));
    assert_eq!(abs.to_string(), "(\u{3bb}:\u{2115} 0)");
}

#[test]
fn equality_is_structural_not_pointer() {
    let a = Term::app(Term::constant("succ"), Term::constant("zero"));
    let b = Term::app(Term::constant("succ"), Term::constant("zero"));
    assert_eq!(a, b);
}
