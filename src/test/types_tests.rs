use crate::types::Type;

#[test]
fn nat_has_size_zero() {
    assert_eq!(Type::nat().size(), 0);
}

#[test]
fn arrow_size_counts_arrows_only() {
    let ty = Type::arrow(Type::nat(), Type::arrow(Type::nat(), Type::nat()));
    assert_eq!(ty.size(), 2);
}

#[test]
fn display_matches_arrow_shape() {
    let ty = Type::arrow(Type::nat(), Type::nat());
    assert_eq!(ty.to_string(), "(\u{2115} \u{2192} \u{2115})");
}

#[test]
fn equality_is_structural() {
    let a = Type::arrow(Type::nat(), Type::nat());
    let b = Type::arrow(Type::nat(), Type::nat());
    assert_eq!(a, b);
}
