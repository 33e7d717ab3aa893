//! Property-based tests for substitution.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{Expr, Number, Symbol};

    // Strategy for generating small integers
    fn small_int() -> impl Strategy<Value = i64> {
        -1000i64..1000i64
    }

    // Strategy for generating linear polynomials a*x + b*y + c
    fn linear() -> impl Strategy<Value = (i64, i64, i64)> {
        (small_int(), small_int(), small_int())
    }

    fn build(a: i64, b: i64, c: i64) -> Expr {
        a * Expr::symbol("x") + b * Expr::symbol("y") + c
    }

    proptest! {
        #[test]
        fn full_substitution_yields_number((a, b, c) in linear(), x in small_int(), y in small_int()) {
            let e = build(a, b, c)
                .subs(&Symbol::new("x"), x)
                .subs(&Symbol::new("y"), y);
            prop_assert_eq!(e.as_number(), Some(Number::Integer(a * x + b * y + c)));
            prop_assert!(e.free_symbols().is_empty());
        }

        #[test]
        fn partial_substitution_removes_only_bound_symbol((a, b, c) in linear(), x in small_int()) {
            let e = build(a, b, c).subs(&Symbol::new("x"), x);
            prop_assert!(!e.free_symbols().contains(&Symbol::new("x")));
            prop_assert_eq!(e.has_free_symbols(), !e.free_symbols().is_empty());
        }

        #[test]
        fn substitution_is_idempotent((a, b, c) in linear(), x in small_int()) {
            let once = build(a, b, c).subs(&Symbol::new("x"), x);
            let twice = once.subs(&Symbol::new("x"), x);
            prop_assert_eq!(once, twice);
        }
    }
}
