//! Property-based tests for resolution.

#[cfg(test)]
mod tests {
    use paramsym_core::{Expr, Number};
    use proptest::prelude::*;

    use crate::ParamResolver;

    fn small_int() -> impl Strategy<Value = i64> {
        -100i64..100i64
    }

    proptest! {
        #[test]
        fn resolution_matches_substitution(a in small_int(), b in small_int(), x in small_int()) {
            let e = a * Expr::symbol("x") + b;
            let r = ParamResolver::from([("x", x)]);
            prop_assert_eq!(r.value_of(&e).unwrap().as_number(), Some(Number::Integer(a * x + b)));
        }

        #[test]
        fn full_resolution_is_idempotent(a in small_int(), x in small_int(), y in small_int()) {
            let e = (Expr::symbol("x") + a) * Expr::symbol("y");
            let r = ParamResolver::from([("x", x), ("y", y)]);
            let once = r.value_of(&e).unwrap();
            let twice = r.value_of(&once).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn chains_resolve_to_the_end(len in 1usize..20, value in small_int()) {
            // p0 -> p1 -> ... -> p{len} = value
            let mut r = ParamResolver::new();
            for i in 0..len {
                r = r.with_binding(format!("p{i}"), Expr::symbol(format!("p{}", i + 1)));
            }
            r = r.with_binding(format!("p{len}"), value);
            prop_assert_eq!(r.value_of(&Expr::symbol("p0")).unwrap(), Expr::number(value));
        }
    }
}
