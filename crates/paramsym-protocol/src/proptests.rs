//! Property-based tests for the dispatcher.

#[cfg(test)]
mod tests {
    use paramsym_core::{Expr, Symbol};
    use paramsym_resolver::ParamResolver;
    use proptest::prelude::*;

    use crate::fixtures::{NamesOnly, Rotation, SymbolsOnly};
    use crate::{
        is_parameterized, parameter_names, parameter_symbols, resolve_parameters, validate, Value,
    };

    // Strategy for leaves: plain data, symbols, expressions and objects
    fn leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            (-100i64..100).prop_map(Value::from),
            any::<bool>().prop_map(Value::from),
            "[a-d]".prop_map(Value::symbol),
            (-10i64..10, "[a-d]")
                .prop_map(|(k, name)| Value::from(k * Expr::symbol(name) + 1_i64)),
            "[a-d]".prop_map(|name| Value::object(Rotation::new(Value::symbol(name)))),
        ]
    }

    // Strategy for nested lists and tuples of leaves
    fn value() -> impl Strategy<Value = Value> {
        leaf().prop_recursive(3, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::List),
                prop::collection::vec(inner, 0..4).prop_map(Value::Tuple),
            ]
        })
    }

    fn full_resolver() -> ParamResolver {
        ParamResolver::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)])
    }

    fn same_shape(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::List(x), Value::List(y)) | (Value::Tuple(x), Value::Tuple(y)) => {
                x.len() == y.len() && x.iter().zip(y).all(|(p, q)| same_shape(p, q))
            }
            (Value::List(_) | Value::Tuple(_), _) | (_, Value::List(_) | Value::Tuple(_)) => false,
            _ => true,
        }
    }

    fn names_of(symbols: &std::collections::BTreeSet<Symbol>) -> Vec<String> {
        symbols.iter().map(|s| s.name().to_owned()).collect()
    }

    proptest! {
        #[test]
        fn builtin_values_are_consistent(v in value()) {
            prop_assert_eq!(validate(&v), Ok(()));
            prop_assert_eq!(is_parameterized(&v), !parameter_symbols(&v, true).is_empty());
        }

        #[test]
        fn resolution_preserves_shape(v in value()) {
            let resolved = resolve_parameters(v.clone(), full_resolver()).unwrap();
            prop_assert!(same_shape(&v, &resolved));
        }

        #[test]
        fn full_resolution_removes_parameters_and_is_idempotent(v in value()) {
            let once = resolve_parameters(v, full_resolver()).unwrap();
            prop_assert!(!is_parameterized(&once));
            prop_assert!(parameter_names(&once, true).is_empty());

            let twice = resolve_parameters(once.clone(), full_resolver()).unwrap();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn empty_resolver_is_identity(v in value()) {
            let resolved = resolve_parameters(v.clone(), ParamResolver::new()).unwrap();
            prop_assert_eq!(resolved, v);
        }

        #[test]
        fn derived_names_match_symbols(names in prop::collection::btree_set("[a-z]{1,3}", 0..5)) {
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();

            let from_symbols = Value::object(SymbolsOnly::new(&refs));
            let from_names = Value::object(NamesOnly::new(&refs));

            prop_assert_eq!(&parameter_names(&from_symbols, true), &names);
            prop_assert_eq!(names_of(&parameter_symbols(&from_names, true)), refs);
        }
    }
}
