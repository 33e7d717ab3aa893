//! The protocol dispatcher.
//!
//! The four entry points share one resolution order:
//!
//! 1. symbolic expressions are answered from their free symbols,
//! 2. lists and tuples are answered element by element,
//! 3. domain objects are asked through their [`Parameterizable`] hooks,
//! 4. anything left over gets a fixed default.
//!
//! When an object's hook has no opinion, `parameter_names` and
//! `parameter_symbols` may derive an answer from each other. The
//! `check_symbols`/`check_names` flags bound that derivation to one step:
//! the sibling is always asked with its own flag set to `false`.

use std::collections::BTreeSet;

use paramsym_core::Symbol;
use paramsym_resolver::{ParamResolver, ResolveError};
use tracing::trace;

use crate::hooks::Parameterizable;
use crate::value::Value;

/// Returns whether the value contains symbols that need resolution.
///
/// Expressions are parameterized iff they have a free symbol; sequences iff
/// any element is. Objects answer through their hook, defaulting to `false`.
/// There is no derivation from the other hooks.
#[must_use]
pub fn is_parameterized(value: &Value) -> bool {
    match value {
        Value::Expr(expr) => expr.has_free_symbols(),
        Value::List(items) | Value::Tuple(items) => items.iter().any(is_parameterized),
        Value::Object(obj) => obj.get().is_parameterized().unwrap_or(false),
        Value::Number(_) | Value::Bool(_) | Value::Text(_) => false,
    }
}

/// Returns the names of the parameters the value contains.
///
/// An object's own answer is authoritative, even when empty. If the object
/// has no opinion and `check_symbols` is true, the names are derived from
/// its symbols hook. Pass `false` when calling from the symbols fallback.
#[must_use]
pub fn parameter_names(value: &Value, check_symbols: bool) -> BTreeSet<String> {
    match value {
        Value::Expr(expr) => expr
            .free_symbols()
            .iter()
            .map(|s| s.name().to_owned())
            .collect(),
        Value::List(items) | Value::Tuple(items) => items
            .iter()
            .flat_map(|item| parameter_names(item, true))
            .collect(),
        Value::Object(obj) => object_names(obj.get(), check_symbols).unwrap_or_default(),
        Value::Number(_) | Value::Bool(_) | Value::Text(_) => BTreeSet::new(),
    }
}

/// Returns the symbols of the parameters the value contains.
///
/// Mirror image of [`parameter_names`]: if an object's symbols hook has no
/// opinion and `check_names` is true, each name reported by its names hook
/// becomes a [`Symbol`]. Pass `false` when calling from the names fallback.
#[must_use]
pub fn parameter_symbols(value: &Value, check_names: bool) -> BTreeSet<Symbol> {
    match value {
        Value::Expr(expr) => expr.free_symbols(),
        Value::List(items) | Value::Tuple(items) => items
            .iter()
            .flat_map(|item| parameter_symbols(item, true))
            .collect(),
        Value::Object(obj) => object_symbols(obj.get(), check_names).unwrap_or_default(),
        Value::Number(_) | Value::Bool(_) | Value::Text(_) => BTreeSet::new(),
    }
}

fn object_names(obj: &dyn Parameterizable, check_symbols: bool) -> Option<BTreeSet<String>> {
    if let Some(names) = obj.parameter_names() {
        return Some(names);
    }
    if !check_symbols {
        return None;
    }
    let symbols = object_symbols(obj, false)?;
    trace!(object = ?obj, "deriving parameter names from symbols");
    Some(symbols.iter().map(|s| s.name().to_owned()).collect())
}

fn object_symbols(obj: &dyn Parameterizable, check_names: bool) -> Option<BTreeSet<Symbol>> {
    if let Some(symbols) = obj.parameter_symbols() {
        return Some(symbols);
    }
    if !check_names {
        return None;
    }
    let names = object_names(obj, false)?;
    trace!(object = ?obj, "deriving parameter symbols from names");
    Some(names.into_iter().map(Symbol::from).collect())
}

/// Resolves the parameters of a value.
///
/// The resolver may be anything convertible into a [`ParamResolver`]. If it
/// carries no bindings the value is returned as-is and no hook runs.
/// Otherwise expressions are resolved by the resolver (a fully resolved
/// expression becomes [`Value::Number`]), lists and tuples are rebuilt with
/// the same kind and order, and objects are asked through their hook. Values
/// without an opinion come back unchanged.
///
/// # Errors
///
/// Errors from the resolver or from a resolve hook, unchanged.
pub fn resolve_parameters(
    value: Value,
    resolver: impl Into<ParamResolver>,
) -> Result<Value, ResolveError> {
    let resolver = resolver.into();
    if resolver.is_empty() {
        trace!("resolver has no bindings, value returned untouched");
        return Ok(value);
    }
    resolve_with(value, &resolver)
}

fn resolve_with(value: Value, resolver: &ParamResolver) -> Result<Value, ResolveError> {
    match value {
        Value::Expr(expr) => {
            let resolved = resolver.value_of(&expr)?;
            if resolved.ptr_eq(&expr) {
                return Ok(Value::Expr(expr));
            }
            Ok(match resolved.as_number() {
                Some(n) => Value::Number(n),
                None => Value::Expr(resolved),
            })
        }
        Value::List(items) => Ok(Value::List(resolve_all(items, resolver)?)),
        Value::Tuple(items) => Ok(Value::Tuple(resolve_all(items, resolver)?)),
        Value::Object(obj) => match obj.get().resolve_parameters(resolver)? {
            Some(resolved) => Ok(resolved),
            None => {
                trace!(object = ?obj, "resolve hook has no opinion, keeping object");
                Ok(Value::Object(obj))
            }
        },
        plain @ (Value::Number(_) | Value::Bool(_) | Value::Text(_)) => Ok(plain),
    }
}

fn resolve_all(items: Vec<Value>, resolver: &ParamResolver) -> Result<Vec<Value>, ResolveError> {
    items
        .into_iter()
        .map(|item| resolve_with(item, resolver))
        .collect()
}
