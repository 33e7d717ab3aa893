//! Domain objects implementing different subsets of the hooks.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use paramsym_core::{Expr, Symbol};
use paramsym_resolver::{ParamResolver, ResolveError};

use crate::hooks::Parameterizable;
use crate::protocol;
use crate::value::Value;

/// A gate-like object holding one angle; implements every hook by
/// delegating to the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub struct Rotation {
    pub angle: Value,
}

impl Rotation {
    pub fn new(angle: Value) -> Self {
        Self { angle }
    }
}

impl Parameterizable for Rotation {
    fn is_parameterized(&self) -> Option<bool> {
        Some(protocol::is_parameterized(&self.angle))
    }

    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        Some(protocol::parameter_names(&self.angle, true))
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        Some(protocol::parameter_symbols(&self.angle, true))
    }

    fn resolve_parameters(&self, resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        let angle = protocol::resolve_parameters(self.angle.clone(), resolver)?;
        Ok(Some(Value::object(Rotation::new(angle))))
    }
}

/// Reports names only.
#[derive(Debug, Clone, PartialEq)]
pub struct NamesOnly(Vec<String>);

impl NamesOnly {
    pub fn new(names: &[&str]) -> Self {
        Self(names.iter().map(|s| (*s).to_string()).collect())
    }
}

impl Parameterizable for NamesOnly {
    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        Some(self.0.iter().cloned().collect())
    }
}

/// Reports symbols only.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolsOnly(Vec<Symbol>);

impl SymbolsOnly {
    pub fn new(names: &[&str]) -> Self {
        Self(names.iter().map(|s| Symbol::new(s)).collect())
    }
}

impl Parameterizable for SymbolsOnly {
    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        Some(self.0.iter().cloned().collect())
    }
}

/// Reports no names, but has symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyNames(Vec<Symbol>);

impl EmptyNames {
    pub fn new(symbols: &[&str]) -> Self {
        Self(symbols.iter().map(|s| Symbol::new(s)).collect())
    }
}

impl Parameterizable for EmptyNames {
    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        Some(BTreeSet::new())
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        Some(self.0.iter().cloned().collect())
    }
}

/// Holds an expression but only knows how to resolve it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveOnly {
    pub inner: Expr,
}

impl ResolveOnly {
    pub fn new(inner: Expr) -> Self {
        Self { inner }
    }
}

impl Parameterizable for ResolveOnly {
    fn resolve_parameters(&self, resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        let inner = resolver.value_of(&self.inner)?;
        Ok(Some(Value::object(ResolveOnly::new(inner))))
    }
}

/// Overrides every hook, only to decline.
#[derive(Debug, Clone, PartialEq)]
pub struct Declines;

impl Parameterizable for Declines {
    fn is_parameterized(&self) -> Option<bool> {
        None
    }

    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        None
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        None
    }

    fn resolve_parameters(&self, _resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        Ok(None)
    }
}

/// Implements no hooks at all.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque;

impl Parameterizable for Opaque {}

/// Fails whenever it is asked to resolve.
#[derive(Debug, Clone, PartialEq)]
pub struct Failing;

impl Parameterizable for Failing {
    fn resolve_parameters(&self, _resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        Err(ResolveError::hook("refusing to resolve"))
    }
}

/// Counts how often any of its hooks runs.
#[derive(Debug, Default)]
pub struct CountingHooks(Arc<AtomicUsize>);

impl CountingHooks {
    pub fn calls(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.0)
    }

    fn tick(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

impl PartialEq for CountingHooks {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Parameterizable for CountingHooks {
    fn is_parameterized(&self) -> Option<bool> {
        self.tick();
        None
    }

    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        self.tick();
        None
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        self.tick();
        None
    }

    fn resolve_parameters(&self, _resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        self.tick();
        Ok(None)
    }
}

/// Claims not to be parameterized while reporting a symbol.
#[derive(Debug, Clone, PartialEq)]
pub struct Inconsistent;

impl Parameterizable for Inconsistent {
    fn is_parameterized(&self) -> Option<bool> {
        Some(false)
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        Some(BTreeSet::from([Symbol::new("ghost")]))
    }
}

/// Reports names that disagree with its symbols.
#[derive(Debug, Clone, PartialEq)]
pub struct MismatchedNames;

impl Parameterizable for MismatchedNames {
    fn is_parameterized(&self) -> Option<bool> {
        Some(true)
    }

    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        Some(BTreeSet::from(["a".to_string()]))
    }

    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        Some(BTreeSet::from([Symbol::new("b")]))
    }
}
