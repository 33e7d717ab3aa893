//! The parameter resolver.
//!
//! A [`ParamResolver`] is an immutable mapping from parameter identities to
//! values. Values are expressions: usually numbers, but a parameter may also
//! be bound to another symbol or to a formula over other parameters, which
//! is resolved in turn when [`ResolverOptions::recursive`] is set.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

use paramsym_core::{Expr, ExprNode, Symbol};
use rustc_hash::FxHashMap;

use crate::error::ResolveError;
use crate::key::ParamKey;

/// Options controlling how a resolver evaluates bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Resolve bound values that themselves contain bound parameters.
    ///
    /// When false, a bound value is substituted verbatim.
    pub recursive: bool,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self { recursive: true }
    }
}

/// An immutable mapping from parameters to values or further expressions.
///
/// An empty resolver carries no bindings; resolving anything against it is
/// the identity. Cloning is cheap: bindings are shared.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamResolver {
    bindings: Arc<FxHashMap<ParamKey, Expr>>,
    options: ResolverOptions,
}

impl ParamResolver {
    /// Creates a resolver with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns this resolver with different options.
    #[must_use]
    pub fn with_options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns a new resolver with one more binding.
    ///
    /// An existing binding for the same key is replaced.
    #[must_use]
    pub fn with_binding(&self, key: impl Into<ParamKey>, value: impl Into<Expr>) -> Self {
        let mut bindings = (*self.bindings).clone();
        bindings.insert(key.into(), value.into());
        Self {
            bindings: Arc::new(bindings),
            options: self.options,
        }
    }

    /// Returns the options of this resolver.
    #[must_use]
    pub fn options(&self) -> ResolverOptions {
        self.options
    }

    /// Returns true if this resolver has no bindings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Returns the number of bindings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns the value bound to `key`, without resolving it further.
    #[must_use]
    pub fn get(&self, key: impl Into<ParamKey>) -> Option<&Expr> {
        self.bindings.get(&key.into())
    }

    /// Returns true if `key` is bound.
    #[must_use]
    pub fn contains(&self, key: impl Into<ParamKey>) -> bool {
        self.bindings.contains_key(&key.into())
    }

    /// Iterates over the bindings in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&ParamKey, &Expr)> {
        self.bindings.iter()
    }

    /// Resolves an expression.
    ///
    /// Every symbol this resolver knows about is replaced by its value and
    /// numeric operands are folded, so a fully resolved expression comes back
    /// as a number. Unknown symbols stay symbolic.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::Recursion`] if recursive resolution runs into
    /// a cycle of bindings.
    pub fn value_of(&self, expr: &Expr) -> Result<Expr, ResolveError> {
        if self.is_empty() {
            return Ok(expr.clone());
        }
        Evaluation::new(self).eval(expr)
    }

    /// Resolves a single symbol.
    ///
    /// # Errors
    ///
    /// See [`ParamResolver::value_of`].
    pub fn value_of_symbol(&self, symbol: &Symbol) -> Result<Expr, ResolveError> {
        self.value_of(&Expr::symbol(symbol.clone()))
    }
}

/// State for one call to [`ParamResolver::value_of`].
struct Evaluation<'a> {
    resolver: &'a ParamResolver,
    /// Fully resolved values of keys seen so far.
    memo: FxHashMap<ParamKey, Expr>,
    /// Keys currently being resolved, innermost last.
    active: Vec<ParamKey>,
    /// Whether any binding is keyed by a composite expression.
    composite_keys: bool,
}

impl<'a> Evaluation<'a> {
    fn new(resolver: &'a ParamResolver) -> Self {
        Self {
            resolver,
            memo: FxHashMap::default(),
            active: Vec::new(),
            composite_keys: resolver
                .bindings
                .keys()
                .any(|key| matches!(key, ParamKey::Expr(_))),
        }
    }

    fn eval(&mut self, expr: &Expr) -> Result<Expr, ResolveError> {
        let resolver = self.resolver;
        match expr.node() {
            ExprNode::Number(_) => Ok(expr.clone()),
            ExprNode::Symbol(s) => Ok(self.symbol(s)?.unwrap_or_else(|| expr.clone())),
            _ if self.composite_keys => {
                let key = ParamKey::Expr(expr.clone());
                if let Some(value) = resolver.bindings.get(&key) {
                    return self.bound(key, value);
                }
                expr.try_map_children(&mut |child: &Expr| self.eval(child))
            }
            _ => expr.try_substitute(&mut |s: &Symbol| self.symbol(s)),
        }
    }

    /// Resolves a bound symbol; `None` if the symbol is unbound.
    fn symbol(&mut self, symbol: &Symbol) -> Result<Option<Expr>, ResolveError> {
        let resolver = self.resolver;
        let key = ParamKey::from(symbol);
        match resolver.bindings.get(&key) {
            Some(value) => self.bound(key, value).map(Some),
            None => Ok(None),
        }
    }

    fn bound(&mut self, key: ParamKey, value: &Expr) -> Result<Expr, ResolveError> {
        if !self.resolver.options.recursive || value.as_number().is_some() {
            return Ok(value.clone());
        }
        if let Some(done) = self.memo.get(&key) {
            return Ok(done.clone());
        }
        // A parameter bound to itself is left symbolic.
        if ParamKey::from(value.clone()) == key {
            return Ok(value.clone());
        }
        if self.active.contains(&key) {
            tracing::debug!(key = %key, depth = self.active.len(), "binding cycle detected");
            return Err(ResolveError::Recursion {
                key: key.to_string(),
            });
        }

        self.active.push(key.clone());
        let result = self.eval(value);
        self.active.pop();

        let resolved = result?;
        self.memo.insert(key, resolved.clone());
        Ok(resolved)
    }
}

// === Conversions from resolver-like inputs ===

impl<K, V> FromIterator<(K, V)> for ParamResolver
where
    K: Into<ParamKey>,
    V: Into<Expr>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let bindings: FxHashMap<ParamKey, Expr> = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            bindings: Arc::new(bindings),
            options: ResolverOptions::default(),
        }
    }
}

impl<K, V, S> From<HashMap<K, V, S>> for ParamResolver
where
    K: Into<ParamKey>,
    V: Into<Expr>,
    S: BuildHasher,
{
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<BTreeMap<K, V>> for ParamResolver
where
    K: Into<ParamKey>,
    V: Into<Expr>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V> From<Vec<(K, V)>> for ParamResolver
where
    K: Into<ParamKey>,
    V: Into<Expr>,
{
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParamResolver
where
    K: Into<ParamKey>,
    V: Into<Expr>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl From<&ParamResolver> for ParamResolver {
    fn from(resolver: &ParamResolver) -> Self {
        resolver.clone()
    }
}

/// `None` converts to the empty resolver.
impl From<Option<ParamResolver>> for ParamResolver {
    fn from(resolver: Option<ParamResolver>) -> Self {
        resolver.unwrap_or_default()
    }
}
