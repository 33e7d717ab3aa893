//! Values the protocol dispatches on.

use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

use paramsym_core::{Expr, Number, Symbol};
use paramsym_resolver::{ParamResolver, ResolveError};

use crate::hooks::Parameterizable;
use crate::protocol;

/// A shared handle to a domain object implementing [`Parameterizable`].
///
/// Equality compares the underlying objects when they have the same type.
#[derive(Clone)]
pub struct Object(Arc<dyn Parameterizable>);

impl Object {
    /// Wraps a domain object.
    pub fn new<T: Parameterizable>(object: T) -> Self {
        Self(Arc::new(object))
    }

    /// Returns the wrapped object.
    #[must_use]
    pub fn get(&self) -> &dyn Parameterizable {
        self.0.as_ref()
    }

    /// Returns the wrapped object if it has type `T`.
    #[must_use]
    pub fn downcast_ref<T: Parameterizable>(&self) -> Option<&T> {
        self.0.as_ref().as_any().downcast_ref::<T>()
    }

    /// Returns true if both handles share the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0.as_ref().dyn_eq(other.0.as_ref().as_any())
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

/// Any value that may contain unresolved parameters.
///
/// The variants are the categories the dispatcher distinguishes: symbolic
/// expressions, ordered collections (whose kind survives resolution), domain
/// objects, and plain data that never carries parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A plain number.
    Number(Number),
    /// A plain boolean.
    Bool(bool),
    /// Plain text. Text is data, not a parameter name.
    Text(String),
    /// A symbolic expression, including a bare symbol.
    Expr(Expr),
    /// A growable sequence.
    List(Vec<Value>),
    /// A fixed-size sequence.
    Tuple(Vec<Value>),
    /// A domain object.
    Object(Object),
}

impl Value {
    /// Creates a bare symbol.
    pub fn symbol(name: impl Into<Symbol>) -> Self {
        Value::Expr(Expr::symbol(name))
    }

    /// Creates a list.
    pub fn list(items: impl IntoIterator<Item = Value>) -> Self {
        Value::List(items.into_iter().collect())
    }

    /// Creates a tuple.
    pub fn tuple(items: impl IntoIterator<Item = Value>) -> Self {
        Value::Tuple(items.into_iter().collect())
    }

    /// Wraps a domain object.
    pub fn object<T: Parameterizable>(object: T) -> Self {
        Value::Object(Object::new(object))
    }

    /// Returns the elements if this is a list or a tuple.
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) | Value::Tuple(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the domain object if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// See [`protocol::is_parameterized`].
    #[must_use]
    pub fn is_parameterized(&self) -> bool {
        protocol::is_parameterized(self)
    }

    /// See [`protocol::parameter_names`].
    #[must_use]
    pub fn parameter_names(&self) -> BTreeSet<String> {
        protocol::parameter_names(self, true)
    }

    /// See [`protocol::parameter_symbols`].
    #[must_use]
    pub fn parameter_symbols(&self) -> BTreeSet<Symbol> {
        protocol::parameter_symbols(self, true)
    }

    /// See [`protocol::resolve_parameters`].
    ///
    /// # Errors
    ///
    /// Propagates errors from the resolver and from resolve hooks.
    pub fn resolve(self, resolver: impl Into<ParamResolver>) -> Result<Value, ResolveError> {
        protocol::resolve_parameters(self, resolver)
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(Number::Integer(n))
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(Number::from(n))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Number(Number::Float(x))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_owned())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Value::Text(text)
    }
}

impl From<Expr> for Value {
    fn from(expr: Expr) -> Self {
        Value::Expr(expr)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Expr(Expr::symbol(symbol))
    }
}

impl From<Object> for Value {
    fn from(obj: Object) -> Self {
        Value::Object(obj)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}
