//! Keys identifying a bound parameter.

use std::fmt;
use std::sync::Arc;

use paramsym_core::{Expr, ExprNode, Symbol};

/// The identity of a parameter inside a resolver.
///
/// Symbols are keyed by name, so binding `"x"` and binding `Symbol::new("x")`
/// are the same thing. Composite expressions can be bound as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamKey {
    /// A parameter name.
    Name(Arc<str>),
    /// A composite expression, matched structurally against every subexpression.
    Expr(Expr),
}

impl ParamKey {
    /// Returns the name if this key names a single parameter.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            ParamKey::Name(name) => Some(name),
            ParamKey::Expr(_) => None,
        }
    }
}

impl From<&str> for ParamKey {
    fn from(name: &str) -> Self {
        ParamKey::Name(Arc::from(name))
    }
}

impl From<String> for ParamKey {
    fn from(name: String) -> Self {
        ParamKey::Name(Arc::from(name))
    }
}

impl From<Symbol> for ParamKey {
    fn from(symbol: Symbol) -> Self {
        ParamKey::Name(symbol.shared_name())
    }
}

impl From<&Symbol> for ParamKey {
    fn from(symbol: &Symbol) -> Self {
        ParamKey::Name(symbol.shared_name())
    }
}

impl From<Expr> for ParamKey {
    fn from(expr: Expr) -> Self {
        match expr.node() {
            ExprNode::Symbol(s) => ParamKey::from(s),
            _ => ParamKey::Expr(expr),
        }
    }
}

impl fmt::Display for ParamKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamKey::Name(name) => f.write_str(name),
            ParamKey::Expr(expr) => write!(f, "{expr}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_and_name_agree() {
        assert_eq!(ParamKey::from("x"), ParamKey::from(Symbol::new("x")));
        assert_eq!(ParamKey::from(Expr::symbol("x")), ParamKey::from("x"));
    }

    #[test]
    fn test_composite_key() {
        let key = ParamKey::from(Expr::symbol("x") + Expr::symbol("y"));
        assert!(key.name().is_none());
        assert_eq!(key.to_string(), "x + y");
    }
}
