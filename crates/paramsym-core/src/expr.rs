//! Immutable symbolic expressions.
//!
//! An [`Expr`] is a cheaply clonable handle to a shared tree of
//! [`ExprNode`]s. Expressions are never mutated; substitution builds a new
//! tree and reuses every subtree it did not touch.
//!
//! The smart constructors ([`Expr::sum`], [`Expr::product`], [`Expr::pow`],
//! ...) fold numeric operands eagerly, so an expression whose symbols have
//! all been substituted collapses to a single [`ExprNode::Number`].

use std::collections::BTreeSet;
use std::convert::Infallible;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::number::{finite, Number};
use crate::symbol::Symbol;

/// Argument storage for n-ary nodes.
pub type Args = SmallVec<[Expr; 4]>;

/// An elementary function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Function {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Natural exponential.
    Exp,
    /// Natural logarithm.
    Ln,
    /// Square root.
    Sqrt,
    /// Absolute value.
    Abs,
}

impl Function {
    /// The name used when printing.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Function::Sin => "sin",
            Function::Cos => "cos",
            Function::Tan => "tan",
            Function::Exp => "exp",
            Function::Ln => "ln",
            Function::Sqrt => "sqrt",
            Function::Abs => "abs",
        }
    }

    /// Evaluates the function at a number.
    ///
    /// Returns `None` outside the real domain.
    #[must_use]
    pub fn eval(self, x: Number) -> Option<Number> {
        match (self, x) {
            (Function::Abs, n) if n.is_exact() => Some(if n.is_negative() { -n } else { n }),
            (Function::Sqrt | Function::Sin | Function::Tan, n) if n.is_zero() && n.is_exact() => {
                Some(Number::Integer(0))
            }
            (Function::Cos | Function::Exp, n) if n.is_zero() && n.is_exact() => {
                Some(Number::Integer(1))
            }
            (Function::Ln, n) if n.is_one() && n.is_exact() => Some(Number::Integer(0)),
            _ => {
                let x = x.to_f64();
                finite(match self {
                    Function::Sin => x.sin(),
                    Function::Cos => x.cos(),
                    Function::Tan => x.tan(),
                    Function::Exp => x.exp(),
                    Function::Ln => x.ln(),
                    Function::Sqrt => x.sqrt(),
                    Function::Abs => x.abs(),
                })
            }
        }
    }
}

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExprNode {
    // === Atoms ===
    /// A concrete number.
    Number(Number),

    /// A free symbol.
    Symbol(Symbol),

    // === Compound Expressions ===
    /// Sum of expressions: a + b + c + ...
    ///
    /// Invariant: at least 2 arguments, at most one numeric.
    Add(Args),

    /// Product of expressions: a * b * c * ...
    ///
    /// Invariant: at least 2 arguments, at most one numeric.
    Mul(Args),

    /// Power expression: base^exp.
    Pow {
        /// The base of the power.
        base: Expr,
        /// The exponent.
        exp: Expr,
    },

    /// Negation: -expr.
    Neg(Expr),

    /// Division: numerator / denominator.
    Div {
        /// The numerator.
        num: Expr,
        /// The denominator.
        den: Expr,
    },

    /// A function application: f(arg).
    Function {
        /// The function applied.
        func: Function,
        /// The argument.
        arg: Expr,
    },
}

impl ExprNode {
    /// Returns true if this node is an atom (no children).
    #[must_use]
    pub fn is_atom(&self) -> bool {
        matches!(self, ExprNode::Number(_) | ExprNode::Symbol(_))
    }

    /// Returns the children of this node.
    #[must_use]
    pub fn children(&self) -> Args {
        match self {
            ExprNode::Number(_) | ExprNode::Symbol(_) => SmallVec::new(),
            ExprNode::Add(args) | ExprNode::Mul(args) => args.clone(),
            ExprNode::Pow { base, exp } => smallvec::smallvec![base.clone(), exp.clone()],
            ExprNode::Neg(arg) | ExprNode::Function { arg, .. } => {
                smallvec::smallvec![arg.clone()]
            }
            ExprNode::Div { num, den } => smallvec::smallvec![num.clone(), den.clone()],
        }
    }
}

/// An immutable symbolic expression.
///
/// Equality is structural. Cloning shares the underlying tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Expr(Arc<ExprNode>);

impl Expr {
    fn from_node(node: ExprNode) -> Self {
        Self(Arc::new(node))
    }

    /// Returns the root node.
    #[must_use]
    pub fn node(&self) -> &ExprNode {
        &self.0
    }

    /// Returns true if both handles share the same tree.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    // === Constructors ===

    /// Creates a numeric expression.
    pub fn number(n: impl Into<Number>) -> Self {
        Self::from_node(ExprNode::Number(n.into()))
    }

    /// Creates a symbol expression.
    pub fn symbol(symbol: impl Into<Symbol>) -> Self {
        Self::from_node(ExprNode::Symbol(symbol.into()))
    }

    /// Creates a sum, flattening nested sums and folding numeric terms.
    pub fn sum(terms: impl IntoIterator<Item = Expr>) -> Self {
        let mut constant = Number::Integer(0);
        let mut args = Args::new();
        for term in terms {
            match term.node() {
                ExprNode::Number(n) => constant = constant + *n,
                ExprNode::Add(inner) => {
                    for t in inner {
                        match t.as_number() {
                            Some(n) => constant = constant + n,
                            None => args.push(t.clone()),
                        }
                    }
                }
                _ => args.push(term),
            }
        }
        if !constant.is_zero() || args.is_empty() {
            args.push(Self::number(constant));
        }
        if args.len() == 1 {
            return args.remove(0);
        }
        Self::from_node(ExprNode::Add(args))
    }

    /// Creates a product, flattening nested products and folding numeric factors.
    pub fn product(factors: impl IntoIterator<Item = Expr>) -> Self {
        let mut constant = Number::Integer(1);
        let mut args = Args::new();
        for factor in factors {
            match factor.node() {
                ExprNode::Number(n) => constant = constant * *n,
                ExprNode::Mul(inner) => {
                    for f in inner {
                        match f.as_number() {
                            Some(n) => constant = constant * n,
                            None => args.push(f.clone()),
                        }
                    }
                }
                _ => args.push(factor),
            }
        }
        if constant.is_zero() {
            return Self::number(constant);
        }
        if !constant.is_one() || args.is_empty() {
            args.insert(0, Self::number(constant));
        }
        if args.len() == 1 {
            return args.remove(0);
        }
        Self::from_node(ExprNode::Mul(args))
    }

    /// Creates `self ^ exp`.
    #[must_use]
    pub fn pow(self, exp: impl Into<Expr>) -> Self {
        let exp = exp.into();
        if let (Some(b), Some(e)) = (self.as_number(), exp.as_number()) {
            if let Some(n) = b.checked_pow(e) {
                return Self::number(n);
            }
        }
        match exp.as_number() {
            Some(e) if e.is_exact() && e.is_one() => self,
            Some(e) if e.is_exact() && e.is_zero() => Self::number(1),
            _ => Self::from_node(ExprNode::Pow { base: self, exp }),
        }
    }

    /// Creates `-self`.
    #[must_use]
    pub fn negate(self) -> Self {
        match self.node() {
            ExprNode::Number(n) => Self::number(-*n),
            ExprNode::Neg(inner) => inner.clone(),
            _ => Self::from_node(ExprNode::Neg(self)),
        }
    }

    /// Creates `num / den`. Division by an exact zero stays symbolic.
    pub fn quotient(num: impl Into<Expr>, den: impl Into<Expr>) -> Self {
        let (num, den) = (num.into(), den.into());
        if let (Some(a), Some(b)) = (num.as_number(), den.as_number()) {
            if let Some(n) = a.checked_div(b) {
                return Self::number(n);
            }
        }
        match den.as_number() {
            Some(d) if d.is_exact() && d.is_one() => num,
            _ => Self::from_node(ExprNode::Div { num, den }),
        }
    }

    /// Applies an elementary function.
    #[must_use]
    pub fn apply(func: Function, arg: impl Into<Expr>) -> Self {
        let arg = arg.into();
        if let Some(n) = arg.as_number().and_then(|x| func.eval(x)) {
            return Self::number(n);
        }
        Self::from_node(ExprNode::Function { func, arg })
    }

    /// Creates `sin(self)`.
    #[must_use]
    pub fn sin(self) -> Self {
        Self::apply(Function::Sin, self)
    }

    /// Creates `cos(self)`.
    #[must_use]
    pub fn cos(self) -> Self {
        Self::apply(Function::Cos, self)
    }

    /// Creates `exp(self)`.
    #[must_use]
    pub fn exp(self) -> Self {
        Self::apply(Function::Exp, self)
    }

    /// Creates `sqrt(self)`.
    #[must_use]
    pub fn sqrt(self) -> Self {
        Self::apply(Function::Sqrt, self)
    }

    /// Creates `tan(self)`.
    #[must_use]
    pub fn tan(self) -> Self {
        Self::apply(Function::Tan, self)
    }

    /// Creates `ln(self)`.
    #[must_use]
    pub fn ln(self) -> Self {
        Self::apply(Function::Ln, self)
    }

    /// Creates `abs(self)`.
    #[must_use]
    pub fn abs(self) -> Self {
        Self::apply(Function::Abs, self)
    }

    // === Queries ===

    /// Returns the number if this expression is a numeric literal.
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self.node() {
            ExprNode::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the symbol if this expression is a bare symbol.
    #[must_use]
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self.node() {
            ExprNode::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true if any symbol occurs in this expression.
    #[must_use]
    pub fn has_free_symbols(&self) -> bool {
        match self.node() {
            ExprNode::Number(_) => false,
            ExprNode::Symbol(_) => true,
            node => node.children().iter().any(Expr::has_free_symbols),
        }
    }

    /// Returns the set of symbols occurring in this expression.
    #[must_use]
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        let mut stack = vec![self];
        while let Some(expr) = stack.pop() {
            match expr.node() {
                ExprNode::Number(_) => {}
                ExprNode::Symbol(s) => {
                    symbols.insert(s.clone());
                }
                ExprNode::Add(args) | ExprNode::Mul(args) => stack.extend(args.iter()),
                ExprNode::Pow { base, exp } => stack.extend([base, exp]),
                ExprNode::Div { num, den } => stack.extend([num, den]),
                ExprNode::Neg(arg) | ExprNode::Function { arg, .. } => stack.push(arg),
            }
        }
        symbols
    }

    // === Substitution ===

    /// Rebuilds this expression with each direct child replaced by `f(child)`.
    ///
    /// Atoms are returned as-is. If `f` returns every child unchanged (by
    /// pointer), `self` is shared instead of rebuilt; otherwise the node is
    /// rebuilt through the folding constructors.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`.
    pub fn try_map_children<E, F>(&self, f: &mut F) -> Result<Expr, E>
    where
        F: FnMut(&Expr) -> Result<Expr, E>,
    {
        let rebuilt = match self.node() {
            ExprNode::Number(_) | ExprNode::Symbol(_) => None,
            ExprNode::Add(args) => {
                let (args, changed) = map_all(args, f)?;
                changed.then(|| Self::sum(args))
            }
            ExprNode::Mul(args) => {
                let (args, changed) = map_all(args, f)?;
                changed.then(|| Self::product(args))
            }
            ExprNode::Pow { base, exp } => {
                let (b, e) = (f(base)?, f(exp)?);
                (!b.ptr_eq(base) || !e.ptr_eq(exp)).then(|| b.pow(e))
            }
            ExprNode::Neg(arg) => {
                let a = f(arg)?;
                (!a.ptr_eq(arg)).then(|| a.negate())
            }
            ExprNode::Div { num, den } => {
                let (n, d) = (f(num)?, f(den)?);
                (!n.ptr_eq(num) || !d.ptr_eq(den)).then(|| Self::quotient(n, d))
            }
            ExprNode::Function { func, arg } => {
                let a = f(arg)?;
                (!a.ptr_eq(arg)).then(|| Self::apply(*func, a))
            }
        };
        Ok(rebuilt.unwrap_or_else(|| self.clone()))
    }

    /// Replaces symbols using a fallible lookup.
    ///
    /// The lookup returns `Ok(None)` to leave a symbol untouched. Subtrees
    /// without replacements are shared with `self`, and numeric operands are
    /// folded while rebuilding.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `lookup`.
    pub fn try_substitute<E, F>(&self, lookup: &mut F) -> Result<Expr, E>
    where
        F: FnMut(&Symbol) -> Result<Option<Expr>, E>,
    {
        match self.node() {
            ExprNode::Symbol(s) => Ok(lookup(s)?.unwrap_or_else(|| self.clone())),
            _ => self.try_map_children(&mut |child: &Expr| child.try_substitute(lookup)),
        }
    }

    /// Replaces symbols using an infallible lookup.
    #[must_use]
    pub fn substitute<F>(&self, mut lookup: F) -> Expr
    where
        F: FnMut(&Symbol) -> Option<Expr>,
    {
        let result: Result<Expr, Infallible> = self.try_substitute(&mut |s: &Symbol| Ok(lookup(s)));
        match result {
            Ok(expr) => expr,
            Err(never) => match never {},
        }
    }

    /// Replaces a single symbol.
    #[must_use]
    pub fn subs(&self, symbol: &Symbol, value: impl Into<Expr>) -> Expr {
        let value = value.into();
        self.substitute(|s| (s == symbol).then(|| value.clone()))
    }
}

fn map_all<E, F>(args: &Args, f: &mut F) -> Result<(Args, bool), E>
where
    F: FnMut(&Expr) -> Result<Expr, E>,
{
    let mut changed = false;
    let mut out = Args::with_capacity(args.len());
    for arg in args {
        let new = f(arg)?;
        changed |= !new.ptr_eq(arg);
        out.push(new);
    }
    Ok((out, changed))
}

impl From<Number> for Expr {
    fn from(n: Number) -> Self {
        Self::number(n)
    }
}

impl From<i64> for Expr {
    fn from(n: i64) -> Self {
        Self::number(n)
    }
}

impl From<i32> for Expr {
    fn from(n: i32) -> Self {
        Self::number(n)
    }
}

impl From<f64> for Expr {
    fn from(x: f64) -> Self {
        Self::number(x)
    }
}

impl From<Symbol> for Expr {
    fn from(s: Symbol) -> Self {
        Self::symbol(s)
    }
}

impl From<&Symbol> for Expr {
    fn from(s: &Symbol) -> Self {
        Self::symbol(s.clone())
    }
}

/// A string converts to the symbol of that name.
impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}
