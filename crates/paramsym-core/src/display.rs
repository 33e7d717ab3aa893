//! Infix formatting for expressions.

use std::fmt;

use crate::expr::{Expr, ExprNode};
use crate::number::Number;

/// Binding strength used to decide where parentheses go.
fn precedence(node: &ExprNode) -> u8 {
    match node {
        ExprNode::Add(_) => 1,
        ExprNode::Mul(_) | ExprNode::Div { .. } => 2,
        ExprNode::Neg(_) => 3,
        ExprNode::Pow { .. } => 4,
        ExprNode::Number(n) if n.is_negative() => 3,
        ExprNode::Number(_) | ExprNode::Symbol(_) | ExprNode::Function { .. } => 5,
    }
}

/// The leading coefficient of a product, if it is a negative number.
fn negative_coefficient(factors: &[Expr]) -> Option<Number> {
    factors
        .first()
        .and_then(Expr::as_number)
        .filter(|n| n.is_negative())
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expr, min: u8) -> fmt::Result {
    if precedence(expr.node()) < min {
        write!(f, "({expr})")
    } else {
        write!(f, "{expr}")
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            ExprNode::Number(n) => write!(f, "{n}"),
            ExprNode::Symbol(s) => write!(f, "{s}"),
            ExprNode::Add(args) => {
                for (i, term) in args.iter().enumerate() {
                    match term.node() {
                        ExprNode::Neg(inner) if i > 0 => {
                            f.write_str(" - ")?;
                            write_operand(f, inner, 2)?;
                        }
                        ExprNode::Number(n) if i > 0 && n.is_negative() => {
                            write!(f, " - {}", -*n)?;
                        }
                        ExprNode::Mul(factors) if i > 0 => match negative_coefficient(factors) {
                            Some(c) => {
                                f.write_str(" - ")?;
                                let rest = factors[1..].iter().cloned();
                                let flipped =
                                    Expr::product(std::iter::once(Expr::number(-c)).chain(rest));
                                write_operand(f, &flipped, 2)?;
                            }
                            None => {
                                f.write_str(" + ")?;
                                write_operand(f, term, 1)?;
                            }
                        },
                        _ => {
                            if i > 0 {
                                f.write_str(" + ")?;
                            }
                            write_operand(f, term, 1)?;
                        }
                    }
                }
                Ok(())
            }
            ExprNode::Mul(args) => {
                for (i, factor) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str("*")?;
                    }
                    write_operand(f, factor, 3)?;
                }
                Ok(())
            }
            ExprNode::Div { num, den } => {
                write_operand(f, num, 2)?;
                f.write_str("/")?;
                write_operand(f, den, 3)
            }
            ExprNode::Neg(arg) => {
                f.write_str("-")?;
                write_operand(f, arg, 3)
            }
            ExprNode::Pow { base, exp } => {
                write_operand(f, base, 5)?;
                f.write_str("^")?;
                write_operand(f, exp, 5)
            }
            ExprNode::Function { func, arg } => write!(f, "{}({arg})", func.name()),
        }
    }
}
