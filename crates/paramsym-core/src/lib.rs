//! # paramsym-core
//!
//! Symbolic atoms and expressions for paramsym.
//!
//! This crate provides:
//! - Named [`Symbol`]s whose identity is their name
//! - Exact-where-possible [`Number`]s
//! - Immutable, structurally shared [`Expr`] trees with free-symbol
//!   extraction and substitution
//!
//! ## Design Principles
//!
//! - **Immutable Values**: substitution returns a new tree and shares every
//!   untouched subtree with the input
//! - **Eager Folding**: numeric operands are combined on construction, so a
//!   fully substituted expression is a single number

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod display;
pub mod expr;
pub mod number;
mod ops;
pub mod symbol;

#[cfg(test)]
mod proptests;

pub use expr::{Args, Expr, ExprNode, Function};
pub use number::Number;
pub use symbol::Symbol;
