//! # paramsym-resolver
//!
//! Parameter resolvers for paramsym.
//!
//! A [`ParamResolver`] binds parameter names (or whole expressions) to
//! numbers or further expressions and substitutes them into an [`Expr`].
//! Resolvers are immutable and cheap to clone; they can be built from any
//! mapping-like input through `From`/`FromIterator`.
//!
//! [`Expr`]: paramsym_core::Expr

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod key;
pub mod resolver;

#[cfg(test)]
mod proptests;

pub use error::ResolveError;
pub use key::ParamKey;
pub use resolver::{ParamResolver, ResolverOptions};
