//! # paramsym
//!
//! Symbolic parameterization for Rust: defer numeric values to later
//! binding by writing them as symbols, then resolve whole trees of
//! heterogeneous values in one pass.
//!
//! ## Features
//!
//! - **Symbols and Expressions**: immutable, structurally shared trees with
//!   free-symbol extraction and constant-folding substitution
//! - **Resolvers**: immutable bindings from names to numbers or further
//!   expressions, with recursive resolution and cycle detection
//! - **Protocol**: one dispatcher for expressions, lists, tuples and any
//!   domain object implementing [`Parameterizable`](prelude::Parameterizable)
//!
//! ## Quick Start
//!
//! ```rust
//! use paramsym::prelude::*;
//!
//! let theta = Expr::symbol("theta");
//! let v = Value::list([Value::from(theta * 2_i64), Value::from("label")]);
//! assert!(v.is_parameterized());
//!
//! let resolved = v.resolve([("theta", 0.25)]).unwrap();
//! assert_eq!(resolved, Value::list([Value::from(0.5), Value::from("label")]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use paramsym_core as core;
pub use paramsym_protocol as protocol;
pub use paramsym_resolver as resolver;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use paramsym_core::{Expr, Function, Number, Symbol};
    pub use paramsym_protocol::{
        is_parameterized, parameter_names, parameter_symbols, resolve_parameters, validate,
        Object, Parameterizable, ProtocolViolation, Value,
    };
    pub use paramsym_resolver::{ParamKey, ParamResolver, ResolveError, ResolverOptions};
}
