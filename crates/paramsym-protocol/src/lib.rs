//! # paramsym-protocol
//!
//! The parameterization protocol: a uniform way to ask any [`Value`]
//! whether it holds unresolved symbols, which ones, and for a copy with
//! those symbols replaced.
//!
//! Values are classified in a fixed priority order:
//! - symbolic expressions answer from their free symbols
//! - lists and tuples answer element-wise and keep their kind on resolution
//! - domain objects answer through the optional hooks of [`Parameterizable`]
//! - everything else gets a default (not parameterized, no parameters,
//!   resolved to itself)
//!
//! ## Example
//!
//! ```rust
//! use paramsym_protocol::{parameter_names, resolve_parameters, Value};
//!
//! let v = Value::tuple([Value::symbol("x"), Value::from(5)]);
//! assert_eq!(parameter_names(&v, true).len(), 1);
//!
//! let resolved = resolve_parameters(v, [("x", 2.0)]).unwrap();
//! assert_eq!(resolved, Value::tuple([Value::from(2.0), Value::from(5)]));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod hooks;
pub mod protocol;
pub mod validate;
pub mod value;

#[cfg(test)]
mod fixtures;
#[cfg(test)]
mod proptests;

pub use hooks::{DynEq, Parameterizable};
pub use protocol::{is_parameterized, parameter_names, parameter_symbols, resolve_parameters};
pub use validate::{validate, ProtocolViolation};
pub use value::{Object, Value};
