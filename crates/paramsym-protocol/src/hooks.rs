//! The hooks a domain object implements to take part in the protocol.

use std::any::Any;
use std::collections::BTreeSet;
use std::fmt;

use paramsym_core::Symbol;
use paramsym_resolver::{ParamResolver, ResolveError};

use crate::value::Value;

/// An object that can be parameterized by symbols and resolved by a
/// [`ParamResolver`].
///
/// Every hook is optional. A hook that is not overridden, or that returns
/// `None`, has no opinion: the dispatcher then derives an answer from a
/// sibling hook or falls back to a default. `None` is never the same as an
/// empty answer: `Some(BTreeSet::new())` states that the object has no
/// parameters, and the dispatcher will not second-guess it.
///
/// The dispatcher only ever looks at these hooks; it never inspects the
/// object's fields. Implementations usually delegate to the free functions
/// of [`crate::protocol`] for the values they hold.
pub trait Parameterizable: DynEq + fmt::Debug + Send + Sync {
    /// Whether the object holds symbols that still need resolution.
    fn is_parameterized(&self) -> Option<bool> {
        None
    }

    /// Names of the parameters that need resolution.
    ///
    /// Should be empty iff [`Parameterizable::is_parameterized`] is false.
    fn parameter_names(&self) -> Option<BTreeSet<String>> {
        None
    }

    /// Symbols of the parameters that need resolution.
    ///
    /// Should be empty iff [`Parameterizable::is_parameterized`] is false.
    fn parameter_symbols(&self) -> Option<BTreeSet<Symbol>> {
        None
    }

    /// Returns a copy of the object with its parameters resolved.
    ///
    /// The hook owns building the new value, normally a new instance of the
    /// implementing type wrapped in [`Value::Object`].
    ///
    /// # Errors
    ///
    /// Whatever the hook or the resolver reports; the dispatcher passes it
    /// through unchanged.
    fn resolve_parameters(&self, _resolver: &ParamResolver) -> Result<Option<Value>, ResolveError> {
        Ok(None)
    }
}

/// Type-erased equality, implemented for every `PartialEq` type.
pub trait DynEq: Any {
    /// Upcasts to [`Any`].
    fn as_any(&self) -> &dyn Any;

    /// Compares with a value of unknown type; false if the types differ.
    fn dyn_eq(&self, other: &dyn Any) -> bool;
}

impl<T: Any + PartialEq> DynEq for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn dyn_eq(&self, other: &dyn Any) -> bool {
        other.downcast_ref::<T>().is_some_and(|other| self == other)
    }
}
