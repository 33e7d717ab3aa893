//! Opt-in consistency checks for hook implementations.
//!
//! Dispatch trusts whatever a hook reports. [`validate`] is for the authors
//! of those hooks: it asks all three queries and checks that the answers
//! agree with each other the way built-in values always do.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::protocol::{is_parameterized, parameter_names, parameter_symbols};
use crate::value::Value;

/// A disagreement between the answers a value gives to the protocol queries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolViolation {
    #[error("value reports parameters {symbols:?} but is not parameterized")]
    UnflaggedParameters { symbols: BTreeSet<String> },

    #[error("value is parameterized but reports no parameters")]
    MissingParameters,

    #[error("parameter names {names:?} do not match parameter symbols {symbols:?}")]
    NameMismatch {
        names: BTreeSet<String>,
        symbols: BTreeSet<String>,
    },
}

/// Checks that a value's protocol answers are consistent.
///
/// The symbol set must be empty iff the value is not parameterized, and the
/// names must be exactly the names of the symbols. Sequence elements are
/// checked first, so the innermost offender is reported.
///
/// # Errors
///
/// Returns the first [`ProtocolViolation`] found.
pub fn validate(value: &Value) -> Result<(), ProtocolViolation> {
    if let Some(items) = value.as_sequence() {
        items.iter().try_for_each(validate)?;
    }

    let symbols: BTreeSet<String> = parameter_symbols(value, true)
        .iter()
        .map(|s| s.name().to_owned())
        .collect();
    let names = parameter_names(value, true);

    match (is_parameterized(value), symbols.is_empty()) {
        (false, false) => return Err(ProtocolViolation::UnflaggedParameters { symbols }),
        (true, true) => return Err(ProtocolViolation::MissingParameters),
        _ => {}
    }
    if names != symbols {
        return Err(ProtocolViolation::NameMismatch { names, symbols });
    }
    Ok(())
}
