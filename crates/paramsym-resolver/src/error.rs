//! Errors raised while resolving parameters.

use std::error::Error;

use thiserror::Error;

/// Errors that can occur during parameter resolution.
///
/// The protocol dispatcher never produces these itself: they come from a
/// resolver or from a domain object's resolve hook, and are propagated to
/// the caller unchanged.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("evaluating {key} would lead to infinite recursion")]
    Recursion { key: String },

    #[error(transparent)]
    Hook(Box<dyn Error + Send + Sync + 'static>),
}

impl ResolveError {
    /// Wraps an error raised by a resolve hook.
    pub fn hook(err: impl Into<Box<dyn Error + Send + Sync + 'static>>) -> Self {
        ResolveError::Hook(err.into())
    }
}
