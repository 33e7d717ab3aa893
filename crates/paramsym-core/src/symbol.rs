//! Named symbolic placeholders.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// A named placeholder for a value supplied later.
///
/// Two symbols are equal if and only if their names are equal. Cloning is
/// cheap: the name is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(Arc<str>);

impl Symbol {
    /// Creates a symbol with the given name.
    #[must_use]
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the name of this symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the shared name, without copying it.
    #[must_use]
    pub fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.0)
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for Symbol {
    fn from(name: String) -> Self {
        Self(Arc::from(name))
    }
}

impl From<Arc<str>> for Symbol {
    fn from(name: Arc<str>) -> Self {
        Self(name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.0)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_identity_by_name() {
        let a = Symbol::new("theta");
        let b = Symbol::from(String::from("theta"));
        let c = Symbol::new("phi");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.name(), "theta");
    }

    #[test]
    fn test_ordered_sets_dedupe() {
        let set: BTreeSet<Symbol> = ["b", "a", "b"].into_iter().map(Symbol::from).collect();
        let names: Vec<&str> = set.iter().map(Symbol::name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbol::new("x").to_string(), "x");
        assert_eq!(format!("{:?}", Symbol::new("x")), "Symbol(x)");
    }
}
