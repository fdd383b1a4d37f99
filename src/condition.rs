//! Name filter conditions for tree walking

use std::collections::HashSet;

use regex::Regex;

use crate::error::{Error, Result};

/// A filter over a single directory or file name.
///
/// Walk options take conditions as `Option<Condition>`; `None` means no
/// filter. A condition is evaluated against the entry's base name, never
/// against a full path.
#[derive(Debug, Clone)]
pub enum Condition {
    /// Exact name equality.
    Name(String),
    /// Membership in a set of names.
    AnyOf(HashSet<String>),
    /// Regular-expression test against the name.
    Pattern(Regex),
}

impl Condition {
    /// Build a `Pattern` condition from a regex string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when the pattern does not compile.
    pub fn pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| Error::InvalidArgument(format!("invalid pattern {pattern:?}: {e}")))?;
        Ok(Self::Pattern(regex))
    }

    /// Evaluate this condition against a single name.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Name(exact) => exact == name,
            Self::AnyOf(names) => names.contains(name),
            Self::Pattern(regex) => regex.is_match(name),
        }
    }
}

impl From<&str> for Condition {
    fn from(name: &str) -> Self {
        Self::Name(name.to_owned())
    }
}

impl From<String> for Condition {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<Regex> for Condition {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl From<HashSet<String>> for Condition {
    fn from(names: HashSet<String>) -> Self {
        Self::AnyOf(names)
    }
}

impl<const N: usize> From<[&str; N]> for Condition {
    fn from(names: [&str; N]) -> Self {
        Self::AnyOf(names.iter().map(|n| (*n).to_owned()).collect())
    }
}
