//! Generated class identifiers.

use serde::Serialize;

use crate::hash::RuleHash;

/// A class name produced by the compiler.
///
/// Class names are derived from the [`RuleHash`] of the rule they name, so the
/// same styles always produce the same class within a running process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClassName(String);

impl ClassName {
    /// Builds the class name for a rule: `{prefix}-{hash}` followed by one
    /// `-{label}` segment per label.
    pub(crate) fn generate(prefix: &str, hash: RuleHash, labels: &[String]) -> Self {
        let mut name = format!("{}-{}", prefix, hash);
        for label in labels {
            name.push('-');
            name.push_str(label);
        }
        Self(name)
    }

    /// Returns the class name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the class name as a CSS selector (`.name`).
    pub fn selector(&self) -> String {
        format!(".{}", self.0)
    }
}

impl std::fmt::Display for ClassName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClassName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClassName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ClassName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<ClassName> for String {
    fn from(name: ClassName) -> Self {
        name.0
    }
}

impl PartialEq<str> for ClassName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ClassName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
