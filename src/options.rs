//! Compiler configuration.

use serde::{Deserialize, Serialize};

use crate::error::StyleError;
use crate::util::is_css_identifier;

/// Default prefix for generated class names.
pub const DEFAULT_CLASS_PREFIX: &str = "css";

/// Options controlling how class names are generated.
///
/// Options can be built fluently or deserialized from configuration, where
/// missing fields take their defaults.
///
/// # Example
///
/// ```rust
/// use classy::{Compiler, CompilerOptions};
///
/// let options = CompilerOptions::new().prefix("app").labels(false);
/// let compiler = Compiler::with_options(options).unwrap();
/// assert_eq!(compiler.options().prefix, "app");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompilerOptions {
    /// Prefix for generated class names (`{prefix}-{hash}`).
    pub prefix: String,
    /// Whether `label` directives are appended to class names.
    pub labels: bool,
}

impl CompilerOptions {
    /// Creates options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the class name prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enables or disables labels in class names.
    pub fn labels(mut self, enabled: bool) -> Self {
        self.labels = enabled;
        self
    }

    /// Checks that the options can produce valid class names.
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::InvalidPrefix`] if the prefix is not a CSS identifier.
    pub fn validate(&self) -> Result<(), StyleError> {
        if !is_css_identifier(&self.prefix) {
            return Err(StyleError::InvalidPrefix {
                prefix: self.prefix.clone(),
            });
        }
        Ok(())
    }
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_CLASS_PREFIX.to_string(),
            labels: true,
        }
    }
}
