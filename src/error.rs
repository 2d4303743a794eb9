//! Errors raised at the fallible edges of the compiler.
//!
//! Compiling styles never fails: malformed statements are dropped and unknown
//! compose references resolve to nothing. Only building inputs and options can
//! be rejected.

/// Error returned when a style input or compiler option is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StyleError {
    /// A style object was built from JSON that is not an object.
    #[error("style objects must be built from a JSON object, got {found}")]
    NotAnObject { found: String },
    /// The class name prefix is not a valid CSS identifier.
    #[error("class prefix '{prefix}' is not a valid CSS identifier")]
    InvalidPrefix { prefix: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_an_object_error_display() {
        let err = StyleError::NotAnObject {
            found: "array".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("JSON object"));
        assert!(msg.contains("array"));
    }

    #[test]
    fn test_invalid_prefix_error_display() {
        let err = StyleError::InvalidPrefix {
            prefix: "9lives".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "class prefix '9lives' is not a valid CSS identifier"
        );
    }
}
