//! Error taxonomy shared across the crate.

use thiserror::Error;

/// Errors raised while decoding wire objects or reading typed properties.
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A payload failed structural validation against the object model.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A property exists but holds a different kind than the accessor asked
    /// for.
    #[error("Property '{property}' is '{actual}', expected '{expected}'")]
    TypeMismatch {
        property: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// The named property does not exist on the object.
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    /// `first()` was called on an empty result set.
    #[error("Result set is empty")]
    EmptyResult,
}

impl SchemaError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn type_mismatch(
        property: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            property: property.into(),
            expected,
            actual,
        }
    }

    pub fn unknown_property(name: impl Into<String>) -> Self {
        Self::UnknownProperty(name.into())
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_mismatch_names_both_kinds() {
        let err = SchemaError::type_mismatch("Done", "checkbox", "select");
        assert_eq!(
            err.to_string(),
            "Property 'Done' is 'select', expected 'checkbox'"
        );
    }

    #[test]
    fn serde_errors_become_validation() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SchemaError::from(err);
        assert!(matches!(err, SchemaError::Validation(_)));
    }
}
