//! Typed cell access errors

/// Error returned by the typed getters on [`Record`](crate::model::Record).
///
/// A `Null` value is not an error: getters return `Ok(None)` for it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    #[error("No field '{name}'")]
    Missing { name: String },

    #[error("Field '{name}' holds {actual}, not {expected}")]
    TypeMismatch {
        name: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    pub fn missing(name: impl Into<String>) -> Self {
        Self::Missing { name: name.into() }
    }

    pub fn type_mismatch(name: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Name of the field the getter was asked for.
    pub fn name(&self) -> &str {
        match self {
            Self::Missing { name } | Self::TypeMismatch { name, .. } => name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(FieldError::missing("age").to_string(), "No field 'age'");
        assert_eq!(
            FieldError::type_mismatch("age", "int", "string").to_string(),
            "Field 'age' holds string, not int"
        );
        assert_eq!(FieldError::type_mismatch("age", "int", "string").name(), "age");
    }
}
