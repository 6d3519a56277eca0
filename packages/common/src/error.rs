use thiserror::Error;

/// A JSON value that does not fit the config shape it was read as
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    #[error("Expected {expected} for '{field}', found {found}")]
    UnexpectedValue {
        field: String,
        expected: String,
        found: String,
    },

    #[error("Missing field '{field}'")]
    MissingField { field: String },
}

impl ShapeError {
    pub fn unexpected(field: impl Into<String>, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::UnexpectedValue {
            field: field.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}
