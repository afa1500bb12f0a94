//! Table setup errors

use super::ConfigError;

/// Errors raised while setting up a table.
///
/// These indicate a programming error on the caller's side (bad column
/// definitions, inconsistent configuration). Data-shape problems such as a
/// missing nested field never produce an error; they render as empty cells.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// Two columns resolved to the same identifier.
    #[error("Duplicate column id '{id}' (columns {first} and {second})")]
    DuplicateColumn {
        id: String,
        first: usize,
        second: usize,
    },

    /// A column has neither an explicit id nor an accessor path.
    #[error("Column {index} ('{header}') has no id and no accessor path")]
    MissingColumnId { index: usize, header: String },

    /// A column's minimum width exceeds its maximum width.
    #[error("Column '{id}' has min width {min} greater than max width {max}")]
    InvalidWidth { id: String, min: u16, max: u16 },

    /// The table configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TableError {
    /// Creates a duplicate column error.
    pub fn duplicate_column(id: impl Into<String>, first: usize, second: usize) -> Self {
        Self::DuplicateColumn {
            id: id.into(),
            first,
            second,
        }
    }

    /// Returns the offending column id, if the error concerns a single column.
    pub fn column_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateColumn { id, .. } | Self::InvalidWidth { id, .. } => Some(id),
            Self::MissingColumnId { .. } | Self::Config(_) => None,
        }
    }
}

/// Result alias for table setup operations.
pub type Result<T> = std::result::Result<T, TableError>;
