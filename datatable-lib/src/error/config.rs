//! Configuration error types

/// Error information for an invalid [`TableConfig`](crate::config::TableConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The row key path is empty or contains an empty segment.
    #[error("Invalid row key path '{0}'")]
    InvalidRowKey(String),

    /// The default page size is zero.
    #[error("Page size must be greater than zero")]
    ZeroPageSize,
}
