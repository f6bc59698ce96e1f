use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum PaginationError {
    #[error("invalid pagination request: {0}")]
    InvalidRequest(String),
    #[error("failed to build statement: {0}")]
    StatementBuild(String),
    #[error("data source query failed: {0}")]
    DataSource(#[source] sqlx::Error),
    #[error("failed to decode row: {0}")]
    Mapping(#[source] sqlx::Error),
}

impl PaginationError {
    /// Stable label used for metrics and log fields.
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            PaginationError::InvalidRequest(_) => "invalid_request",
            PaginationError::StatementBuild(_) => "statement_build",
            PaginationError::DataSource(_) => "data_source",
            PaginationError::Mapping(_) => "mapping",
        }
    }
}
