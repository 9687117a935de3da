//! Registry error types.

/// Registry lookup error.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// No client matches the credential. A business outcome, not a fault;
    /// carries no partial client data.
    #[error("client not found")]
    NotFound,

    /// Backend failure (connectivity, timeout, malformed row).
    #[error("backend error: {0}")]
    Backend(String),
}

impl RegistryError {
    /// Create a backend error from any error type.
    #[inline]
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }
}

impl From<sqlx::Error> for RegistryError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound,
            other => Self::backend(other),
        }
    }
}
