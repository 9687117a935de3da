//! Access check error types.

use gate_registry::RegistryError;

/// Access check error.
///
/// A deny verdict is not an error; see [`Verdict`](crate::Verdict).
#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    /// The credential has no matching client. Callers respond with a
    /// successful deny, not a server error.
    #[error("client not found")]
    NotFound,

    /// The registry itself failed; callers must respond with a server
    /// error, not a decision.
    #[error("registry: {0}")]
    Registry(RegistryError),
}

impl From<RegistryError> for AccessError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotFound => Self::NotFound,
            other => Self::Registry(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_not_found_maps_to_not_found() {
        assert!(matches!(
            AccessError::from(RegistryError::NotFound),
            AccessError::NotFound
        ));
    }

    #[test]
    fn registry_backend_failure_stays_an_error() {
        assert!(matches!(
            AccessError::from(RegistryError::backend("connection refused")),
            AccessError::Registry(RegistryError::Backend(_))
        ));
    }
}
