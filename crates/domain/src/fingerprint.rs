use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

use crate::{DomainError, FilterSet};

/// Cache key derived from a filter set's structural content.
///
/// Lowercase hex SHA-256 of the canonical JSON encoding, so it is stable
/// across processes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(Arc<str>);

impl Fingerprint {
    pub fn of(filters: &FilterSet) -> Result<Self, DomainError> {
        let encoded = serde_json::to_vec(filters)
            .map_err(|e| DomainError::FingerprintFailure(e.to_string()))?;
        let digest = Sha256::digest(&encoded);
        Ok(Self(Arc::from(format!("{digest:x}").as_str())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FilterSet {
    pub fn fingerprint(&self) -> Result<Fingerprint, DomainError> {
        Fingerprint::of(self)
    }
}
