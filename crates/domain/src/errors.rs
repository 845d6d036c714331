use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// The lookup collaborator failed. `filters` is the concise rendering of
    /// the filter set that was attempted.
    #[error("describing subnets {filters}: {source}")]
    UpstreamFailure {
        filters: String,
        #[source]
        source: Box<DomainError>,
    },

    #[error("no subnets matched selector {selector}")]
    NoMatch { selector: String },

    #[error("Failed to fingerprint filters: {0}")]
    FingerprintFailure(String),

    #[error("Subnet lookup cancelled")]
    Cancelled,

    #[error("Subnet lookup timed out")]
    LookupTimeout,

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Inventory error: {0}")]
    Inventory(String),
}

impl DomainError {
    pub fn upstream(filters: impl Into<String>, source: DomainError) -> Self {
        Self::UpstreamFailure {
            filters: filters.into(),
            source: Box::new(source),
        }
    }
}
