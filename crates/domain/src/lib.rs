//! Subnet Resolver Domain Layer
pub mod config;
pub mod errors;
pub mod filter;
pub mod fingerprint;
pub mod selector;
pub mod subnet;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::DomainError;
pub use filter::{build_filters, FilterClause, FilterSet, SelectorTerm};
pub use fingerprint::Fingerprint;
pub use selector::SubnetSelector;
pub use subnet::{summarize_subnets, Subnet};
