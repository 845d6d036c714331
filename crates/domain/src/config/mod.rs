//! Configuration module for the subnet resolver
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: Cache TTL, sweep interval and lookup timeout
//! - `inventory`: Location of the subnet inventory consulted on cache misses
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod inventory;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use inventory::InventoryConfig;
pub use logging::LoggingConfig;
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config};
