//! Subnet Resolver Infrastructure Layer
pub mod cache;
pub mod inventory;

pub use cache::{CacheMetrics, TtlSubnetCache};
pub use inventory::InventorySubnetLookup;
