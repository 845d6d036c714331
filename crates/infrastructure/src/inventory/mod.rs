pub mod lookup;
pub mod matcher;

pub use lookup::{Inventory, InventorySubnetLookup};
pub use matcher::{matches_filters, FilterMatcher, ValuePattern};
