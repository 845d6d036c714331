mod subnet_cache;
mod subnet_lookup;

pub use subnet_cache::{CacheStats, SubnetCache};
pub use subnet_lookup::{deadline_after, LookupContext, SubnetLookup};
