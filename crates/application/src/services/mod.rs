mod subnet_resolver;

pub use subnet_resolver::SubnetResolver;
