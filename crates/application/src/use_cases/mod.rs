mod resolve_subnets;

pub use resolve_subnets::ResolveSubnetsUseCase;
