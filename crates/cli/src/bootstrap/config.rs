use subnet_resolver_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        cache_ttl_secs = config.resolver.cache_ttl_secs,
        cleanup_interval_secs = config.resolver.cleanup_interval_secs,
        inventory = config.inventory.path.as_deref().unwrap_or("none"),
        "Configuration loaded"
    );

    Ok(config)
}
