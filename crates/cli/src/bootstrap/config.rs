use mailscreen_domain::{CliOverrides, Config};
use tracing::info;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    info!(
        config_file = config_path.unwrap_or("default"),
        free_tier = config.api.free_tier,
        privacy_mode = config.api.privacy_mode,
        "Configuration loaded"
    );

    Ok(config)
}
