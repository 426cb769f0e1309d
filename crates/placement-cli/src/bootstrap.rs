use anyhow::Context;
use placement_config::PlacementConfig;

/// Load `.env` from the working directory, then the layered config.
///
/// An incomplete backend section is fatal here, before any request is made.
pub fn load_config() -> anyhow::Result<PlacementConfig> {
    load_dotenv()?;

    let config = PlacementConfig::load().context("failed to load placement config")?;
    config.require_backend().context(
        "backend is not configured; set PLACEMENT_BACKEND__URL and PLACEMENT_BACKEND__ANON_KEY",
    )?;
    Ok(config)
}

fn load_dotenv() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().context("failed to determine current directory")?;
    let env_path = cwd.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    }
    Ok(())
}
