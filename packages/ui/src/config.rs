//! Platform-appropriate configuration loading.
//!
//! - **Web** (WASM): compiled-in defaults; the browser has no config file.
//! - **Desktop** (native): `<config_dir>/user-manager/user-manager.toml` if it
//!   exists, then environment overrides from [`api::config::apply_env`].

use store::UsersConfig;

/// Load the effective configuration for this platform.
pub fn load_config() -> UsersConfig {
    #[cfg(not(target_arch = "wasm32"))]
    let config = read_config_file().unwrap_or_default();
    #[cfg(target_arch = "wasm32")]
    let config = UsersConfig::default();

    api::config::apply_env(config)
}

/// Where the desktop build looks for its config file.
#[cfg(not(target_arch = "wasm32"))]
pub fn config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|dir| dir.join("user-manager").join(UsersConfig::filename()))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config_file() -> Option<UsersConfig> {
    let path = config_path()?;
    let text = std::fs::read_to_string(&path).ok()?;
    match UsersConfig::from_toml(&text) {
        Ok(config) => {
            tracing::info!("Loaded config from {}", path.display());
            Some(config)
        }
        Err(e) => {
            tracing::warn!("Ignoring invalid config {}: {e}", path.display());
            None
        }
    }
}
