//! Environment overrides for [`UsersConfig`].

use store::UsersConfig;

/// Environment variable that replaces `[source] endpoint`.
pub const ENDPOINT_ENV: &str = "USER_MANAGER_ENDPOINT";

/// Apply environment overrides on top of `config`.
///
/// On native targets a `.env` file is loaded first. The browser has no
/// process environment, so on WASM the config is returned unchanged.
pub fn apply_env(config: UsersConfig) -> UsersConfig {
    #[cfg(not(target_arch = "wasm32"))]
    {
        dotenvy::dotenv().ok();
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => {
                config.with_endpoint(endpoint.trim())
            }
            _ => config,
        }
    }
    #[cfg(target_arch = "wasm32")]
    {
        config
    }
}
