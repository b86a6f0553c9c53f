use shared_types::{AppConfig, AppError};
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path of the on-disk override, relative to the working directory.
#[cfg(not(target_arch = "wasm32"))]
const CONFIG_PATH: &str = "config.toml";

/// Parse a `config.toml` document.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    toml::from_str(contents).map_err(|e| AppError::bad_request(format!("Invalid config: {e}")))
}

/// Load the configuration once. `embedded` is the copy compiled into the
/// binary; native builds prefer a `config.toml` in the working directory
/// when one exists. Only the first call has effect.
pub fn load_config(embedded: &str) -> &'static AppConfig {
    CONFIG.get_or_init(|| {
        let source = read_override().unwrap_or_else(|| embedded.to_string());
        match parse_config(&source) {
            Ok(config) => config,
            Err(e) => {
                tracing::error!(error = %e, "Falling back to default configuration");
                AppConfig::default()
            }
        }
    })
}

/// The loaded configuration, or defaults if `load_config` has not run.
pub fn config() -> &'static AppConfig {
    static DEFAULT: OnceLock<AppConfig> = OnceLock::new();
    match CONFIG.get() {
        Some(config) => config,
        None => DEFAULT.get_or_init(AppConfig::default),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn read_override() -> Option<String> {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => {
            tracing::info!(path = CONFIG_PATH, "Using config from disk");
            Some(contents)
        }
        Err(_) => None,
    }
}

#[cfg(target_arch = "wasm32")]
fn read_override() -> Option<String> {
    None
}
