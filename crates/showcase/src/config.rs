use label_types::AppConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// Path to the config file, relative to the project root.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` and store it in the global `OnceLock`. Only the first
/// call has effect.
///
/// A missing or unparseable file leaves the default theme in place.
pub fn load_config() {
    CONFIG.get_or_init(|| match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match AppConfig::from_toml_str(&contents) {
            Ok(config) => {
                tracing::info!(path = CONFIG_PATH, "loaded theme config");
                config
            }
            Err(e) => {
                tracing::warn!(path = CONFIG_PATH, error = %e, "failed to parse config, using default theme");
                AppConfig::default()
            }
        },
        Err(e) => {
            tracing::warn!(path = CONFIG_PATH, error = %e, "config not found, using default theme");
            AppConfig::default()
        }
    });
}

/// The loaded config, or defaults if `load_config()` hasn't run.
pub fn app_config() -> AppConfig {
    CONFIG.get().cloned().unwrap_or_default()
}
