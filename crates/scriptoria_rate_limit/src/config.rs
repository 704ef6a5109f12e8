//! Layered configuration for the completion backend and fallback ladder.
//!
//! Sources, later overriding earlier:
//! 1. Bundled defaults (include_str! from scriptoria.toml)
//! 2. `~/.config/scriptoria/scriptoria.toml`
//! 3. `./scriptoria.toml`
//! 4. `SCRIPTORIA__<SECTION>__<KEY>` environment variables
//!
//! User files are optional and silently skipped when absent.

use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use scriptoria_error::{ConfigError, ScriptoriaResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

/// Bundled default configuration.
const DEFAULT_CONFIG: &str = include_str!("../scriptoria.toml");

/// Completion backend settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct BackendConfig {
    /// Provider name; only "groq" is built in
    provider: String,
    /// Chat completions endpoint
    base_url: String,
    /// Environment variable holding the API key
    api_key_env: String,
    /// Per-request timeout in seconds
    timeout_secs: u64,
}

impl BackendConfig {
    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Fallback ladder settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct FallbackConfig {
    /// Model identifiers, primary first
    models: Vec<String>,
    /// Attempts per model for transient failures
    max_attempts: u32,
    /// Pause between attempts on the same model, in milliseconds
    #[serde(default)]
    retry_delay_ms: u64,
}

/// Top-level Scriptoria configuration.
///
/// # Example
///
/// ```no_run
/// use scriptoria_rate_limit::ScriptoriaConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ScriptoriaConfig::load()?;
/// println!("Primary model: {}", config.fallback().models()[0]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct ScriptoriaConfig {
    /// Backend settings
    backend: BackendConfig,
    /// Fallback ladder settings
    fallback: FallbackConfig,
}

impl ScriptoriaConfig {
    /// Bundled defaults only.
    ///
    /// # Errors
    ///
    /// Returns an error if the bundled file fails to parse.
    pub fn bundled() -> ScriptoriaResult<Self> {
        finish(bundled_builder())
    }

    /// Load configuration from a specific file path, over the bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> ScriptoriaResult<Self> {
        debug!("Loading configuration from file");

        finish(bundled_builder().add_source(File::from(path.as_ref())))
    }

    /// Load configuration with precedence: environment > current dir > home dir > bundled.
    ///
    /// # Errors
    ///
    /// Returns an error if any present source fails to parse.
    #[instrument]
    pub fn load() -> ScriptoriaResult<Self> {
        debug!("Loading configuration with precedence: env > current dir > home dir > bundled defaults");

        let mut builder = bundled_builder();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/scriptoria/scriptoria.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder
            .add_source(File::with_name("scriptoria").required(false))
            .add_source(
                Environment::with_prefix("SCRIPTORIA")
                    .prefix_separator("__")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("fallback.models")
                    .try_parsing(true),
            );

        finish(builder)
    }
}

fn bundled_builder() -> ConfigBuilder<DefaultState> {
    Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
}

fn finish(builder: ConfigBuilder<DefaultState>) -> ScriptoriaResult<ScriptoriaConfig> {
    let config = builder
        .build()
        .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?
        .try_deserialize()
        .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?;
    Ok(config)
}
