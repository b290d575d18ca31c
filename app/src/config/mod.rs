//! Configuration management for the FitTracker client
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code, build mode taken from RUST_ENV)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: FT__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub build: BuildConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// Build mode; development builds render the state debug panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    #[default]
    Development,
    Production,
}

impl BuildMode {
    /// Anything other than `production` counts as development
    pub fn from_env_name(name: &str) -> Self {
        if name.eq_ignore_ascii_case("production") {
            BuildMode::Production
        } else {
            BuildMode::Development
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BuildConfig {
    pub mode: BuildMode,
}

/// User interface timing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long success banners stay up
    pub notice_dismiss_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            notice_dismiss_ms: 3000,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` wins when set
    pub filter: String,
    /// JSON output instead of pretty lines
    pub json: bool,
}

impl LoggingConfig {
    pub fn for_mode(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Development => Self {
                filter: "fittracker_app=debug,fittracker_wasm=debug".to_string(),
                json: false,
            },
            BuildMode::Production => Self {
                filter: "fittracker_app=info,fittracker_wasm=info".to_string(),
                json: true,
            },
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::for_mode(BuildMode::default())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::for_mode(BuildMode::default())
    }
}

impl AppConfig {
    /// Defaults appropriate for the given build mode
    pub fn for_mode(mode: BuildMode) -> Self {
        Self {
            build: BuildConfig { mode },
            ui: UiConfig::default(),
            logging: LoggingConfig::for_mode(mode),
        }
    }

    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with FT__ prefix
    pub fn load() -> Result<Self> {
        let env_name = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let defaults = AppConfig::for_mode(BuildMode::from_env_name(&env_name));
        let config_file = format!("config/{}.toml", env_name);

        let config = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&defaults)?)
            // Load from environment-specific config file
            .add_source(config::File::with_name(&config_file).required(false))
            // Override with environment variables (FT__ prefix)
            // e.g., FT__UI__NOTICE_DISMISS_MS=500 sets ui.notice_dismiss_ms
            .add_source(config::Environment::with_prefix("FT").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Whether the raw state panel is shown on the dashboard
    pub fn debug_panel_enabled(&self) -> bool {
        self.build.mode == BuildMode::Development
    }

    pub fn notice_dismiss(&self) -> Duration {
        Duration::from_millis(self.ui.notice_dismiss_ms)
    }
}
