//! Configuration loading and management.
//!
//! Loads planner configuration from `./config.toml` (or
//! `$WAYFARER_CONFIG_PATH`). Environment variables override file values;
//! file values override defaults.
//!
//! Precedence: env vars > config file > defaults.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

// ── Top-level config ────────────────────────────────────────────

/// Planner configuration loaded from TOML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Model gateway tuning (`[gateway]`).
    pub gateway: GatewayConfig,
}

impl PlannerConfig {
    /// Load configuration with precedence: env vars > TOML file > defaults.
    ///
    /// Config file path: `$WAYFARER_CONFIG_PATH` or `./config.toml`.
    /// A missing file is not an error — defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error when the file exists but cannot be parsed, or when
    /// the resulting configuration is invalid.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from_file()?;
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load from TOML file only, no env overrides.
    fn load_from_file() -> Result<Self> {
        let path = Self::config_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                tracing::info!(path = %path.display(), "loading config from file");
                let config: PlannerConfig =
                    toml::from_str(&contents).context("failed to parse config TOML")?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config file found, using defaults");
                Ok(PlannerConfig::default())
            }
            Err(e) => Err(anyhow::anyhow!("failed to read config file: {e}")),
        }
    }

    /// Resolve the config file path.
    fn config_path() -> PathBuf {
        std::env::var("WAYFARER_CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config.toml"))
    }

    /// Apply environment variable overrides (env > config > defaults).
    ///
    /// Takes a resolver function for testability.
    pub fn apply_overrides(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("WAYFARER_TIMEOUT_SECS") {
            match v.parse() {
                Ok(n) => self.gateway.request_timeout_secs = n,
                Err(_) => tracing::warn!(
                    var = "WAYFARER_TIMEOUT_SECS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("WAYFARER_MAX_TOKENS") {
            match v.parse() {
                Ok(n) => self.gateway.max_tokens = n,
                Err(_) => tracing::warn!(
                    var = "WAYFARER_MAX_TOKENS",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }
        if let Some(v) = env("WAYFARER_TEMPERATURE") {
            match v.parse() {
                Ok(n) => self.gateway.temperature = n,
                Err(_) => tracing::warn!(
                    var = "WAYFARER_TEMPERATURE",
                    value = %v,
                    "ignoring invalid env override"
                ),
            }
        }

        // The primary provider honors the conventional OPENAI_BASE_URL
        // for proxy setups.
        if let Some(v) = env("OPENAI_BASE_URL") {
            self.gateway.openai.base_url = v;
        }
        if let Some(v) = env("WAYFARER_OPENAI_MODEL") {
            self.gateway.openai.model = v;
        }
        if let Some(v) = env("WAYFARER_DASHSCOPE_BASE_URL") {
            self.gateway.dashscope.base_url = v;
        }
        if let Some(v) = env("WAYFARER_DASHSCOPE_MODEL") {
            self.gateway.dashscope.model = v;
        }
        if let Some(v) = env("WAYFARER_ANALYSIS_MODEL") {
            self.gateway.analysis_model = v;
        }
    }

    /// Parse a TOML string into config (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error when the TOML cannot be parsed.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        let config: PlannerConfig =
            toml::from_str(toml_str).context("failed to parse config TOML")?;
        Ok(config)
    }

    /// Check invariants the rest of the engine relies on.
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable base URLs or a zero timeout.
    pub fn validate(&self) -> Result<()> {
        if self.gateway.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("gateway timeout must be at least 1 second"));
        }
        for (name, endpoint) in [
            ("openai", &self.gateway.openai),
            ("dashscope", &self.gateway.dashscope),
        ] {
            Url::parse(&endpoint.base_url)
                .with_context(|| format!("invalid {name} base URL: {}", endpoint.base_url))?;
        }
        Ok(())
    }
}

// ── Gateway config ──────────────────────────────────────────────

/// Model gateway tuning (`[gateway]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// Upper bound on one model call, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Output token ceiling — sized for a full multi-day itinerary.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Sampling temperature: creative but bounded.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Primary provider endpoint.
    #[serde(default = "default_openai_endpoint")]
    pub openai: ProviderEndpoint,
    /// Secondary provider endpoint (OpenAI-compatible mode).
    #[serde(default = "default_dashscope_endpoint")]
    pub dashscope: ProviderEndpoint,
    /// Model used for budget analysis on the primary provider.
    #[serde(default = "default_analysis_model")]
    pub analysis_model: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_tokens() -> u32 {
    4000
}

fn default_temperature() -> f64 {
    0.7
}

fn default_openai_endpoint() -> ProviderEndpoint {
    ProviderEndpoint {
        base_url: "https://api.openai.com/v1".to_owned(),
        model: "gpt-3.5-turbo".to_owned(),
    }
}

fn default_dashscope_endpoint() -> ProviderEndpoint {
    ProviderEndpoint {
        base_url: "https://dashscope.aliyuncs.com/compatible-mode/v1".to_owned(),
        model: "qwen-turbo".to_owned(),
    }
}

fn default_analysis_model() -> String {
    "gpt-4-turbo-preview".to_owned()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: default_timeout_secs(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            openai: default_openai_endpoint(),
            dashscope: default_dashscope_endpoint(),
            analysis_model: default_analysis_model(),
        }
    }
}

impl GatewayConfig {
    /// Request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Base URL plus default chat model for one provider.
///
/// When overriding an endpoint in TOML, both fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderEndpoint {
    /// API base, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    /// Fast chat model identifier.
    pub model: String,
}
