use std::collections::HashMap;

use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use lettre::message::Mailbox;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FROM_ADDRESS: &str = "Sip & Slay <onboarding@resend.dev>";
pub const DEFAULT_TO_ADDRESS: &str = "sipandslayllc@gmail.com";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default = "default_public_dir")]
    pub public_dir: String,
}

fn default_public_dir() -> String {
    "public".to_string()
}

/// Email relay settings. Only empty values count as not configured; a value
/// made of whitespace is still a value.
#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default)]
    pub resend_api_key: Option<String>,
    #[serde(default)]
    pub from_address: Option<String>,
    #[serde(default)]
    pub to_address: Option<String>,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            resend_api_key: None,
            from_address: None,
            to_address: None,
            api_base_url: default_api_base_url(),
        }
    }
}

fn default_api_base_url() -> String {
    sipandslay_contact::DEFAULT_API_BASE_URL.to_string()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl EmailConfig {
    pub fn api_key(&self) -> Option<&str> {
        non_empty(&self.resend_api_key)
    }

    pub fn sender(&self) -> &str {
        non_empty(&self.from_address).unwrap_or(DEFAULT_FROM_ADDRESS)
    }

    pub fn recipient(&self) -> &str {
        non_empty(&self.to_address).unwrap_or(DEFAULT_TO_ADDRESS)
    }

    /// Which secrets were supplied, without their values.
    pub fn presence(&self) -> EnvCheck {
        EnvCheck {
            has_resend_key: self.api_key().is_some(),
            has_to: non_empty(&self.to_address).is_some(),
            has_from: non_empty(&self.from_address).is_some(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EnvCheck {
    pub has_resend_key: bool,
    pub has_to: bool,
    pub has_from: bool,
}

/// Copy shown in page chrome.
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_site_tagline")]
    pub tagline: String,
    #[serde(default = "default_public_email")]
    pub public_email: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_site_tagline(),
            public_email: default_public_email(),
        }
    }
}

fn default_site_name() -> String {
    "Sip & Slay LLC".to_string()
}

fn default_site_tagline() -> String {
    "Luxury Cart Events".to_string()
}

fn default_public_email() -> String {
    DEFAULT_TO_ADDRESS.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Unprefixed variables accepted for existing deployments, and the keys they feed.
const LEGACY_ENV: [(&str, &str); 4] = [
    ("RESEND_API_KEY", "email.resend_api_key"),
    ("CONTACT_TO_EMAIL", "email.to_address"),
    ("CONTACT_FROM_EMAIL", "email.from_address"),
    ("PORT", "server.port"),
];

impl Config {
    /// Load configuration from file and the process environment
    ///
    /// Priority (highest to lowest):
    /// 1. Legacy variables (RESEND_API_KEY, CONTACT_TO_EMAIL, ...)
    /// 2. Prefixed variables (SIPANDSLAY__EMAIL__TO_ADDRESS, etc.)
    /// 3. Config file specified by path
    /// 4. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        Self::load_with(config_path, std::env::vars().collect())
    }

    /// Same as [`Config::load`] with an explicit environment.
    pub fn load_with(
        config_path: Option<String>,
        env: HashMap<String, String>,
    ) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env.get("CONFIG_PATH").cloned())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional: ignore if not found
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("SIPANDSLAY")
                .separator("__")
                .try_parsing(true)
                .source(Some(env.clone().into_iter().collect())),
        );

        for (var, key) in LEGACY_ENV {
            if let Some(value) = env.get(var) {
                builder = builder.set_override(key, value.as_str())?;
            }
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let sender = self.email.sender();
        sender
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid sender address {sender:?}: {e}"))?;

        let recipient = self.email.recipient();
        recipient
            .parse::<Mailbox>()
            .map_err(|e| format!("Invalid recipient address {recipient:?}: {e}"))?;

        Ok(())
    }
}
