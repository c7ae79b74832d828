use serde::Deserialize;
use thiserror::Error;

use std::time::Duration;

use crate::{theme::Theme, typewriter::Timing};

static SITE_TOML: &str = include_str!("../site.toml");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't parse site config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TypewriterConfig {
    pub speed_ms: u64,
    pub delete_speed_ms: u64,
    pub delay_between_ms: u64,
    pub cursor_blink_ms: u64,
    pub texts: Vec<String>,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed_ms: 100,
            delete_speed_ms: 50,
            delay_between_ms: 2000,
            cursor_blink_ms: 500,
            texts: vec!["Full-Stack Developer".to_string()],
        }
    }
}

impl TypewriterConfig {
    pub fn timing(&self) -> Timing {
        Timing {
            speed: Duration::from_millis(self.speed_ms),
            delete_speed: Duration::from_millis(self.delete_speed_ms),
            delay_between: Duration::from_millis(self.delay_between_ms),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner_name: String,
    pub contact_endpoint: String,
    pub theme_storage_key: String,
    pub default_theme: Theme,
    pub resume_path: String,
    pub resume_file_name: String,
    pub typewriter: TypewriterConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner_name: "MD Fakih".to_string(),
            contact_endpoint: String::new(),
            theme_storage_key: "portfolio-theme".to_string(),
            default_theme: Theme::System,
            resume_path: "/resume.pdf".to_string(),
            resume_file_name: "resume.pdf".to_string(),
            typewriter: TypewriterConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    /// Config embedded from `site.toml`, with build-time overrides applied.
    /// Falls back to defaults when the embedded file is malformed.
    pub fn load() -> Self {
        let mut config = Self::parse(SITE_TOML).unwrap_or_else(|e| {
            log::error!("{e}, using defaults");
            Self::default()
        });
        if let Some(endpoint) = option_env!("CONTACT_ENDPOINT") {
            config.contact_endpoint = endpoint.to_string();
        }
        config
    }
}
