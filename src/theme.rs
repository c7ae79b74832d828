use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Persisted theme preference. `System` follows the host's colour scheme.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    System,
}

/// Concrete colour scheme after `System` has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(String);

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::System];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::System => "system",
        }
    }

    pub fn resolve(&self, prefers_dark: bool) -> Appearance {
        match self {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
            Theme::System if prefers_dark => Appearance::Dark,
            Theme::System => Appearance::Light,
        }
    }

    /// Order used by the toggle control.
    pub fn next(&self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::System,
            Theme::System => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            "system" => Ok(Theme::System),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codee::{string::FromToStringCodec, Decoder, Encoder};

    #[test]
    fn test_stored_value_survives_reload() {
        // the storage layer persists exactly what the codec produces
        for theme in Theme::ALL {
            let stored = FromToStringCodec::encode(&theme).expect("theme should encode");
            assert_eq!(stored, theme.as_str());
            let reloaded: Theme =
                FromToStringCodec::decode(&stored).expect("theme should decode");
            assert_eq!(reloaded, theme);
        }
    }

    #[test]
    fn test_invalid_stored_values_rejected() {
        // rejected values make the storage hook fall back to its initial value
        for raw in ["Dark", "", "blue"] {
            assert!(FromToStringCodec::decode(raw).map(|t: Theme| t).is_err());
        }
        assert_eq!(
            "sepia".parse::<Theme>().unwrap_err().to_string(),
            "unknown theme: sepia"
        );
    }

    #[test]
    fn test_system_follows_host() {
        assert_eq!(Theme::System.resolve(true), Appearance::Dark);
        assert_eq!(Theme::System.resolve(false), Appearance::Light);
        assert_eq!(Theme::Light.resolve(true), Appearance::Light);
        assert_eq!(Theme::Dark.resolve(false), Appearance::Dark);
    }

    #[test]
    fn test_toggle_cycles_all() {
        let mut theme = Theme::Light;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(theme);
            theme = theme.next();
        }
        assert_eq!(theme, Theme::Light);
        assert_eq!(seen, Theme::ALL.to_vec());
    }
}
