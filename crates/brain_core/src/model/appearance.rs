//! Appearance settings: theme, accent colour, avatar letter.

use super::validation::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static HEX_COLOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("valid hex colour regex")
});

pub const DEFAULT_ACCENT_COLOR: &str = "#6c63ff";
pub const DEFAULT_AVATAR_LETTER: &str = "S";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ValidationError::InvalidTheme(other.to_string())),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// `#rgb` or `#rrggbb` colour string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AccentColor(String);

impl AccentColor {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let trimmed = value.trim();
        if !HEX_COLOR_RE.is_match(trimmed) {
            return Err(ValidationError::InvalidAccentColor(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AccentColor {
    fn default() -> Self {
        Self(DEFAULT_ACCENT_COLOR.to_string())
    }
}

impl<'de> Deserialize<'de> for AccentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Single upper-case character shown in the avatar badge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AvatarLetter(String);

impl AvatarLetter {
    /// Keeps the first visible character, upper-cased.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let letter = value
            .chars()
            .find(|ch| !ch.is_whitespace())
            .ok_or(ValidationError::InvalidAvatarLetter)?;
        Ok(Self(letter.to_uppercase().collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AvatarLetter {
    fn default() -> Self {
        Self(DEFAULT_AVATAR_LETTER.to_string())
    }
}

impl<'de> Deserialize<'de> for AvatarLetter {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::parse(&text).map_err(serde::de::Error::custom)
    }
}

/// Current appearance, with defaults filled in for unset keys.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Appearance {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub avatar_letter: AvatarLetter,
}

#[cfg(test)]
mod tests {
    use super::{AccentColor, AvatarLetter, Theme};

    #[test]
    fn accent_color_accepts_short_and_long_hex() {
        assert_eq!(AccentColor::parse("#ABC").unwrap().as_str(), "#abc");
        assert_eq!(AccentColor::parse(" #12ab9F ").unwrap().as_str(), "#12ab9f");
        assert!(AccentColor::parse("red").is_err());
        assert!(AccentColor::parse("#12345").is_err());
    }

    #[test]
    fn avatar_letter_keeps_first_visible_char() {
        assert_eq!(AvatarLetter::parse("  jane").unwrap().as_str(), "J");
        assert!(AvatarLetter::parse("   ").is_err());
    }

    #[test]
    fn theme_toggles_and_serializes_lowercase() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        assert!(Theme::parse("sepia").is_err());
    }
}
