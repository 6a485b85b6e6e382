use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_TRANSITION_DELAY: Duration = Duration::from_millis(400);
pub const MAX_TRANSITION_DELAY: Duration = Duration::from_secs(5);
pub const DEFAULT_MAP_NAME: &str = "china";
const DEFAULT_KNOWLEDGE_TITLE_SUFFIX: &str = "知识背景";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("invalid color for {field}: {value}")]
    InvalidColor { field: &'static str, value: String },
    #[error("transition delay of {millis}ms exceeds the 5000ms limit")]
    DelayTooLong { millis: u128 },
}

/// Area colors for the map series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapTheme {
    default_area: String,
    hover_area: String,
    lit_area: String,
    lit_hover_area: String,
}

impl MapTheme {
    #[must_use]
    pub fn default_area(&self) -> &str {
        &self.default_area
    }

    #[must_use]
    pub fn hover_area(&self) -> &str {
        &self.hover_area
    }

    #[must_use]
    pub fn lit_area(&self) -> &str {
        &self.lit_area
    }

    #[must_use]
    pub fn lit_hover_area(&self) -> &str {
        &self.lit_hover_area
    }
}

impl Default for MapTheme {
    fn default() -> Self {
        Self {
            default_area: "#CECECE".into(),
            hover_area: "#f0ad4e".into(),
            lit_area: "#ffdf34".into(),
            lit_hover_area: "#ebb563".into(),
        }
    }
}

/// Validated per-session configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizSettings {
    transition_delay: Duration,
    theme: MapTheme,
    map_name: String,
    knowledge_title_suffix: String,
}

/// Unvalidated settings as they arrive from flags or environment.
#[derive(Clone, Debug, Default)]
pub struct QuizSettingsDraft {
    pub transition_delay_ms: Option<u64>,
    pub default_color: Option<String>,
    pub hover_color: Option<String>,
    pub lit_color: Option<String>,
    pub lit_hover_color: Option<String>,
    pub map_name: Option<String>,
    pub knowledge_title_suffix: Option<String>,
}

impl QuizSettingsDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize the draft, falling back to defaults for blanks.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a color is not a hex color or the delay is too long.
    pub fn validate(self) -> Result<QuizSettings, SettingsError> {
        let defaults = MapTheme::default();

        let transition_delay = self
            .transition_delay_ms
            .map_or(DEFAULT_TRANSITION_DELAY, Duration::from_millis);
        if transition_delay > MAX_TRANSITION_DELAY {
            return Err(SettingsError::DelayTooLong {
                millis: transition_delay.as_millis(),
            });
        }

        let theme = MapTheme {
            default_area: color_or("default_color", self.default_color, defaults.default_area)?,
            hover_area: color_or("hover_color", self.hover_color, defaults.hover_area)?,
            lit_area: color_or("lit_color", self.lit_color, defaults.lit_area)?,
            lit_hover_area: color_or(
                "lit_hover_color",
                self.lit_hover_color,
                defaults.lit_hover_area,
            )?,
        };

        Ok(QuizSettings {
            transition_delay,
            theme,
            map_name: normalize_optional(self.map_name)
                .unwrap_or_else(|| DEFAULT_MAP_NAME.to_string()),
            knowledge_title_suffix: normalize_optional(self.knowledge_title_suffix)
                .unwrap_or_else(|| DEFAULT_KNOWLEDGE_TITLE_SUFFIX.to_string()),
        })
    }
}

impl QuizSettings {
    #[must_use]
    pub fn transition_delay(&self) -> Duration {
        self.transition_delay
    }

    #[must_use]
    pub fn theme(&self) -> &MapTheme {
        &self.theme
    }

    #[must_use]
    pub fn map_name(&self) -> &str {
        &self.map_name
    }

    /// Title shown on the knowledge dialog for `region`.
    #[must_use]
    pub fn knowledge_title(&self, region: &str) -> String {
        format!("{region} - {}", self.knowledge_title_suffix)
    }

}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            transition_delay: DEFAULT_TRANSITION_DELAY,
            theme: MapTheme::default(),
            map_name: DEFAULT_MAP_NAME.to_string(),
            knowledge_title_suffix: DEFAULT_KNOWLEDGE_TITLE_SUFFIX.to_string(),
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|val| val.trim().to_string())
        .filter(|val| !val.is_empty())
}

fn color_or(
    field: &'static str,
    value: Option<String>,
    fallback: String,
) -> Result<String, SettingsError> {
    match normalize_optional(value) {
        None => Ok(fallback),
        Some(color) if is_hex_color(&color) => Ok(color),
        Some(color) => Err(SettingsError::InvalidColor {
            field,
            value: color,
        }),
    }
}

fn is_hex_color(value: &str) -> bool {
    let Some(digits) = value.strip_prefix('#') else {
        return false;
    };
    matches!(digits.len(), 3 | 6 | 8) && digits.chars().all(|ch| ch.is_ascii_hexdigit())
}
