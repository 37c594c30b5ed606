//! Per-account AI provider settings and the typed patch applied to them.

use serde::{Deserialize, Serialize};
use std::fmt;

use chatgate_core::{AppError, AppResult};

/// Default Gemini sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.9;

/// AI providers an account can chat with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Gemini.
    #[default]
    Gemini,
    /// xAI Grok.
    Grok,
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => f.write_str("gemini"),
            Self::Grok => f.write_str("grok"),
        }
    }
}

/// Stored settings blob. Missing fields in stored JSON fall back to defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AiSettings {
    /// Provider used when a chat does not name one.
    pub default_model: ProviderKind,
    /// Gemini parameters.
    pub gemini: GeminiSettings,
    /// Grok parameters.
    pub grok: GrokSettings,
}

/// Gemini parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiSettings {
    /// Account-supplied API key.
    pub api_key: Option<String>,
    /// Sampling temperature within `[0, 1]`.
    pub temperature: f32,
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

/// Grok parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrokSettings {
    /// Account-supplied API key.
    pub api_key: Option<String>,
}

impl AiSettings {
    /// Defaults with a configured starting temperature.
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            gemini: GeminiSettings {
                temperature,
                ..GeminiSettings::default()
            },
            ..Self::default()
        }
    }
}

/// Partial update of [`AiSettings`]. Every recognized field is listed;
/// `None` keeps the stored value. Unrecognized fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    /// New default provider.
    pub default_model: Option<ProviderKind>,
    /// Gemini fields.
    pub gemini: Option<GeminiPatch>,
    /// Grok fields.
    pub grok: Option<GrokPatch>,
}

/// Gemini fields of a [`SettingsPatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeminiPatch {
    /// New API key; an empty string clears it.
    pub api_key: Option<String>,
    /// New temperature.
    pub temperature: Option<f32>,
}

/// Grok fields of a [`SettingsPatch`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GrokPatch {
    /// New API key; an empty string clears it.
    pub api_key: Option<String>,
}

impl SettingsPatch {
    /// Checks field ranges before anything is merged.
    pub fn validate(&self) -> AppResult<()> {
        if let Some(temperature) = self.gemini.as_ref().and_then(|g| g.temperature) {
            if !temperature.is_finite() || !(0.0..=1.0).contains(&temperature) {
                return Err(AppError::invalid_input(
                    "gemini.temperature must be between 0 and 1",
                ));
            }
        }
        Ok(())
    }

    /// Merges this patch into `settings` field by field.
    pub fn apply(&self, settings: &mut AiSettings) {
        if let Some(model) = self.default_model {
            settings.default_model = model;
        }
        if let Some(gemini) = &self.gemini {
            if let Some(key) = &gemini.api_key {
                settings.gemini.api_key = normalize_key(key);
            }
            if let Some(temperature) = gemini.temperature {
                settings.gemini.temperature = temperature;
            }
        }
        if let Some(grok) = &self.grok {
            if let Some(key) = &grok.api_key {
                settings.grok.api_key = normalize_key(key);
            }
        }
    }
}

fn normalize_key(key: &str) -> Option<String> {
    let key = key.trim();
    if key.is_empty() {
        None
    } else {
        Some(key.to_string())
    }
}
