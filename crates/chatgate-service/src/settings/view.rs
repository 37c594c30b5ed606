//! Outward shape of stored settings. API keys are write-only.

use serde::Serialize;

use chatgate_entity::account::{AiSettings, ProviderKind};

/// Settings as returned to their owner.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsView {
    pub default_model: ProviderKind,
    pub gemini: GeminiView,
    pub grok: GrokView,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiView {
    pub temperature: f32,
    pub has_api_key: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GrokView {
    pub has_api_key: bool,
}

impl From<&AiSettings> for SettingsView {
    fn from(settings: &AiSettings) -> Self {
        Self {
            default_model: settings.default_model,
            gemini: GeminiView {
                temperature: settings.gemini.temperature,
                has_api_key: settings.gemini.api_key.is_some(),
            },
            grok: GrokView {
                has_api_key: settings.grok.api_key.is_some(),
            },
        }
    }
}
