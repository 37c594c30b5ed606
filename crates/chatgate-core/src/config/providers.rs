//! AI provider availability.

use serde::{Deserialize, Serialize};

/// Which AI providers accounts may select, and their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Whether Grok may be chosen as the default model.
    #[serde(default)]
    pub grok_enabled: bool,
    /// Gemini temperature applied to new accounts.
    #[serde(default = "default_temperature")]
    pub default_temperature: f32,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            grok_enabled: false,
            default_temperature: default_temperature(),
        }
    }
}

fn default_temperature() -> f32 {
    0.9
}
