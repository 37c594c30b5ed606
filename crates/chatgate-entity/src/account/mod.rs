//! Account domain entities.

pub mod model;
pub mod role;
pub mod settings;

pub use model::{Account, CreateAccount};
pub use role::Role;
pub use settings::{
    AiSettings, DEFAULT_TEMPERATURE, GeminiPatch, GeminiSettings, GrokPatch, GrokSettings,
    ProviderKind, SettingsPatch,
};
