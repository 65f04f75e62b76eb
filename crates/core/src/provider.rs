use serde::{Deserialize, Serialize};

use crate::error::ChaptersError;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    #[default]
    Gemini,
    Grok,
    Openai,
}

pub struct ProviderConfig {
    pub api_url: &'static str,
    pub model: &'static str,
    pub env_var: &'static str,
}

impl Provider {
    pub fn config(&self) -> ProviderConfig {
        match self {
            Provider::Gemini => ProviderConfig {
                api_url: "https://generativelanguage.googleapis.com/v1beta/openai/chat/completions",
                model: "gemini-2.5-flash-lite",
                env_var: "GEMINI_API_KEY",
            },
            Provider::Grok => ProviderConfig {
                api_url: "https://api.x.ai/v1/chat/completions",
                model: "grok-4-fast",
                env_var: "XAI_API_KEY",
            },
            Provider::Openai => ProviderConfig {
                api_url: "https://api.openai.com/v1/chat/completions",
                model: "gpt-5.1",
                env_var: "OPENAI_API_KEY",
            },
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Provider::Gemini => "Gemini",
            Provider::Grok => "Grok",
            Provider::Openai => "OpenAI",
        }
    }

    /// API key from this provider's environment variable, if set and non-blank.
    pub fn api_key_from_env(&self) -> Option<String> {
        std::env::var(self.config().env_var)
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
    }

    pub fn missing_api_key(&self) -> ChaptersError {
        ChaptersError::MissingApiKey {
            provider_name: self.name().to_string(),
            env_var: self.config().env_var.to_string(),
        }
    }
}
