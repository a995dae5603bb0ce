use std::sync::Arc;
use tracing::info;

use super::claude_llm::ClaudeLlm;
use super::interface::LlmClient;
use super::openai_llm::OpenAiLlm;
use crate::config::Config;

/// Creates the provider client selected by configuration.
pub fn create(config: &Config) -> anyhow::Result<Arc<dyn LlmClient>> {
    info!("Initializing LLM provider: {}", config.llm_provider);

    match config.llm_provider.as_str() {
        "openai" => Ok(Arc::new(OpenAiLlm::new(&config.openai)?)),
        "claude" => Ok(Arc::new(ClaudeLlm::new(&config.claude)?)),
        other => Err(anyhow::anyhow!("Unsupported LLM provider: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClaudeConfig, OpenAiConfig};

    fn config_with_provider(provider: &str) -> Config {
        Config {
            host: "127.0.0.1".to_string(),
            port: 8000,
            llm_provider: provider.to_string(),
            openai: OpenAiConfig {
                api_key: String::new(),
                base_url: "https://api.openai.com/v1".to_string(),
                model: "gpt-4o-mini".to_string(),
            },
            claude: ClaudeConfig {
                api_key: String::new(),
                base_url: "https://api.anthropic.com".to_string(),
                model: "claude-3-haiku-20240307".to_string(),
            },
            glossary_path: "data.json".to_string(),
            max_text_chars: 1000,
            allowed_origins: vec![],
        }
    }

    #[test]
    fn known_providers_are_constructed() {
        assert!(create(&config_with_provider("openai")).is_ok());
        assert!(create(&config_with_provider("claude")).is_ok());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(create(&config_with_provider("gemini")).is_err());
    }
}
