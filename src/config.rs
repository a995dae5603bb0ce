use std::env;

/// Process configuration, read from the environment once at startup and
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub llm_provider: String,
    pub openai: OpenAiConfig,
    pub claude: ClaudeConfig,
    pub glossary_path: String,
    /// Maximum accepted input length in characters. An explicit service
    /// limit, enforced for both translation directions.
    pub max_text_chars: usize,
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ClaudeConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let port: u16 = env_or("PORT", "8000")
            .parse()
            .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {}", e))?;

        let max_text_chars: usize = env_or("MAX_TEXT_CHARS", "1000")
            .parse()
            .map_err(|e| anyhow::anyhow!("MAX_TEXT_CHARS must be a number: {}", e))?;

        let allowed_origins = match env::var("ALLOWED_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => Self::default_origins(),
        };

        Ok(Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            llm_provider: env_or("LLM_PROVIDER", "openai"),
            openai: OpenAiConfig {
                // A missing key is not a startup error; the provider fails
                // with an auth error at request time instead.
                api_key: env_or("OPENAI_API_KEY", ""),
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("OPENAI_MODEL", "gpt-4o-mini"),
            },
            claude: ClaudeConfig {
                api_key: env_or("ANTHROPIC_API_KEY", ""),
                base_url: env_or("ANTHROPIC_BASE_URL", "https://api.anthropic.com"),
                model: env_or("ANTHROPIC_MODEL", "claude-3-haiku-20240307"),
            },
            glossary_path: env_or("GLOSSARY_PATH", "data.json"),
            max_text_chars,
            allowed_origins,
        })
    }

    fn default_origins() -> Vec<String> {
        vec![
            "http://localhost:3000".to_string(),
            "http://127.0.0.1:3000".to_string(),
            "https://dedego.vercel.app".to_string(),
            "https://dedego.kro.kr".to_string(),
        ]
    }
}
