use crate::llm::Provider;
use serde::Deserialize;
use std::env;

/// Process configuration, loaded from the environment (with `.env`
/// support via dotenvy).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// LLM provider selection and credentials.
    pub llm: LLMConfig,
    /// Search provider credentials.
    pub search: SearchConfig,
}

/// Bind address for the HTTP server.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind (`HOST`, default `127.0.0.1`).
    pub host: String,
    /// Port to bind (`PORT`, default 3000).
    pub port: u16,
}

/// LLM provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    /// `openai` or `ollama` (`LLM_PROVIDER`).
    pub provider: String,
    /// API key for OpenAI-compatible endpoints (`OPENAI_API_KEY`).
    pub openai_api_key: Option<String>,
    /// Endpoint base URL (`OPENAI_API_BASE`).
    pub openai_api_base: String,
    /// Ollama server URL (`OLLAMA_URL`).
    pub ollama_url: String,
    /// Model identifier (`LLM_MODEL`).
    pub model: String,
}

/// Search provider settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Exa API key (`EXA_API_KEY`, required).
    pub exa_api_key: String,
    /// Exa endpoint (`EXA_BASE_URL`).
    pub exa_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            llm: LLMConfig {
                provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "ollama".to_string()),
                openai_api_key: env::var("OPENAI_API_KEY").ok(),
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                ollama_url: env::var("OLLAMA_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                model: env::var("LLM_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            },
            search: SearchConfig {
                exa_api_key: env::var("EXA_API_KEY")?,
                exa_base_url: env::var("EXA_BASE_URL")
                    .unwrap_or_else(|_| "https://api.exa.ai".to_string()),
            },
        })
    }

    /// The LLM provider selected by this configuration.
    pub fn llm_provider(&self) -> Result<Provider, Box<dyn std::error::Error>> {
        match self.llm.provider.as_str() {
            "openai" => Ok(Provider::OpenAI {
                api_key: self
                    .llm
                    .openai_api_key
                    .clone()
                    .ok_or("OPENAI_API_KEY is required when LLM_PROVIDER=openai")?,
                api_base: self.llm.openai_api_base.clone(),
                model: self.llm.model.clone(),
            }),
            "ollama" => Ok(Provider::Ollama {
                base_url: self.llm.ollama_url.clone(),
                model: self.llm.model.clone(),
            }),
            other => Err(format!("Unknown LLM_PROVIDER '{}'", other).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(provider: &str, api_key: Option<&str>) -> Config {
        Config {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            llm: LLMConfig {
                provider: provider.to_string(),
                openai_api_key: api_key.map(str::to_string),
                openai_api_base: "https://api.openai.com/v1".to_string(),
                ollama_url: "http://localhost:11434".to_string(),
                model: "llama3.2".to_string(),
            },
            search: SearchConfig {
                exa_api_key: "test".to_string(),
                exa_base_url: "https://api.exa.ai".to_string(),
            },
        }
    }

    #[test]
    fn ollama_provider_from_config() {
        let provider = sample_config("ollama", None).llm_provider().unwrap();
        assert_eq!(provider.name(), "Ollama");
    }

    #[test]
    fn openai_provider_requires_api_key() {
        assert!(sample_config("openai", None).llm_provider().is_err());
        assert!(sample_config("openai", Some("sk-test")).llm_provider().is_ok());
    }

    #[test]
    fn unknown_provider_is_rejected() {
        assert!(sample_config("bedrock", None).llm_provider().is_err());
    }
}
