use std::{env, time::Duration};

use secrecy::SecretString;

pub const DEFAULT_LLM_API_BASE: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_LLM_MODEL: &str = "openrouter/gpt-4";

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub cors_allowed_origin: Option<String>,
    pub llm_api_base: String,
    pub llm_api_key: SecretString,
    pub llm_model: String,
    pub llm_temperature: f32,
    pub llm_max_tokens: u32,
    pub matchmaking_delay_ms: u64,
    pub opponent_answer_delay_ms: u64,
    pub session_idle_ttl_secs: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: parse_env("WEB_SERVER_PORT").unwrap_or(8080),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN").ok(),
            llm_api_base: env::var("LLM_API_BASE")
                .unwrap_or_else(|_| DEFAULT_LLM_API_BASE.to_string()),
            llm_api_key: SecretString::from(env::var("LLM_API_KEY").unwrap_or_default()),
            llm_model: env::var("LLM_MODEL").unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            llm_temperature: parse_env("LLM_TEMPERATURE").unwrap_or(0.7),
            llm_max_tokens: parse_env("LLM_MAX_TOKENS").unwrap_or(2000),
            matchmaking_delay_ms: parse_env("MATCHMAKING_DELAY_MS").unwrap_or(1000),
            opponent_answer_delay_ms: parse_env("OPPONENT_ANSWER_DELAY_MS").unwrap_or(1500),
            session_idle_ttl_secs: parse_env("SESSION_IDLE_TTL_SECS").unwrap_or(1800),
        }
    }

    pub fn matchmaking_delay(&self) -> Duration {
        Duration::from_millis(self.matchmaking_delay_ms)
    }

    pub fn opponent_answer_delay(&self) -> Duration {
        Duration::from_millis(self.opponent_answer_delay_ms)
    }

    pub fn session_idle_ttl(&self) -> Duration {
        Duration::from_secs(self.session_idle_ttl_secs)
    }

    /// True when an API key is configured. Without one every generation
    /// request goes straight to the local question bank.
    pub fn llm_enabled(&self) -> bool {
        use secrecy::ExposeSecret;

        !self.llm_api_key.expose_secret().trim().is_empty()
    }

    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            cors_allowed_origin: None,
            llm_api_base: "http://127.0.0.1:9/v1".to_string(),
            llm_api_key: SecretString::from(String::new()),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            llm_temperature: 0.7,
            llm_max_tokens: 2000,
            matchmaking_delay_ms: 0,
            opponent_answer_delay_ms: 0,
            session_idle_ttl_secs: 1800,
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_from_env_with_defaults() {
        let config = Config::from_env();

        assert!(!config.web_server_host.is_empty());
        assert!(!config.llm_api_base.is_empty());
        assert!(!config.llm_model.is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = Config::test_config();

        assert_eq!(config.web_server_port, 8080);
        assert_eq!(config.matchmaking_delay(), Duration::ZERO);
        assert_eq!(config.opponent_answer_delay(), Duration::ZERO);
        assert_eq!(config.session_idle_ttl(), Duration::from_secs(1800));
        assert!(!config.llm_enabled());
    }
}
