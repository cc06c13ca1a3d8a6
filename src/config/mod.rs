use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Clone, Debug)]
pub struct GatewayConfig {
    pub server: ServerConfig,
    pub news: NewsConfig,
    pub anthropic: AnthropicConfig,
    pub service_name: String,
}

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Clone, Debug)]
pub struct NewsConfig {
    pub api_key: String,
    pub api_base_url: String,
}

#[derive(Clone, Debug)]
pub struct AnthropicConfig {
    pub api_key: String,
    pub model: String,
    pub api_base_url: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse()
            .context("PORT must be a valid port number")?;

        let news_api_key = required("NEWS_API_KEY")?;
        let news_api_base_url =
            env::var("NEWS_API_BASE_URL").unwrap_or_else(|_| "https://newsapi.org/v2".to_string());

        let anthropic_api_key = required("ANTHROPIC_API_KEY")?;
        let anthropic_api_base_url = env::var("ANTHROPIC_BASE_URL")
            .unwrap_or_else(|_| "https://api.anthropic.com".to_string());
        let model =
            env::var("SYNTHESIS_MODEL").unwrap_or_else(|_| "claude-sonnet-4-20250514".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            news: NewsConfig {
                api_key: news_api_key,
                api_base_url: news_api_base_url,
            },
            anthropic: AnthropicConfig {
                api_key: anthropic_api_key,
                model,
                api_base_url: anthropic_api_base_url,
            },
            service_name: "news-gateway".to_string(),
        })
    }
}

fn required(key: &str) -> Result<String> {
    env::var(key).with_context(|| format!("{} must be set", key))
}
