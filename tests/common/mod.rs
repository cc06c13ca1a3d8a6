use news_gateway::config::{AnthropicConfig, GatewayConfig, NewsConfig, ServerConfig};
use news_gateway::startup::Application;
use wiremock::MockServer;

pub struct TestApp {
    pub address: String,
    pub news_upstream: MockServer,
    pub model_upstream: MockServer,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let news_upstream = MockServer::start().await;
        let model_upstream = MockServer::start().await;

        let config = GatewayConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0, // Random port
            },
            news: NewsConfig {
                api_key: "test-news-key".to_string(),
                api_base_url: news_upstream.uri(),
            },
            anthropic: AnthropicConfig {
                api_key: "test-anthropic-key".to_string(),
                model: "claude-sonnet-4-20250514".to_string(),
                api_base_url: model_upstream.uri(),
            },
            service_name: "news-gateway".to_string(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for the server to be ready by polling the health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            news_upstream,
            model_upstream,
            client,
        }
    }
}
