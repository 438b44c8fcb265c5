//! Bot API Client
//!
//! A thin read-only client for the trading bot's REST endpoints. One GET per
//! endpoint, JSON in, no retry beyond the next scheduled poll.

use crate::api::BotApi;
use crate::api::error::ApiError;
use crate::consts::cli_consts;
use crate::environment::Environment;
use crate::models::{ConfigSnapshot, PortfolioSnapshot};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;

// User-Agent string with dashboard version
const USER_AGENT: &str = concat!("surge-dash/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct BotApiClient {
    client: Client,
    environment: Environment,
}

impl BotApiClient {
    pub fn new(environment: Environment) -> Self {
        Self {
            client: ClientBuilder::new()
                .connect_timeout(cli_consts::http::request_timeout())
                .timeout(cli_consts::http::request_timeout())
                .build()
                .expect("Failed to create HTTP client"),
            environment,
        }
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.environment.api_base_url().trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    async fn handle_response_status(response: Response) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            return Err(ApiError::from_response(response).await);
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T, ApiError> {
        let url = self.build_url(endpoint);
        let response = self
            .client
            .get(&url)
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;

        let response = Self::handle_response_status(response).await?;
        let response_bytes = response.bytes().await?;
        serde_json::from_slice(&response_bytes).map_err(ApiError::Parse)
    }
}

#[async_trait::async_trait]
impl BotApi for BotApiClient {
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, ApiError> {
        self.get_json("api/portfolio").await
    }

    async fn fetch_config(&self) -> Result<ConfigSnapshot, ApiError> {
        self.get_json("api/config").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_normalizes_slashes() {
        let client = BotApiClient::new(Environment::Custom {
            api_base_url: "http://bot.example.com/".to_string(),
        });
        assert_eq!(
            client.build_url("/api/portfolio"),
            "http://bot.example.com/api/portfolio"
        );
        assert_eq!(
            client.build_url("api/config"),
            "http://bot.example.com/api/config"
        );
    }
}
