use crate::api::error::ApiError;
use crate::models::{ConfigSnapshot, PortfolioSnapshot};

pub(crate) mod client;
pub use client::BotApiClient;
pub mod error;

#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait BotApi: Send + Sync {
    /// Fetch the latest portfolio snapshot. The same payload also carries the
    /// bot-status fields.
    async fn fetch_portfolio(&self) -> Result<PortfolioSnapshot, ApiError>;

    /// Fetch the bot's live configuration, displayed verbatim.
    async fn fetch_config(&self) -> Result<ConfigSnapshot, ApiError>;
}
