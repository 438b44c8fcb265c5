//! Data model for bot API payloads
//!
//! One payload backs both the portfolio view and the bot-status view: the
//! backend returns a single object from `/api/portfolio` and the dashboard
//! reads status fields off the same snapshot.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt::Display;

/// Assets the dashboard tracks, in display order. Sentiment scores and chart
/// bars are indexed positionally against this list.
pub const TRACKED_ASSETS: [&str; 3] = ["SOLUSD", "DOGEUSD", "SHIBUSD"];

/// Direction of a trade. The backend emits the side in arbitrary case.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeSide {
    Buy,
    Sell,
}

impl<'de> Deserialize<'de> for TradeSide {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        if raw.eq_ignore_ascii_case("buy") {
            Ok(TradeSide::Buy)
        } else if raw.eq_ignore_ascii_case("sell") {
            Ok(TradeSide::Sell)
        } else {
            Err(serde::de::Error::unknown_variant(&raw, &["buy", "sell"]))
        }
    }
}

impl Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::Buy => write!(f, "buy"),
            TradeSide::Sell => write!(f, "sell"),
        }
    }
}

impl TradeSide {
    /// Upper-cased label used in the trade banner.
    pub fn banner_label(&self) -> &'static str {
        match self {
            TradeSide::Buy => "BUY",
            TradeSide::Sell => "SELL",
        }
    }
}

/// A single executed trade as reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub asset: String,
    #[serde(rename = "type")]
    pub side: TradeSide,
    pub quantity: f64,
    pub price: f64,
}

/// The latest bot state received from `/api/portfolio`. Immutable once
/// received; each successful poll replaces it wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    pub portfolio_value: Option<f64>,
    #[serde(default)]
    pub positions: HashMap<String, f64>,
    pub last_trade: Option<Trade>,
    pub status: Option<String>,
    pub alpha: Option<f64>,
}

impl PortfolioSnapshot {
    /// Portfolio value formatted to two decimal places; missing renders `0.00`.
    pub fn display_value(&self) -> String {
        format!("{:.2}", self.portfolio_value.unwrap_or(0.0))
    }

    /// Short last-trade description, e.g. `SOLUSD buy at 150`.
    pub fn last_trade_label(&self) -> Option<String> {
        self.last_trade
            .as_ref()
            .map(|trade| format!("{} {} at {}", trade.asset, trade.side, trade.price))
    }

    /// Banner-form last-trade description, e.g. `SOLUSD - BUY 2 @ $150`.
    pub fn trade_banner(&self) -> Option<String> {
        self.last_trade.as_ref().map(|trade| {
            format!(
                "{} - {} {} @ ${}",
                trade.asset,
                trade.side.banner_label(),
                trade.quantity,
                trade.price
            )
        })
    }

    // Bot-status view over the same payload.

    pub fn status_label(&self) -> String {
        self.status.clone().unwrap_or_else(|| "Unknown".to_string())
    }

    /// Alpha as a percentage string, e.g. `12.50%`, or `N/A` when absent.
    pub fn alpha_label(&self) -> String {
        match self.alpha {
            Some(alpha) => format!("{:.2}%", alpha * 100.0),
            None => "N/A".to_string(),
        }
    }

    /// The bot counts as active when it reports `Running` or has traded.
    pub fn is_active(&self) -> bool {
        self.status.as_deref() == Some("Running") || self.last_trade.is_some()
    }
}

/// Opaque configuration object from `/api/config`, displayed verbatim.
pub type ConfigSnapshot = serde_json::Map<String, serde_json::Value>;

/// How a sentiment score reads for display purposes.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SentimentTone {
    Bullish,
    Bearish,
    Neutral,
}

/// Per-asset sentiment scores in `[0, 1]`, indexed against [`TRACKED_ASSETS`].
/// Not sourced from the backend; held at a static default.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentVector(pub [f64; 3]);

impl Default for SentimentVector {
    fn default() -> Self {
        Self([0.5, 0.5, 0.5])
    }
}

impl SentimentVector {
    /// Iterate `(asset, score)` pairs in display order.
    pub fn scores(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        TRACKED_ASSETS.into_iter().zip(self.0)
    }

    pub fn label(score: f64) -> String {
        format!("{:.1}%", score * 100.0)
    }

    pub fn tone(score: f64) -> SentimentTone {
        if score > 0.6 {
            SentimentTone::Bullish
        } else if score < 0.4 {
            SentimentTone::Bearish
        } else {
            SentimentTone::Neutral
        }
    }
}
