//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::Worker;
use crate::models::SentimentTone;
use ratatui::prelude::Color;

/// Get a ratatui color for a worker based on its type
pub fn get_worker_color(worker: &Worker) -> Color {
    match worker {
        Worker::PortfolioFetcher => Color::Cyan,
        Worker::ConfigFetcher => Color::Green,
    }
}

/// Display color for a sentiment tone
pub fn sentiment_color(tone: SentimentTone) -> Color {
    match tone {
        SentimentTone::Bullish => Color::Green,
        SentimentTone::Bearish => Color::Red,
        SentimentTone::Neutral => Color::Yellow,
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some(date_part) = timestamp.split(' ').next() {
        if let Some(time_part) = timestamp.split(' ').nth(1) {
            // Extract MM-DD from date and HH:MM from time
            if let Some(month_day) = date_part.get(5..10) {
                if let Some(hour_min) = time_part.get(0..5) {
                    return format!("{} {}", month_day, hour_min);
                }
            }
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Clean HTTP error messages
pub fn clean_http_error_message(msg: &str) -> String {
    // Replace verbose transport error text with cleaner messages
    if msg.contains("Request error") && msg.contains("ConnectTimeout") {
        return "Connection timeout - retrying next poll...".to_string();
    }
    if msg.contains("Request error") && msg.contains("TimedOut") {
        return "Request timed out - retrying next poll...".to_string();
    }
    if msg.contains("Request error") {
        return "Network error - retrying next poll...".to_string();
    }
    // Return original message if no HTTP error pattern detected
    msg.to_string()
}
