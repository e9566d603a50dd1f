// src/notify/telegram.rs

//! Telegram Bot API sink.
//!
//! Sends one HTML-formatted message per batch via `sendMessage`. The
//! sink only exists when both bot token and chat id are configured
//! with real values; otherwise construction yields `None` and the
//! monitor runs without it.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;

use crate::config::Config;
use crate::error::NotifyError;
use crate::models::Announcement;
use crate::notify::Notifier;
use crate::utils::resolve;

/// The chat API gets a shorter timeout than the feed; a slow
/// notification must not stall the polling cadence.
const TELEGRAM_TIMEOUT: Duration = Duration::from_secs(5);

/// Escape the characters Telegram's HTML parse mode reserves.
///
/// Ampersand first, otherwise the entities produced for `<` and `>`
/// would be escaped twice.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Sink that posts batches to a Telegram chat.
pub struct TelegramNotifier {
    client: Client,
    endpoint: String,
    chat_id: String,
    base_url: String,
}

impl TelegramNotifier {
    /// Build the sink from configuration.
    ///
    /// Returns `None` when the token or chat id is absent or still a
    /// placeholder.
    pub fn from_config(config: &Config) -> Option<Self> {
        if !config.telegram_configured() {
            return None;
        }

        Some(Self {
            client: Client::new(),
            endpoint: format!(
                "https://api.telegram.org/bot{}/sendMessage",
                config.telegram_bot_token
            ),
            chat_id: config.telegram_chat_id.clone(),
            base_url: config.base_url.clone(),
        })
    }

    /// Render the batch as one HTML message, oldest new item first.
    fn render_message(&self, batch: &[Announcement]) -> String {
        let mut message = format!("<b>📢 {} New MEN Announcement(s)!</b>\n", batch.len());

        for a in batch.iter().rev() {
            message.push_str(&format!("\n\n- <b>ID: {}</b>", escape_html(&a.id)));
            message.push_str(&format!(
                "\n  <b>{}</b>",
                escape_html(a.title_fr.as_deref().unwrap_or("Announcement"))
            ));

            if let Some(doc) = a.first_document() {
                message.push_str(&format!(
                    "\n  <a href='{}'>{}</a>",
                    resolve(&self.base_url, &doc.url),
                    escape_html(doc.label_fr.as_deref().unwrap_or("View Document"))
                ));
            }
        }

        message
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    fn name(&self) -> &'static str {
        "telegram"
    }

    async fn notify(&self, batch: &[Announcement]) -> Result<(), NotifyError> {
        let payload = json!({
            "chat_id": self.chat_id,
            "text": self.render_message(batch),
            "parse_mode": "HTML",
        });

        // Endpoint embeds the bot token; keep it out of the logs.
        let response = self
            .client
            .post(&self.endpoint)
            .timeout(TELEGRAM_TIMEOUT)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NotifyError::Api {
                status: status.as_u16(),
                body,
            });
        }

        log::info!("Telegram message sent");
        Ok(())
    }
}
