// src/notify/desktop.rs

//! Desktop notification sink.
//!
//! Shells out to the `notify-send` utility. The popup shows only the
//! newest title; the full report is on the console.

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::NotifyError;
use crate::models::Announcement;
use crate::notify::Notifier;

const NOTIFY_TITLE: &str = "MEN – New Announcement";

/// Sink that raises a desktop popup via `notify-send`.
pub struct DesktopNotifier;

impl DesktopNotifier {
    pub fn new() -> Self {
        Self
    }

    /// Body text for the popup: the newest item's French title.
    fn body(batch: &[Announcement]) -> String {
        batch
            .first()
            .and_then(|a| a.title_fr.clone())
            .unwrap_or_else(|| "New Announcement".to_string())
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for DesktopNotifier {
    fn name(&self) -> &'static str {
        "desktop"
    }

    async fn notify(&self, batch: &[Announcement]) -> Result<(), NotifyError> {
        let status = Command::new("notify-send")
            .arg(NOTIFY_TITLE)
            .arg(Self::body(batch))
            .status()
            .await?;

        if !status.success() {
            return Err(NotifyError::CommandStatus {
                code: status.code(),
            });
        }
        Ok(())
    }
}
