// src/notify/mod.rs
//! Notification sinks.
//!
//! Every sink receives the same batch of new announcements, newest
//! first. Sinks are independent: one failing is logged and the rest
//! still run, so a down chat API never silences the console report.

mod console;
mod desktop;
mod telegram;

use async_trait::async_trait;

use crate::error::NotifyError;
use crate::models::Announcement;

pub use console::ConsoleNotifier;
pub use desktop::DesktopNotifier;
pub use telegram::TelegramNotifier;

/// A destination for new-announcement notifications.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Deliver one batch of new announcements, newest first.
    async fn notify(&self, batch: &[Announcement]) -> Result<(), NotifyError>;
}

/// Fan a batch out to every sink, logging failures instead of
/// propagating them.
pub async fn dispatch(sinks: &[Box<dyn Notifier>], batch: &[Announcement]) {
    for sink in sinks {
        if let Err(e) = sink.notify(batch).await {
            log::error!("{} notification failed: {}", sink.name(), e);
        }
    }
}
