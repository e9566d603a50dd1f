// src/pipeline/poll.rs

//! Check cycle and polling loop.
//!
//! One cycle is fetch, diff, notify, persist, in that order. The
//! marker is saved only after notifications were dispatched, so a
//! crash in between re-notifies rather than silently drops items.

use std::time::Duration;

use crate::config::Config;
use crate::error::StateError;
use crate::models::Announcement;
use crate::notify::{self, Notifier};
use crate::pipeline::{DiffOutcome, calculate_diff};
use crate::services::FeedSource;
use crate::storage::MarkerStore;

/// What a single check cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Fetch failed; logged and skipped, marker untouched.
    FetchFailed,
    /// Feed came back empty; marker untouched.
    EmptyFeed,
    /// First run; adopted the newest id without notifying.
    FirstRun,
    /// Nothing newer than the marker.
    UpToDate,
    /// Dispatched this many new announcements.
    Notified { count: usize },
}

/// Run one fetch/diff/notify/persist cycle.
///
/// Fetch failures are absorbed so transient network errors never kill
/// the loop. State errors propagate: polling without persistence would
/// re-notify the same items on every cycle.
pub async fn run_cycle(
    feed: &dyn FeedSource,
    store: &dyn MarkerStore,
    sinks: &[Box<dyn Notifier>],
) -> Result<CycleOutcome, StateError> {
    match feed.fetch().await {
        Ok(announcements) => process_feed(&announcements, store, sinks).await,
        Err(e) => {
            log::error!("❌ Error: {}", e);
            Ok(CycleOutcome::FetchFailed)
        }
    }
}

/// Run exactly one cycle, propagating fetch failures.
///
/// Single-shot invocations (cron, scripts) need a nonzero exit when
/// the feed is unreachable; only the long-running loop absorbs that.
pub async fn run_check(
    feed: &dyn FeedSource,
    store: &dyn MarkerStore,
    sinks: &[Box<dyn Notifier>],
) -> crate::error::Result<CycleOutcome> {
    let announcements = feed.fetch().await?;
    Ok(process_feed(&announcements, store, sinks).await?)
}

/// Diff a fetched snapshot against the marker and act on the outcome.
async fn process_feed(
    announcements: &[Announcement],
    store: &dyn MarkerStore,
    sinks: &[Box<dyn Notifier>],
) -> Result<CycleOutcome, StateError> {
    let last_seen = store.load().await?;

    match calculate_diff(announcements, last_seen.as_deref()) {
        DiffOutcome::EmptyFeed => {
            log::warn!("⚠️ No results in the JSON.");
            Ok(CycleOutcome::EmptyFeed)
        }
        DiffOutcome::FirstRun { latest } => {
            store.save(&latest).await?;
            log::info!("Initialization : ID = {}", latest);
            Ok(CycleOutcome::FirstRun)
        }
        DiffOutcome::UpToDate => {
            log::info!("No new announcement.");
            Ok(CycleOutcome::UpToDate)
        }
        DiffOutcome::NewItems { items, latest, .. } => {
            notify::dispatch(sinks, &items).await;
            store.save(&latest).await?;
            log::info!(
                "🔄 ID updated: {} → {}",
                last_seen.as_deref().unwrap_or("none"),
                latest
            );
            Ok(CycleOutcome::Notified { count: items.len() })
        }
    }
}

/// Poll the feed until Ctrl-C.
///
/// The interrupt is raced against the running cycle, so shutdown is
/// immediate even mid-fetch. The atomic marker write makes cancelling
/// a cycle safe; at worst the next start re-notifies one batch.
pub async fn run_watch(
    config: &Config,
    feed: &dyn FeedSource,
    store: &dyn MarkerStore,
    sinks: &[Box<dyn Notifier>],
) -> Result<(), StateError> {
    println!("==== MEN Announcement Monitor ====");
    println!("Checking every {} seconds…", config.interval_secs);
    println!("Press Ctrl + C to stop.\n");

    let interval = config.check_interval();

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            res = &mut ctrl_c => {
                if let Err(e) = res {
                    log::warn!("Ctrl-C handler error: {}", e);
                }
                println!("\n🛑 Program stopped. See you soon!");
                return Ok(());
            }
            result = cycle_then_sleep(feed, store, sinks, interval) => {
                result?;
            }
        }
    }
}

async fn cycle_then_sleep(
    feed: &dyn FeedSource,
    store: &dyn MarkerStore,
    sinks: &[Box<dyn Notifier>],
    interval: Duration,
) -> Result<CycleOutcome, StateError> {
    let outcome = run_cycle(feed, store, sinks).await?;
    tokio::time::sleep(interval).await;
    Ok(outcome)
}
