//! Startup reseed of the database collection and readiness monitoring

use std::{sync::Arc, time::Duration};

use tokio::{task::JoinHandle, time::MissedTickBehavior};

use super::readiness::{DbReadiness, DbStatus};
use crate::{error::AppResult, models::Book, repository::BookStore};

/// Apply the schema, clear the collection and insert the seed record.
///
/// Publishes `Connecting` while running, then `Ready` or `Failed`.
pub async fn bootstrap(store: &dyn BookStore, readiness: &DbReadiness) -> AppResult<()> {
    readiness.set(DbStatus::Connecting);

    let result = async {
        store.prepare().await?;
        store.reset_and_seed(&Book::seed()).await
    }
    .await;

    match result {
        Ok(()) => {
            tracing::info!("Database collection seeded");
            readiness.set(DbStatus::Ready);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Database bootstrap failed: {}", e);
            readiness.set(DbStatus::Failed);
            Err(e)
        }
    }
}

/// One readiness probe: `Ready` on success, `Disconnected` on failure
pub async fn probe(store: &dyn BookStore, readiness: &DbReadiness) {
    match store.ping().await {
        Ok(()) => readiness.set(DbStatus::Ready),
        Err(e) => {
            if readiness.is_ready() {
                tracing::warn!("Lost database connection: {}", e);
            }
            readiness.set(DbStatus::Disconnected);
        }
    }
}

/// Run [`bootstrap`] in the background, then probe the database every `interval`.
///
/// A failed bootstrap is retried on every tick until it succeeds, so a
/// database that comes up after the server still ends up seeded and `Ready`.
pub fn spawn(store: Arc<dyn BookStore>, readiness: DbReadiness, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut seeded = false;
        loop {
            // First tick completes immediately
            ticker.tick().await;

            if seeded {
                probe(store.as_ref(), &readiness).await;
            } else if bootstrap(store.as_ref(), &readiness).await.is_ok() {
                seeded = true;
            } else {
                tracing::info!("Retrying database bootstrap in {:?}", interval);
            }
        }
    })
}
