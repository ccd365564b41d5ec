//! Notification Poller - background refresh for the bell widget.
//!
//! Polls the notification counters at a fixed interval and publishes the
//! latest value over a watch channel. One request is in flight at a time;
//! a slow poll delays the next tick instead of overlapping it. The task
//! is cancelled explicitly with [`NotificationPoller::stop`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::adapters::backend::UnionApi;
use crate::domain::notification::NotificationStats;

/// Handle to the background polling task.
pub struct NotificationPoller {
    stats_rx: watch::Receiver<Option<NotificationStats>>,
    stop_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl NotificationPoller {
    /// Spawns the polling task. The first poll runs immediately; later
    /// polls follow the given interval.
    pub fn start(api: Arc<UnionApi>, interval: Duration) -> Self {
        let (stats_tx, stats_rx) = watch::channel(None);
        let (stop_tx, mut stop_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match api.notification_stats().await {
                            Ok(stats) => {
                                let _ = stats_tx.send(Some(stats));
                            }
                            Err(e) => {
                                // Keep the last known counters on a failed poll.
                                tracing::debug!(error = %e, "notification poll failed");
                            }
                        }
                    }
                    _ = stop_rx.changed() => break,
                }
            }
        });

        Self {
            stats_rx,
            stop_tx,
            handle,
        }
    }

    /// A receiver that observes every published update.
    pub fn subscribe(&self) -> watch::Receiver<Option<NotificationStats>> {
        self.stats_rx.clone()
    }

    /// The most recently polled counters, if any poll has succeeded.
    pub fn latest(&self) -> Option<NotificationStats> {
        self.stats_rx.borrow().clone()
    }

    /// Cancels the task and waits for it to finish.
    pub async fn stop(self) {
        let _ = self.stop_tx.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::session::InMemorySessionStore;
    use crate::config::BackendConfig;

    fn unreachable_api() -> Arc<UnionApi> {
        let config = BackendConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..Default::default()
        };
        Arc::new(UnionApi::new(
            &config,
            Arc::new(InMemorySessionStore::new()),
        ))
    }

    #[tokio::test]
    async fn starts_with_no_stats() {
        let poller = NotificationPoller::start(unreachable_api(), Duration::from_secs(30));
        assert!(poller.latest().is_none());
        poller.stop().await;
    }

    #[tokio::test]
    async fn stop_cancels_the_task_promptly() {
        let poller = NotificationPoller::start(unreachable_api(), Duration::from_millis(50));
        tokio::time::sleep(Duration::from_millis(120)).await;

        tokio::time::timeout(Duration::from_secs(5), poller.stop())
            .await
            .expect("poller did not stop in time");
    }

    #[tokio::test]
    async fn failed_polls_publish_nothing() {
        let poller = NotificationPoller::start(unreachable_api(), Duration::from_millis(50));
        let rx = poller.subscribe();
        tokio::time::sleep(Duration::from_millis(150)).await;

        assert!(rx.borrow().is_none());
        poller.stop().await;
    }
}
