//! Background consumer that records notices published on the bus.
//!
//! [`NoticeLog`] drains [`PlatformEvent`]s, keeps the most recent notices in
//! a bounded buffer for the API to serve, and writes each one to `tracing`.

use std::collections::VecDeque;

use tokio::sync::{broadcast, RwLock};
use tokio_util::sync::CancellationToken;

use crate::bus::PlatformEvent;
use crate::notice::Notice;

/// How many notices are kept when no capacity is given.
pub const DEFAULT_NOTICE_CAPACITY: usize = 50;

pub struct NoticeLog {
    capacity: usize,
    recent: RwLock<VecDeque<Notice>>,
}

impl NoticeLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            recent: RwLock::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Record one notice, evicting the oldest once full.
    pub async fn record(&self, notice: Notice) {
        let mut recent = self.recent.write().await;
        if recent.len() == self.capacity {
            recent.pop_front();
        }
        recent.push_back(notice);
    }

    /// Recorded notices, newest first.
    pub async fn recent(&self) -> Vec<Notice> {
        self.recent.read().await.iter().rev().cloned().collect()
    }

    /// Drain events until the bus closes or `cancel` fires.
    pub async fn run(
        &self,
        mut receiver: broadcast::Receiver<PlatformEvent>,
        cancel: CancellationToken,
    ) {
        loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    tracing::info!("Notice log cancelled");
                    break;
                }
                received = receiver.recv() => match received {
                    Ok(event) => self.handle(event).await,
                    Err(broadcast::error::RecvError::Lagged(n)) => {
                        tracing::warn!(skipped = n, "Notice log lagged");
                    }
                    Err(broadcast::error::RecvError::Closed) => {
                        tracing::info!("Event bus closed, notice log shutting down");
                        break;
                    }
                },
            }
        }
    }

    async fn handle(&self, event: PlatformEvent) {
        let Some(notice) = event.notice else {
            tracing::debug!(event_type = %event.event_type, "Event without notice");
            return;
        };

        if notice.success {
            tracing::info!(event_type = %event.event_type, message = %notice.message, "Notice");
        } else {
            tracing::warn!(event_type = %event.event_type, message = %notice.message, "Notice");
        }
        self.record(notice).await;
    }
}

impl Default for NoticeLog {
    fn default() -> Self {
        Self::new(DEFAULT_NOTICE_CAPACITY)
    }
}
