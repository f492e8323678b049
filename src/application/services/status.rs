use async_trait::async_trait;

use crate::domain::models::StatusEvent;

/// One-way sink for user-facing progress. Each event fully replaces the
/// previously displayed state; implementations may render to a UI
/// surface, a log line, or anything else that keeps the latest event
/// visible.
#[async_trait]
pub trait StatusSink: Send + Sync {
    async fn publish(&self, event: StatusEvent);
}
