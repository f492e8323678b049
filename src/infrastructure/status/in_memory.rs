use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{application::services::status::StatusSink, domain::models::StatusEvent};

/// Latest-only status surface, the in-process stand-in for a UI status
/// widget. Each published event overwrites the previous one.
#[derive(Default)]
pub struct InMemoryStatusSink {
    current: Arc<RwLock<Option<StatusEvent>>>,
}

impl InMemoryStatusSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn current(&self) -> Option<StatusEvent> {
        self.current.read().await.clone()
    }
}

#[async_trait]
impl StatusSink for InMemoryStatusSink {
    async fn publish(&self, event: StatusEvent) {
        let mut current = self.current.write().await;
        *current = Some(event);
    }
}
