use async_trait::async_trait;
use tracing::{error, info};

use crate::{
    application::services::status::StatusSink,
    domain::models::{Severity, StatusEvent},
};

/// Renders status events as structured log lines. The latest line in
/// the log stream is the current state, which satisfies the sink
/// contract.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingStatusSink;

#[async_trait]
impl StatusSink for TracingStatusSink {
    async fn publish(&self, event: StatusEvent) {
        match event.severity {
            Severity::Info => info!(status = "info", "{}", event.text),
            Severity::Success => info!(status = "success", "{}", event.text),
            Severity::Error => error!(status = "error", "{}", event.text),
        }
    }
}
