use std::sync::Arc;
use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, warn, Instrument};
use uuid::Uuid;

use crate::{
    application::services::{guard::SendGuard, status::StatusSink, transport::WebhookTransport},
    config::SendForm,
    domain::{
        errors::ValidationError,
        models::{AttemptOutcome, MessagePayload, SendRequest, StatusEvent},
    },
};

/// Fixed spacing between consecutive attempts, to stay clear of the
/// endpoint's rate limiter.
const INTER_ATTEMPT_DELAY: Duration = Duration::from_secs(1);

/// Terminal result of one batch, for the caller. The emitted
/// [`StatusEvent`]s are the externally visible behavior; this summary
/// only mirrors them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed { delivered: u32, rejected: u32 },
    Aborted { delivered: u32, rejected: u32, reason: String },
    Busy,
}

/// Drives one send operation end to end: delayed start, bounded
/// sequential attempts, rate-limit backoff and per-attempt status
/// reporting.
pub struct SendBatchUseCase {
    transport: Arc<dyn WebhookTransport>,
    status: Arc<dyn StatusSink>,
    guard: Arc<SendGuard>,
}

impl SendBatchUseCase {
    pub fn new(
        transport: Arc<dyn WebhookTransport>,
        status: Arc<dyn StatusSink>,
        guard: Arc<SendGuard>,
    ) -> Self {
        Self {
            transport,
            status,
            guard,
        }
    }

    /// Validates the raw form and runs the batch. A validation failure
    /// is surfaced as a single error event and stops the operation
    /// before any network activity.
    pub async fn trigger(&self, form: SendForm) -> Result<RunOutcome, ValidationError> {
        match form.try_parse() {
            Ok(request) => Ok(self.execute(request).await),
            Err(err) => {
                self.emit(StatusEvent::error(err.to_string())).await;
                Err(err)
            }
        }
    }

    /// Runs the batch to completion. A trigger while another batch holds
    /// the guard is ignored and reports [`RunOutcome::Busy`] without
    /// emitting anything.
    pub async fn execute(&self, request: SendRequest) -> RunOutcome {
        let Some(_permit) = self.guard.try_begin() else {
            debug!("send already in progress, ignoring trigger");
            return RunOutcome::Busy;
        };

        let span = tracing::info_span!("send_batch", operation = %Uuid::new_v4());
        self.run(request).instrument(span).await
    }

    async fn run(&self, request: SendRequest) -> RunOutcome {
        self.emit(StatusEvent::info("Starting delivery...")).await;

        if request.start_delay_minutes > 0 {
            self.emit(StatusEvent::info(format!(
                "Sending starts in {} minute(s)...",
                request.start_delay_minutes
            )))
            .await;
            sleep(Duration::from_secs(
                request.start_delay_minutes.saturating_mul(60),
            ))
            .await;
        }

        let payload = MessagePayload::from_request(&request);

        let mut delivered = 0u32;
        let mut rejected = 0u32;
        let mut abort_reason = None;

        let mut attempt = 1u32;
        while attempt <= request.repeat_count {
            let outcome = match self
                .transport
                .deliver(&request.endpoint_url, &payload, request.attachment.as_ref())
                .await
            {
                Ok(response) => AttemptOutcome::classify(&response),
                Err(err) => AttemptOutcome::TransportFailed {
                    message: err.to_string(),
                },
            };

            match outcome {
                AttemptOutcome::Delivered => {
                    delivered += 1;
                    self.emit(StatusEvent::success(format!("Attempt {attempt}: delivered")))
                        .await;
                }
                AttemptOutcome::RateLimited { retry_after } => {
                    debug!(attempt, ?retry_after, "rate limited, backing off");
                    self.emit(StatusEvent::error(format!(
                        "Rate limited. Retrying attempt {attempt} in {:.1} second(s)...",
                        retry_after.as_secs_f64()
                    )))
                    .await;
                    sleep(retry_after).await;
                    // Same logical attempt goes out again.
                    continue;
                }
                AttemptOutcome::Rejected {
                    status,
                    body_excerpt,
                } => {
                    rejected += 1;
                    warn!(attempt, status, "attempt rejected by endpoint");
                    self.emit(StatusEvent::error(format!(
                        "Attempt {attempt}: failed (status {status}) - {body_excerpt}"
                    )))
                    .await;
                }
                AttemptOutcome::TransportFailed { message } => {
                    warn!(attempt, %message, "transport failure, aborting batch");
                    self.emit(StatusEvent::error(format!("Connection error: {message}")))
                        .await;
                    abort_reason = Some(message);
                    break;
                }
            }

            if attempt < request.repeat_count {
                sleep(INTER_ATTEMPT_DELAY).await;
            }
            attempt += 1;
        }

        self.emit(StatusEvent::info("All sends processed")).await;

        match abort_reason {
            Some(reason) => RunOutcome::Aborted {
                delivered,
                rejected,
                reason,
            },
            None => RunOutcome::Completed {
                delivered,
                rejected,
            },
        }
    }

    async fn emit(&self, event: StatusEvent) {
        self.status.publish(event).await;
    }
}
