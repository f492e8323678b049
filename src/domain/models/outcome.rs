use std::time::Duration;

use serde::Deserialize;

/// Wait applied on a 429 whose body carries no usable `retry_after`.
pub const DEFAULT_RETRY_AFTER: Duration = Duration::from_secs(5);

/// Longest slice of a rejection body surfaced to the user.
pub const BODY_EXCERPT_CHARS: usize = 50;

/// What came back from one POST to the webhook, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

/// Classification of a single delivery attempt. Consumed immediately to
/// pick the next action, never accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    Delivered,
    RateLimited { retry_after: Duration },
    Rejected { status: u16, body_excerpt: String },
    TransportFailed { message: String },
}

impl AttemptOutcome {
    pub fn classify(response: &WebhookResponse) -> Self {
        match response.status {
            204 => Self::Delivered,
            429 => Self::RateLimited {
                retry_after: parse_retry_after(&response.body),
            },
            status => Self::Rejected {
                status,
                body_excerpt: response.body.chars().take(BODY_EXCERPT_CHARS).collect(),
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct RateLimitBody {
    retry_after: Option<f64>,
}

/// The endpoint reports `retry_after` in milliseconds inside the 429
/// body. Anything absent, unparsable or non-positive falls back to the
/// fixed default.
fn parse_retry_after(body: &str) -> Duration {
    serde_json::from_str::<RateLimitBody>(body)
        .ok()
        .and_then(|parsed| parsed.retry_after)
        .filter(|millis| millis.is_finite() && *millis > 0.0)
        .map(|millis| Duration::from_secs_f64(millis / 1000.0))
        .unwrap_or(DEFAULT_RETRY_AFTER)
}
