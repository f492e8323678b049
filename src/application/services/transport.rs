use async_trait::async_trait;

use crate::domain::models::{Attachment, MessagePayload, WebhookResponse};

/// One outbound POST to the webhook endpoint.
///
/// Implementations pick exactly one encoding per call: a multipart body
/// carrying `payload_json` plus a `file` part when an attachment is
/// given, a plain JSON body otherwise. An `Err` means the request never
/// produced an HTTP response (connection refused, DNS failure and the
/// like); every received response is returned as-is for classification.
#[async_trait]
pub trait WebhookTransport: Send + Sync {
    async fn deliver(
        &self,
        endpoint_url: &str,
        payload: &MessagePayload,
        attachment: Option<&Attachment>,
    ) -> anyhow::Result<WebhookResponse>;
}
