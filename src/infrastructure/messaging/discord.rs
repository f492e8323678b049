use std::sync::Arc;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use tracing::debug;

use crate::{
    application::services::transport::WebhookTransport,
    domain::models::{Attachment, MessagePayload, WebhookResponse},
};

/// Discord-compatible webhook transport. Posts the payload as JSON, or
/// as a multipart form with a `payload_json` field and a single `file`
/// part when an attachment rides along.
pub struct DiscordWebhookTransport {
    http: Client,
}

impl DiscordWebhookTransport {
    pub fn new() -> Arc<dyn WebhookTransport> {
        Arc::new(Self {
            http: Client::builder()
                .user_agent("webhook-sender/discord")
                .build()
                .expect("failed to build webhook client"),
        }) as Arc<dyn WebhookTransport>
    }
}

#[async_trait]
impl WebhookTransport for DiscordWebhookTransport {
    async fn deliver(
        &self,
        endpoint_url: &str,
        payload: &MessagePayload,
        attachment: Option<&Attachment>,
    ) -> anyhow::Result<WebhookResponse> {
        let request = match attachment {
            Some(file) => {
                let form = Form::new()
                    .text("payload_json", serde_json::to_string(payload)?)
                    .part(
                        "file",
                        Part::bytes(file.bytes.clone()).file_name(file.file_name.clone()),
                    );
                self.http.post(endpoint_url).multipart(form)
            }
            None => self.http.post(endpoint_url).json(payload),
        };

        let response = request.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!(status, "webhook endpoint responded");

        Ok(WebhookResponse { status, body })
    }
}
