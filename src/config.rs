use crate::domain::{
    errors::ValidationError,
    models::{Attachment, SendRequest, WEBHOOK_URL_PREFIX},
};

/// Raw values lifted off the input form, before any validation. Numeric
/// fields arrive as free text and are parsed leniently.
#[derive(Debug, Clone, Default)]
pub struct SendForm {
    pub webhook_url: String,
    pub webhook_username: String,
    pub message_content: String,
    pub send_count: String,
    pub start_delay_minutes: String,
    pub tts_enabled: bool,
    pub attachment: Option<Attachment>,
}

impl SendForm {
    /// Validates the form into an immutable [`SendRequest`].
    ///
    /// URL and content are mandatory; the URL must point at the webhook
    /// endpoint. Count and delay never fail: unparsable input falls back
    /// to 1 message and no delay.
    pub fn try_parse(self) -> Result<SendRequest, ValidationError> {
        let endpoint_url = self.webhook_url.trim().to_string();
        let content = self.message_content.trim().to_string();

        if endpoint_url.is_empty() || content.is_empty() {
            return Err(ValidationError::MissingFields);
        }
        if !endpoint_url.starts_with(WEBHOOK_URL_PREFIX) {
            return Err(ValidationError::InvalidEndpoint);
        }

        let display_name = Some(self.webhook_username.trim().to_string())
            .filter(|name| !name.is_empty());

        let repeat_count = self
            .send_count
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|count| *count >= 1)
            .unwrap_or(1);

        let start_delay_minutes = self
            .start_delay_minutes
            .trim()
            .parse::<u64>()
            .unwrap_or(0);

        Ok(SendRequest {
            endpoint_url,
            display_name,
            content,
            repeat_count,
            start_delay_minutes,
            tts: self.tts_enabled,
            attachment: self.attachment,
        })
    }
}
