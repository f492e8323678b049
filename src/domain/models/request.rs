pub const WEBHOOK_URL_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Sender label used when the form leaves the display name blank.
pub const DEFAULT_SENDER_NAME: &str = "Webhook Sender Tool";

/// A single file to upload alongside the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// A validated send operation. Fully determined before orchestration
/// begins; nothing here mutates while the batch is running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendRequest {
    pub endpoint_url: String,
    pub display_name: Option<String>,
    pub content: String,
    pub repeat_count: u32,
    pub start_delay_minutes: u64,
    pub tts: bool,
    pub attachment: Option<Attachment>,
}

impl SendRequest {
    pub fn sender_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(DEFAULT_SENDER_NAME)
    }
}
