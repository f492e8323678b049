use serde::{Deserialize, Serialize};

use super::request::SendRequest;

/// The wire shape the webhook endpoint accepts, either as the JSON body
/// or as the `payload_json` field of a multipart upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    pub content: String,
    pub username: String,
    pub tts: bool,
}

impl MessagePayload {
    pub fn from_request(request: &SendRequest) -> Self {
        Self {
            content: request.content.clone(),
            username: request.sender_name().to_string(),
            tts: request.tts,
        }
    }
}
