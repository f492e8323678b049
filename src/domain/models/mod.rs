pub mod outcome;
pub mod payload;
pub mod request;
pub mod status;

pub use outcome::{AttemptOutcome, WebhookResponse};
pub use payload::MessagePayload;
pub use request::{Attachment, SendRequest, DEFAULT_SENDER_NAME, WEBHOOK_URL_PREFIX};
pub use status::{Severity, StatusEvent};
