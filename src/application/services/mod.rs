pub mod guard;
pub mod status;
pub mod transport;

pub use guard::{SendGuard, SendPermit};
pub use status::StatusSink;
pub use transport::WebhookTransport;
