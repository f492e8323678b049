use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Webhook URL and message content are required")]
    MissingFields,
    #[error("The URL is not a valid Discord webhook URL")]
    InvalidEndpoint,
}
