pub mod discord;

pub use discord::DiscordWebhookTransport;
