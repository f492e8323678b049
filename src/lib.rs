pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use application::services::guard::SendGuard;
pub use application::usecases::send_batch::{RunOutcome, SendBatchUseCase};
pub use config::SendForm;
pub use domain::errors::ValidationError;
pub use domain::models::SendRequest;
