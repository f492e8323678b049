pub mod messaging;
pub mod status;
