pub mod in_memory;
pub mod log;

pub use in_memory::InMemoryStatusSink;
pub use log::TracingStatusSink;
