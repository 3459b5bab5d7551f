pub mod subscriber;
pub mod tracing_logger;

pub use tracing_logger::TracingLogger;
