pub mod files;
pub mod logger;
pub mod logging;

pub use logger::{Logger, TracingLogger};
