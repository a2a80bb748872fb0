use tracing::{debug, error, info};

/// Side channel for deployment progress. Never influences control flow.
pub trait Logger: Send + Sync {
    fn error(&self, message: &str);

    fn log_verbose(&self, message: &str);

    fn info(&self, message: &str) {
        self.log_verbose(message);
    }
}

/// Forwards deployment messages to the `tracing` subscriber.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn log_verbose(&self, message: &str) {
        debug!("{}", message);
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }
}
