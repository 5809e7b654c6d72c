use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// `Logger` port backed by `tracing`, tagging every event with the use-case scope.
pub struct TracingLogger {
    scope: &'static str,
}

impl TracingLogger {
    pub fn new(scope: &'static str) -> Self {
        Self { scope }
    }
}

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "users_api", scope = self.scope, "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "users_api", scope = self.scope, "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "users_api", scope = self.scope, "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "users_api", scope = self.scope, "{}", message);
    }
}
