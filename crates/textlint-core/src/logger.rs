//! User-facing message sink.

/// Receives user-facing messages from configuration commands.
pub trait Logger: Send + Sync {
    /// Reports a failure.
    fn error(&self, message: &str);

    /// Reports progress or a result.
    fn log(&self, message: &str);
}

/// Forwards messages to `tracing` (`error` and `info` levels).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }

    fn log(&self, message: &str) {
        tracing::info!("{message}");
    }
}

/// Collects messages in memory.
#[derive(Debug, Default)]
pub struct MemoryLogger {
    errors: std::sync::Mutex<Vec<String>>,
    logs: std::sync::Mutex<Vec<String>>,
}

impl MemoryLogger {
    /// Creates an empty logger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the error messages received so far.
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }

    /// Returns the log messages received so far.
    #[must_use]
    pub fn logs(&self) -> Vec<String> {
        self.logs.lock().map(|logs| logs.clone()).unwrap_or_default()
    }
}

impl Logger for MemoryLogger {
    fn error(&self, message: &str) {
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(message.to_string());
        }
    }

    fn log(&self, message: &str) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.push(message.to_string());
        }
    }
}
