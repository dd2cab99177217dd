/// Logger handle handed to the options resolver
///
/// The resolver only reports corrections it applied to user input, so the
/// surface is intentionally small. Implementations must be cheap to call.
pub trait Logger {
    /// Report an informational message
    fn info(&self, message: &str);

    /// Report a correction or suspicious value in the user's options
    fn warn(&self, message: &str);
}

/// Logger that forwards to the `tracing` macros
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{}", message);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::Logger;

    /// Logger that records every message for assertions
    #[derive(Debug, Default)]
    pub struct RecordingLogger {
        pub infos: Mutex<Vec<String>>,
        pub warnings: Mutex<Vec<String>>,
    }

    impl RecordingLogger {
        pub fn infos(&self) -> Vec<String> {
            self.infos.lock().unwrap().clone()
        }

        pub fn warnings(&self) -> Vec<String> {
            self.warnings.lock().unwrap().clone()
        }
    }

    impl Logger for RecordingLogger {
        fn info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn warn(&self, message: &str) {
            self.warnings.lock().unwrap().push(message.to_string());
        }
    }
}
