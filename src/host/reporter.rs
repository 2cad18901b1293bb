use tracing::error;

use crate::host::ErrorReporter;

/// Logs through `tracing` and exits the process
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn log_error(&self, message: &str) {
        error!("{message}");
    }

    fn exit_process(&self, code: i32) -> ! {
        std::process::exit(code)
    }
}
